// Public API - what other modules can use
pub use cache::{CacheError, FileCache, InMemoryCache, LocalCache};
pub use handlers::{get_email, set_email};
pub use service::{SessionService, EMAIL_KEY};

// Internal modules
mod cache;
mod handlers;
mod service;
pub mod types;
