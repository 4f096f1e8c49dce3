use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EmailResponse {
    pub email: Option<String>,
}
