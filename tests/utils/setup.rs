use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use unobuddy::{
    cloud::{GameStore, InMemoryGameStore},
    router, AppState, GameResult, InMemoryCache, InMemoryGameResultRepository, PlayService,
    SessionService, StatsService,
};

use super::mocks::{FailingGameStore, MockClock};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub repository: Arc<InMemoryGameResultRepository>,
    pub store: Arc<InMemoryGameStore>,
    pub session_service: Arc<SessionService>,
    pub clock: MockClock,
}

pub struct TestSetupBuilder {
    email: Option<String>,
    games: Vec<GameResult>,
    store_override: Option<Arc<dyn GameStore>>,
    start: DateTime<Utc>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            email: None,
            games: vec![],
            store_override: None,
            start: Utc.with_ymd_and_hms(2024, 9, 23, 18, 0, 0).unwrap(),
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_games(mut self, games: Vec<GameResult>) -> Self {
        self.games = games;
        self
    }

    pub fn with_failing_store(self) -> Self {
        self.with_store(Arc::new(FailingGameStore))
    }

    /// Replaces the in-memory store the services save to and load from
    pub fn with_store(mut self, store: Arc<dyn GameStore>) -> Self {
        self.store_override = Some(store);
        self
    }

    pub async fn build(self) -> TestSetup {
        let clock = MockClock::new(self.start);
        let repository = Arc::new(InMemoryGameResultRepository::with_games(self.games));
        let store = Arc::new(InMemoryGameStore::new());
        let active_store: Arc<dyn GameStore> = match self.store_override {
            Some(custom) => custom,
            None => store.clone(),
        };

        let stats_service = StatsService::builder(repository.clone())
            .with_store(active_store)
            .with_clock(Arc::new(clock.clone()))
            .build();

        let session_service = Arc::new(SessionService::new(Arc::new(InMemoryCache::new())));
        if let Some(email) = &self.email {
            session_service.set_email(email).await.unwrap();
        }

        let app_state = AppState::new(
            Arc::new(stats_service),
            Arc::new(PlayService::new(Arc::new(clock.clone()))),
            session_service.clone(),
        );

        TestSetup {
            app: router(app_state),
            repository,
            store,
            session_service,
            clock,
        }
    }
}
