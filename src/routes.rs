use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{game, session, setup, shared::AppState, stats};

/// Every endpoint the front-end talks to
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/email", get(session::get_email).put(session::set_email))
        .route("/players", get(setup::list_players))
        .route("/games", get(stats::handlers::list_games))
        .route("/games/sync", post(stats::handlers::sync_games))
        .route("/leaderboard", get(stats::handlers::leaderboard))
        .route("/fun-facts", get(stats::handlers::fun_facts))
        .route(
            "/play",
            get(game::current_game)
                .post(game::start_game)
                .delete(game::abandon_game),
        )
        .route("/play/reverse", post(game::reverse))
        .route("/play/uno", post(game::declare_uno))
        .route("/play/finish", post(game::finish_game))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
