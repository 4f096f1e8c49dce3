use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub players: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeclareUnoRequest {
    pub player: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinishGameRequest {
    pub winner: String,
}
