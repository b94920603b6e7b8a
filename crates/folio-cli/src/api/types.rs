//! Request and response bodies

use folio_core::llm::{StatusSnapshot, SwitchEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub chatbot_initialized: bool,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub response: String,
    pub success: bool,
    /// Human-readable controller status after the call
    pub model_status: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: String,
    pub project_names: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ProjectInfoResponse {
    pub project_name: String,
    pub project_info: String,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub model_status: String,
    pub details: StatusDetails,
    pub success: bool,
}

/// Structured form of a [`StatusSnapshot`]
#[derive(Debug, Serialize)]
pub struct StatusDetails {
    pub current_provider: String,
    pub current_model: String,
    pub original_provider: String,
    pub original_model: String,
    pub switched: bool,
    pub elapsed_since_switch_secs: Option<u64>,
    pub remaining_cooldown_secs: Option<u64>,
    pub cooldown_secs: u64,
    pub history: Vec<SwitchEvent>,
}

impl From<StatusSnapshot> for StatusDetails {
    fn from(snapshot: StatusSnapshot) -> Self {
        Self {
            switched: snapshot.is_switched(),
            current_provider: snapshot.current.name,
            current_model: snapshot.current.model_id,
            original_provider: snapshot.original.name,
            original_model: snapshot.original.model_id,
            elapsed_since_switch_secs: snapshot.elapsed_since_switch.map(|d| d.as_secs()),
            remaining_cooldown_secs: snapshot.remaining_cooldown.map(|d| d.as_secs()),
            cooldown_secs: snapshot.cooldown.as_secs(),
            history: snapshot.history,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SwitchResponse {
    pub switch_result: String,
    pub switched: bool,
    pub success: bool,
}
