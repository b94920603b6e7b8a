//! HTTP request handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use folio_core::knowledge::{Topic, find_project};
use folio_core::llm::FailoverController;
use serde_json::json;
use std::sync::Arc;

use super::page::INDEX_HTML;
use super::state::AppState;
use super::types::{
    AskRequest, AskResponse, ErrorResponse, HealthResponse, ProjectInfoResponse,
    ProjectsResponse, StatusResponse, SwitchResponse,
};

const NOT_INITIALIZED: &str =
    "Chatbot not initialized. Please check your API key configuration.";

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

fn controller(state: &AppState) -> Result<&Arc<FailoverController>, Response> {
    state
        .controller()
        .ok_or_else(|| error(StatusCode::INTERNAL_SERVER_ERROR, NOT_INITIALIZED))
}

/// Ask a canned topic and wrap the answer under `key`
async fn topic_response(state: &AppState, topic: Topic, key: &str) -> Response {
    let controller = match controller(state) {
        Ok(c) => c,
        Err(response) => return response,
    };

    match controller.ask_topic(&topic).await {
        Ok(answer) => {
            (StatusCode::OK, Json(json!({ key: answer, "success": true }))).into_response()
        }
        Err(e) => error(StatusCode::OK, e.to_string()),
    }
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            message: "Portfolio assistant API is running".to_string(),
            chatbot_initialized: state.controller().is_some(),
        }),
    )
}

/// POST /api/ask
pub async fn ask(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let controller = match controller(&state) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let question = match body {
        Ok(Json(AskRequest {
            question: Some(question),
        })) => question.trim().to_string(),
        Ok(_) | Err(_) => {
            return error(
                StatusCode::BAD_REQUEST,
                "Missing 'question' field in request body",
            );
        }
    };

    if question.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Question cannot be empty");
    }

    match controller.ask(&question).await {
        Ok(response) => (
            StatusCode::OK,
            Json(AskResponse {
                question,
                response,
                success: true,
                model_status: controller.status().summary(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(kind = %e.kind(), provider = %e.provider().name, "Ask failed");
            error(StatusCode::OK, e.to_string())
        }
    }
}

/// GET /api/projects
pub async fn list_projects(State(state): State<Arc<AppState>>) -> Response {
    let controller = match controller(&state) {
        Ok(c) => c,
        Err(response) => return response,
    };

    match controller.ask_topic(&Topic::ListProjects).await {
        Ok(projects) => (
            StatusCode::OK,
            Json(ProjectsResponse {
                projects,
                project_names: state.projects().to_vec(),
                success: true,
            }),
        )
            .into_response(),
        Err(e) => error(StatusCode::OK, e.to_string()),
    }
}

/// GET /api/projects/{name}
///
/// Names matching a known project case-insensitively are canonicalized before
/// the question is asked.
pub async fn project_info(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    let controller = match controller(&state) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let project = find_project(state.projects(), &name)
        .map(str::to_string)
        .unwrap_or(name);

    match controller
        .ask_topic(&Topic::ProjectInfo(project.clone()))
        .await
    {
        Ok(project_info) => (
            StatusCode::OK,
            Json(ProjectInfoResponse {
                project_name: project,
                project_info,
                success: true,
            }),
        )
            .into_response(),
        Err(e) => error(StatusCode::OK, e.to_string()),
    }
}

/// GET /api/skills
pub async fn skills(State(state): State<Arc<AppState>>) -> Response {
    topic_response(&state, Topic::SkillsSummary, "skills").await
}

/// GET /api/background
pub async fn background(State(state): State<Arc<AppState>>) -> Response {
    topic_response(&state, Topic::Background, "background").await
}

/// GET /api/career-advice
pub async fn career_advice(State(state): State<Arc<AppState>>) -> Response {
    topic_response(&state, Topic::CareerAdvice, "career_advice").await
}

/// GET /api/contact
pub async fn contact(State(state): State<Arc<AppState>>) -> Response {
    topic_response(&state, Topic::Contact, "contact").await
}

/// GET /api/tech-recommendations
pub async fn tech_recommendations(State(state): State<Arc<AppState>>) -> Response {
    topic_response(&state, Topic::TechRecommendation, "recommendations").await
}

/// GET /api/project-recommendations
pub async fn project_recommendations(State(state): State<Arc<AppState>>) -> Response {
    topic_response(&state, Topic::ProjectRecommendations, "recommendations").await
}

/// GET /api/status
pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    let controller = match controller(&state) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let snapshot = controller.status();
    (
        StatusCode::OK,
        Json(StatusResponse {
            model_status: snapshot.summary(),
            details: snapshot.into(),
            success: true,
        }),
    )
        .into_response()
}

/// POST /api/switch-model
pub async fn switch_model(State(state): State<Arc<AppState>>) -> Response {
    let controller = match controller(&state) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let original = &controller.original().model_id;
    let switched = controller.force_revert();
    let switch_result = if switched {
        format!("Forced switch back to {}", original)
    } else {
        format!("Already using original model: {}", original)
    };

    (
        StatusCode::OK,
        Json(SwitchResponse {
            switch_result,
            switched,
            success: true,
        }),
    )
        .into_response()
}

/// GET /api/docs
pub async fn docs(headers: HeaderMap) -> impl IntoResponse {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:7860");
    let base_url = format!("http://{}/api", host);

    let endpoint = |method: &str, url: &str, description: &str| {
        json!({ "method": method, "url": url, "description": description })
    };

    Json(json!({
        "title": "Portfolio Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "RESTful API for the portfolio assistant",
        "base_url": base_url,
        "cors": "Enabled for all origins",
        "endpoints": {
            "health": endpoint("GET", "/api/health", "Health check endpoint"),
            "ask": {
                "method": "POST",
                "url": "/api/ask",
                "description": "Ask a question to the assistant",
                "body": { "question": "Your question here" }
            },
            "projects": endpoint("GET", "/api/projects", "Get all projects"),
            "specific_project": endpoint(
                "GET",
                "/api/projects/{project_name}",
                "Get information about a specific project"
            ),
            "skills": endpoint("GET", "/api/skills", "Get technical skills summary"),
            "background": endpoint("GET", "/api/background", "Get background information"),
            "career_advice": endpoint("GET", "/api/career-advice", "Get career advice"),
            "contact": endpoint("GET", "/api/contact", "Get contact information"),
            "tech_recommendations": endpoint(
                "GET",
                "/api/tech-recommendations",
                "Get technology recommendations"
            ),
            "project_recommendations": endpoint(
                "GET",
                "/api/project-recommendations",
                "Get suggestions for next projects"
            ),
            "status": endpoint("GET", "/api/status", "Get current model status"),
            "switch_model": endpoint(
                "POST",
                "/api/switch-model",
                "Force switch back to original model"
            )
        },
        "example_usage": {
            "curl_ask": format!(
                "curl -X POST {}/ask -H \"Content-Type: application/json\" -d '{{\"question\": \"Tell me about your projects\"}}'",
                base_url
            ),
            "curl_projects": format!("curl -X GET {}/projects", base_url),
            "curl_skills": format!("curl -X GET {}/skills", base_url)
        }
    }))
}
