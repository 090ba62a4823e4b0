//! The screenshot generation endpoint.
//!
//! Generation is a stub: no image is rendered and nothing is written to the
//! configured storage directories. The request is validated, summarised, and
//! answered with a placeholder-image URL embedding that summary.

use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use photogen_core::catalog::DEFAULT_STYLE;
use photogen_core::screenshot::{self, CallEntry};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /generate`.
///
/// Field names follow the frontend's camelCase convention. Every field
/// except `prompt` has a default, so the minimal request is just a prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_header_title")]
    pub header_title: String,
    #[serde(default = "default_time_display")]
    pub time_display: String,
    #[serde(default = "default_battery_level")]
    pub battery_level: u8,
    #[serde(default = "default_true")]
    pub show_search: bool,
    #[serde(default)]
    pub calls: Vec<CallEntry>,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_width() -> u32 {
    screenshot::DEFAULT_WIDTH
}

fn default_height() -> u32 {
    screenshot::DEFAULT_HEIGHT
}

fn default_theme() -> String {
    screenshot::DEFAULT_THEME.to_string()
}

fn default_header_title() -> String {
    screenshot::DEFAULT_HEADER_TITLE.to_string()
}

fn default_time_display() -> String {
    screenshot::DEFAULT_TIME_DISPLAY.to_string()
}

fn default_battery_level() -> u8 {
    screenshot::DEFAULT_BATTERY_LEVEL
}

fn default_true() -> bool {
    true
}

/// Response body for `POST /generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub image_url: Option<String>,
    pub message: String,
}

/// POST /generate -- describe the requested call-log screenshot.
///
/// Dimensions are checked against the configured maxima; everything else is
/// taken as sent. `prompt`, `style`, `timeDisplay`, `batteryLevel`, and
/// `showSearch` are accepted for the future renderer but do not influence
/// the stub output.
async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    screenshot::validate_dimensions(
        req.width,
        req.height,
        state.config.max_image_width,
        state.config.max_image_height,
    )?;

    let image_url = screenshot::placeholder_url(req.width, req.height, &req.theme, req.calls.len());
    let message = screenshot::summary_message(req.calls.len(), &req.theme, &req.header_title);

    tracing::info!(
        width = req.width,
        height = req.height,
        calls = req.calls.len(),
        theme = %req.theme,
        "Built screenshot description"
    );

    Ok(Json(GenerateResponse {
        success: true,
        image_url: Some(image_url),
        message,
    }))
}

/// Mount the generation route.
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}
