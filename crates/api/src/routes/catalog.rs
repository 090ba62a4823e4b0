//! Catalog endpoints: the fixed style and call-type lists the frontend uses
//! to populate its pickers.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use photogen_core::catalog::{self, CallTypeInfo, Style};

use crate::state::AppState;

/// Payload of `GET /styles`.
#[derive(Serialize)]
pub struct StylesResponse {
    pub styles: &'static [Style],
}

/// Payload of `GET /call-types`.
#[derive(Serialize)]
pub struct CallTypesResponse {
    pub call_types: Vec<CallTypeInfo>,
}

/// GET /styles -- all visual presets.
async fn styles() -> Json<StylesResponse> {
    Json(StylesResponse {
        styles: catalog::STYLES,
    })
}

/// GET /call-types -- all call directions with their accent colours.
async fn call_types() -> Json<CallTypesResponse> {
    Json(CallTypesResponse {
        call_types: catalog::call_types(),
    })
}

/// Mount the catalog routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/styles", get(styles))
        .route("/call-types", get(call_types))
}
