//! Call-log screenshot description building.
//!
//! There is no rendering engine behind the generation endpoint. A request is
//! reduced to a short Russian-language description which is embedded both in
//! a placeholder-image URL and in the response message. The URL format,
//! including its unencoded spaces and Cyrillic text, is the published stub
//! contract and must not change until a real renderer exists.

use serde::{Deserialize, Serialize};

use crate::catalog::CallKind;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Request-level defaults
// ---------------------------------------------------------------------------

/// Default screenshot width in pixels (iPhone X portrait).
pub const DEFAULT_WIDTH: u32 = 375;
/// Default screenshot height in pixels.
pub const DEFAULT_HEIGHT: u32 = 812;
/// Default colour theme.
pub const DEFAULT_THEME: &str = "dark";
/// Default header title ("Recent").
pub const DEFAULT_HEADER_TITLE: &str = "Недавние";
/// Default status-bar clock text.
pub const DEFAULT_TIME_DISPLAY: &str = "14:38";
/// Default status-bar battery percentage.
pub const DEFAULT_BATTERY_LEVEL: u8 = 50;

// ---------------------------------------------------------------------------
// Placeholder service
// ---------------------------------------------------------------------------

/// Third-party service that substitutes for the real renderer.
pub const PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com";
/// Placeholder background colour (Telegram dark surface).
pub const PLACEHOLDER_BACKGROUND: &str = "2C2C2E";
/// Placeholder text colour.
pub const PLACEHOLDER_FOREGROUND: &str = "FFFFFF";

// ---------------------------------------------------------------------------
// Call entries
// ---------------------------------------------------------------------------

/// One row of the caller-supplied call history.
///
/// Rows are taken as-is: no uniqueness or ordering constraint is enforced
/// beyond the order in which the caller sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CallKind,
    pub time: String,
    /// Repeat count rendered after the name, e.g. two missed calls as "(2)".
    pub count: Option<u32>,
}

// ---------------------------------------------------------------------------
// Description text
// ---------------------------------------------------------------------------

/// Call-count fragment: `"N вызовов"` for a non-empty list, `"без вызовов"`
/// otherwise.
pub fn call_count_text(call_count: usize) -> String {
    if call_count > 0 {
        format!("{call_count} вызовов")
    } else {
        "без вызовов".to_string()
    }
}

/// Theme fragment: `"тема: {theme}"`.
pub fn theme_text(theme: &str) -> String {
    format!("тема: {theme}")
}

/// Build the placeholder-image URL embedding dimensions and description.
///
/// The `text` query parameter is deliberately left unencoded; that is the
/// URL-embedding pattern the frontend consumes.
pub fn placeholder_url(width: u32, height: u32, theme: &str, call_count: usize) -> String {
    let text = format!(
        "Telegram+Calls+{width}x{height}+{}+{}",
        theme_text(theme),
        call_count_text(call_count)
    );
    format!(
        "{PLACEHOLDER_BASE_URL}/{width}x{height}/{PLACEHOLDER_BACKGROUND}/{PLACEHOLDER_FOREGROUND}?text={text}"
    )
}

/// Build the response message echoing call count, theme, and header title.
pub fn summary_message(call_count: usize, theme: &str, header_title: &str) -> String {
    format!(
        "Скриншот сгенерирован: {}, {}, заголовок: {header_title}",
        call_count_text(call_count),
        theme_text(theme)
    )
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate requested dimensions against the configured maxima.
///
/// Out-of-range dimensions are rejected rather than clamped, so the error
/// message can name the configured limits.
pub fn validate_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(), CoreError> {
    if width == 0 || height == 0 {
        return Err(CoreError::Validation(
            "width and height must be positive".to_string(),
        ));
    }
    if width > max_width || height > max_height {
        return Err(CoreError::Validation(format!(
            "Requested size {width}x{height} exceeds the maximum {max_width}x{max_height}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
