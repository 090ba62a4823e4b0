//! Static style and call-type catalogs served by the API.
//!
//! Both catalogs are fixed at compile time and immutable for the process
//! lifetime. The call-type catalog is derived from [`CallKind`] so the wire
//! enum and the catalog entries cannot drift apart.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// A named visual preset selectable in a generation request.
///
/// Presets are descriptive only: no renderer applies them, the id is simply
/// echoed through the stub generation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All visual presets, in catalog order.
pub const STYLES: &[Style] = &[
    Style {
        id: "telegram-ui",
        name: "Telegram UI",
        description: "Стандартный интерфейс Telegram",
    },
    Style {
        id: "telegram-dark",
        name: "Telegram Dark",
        description: "Темная тема Telegram",
    },
    Style {
        id: "telegram-light",
        name: "Telegram Light",
        description: "Светлая тема Telegram",
    },
    Style {
        id: "ios-style",
        name: "iOS Style",
        description: "В стиле iOS",
    },
    Style {
        id: "android-style",
        name: "Android Style",
        description: "В стиле Android",
    },
];

/// Style id applied when a generation request omits `style`.
pub const DEFAULT_STYLE: &str = "telegram-ui";

// ---------------------------------------------------------------------------
// Call kinds
// ---------------------------------------------------------------------------

/// Direction/outcome of one call-history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    Incoming,
    Outgoing,
    Missed,
}

impl CallKind {
    /// All call kinds, in catalog order.
    pub const ALL: [CallKind; 3] = [CallKind::Incoming, CallKind::Outgoing, CallKind::Missed];

    /// Stable string id used on the wire and in the catalog.
    pub fn id(self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
            Self::Missed => "missed",
        }
    }

    /// Human-readable label shown in the rendered call list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Incoming => "Входящий",
            Self::Outgoing => "Исходящий",
            Self::Missed => "Пропущенный",
        }
    }

    /// Accent colour the UI associates with this kind.
    pub fn color(self) -> &'static str {
        match self {
            Self::Incoming => "green",
            Self::Outgoing => "blue",
            Self::Missed => "red",
        }
    }
}

/// One entry of the call-type catalog endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallTypeInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// The full call-type catalog, derived from [`CallKind::ALL`].
pub fn call_types() -> Vec<CallTypeInfo> {
    CallKind::ALL
        .iter()
        .map(|kind| CallTypeInfo {
            id: kind.id(),
            name: kind.label(),
            color: kind.color(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
