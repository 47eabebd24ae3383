//! Menu state types

use serde::{Deserialize, Serialize};

/// Which canned sub-menu the conversation is currently positioned in.
///
/// Exactly one value per session. Mutated only by the dialogue engine;
/// transitions are total, so there is no stuck state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Top-level conversation, no menu active
    #[default]
    Root,

    /// Browsing the accounting services menu
    Accounting,

    /// Browsing the financial services menu
    Financial,

    /// Browsing the contact-an-agent options
    Agent,
}

impl MenuState {
    /// Stable label for logging
    pub fn label(self) -> &'static str {
        match self {
            MenuState::Root => "root",
            MenuState::Accounting => "accounting",
            MenuState::Financial => "financial",
            MenuState::Agent => "agent",
        }
    }
}
