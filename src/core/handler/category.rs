// src/core/handler/category.rs

//! The dispatch table from command action to handler category.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The coarse-grained capability group a command action routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum HandlerCategory {
    Help,
    Show,
    Search,
    Player,
    Playlist,
    Status,
}

lazy_static! {
    static ref ACTION_TABLE: HashMap<&'static str, HandlerCategory> = HandlerCategory::iter()
        .flat_map(|category| category.actions().iter().map(move |action| (*action, category)))
        .collect();
}

impl HandlerCategory {
    /// Looks up the category for an action. Matching is exact and case-sensitive.
    pub fn for_action(action: &str) -> Option<Self> {
        ACTION_TABLE.get(action).copied()
    }

    /// The actions served by this category.
    pub fn actions(self) -> &'static [&'static str] {
        match self {
            HandlerCategory::Help => &["help"],
            HandlerCategory::Show => &["show"],
            HandlerCategory::Search => &["search"],
            HandlerCategory::Player => &["play", "pause", "resume", "stop", "toggle"],
            HandlerCategory::Playlist => &[
                "add", "remove", "clear", "list", "next", "previous", "set", "create",
            ],
            HandlerCategory::Status => &["status"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandlerCategory::Help => "help",
            HandlerCategory::Show => "show",
            HandlerCategory::Search => "search",
            HandlerCategory::Player => "player",
            HandlerCategory::Playlist => "playlist",
            HandlerCategory::Status => "status",
        }
    }
}

impl fmt::Display for HandlerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
