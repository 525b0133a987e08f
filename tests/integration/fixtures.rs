// tests/integration/fixtures.rs

//! Common test fixtures shared by the integration tests.

/// The banner a default-configured server sends on connect.
pub const GREETING: &str = "OK feeluown 1.0.0\n";

/// Provider ids registered in most test libraries.
pub const PROVIDERS: &[&str] = &["local", "netease"];

/// Identifiers every test provider can load.
pub const KNOWN_IDS: &[&str] = &["1", "42", "abc_123"];

/// Every action in the dispatch table.
pub const ALL_ACTIONS: &[&str] = &[
    "help", "show", "search", "play", "pause", "resume", "stop", "toggle", "add", "remove",
    "clear", "list", "next", "previous", "set", "create", "status",
];

/// Common command lines and the header the server echoes for them.
pub mod lines {
    pub const STATUS: &str = "status\n";
    pub const SET_VOLUME: &str = "set volume=100\n";
    pub const SET_VOLUME_ACK: &str = "ACK set volume=100\nOK\n";
    pub const SPACED_SEARCH: &str = "  search   hello    world  \n";
    pub const SPACED_SEARCH_ACK: &str = "ACK search hello world\nOK\n";
}
