//! Constants for well-known URIs used throughout the A2A protocol.

/// The well-known path where agents serve their card.
pub const AGENT_CARD_WELL_KNOWN_PATH: &str = "/.well-known/agent.json";

/// The default RPC URL path.
pub const DEFAULT_RPC_URL: &str = "/";
