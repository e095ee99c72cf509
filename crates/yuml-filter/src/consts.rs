//! Internal constants for block scanning and rendering.

/// Default yUML service URL.
pub const DEFAULT_SERVICE_URL: &str = "http://yuml.me";

/// Token that opens a block. Only recognized at the start of a line.
pub(crate) const START_TOKEN: &str = "[yuml";

/// Token that closes a block. Only recognized at the start of a line.
pub(crate) const END_TOKEN: &str = "]";

/// Body line that switches from nodes to the links section.
pub(crate) const LINKS_SEPARATOR: &str = "#";
