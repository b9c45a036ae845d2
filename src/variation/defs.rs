//! Labels with structural meaning for coordination, and defaults.

/// Label of a noun phrase, the permutable unit of a coordinate group
pub const NOUN_PHRASE: &str = "NP";

/// Labels separating the noun phrases of a coordinate group
/// (comma, coordinating conjunction)
pub const SEPARATORS: [&str; 2] = [",", "CC"];

/// Number of variations produced when no limit is given
pub const DEFAULT_LIMIT: usize = 20;
