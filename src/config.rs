//! Process-wide rendering defaults.
//!
//! These are immutable configuration values resolved at call time; every
//! converter instance may override them independently through its option
//! records.

/// Font stack applied when the caller does not provide one.
pub const DEFAULT_FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Oxygen, Ubuntu, Cantarell, \"Fira Sans\", \"Droid Sans\", \"Helvetica Neue\", sans-serif";

/// Base font size applied when the caller does not provide one.
pub const DEFAULT_FONT_SIZE: &str = "16px";

/// Numeric form of [`DEFAULT_FONT_SIZE`], used as the coercion fallback for
/// malformed size strings.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// Primary accent color applied when the caller does not provide one.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3f51b5";

/// Reading speed used to estimate reading time from the visible word count.
pub(crate) const WORDS_PER_MINUTE: f32 = 225.0;
