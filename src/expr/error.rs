//! Expression interpretation errors.

use thiserror::Error;

/// Error returned when expanding a color expression fails.
///
/// Expansion is atomic: on error no partially expanded output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The number of `@(` spans does not match the number of supplied styles.
    #[error("expression has {expected} span(s) but {actual} style(s) were supplied")]
    StyleCountMismatch { expected: usize, actual: usize },

    /// A `@(` span was never closed before the end of the input.
    #[error("a span opened with '@(' is never closed")]
    UnterminatedSpan,

    /// A style token was opened but its terminator never appears.
    #[error("token '{token}' is never terminated")]
    UnterminatedToken { token: String },

    /// A sigiled token does not name any style in the fixed table.
    #[error("unknown style token '{token}'")]
    UnknownStyleToken { token: String },
}
