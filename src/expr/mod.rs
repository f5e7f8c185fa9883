//! The color-expression interpreter.
//!
//! Two markup dialects exist, each with its own entry point and its own
//! validation rules; pick one per call site, they do not mix:
//!
//! - [`expand_positional`]: `@( ... )` spans matched in order of appearance
//!   against an externally supplied style list. Span count is validated
//!   against the list length.
//! - [`expand_tokens`]: self-contained tokens (`y|...|!`, `+g|...|+`,
//!   `i|...|>`) that select styles from the fixed registry, no external
//!   list. Unterminated and unknown tokens are reported.
//!
//! Both scanners iterate by codepoint and either fully expand the input or
//! fail without producing output.

mod error;
mod positional;
mod token;

pub use error::ExpandError;
pub use positional::expand_positional;
pub use token::expand_tokens;
