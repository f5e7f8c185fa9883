//! Terminal text styling with composable ANSI styles and inline color
//! expressions.
//!
//! tinct wraps text in ANSI escape sequences: foreground and background
//! colors, bright variants, text attributes (bold, dim, italic, underline,
//! strikethrough) and OSC-8 hyperlinks. Styles are immutable `(open, close)`
//! fragment pairs drawn from a fixed table, and they compose.
//!
//! # Applying styles directly
//!
//! ```rust
//! use tinct::{wrap, Style};
//!
//! let ok = wrap("tests passed", &[Style::GREEN]);
//! let loud = wrap("tests passed", &[Style::GREEN.bold(), Style::BG_BLACK]);
//! # assert!(ok.starts_with("\x1b[32m"));
//! # assert!(loud.contains("tests passed"));
//! ```
//!
//! # Color expressions
//!
//! Styles can also be named inside the text itself. Positional mode wraps
//! `@( ... )` spans with styles supplied alongside the template, in order of
//! appearance:
//!
//! ```rust
//! use tinct::{expand_positional, Style};
//!
//! let out = expand_positional("@(Hello), @(World)!", &[Style::RED, Style::BLUE]).unwrap();
//! assert_eq!(out, "\x1b[31mHello\x1b[39m, \x1b[34mWorld\x1b[39m!");
//! ```
//!
//! Token mode needs no style list; the markup selects the style:
//!
//! ```rust
//! use tinct::expand_tokens;
//!
//! let out = expand_tokens("y|Welcome|!, to the world of i|daemons|> !!!").unwrap();
//! assert!(out.starts_with("\x1b[33m"));
//! ```
//!
//! Both interpreters validate their input and return [`ExpandError`] instead
//! of producing half-expanded output.
//!
//! # Output helpers
//!
//! [`Segment`] and [`palette`] build multi-part styled lines, [`styler`] and
//! [`swatch`] partially apply a style set, and the `*_styled` functions push
//! styled text to stdout or the `log` facade.

pub mod expr;
pub mod output;
pub mod style;

pub use expr::{expand_positional, expand_tokens, ExpandError};
pub use output::{log_styled, palette, print_styled, println_styled, styler, swatch, Segment};
pub use style::{wrap, Style, StyleId};
