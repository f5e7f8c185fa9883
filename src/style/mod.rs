//! Composable ANSI styles.
//!
//! This module provides the styling primitives:
//!
//! - [`Style`]: an immutable pair of escape fragments (open + close)
//! - named constants for every supported color, background and attribute
//!   (see the associated constants on [`Style`])
//! - [`StyleId`]: the closed enumeration of named styles
//! - [`wrap`]: applies a list of styles around a piece of text
//!
//! Styles compose: attribute combinators ([`Style::bold`], [`Style::dim`],
//! ...) layer an attribute around an existing style, and [`Style::combine`]
//! nests one style inside another. Color fragments close back to the
//! terminal's *default* foreground/background (not a full reset), so a color
//! does not clobber sibling styling; attribute fragments close with a full
//! SGR reset.

mod named;
pub(crate) mod registry;

pub use registry::StyleId;

use std::borrow::Cow;

/// Full SGR reset, emitted by attribute `close` fragments.
pub(crate) const RESET: &str = "\x1b[0m";

/// An immutable styling value: the escape bytes emitted before (`open`) and
/// after (`close`) a piece of text.
///
/// Two styles with identical fragments are interchangeable (`PartialEq` is
/// structural). Composition never mutates: every combinator returns a new
/// value.
///
/// # Example
///
/// ```rust
/// use tinct::{wrap, Style};
///
/// let warning = Style::YELLOW.bold();
/// let line = wrap("disk almost full", &[warning]);
/// assert!(line.contains("disk almost full"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl Style {
    /// Builds a style from fixed fragments. Used by the named constants.
    pub(crate) const fn from_static(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// The bytes emitted before the styled text.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The bytes emitted after the styled text.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// An OSC-8 terminal hyperlink pointing at `url`.
    ///
    /// The styled text becomes the link label. Unlike the named styles this
    /// is parameterized, so it is a constructor rather than a constant.
    pub fn hyperlink(url: &str) -> Self {
        Self {
            open: Cow::Owned(format!("\x1b]8;;{url}\x1b\\")),
            close: Cow::Borrowed("\x1b]8;;\x1b\\"),
        }
    }

    /// Nests `inner` inside `self`: the result opens with `self`'s fragment
    /// first and closes with it last, so `inner`'s reset is emitted before
    /// `self`'s.
    pub fn combine(&self, inner: &Style) -> Style {
        Style {
            open: Cow::Owned(format!("{}{}", self.open, inner.open)),
            close: Cow::Owned(format!("{}{}", inner.close, self.close)),
        }
    }

    /// Layers the dim attribute around this style.
    pub fn dim(&self) -> Style {
        Style::DIM.combine(self)
    }

    /// Layers the bold attribute around this style.
    pub fn bold(&self) -> Style {
        Style::BOLD.combine(self)
    }

    /// Layers the italic attribute around this style.
    pub fn italic(&self) -> Style {
        Style::ITALIC.combine(self)
    }

    /// Layers the underline attribute around this style.
    pub fn underline(&self) -> Style {
        Style::UNDERLINE.combine(self)
    }

    /// Layers the strikethrough attribute around this style.
    pub fn strike(&self) -> Style {
        Style::STRIKE.combine(self)
    }
}

/// Wraps `text` with every style in `styles`, later-listed styles outermost.
///
/// With an empty style list the input is returned unchanged. Escapes are
/// composed, never deduplicated: wrapping twice nests twice.
///
/// # Example
///
/// ```rust
/// use tinct::{wrap, Style};
///
/// let s = wrap("Yes", &[Style::GREEN, Style::BG_WHITE]);
/// assert!(s.starts_with("\x1b[107m\x1b[32m"));
/// assert!(s.ends_with("\x1b[39m\x1b[49m"));
/// ```
pub fn wrap(text: &str, styles: &[Style]) -> String {
    let mut output = text.to_string();
    for style in styles {
        output = format!("{}{}{}", style.open(), output, style.close());
    }
    output
}
