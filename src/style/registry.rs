//! The closed enumeration of named styles and their markup tokens.
//!
//! [`StyleId`] enumerates every entry of the fixed style table. Lookup is
//! total: every id resolves to a [`Style`], and ids that participate in
//! token-mode expressions expose a short markup spelling via
//! [`StyleId::token`]. The table is assembled once and never mutated.
//!
//! # Token spellings
//!
//! | Category | Spelling | Example |
//! |----------|----------|---------|
//! | Foreground | one letter (`k r g y b m c w`) | `r\|error\|!` |
//! | Background | `+` plus the foreground letter (`+lg` for light grey) | `+g\|ok\|+` |
//! | Bright foreground | `*` plus the foreground letter | `*b\|info\|!` |
//! | Attribute | `i` dim, `h` bold, `t` italic, `u` underline, `x` strike | `i\|faint\|>` |

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Style;

/// Which reset a token-mode terminator pairs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Closed by `|!` (default foreground). Bright colors live here too.
    Foreground,
    /// Closed by `|+` (default background).
    Background,
    /// Closed by `|>` (full reset).
    Attribute,
}

/// Identifier for one entry of the fixed style table.
///
/// The set of valid names is closed: constructing an unknown style is a
/// compile-time impossibility, so [`StyleId::style`] is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    Normal,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgLightGrey,
    BgWhite,
    Dim,
    Bold,
    Italic,
    Underline,
    Strike,
}

impl StyleId {
    /// Every id, in table order.
    pub const ALL: [StyleId; 31] = [
        StyleId::Normal,
        StyleId::Black,
        StyleId::Red,
        StyleId::Green,
        StyleId::Yellow,
        StyleId::Blue,
        StyleId::Magenta,
        StyleId::Cyan,
        StyleId::White,
        StyleId::BrightBlack,
        StyleId::BrightRed,
        StyleId::BrightGreen,
        StyleId::BrightYellow,
        StyleId::BrightBlue,
        StyleId::BrightMagenta,
        StyleId::BrightCyan,
        StyleId::BrightWhite,
        StyleId::BgBlack,
        StyleId::BgRed,
        StyleId::BgGreen,
        StyleId::BgYellow,
        StyleId::BgBlue,
        StyleId::BgMagenta,
        StyleId::BgCyan,
        StyleId::BgLightGrey,
        StyleId::BgWhite,
        StyleId::Dim,
        StyleId::Bold,
        StyleId::Italic,
        StyleId::Underline,
        StyleId::Strike,
    ];

    /// Resolves this id to its style. Total over the enumeration.
    pub fn style(self) -> Style {
        match self {
            StyleId::Normal => Style::NORMAL,
            StyleId::Black => Style::BLACK,
            StyleId::Red => Style::RED,
            StyleId::Green => Style::GREEN,
            StyleId::Yellow => Style::YELLOW,
            StyleId::Blue => Style::BLUE,
            StyleId::Magenta => Style::MAGENTA,
            StyleId::Cyan => Style::CYAN,
            StyleId::White => Style::WHITE,
            StyleId::BrightBlack => Style::BRIGHT_BLACK,
            StyleId::BrightRed => Style::BRIGHT_RED,
            StyleId::BrightGreen => Style::BRIGHT_GREEN,
            StyleId::BrightYellow => Style::BRIGHT_YELLOW,
            StyleId::BrightBlue => Style::BRIGHT_BLUE,
            StyleId::BrightMagenta => Style::BRIGHT_MAGENTA,
            StyleId::BrightCyan => Style::BRIGHT_CYAN,
            StyleId::BrightWhite => Style::BRIGHT_WHITE,
            StyleId::BgBlack => Style::BG_BLACK,
            StyleId::BgRed => Style::BG_RED,
            StyleId::BgGreen => Style::BG_GREEN,
            StyleId::BgYellow => Style::BG_YELLOW,
            StyleId::BgBlue => Style::BG_BLUE,
            StyleId::BgMagenta => Style::BG_MAGENTA,
            StyleId::BgCyan => Style::BG_CYAN,
            StyleId::BgLightGrey => Style::BG_LIGHT_GREY,
            StyleId::BgWhite => Style::BG_WHITE,
            StyleId::Dim => Style::DIM,
            StyleId::Bold => Style::BOLD,
            StyleId::Italic => Style::ITALIC,
            StyleId::Underline => Style::UNDERLINE,
            StyleId::Strike => Style::STRIKE,
        }
    }

    /// The token-mode markup spelling for this id, sigil included.
    ///
    /// `Normal` has no spelling: it is not addressable from markup.
    pub fn token(self) -> Option<&'static str> {
        match self {
            StyleId::Normal => None,
            StyleId::Black => Some("k"),
            StyleId::Red => Some("r"),
            StyleId::Green => Some("g"),
            StyleId::Yellow => Some("y"),
            StyleId::Blue => Some("b"),
            StyleId::Magenta => Some("m"),
            StyleId::Cyan => Some("c"),
            StyleId::White => Some("w"),
            StyleId::BrightBlack => Some("*k"),
            StyleId::BrightRed => Some("*r"),
            StyleId::BrightGreen => Some("*g"),
            StyleId::BrightYellow => Some("*y"),
            StyleId::BrightBlue => Some("*b"),
            StyleId::BrightMagenta => Some("*m"),
            StyleId::BrightCyan => Some("*c"),
            StyleId::BrightWhite => Some("*w"),
            StyleId::BgBlack => Some("+k"),
            StyleId::BgRed => Some("+r"),
            StyleId::BgGreen => Some("+g"),
            StyleId::BgYellow => Some("+y"),
            StyleId::BgBlue => Some("+b"),
            StyleId::BgMagenta => Some("+m"),
            StyleId::BgCyan => Some("+c"),
            StyleId::BgLightGrey => Some("+lg"),
            StyleId::BgWhite => Some("+w"),
            StyleId::Dim => Some("i"),
            StyleId::Bold => Some("h"),
            StyleId::Italic => Some("t"),
            StyleId::Underline => Some("u"),
            StyleId::Strike => Some("x"),
        }
    }

    /// The terminator axis this id belongs to, for ids reachable from markup.
    pub(crate) fn axis(self) -> Option<Axis> {
        match self {
            StyleId::Normal => None,
            StyleId::Black
            | StyleId::Red
            | StyleId::Green
            | StyleId::Yellow
            | StyleId::Blue
            | StyleId::Magenta
            | StyleId::Cyan
            | StyleId::White
            | StyleId::BrightBlack
            | StyleId::BrightRed
            | StyleId::BrightGreen
            | StyleId::BrightYellow
            | StyleId::BrightBlue
            | StyleId::BrightMagenta
            | StyleId::BrightCyan
            | StyleId::BrightWhite => Some(Axis::Foreground),
            StyleId::BgBlack
            | StyleId::BgRed
            | StyleId::BgGreen
            | StyleId::BgYellow
            | StyleId::BgBlue
            | StyleId::BgMagenta
            | StyleId::BgCyan
            | StyleId::BgLightGrey
            | StyleId::BgWhite => Some(Axis::Background),
            StyleId::Dim
            | StyleId::Bold
            | StyleId::Italic
            | StyleId::Underline
            | StyleId::Strike => Some(Axis::Attribute),
        }
    }
}

/// Token spelling -> id, built once on first use.
static TOKEN_TABLE: Lazy<HashMap<&'static str, StyleId>> = Lazy::new(|| {
    StyleId::ALL
        .iter()
        .filter_map(|id| id.token().map(|token| (token, *id)))
        .collect()
});

/// Looks up a full token spelling (sigil included) in the fixed table.
pub(crate) fn token_lookup(token: &str) -> Option<StyleId> {
    TOKEN_TABLE.get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_lookup_is_total() {
        for id in StyleId::ALL {
            // Every id resolves; opens are non-empty escape sequences.
            assert!(id.style().open().starts_with('\x1b'));
        }
    }

    #[test]
    fn test_token_spellings_are_unique() {
        let spellings: Vec<&str> = StyleId::ALL.iter().filter_map(|id| id.token()).collect();
        let mut deduped = spellings.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(spellings.len(), deduped.len());
    }

    #[test]
    fn test_every_token_has_an_axis() {
        for id in StyleId::ALL {
            if id.token().is_some() {
                assert!(id.axis().is_some(), "{id:?} has a token but no axis");
            }
        }
    }

    #[test]
    fn test_token_lookup() {
        assert_eq!(token_lookup("r"), Some(StyleId::Red));
        assert_eq!(token_lookup("+g"), Some(StyleId::BgGreen));
        assert_eq!(token_lookup("*b"), Some(StyleId::BrightBlue));
        assert_eq!(token_lookup("+lg"), Some(StyleId::BgLightGrey));
        assert_eq!(token_lookup("i"), Some(StyleId::Dim));
        assert_eq!(token_lookup("z"), None);
        assert_eq!(token_lookup(""), None);
    }

    #[test]
    fn test_normal_is_not_addressable_from_markup() {
        assert_eq!(StyleId::Normal.token(), None);
        assert_eq!(StyleId::Normal.axis(), None);
    }
}
