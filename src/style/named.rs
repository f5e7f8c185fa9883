//! The fixed table of named styles.
//!
//! Every fragment is byte-exact SGR. Color `close` fragments reset only
//! their own axis (`ESC[39m` for foregrounds, `ESC[49m` for backgrounds);
//! attribute `close` fragments emit the full reset `ESC[0m`.

use super::Style;

impl Style {
    /// No styling: opens and closes with a full reset.
    pub const NORMAL: Style = Style::from_static("\x1b[0m", "\x1b[0m");

    // Standard foregrounds (SGR 30-37).
    pub const BLACK: Style = Style::from_static("\x1b[30m", "\x1b[39m");
    pub const RED: Style = Style::from_static("\x1b[31m", "\x1b[39m");
    pub const GREEN: Style = Style::from_static("\x1b[32m", "\x1b[39m");
    pub const YELLOW: Style = Style::from_static("\x1b[33m", "\x1b[39m");
    pub const BLUE: Style = Style::from_static("\x1b[34m", "\x1b[39m");
    pub const MAGENTA: Style = Style::from_static("\x1b[35m", "\x1b[39m");
    pub const CYAN: Style = Style::from_static("\x1b[36m", "\x1b[39m");
    pub const WHITE: Style = Style::from_static("\x1b[37m", "\x1b[39m");

    // Bright foregrounds (SGR 90-97).
    pub const BRIGHT_BLACK: Style = Style::from_static("\x1b[90m", "\x1b[39m");
    pub const BRIGHT_RED: Style = Style::from_static("\x1b[91m", "\x1b[39m");
    pub const BRIGHT_GREEN: Style = Style::from_static("\x1b[92m", "\x1b[39m");
    pub const BRIGHT_YELLOW: Style = Style::from_static("\x1b[93m", "\x1b[39m");
    pub const BRIGHT_BLUE: Style = Style::from_static("\x1b[94m", "\x1b[39m");
    pub const BRIGHT_MAGENTA: Style = Style::from_static("\x1b[95m", "\x1b[39m");
    pub const BRIGHT_CYAN: Style = Style::from_static("\x1b[96m", "\x1b[39m");
    pub const BRIGHT_WHITE: Style = Style::from_static("\x1b[97m", "\x1b[39m");

    // Backgrounds (SGR 40-47, plus bright white at 107).
    pub const BG_BLACK: Style = Style::from_static("\x1b[40m", "\x1b[49m");
    pub const BG_RED: Style = Style::from_static("\x1b[41m", "\x1b[49m");
    pub const BG_GREEN: Style = Style::from_static("\x1b[42m", "\x1b[49m");
    pub const BG_YELLOW: Style = Style::from_static("\x1b[43m", "\x1b[49m");
    pub const BG_BLUE: Style = Style::from_static("\x1b[44m", "\x1b[49m");
    pub const BG_MAGENTA: Style = Style::from_static("\x1b[45m", "\x1b[49m");
    pub const BG_CYAN: Style = Style::from_static("\x1b[46m", "\x1b[49m");
    /// SGR 47. Rendered as light grey by most palettes, hence the name.
    pub const BG_LIGHT_GREY: Style = Style::from_static("\x1b[47m", "\x1b[49m");
    /// SGR 107 (bright white), the background most terminals show as white.
    pub const BG_WHITE: Style = Style::from_static("\x1b[107m", "\x1b[49m");

    // Attributes. These close with a full reset, so they should wrap colors
    // (attribute outermost) when layered.
    pub const DIM: Style = Style::from_static("\x1b[2m", "\x1b[0m");
    pub const BOLD: Style = Style::from_static("\x1b[1m", "\x1b[0m");
    pub const ITALIC: Style = Style::from_static("\x1b[3m", "\x1b[0m");
    pub const UNDERLINE: Style = Style::from_static("\x1b[4m", "\x1b[0m");
    pub const STRIKE: Style = Style::from_static("\x1b[9m", "\x1b[0m");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foregrounds_close_to_default_foreground() {
        for style in [
            Style::BLACK,
            Style::RED,
            Style::GREEN,
            Style::YELLOW,
            Style::BLUE,
            Style::MAGENTA,
            Style::CYAN,
            Style::WHITE,
            Style::BRIGHT_BLACK,
            Style::BRIGHT_WHITE,
        ] {
            assert_eq!(style.close(), "\x1b[39m");
        }
    }

    #[test]
    fn test_backgrounds_close_to_default_background() {
        for style in [
            Style::BG_BLACK,
            Style::BG_CYAN,
            Style::BG_LIGHT_GREY,
            Style::BG_WHITE,
        ] {
            assert_eq!(style.close(), "\x1b[49m");
        }
    }

    #[test]
    fn test_spot_check_fragments() {
        assert_eq!(Style::RED.open(), "\x1b[31m");
        assert_eq!(Style::BRIGHT_BLUE.open(), "\x1b[94m");
        assert_eq!(Style::BG_WHITE.open(), "\x1b[107m");
        assert_eq!(Style::BG_LIGHT_GREY.open(), "\x1b[47m");
        assert_eq!(Style::BOLD.open(), "\x1b[1m");
        assert_eq!(Style::DIM.open(), "\x1b[2m");
    }
}
