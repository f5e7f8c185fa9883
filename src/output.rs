//! Output helpers: segments, reusable stylers and print/log sinks.

use crate::style::{wrap, Style};

/// A labeled chunk of text with the styles to apply to it.
///
/// Segments are the building blocks of [`palette`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    styles: Vec<Style>,
}

impl Segment {
    /// Binds `text` to the given styles.
    pub fn new(text: impl Into<String>, styles: &[Style]) -> Self {
        Self {
            text: text.into(),
            styles: styles.to_vec(),
        }
    }

    /// Renders this segment to a styled string.
    pub fn render(&self) -> String {
        wrap(&self.text, &self.styles)
    }
}

/// Renders segments joined by a single space, in call order.
///
/// The separator itself is unstyled and never escaped.
///
/// # Example
///
/// ```rust
/// use tinct::{palette, Segment, Style};
///
/// let line = palette(&[
///     Segment::new("PASS", &[Style::BG_GREEN, Style::BLACK]),
///     Segment::new("all 12 tests", &[Style::NORMAL]),
/// ]);
/// assert!(line.contains(' '));
/// ```
pub fn palette(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::render)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Partially applies a fixed style set, returning a reusable styling
/// function.
///
/// The returned closure produces output byte-identical to [`wrap`] with the
/// same styles.
///
/// # Example
///
/// ```rust
/// use tinct::{styler, wrap, Style};
///
/// let warn = styler(vec![Style::YELLOW]);
/// assert_eq!(warn("Yes"), wrap("Yes", &[Style::YELLOW]));
/// ```
pub fn styler(styles: Vec<Style>) -> impl Fn(&str) -> String {
    move |text| wrap(text, &styles)
}

/// Like [`styler`], but the returned function prints the styled line to
/// stdout instead of returning it.
pub fn swatch(styles: Vec<Style>) -> impl Fn(&str) {
    move |text| println!("{}", wrap(text, &styles))
}

/// Prints styled text to stdout, no trailing newline.
pub fn print_styled(text: &str, styles: &[Style]) {
    print!("{}", wrap(text, styles));
}

/// Prints a styled line to stdout.
pub fn println_styled(text: &str, styles: &[Style]) {
    println!("{}", wrap(text, styles));
}

/// Emits styled text through the `log` facade at info level.
pub fn log_styled(text: &str, styles: &[Style]) {
    log::info!("{}", wrap(text, styles));
}
