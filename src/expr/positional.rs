//! Positional-mode expressions: `@( ... )` spans styled from an ordered list.

use crate::style::Style;

use super::error::ExpandError;

/// Expands a template containing `@( ... )` spans.
///
/// Spans claim styles strictly in left-to-right order of appearance: the
/// first span is wrapped with the first style, and so on. The number of
/// spans must equal the number of supplied styles.
///
/// Outside of markup, text passes through untouched. A `@` not followed by
/// `(` and a `)` outside any span are literal. Spans may nest; the inner
/// span's close is emitted before the outer one's.
///
/// # Errors
///
/// - [`ExpandError::StyleCountMismatch`] if span count != style count.
/// - [`ExpandError::UnterminatedSpan`] if a span is still open at the end
///   of the input.
///
/// # Example
///
/// ```rust
/// use tinct::{expand_positional, Style};
///
/// let out = expand_positional("@(Hello), @(World)!", &[Style::RED, Style::BLUE]).unwrap();
/// assert_eq!(out, "\x1b[31mHello\x1b[39m, \x1b[34mWorld\x1b[39m!");
/// ```
pub fn expand_positional(template: &str, styles: &[Style]) -> Result<String, ExpandError> {
    let expected = span_count(template);
    if expected != styles.len() {
        return Err(ExpandError::StyleCountMismatch {
            expected,
            actual: styles.len(),
        });
    }

    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut open_spans: Vec<&Style> = Vec::new();
    let mut claimed = 0usize;

    while let Some(c) = chars.next() {
        if c == '@' && chars.peek() == Some(&'(') {
            chars.next();
            let style = styles
                .get(claimed)
                .ok_or(ExpandError::StyleCountMismatch {
                    expected,
                    actual: styles.len(),
                })?;
            claimed += 1;
            output.push_str(style.open());
            open_spans.push(style);
        } else if c == ')' && !open_spans.is_empty() {
            if let Some(style) = open_spans.pop() {
                output.push_str(style.close());
            }
        } else {
            output.push(c);
        }
    }

    if open_spans.is_empty() {
        Ok(output)
    } else {
        Err(ExpandError::UnterminatedSpan)
    }
}

/// Counts `@(` openers with one codepoint of lookahead, consuming the `(`
/// the same way the expansion scan does.
fn span_count(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '@' && chars.peek() == Some(&'(') {
            chars.next();
            count += 1;
        }
    }
    count
}
