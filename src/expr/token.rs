//! Token-mode expressions: styles named inline, no external style list.
//!
//! A token opens a styled run and a terminator closes it:
//!
//! - `y|warning|!` — yellow foreground, closed back to the default foreground
//! - `+g|passed|+` — green background, closed back to the default background
//! - `*b|verbose|!` — bright blue foreground
//! - `i|timestamp|>` — dim attribute, closed with a full reset
//!
//! Openers are recognized only at a word boundary (start of input or after a
//! non-alphanumeric codepoint), so prose containing a `|` is left alone
//! unless the run before it spells a registry token.

use crate::style::registry::{token_lookup, Axis};
use crate::style::{Style, RESET};

use super::error::ExpandError;

const FG_DEFAULT: &str = "\x1b[39m";
const BG_DEFAULT: &str = "\x1b[49m";

/// A recognized opener: the style it selects, the terminator axis it leaves
/// open, and how many bytes of markup it spans.
struct Opener {
    style: Style,
    axis: Axis,
    token: String,
    markup_len: usize,
}

/// Expands a template containing inline style tokens.
///
/// Terminators (`|!`, `|+`, `|>`) are replaced unconditionally, whether or
/// not an opener precedes them. Everything that is neither an opener nor a
/// terminator passes through untouched.
///
/// # Errors
///
/// - [`ExpandError::UnknownStyleToken`] for a sigiled token (`+...|` or
///   `*...|`) that names no registry entry.
/// - [`ExpandError::UnterminatedToken`] if an opener's axis is still open at
///   the end of the input.
///
/// # Example
///
/// ```rust
/// use tinct::expand_tokens;
///
/// let out = expand_tokens("y|Ashish|!").unwrap();
/// assert_eq!(out, "\x1b[33mAshish\x1b[39m");
/// ```
pub fn expand_tokens(template: &str) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(template.len());
    // Last opened token per axis: foreground, background, attribute.
    let mut open: [Option<String>; 3] = [None, None, None];
    let mut rest = template;
    let mut at_boundary = true;

    while let Some(c) = rest.chars().next() {
        if let Some((close, axis)) = match_terminator(rest) {
            output.push_str(close);
            open[axis_slot(axis)] = None;
            rest = &rest[2..];
            at_boundary = true;
            continue;
        }
        if at_boundary {
            if let Some(opener) = match_opener(rest)? {
                output.push_str(opener.style.open());
                open[axis_slot(opener.axis)] = Some(opener.token);
                rest = &rest[opener.markup_len..];
                at_boundary = true;
                continue;
            }
        }
        output.push(c);
        rest = &rest[c.len_utf8()..];
        at_boundary = !c.is_alphanumeric();
    }

    if let Some(token) = open.iter().flatten().next() {
        return Err(ExpandError::UnterminatedToken {
            token: token.clone(),
        });
    }
    Ok(output)
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::Foreground => 0,
        Axis::Background => 1,
        Axis::Attribute => 2,
    }
}

/// Matches one of the three terminators at the head of `rest`.
fn match_terminator(rest: &str) -> Option<(&'static str, Axis)> {
    if rest.starts_with("|!") {
        Some((FG_DEFAULT, Axis::Foreground))
    } else if rest.starts_with("|+") {
        Some((BG_DEFAULT, Axis::Background))
    } else if rest.starts_with("|>") {
        Some((RESET, Axis::Attribute))
    } else {
        None
    }
}

/// Matches an opener at the head of `rest`: an optional sigil (`+`
/// background, `*` bright), an alphanumeric run, then `|`.
///
/// A sigiled run that is not in the registry is an error; an unsigiled one
/// is ordinary prose and matches nothing.
fn match_opener(rest: &str) -> Result<Option<Opener>, ExpandError> {
    let (sigil, body) = match rest.chars().next() {
        Some(s @ ('+' | '*')) => (Some(s), &rest[1..]),
        _ => (None, rest),
    };

    let run: String = body.chars().take_while(|c| c.is_alphanumeric()).collect();
    if run.is_empty() || !body[run.len()..].starts_with('|') {
        return Ok(None);
    }

    let mut token = String::new();
    if let Some(s) = sigil {
        token.push(s);
    }
    token.push_str(&run);
    // sigil + run + the '|' itself
    let markup_len = token.len() + 1;

    match token_lookup(&token) {
        Some(id) => match id.axis() {
            Some(axis) => Ok(Some(Opener {
                style: id.style(),
                axis,
                token,
                markup_len,
            })),
            None => Ok(None),
        },
        None if sigil.is_some() => Err(ExpandError::UnknownStyleToken { token }),
        None => Ok(None),
    }
}
