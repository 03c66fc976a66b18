use super::{break_token, split_tokens, TextMeasure, TokenStream};
use crate::units::Px;
use log::debug;

/// Knobs for the title fitting search. The defaults match the standard card
/// design: at most 3 lines, candidate sizes descending 72, 68, ... 44, and a
/// three-dot ellipsis for clamped titles.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleOptions {
    /// The first (largest) candidate font size
    pub max_size: Px,
    /// The last (smallest) candidate font size; the search never goes below it
    pub min_size: Px,
    /// How much the candidate size shrinks between attempts
    pub step: Px,
    /// The maximum number of lines a title may occupy
    pub max_lines: usize,
    /// The suffix appended to a clamped title's last line
    pub ellipsis: String,
}

impl Default for TitleOptions {
    fn default() -> TitleOptions {
        TitleOptions {
            max_size: Px(72.0),
            min_size: Px(44.0),
            step: Px(4.0),
            max_lines: 3,
            ellipsis: "...".to_string(),
        }
    }
}

/// The output of the fitting search: the wrapped lines and the font size they
/// were wrapped at
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLayout {
    pub lines: Vec<String>,
    pub size: Px,
}

/// Greedily pack a token stream into lines no wider than `max_width`.
///
/// Tokens are accumulated into the current line until appending the next one
/// (with the stream's joiner) would overflow, at which point the line is
/// flushed and the token starts a new one. A token that alone exceeds the
/// budget is handed to [break_token]: all but the last fragment become
/// completed lines, and the last fragment seeds the next line so packing
/// continues from there. Only such unbreakable fragments may yield a line
/// wider than the budget.
pub fn build_lines<M: TextMeasure>(
    measure: &M,
    size: Px,
    stream: &TokenStream,
    max_width: Px,
) -> Vec<String> {
    let joiner = stream.joiner();
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for token in stream.tokens() {
        if measure.width_of(token, size) > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut parts = break_token(measure, size, token, max_width);
            if let Some(last) = parts.pop() {
                lines.append(&mut parts);
                if measure.width_of(&last, size) > max_width {
                    // a single character wider than the whole budget; no
                    // narrower option exists, emit it as its own line
                    lines.push(last);
                } else {
                    current = last;
                }
            }
            continue;
        }

        let candidate = if current.is_empty() {
            token.clone()
        } else {
            format!("{current}{joiner}{token}")
        };
        if measure.width_of(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        lines.push(std::mem::take(&mut current));
        current = token.clone();
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Truncate `lines` to at most `max_lines`, shortening the final retained
/// line character-by-character until it fits the budget with `ellipsis`
/// appended.
///
/// If the shortened line ends up empty, the ellipsis alone occupies it. The
/// result never exceeds the budget unless even the bare ellipsis does, which
/// is accepted as-is. Always returns `min(lines.len(), max_lines)` lines.
pub fn clamp_lines<M: TextMeasure>(
    measure: &M,
    size: Px,
    lines: Vec<String>,
    max_width: Px,
    max_lines: usize,
    ellipsis: &str,
) -> Vec<String> {
    let mut clamped = lines;
    if clamped.len() <= max_lines {
        return clamped;
    }
    clamped.truncate(max_lines);

    let Some(mut last) = clamped.pop() else {
        return clamped;
    };

    while !last.is_empty() && measure.width_of(&format!("{last}{ellipsis}"), size) > max_width {
        last.pop();
    }

    if last.is_empty() {
        clamped.push(ellipsis.to_string());
    } else {
        last.push_str(ellipsis);
        clamped.push(last);
    }

    clamped
}

/// Choose a font size and wrap `title` into at most `options.max_lines` lines
/// no wider than `max_width`.
///
/// Candidate sizes are tried in a linear descent from `max_size` down to
/// `min_size`, accepting the first (largest) size whose packed line count
/// fits. The descent deliberately stops at `min_size`: when even that
/// overflows, the minimum-size result is kept and clamped with an ellipsis
/// rather than shrinking further. Never fails; an empty title yields an empty
/// line list at `max_size`.
pub fn layout_title<M: TextMeasure>(
    measure: &M,
    title: &str,
    max_width: Px,
    options: &TitleOptions,
) -> TitleLayout {
    let stream = split_tokens(title);

    let mut size = options.max_size;
    let mut lines = build_lines(measure, size, &stream, max_width);
    while lines.len() > options.max_lines && size > options.min_size {
        size = size - options.step;
        if size < options.min_size {
            size = options.min_size;
        }
        lines = build_lines(measure, size, &stream, max_width);
    }

    if lines.len() > options.max_lines {
        debug!(
            "title still {} lines at minimum size {}, clamping to {}",
            lines.len(),
            size,
            options.max_lines
        );
        lines = clamp_lines(
            measure,
            size,
            lines,
            max_width,
            options.max_lines,
            &options.ellipsis,
        );
    }

    debug!("laid out title as {} line(s) at {}px", lines.len(), size);
    TitleLayout { lines, size }
}
