use super::TextMeasure;
use crate::units::Px;

/// Collapse every whitespace run to a single space and trim leading and
/// trailing whitespace
pub fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The atomic units a title wraps over, tagged with how they join back
/// together.
///
/// Word-joined streams reinsert a single space between tokens. Character-joined
/// streams rejoin with nothing: every token is a single character, which is
/// what lets scripts without word boundaries (e.g. ideographic text) wrap at
/// all. The variant is decided once, at tokenization, so no later stage has to
/// re-infer the joiner from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStream {
    WordJoined { tokens: Vec<String> },
    CharacterJoined { tokens: Vec<String> },
}

impl TokenStream {
    pub fn tokens(&self) -> &[String] {
        match self {
            TokenStream::WordJoined { tokens } => tokens,
            TokenStream::CharacterJoined { tokens } => tokens,
        }
    }

    /// The string reinserted between tokens when reconstructing text
    pub fn joiner(&self) -> &'static str {
        match self {
            TokenStream::WordJoined { .. } => " ",
            TokenStream::CharacterJoined { .. } => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }
}

/// Split a title into a [TokenStream].
///
/// The title is normalized first; an empty or all-whitespace title yields an
/// empty stream. A normalized title containing any space splits into words,
/// anything else splits into individual characters. Rejoining the tokens with
/// the stream's joiner reproduces the normalized title exactly.
pub fn split_tokens(title: &str) -> TokenStream {
    let normalized = normalize_title(title);
    if normalized.is_empty() {
        return TokenStream::CharacterJoined { tokens: Vec::new() };
    }

    if normalized.contains(' ') {
        TokenStream::WordJoined {
            tokens: normalized.split(' ').map(String::from).collect(),
        }
    } else {
        TokenStream::CharacterJoined {
            tokens: normalized.chars().map(String::from).collect(),
        }
    }
}

/// Split a single token too wide for any line into width-bounded fragments.
///
/// Characters are accumulated greedily: when appending the next character
/// would overflow `max_width`, the accumulator is flushed as a fragment and
/// the character starts a new one. A lone character that by itself exceeds
/// the budget is still emitted as its own fragment, since no narrower unit
/// exists. Concatenating the fragments reproduces `token` exactly.
pub fn break_token<M: TextMeasure>(
    measure: &M,
    size: Px,
    token: &str,
    max_width: Px,
) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in token.chars() {
        let mut test = current.clone();
        test.push(ch);
        if measure.width_of(&test, size) <= max_width {
            current = test;
            continue;
        }

        if current.is_empty() {
            parts.push(ch.to_string());
        } else {
            parts.push(current);
            current = ch.to_string();
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}
