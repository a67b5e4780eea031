//! Directive grammar: splits a constraint string into parsed directives.
//!
//! A constraint string is a comma-separated list of directives. Each directive is
//! `[!]keyword`, `[!]keyword=value` or `[!]keyword(arguments)`. Commas inside a
//! parenthesized argument list never split the list.

pub mod keyword;

/// Stands in for commas inside `(...)` while the top level is split.
const COMMA_SENTINEL: char = '\u{1f}';

/// One directive expression of a constraint string.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Directive text as written, without the negation prefix.
    pub text: String,
    pub negated: bool,
    /// Keyword as written, without the call form.
    pub name: String,
    /// Raw text after the first top-level `=`.
    pub value: Option<String>,
    /// Trailing `(...)` on the keyword.
    pub call: Option<Call>,
}

impl Directive {
    /// Parses one trimmed directive; returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        let (negated, text) = match text.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, text),
        };
        if text.is_empty() {
            return None;
        }

        let (head, value) = match find_top_level(text, '=') {
            Some(at) => (text[..at].trim(), Some(text[at + 1..].trim().to_string())),
            None => (text, None),
        };
        let (name, call) = match Call::parse(head) {
            Some(call) => (call.name.clone(), Some(call)),
            None => (head.to_string(), None),
        };

        Some(Self {
            text: text.to_string(),
            negated,
            name,
            value,
            call,
        })
    }

    /// Value or call argument text with surrounding quotes removed.
    pub fn argument_text(&self) -> Option<String> {
        if let Some(value) = &self.value {
            return Some(strip_quotes(value).to_string());
        }
        self.call.as_ref().map(|call| call.raw.clone())
    }

    /// Argument items, taken from the call form or the value.
    pub fn argument_items(&self) -> Vec<String> {
        if let Some(call) = &self.call {
            return call.argument.items();
        }
        match &self.value {
            Some(value) => Argument::parse(value).items(),
            None => Vec::new(),
        }
    }
}

/// Parameterized `name(arguments)` form.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    /// Text between the parentheses, outer quotes stripped.
    pub raw: String,
    pub argument: Argument,
}

impl Call {
    /// Parses `name(...)`; text without a trailing call form yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if !text.ends_with(')') {
            return None;
        }
        let open = text.find('(')?;
        let name = text[..open].trim();
        if name.is_empty() {
            return None;
        }
        let raw = strip_quotes(text[open + 1..text.len() - 1].trim()).to_string();
        Some(Self {
            name: name.to_string(),
            argument: Argument::parse(&raw),
            raw,
        })
    }

    /// Raw argument text split on top-level commas.
    pub fn params(&self) -> Vec<String> {
        if self.raw.trim().is_empty() {
            return Vec::new();
        }
        split_top_level(&self.raw, ',')
            .into_iter()
            .map(|param| strip_quotes(param.trim()).to_string())
            .collect()
    }
}

/// Literal inside a call form.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    List(Vec<String>),
    Number(f64),
    Text(String),
}

impl Argument {
    pub fn parse(raw: &str) -> Self {
        let raw = strip_quotes(raw.trim());
        if raw.contains(',') {
            return Self::List(
                split_top_level(raw, ',')
                    .into_iter()
                    .map(|item| strip_quotes(item.trim()).to_string())
                    .collect(),
            );
        }
        match raw.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(raw.to_string()),
        }
    }

    pub fn items(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.iter().filter(|item| !item.is_empty()).cloned().collect(),
            Self::Number(number) => vec![number.to_string()],
            Self::Text(text) if text.is_empty() => Vec::new(),
            Self::Text(text) => vec![text.clone()],
        }
    }
}

/// Splits a constraint block into directives.
///
/// A block wrapped in one matching pair of quotes is unwrapped first. Blank
/// entries between commas are skipped.
pub fn tokenize(block: &str) -> Vec<Directive> {
    let block = strip_quotes(block.trim());
    if block.trim().is_empty() {
        return Vec::new();
    }
    protect_commas(block)
        .split(',')
        .filter_map(|token| Directive::parse(&token.replace(COMMA_SENTINEL, ",")))
        .collect()
}

/// Splits on `separator` occurrences outside parentheses.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ch if ch == separator && depth == 0 => {
                parts.push(&text[start..index]);
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Removes one matching pair of surrounding single or double quotes.
pub fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn protect_commas(block: &str) -> String {
    let mut depth = 0usize;
    block
        .chars()
        .map(|ch| match ch {
            '(' => {
                depth += 1;
                ch
            }
            ')' => {
                depth = depth.saturating_sub(1);
                ch
            }
            ',' if depth > 0 => COMMA_SENTINEL,
            _ => ch,
        })
        .collect()
}

fn find_top_level(text: &str, target: char) -> Option<usize> {
    let mut depth = 0usize;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ch if ch == target && depth == 0 => return Some(index),
            _ => {}
        }
    }
    None
}
