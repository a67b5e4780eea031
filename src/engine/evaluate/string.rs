use regex::Regex;

use crate::domain::constraint::StringRules;
use crate::domain::error::{Bound, RangeSubject, Violation};

pub(super) fn test(rules: &StringRules, text: &str) -> Result<(), Violation> {
    let length = text.chars().count();
    if let Some(min_length) = rules.min_length {
        if length < min_length {
            return Err(length_range(Bound::MinLength, length, min_length));
        }
    }
    if let Some(max_length) = rules.max_length {
        if length > max_length {
            return Err(length_range(Bound::MaxLength, length, max_length));
        }
    }

    check_pair(
        "startsWith",
        &rules.starts_with,
        &rules.not_starts_with,
        text,
        |text, prefix| text.starts_with(prefix),
        |prefix| format!("does not start with {prefix:?}"),
        |prefix| format!("starts with {prefix:?}"),
    )?;
    check_pair(
        "endsWith",
        &rules.ends_with,
        &rules.not_ends_with,
        text,
        |text, suffix| text.ends_with(suffix),
        |suffix| format!("does not end with {suffix:?}"),
        |suffix| format!("ends with {suffix:?}"),
    )?;
    check_pair(
        "contains",
        &rules.contains,
        &rules.not_contains,
        text,
        |text, needle| text.contains(needle),
        |needle| format!("does not contain {needle:?}"),
        |needle| format!("contains {needle:?}"),
    )?;

    if rules.matches.is_some() && rules.not_matches.is_some() {
        return Err(Violation::conflict("match", "!match"));
    }
    if let Some(source) = &rules.matches {
        if !compile(source)?.is_match(text) {
            return Err(Violation::rule(
                "match",
                format!("{text:?} does not match /{source}/"),
            ));
        }
    }
    if let Some(source) = &rules.not_matches {
        if compile(source)?.is_match(text) {
            return Err(Violation::rule(
                "!match",
                format!("{text:?} matches /{source}/"),
            ));
        }
    }
    Ok(())
}

/// Conflict check, then the positive or negated form of one paired directive.
fn check_pair(
    rule: &'static str,
    positive: &Option<String>,
    negative: &Option<String>,
    text: &str,
    holds: impl Fn(&str, &str) -> bool,
    missing: impl Fn(&str) -> String,
    present: impl Fn(&str) -> String,
) -> Result<(), Violation> {
    match (positive, negative) {
        (Some(_), Some(_)) => Err(Violation::conflict(rule, format!("!{rule}"))),
        (Some(expected), None) if !holds(text, expected) => Err(Violation::Rule {
            rule,
            message: format!("{text:?} {}", missing(expected)),
        }),
        (None, Some(forbidden)) if holds(text, forbidden) => Err(Violation::Rule {
            rule,
            message: format!("{text:?} {}", present(forbidden)),
        }),
        _ => Ok(()),
    }
}

fn compile(source: &str) -> Result<Regex, Violation> {
    Regex::new(source)
        .map_err(|err| Violation::rule("match", format!("invalid pattern /{source}/: {err}")))
}

fn length_range(bound: Bound, actual: usize, limit: usize) -> Violation {
    Violation::Range {
        subject: RangeSubject::Length,
        bound,
        actual: actual as f64,
        limit: limit as f64,
    }
}
