use crate::domain::constraint::NumberRules;
use crate::domain::error::{Bound, RangeSubject, Violation};

pub(super) fn test(rules: &NumberRules, value: f64) -> Result<(), Violation> {
    if rules.is_integer && !(value.is_finite() && value.fract() == 0.0) {
        return Err(Violation::Integer { value });
    }
    if rules.not_zero && value == 0.0 {
        return Err(Violation::ZeroNotAllowed);
    }
    if rules.is_positive && rules.is_negative {
        return Err(Violation::conflict("positive", "negative"));
    }
    if rules.is_positive && (value <= 0.0 || value.is_nan()) {
        return Err(Violation::Positive { value });
    }
    if rules.is_negative && (value >= 0.0 || value.is_nan()) {
        return Err(Violation::Negative { value });
    }
    if let Some(min) = rules.min {
        if value < min {
            return Err(range(Bound::Min, value, min));
        }
    }
    if let Some(max) = rules.max {
        if value > max {
            return Err(range(Bound::Max, value, max));
        }
    }
    if let Some(max_exclusive) = rules.max_exclusive {
        if value >= max_exclusive {
            return Err(range(Bound::MaxExclusive, value, max_exclusive));
        }
    }
    Ok(())
}

fn range(bound: Bound, actual: f64, limit: f64) -> Violation {
    Violation::Range {
        subject: RangeSubject::Value,
        bound,
        actual,
        limit,
    }
}
