use crate::domain::constraint::{ArrayRules, CheckType};
use crate::domain::error::{Bound, RangeSubject, Violation};
use crate::domain::value::Value;
use crate::engine::traverse::{self, IndexSampler};

pub(super) fn test(
    rules: &ArrayRules,
    items: &[Value],
    sampler: &mut dyn IndexSampler,
) -> Result<(), Violation> {
    if let Some(min_length) = rules.min_length {
        if items.len() < min_length {
            return Err(length_range(Bound::MinLength, items.len(), min_length));
        }
    }
    if let Some(max_length) = rules.max_length {
        if items.len() > max_length {
            return Err(length_range(Bound::MaxLength, items.len(), max_length));
        }
    }

    match (&rules.contains, &rules.not_contains) {
        (Some(_), Some(_)) => return Err(Violation::conflict("contains", "!contains")),
        (Some(expected), None) if !items.contains(expected) => {
            return Err(Violation::rule(
                "contains",
                format!("array does not contain {expected}"),
            ));
        }
        (None, Some(forbidden)) if items.contains(forbidden) => {
            return Err(Violation::rule(
                "!contains",
                format!("array contains {forbidden}"),
            ));
        }
        _ => {}
    }

    if rules.has_element_checks() {
        let check_type = rules.check_type.unwrap_or(CheckType::All);
        traverse::traverse(
            items,
            check_type,
            rules.check_parameter.as_deref(),
            rules.check_parameter2.as_deref(),
            &rules.element_constraints,
            sampler,
        )?;
    }
    Ok(())
}

fn length_range(bound: Bound, actual: usize, limit: usize) -> Violation {
    Violation::Range {
        subject: RangeSubject::Length,
        bound,
        actual: actual as f64,
        limit: limit as f64,
    }
}
