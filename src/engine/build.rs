use std::collections::BTreeMap;

use crate::domain::constraint::{
    ArrayRules, CheckType, Constraint, NumberRules, ObjectRules, Rules, StringRules,
};
use crate::domain::value::Value;
use crate::domain::value_type::ValueType;
use crate::engine::directive::keyword::{self, Keyword};
use crate::engine::directive::{self, Call, Directive};

/// Tokenizes `block` and builds a constraint for `value_type`.
pub fn parse(value_type: ValueType, block: &str) -> Option<Constraint> {
    build(value_type, &directive::tokenize(block))
}

/// Builds a constraint from parsed directives.
///
/// Returns `None` when there are no directives or the type is `none`.
/// Unknown or malformed directives are recorded in `bad_name` and skipped.
pub fn build(value_type: ValueType, directives: &[Directive]) -> Option<Constraint> {
    if value_type == ValueType::None || directives.is_empty() {
        return None;
    }

    let mut builder = Builder::new(value_type);
    for directive in directives {
        match keyword::lookup(&directive.name) {
            Some((Keyword::NoConstraint, _)) => {
                tracing::debug!(event = "no_constraint", value_type = %value_type);
                return Some(Constraint::new(value_type));
            }
            Some((Keyword::Note, _)) => {
                builder.constraint.note =
                    directive.value.clone().or_else(|| directive.argument_text());
            }
            Some((keyword, implied)) => {
                let negated = directive.negated != implied;
                if !builder.apply(keyword, negated, directive) {
                    builder.reject(directive);
                }
            }
            None => builder.reject(directive),
        }
    }

    let constraint = builder.finish();
    tracing::trace!(event = "constraint_built", constraint = %constraint);
    Some(constraint)
}

/// Accumulates directives into one constraint; lives for a single `build` call.
struct Builder {
    constraint: Constraint,
}

impl Builder {
    fn new(value_type: ValueType) -> Self {
        Self {
            constraint: Constraint::new(value_type),
        }
    }

    fn finish(self) -> Constraint {
        self.constraint
    }

    fn reject(&mut self, directive: &Directive) {
        tracing::debug!(
            event = "unrecognized_directive",
            directive = %directive.text,
            value_type = %self.constraint.value_type()
        );
        if self.constraint.bad_name.is_none() {
            self.constraint.bad_name = Some(directive.text.clone());
        }
    }

    /// Returns `false` when the directive does not apply to this variant.
    fn apply(&mut self, keyword: Keyword, negated: bool, directive: &Directive) -> bool {
        match &mut self.constraint.rules {
            Rules::Base => false,
            Rules::Number(rules) => apply_number(rules, keyword, negated, directive),
            Rules::String(rules) => apply_string(rules, keyword, negated, directive),
            Rules::Object(rules) => apply_object(rules, keyword, negated, directive),
            Rules::Array(rules) => apply_array(rules, keyword, negated, directive),
        }
    }
}

fn apply_number(
    rules: &mut NumberRules,
    keyword: Keyword,
    negated: bool,
    directive: &Directive,
) -> bool {
    if negated {
        return false;
    }
    match keyword {
        Keyword::Integer => rules.is_integer = true,
        Keyword::Positive => rules.is_positive = true,
        Keyword::Negative => rules.is_negative = true,
        Keyword::NotZero => rules.not_zero = true,
        Keyword::Min => return set_number(&mut rules.min, directive),
        Keyword::Max => return set_number(&mut rules.max, directive),
        Keyword::MaxExclusive => return set_number(&mut rules.max_exclusive, directive),
        _ => return false,
    }
    true
}

fn apply_string(
    rules: &mut StringRules,
    keyword: Keyword,
    negated: bool,
    directive: &Directive,
) -> bool {
    let (positive, negative) = match keyword {
        Keyword::MinLength if !negated => return set_length(&mut rules.min_length, directive),
        Keyword::MaxLength if !negated => return set_length(&mut rules.max_length, directive),
        Keyword::StartsWith => (&mut rules.starts_with, &mut rules.not_starts_with),
        Keyword::EndsWith => (&mut rules.ends_with, &mut rules.not_ends_with),
        Keyword::Contains => (&mut rules.contains, &mut rules.not_contains),
        Keyword::Match => (&mut rules.matches, &mut rules.not_matches),
        _ => return false,
    };
    let Some(text) = directive.argument_text() else {
        return false;
    };
    if negated {
        *negative = Some(text);
    } else {
        *positive = Some(text);
    }
    true
}

fn apply_object(
    rules: &mut ObjectRules,
    keyword: Keyword,
    negated: bool,
    directive: &Directive,
) -> bool {
    match keyword {
        Keyword::Empty if negated => rules.not_empty = true,
        Keyword::Empty => rules.empty = true,
        Keyword::HasProperties => {
            let names = directive.argument_items();
            if names.is_empty() {
                return false;
            }
            let target = if negated {
                &mut rules.not_has_properties
            } else {
                &mut rules.has_properties
            };
            for name in names {
                if !target.contains(&name) {
                    target.push(name);
                }
            }
        }
        Keyword::InstanceOf => {
            let Some(class_name) = directive.argument_text().filter(|name| !name.is_empty())
            else {
                return false;
            };
            if negated {
                rules.not_instance_of = Some(class_name);
            } else {
                rules.instance_of = Some(class_name);
            }
        }
        _ if negated => return false,
        Keyword::NotNested => rules.not_nested = true,
        Keyword::NoPrototype => rules.no_prototype = true,
        Keyword::CanSerialize => rules.can_serialize = true,
        Keyword::NoFalseyProps => rules.no_falsey_props = true,
        Keyword::NoTruthyProps => rules.no_truthy_props = true,
        _ => return false,
    }
    true
}

fn apply_array(
    rules: &mut ArrayRules,
    keyword: Keyword,
    negated: bool,
    directive: &Directive,
) -> bool {
    match keyword {
        Keyword::Contains => {
            let Some(raw) = directive
                .value
                .clone()
                .or_else(|| directive.call.as_ref().map(|call| call.raw.clone()))
            else {
                return false;
            };
            let literal = Value::from_literal(&raw);
            if negated {
                rules.not_contains = Some(literal);
            } else {
                rules.contains = Some(literal);
            }
            true
        }
        _ if negated => false,
        Keyword::MinLength => set_length(&mut rules.min_length, directive),
        Keyword::MaxLength => set_length(&mut rules.max_length, directive),
        Keyword::Each => match directive.argument_text() {
            Some(raw) => {
                rules.element_constraints.extend(element_constraints(&raw));
                true
            }
            None => false,
        },
        Keyword::CheckType => set_check_type(rules, directive),
        _ => false,
    }
}

/// Parses the `each(...)` grammar: `|`-separated `<type>,<directives>` blocks.
fn element_constraints(raw: &str) -> BTreeMap<ValueType, Constraint> {
    let mut constraints = BTreeMap::new();
    for block in directive::split_top_level(raw, '|') {
        let block = directive::strip_quotes(block.trim());
        if block.is_empty() {
            continue;
        }
        let (type_name, rest) = match block.split_once(',') {
            Some((type_name, rest)) => (type_name, rest),
            None => (block, ""),
        };
        let value_type = ValueType::from_name(type_name);
        if value_type == ValueType::None {
            tracing::debug!(
                event = "unrecognized_directive",
                directive = %block,
                value_type = "none"
            );
            continue;
        }
        let constraint = parse(value_type, rest).unwrap_or_else(|| Constraint::new(value_type));
        constraints.insert(value_type, constraint);
    }
    constraints
}

fn set_check_type(rules: &mut ArrayRules, directive: &Directive) -> bool {
    let Some(value) = directive.value.as_deref() else {
        return false;
    };
    let value = directive::strip_quotes(value.trim());
    let (name, params) = match Call::parse(value) {
        Some(call) => {
            let params = call.params();
            (call.name, params)
        }
        None => (value.to_string(), Vec::new()),
    };
    let Some(check_type) = CheckType::from_name(&name) else {
        return false;
    };
    let mut params = params.into_iter();
    rules.check_type = Some(check_type);
    rules.check_parameter = params.next();
    rules.check_parameter2 = params.next();
    true
}

fn set_number(slot: &mut Option<f64>, directive: &Directive) -> bool {
    match directive
        .argument_text()
        .and_then(|text| text.trim().parse::<f64>().ok())
    {
        Some(number) if !number.is_nan() => {
            *slot = Some(number);
            true
        }
        _ => false,
    }
}

fn set_length(slot: &mut Option<usize>, directive: &Directive) -> bool {
    match directive
        .argument_text()
        .and_then(|text| text.trim().parse::<usize>().ok())
    {
        Some(length) => {
            *slot = Some(length);
            true
        }
        None => false,
    }
}
