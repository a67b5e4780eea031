use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value::Value;
use crate::domain::value_type::ValueType;

/// Typed constraint record built from one directive string.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    value_type: ValueType,
    pub note: Option<String>,
    /// First unrecognized directive, kept for diagnostics only.
    pub bad_name: Option<String>,
    /// Always the variant `Rules::for_type` picks for `value_type`.
    pub(crate) rules: Rules,
}

impl Constraint {
    /// Empty constraint bound to `value_type`.
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            note: None,
            bad_name: None,
            rules: Rules::for_type(value_type),
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

/// Variant-specific rules, one variant per constrainable value kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Rules {
    /// Only the base-type check applies.
    Base,
    Number(NumberRules),
    String(StringRules),
    Object(ObjectRules),
    Array(ArrayRules),
}

impl Rules {
    pub fn for_type(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Number => Self::Number(NumberRules::default()),
            ValueType::String => Self::String(StringRules::default()),
            ValueType::Object => Self::Object(ObjectRules::default()),
            ValueType::Array => Self::Array(ArrayRules::default()),
            ValueType::None | ValueType::Boolean | ValueType::Regex => Self::Base,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberRules {
    pub is_integer: bool,
    pub is_positive: bool,
    pub is_negative: bool,
    pub not_zero: bool,
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
    /// Exclusive upper bound.
    pub max_exclusive: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub starts_with: Option<String>,
    pub not_starts_with: Option<String>,
    pub ends_with: Option<String>,
    pub not_ends_with: Option<String>,
    pub contains: Option<String>,
    pub not_contains: Option<String>,
    /// Regular expression sources.
    pub matches: Option<String>,
    pub not_matches: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectRules {
    pub empty: bool,
    pub not_empty: bool,
    pub has_properties: Vec<String>,
    pub not_has_properties: Vec<String>,
    pub not_nested: bool,
    pub no_prototype: bool,
    pub can_serialize: bool,
    pub no_falsey_props: bool,
    pub no_truthy_props: bool,
    pub instance_of: Option<String>,
    pub not_instance_of: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub contains: Option<Value>,
    pub not_contains: Option<Value>,
    /// Sub-constraints keyed by element type.
    pub element_constraints: BTreeMap<ValueType, Constraint>,
    pub check_type: Option<CheckType>,
    pub check_parameter: Option<String>,
    pub check_parameter2: Option<String>,
}

impl ArrayRules {
    pub fn has_element_checks(&self) -> bool {
        !self.element_constraints.is_empty() || self.check_type.is_some()
    }
}

/// Sampling strategy choosing which array indices get element checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckType {
    None,
    All,
    Random,
    Step,
    First,
    Last,
    FirstThenLast,
    FirstThenStep,
    FirstThenRandom,
}

impl CheckType {
    /// Case-insensitive; spaces between words are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let folded: String = name
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        Some(match folded.as_str() {
            "none" => Self::None,
            "all" => Self::All,
            "random" => Self::Random,
            "step" => Self::Step,
            "first" => Self::First,
            "last" => Self::Last,
            "firstthenlast" => Self::FirstThenLast,
            "firstthenstep" => Self::FirstThenStep,
            "firstthenrandom" => Self::FirstThenRandom,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
            Self::Random => "random",
            Self::Step => "step",
            Self::First => "first",
            Self::Last => "last",
            Self::FirstThenLast => "firstThenLast",
            Self::FirstThenStep => "firstThenStep",
            Self::FirstThenRandom => "firstThenRandom",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value_type)?;
        let directives = self.rules.directives();
        if directives.is_empty() {
            f.write_str(": any")?;
        } else {
            write!(f, ": {}", directives.join(", "))?;
        }
        if let Some(note) = &self.note {
            write!(f, " (note: {note})")?;
        }
        if let Some(bad_name) = &self.bad_name {
            write!(f, " (unrecognized directive `{bad_name}`)")?;
        }
        Ok(())
    }
}

impl Rules {
    /// Canonical directive spellings for the active rules.
    pub fn directives(&self) -> Vec<String> {
        let mut out = Vec::new();
        match self {
            Self::Base => {}
            Self::Number(rules) => {
                flag(&mut out, rules.is_integer, "integer");
                flag(&mut out, rules.not_zero, "notZero");
                flag(&mut out, rules.is_positive, "positive");
                flag(&mut out, rules.is_negative, "negative");
                keyed(&mut out, "min", rules.min);
                keyed(&mut out, "max", rules.max);
                keyed(&mut out, "maxx", rules.max_exclusive);
            }
            Self::String(rules) => {
                keyed(&mut out, "minLength", rules.min_length);
                keyed(&mut out, "maxLength", rules.max_length);
                keyed(&mut out, "startsWith", rules.starts_with.as_ref());
                keyed(&mut out, "!startsWith", rules.not_starts_with.as_ref());
                keyed(&mut out, "endsWith", rules.ends_with.as_ref());
                keyed(&mut out, "!endsWith", rules.not_ends_with.as_ref());
                keyed(&mut out, "contains", rules.contains.as_ref());
                keyed(&mut out, "!contains", rules.not_contains.as_ref());
                keyed(&mut out, "match", rules.matches.as_ref());
                keyed(&mut out, "!match", rules.not_matches.as_ref());
            }
            Self::Object(rules) => {
                flag(&mut out, rules.empty, "empty");
                flag(&mut out, rules.not_empty, "!empty");
                if !rules.has_properties.is_empty() {
                    out.push(format!("hasProperties({})", rules.has_properties.join(",")));
                }
                if !rules.not_has_properties.is_empty() {
                    out.push(format!(
                        "!hasProperties({})",
                        rules.not_has_properties.join(",")
                    ));
                }
                flag(&mut out, rules.not_nested, "notNested");
                flag(&mut out, rules.no_prototype, "noPrototype");
                flag(&mut out, rules.can_serialize, "canSerialize");
                flag(&mut out, rules.no_falsey_props, "noFalseyProps");
                flag(&mut out, rules.no_truthy_props, "noTruthyProps");
                keyed(&mut out, "instanceOf", rules.instance_of.as_ref());
                keyed(&mut out, "!instanceOf", rules.not_instance_of.as_ref());
            }
            Self::Array(rules) => {
                keyed(&mut out, "minLength", rules.min_length);
                keyed(&mut out, "maxLength", rules.max_length);
                keyed(&mut out, "contains", rules.contains.as_ref());
                keyed(&mut out, "!contains", rules.not_contains.as_ref());
                if !rules.element_constraints.is_empty() {
                    let blocks: Vec<String> = rules
                        .element_constraints
                        .iter()
                        .map(|(value_type, constraint)| {
                            let mut block = vec![value_type.to_string()];
                            block.extend(constraint.rules.directives());
                            block.join(",")
                        })
                        .collect();
                    out.push(format!("each({})", blocks.join("|")));
                }
                if let Some(check_type) = rules.check_type {
                    let params: Vec<&str> = [&rules.check_parameter, &rules.check_parameter2]
                        .into_iter()
                        .flatten()
                        .map(String::as_str)
                        .collect();
                    if params.is_empty() {
                        out.push(format!("checkType={check_type}"));
                    } else {
                        out.push(format!("checkType={check_type}({})", params.join(",")));
                    }
                }
            }
        }
        out
    }
}

fn flag(out: &mut Vec<String>, enabled: bool, name: &str) {
    if enabled {
        out.push(name.to_string());
    }
}

fn keyed<T: fmt::Display>(out: &mut Vec<String>, name: &str, value: Option<T>) {
    if let Some(value) = value {
        out.push(format!("{name}={value}"));
    }
}
