use crate::domain::constraint::ObjectRules;
use crate::domain::error::Violation;
use crate::domain::value::{DEFAULT_CLASS, Object, Value};

pub(super) fn test(rules: &ObjectRules, object: &Object) -> Result<(), Violation> {
    if rules.empty && rules.not_empty {
        return Err(Violation::conflict("empty", "!empty"));
    }
    if let Some(name) = rules
        .has_properties
        .iter()
        .find(|name| rules.not_has_properties.contains(*name))
    {
        return Err(Violation::conflict(
            format!("hasProperties({name})"),
            format!("!hasProperties({name})"),
        ));
    }

    if rules.empty && !object.is_empty() {
        return Err(Violation::rule(
            "empty",
            format!("object has {} own properties", object.len()),
        ));
    }
    if rules.not_empty && object.is_empty() {
        return Err(Violation::rule("!empty", "object has no own properties"));
    }
    if let Some(name) = rules
        .has_properties
        .iter()
        .find(|name| !object.contains_key(name))
    {
        return Err(Violation::rule(
            "hasProperties",
            format!("missing property `{name}`"),
        ));
    }
    if let Some(name) = rules
        .not_has_properties
        .iter()
        .find(|name| object.contains_key(name))
    {
        return Err(Violation::rule(
            "!hasProperties",
            format!("forbidden property `{name}` is present"),
        ));
    }
    if rules.not_nested {
        if let Some((name, _)) = object
            .iter()
            .find(|(_, value)| matches!(value, Value::Object(_)))
        {
            return Err(Violation::rule(
                "notNested",
                format!("property `{name}` is a nested object"),
            ));
        }
    }
    if rules.no_prototype && object.class_name() != DEFAULT_CLASS {
        return Err(Violation::rule(
            "noPrototype",
            format!("object derives from `{}`", object.class_name()),
        ));
    }
    if rules.can_serialize {
        if let Err(err) = serde_json::to_string(object) {
            return Err(Violation::rule(
                "canSerialize",
                format!("object cannot be serialized: {err}"),
            ));
        }
    }
    if rules.no_falsey_props {
        if let Some((name, value)) = object.iter().find(|(_, value)| !value.is_truthy()) {
            return Err(Violation::rule(
                "noFalseyProps",
                format!("property `{name}` is falsey ({value})"),
            ));
        }
    }
    if rules.no_truthy_props {
        if let Some((name, value)) = object.iter().find(|(_, value)| value.is_truthy()) {
            return Err(Violation::rule(
                "noTruthyProps",
                format!("property `{name}` is truthy ({value})"),
            ));
        }
    }
    if let Some(class_name) = &rules.instance_of {
        if object.class_name() != class_name {
            return Err(Violation::rule(
                "instanceOf",
                format!(
                    "object is an instance of `{}`, not `{class_name}`",
                    object.class_name()
                ),
            ));
        }
    }
    if let Some(class_name) = &rules.not_instance_of {
        if object.class_name() == class_name {
            return Err(Violation::rule(
                "!instanceOf",
                format!("object is an instance of `{class_name}`"),
            ));
        }
    }
    Ok(())
}
