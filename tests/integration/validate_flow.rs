use shapeq::{Object, Validator, Value, Violation, validate};

fn num(value: f64) -> Value {
    Value::Number(value)
}

#[test]
fn empty_constraint_passes_any_value() {
    let values = [
        Value::Null,
        num(-3.5),
        Value::from("text"),
        Value::Bool(false),
        Value::from(vec![1.0, 2.0]),
        Value::Object(Object::new()),
        Value::Regex("a+".to_string()),
    ];
    for value in &values {
        assert_eq!(validate(value, ""), "", "{value} should pass");
    }
}

#[test]
fn integer_passes_only_whole_numbers() {
    for value in [0.0, 3.0, -12.0, 1e6] {
        assert_eq!(validate(&num(value), "integer"), "");
    }
    for value in [0.5, -1.25, f64::NAN] {
        let err = Validator::new()
            .check(&num(value), "integer")
            .expect_err("fractional value");
        assert_eq!(err.kind(), "integer");
    }
}

#[test]
fn inclusive_range_names_violated_bound() {
    let validator = Validator::new();
    for value in [5.0, 7.0, 10.0] {
        assert!(validator.check(&num(value), "min=5,max=10").is_ok());
    }
    assert_eq!(
        validate(&num(4.0), "min=5,max=10"),
        "value 4 is below the minimum (min=5)"
    );
    assert_eq!(
        validate(&num(11.0), "min=5,max=10"),
        "value 11 is above the maximum (max=10)"
    );
}

#[test]
fn exclusive_maximum() {
    assert_eq!(
        validate(&num(10.0), "maxx=10"),
        "value 10 is not below the exclusive maximum (maxx=10)"
    );
    assert_eq!(validate(&num(9.999), "maxx=10"), "");
}

#[test]
fn string_conflict_is_reported_before_content() {
    for text in ["abc", "cde", ""] {
        let err = Validator::new()
            .check(&Value::from(text), "startsWith=ab,!startsWith=cd")
            .expect_err("conflict");
        assert!(matches!(err, Violation::DirectiveConflict { .. }));
    }
}

#[test]
fn no_constraint_short_circuits_in_any_position() {
    for constraint in [
        "noconstraint,min=100",
        "min=100,noconstraint",
        "min=100,no constraint,max=0",
        "NoConstraint",
    ] {
        assert_eq!(validate(&num(1.0), constraint), "", "{constraint}");
    }
}

#[test]
fn unrecognized_directive_never_fails() {
    assert_eq!(validate(&num(3.0), "foobar"), "");
    assert_eq!(validate(&num(3.0), "foobar,integer,positive"), "");
    assert_eq!(
        validate(&num(-3.0), "foobar,positive"),
        "-3 is not positive"
    );
}

#[test]
fn quoted_constraints_match_unquoted() {
    let short = Value::from("a");
    let expected = validate(&short, "minLength=2");
    assert!(!expected.is_empty());
    assert_eq!(validate(&short, "'minLength=2'"), expected);
    assert_eq!(validate(&short, "\"minLength=2\""), expected);
    assert_eq!(validate(&Value::from("ab"), "'minLength=2'"), "");
}

#[test]
fn object_constraints_in_rule_order() {
    let user = Object::new()
        .with("id", 7.0)
        .with("name", "Ada")
        .with("tags", Value::from(vec!["admin"]));
    let value = Value::Object(user);

    assert_eq!(
        validate(
            &value,
            "!empty,hasProperties(id,name),!hasProperties(password),notNested,noPrototype,canSerialize,noFalseyProps,instanceOf=Object"
        ),
        ""
    );
    assert_eq!(
        validate(&value, "hasProperties(id,email)"),
        "hasProperties failed: missing property `email`"
    );
    assert_eq!(
        validate(&value, "empty,!empty,hasProperties(zzz)"),
        "conflicting directives `empty` and `!empty`"
    );
}

#[test]
fn class_names_drive_prototype_rules() {
    let point = Value::Object(Object::with_class("Point").with("x", 1.0).with("y", 2.0));
    assert_eq!(validate(&point, "instanceOf=Point,!instanceOf=Line"), "");
    assert_eq!(
        validate(&point, "noPrototype"),
        "noPrototype failed: object derives from `Point`"
    );
}

#[test]
fn array_membership_and_lengths() {
    let value = Value::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(validate(&value, "minLength=1,maxLength=3,contains=2"), "");
    assert_eq!(validate(&value, "!contains=9"), "");
    assert_eq!(
        validate(&value, "contains=2,!contains=9"),
        "conflicting directives `contains` and `!contains`"
    );
    assert_eq!(
        validate(&value, "maxLength=2"),
        "length 3 is above the maximum (maxLength=2)"
    );
    assert_eq!(
        validate(&value, "contains='2'"),
        "contains failed: array does not contain \"2\""
    );
}

#[test]
fn each_with_check_all_reports_element_violation() {
    let constraint = "each(number,positive,integer),checkType=all";
    assert_eq!(validate(&Value::from(vec![1.0, 2.0, 3.0]), constraint), "");
    assert_eq!(
        validate(&Value::from(vec![1.0, -2.0, 3.0]), constraint),
        "-2 is not positive"
    );
    assert_eq!(
        validate(&Value::from(vec![1.0, 2.0, 3.5]), constraint),
        "3.5 is not an integer"
    );
}

#[test]
fn heterogeneous_arrays_use_per_type_constraints() {
    let value = Value::Array(vec![
        num(1.0),
        Value::from("ab"),
        Value::Bool(true),
        Value::Object(Object::new().with("id", 1.0)),
    ]);
    let constraint = "each(number,positive|string,minLength=2|object,hasProperties(id))";
    assert_eq!(validate(&value, constraint), "");

    let short = Value::Array(vec![num(1.0), Value::from("a")]);
    assert_eq!(
        validate(&short, constraint),
        "length 1 is below the minimum (minLength=2)"
    );
}

#[test]
fn declared_type_mismatch_fails_base_check() {
    let err = Validator::new()
        .check_as(&Value::from(vec![1.0]), "Person", "notNested")
        .expect_err("array declared as object");
    assert_eq!(err.to_string(), "expected type object but found array");
}
