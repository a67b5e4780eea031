use shapeq::domain::constraint::{CheckType, Rules};
use shapeq::engine::build::parse;
use shapeq::engine::directive::tokenize;
use shapeq::{Object, Value, ValueType};

#[test]
fn nested_each_blocks_are_built_recursively() {
    let constraint = parse(
        ValueType::Array,
        "each(array,minLength=1,each(number,integer),checkType=first(1)|string,!contains=x)",
    )
    .expect("constraint");
    let Rules::Array(rules) = constraint.rules() else {
        panic!("array rules expected");
    };
    let inner = rules
        .element_constraints
        .get(&ValueType::Array)
        .expect("array sub-constraint");
    let Rules::Array(inner_rules) = inner.rules() else {
        panic!("inner array rules expected");
    };
    assert_eq!(inner_rules.min_length, Some(1));
    assert_eq!(inner_rules.check_type, Some(CheckType::First));
    assert!(inner_rules.element_constraints.contains_key(&ValueType::Number));
    assert!(rules.element_constraints.contains_key(&ValueType::String));

    let nested = Value::Array(vec![Value::from(vec![1.0, 2.5]), Value::from("abc")]);
    assert_eq!(
        shapeq::validate(
            &nested,
            "each(array,each(number,integer),checkType=first(1)|string,!contains=x)"
        ),
        ""
    );
}

#[test]
fn values_may_contain_equals_signs() {
    let directives = tokenize("match=^a=b$,note=x=y");
    assert_eq!(directives[0].value.as_deref(), Some("^a=b$"));
    assert_eq!(shapeq::validate(&Value::from("a=b"), "match=^a=b$"), "");
}

#[test]
fn keyword_spelling_variants_are_equivalent() {
    let zero = Value::Number(0.0);
    for constraint in ["notzero", "nonzero", "not zero", "NotZero", "NON ZERO"] {
        assert_eq!(shapeq::validate(&zero, constraint), "zero is not allowed");
    }
}

#[test]
fn bang_cancels_implied_negation() {
    assert_eq!(shapeq::validate(&Value::from("abc"), "!notStartsWith=ab"), "");
    assert_eq!(
        shapeq::validate(&Value::from("xyz"), "!notStartsWith=ab"),
        "startsWith failed: \"xyz\" does not start with \"ab\""
    );

    let object = Value::from(Object::new().with("id", 1.0));
    assert_eq!(shapeq::validate(&Value::from(Object::new()), "!notEmpty"), "");
    assert_eq!(
        shapeq::validate(&object, "!notEmpty"),
        "empty failed: object has 1 own properties"
    );
}

#[test]
fn max_exclusive_spellings_are_equivalent() {
    for constraint in ["maxx=10", "maxExclusive=10", "max exclusive=10"] {
        assert_eq!(shapeq::validate(&Value::Number(9.5), constraint), "");
        assert_eq!(
            shapeq::validate(&Value::Number(10.0), constraint),
            "value 10 is not below the exclusive maximum (maxx=10)"
        );
    }
}

#[test]
fn description_reflects_built_rules() {
    let constraint = parse(
        ValueType::Array,
        "maxLength=10,each(number,positive),checkType=step(2),bogus",
    )
    .expect("constraint");
    assert_eq!(
        constraint.to_string(),
        "array: maxLength=10, each(number,positive), checkType=step(2) (unrecognized directive `bogus`)"
    );
}

#[test]
fn constraints_are_rebuilt_per_call() {
    let first = parse(ValueType::Number, "min=1").expect("constraint");
    let second = parse(ValueType::Number, "min=1").expect("constraint");
    assert_eq!(first, second);
    assert!(parse(ValueType::Number, "'  '").is_none());
}

#[test]
fn built_rules_match_the_bound_type() {
    let blocks = [
        (ValueType::Number, "min=1"),
        (ValueType::String, "minLength=1"),
        (ValueType::Object, "notNested"),
        (ValueType::Array, "each(number)"),
        (ValueType::Boolean, "note=flag"),
        (ValueType::Regex, "bogus"),
    ];
    for (value_type, block) in blocks {
        let constraint = parse(value_type, block).expect("constraint");
        assert_eq!(constraint.value_type(), value_type);
        assert_eq!(
            std::mem::discriminant(constraint.rules()),
            std::mem::discriminant(&Rules::for_type(value_type))
        );
    }
}
