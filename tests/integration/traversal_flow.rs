use std::collections::BTreeSet;

use shapeq::domain::constraint::CheckType;
use shapeq::engine::traverse::{IndexSampler, RngSampler, SequentialSampler, select_indices};
use shapeq::{Validator, Value};

/// Fails every element it is asked to check: index `i` holds `-i - 1`.
fn negatives(len: usize) -> Value {
    Value::Array((0..len).map(|i| Value::Number(-(i as f64) - 1.0)).collect())
}

/// Records which indices were checked by making exactly one element invalid.
fn tested_indices(len: usize, check_type: &str) -> BTreeSet<usize> {
    (0..len)
        .filter(|bad| {
            let items = (0..len)
                .map(|i| Value::Number(if i == *bad { -1.0 } else { 1.0 }))
                .collect();
            let constraint = format!("each(number,positive),checkType={check_type}");
            Validator::new()
                .check_with(&Value::Array(items), &constraint, &mut SequentialSampler)
                .is_err()
        })
        .collect()
}

#[test]
fn head_tail_modes_touch_expected_indices() {
    assert_eq!(tested_indices(5, "first(2)"), BTreeSet::from([0, 1]));
    assert_eq!(tested_indices(5, "last(2)"), BTreeSet::from([3, 4]));
    assert_eq!(tested_indices(5, "firstThenLast(1,1)"), BTreeSet::from([0, 4]));
    assert_eq!(tested_indices(5, "step(2)"), BTreeSet::from([0, 2, 4]));
    assert_eq!(tested_indices(5, "all"), BTreeSet::from([0, 1, 2, 3, 4]));
    assert!(tested_indices(5, "none").is_empty());
}

#[test]
fn quoted_parameters_and_step_conventions() {
    assert_eq!(
        tested_indices(8, "firstThenStep(\"2,3\")"),
        BTreeSet::from([0, 1, 2, 5])
    );
    assert_eq!(tested_indices(8, "firstThenStep(2,0)"), BTreeSet::from([0, 1]));
    assert_eq!(tested_indices(8, "firstThenStep(0,4)"), BTreeSet::from([0, 4]));
}

#[test]
fn each_without_check_type_tests_all_elements() {
    let err = Validator::new()
        .check(&negatives(3), "each(number,positive)")
        .expect_err("every element is negative");
    assert_eq!(err.to_string(), "-1 is not positive");
}

#[test]
fn elements_without_sub_constraint_are_skipped() {
    let value = Value::Array(vec![Value::from("x"), Value::Number(-1.0)]);
    assert!(
        Validator::new()
            .check(&value, "each(string,minLength=1),checkType=all")
            .is_ok()
    );
}

#[test]
fn first_failing_element_aborts_the_array() {
    let err = Validator::new()
        .check(&negatives(4), "each(number,min=-2),checkType=all")
        .expect_err("third element below min");
    assert_eq!(err.to_string(), "value -3 is below the minimum (min=-2)");
}

struct Fixed(Vec<usize>);

impl IndexSampler for Fixed {
    fn sample(&mut self, _len: usize, _amount: usize) -> Vec<usize> {
        self.0.clone()
    }
}

#[test]
fn injected_sampler_controls_random_modes() {
    let items: Vec<Value> = (0..6)
        .map(|i| Value::Number(if i == 3 { 0.5 } else { 1.0 }))
        .collect();
    let value = Value::Array(items);
    let constraint = "each(number,integer),checkType=random(2)";

    assert!(
        Validator::new()
            .check_with(&value, constraint, &mut Fixed(vec![0, 5]))
            .is_ok()
    );
    assert!(
        Validator::new()
            .check_with(&value, constraint, &mut Fixed(vec![3, 1]))
            .is_err()
    );
    assert_eq!(
        select_indices(
            6,
            CheckType::FirstThenRandom,
            Some("1"),
            Some("2"),
            &mut Fixed(vec![3, 0]),
        ),
        vec![0, 1, 4]
    );
}

#[test]
fn seeded_random_selection_stays_within_budget() {
    for seed in 0..20 {
        let picked = select_indices(
            30,
            CheckType::FirstThenRandom,
            Some("3"),
            Some("4"),
            &mut RngSampler::from_seed(seed),
        );
        assert_eq!(picked.len(), 7);
        assert_eq!(&picked[..3], &[0, 1, 2]);
        assert!(picked[3..].iter().all(|index| (3..30).contains(index)));
        assert_eq!(picked.iter().collect::<BTreeSet<_>>().len(), 7);
    }
}

#[test]
fn out_of_range_sampler_picks_are_ignored() {
    let value = negatives(3);
    assert!(
        Validator::new()
            .check_with(
                &value,
                "each(number,positive),checkType=firstThenRandom(0,1)",
                &mut Fixed(vec![3, 7]),
            )
            .is_ok()
    );

    let err = Validator::new()
        .check_with(
            &value,
            "each(number,positive),checkType=firstThenRandom(1,1)",
            &mut Fixed(vec![3]),
        )
        .expect_err("head element is negative");
    assert_eq!(err.to_string(), "-1 is not positive");

    assert_eq!(
        select_indices(
            5,
            CheckType::Random,
            Some("1"),
            None,
            &mut Fixed(vec![2, 2, 2]),
        ),
        vec![2]
    );
}
