use rand::rngs::StdRng;

use crate::domain::error::Violation;
use crate::domain::value::Value;
use crate::domain::value_type::ValueType;
use crate::engine::build;
use crate::engine::evaluate;
use crate::engine::traverse::{IndexSampler, RngSampler};

/// Validates `value` against `constraint`; returns an empty string on success
/// or the violation message.
pub fn validate(value: &Value, constraint: &str) -> String {
    Validator::new().validate(value, constraint)
}

/// Entry point: classify, build, evaluate.
///
/// A fresh constraint is built on every call. Without a seed, random traversal
/// modes draw from an OS-seeded generator, created only when a random mode
/// actually samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    seed: Option<u64>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes random traversal modes repeatable across calls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns `""` on success, else the violation message. Never fails.
    pub fn validate(&self, value: &Value, constraint: &str) -> String {
        match self.check(value, constraint) {
            Ok(()) => String::new(),
            Err(violation) => violation.to_string(),
        }
    }

    /// Checks `value`, binding the constraint to the value's own type.
    pub fn check(&self, value: &Value, constraint: &str) -> Result<(), Violation> {
        self.check_typed(value, ValueType::of(value), constraint)
    }

    /// Checks `value` against a constraint bound to a declared type name, so a
    /// value of another kind fails the base-type check.
    pub fn check_as(
        &self,
        value: &Value,
        declared_type: &str,
        constraint: &str,
    ) -> Result<(), Violation> {
        self.check_typed(value, ValueType::from_name(declared_type), constraint)
    }

    /// Checks `value` drawing random selections from `sampler`.
    pub fn check_with(
        &self,
        value: &Value,
        constraint: &str,
        sampler: &mut dyn IndexSampler,
    ) -> Result<(), Violation> {
        run(value, ValueType::of(value), constraint, sampler)
    }

    fn check_typed(
        &self,
        value: &Value,
        value_type: ValueType,
        constraint: &str,
    ) -> Result<(), Violation> {
        match self.seed {
            Some(seed) => run(value, value_type, constraint, &mut RngSampler::from_seed(seed)),
            None => run(value, value_type, constraint, &mut LazySampler::default()),
        }
    }
}

/// Seeds an OS-backed generator on the first random pick only.
#[derive(Default)]
struct LazySampler {
    inner: Option<RngSampler<StdRng>>,
}

impl IndexSampler for LazySampler {
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        self.inner
            .get_or_insert_with(RngSampler::from_os_rng)
            .sample(len, amount)
    }
}

fn run(
    value: &Value,
    value_type: ValueType,
    constraint: &str,
    sampler: &mut dyn IndexSampler,
) -> Result<(), Violation> {
    let Some(constraint) = build::parse(value_type, constraint) else {
        return Ok(());
    };
    evaluate::test(&constraint, value, sampler).inspect_err(|violation| {
        tracing::debug!(
            event = "violation",
            kind = violation.kind(),
            message = %violation
        );
    })
}
