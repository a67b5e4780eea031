//! Element traversal: picks array indices per sampling mode and checks each
//! selected element against the sub-constraint for its runtime type.

use std::collections::BTreeMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::constraint::{CheckType, Constraint};
use crate::domain::error::Violation;
use crate::domain::value::Value;
use crate::domain::value_type::ValueType;
use crate::engine::evaluate;

/// Source of random index subsets for `random` and `firstThenRandom`.
pub trait IndexSampler {
    /// Returns up to `amount` distinct indices from `0..len`.
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// Uniform sampling without replacement backed by a `rand` generator.
#[derive(Debug)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> IndexSampler for RngSampler<R> {
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

/// Deterministic sampler that always picks the lowest indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl IndexSampler for SequentialSampler {
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(len)).collect()
    }
}

/// Selects the indices of an array of `len` elements that a mode tests.
///
/// Parameters are numeric strings; missing or unparsable ones count as zero and
/// fractional ones are floored. The result is ascending and free of duplicates.
pub fn select_indices(
    len: usize,
    check_type: CheckType,
    p1: Option<&str>,
    p2: Option<&str>,
    sampler: &mut dyn IndexSampler,
) -> Vec<usize> {
    let p1 = parameter(p1);
    let p2 = parameter(p2);
    let head = p1.min(len);
    match check_type {
        CheckType::None => Vec::new(),
        CheckType::All => (0..len).collect(),
        CheckType::First => (0..head).collect(),
        CheckType::Last => (len - p1.min(len)..len).collect(),
        CheckType::Step => stepped(0, len, p1),
        CheckType::Random => pick(sampler, len, p1),
        CheckType::FirstThenLast => {
            let tail_start = len.saturating_sub(p2).max(head);
            (0..head).chain(tail_start..len).collect()
        }
        CheckType::FirstThenStep => {
            let mut indices: Vec<usize> = (0..head).collect();
            indices.extend(stepped(head, len, p2));
            indices
        }
        CheckType::FirstThenRandom => {
            let mut indices: Vec<usize> = (0..head).collect();
            let rest = pick(sampler, len - head, p2);
            indices.extend(rest.into_iter().map(|offset| head + offset));
            indices
        }
    }
}

/// Checks the selected elements; the first element violation aborts the array.
///
/// Elements whose type has no configured sub-constraint are skipped.
pub fn traverse(
    items: &[Value],
    check_type: CheckType,
    p1: Option<&str>,
    p2: Option<&str>,
    element_constraints: &BTreeMap<ValueType, Constraint>,
    sampler: &mut dyn IndexSampler,
) -> Result<(), Violation> {
    let indices = select_indices(items.len(), check_type, p1, p2, sampler);
    tracing::debug!(
        event = "element_traversal",
        mode = %check_type,
        len = items.len(),
        selected = indices.len()
    );
    for index in indices {
        let Some(item) = items.get(index) else {
            continue;
        };
        let Some(constraint) = element_constraints.get(&ValueType::of(item)) else {
            continue;
        };
        if let Err(violation) = evaluate::test(constraint, item, sampler) {
            tracing::debug!(event = "violation", index, kind = violation.kind());
            return Err(violation);
        }
    }
    Ok(())
}

/// `start, start+step, …` below `len`; a zero step selects nothing.
fn stepped(start: usize, len: usize, step: usize) -> Vec<usize> {
    if step == 0 {
        return Vec::new();
    }
    (start..len).step_by(step).collect()
}

/// Sampler picks within `0..len`, sorted, deduplicated and capped at `amount`.
fn pick(sampler: &mut dyn IndexSampler, len: usize, amount: usize) -> Vec<usize> {
    let mut indices = sampler.sample(len, amount);
    indices.retain(|index| *index < len);
    indices.sort_unstable();
    indices.dedup();
    indices.truncate(amount.min(len));
    indices
}

fn parameter(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim) else {
        return 0;
    };
    if let Ok(count) = raw.parse::<usize>() {
        return count;
    }
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() && number > 0.0 => number.floor() as usize,
        _ => 0,
    }
}
