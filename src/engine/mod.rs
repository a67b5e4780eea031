pub mod build;
pub mod directive;
pub mod evaluate;
pub mod traverse;
pub mod validate;

pub use validate::{Validator, validate};
