//! Constraint validation engine.
//!
//! A constraint string such as `"integer,min=1,max=10"` is parsed into a typed
//! constraint for the value's kind and evaluated against a [`Value`]; the first
//! violated rule is reported.
//!
//! ```
//! use shapeq::{Value, validate};
//!
//! assert_eq!(validate(&Value::Number(7.0), "integer,min=5,max=10"), "");
//! assert_eq!(
//!     validate(&Value::Number(11.0), "min=5,max=10"),
//!     "value 11 is above the maximum (max=10)"
//! );
//! ```

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
pub mod logging;

pub use domain::constraint::Constraint;
pub use domain::error::Violation;
pub use domain::value::{Object, Value};
pub use domain::value_type::ValueType;
pub use engine::{Validator, validate};
