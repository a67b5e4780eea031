pub mod constraint;
pub mod error;
pub mod report;
pub mod value;
pub mod value_type;
