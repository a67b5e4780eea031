pub mod check;
pub mod describe;
