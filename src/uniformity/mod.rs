pub mod chi_squared;
pub mod critical_value;
pub mod gamma;
pub mod uniformity_test;

pub use chi_squared::*;
pub use critical_value::*;
pub use uniformity_test::*;
