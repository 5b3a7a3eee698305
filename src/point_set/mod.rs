pub mod index_subset;
#[allow(clippy::module_inception)]
pub mod point_set;

pub use index_subset::*;
pub use point_set::*;
