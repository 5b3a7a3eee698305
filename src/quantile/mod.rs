pub mod percentile;
pub mod quantile_binner;
pub mod quantile_table;

pub use percentile::*;
pub use quantile_binner::*;
pub use quantile_table::*;
