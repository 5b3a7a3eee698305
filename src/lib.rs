mod bounding_box;
#[cfg(feature = "csv")]
mod loader;
mod misc;
mod partition;
mod point_set;
mod quantile;
mod uniformity;

pub mod prelude {
    pub use crate::bounding_box::*;
    #[cfg(feature = "csv")]
    pub use crate::loader::*;
    pub use crate::misc::*;
    pub use crate::partition::*;
    pub use crate::point_set::*;
    pub use crate::quantile::*;
    pub use crate::uniformity::*;
}
