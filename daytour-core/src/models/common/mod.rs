//! Common primitives shared by problem and solution models.

mod primitives;
pub use self::primitives::*;
