//! Problem domain models.

mod attractions;
pub use self::attractions::*;

mod costs;
pub use self::costs::*;
