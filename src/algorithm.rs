pub mod curve;
pub mod hash;

pub use self::curve::{Curve, CURVES};
pub use self::hash::{HashAlgorithm, HASH_ALGORITHMS};
