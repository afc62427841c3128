//! Value objects - immutable types that represent domain concepts

mod ign;

pub use ign::{Ign, IgnError};
