//! # guild-core
//!
//! Domain layer containing the member record entity, value objects, and the
//! repository trait. This crate has zero dependencies on infrastructure
//! (Redis, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::MemberRecord;
pub use error::StoreError;
pub use traits::{MemberRepository, StoreResult};
pub use value_objects::{Ign, IgnError};
