//! Repository traits (ports) - define the interface for data access

mod repository;

pub use repository::{MemberRepository, StoreResult};
