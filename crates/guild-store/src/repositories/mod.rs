//! Member repository implementations

mod memory_member;
mod redis_member;

pub use memory_member::MemoryMemberRepository;
pub use redis_member::{RedisMemberRepository, MEMBER_KEY_PREFIX};
