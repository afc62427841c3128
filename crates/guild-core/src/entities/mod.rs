//! Domain entities - core business objects

mod member_record;

pub use member_record::MemberRecord;
