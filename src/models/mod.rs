pub mod report;
pub mod role;
pub mod session;

/// Opaque numeric identity of a chat member.
pub type UserId = i64;
