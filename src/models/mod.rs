//! Data models for registry entities.

pub mod member;

pub use member::Member;
