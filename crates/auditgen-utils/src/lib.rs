//! Shared helpers for auditgen: identifier casing and content hashing.

pub mod case;
pub mod hash;
