//! API layer - in-process access to the domain service

pub mod native;
