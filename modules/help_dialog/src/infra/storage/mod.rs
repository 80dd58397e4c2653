//! Storage layer - configuration record stores

pub mod memory;

pub use memory::InMemoryConfigStore;
