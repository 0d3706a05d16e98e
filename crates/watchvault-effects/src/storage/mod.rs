//! Position storage handlers

mod memory;

pub use memory::MemoryPositionStore;
