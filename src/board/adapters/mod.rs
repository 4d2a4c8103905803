//! Adapter implementations of the board's ports.

pub mod fs;
pub mod memory;

pub use fs::DirSnapshotStore;
pub use memory::InMemorySnapshotStore;
