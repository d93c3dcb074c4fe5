//! FileSystem abstraction shared by the tree operations

mod memory;
mod real;
mod r#trait;

pub use memory::MemoryFileSystem;
pub use r#trait::FileSystem;
pub use real::RealFileSystem;
