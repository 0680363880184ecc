//! Blob storage backends for the persisted task list.

mod file;
mod memory;
mod traits;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::BlobStore;
