pub mod error;
pub mod repository;
pub mod storage;

pub use error::IngestError;
pub use repository::InformasiRepository;
pub use storage::{ObjectMetadata, ObjectStore, StorageRef, UploadTarget};
