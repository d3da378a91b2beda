pub mod database;
pub mod storage;

pub use database::{InMemoryInformasiRepository, SeaOrmInformasiRepository};
pub use storage::{InMemoryObjectStore, LocalObjectStore};
