pub mod entity;
pub mod memory;
pub mod repository;

pub use memory::InMemoryInformasiRepository;
pub use repository::SeaOrmInformasiRepository;
