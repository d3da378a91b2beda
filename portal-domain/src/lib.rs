pub mod content;

pub use content::{Informasi, InformasiStatus, InformasiType};
