pub mod informasi;

pub use informasi::*;
