pub mod informasi_service;
pub mod slug;
pub mod upload_verifier;
pub mod validator;

pub use informasi_service::{
    CreateArticleRequest, CreateGalleryRequest, CreateGeneralRequest, CreateInformasiRequest,
    CreatedInformasi, DefaultInformasiService, InformasiDetail, InformasiService, ListedInformasi,
};
pub use upload_verifier::UploadVerifier;
