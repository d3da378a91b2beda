pub mod content;

pub use content::{
    CreateArticleRequest, CreateGalleryRequest, CreateGeneralRequest, CreateInformasiRequest,
    CreatedInformasi, DefaultInformasiService, InformasiDetail, InformasiService, ListedInformasi,
    UploadVerifier,
};
