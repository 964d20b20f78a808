use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GalleryError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json parse error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate photo id {id:?}")]
    DuplicatePhotoId { id: String },
    #[error("photo at position {index} has an empty id")]
    EmptyPhotoId { index: usize },
    #[error("no photo with id {id:?} in the gallery")]
    UnknownPhoto { id: String },
}
