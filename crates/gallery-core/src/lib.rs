pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod photo;
pub mod selection;
pub mod session;
pub mod store;

pub use config::{default_dataset_path, expand_tilde, GalleryConfig};
pub use dataset::{demo_photos, load_photos_from_path, load_store, DatasetSource};
pub use error::GalleryError;
pub use filter::{photo_matches_query, visible_indices, visible_photos};
pub use photo::{
    category_catalog, Category, CategoryFilter, CategoryInfo, Photo, ALL_PHOTOS_ICON,
    ALL_PHOTOS_LABEL,
};
pub use selection::{next_index, prev_index};
pub use session::{GallerySession, GalleryView, ModalKey, ScrollLock};
pub use store::PhotoStore;
