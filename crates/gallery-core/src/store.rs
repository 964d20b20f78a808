use std::collections::HashMap;

use crate::error::GalleryError;
use crate::photo::Photo;

/// Ordered, immutable photo collection. Populated once at startup; every
/// filtered view is a derived subsequence, never an in-place edit.
#[derive(Debug, Default)]
pub struct PhotoStore {
    photos: Vec<Photo>,
    by_id: HashMap<String, usize>,
}

impl PhotoStore {
    pub fn new(photos: Vec<Photo>) -> Result<Self, GalleryError> {
        let mut by_id = HashMap::with_capacity(photos.len());
        for (index, photo) in photos.iter().enumerate() {
            if photo.id.is_empty() {
                return Err(GalleryError::EmptyPhotoId { index });
            }
            if by_id.insert(photo.id.clone(), index).is_some() {
                return Err(GalleryError::DuplicatePhotoId {
                    id: photo.id.clone(),
                });
            }
        }
        Ok(Self { photos, by_id })
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Photo> {
        self.by_id.get(id).and_then(|idx| self.photos.get(*idx))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
