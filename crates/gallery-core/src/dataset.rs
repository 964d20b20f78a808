use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{default_dataset_path, GalleryConfig};
use crate::error::GalleryError;
use crate::photo::{Category, Photo};
use crate::store::PhotoStore;

/// Where a loaded store came from, for frontend diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    BuiltIn,
}

/// Reads a JSON array of photo records.
pub fn load_photos_from_path(path: &Path) -> Result<Vec<Photo>, GalleryError> {
    let data = fs::read(path).map_err(|source| GalleryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| GalleryError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves a store: explicit dataset path, then the default location if a
/// file exists there, then the built-in collection.
pub fn load_store(config: &GalleryConfig) -> Result<(PhotoStore, DatasetSource), GalleryError> {
    if let Some(path) = &config.dataset {
        let photos = load_photos_from_path(path)?;
        return Ok((PhotoStore::new(photos)?, DatasetSource::File(path.clone())));
    }

    let default = default_dataset_path();
    if default.exists() {
        let photos = load_photos_from_path(&default)?;
        return Ok((PhotoStore::new(photos)?, DatasetSource::File(default)));
    }

    Ok((PhotoStore::new(demo_photos())?, DatasetSource::BuiltIn))
}

/// The built-in collection: a small team gallery spanning every category,
/// in display order.
pub fn demo_photos() -> Vec<Photo> {
    fn photo(
        id: &str,
        src: &str,
        category: Category,
        title: &str,
        description: &str,
        date: &str,
        tags: &[&str],
    ) -> Photo {
        Photo {
            id: id.to_string(),
            src: src.to_string(),
            alt: title.to_string(),
            category,
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    vec![
        photo(
            "team-standup",
            "photos/team-standup.jpg",
            Category::TeamVibes,
            "Monday morning standup",
            "The whole crew kicking off the week around the whiteboard",
            "2024-01-08",
            &["standup", "office", "morning"],
        ),
        photo(
            "team-retreat",
            "photos/team-retreat.jpg",
            Category::TeamVibes,
            "Hill trail retreat",
            "Annual offsite hike, halfway up before the rain came",
            "2024-04-19",
            &["retreat", "outdoors", "offsite"],
        ),
        photo(
            "team-newdesk",
            "photos/team-newdesk.jpg",
            Category::TeamVibes,
            "New joiners' first day",
            "Three new desks, three nervous smiles",
            "2024-06-03",
            &["onboarding", "office"],
        ),
        photo(
            "campaign-spring",
            "photos/campaign-spring.jpg",
            Category::CreativeCampaigns,
            "Spring poster shoot",
            "Studio day for the spring visuals",
            "2024-03-12",
            &["product-launch", "studio", "spring"],
        ),
        photo(
            "campaign-billboard",
            "photos/campaign-billboard.jpg",
            Category::CreativeCampaigns,
            "First billboard up",
            "Our artwork over the east station entrance",
            "2024-05-27",
            &["billboard", "outdoor-media"],
        ),
        photo(
            "campaign-fair",
            "photos/campaign-fair.jpg",
            Category::CreativeCampaigns,
            "Startup fair booth",
            "The stand ten minutes before the doors opened",
            "2024-09-14",
            &["booth", "fair", "print"],
        ),
        photo(
            "play-quizwin",
            "photos/play-quizwin.jpg",
            Category::WorkHardPlayHard,
            "Quiz night trophy",
            "Back office takes the pub quiz, again",
            "2024-02-23",
            &["quiz", "evening", "trophy"],
        ),
        photo(
            "play-shipday",
            "photos/play-shipday.jpg",
            Category::WorkHardPlayHard,
            "Ship day cake",
            "Release 2.0 went out at noon, cake arrived at one",
            "2024-07-01",
            &["release", "cake", "celebration"],
        ),
        photo(
            "play-tournament",
            "photos/play-tournament.jpg",
            Category::WorkHardPlayHard,
            "Table tennis final",
            "Semi-annual office championship decider",
            "2024-08-16",
            &["table-tennis", "tournament"],
        ),
        photo(
            "bts-lightrig",
            "photos/bts-lightrig.jpg",
            Category::BehindTheScenes,
            "Rigging the lights",
            "Two hours of cabling for a four second clip",
            "2024-03-11",
            &["grip", "studio", "setup"],
        ),
        photo(
            "bts-cutdesk",
            "photos/bts-cutdesk.jpg",
            Category::BehindTheScenes,
            "The edit bay at 2am",
            "Final cut of the fair reel, three timelines deep",
            "2024-09-20",
            &["editing", "video", "late-night"],
        ),
        photo(
            "bts-rehearsal",
            "photos/bts-rehearsal.jpg",
            Category::BehindTheScenes,
            "Keynote rehearsal",
            "Empty hall, full run-through",
            "2024-10-02",
            &["rehearsal", "stage"],
        ),
    ]
}
