use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct GalleryConfig {
    /// Explicit dataset file; `None` falls back to the default location and
    /// then to the built-in collection.
    pub dataset: Option<PathBuf>,
}

impl GalleryConfig {
    pub fn with_dataset(path: PathBuf) -> Self {
        Self {
            dataset: Some(expand_tilde(&path)),
        }
    }
}

pub fn default_dataset_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        return home.join("Pictures").join("gallery").join("photos.json");
    }
    PathBuf::from("./photos.json")
}

pub fn expand_tilde(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str == "~" || path_str.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            let suffix = path_str.trim_start_matches('~');
            return home.join(suffix.trim_start_matches('/'));
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{expand_tilde, GalleryConfig};

    #[test]
    fn with_dataset_expands_tilde() {
        let config = GalleryConfig::with_dataset(PathBuf::from("/tmp/photos.json"));
        assert_eq!(config.dataset.as_deref(), Some(Path::new("/tmp/photos.json")));
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(
            expand_tilde(Path::new("photos/a.json")),
            PathBuf::from("photos/a.json")
        );
    }
}
