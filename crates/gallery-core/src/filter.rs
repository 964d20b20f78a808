use crate::photo::{CategoryFilter, Photo};

/// Computes the visible subset as indices into `photos`, preserving the
/// original order. Category and query compose as logical AND; an empty
/// result is a valid zero-match state, not an error.
pub fn visible_indices(photos: &[Photo], category: CategoryFilter, query: &str) -> Vec<usize> {
    let query = active_query(query);
    let mut visible = Vec::new();
    for (index, photo) in photos.iter().enumerate() {
        if !category.admits(photo.category) {
            continue;
        }
        if let Some(query) = query.as_deref() {
            if !photo_matches_query(photo, query) {
                continue;
            }
        }
        visible.push(index);
    }
    visible
}

pub fn visible_photos<'a>(
    photos: &'a [Photo],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Photo> {
    visible_indices(photos, category, query)
        .into_iter()
        .map(|index| &photos[index])
        .collect()
}

// Any non-empty query is active; the input is not trimmed, so a
// whitespace-only query filters like any other string.
fn active_query(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Substring match (not tokenized, not fuzzy) against the lowercased title,
/// description, and each tag individually. `query_lower` must already be
/// lowercased.
pub fn photo_matches_query(photo: &Photo, query_lower: &str) -> bool {
    photo.title.to_lowercase().contains(query_lower)
        || photo.description.to_lowercase().contains(query_lower)
        || photo
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
}

#[cfg(test)]
mod tests {
    use super::{photo_matches_query, visible_indices, visible_photos};
    use crate::photo::{Category, CategoryFilter, Photo};

    fn photo(id: &str, category: Category, title: &str, description: &str, tags: &[&str]) -> Photo {
        Photo {
            id: id.to_string(),
            src: format!("photos/{id}.jpg"),
            alt: title.to_string(),
            category,
            title: title.to_string(),
            description: description.to_string(),
            date: "2024-03-01".to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    fn fixture() -> Vec<Photo> {
        vec![
            photo(
                "p1",
                Category::TeamVibes,
                "Monday standup",
                "The whole team in one room",
                &["standup", "office"],
            ),
            photo(
                "p2",
                Category::CreativeCampaigns,
                "Spring poster shoot",
                "Studio day for the new campaign",
                &["product-launch", "studio"],
            ),
            photo(
                "p3",
                Category::TeamVibes,
                "Team retreat",
                "Hiking day in the hills",
                &["retreat", "outdoors"],
            ),
            photo(
                "p4",
                Category::CreativeCampaigns,
                "Startup fair booth",
                "Our stand at the fair",
                &["booth"],
            ),
        ]
    }

    #[test]
    fn all_with_empty_query_returns_everything_in_order() {
        let photos = fixture();
        let visible = visible_indices(&photos, CategoryFilter::All, "");
        assert_eq!(visible, vec![0, 1, 2, 3]);
    }

    #[test]
    fn category_filter_keeps_only_that_category_in_order() {
        let photos = fixture();
        let visible = visible_photos(&photos, CategoryFilter::Only(Category::TeamVibes), "");
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert!(visible.iter().all(|p| p.category == Category::TeamVibes));
    }

    #[test]
    fn query_matches_tag_substring_when_title_and_description_do_not() {
        let photos = fixture();
        let visible = visible_indices(&photos, CategoryFilter::All, "launch");
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn query_substring_crosses_word_boundaries() {
        // "art" is not a tag of its own, but "startup" contains it.
        let photos = fixture();
        let visible = visible_indices(&photos, CategoryFilter::All, "art");
        assert_eq!(visible, vec![3]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let photos = fixture();
        assert_eq!(
            visible_indices(&photos, CategoryFilter::All, "STANDUP"),
            vec![0]
        );
    }

    #[test]
    fn category_and_query_compose_as_and() {
        let photos = fixture();
        let visible = visible_indices(
            &photos,
            CategoryFilter::Only(Category::CreativeCampaigns),
            "studio",
        );
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn whitespace_only_query_is_active() {
        let photos = fixture();
        // No title, description or tag contains a space here.
        assert!(visible_indices(&photos, CategoryFilter::All, "  ").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let photos = fixture();
        let first = visible_photos(&photos, CategoryFilter::All, "team");
        let once: Vec<Photo> = first.into_iter().cloned().collect();
        let twice = visible_photos(&once, CategoryFilter::All, "team");
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(twice.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn match_helper_checks_each_tag_individually() {
        let subject = photo(
            "p9",
            Category::BehindTheScenes,
            "Rig day",
            "Lights and cables",
            &["grip", "gaffer"],
        );
        assert!(photo_matches_query(&subject, "gaff"));
        assert!(!photo_matches_query(&subject, "ripga"));
    }
}
