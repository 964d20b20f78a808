use crate::photo::Photo;

/// Store index of the photo after `selected_id` in the visible list, with
/// wraparound. A selected photo that was narrowed out of the visible list
/// restarts navigation at the first visible photo. `None` only when the
/// visible list is empty.
pub fn next_index(visible: &[usize], photos: &[Photo], selected_id: &str) -> Option<usize> {
    if visible.is_empty() {
        return None;
    }
    let position = match position_of(visible, photos, selected_id) {
        Some(position) => (position + 1) % visible.len(),
        None => 0,
    };
    Some(visible[position])
}

/// Counterpart of [`next_index`]; a narrowed-out selection restarts at the
/// last visible photo.
pub fn prev_index(visible: &[usize], photos: &[Photo], selected_id: &str) -> Option<usize> {
    if visible.is_empty() {
        return None;
    }
    let position = match position_of(visible, photos, selected_id) {
        Some(position) => (position + visible.len() - 1) % visible.len(),
        None => visible.len() - 1,
    };
    Some(visible[position])
}

fn position_of(visible: &[usize], photos: &[Photo], id: &str) -> Option<usize> {
    visible.iter().position(|&index| photos[index].id == id)
}

#[cfg(test)]
mod tests {
    use super::{next_index, prev_index};
    use crate::photo::{Category, Photo};

    fn photos(ids: &[&str]) -> Vec<Photo> {
        ids.iter()
            .map(|id| Photo {
                id: id.to_string(),
                src: String::new(),
                alt: String::new(),
                category: Category::TeamVibes,
                title: id.to_string(),
                description: String::new(),
                date: "2024-01-01".to_string(),
                tags: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let photos = photos(&["a", "b", "c"]);
        let visible = vec![0, 1, 2];
        assert_eq!(next_index(&visible, &photos, "c"), Some(0));
        assert_eq!(prev_index(&visible, &photos, "a"), Some(2));
    }

    #[test]
    fn next_n_times_returns_to_start() {
        let photos = photos(&["a", "b", "c", "d"]);
        let visible = vec![0, 1, 2, 3];
        let mut current = "b".to_string();
        for _ in 0..visible.len() {
            let index = next_index(&visible, &photos, &current).unwrap();
            current = photos[index].id.clone();
        }
        assert_eq!(current, "b");

        for _ in 0..visible.len() {
            let index = prev_index(&visible, &photos, &current).unwrap();
            current = photos[index].id.clone();
        }
        assert_eq!(current, "b");
    }

    #[test]
    fn empty_visible_list_is_a_no_op() {
        let photos = photos(&["a"]);
        assert_eq!(next_index(&[], &photos, "a"), None);
        assert_eq!(prev_index(&[], &photos, "a"), None);
    }

    #[test]
    fn single_photo_navigates_to_itself() {
        let photos = photos(&["a", "b"]);
        let visible = vec![1];
        assert_eq!(next_index(&visible, &photos, "b"), Some(1));
        assert_eq!(prev_index(&visible, &photos, "b"), Some(1));
    }

    #[test]
    fn narrowed_out_selection_restarts_at_the_edges() {
        let photos = photos(&["a", "b", "c", "d"]);
        // "a" is no longer visible.
        let visible = vec![1, 2, 3];
        assert_eq!(next_index(&visible, &photos, "a"), Some(1));
        assert_eq!(prev_index(&visible, &photos, "a"), Some(3));
    }

    #[test]
    fn navigation_skips_filtered_out_photos() {
        let photos = photos(&["a", "b", "c", "d"]);
        let visible = vec![0, 2];
        assert_eq!(next_index(&visible, &photos, "a"), Some(2));
        assert_eq!(next_index(&visible, &photos, "c"), Some(0));
    }
}
