use crate::error::GalleryError;
use crate::filter::visible_indices;
use crate::photo::{CategoryFilter, Photo};
use crate::selection::{next_index, prev_index};
use crate::store::PhotoStore;

/// The three keys a frontend routes to the session while the modal is open.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalKey {
    Dismiss,
    Advance,
    Retreat,
}

/// Page scroll suppression while the modal is open, modeled as a scoped
/// resource: acquired on open, released at most once however many times
/// close fires.
#[derive(Debug, Default)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    /// Returns whether the lock transitioned to held.
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    /// Returns whether the lock transitioned to released.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        true
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Everything rendering needs for one frame.
#[derive(Debug)]
pub struct GalleryView<'a> {
    pub photos: Vec<&'a Photo>,
    pub category: CategoryFilter,
    pub query: &'a str,
    pub selected: Option<&'a Photo>,
    pub loading: bool,
}

/// Session state for one mounted gallery view: the selected category, the
/// search query, the photo open in the modal, and the loading flag. The
/// visible list is rebuilt explicitly after every category or query change;
/// nothing else invalidates it.
#[derive(Debug)]
pub struct GallerySession {
    store: PhotoStore,
    category: CategoryFilter,
    query: String,
    visible: Vec<usize>,
    selected: Option<usize>,
    loading: bool,
    scroll_lock: ScrollLock,
}

impl GallerySession {
    pub fn new(store: PhotoStore) -> Self {
        let mut session = Self {
            store,
            category: CategoryFilter::All,
            query: String::new(),
            visible: Vec::new(),
            selected: None,
            loading: true,
            scroll_lock: ScrollLock::default(),
        };
        session.rebuild_filter();
        session
    }

    pub fn store(&self) -> &PhotoStore {
        &self.store
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.rebuild_filter();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.rebuild_filter();
    }

    fn rebuild_filter(&mut self) {
        self.visible = visible_indices(self.store.photos(), self.category, &self.query);
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_photos(&self) -> impl Iterator<Item = &Photo> {
        self.visible.iter().map(|&index| &self.store.photos()[index])
    }

    /// Photo at `position` within the visible list.
    pub fn visible_photo(&self, position: usize) -> Option<&Photo> {
        self.visible
            .get(position)
            .and_then(|&index| self.store.get(index))
    }

    pub fn open_photo(&mut self, id: &str) -> Result<(), GalleryError> {
        let index = self
            .store
            .index_of(id)
            .ok_or_else(|| GalleryError::UnknownPhoto { id: id.to_string() })?;
        self.selected = Some(index);
        // Navigating between photos keeps the lock held; only the first
        // open acquires it.
        self.scroll_lock.acquire();
        Ok(())
    }

    /// The photo open in the modal. Always a member of the full store, even
    /// when a later filter change removed it from the visible list.
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.selected.and_then(|index| self.store.get(index))
    }

    /// Position of the selected photo within the visible list, when it is
    /// still visible.
    pub fn selected_position(&self) -> Option<usize> {
        let selected = self.selected?;
        self.visible.iter().position(|&index| index == selected)
    }

    pub fn navigate_next(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let id = &self.store.photos()[selected].id;
        if let Some(next) = next_index(&self.visible, self.store.photos(), id) {
            self.selected = Some(next);
        }
    }

    pub fn navigate_prev(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let id = &self.store.photos()[selected].id;
        if let Some(prev) = prev_index(&self.visible, self.store.photos(), id) {
            self.selected = Some(prev);
        }
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
        self.scroll_lock.release();
    }

    /// Keyboard dispatch while the modal is open; ignored otherwise, so a
    /// frontend that forgets to unregister the keys cannot corrupt state.
    pub fn handle_modal_key(&mut self, key: ModalKey) {
        if self.selected.is_none() {
            return;
        }
        match key {
            ModalKey::Dismiss => self.close_modal(),
            ModalKey::Advance => self.navigate_next(),
            ModalKey::Retreat => self.navigate_prev(),
        }
    }

    /// Flips the loading flag to false; later calls are no-ops. The fixed
    /// delay itself is frontend timer state.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn view(&self) -> GalleryView<'_> {
        GalleryView {
            photos: self.visible_photos().collect(),
            category: self.category,
            query: &self.query,
            selected: self.selected_photo(),
            loading: self.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GallerySession, ModalKey, ScrollLock};
    use crate::error::GalleryError;
    use crate::photo::{Category, CategoryFilter, Photo};
    use crate::store::PhotoStore;

    fn photo(id: &str, category: Category) -> Photo {
        Photo {
            id: id.to_string(),
            src: format!("photos/{id}.jpg"),
            alt: id.to_string(),
            category,
            title: id.to_string(),
            description: String::new(),
            date: "2024-05-01".to_string(),
            tags: Vec::new(),
        }
    }

    fn session() -> GallerySession {
        let store = PhotoStore::new(vec![
            photo("t1", Category::TeamVibes),
            photo("c1", Category::CreativeCampaigns),
            photo("t2", Category::TeamVibes),
            photo("c2", Category::CreativeCampaigns),
        ])
        .unwrap();
        GallerySession::new(store)
    }

    #[test]
    fn starts_loading_with_everything_visible() {
        let session = session();
        assert!(session.is_loading());
        assert_eq!(session.visible_len(), 4);
        assert!(session.selected_photo().is_none());
    }

    #[test]
    fn category_selection_narrows_in_original_order() {
        let mut session = session();
        session.select_category(CategoryFilter::Only(Category::TeamVibes));
        let ids: Vec<&str> = session.visible_photos().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn open_unknown_photo_is_an_error() {
        let mut session = session();
        let err = session.open_photo("nope").unwrap_err();
        assert!(matches!(err, GalleryError::UnknownPhoto { id } if id == "nope"));
        assert!(session.selected_photo().is_none());
    }

    #[test]
    fn next_from_last_visible_wraps_to_first() {
        let mut session = session();
        session.open_photo("c2").unwrap();
        session.navigate_next();
        assert_eq!(session.selected_photo().map(|p| p.id.as_str()), Some("t1"));
    }

    #[test]
    fn keyboard_and_direct_intents_agree() {
        let mut keyed = session();
        keyed.open_photo("t1").unwrap();
        keyed.handle_modal_key(ModalKey::Advance);

        let mut direct = session();
        direct.open_photo("t1").unwrap();
        direct.navigate_next();

        assert_eq!(
            keyed.selected_photo().map(|p| p.id.as_str()),
            direct.selected_photo().map(|p| p.id.as_str()),
        );
    }

    #[test]
    fn modal_keys_are_ignored_while_closed() {
        let mut session = session();
        session.handle_modal_key(ModalKey::Advance);
        assert!(session.selected_photo().is_none());
        assert!(!session.scroll_locked());
    }

    #[test]
    fn selected_photo_survives_being_filtered_out() {
        let mut session = session();
        session.open_photo("c1").unwrap();
        session.select_category(CategoryFilter::Only(Category::TeamVibes));
        // Still open on the now-hidden photo, still a member of the store.
        assert_eq!(session.selected_photo().map(|p| p.id.as_str()), Some("c1"));
        assert_eq!(session.selected_position(), None);
        // Navigation restarts inside the visible list.
        session.navigate_next();
        assert_eq!(session.selected_photo().map(|p| p.id.as_str()), Some("t1"));
    }

    #[test]
    fn navigation_with_empty_visible_list_keeps_the_modal_photo() {
        let mut session = session();
        session.open_photo("t1").unwrap();
        session.set_search_query("no such photo");
        assert_eq!(session.visible_len(), 0);
        session.navigate_next();
        session.navigate_prev();
        assert_eq!(session.selected_photo().map(|p| p.id.as_str()), Some("t1"));
    }

    #[test]
    fn double_close_releases_the_scroll_lock_exactly_once() {
        let mut session = session();
        session.open_photo("t1").unwrap();
        assert!(session.scroll_locked());
        session.close_modal();
        assert!(!session.scroll_locked());
        session.close_modal();
        assert!(!session.scroll_locked());
        assert!(session.selected_photo().is_none());
    }

    #[test]
    fn navigating_does_not_reacquire_the_lock() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(lock.release());
        assert!(!lock.release());

        let mut session = session();
        session.open_photo("t1").unwrap();
        session.open_photo("c1").unwrap();
        session.close_modal();
        assert!(!session.scroll_locked());
    }

    #[test]
    fn finish_loading_flips_once_and_stays() {
        let mut session = session();
        session.finish_loading();
        assert!(!session.is_loading());
        session.finish_loading();
        assert!(!session.is_loading());
    }

    #[test]
    fn view_reflects_the_session_state() {
        let mut session = session();
        session.set_search_query("t1");
        session.open_photo("t1").unwrap();
        let view = session.view();
        assert_eq!(view.photos.len(), 1);
        assert_eq!(view.query, "t1");
        assert_eq!(view.selected.map(|p| p.id.as_str()), Some("t1"));
        assert_eq!(view.category, CategoryFilter::All);
        assert!(view.loading);
    }
}
