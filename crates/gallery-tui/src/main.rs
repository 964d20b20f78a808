use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gallery_core::{
    load_store, Category, CategoryFilter, DatasetSource, GalleryConfig, GallerySession, ModalKey,
    Photo,
};
use image::DynamicImage;
use rand::Rng;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::{Resize, StatefulImage};
use tracing_subscriber::EnvFilter;

const TICK_RATE: Duration = Duration::from_millis(150);
// Matches the splash the gallery has always shown on mount.
const LOADING_DELAY: Duration = Duration::from_millis(1000);

#[derive(Parser)]
#[command(name = "gallery-tui", version, about = "Terminal photo gallery browser")]
struct Cli {
    /// Dataset file (JSON array of photo records)
    #[arg(long, short)]
    dataset: Option<PathBuf>,

    /// Suppress startup diagnostics
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InputMode {
    Normal,
    Search,
}

#[derive(Clone, Copy, Debug, Default)]
struct LayoutInfo {
    list_area: Rect,
    detail_area: Rect,
    modal_area: Rect,
}

struct Preview {
    picker: Picker,
    current_path: Option<PathBuf>,
    protocol: Option<StatefulProtocol>,
    last_error: Option<String>,
}

impl Preview {
    fn new(picker: Picker) -> Self {
        Self {
            picker,
            current_path: None,
            protocol: None,
            last_error: None,
        }
    }

    fn load_for_path(&mut self, path: &Path) {
        if self.current_path.as_deref() == Some(path) {
            return;
        }
        self.current_path = Some(path.to_path_buf());

        match load_image(path) {
            Ok(image) => {
                self.protocol = Some(self.picker.new_resize_protocol(image));
                self.last_error = None;
            }
            Err(err) => {
                self.protocol = None;
                self.last_error = Some(format!("failed to load image: {err}"));
            }
        }
    }
}

struct App {
    session: GallerySession,
    photo_root: Option<PathBuf>,
    cursor: usize,
    mode: InputMode,
    input_buffer: String,
    saved_query: String,
    started: Instant,
    layout: LayoutInfo,
    status: String,
    preview: Option<Preview>,
}

impl App {
    fn new(session: GallerySession, photo_root: Option<PathBuf>) -> Self {
        Self {
            session,
            photo_root,
            cursor: 0,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            saved_query: String::new(),
            started: Instant::now(),
            layout: LayoutInfo::default(),
            status: String::from(
                "j/k move, Enter open, / search, Tab category, r random, q quit",
            ),
            preview: None,
        }
    }

    fn set_preview_picker(&mut self, picker: Picker) {
        self.preview = Some(Preview::new(picker));
    }

    fn tick(&mut self) {
        if self.session.is_loading() && self.started.elapsed() >= LOADING_DELAY {
            self.session.finish_loading();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.session.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.session.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = (self.cursor as isize + delta).clamp(0, len as isize - 1);
        self.cursor = next as usize;
    }

    fn cursor_photo(&self) -> Option<&Photo> {
        self.session.visible_photo(self.cursor)
    }

    fn select_filter(&mut self, filter: CategoryFilter) {
        self.session.select_category(filter);
        self.clamp_cursor();
        self.status = format!(
            "{}: {} photo(s)",
            filter.label(),
            self.session.visible_len()
        );
    }

    fn cycle_category(&mut self, forward: bool) {
        let filter = if forward {
            next_filter(self.session.category())
        } else {
            prev_filter(self.session.category())
        };
        self.select_filter(filter);
    }

    fn apply_search_edit(&mut self) {
        self.session.set_search_query(self.input_buffer.clone());
        self.clamp_cursor();
    }

    fn open_cursor_photo(&mut self) {
        let Some(id) = self.cursor_photo().map(|p| p.id.clone()) else {
            self.status = "No photo under the cursor.".to_string();
            return;
        };
        // The cursor always points at a store member, so this cannot fail.
        if let Err(err) = self.session.open_photo(&id) {
            self.status = err.to_string();
        }
    }

    fn random_jump(&mut self) {
        let len = self.session.visible_len();
        if len == 0 {
            self.status = "No photos to jump to.".to_string();
            return;
        }
        self.cursor = rand::thread_rng().gen_range(0..len);
    }

    /// Keeps the grid cursor on the photo the modal navigated to, when that
    /// photo is still visible.
    fn sync_cursor_to_selection(&mut self) {
        if let Some(position) = self.session.selected_position() {
            self.cursor = position;
        }
    }

    fn resolve_src(&self, photo: &Photo) -> Option<PathBuf> {
        if photo.src.starts_with("http://") || photo.src.starts_with("https://") {
            return None;
        }
        let raw = PathBuf::from(&photo.src);
        let resolved = if raw.is_absolute() {
            raw
        } else if let Some(root) = &self.photo_root {
            root.join(raw)
        } else {
            raw
        };
        resolved.exists().then_some(resolved)
    }
}

/// The filter bar entries, in display order.
fn filter_bar() -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(Category::ALL.map(CategoryFilter::Only));
    filters
}

fn next_filter(current: CategoryFilter) -> CategoryFilter {
    let bar = filter_bar();
    let position = bar.iter().position(|f| *f == current).unwrap_or(0);
    bar[(position + 1) % bar.len()]
}

fn prev_filter(current: CategoryFilter) -> CategoryFilter {
    let bar = filter_bar();
    let position = bar.iter().position(|f| *f == current).unwrap_or(0);
    bar[(position + bar.len() - 1) % bar.len()]
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("unable to decode {}", path.display()))
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match cli.dataset {
        Some(path) => GalleryConfig::with_dataset(path),
        None => GalleryConfig::default(),
    };

    let (store, source) = load_store(&config).context("failed to load photo dataset")?;
    if !cli.quiet {
        match &source {
            DatasetSource::File(path) => {
                tracing::info!("loaded {} photo(s) from {}", store.len(), path.display());
            }
            DatasetSource::BuiltIn => {
                tracing::info!("no dataset file found, using the built-in collection");
            }
        }
    }

    let photo_root = match source {
        DatasetSource::File(path) => path.parent().map(Path::to_path_buf),
        DatasetSource::BuiltIn => None,
    };

    run_tui(App::new(GallerySession::new(store), photo_root))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gallery_tui=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alt screen")?;
    let picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::halfblocks());
    app.set_preview_picker(picker);

    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend).context("failed to init terminal")?;

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| render_ui(frame, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if handle_key_event(app, key)? {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // The modal scopes the three navigation keys to its own lifetime.
    if app.session.selected_photo().is_some() {
        return Ok(handle_modal_keys(app, key));
    }

    match app.mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => Ok(handle_search_mode(app, key)),
    }
}

fn handle_modal_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => app.session.handle_modal_key(ModalKey::Dismiss),
        KeyCode::Right | KeyCode::Char('l') => {
            app.session.handle_modal_key(ModalKey::Advance);
            app.sync_cursor_to_selection();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.session.handle_modal_key(ModalKey::Retreat);
            app.sync_cursor_to_selection();
        }
        _ => {}
    }
    false
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::Enter => app.open_cursor_photo(),
        KeyCode::Tab => app.cycle_category(true),
        KeyCode::BackTab => app.cycle_category(false),
        KeyCode::Char(ch @ '1'..='5') => {
            let bar = filter_bar();
            let index = ch as usize - '1' as usize;
            if let Some(filter) = bar.get(index) {
                app.select_filter(*filter);
            }
        }
        KeyCode::Char('r') => app.random_jump(),
        KeyCode::Char('/') => {
            app.mode = InputMode::Search;
            app.saved_query = app.session.query().to_string();
            app.input_buffer = app.saved_query.clone();
            app.status = "Search: type to filter, Enter keep, Esc cancel".to_string();
        }
        _ => {}
    }

    Ok(false)
}

fn handle_search_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            let saved = app.saved_query.clone();
            app.session.set_search_query(saved);
            app.clamp_cursor();
            app.mode = InputMode::Normal;
            app.input_buffer.clear();
            app.status = "Search canceled.".to_string();
        }
        KeyCode::Enter => {
            app.mode = InputMode::Normal;
            app.status = format!("Filter updated: {} result(s)", app.session.visible_len());
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
            app.apply_search_edit();
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.input_buffer.push(ch);
                app.apply_search_edit();
            }
        }
        _ => {}
    }

    false
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // While the modal is open, only a click on the backdrop does anything:
    // it closes the modal.
    if app.session.selected_photo().is_some() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if !point_in_rect(mouse.column, mouse.row, app.layout.modal_area) {
                app.session.close_modal();
            }
        }
        return;
    }

    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if point_in_rect(x, y, app.layout.list_area) {
                select_list_row_from_mouse(app, y);
            } else if point_in_rect(x, y, app.layout.detail_area) {
                app.open_cursor_photo();
            }
        }
        MouseEventKind::ScrollUp => {
            if point_in_rect(x, y, app.layout.list_area) {
                app.move_cursor(-3);
            }
        }
        MouseEventKind::ScrollDown => {
            if point_in_rect(x, y, app.layout.list_area) {
                app.move_cursor(3);
            }
        }
        _ => {}
    }
}

fn select_list_row_from_mouse(app: &mut App, row: u16) {
    if app.session.visible_len() == 0 {
        return;
    }
    let inner = inner_rect(app.layout.list_area);
    if inner.height == 0 || row < inner.y {
        return;
    }

    let offset = usize::from(row - inner.y);
    if offset >= app.session.visible_len() {
        return;
    }
    if app.cursor == offset {
        // Second click on the focused row opens the modal.
        app.open_cursor_photo();
    } else {
        app.cursor = offset;
    }
}

fn render_ui(frame: &mut Frame, app: &mut App) {
    if app.session.is_loading() {
        render_loading(frame);
        return;
    }

    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_filter_tabs(frame, areas[0], app);
    render_search_panel(frame, areas[1], app);
    render_main_panel(frame, areas[2], app);
    render_status(frame, areas[3], app);

    if app.session.selected_photo().is_some() {
        render_modal(frame, app);
    }
}

fn render_loading(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 40, 20);
    let splash = Paragraph::new("Loading Gallery...")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(splash, area);
}

fn render_filter_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let bar = filter_bar();
    let selected = bar
        .iter()
        .position(|f| *f == app.session.category())
        .unwrap_or(0);
    let titles: Vec<String> = bar
        .iter()
        .enumerate()
        .map(|(index, filter)| format!("{} {}", index + 1, filter.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).title("Categories"));
    frame.render_widget(tabs, area);
}

fn render_search_panel(frame: &mut Frame, area: Rect, app: &App) {
    let label = match app.mode {
        InputMode::Search => format!("Search: {}_", app.input_buffer),
        InputMode::Normal => format!("Search: {}", app.session.query()),
    };
    let paragraph =
        Paragraph::new(label).block(Block::default().borders(Borders::ALL).title("Filter"));
    frame.render_widget(paragraph, area);
}

fn render_main_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    app.layout.list_area = main[0];
    app.layout.detail_area = main[1];

    render_photo_list(frame, main[0], app);
    render_detail_panel(frame, main[1], app);
}

fn render_photo_list(frame: &mut Frame, area: Rect, app: &App) {
    let total = app.session.visible_len();

    if total == 0 {
        let empty = Paragraph::new("No photos found\nTry adjusting your search or filter criteria")
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Photos (0)"));
        frame.render_widget(empty, area);
        return;
    }

    let current = app.cursor + 1;
    let items = app
        .session
        .visible_photos()
        .map(|photo| {
            let tags = photo
                .card_tags()
                .iter()
                .map(|tag| format!("#{tag}"))
                .collect::<Vec<_>>()
                .join(" ");
            ListItem::new(format!("{} | {}", photo.title, tags))
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Photos ({current}/{total})")),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let info = app.cursor_photo().map(|photo| {
        (
            photo_detail_text(photo),
            app.resolve_src(photo),
            format!("Image: {}", photo.src),
        )
    });
    let Some((detail_text, image_path, fallback)) = info else {
        let empty = Paragraph::new("No photo selected.")
            .block(Block::default().borders(Borders::ALL).title("Detail"));
        frame.render_widget(empty, columns[0]);
        render_preview_panel(frame, columns[1], app, None, "Preview not available.".into());
        return;
    };

    let detail = Paragraph::new(detail_text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Detail"));
    frame.render_widget(detail, columns[0]);

    render_preview_panel(frame, columns[1], app, image_path, fallback);
}

fn photo_detail_text(photo: &Photo) -> String {
    let tags = if photo.tags.is_empty() {
        "(none)".to_string()
    } else {
        photo
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "Title: {}\nCategory: {}\nDate: {}\nTags: {}\n\n{}",
        photo.title,
        photo.category.label(),
        photo.date,
        tags,
        photo.description,
    )
}

fn render_preview_panel(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    image_path: Option<PathBuf>,
    fallback: String,
) {
    let block = Block::default().borders(Borders::ALL).title("Preview");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(path) = image_path else {
        let text = Paragraph::new(fallback).wrap(Wrap { trim: false });
        frame.render_widget(text, inner);
        return;
    };

    let Some(preview) = app.preview.as_mut() else {
        let text = Paragraph::new(format!("{fallback}\n\nPreview backend is not initialized."))
            .wrap(Wrap { trim: false });
        frame.render_widget(text, inner);
        return;
    };

    preview.load_for_path(&path);
    if let Some(protocol) = preview.protocol.as_mut() {
        frame.render_stateful_widget(
            StatefulImage::default().resize(Resize::Fit(None)),
            inner,
            protocol,
        );
        return;
    }

    let error = preview
        .last_error
        .as_deref()
        .unwrap_or("unknown image decode error");
    let text = Paragraph::new(format!("{fallback}\n\nPreview unavailable: {error}"))
        .wrap(Wrap { trim: false });
    frame.render_widget(text, inner);
}

fn render_modal(frame: &mut Frame, app: &mut App) {
    let info = app.session.selected_photo().map(|photo| {
        (
            photo_detail_text(photo),
            app.resolve_src(photo),
            format!("Image: {}", photo.src),
            photo.title.clone(),
        )
    });
    let Some((detail_text, image_path, fallback, title)) = info else {
        return;
    };

    let area = centered_rect(frame.area(), 80, 80);
    app.layout.modal_area = area;
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(" Esc close | ←/→ navigate ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    render_preview_panel(frame, columns[0], app, image_path, fallback);

    let details = Paragraph::new(detail_text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Details"));
    frame.render_widget(details, columns[1]);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let prefix = match app.mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
    };
    let modal = if app.session.selected_photo().is_some() {
        " | Modal"
    } else {
        ""
    };
    let status = Paragraph::new(format!("[{prefix}{modal}] {}", app.status))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn inner_rect(rect: Rect) -> Rect {
    if rect.width <= 2 || rect.height <= 2 {
        return Rect::new(rect.x, rect.y, 0, 0);
    }
    Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2)
}

#[cfg(test)]
mod tests {
    use gallery_core::{Category, CategoryFilter};
    use ratatui::prelude::Rect;

    use super::{centered_rect, filter_bar, inner_rect, next_filter, point_in_rect, prev_filter};

    #[test]
    fn filter_bar_starts_with_all_and_covers_every_category() {
        let bar = filter_bar();
        assert_eq!(bar.len(), 5);
        assert_eq!(bar[0], CategoryFilter::All);
        for category in Category::ALL {
            assert!(bar.contains(&CategoryFilter::Only(category)));
        }
    }

    #[test]
    fn cycling_the_filter_bar_wraps_both_ways() {
        let bar = filter_bar();
        let mut current = CategoryFilter::All;
        for _ in 0..bar.len() {
            current = next_filter(current);
        }
        assert_eq!(current, CategoryFilter::All);
        assert_eq!(prev_filter(CategoryFilter::All), *bar.last().unwrap());
    }

    #[test]
    fn point_in_rect_excludes_edges_past_the_extent() {
        let rect = Rect::new(2, 2, 4, 4);
        assert!(point_in_rect(2, 2, rect));
        assert!(point_in_rect(5, 5, rect));
        assert!(!point_in_rect(6, 2, rect));
        assert!(!point_in_rect(0, 0, Rect::new(0, 0, 0, 0)));
    }

    #[test]
    fn inner_rect_shrinks_by_the_border() {
        let inner = inner_rect(Rect::new(0, 0, 10, 10));
        assert_eq!(inner, Rect::new(1, 1, 8, 8));
        assert_eq!(inner_rect(Rect::new(0, 0, 2, 2)).width, 0);
    }

    #[test]
    fn centered_rect_stays_inside_its_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(parent, 80, 80);
        assert!(centered.x >= parent.x && centered.y >= parent.y);
        assert!(centered.right() <= parent.right() && centered.bottom() <= parent.bottom());
    }
}
