//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::archive;
use crate::catalog::{self, categories, ColorRole, Template, TemplateFilter};
use crate::core::Config;
use crate::error::{ForgeError, Result};
use crate::scaffold::Framework;
use crate::theme;
use crate::tui::event::{is_back_key, is_quit_key, AppEvent, EventHandler};
use crate::tui::ui;

/// Messages sent from background tasks to the main loop
#[derive(Debug)]
pub enum AsyncMessage {
    /// Archive written to the given path
    DownloadComplete(PathBuf),
    /// Archive generation failed
    DownloadFailed(String),
}

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Template grid with search and category filter
    Catalog,
    /// Palette editor, token preview and download for one template
    DesignSystem,
}

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }
}

/// Error popup for errors that require user acknowledgment
#[derive(Debug, Clone)]
pub struct ErrorPopup {
    /// Title of the popup (e.g., "Invalid Color")
    pub title: String,
    /// The full error message to display
    pub message: String,
}

/// Main application state
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current screen
    pub current_screen: Screen,
    /// Navigation stack for back navigation
    pub navigation_stack: Vec<Screen>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether help overlay is shown
    pub show_help: bool,
    /// Error popup to display (requires user dismissal)
    pub error_popup: Option<ErrorPopup>,
    /// Tick counter for spinner animation
    pub tick_counter: u64,

    /// Channel for sending async results
    async_tx: mpsc::Sender<AsyncMessage>,
    /// Channel for receiving async results
    async_rx: mpsc::Receiver<AsyncMessage>,

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog state
    // ─────────────────────────────────────────────────────────────────────────
    /// "All" followed by every category
    pub categories: Vec<&'static str>,
    /// Index into `categories`
    pub category_index: usize,
    /// Free-text search query
    pub search_query: String,
    /// Whether keystrokes go into the search box
    pub search_mode: bool,
    /// Templates passing the current filter
    pub filtered: Vec<&'static Template>,
    pub catalog_selection: ListState,

    // ─────────────────────────────────────────────────────────────────────────
    // Design system state
    // ─────────────────────────────────────────────────────────────────────────
    /// Editable copy of the opened template; dropped on back navigation
    pub working: Option<Template>,
    /// Selected palette role
    pub palette_selection: ListState,
    /// Whether keystrokes go into the color input
    pub color_input_mode: bool,
    /// Color being typed for the selected role
    pub color_input: String,
    /// Framework used for downloads
    pub framework: Framework,
    /// Directory downloads are written to
    pub output_dir: PathBuf,
    /// Whether an archive is being generated
    pub downloading: bool,
    /// Path of the last archive written this session
    pub last_download: Option<PathBuf>,
}

impl App {
    /// Create a new app instance
    pub fn new(config: Config) -> Self {
        let (async_tx, async_rx) = mpsc::channel(32);
        let filtered: Vec<&'static Template> = catalog::templates().iter().collect();

        Self {
            running: true,
            current_screen: Screen::Catalog,
            navigation_stack: Vec::new(),
            status_message: None,
            show_help: false,
            error_popup: None,
            tick_counter: 0,

            // Async
            async_tx,
            async_rx,

            // Catalog
            categories: categories(),
            category_index: 0,
            search_query: String::new(),
            search_mode: false,
            catalog_selection: ListState::new(filtered.len()),
            filtered,

            // Design system
            working: None,
            palette_selection: ListState::new(ColorRole::ALL.len()),
            color_input_mode: false,
            color_input: String::new(),
            framework: config.default_framework,
            output_dir: config.resolved_output_dir(),
            downloading: false,
            last_download: None,
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| ForgeError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| ForgeError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| ForgeError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| ForgeError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| ForgeError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| ForgeError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(Duration::from_millis(250));

        // Main event loop
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| ForgeError::Terminal(e.to_string()))?;

            // Check for async messages (non-blocking)
            while let Ok(msg) = self.async_rx.try_recv() {
                self.handle_async_message(msg);
            }

            if let Some(event) = events.next().await {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Resize(_, _) => {
                        // Terminal resize is handled automatically by ratatui
                    }
                    AppEvent::Tick => {
                        self.tick_counter = self.tick_counter.wrapping_add(1);
                    }
                }
            }
        }

        Self::restore_terminal(&mut terminal)?;
        Ok(())
    }

    /// Handle async message from background tasks
    fn handle_async_message(&mut self, msg: AsyncMessage) {
        match msg {
            AsyncMessage::DownloadComplete(path) => {
                self.downloading = false;
                self.status_message = Some(format!("✓ Saved {}", path.display()));
                self.last_download = Some(path);
            }
            AsyncMessage::DownloadFailed(err) => {
                self.downloading = false;
                tracing::error!("Archive generation failed: {}", err);
                self.status_message = Some("Download failed, see log for details".to_string());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key handling
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_key_event(&mut self, key: KeyEvent) {
        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        // If error popup is shown, only allow dismissal keys
        if self.error_popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.error_popup = None;
            }
            return;
        }

        // Text input bypasses global handlers
        if self.search_mode {
            self.handle_search_key(key);
            return;
        }

        if self.color_input_mode {
            self.handle_color_input_key(key);
            return;
        }

        // Global key handlers
        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        if is_quit_key(&key) {
            if self.current_screen == Screen::Catalog {
                self.quit();
            } else {
                self.go_back();
            }
            return;
        }

        if is_back_key(&key) {
            self.go_back();
            return;
        }

        match self.current_screen {
            Screen::Catalog => self.handle_catalog_key(key),
            Screen::DesignSystem => self.handle_design_system_key(key),
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.catalog_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.catalog_selection.previous(),
            KeyCode::Char('/') => {
                self.search_mode = true;
                self.status_message = None;
            }
            KeyCode::Char('c') | KeyCode::Tab => self.cycle_category(true),
            KeyCode::BackTab => self.cycle_category(false),
            KeyCode::Enter => self.open_selected_template(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.search_mode = false;
            }
            KeyCode::Esc => {
                self.search_mode = false;
                self.search_query.clear();
                self.apply_filter();
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.apply_filter();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.apply_filter();
            }
            _ => {}
        }
    }

    fn handle_design_system_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.palette_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.palette_selection.previous(),
            KeyCode::Char('e') | KeyCode::Enter => self.start_color_input(),
            KeyCode::Char('r') => self.reset_palette(),
            KeyCode::Char('f') => {
                self.framework = self.framework.toggle();
                self.status_message = Some(format!("Framework: {}", self.framework));
            }
            KeyCode::Char('d') => self.start_download(),
            _ => {}
        }
    }

    fn handle_color_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.color_input_mode = false;
                self.color_input.clear();
            }
            KeyCode::Enter => self.apply_color_input(),
            KeyCode::Backspace => {
                self.color_input.pop();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
            }
            KeyCode::Char(c) => self.color_input.push(c),
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Currently selected category name
    pub fn selected_category(&self) -> &'static str {
        self.categories
            .get(self.category_index)
            .copied()
            .unwrap_or(catalog::ALL_CATEGORIES)
    }

    fn cycle_category(&mut self, forward: bool) {
        let total = self.categories.len();
        if total == 0 {
            return;
        }
        self.category_index = if forward {
            (self.category_index + 1) % total
        } else {
            self.category_index.checked_sub(1).unwrap_or(total - 1)
        };
        self.apply_filter();
    }

    /// Recompute the visible templates from category and search query
    fn apply_filter(&mut self) {
        let filter = TemplateFilter::new(
            Some(self.selected_category().to_string()),
            self.search_query.clone(),
        );
        self.filtered = catalog::filter(&filter);
        self.catalog_selection = ListState::new(self.filtered.len());
    }

    /// Template under the catalog cursor
    pub fn selected_template(&self) -> Option<&'static Template> {
        self.filtered.get(self.catalog_selection.selected).copied()
    }

    fn open_selected_template(&mut self) {
        let Some(template) = self.selected_template() else {
            return;
        };

        self.working = Some(template.clone());
        self.palette_selection = ListState::new(ColorRole::ALL.len());
        self.last_download = None;
        self.navigate_to(Screen::DesignSystem);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Design system methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Palette role under the cursor
    pub fn selected_role(&self) -> ColorRole {
        ColorRole::ALL
            .get(self.palette_selection.selected)
            .copied()
            .unwrap_or(ColorRole::Primary)
    }

    fn start_color_input(&mut self) {
        let Some(working) = &self.working else {
            return;
        };
        self.color_input = working.colors.get(self.selected_role()).to_string();
        self.color_input_mode = true;
    }

    fn apply_color_input(&mut self) {
        let role = self.selected_role();
        let Some(working) = &self.working else {
            self.color_input_mode = false;
            return;
        };

        match theme::recolor(working, [(role, self.color_input.as_str())]) {
            Ok(edited) => {
                self.working = Some(edited);
                self.color_input_mode = false;
                self.color_input.clear();
                self.status_message = Some(format!("{} updated", role.label()));
            }
            Err(e) => {
                // Keep the input open so the value can be corrected
                self.error_popup = Some(ErrorPopup {
                    title: "Invalid Color".to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    /// Restore the registry palette of the open template
    fn reset_palette(&mut self) {
        let Some(working) = &self.working else {
            return;
        };
        if let Ok(original) = catalog::find(working.slug) {
            self.working = Some(original.clone());
            self.status_message = Some("Palette reset".to_string());
        }
    }

    /// Spawn archive generation for the working template
    fn start_download(&mut self) {
        if self.downloading {
            return; // Already generating
        }
        let Some(template) = self.working.clone() else {
            return;
        };

        self.downloading = true;
        self.status_message = Some(format!(
            "Generating {}-{}.zip...",
            template.slug,
            self.framework.key()
        ));

        let framework = self.framework;
        let dir = self.output_dir.clone();
        let tx = self.async_tx.clone();

        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                archive::download(&template, framework, &dir)
            })
            .await;

            let msg = match result {
                Ok(Ok(path)) => AsyncMessage::DownloadComplete(path),
                Ok(Err(e)) => AsyncMessage::DownloadFailed(e.to_string()),
                Err(e) => AsyncMessage::DownloadFailed(format!("Task failed: {}", e)),
            };
            let _ = tx.send(msg).await;
        });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Navigate to a new screen
    pub fn navigate_to(&mut self, screen: Screen) {
        self.navigation_stack.push(self.current_screen);
        self.current_screen = screen;
        self.status_message = None;
    }

    /// Go back to the previous screen
    pub fn go_back(&mut self) {
        if self.current_screen == Screen::DesignSystem {
            self.working = None;
        }

        if let Some(screen) = self.navigation_stack.pop() {
            self.current_screen = screen;
            self.status_message = None;
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    fn open(app: &mut App, slug: &str) {
        let index = app.filtered.iter().position(|t| t.slug == slug).unwrap();
        app.catalog_selection.selected = index;
        app.handle_key_event(key(KeyCode::Enter));
    }

    #[test]
    fn test_list_state_wraps() {
        let mut state = ListState::new(3);
        state.previous();
        assert_eq!(state.selected, 2);
        state.next();
        assert_eq!(state.selected, 0);

        let mut empty = ListState::default();
        empty.next();
        empty.previous();
        assert_eq!(empty.selected, 0);
    }

    #[test]
    fn test_search_filters_catalog() {
        let mut app = App::new(Config::default());
        let total = app.filtered.len();

        app.handle_key_event(key(KeyCode::Char('/')));
        assert!(app.search_mode);
        type_text(&mut app, "neon");
        app.handle_key_event(key(KeyCode::Enter));

        assert!(!app.search_mode);
        assert!(!app.filtered.is_empty());
        assert!(app.filtered.len() < total);
        assert_eq!(app.catalog_selection.total, app.filtered.len());

        // q typed into the search box must not quit
        app.handle_key_event(key(KeyCode::Char('/')));
        type_text(&mut app, "q");
        assert!(app.running);
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.search_query.is_empty());
        assert_eq!(app.filtered.len(), total);
    }

    #[test]
    fn test_category_cycling() {
        let mut app = App::new(Config::default());
        assert_eq!(app.selected_category(), catalog::ALL_CATEGORIES);

        app.handle_key_event(key(KeyCode::Tab));
        let category = app.selected_category();
        assert_ne!(category, catalog::ALL_CATEGORIES);
        assert!(app.filtered.iter().all(|t| t.category == category));

        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.selected_category(), catalog::ALL_CATEGORIES);
    }

    #[test]
    fn test_palette_edit_and_reset() {
        let mut app = App::new(Config::default());
        open(&mut app, "neo-brutalism");
        assert_eq!(app.current_screen, Screen::DesignSystem);

        app.handle_key_event(key(KeyCode::Char('e')));
        assert!(app.color_input_mode);
        app.color_input.clear();
        type_text(&mut app, "#123456");
        app.handle_key_event(key(KeyCode::Enter));

        let working = app.working.as_ref().unwrap();
        assert_eq!(working.colors.get(ColorRole::Primary), "#123456");
        assert_ne!(
            catalog::find("neo-brutalism").unwrap().colors.get(ColorRole::Primary),
            "#123456"
        );

        app.handle_key_event(key(KeyCode::Char('r')));
        assert_eq!(
            app.working.as_ref().unwrap().colors,
            catalog::find("neo-brutalism").unwrap().colors
        );
    }

    #[test]
    fn test_invalid_color_shows_popup() {
        let mut app = App::new(Config::default());
        open(&mut app, "retro-80s");

        app.handle_key_event(key(KeyCode::Enter));
        app.color_input = "not-a-color".to_string();
        app.handle_key_event(key(KeyCode::Enter));

        assert!(app.error_popup.is_some());
        assert!(app.color_input_mode);
        assert_eq!(app.working.as_ref().unwrap().colors, catalog::find("retro-80s").unwrap().colors);

        // Popup swallows everything except dismissal keys
        app.handle_key_event(key(KeyCode::Char('x')));
        assert!(app.error_popup.is_some());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.error_popup.is_none());
    }

    #[test]
    fn test_back_discards_edits() {
        let mut app = App::new(Config::default());
        open(&mut app, "dark-luxury");
        app.handle_key_event(key(KeyCode::Char('f')));
        assert_eq!(app.framework, Framework::React);

        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.current_screen, Screen::Catalog);
        assert!(app.working.is_none());
        assert!(app.running);

        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_download_reports_back() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            output_dir: Some(tmp.path().to_path_buf()),
            default_framework: Framework::React,
        };
        let mut app = App::new(config);
        open(&mut app, "gaming-theme");

        app.handle_key_event(key(KeyCode::Char('d')));
        assert!(app.downloading);
        // A second request while generating is ignored
        app.handle_key_event(key(KeyCode::Char('d')));

        let msg = app.async_rx.recv().await.unwrap();
        app.handle_async_message(msg);

        assert!(!app.downloading);
        assert_eq!(
            app.last_download,
            Some(tmp.path().join("gaming-theme-react.zip"))
        );
        assert!(tmp.path().join("gaming-theme-react.zip").is_file());
    }

    #[test]
    fn test_download_failure_resets_flag() {
        let mut app = App::new(Config::default());
        app.downloading = true;
        app.handle_async_message(AsyncMessage::DownloadFailed("disk full".into()));
        assert!(!app.downloading);
        assert!(app.status_message.is_some());
    }
}
