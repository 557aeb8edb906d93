use crate::config::Config;
use crate::event::AppEvent;
use crate::gallery::card::CardDescriptor;
use crate::gallery::GalleryState;
use crate::github::types::AccountStats;
use crate::ui::{
    card_grid::{self, CardGrid},
    detail_panel::DetailPanel,
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action},
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Side effects the event loop must carry out on behalf of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchGallery,
}

pub struct App {
    pub config: Config,
    pub gallery: GalleryState,
    pub stats: Option<AccountStats>,

    pub selected: usize,
    pub scroll_row: usize,
    pub columns: usize,

    /// A repository fetch is in flight; refresh is disabled until it lands.
    pub refreshing: bool,
    pub show_detail: bool,
    pub show_help: bool,
    pub last_sync: String,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            gallery: GalleryState::Loading,
            stats: None,
            selected: 0,
            scroll_row: 0,
            columns: 1,
            refreshing: false,
            show_detail: false,
            show_help: false,
            last_sync: "never".to_string(),
            should_quit: false,
        }
    }

    /// Returns `None` when a fetch is already running.
    pub fn begin_refresh(&mut self) -> Option<Command> {
        if self.refreshing {
            tracing::debug!("refresh ignored, fetch already in flight");
            return None;
        }
        self.refreshing = true;
        self.show_detail = false;
        self.gallery = GalleryState::Loading;
        Some(Command::FetchGallery)
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::Key(key) => return self.handle_action(input::map_key(key)),
            AppEvent::Resize => {}
            AppEvent::GalleryLoaded(state) => {
                self.gallery = state;
                self.refreshing = false;
                self.last_sync = chrono::Local::now().format("%H:%M:%S").to_string();
                let count = self.gallery.cards().len();
                self.selected = self.selected.min(count.saturating_sub(1));
                self.scroll_row = 0;
            }
            AppEvent::StatsLoaded(stats) => self.stats = Some(stats),
        }
        None
    }

    fn handle_action(&mut self, action: Action) -> Option<Command> {
        let count = self.gallery.cards().len();
        match action {
            Action::Quit => self.should_quit = true,
            Action::Refresh => return self.begin_refresh(),
            Action::Left => self.selected = self.selected.saturating_sub(1),
            Action::Right => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            Action::Up => self.selected = self.selected.saturating_sub(self.columns),
            Action::Down => {
                if self.selected + self.columns < count {
                    self.selected += self.columns;
                }
            }
            Action::Select => {
                if count > 0 {
                    self.show_detail = !self.show_detail;
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::ClosePopup => {
                self.show_detail = false;
                self.show_help = false;
            }
            Action::None => {}
        }
        None
    }

    pub fn selected_card(&self) -> Option<&CardDescriptor> {
        self.gallery.cards().get(self.selected)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);
        let body = chunks[1];

        self.columns = card_grid::grid_columns(body.width);
        self.ensure_scroll_bounds(card_grid::visible_rows(body.height));

        let header = HeaderBar {
            account: &self.config.account,
            stats: self.stats.as_ref(),
            last_sync: &self.last_sync,
        };
        frame.render_widget(header, chunks[0]);

        let grid = CardGrid {
            state: &self.gallery,
            selected: self.selected,
            scroll_row: self.scroll_row,
        };
        frame.render_widget(grid, body);

        let profile_url = self.config.profile_url();
        let status = StatusBar {
            card_count: self.gallery.cards().len(),
            selected: self.selected,
            refreshing: self.refreshing,
            profile_url: &profile_url,
        };
        frame.render_widget(status, chunks[2]);

        if self.show_detail {
            if let Some(card) = self.selected_card() {
                frame.render_widget(DetailPanel { card }, size);
            }
        }
        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }

    fn ensure_scroll_bounds(&mut self, visible_rows: usize) {
        let row = self.selected / self.columns.max(1);
        if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
        if row < self.scroll_row {
            self.scroll_row = row;
        }
    }
}
