use crate::gallery::GalleryState;
use crate::github::types::AccountStats;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    GalleryLoaded(GalleryState),
    StatsLoaded(AccountStats),
}
