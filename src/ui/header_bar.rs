use crate::github::types::AccountStats;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBar<'a> {
    pub account: &'a str,
    pub stats: Option<&'a AccountStats>,
    pub last_sync: &'a str,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans: Vec<Span<'static>> = vec![
            Span::styled(
                " \u{25c6} folio",
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::HEADER_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " \u{2503} ",
                Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
            ),
            Span::styled(self.account.to_string(), Style::default().bg(theme::HEADER_BG)),
        ];

        if let Some(stats) = self.stats {
            spans.push(Span::styled(
                format!(
                    "  {} repos \u{00b7} {} followers \u{00b7} {} following",
                    stats.public_repos, stats.followers, stats.following
                ),
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let right = format!("synced: {}  ? help ", self.last_sync);
        let right_w = UnicodeWidthStr::width(right.as_str());
        let area_w = area.width as usize;
        if area_w > right_w {
            let right_x = area.x + (area_w - right_w) as u16;
            let right_span = Span::styled(
                right,
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            );
            buf.set_line(right_x, area.y, &Line::from(right_span), right_w as u16);
        }
    }
}
