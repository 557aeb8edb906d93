use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub card_count: usize,
    pub selected: usize,
    pub refreshing: bool,
    pub profile_url: &'a str,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
            )
        };
        let key = |k: &'static str| {
            Span::styled(
                k,
                Style::default()
                    .fg(theme::KEY_COLOR)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let text = |t: String| Span::styled(t, Style::default().bg(theme::STATUS_BG));

        let mut spans = vec![text(" ".to_string())];

        if self.card_count > 0 {
            spans.push(text(format!(
                "{}/{} projects ",
                self.selected.min(self.card_count - 1) + 1,
                self.card_count
            )));
            spans.push(sep());
        }

        if self.refreshing {
            spans.push(Span::styled(
                " \u{27f3} loading\u{2026} ",
                Style::default()
                    .fg(theme::DIM_TEXT)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(text(" ".to_string()));
            spans.push(key("r"));
            spans.push(text(" refresh ".to_string()));
        }
        spans.push(sep());
        spans.push(text(" ".to_string()));
        spans.push(key("\u{23ce}"));
        spans.push(text(" details ".to_string()));
        spans.push(key("q"));
        spans.push(text(" quit ".to_string()));
        spans.push(sep());
        spans.push(Span::styled(
            format!(" {} ", self.profile_url),
            Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
