use crate::gallery::card::CardDescriptor;
use crate::gallery::GalleryState;
use crate::render::html::{EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

pub const CARD_HEIGHT: u16 = 9;
const MIN_CARD_WIDTH: u16 = 34;
const MAX_COLUMNS: usize = 3;

pub fn grid_columns(width: u16) -> usize {
    ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

pub fn visible_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

pub struct CardGrid<'a> {
    pub state: &'a GalleryState,
    pub selected: usize,
    pub scroll_row: usize,
}

impl<'a> Widget for CardGrid<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        match self.state {
            GalleryState::Loading => render_message(
                area,
                buf,
                vec![Line::from(Span::styled(
                    LOADING_MESSAGE,
                    Style::default().fg(theme::DIM_TEXT),
                ))],
            ),
            GalleryState::Empty => render_message(
                area,
                buf,
                vec![Line::from(Span::raw(EMPTY_MESSAGE))],
            ),
            GalleryState::Failed { profile_url } => render_message(
                area,
                buf,
                vec![
                    Line::from(Span::styled(
                        "Unable to load projects.",
                        Style::default().fg(theme::ERROR_FG),
                    )),
                    Line::from(vec![
                        Span::raw("Please visit my GitHub profile directly: "),
                        Span::styled(
                            profile_url.clone(),
                            Style::default()
                                .fg(theme::ACCENT)
                                .add_modifier(Modifier::UNDERLINED),
                        ),
                    ]),
                ],
            ),
            GalleryState::Ready(cards) => self.render_cards(cards, area, buf),
        }
    }
}

impl<'a> CardGrid<'a> {
    fn render_cards(&self, cards: &[CardDescriptor], area: Rect, buf: &mut Buf) {
        let cols = grid_columns(area.width);
        let card_w = area.width / cols as u16;
        let rows = visible_rows(area.height);

        for (i, card) in cards.iter().enumerate() {
            let row = i / cols;
            let col = i % cols;
            if row < self.scroll_row || row >= self.scroll_row + rows {
                continue;
            }
            let y = area.y + ((row - self.scroll_row) as u16) * CARD_HEIGHT;
            if y >= area.bottom() {
                continue;
            }
            // short terminals get a clipped card rather than a blank body
            let height = CARD_HEIGHT.min(area.bottom() - y);
            let x = area.x + col as u16 * card_w;
            let rect = Rect::new(x, y, card_w, height);
            CardView {
                card,
                selected: i == self.selected,
            }
            .render(rect, buf);
        }
    }
}

fn render_message(area: Rect, buf: &mut Buf, lines: Vec<Line<'static>>) {
    let h = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(h) / 2;
    let msg_area = Rect::new(area.x, top, area.width, h.min(area.height));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(msg_area, buf);
}

struct CardView<'a> {
    card: &'a CardDescriptor,
    selected: bool,
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let card = self.card;
        let color = theme::card_color(card.color);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", card.display_name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        if self.selected {
            block = block
                .border_type(BorderType::Thick)
                .style(Style::default().bg(theme::SELECTED_BG));
        } else {
            block = block.border_type(BorderType::Rounded);
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width < 4 {
            return;
        }
        let w = inner.width as usize;
        let mut y = inner.y;

        // two lines of description
        let desc_h = 2.min(inner.height);
        Paragraph::new(card.description_or_default().to_string())
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, y, inner.width, desc_h), buf);
        y += desc_h;

        let mut lines: Vec<Line> = Vec::new();

        let mut stats = Vec::new();
        if let Some(lang) = &card.language {
            stats.push(Span::styled(format!("\u{25cf} {lang}  "), Style::default().fg(color)));
        }
        stats.push(Span::styled(
            format!("\u{2605} {}  ", card.stars),
            Style::default().fg(theme::STAR_COLOR),
        ));
        stats.push(Span::styled(
            format!("\u{2442} {}", card.forks),
            Style::default().fg(theme::DIM_TEXT),
        ));
        lines.push(Line::from(stats));

        let chips = card.topic_chips();
        if !chips.is_empty() {
            let mut spans = Vec::new();
            for topic in chips {
                spans.push(Span::styled(
                    format!(" {topic} "),
                    Style::default().fg(theme::CHIP_FG).bg(theme::CHIP_BG),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        let mut links = Vec::new();
        if card.has_live_demo() {
            links.push(Span::styled(
                "\u{25b6} Live Demo  ",
                Style::default().fg(theme::LIVE_COLOR).add_modifier(Modifier::BOLD),
            ));
        }
        links.push(Span::styled(
            format!("[{}]", card.image.key),
            Style::default().fg(theme::DIM_TEXT),
        ));
        lines.push(Line::from(links));

        lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&card.code_url, w),
            Style::default().fg(theme::DIM_TEXT),
        )));

        for line in lines {
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_card;

    fn buffer_text(buf: &Buf) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(state: &GalleryState, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buf::empty(area);
        CardGrid {
            state,
            selected: 0,
            scroll_row: 0,
        }
        .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn column_count_tracks_width() {
        assert_eq!(grid_columns(20), 1);
        assert_eq!(grid_columns(70), 2);
        assert_eq!(grid_columns(300), 3);
    }

    #[test]
    fn messages_for_non_ready_states() {
        assert!(draw(&GalleryState::Loading, 60, 10).contains("Loading projects"));
        assert!(draw(&GalleryState::Empty, 60, 10).contains("Check back soon"));

        let failed = GalleryState::Failed {
            profile_url: "https://github.com/someone".to_string(),
        };
        let text = draw(&failed, 100, 10);
        assert!(text.contains("Unable to load projects."));
        assert!(text.contains("https://github.com/someone"));
    }

    #[test]
    fn cards_show_titles_and_stats() {
        let state = GalleryState::Ready(vec![make_card("first-app", 42), make_card("second", 7)]);
        let text = draw(&state, 80, CARD_HEIGHT);
        assert!(text.contains("First App"));
        assert!(text.contains("Second"));
        assert!(text.contains("\u{2605} 42"));
    }

    #[test]
    fn short_body_still_shows_selected_card() {
        let state = GalleryState::Ready(vec![make_card("tiny-term", 5)]);
        let text = draw(&state, 40, 4);
        assert!(text.contains("Tiny Term"));
        assert!(text.contains("tiny-term description"));
    }

    #[test]
    fn scrolled_rows_are_hidden() {
        let state = GalleryState::Ready(vec![make_card("top", 2), make_card("bottom", 1)]);
        let area = Rect::new(0, 0, 40, CARD_HEIGHT);
        let mut buf = Buf::empty(area);
        CardGrid {
            state: &state,
            selected: 1,
            scroll_row: 1,
        }
        .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Bottom"));
        assert!(!text.contains("Top"));
    }
}
