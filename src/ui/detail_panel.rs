use crate::gallery::card::CardDescriptor;
use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct DetailPanel<'a> {
    pub card: &'a CardDescriptor,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let card = self.card;
        let popup = super::centered_rect(70, 70, area);
        Clear.render(popup, buf);

        let color = theme::card_color(card.color);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", card.display_name),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.width < 10 || inner.height == 0 {
            return;
        }
        let value_w = (inner.width as usize).saturating_sub(12);
        let label = Style::default().fg(theme::ACCENT);
        let row = |name: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{name:<11} "), label),
                Span::raw(truncate_with_ellipsis(&value, value_w)),
            ])
        };

        let mut lines = vec![
            row("Repository", card.name.clone()),
            row(
                "Language",
                card.language.clone().unwrap_or_else(|| "none".to_string()),
            ),
            row("Stars", card.stars.to_string()),
            row("Forks", card.forks.to_string()),
        ];
        if !card.topics.is_empty() {
            lines.push(row("Topics", card.topics.join(", ")));
        }
        if let Some(home) = &card.homepage {
            lines.push(row("Live Demo", home.clone()));
        }
        lines.push(row("Code", card.code_url.clone()));
        lines.push(row("Image", format!("{} ({})", card.image.key, card.image.url)));
        lines.push(Line::default());
        lines.push(Line::from(Span::raw(card.description_or_default().to_string())));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
