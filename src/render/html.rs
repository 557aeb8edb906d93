use crate::gallery::card::{CardDescriptor, DEFAULT_IMAGE};
use crate::gallery::GalleryState;
use std::fmt::Write;

pub const LOADING_MESSAGE: &str = "Loading projects from GitHub...";
pub const EMPTY_MESSAGE: &str = "No projects found. Check back soon!";

/// Markup for the projects container in its current state.
pub fn render_gallery(state: &GalleryState) -> String {
    match state {
        GalleryState::Loading => format!("<div class=\"loading\">{LOADING_MESSAGE}</div>\n"),
        GalleryState::Failed { profile_url } => format!(
            "<div class=\"error-message\">\n  <p>Unable to load projects. Please visit my \
             <a href=\"{}\" target=\"_blank\">GitHub profile</a> directly.</p>\n</div>\n",
            escape(profile_url)
        ),
        GalleryState::Empty => format!("<p class=\"no-projects\">{EMPTY_MESSAGE}</p>\n"),
        GalleryState::Ready(cards) => cards.iter().map(render_card).collect(),
    }
}

pub fn render_card(card: &CardDescriptor) -> String {
    let mut out = String::new();
    // write! into a String cannot fail
    let _ = write_card(&mut out, card);
    out
}

fn write_card(out: &mut String, card: &CardDescriptor) -> std::fmt::Result {
    writeln!(out, "<div class=\"project-card\">")?;

    writeln!(out, "  <div class=\"project-image\">")?;
    writeln!(
        out,
        "    <img src=\"{}\" alt=\"{}\" onerror=\"this.src='{}'\">",
        escape(card.image.url),
        escape(&card.name),
        escape(DEFAULT_IMAGE.url)
    )?;
    if card.has_live_demo() {
        writeln!(out, "    <div class=\"live-badge\">Live Demo</div>")?;
    }
    writeln!(out, "  </div>")?;

    writeln!(out, "  <div class=\"project-content\">")?;
    writeln!(out, "    <h3>{}</h3>", escape(&card.display_name))?;
    writeln!(out, "    <p>{}</p>", escape(card.description_or_default()))?;

    writeln!(out, "    <div class=\"project-stats\">")?;
    if let Some(lang) = &card.language {
        writeln!(
            out,
            "      <span class=\"language\" style=\"color: {}\"><i class=\"fas fa-circle\"></i> {}</span>",
            card.color,
            escape(lang)
        )?;
    }
    writeln!(
        out,
        "      <span class=\"stars\"><i class=\"fas fa-star\"></i> {}</span>",
        card.stars
    )?;
    writeln!(
        out,
        "      <span class=\"forks\"><i class=\"fas fa-code-branch\"></i> {}</span>",
        card.forks
    )?;
    writeln!(out, "    </div>")?;

    let chips = card.topic_chips();
    if !chips.is_empty() {
        write!(out, "    <div class=\"project-tech\">")?;
        for topic in chips {
            write!(out, "<span>{}</span>", escape(topic))?;
        }
        writeln!(out, "</div>")?;
    }

    writeln!(out, "    <div class=\"project-links\">")?;
    if let Some(home) = &card.homepage {
        writeln!(
            out,
            "      <a href=\"{}\" class=\"btn small\" target=\"_blank\"><i class=\"fas fa-external-link-alt\"></i> Live Demo</a>",
            escape(home)
        )?;
    }
    writeln!(
        out,
        "      <a href=\"{}\" class=\"btn small secondary\" target=\"_blank\"><i class=\"fab fa-github\"></i> View Code</a>",
        escape(&card.code_url)
    )?;
    writeln!(out, "    </div>")?;

    writeln!(out, "  </div>")?;
    writeln!(out, "</div>")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
