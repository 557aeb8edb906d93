mod app;
mod config;
mod error;
mod event;
mod gallery;
mod github;
mod logging;
mod render;
#[cfg(test)]
mod test_utils;
mod ui;

use app::{App, Command};
use clap::Parser;
use config::{CliOverrides, Config};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::Result;
use event::AppEvent;
use futures::StreamExt;
use github::client::GitHubClient;
use github::types::AccountStats;
use logging::LogTarget;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "folio", about = "Project gallery for a GitHub account")]
struct Cli {
    #[arg(long, short, help = "GitHub account to show")]
    account: Option<String>,

    #[arg(long, help = "Number of projects to show")]
    limit: Option<usize>,

    #[arg(long, help = "Print the gallery as an HTML fragment and exit")]
    html: bool,

    #[arg(long, short, requires = "html", help = "Write the HTML fragment to a file")]
    out: Option<PathBuf>,

    #[arg(long, help = "Print the effective configuration and exit")]
    print_config: bool,

    #[arg(long, default_value = "info", help = "Log filter when RUST_LOG is unset")]
    log_level: String,
}

// one cooperative thread: the two fetches and the UI loop interleave on it
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let target = if cli.html || cli.print_config {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    if let Err(e) = logging::init(&cli.log_level, target) {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = Config::load(CliOverrides {
        account: cli.account,
        limit: cli.limit,
    });
    tracing::debug!(?config, "configuration loaded");

    if cli.print_config {
        print!("{}", config.to_redacted_toml()?);
        return Ok(());
    }

    let client = match GitHubClient::new(config.github_token.as_deref(), &config.api_base) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.html {
        run_html(&config, &client, cli.out).await?;
        return Ok(());
    }

    run_tui(config, client).await?;
    Ok(())
}

async fn run_html(config: &Config, client: &GitHubClient, out: Option<PathBuf>) -> Result<()> {
    let (state, stats) = tokio::join!(
        gallery::fetch_gallery(client, &config.account, config.limit),
        client.fetch_stats(&config.account),
    );
    log_stats(&config.account, stats);

    let html = render::html::render_gallery(&state);
    match out {
        Some(path) => {
            std::fs::write(&path, html)?;
            tracing::info!(path = %path.display(), "gallery written");
        }
        None => print!("{html}"),
    }
    Ok(())
}

async fn run_tui(config: Config, client: GitHubClient) -> Result<()> {
    let mut app = App::new(config);
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    // Both fetches start together; neither waits on the other.
    if let Some(cmd) = app.begin_refresh() {
        run_command(cmd, &app.config, &client, &tx);
    }
    spawn_stats_fetch(&client, &app.config.account, &tx);

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let input_tx = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        if let Some(cmd) = app.handle_event(first) {
            run_command(cmd, &app.config, &client, &tx);
        }
        while let Ok(pending) = rx.try_recv() {
            if let Some(cmd) = app.handle_event(pending) {
                run_command(cmd, &app.config, &client, &tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    input_task.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn run_command(
    cmd: Command,
    config: &Config,
    client: &GitHubClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match cmd {
        Command::FetchGallery => {
            let client = client.clone();
            let account = config.account.clone();
            let limit = config.limit;
            let tx = tx.clone();
            tokio::spawn(async move {
                let state = gallery::fetch_gallery(&client, &account, limit).await;
                let _ = tx.send(AppEvent::GalleryLoaded(state));
            });
        }
    }
}

fn spawn_stats_fetch(client: &GitHubClient, account: &str, tx: &mpsc::UnboundedSender<AppEvent>) {
    let client = client.clone();
    let account = account.to_string();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_stats(&account).await;
        if let Ok(stats) = &result {
            let _ = tx.send(AppEvent::StatsLoaded(*stats));
        }
        log_stats(&account, result);
    });
}

/// Stats are informational; a failure here never reaches the user.
fn log_stats(account: &str, result: Result<AccountStats>) {
    match result {
        Ok(stats) => tracing::info!(
            account,
            public_repos = stats.public_repos,
            followers = stats.followers,
            following = stats.following,
            "github stats"
        ),
        Err(e) => tracing::warn!(account, error = %e, "error fetching github stats"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_html_mode() {
        let cli = Cli::try_parse_from(["folio", "--account", "someone", "--html", "-o", "out.html"])
            .unwrap();
        assert_eq!(cli.account.as_deref(), Some("someone"));
        assert!(cli.html);
        assert_eq!(cli.out, Some(PathBuf::from("out.html")));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn out_requires_html() {
        assert!(Cli::try_parse_from(["folio", "--out", "x.html"]).is_err());
    }
}
