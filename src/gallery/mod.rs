pub mod card;

use crate::config::profile_url;
use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::github::types::RepoRecord;
use card::CardDescriptor;

/// What the projects container currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryState {
    Loading,
    Failed { profile_url: String },
    Empty,
    Ready(Vec<CardDescriptor>),
}

impl GalleryState {
    pub fn from_fetch(result: Result<Vec<RepoRecord>>, account: &str, limit: usize) -> Self {
        match result {
            Err(e) => {
                tracing::error!(account, error = %e, "error fetching repositories");
                GalleryState::Failed {
                    profile_url: profile_url(account),
                }
            }
            Ok(repos) => {
                let received = repos.len();
                let selected = select_projects(repos, limit);
                if selected.is_empty() {
                    tracing::info!(account, received, "no projects to show");
                    return GalleryState::Empty;
                }
                tracing::info!(account, received, count = selected.len(), "gallery ready");
                GalleryState::Ready(selected.iter().map(CardDescriptor::from_record).collect())
            }
        }
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        match self {
            GalleryState::Ready(cards) => cards,
            _ => &[],
        }
    }
}

/// Drops forks, ranks by stars (stable, so ties keep API order), keeps `limit`.
pub fn select_projects(repos: Vec<RepoRecord>, limit: usize) -> Vec<RepoRecord> {
    let mut kept: Vec<RepoRecord> = repos.into_iter().filter(|r| !r.fork).collect();
    kept.sort_by(|a, b| b.stars.cmp(&a.stars));
    kept.truncate(limit);
    kept
}

pub async fn fetch_gallery(client: &GitHubClient, account: &str, limit: usize) -> GalleryState {
    GalleryState::from_fetch(client.fetch_repos(account).await, account, limit)
}
