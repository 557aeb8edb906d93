use serde::{Deserialize, Deserializer, Serialize};

/// One repository as returned by `GET /users/{account}/repos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,
    #[serde(rename = "forks_count", default)]
    pub forks: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    #[serde(rename = "html_url")]
    pub code_url: String,
}

impl RepoRecord {
    /// GitHub reports an unset homepage as either `null` or `""`.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStats {
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListReposParams {
    pub sort: &'static str,
    pub per_page: u8,
}

impl Default for ListReposParams {
    fn default() -> Self {
        Self {
            sort: "updated",
            per_page: 100,
        }
    }
}
