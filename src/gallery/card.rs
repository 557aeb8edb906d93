use crate::github::types::RepoRecord;
use itertools::Itertools;

pub const FALLBACK_COLOR: &str = "#6a11cb";
pub const MAX_TOPIC_CHIPS: usize = 4;
pub const NO_DESCRIPTION: &str = "No description available";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("PHP", "#4F5D95"),
    ("TypeScript", "#2b7489"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Ruby", "#701516"),
    ("Go", "#00ADD8"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectImage {
    pub key: &'static str,
    pub url: &'static str,
}

const TOPIC_IMAGES: &[ProjectImage] = &[
    ProjectImage {
        key: "web",
        url: "https://images.unsplash.com/photo-1547658719-da2b51169166?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
    },
    ProjectImage {
        key: "mobile",
        url: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
    },
    ProjectImage {
        key: "api",
        url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
    },
    ProjectImage {
        key: "database",
        url: "https://images.unsplash.com/photo-1544383835-bda2bc66a55d?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
    },
    ProjectImage {
        key: "cloud",
        url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
    },
    ProjectImage {
        key: "ai",
        url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
    },
    ProjectImage {
        key: "game",
        url: "https://images.unsplash.com/photo-1511512578047-dfb367046420?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
    },
];

pub const DEFAULT_IMAGE: ProjectImage = ProjectImage {
    key: "code",
    url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
};

fn topic_image(topic: &str) -> Option<ProjectImage> {
    TOPIC_IMAGES.iter().find(|img| img.key == topic).copied()
}

/// Display-ready projection of a [`RepoRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDescriptor {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub color: &'static str,
    pub image: ProjectImage,
    pub stars: u64,
    pub forks: u64,
    pub homepage: Option<String>,
    pub topics: Vec<String>,
    pub code_url: String,
}

impl CardDescriptor {
    pub fn from_record(repo: &RepoRecord) -> Self {
        Self {
            name: repo.name.clone(),
            display_name: format_repo_name(&repo.name),
            description: repo
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            language: repo.language.clone(),
            color: language_color(repo.language.as_deref()),
            image: project_image(&repo.topics, repo.language.as_deref()),
            stars: repo.stars,
            forks: repo.forks,
            homepage: repo.homepage().map(str::to_string),
            topics: repo.topics.clone(),
            code_url: repo.code_url.clone(),
        }
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    pub fn has_live_demo(&self) -> bool {
        self.homepage.is_some()
    }

    pub fn topic_chips(&self) -> &[String] {
        &self.topics[..self.topics.len().min(MAX_TOPIC_CHIPS)]
    }
}

/// `"my-cool-project"` becomes `"My Cool Project"`.
pub fn format_repo_name(name: &str) -> String {
    name.split('-').map(capitalize_first).join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| {
            LANGUAGE_COLORS
                .iter()
                .find(|(name, _)| *name == lang)
                .map(|(_, color)| *color)
        })
        .unwrap_or(FALLBACK_COLOR)
}

/// First topic (in list order) with a known image wins, then a language
/// default, then the generic image.
pub fn project_image(topics: &[String], language: Option<&str>) -> ProjectImage {
    if let Some(img) = topics.iter().find_map(|t| topic_image(t)) {
        return img;
    }

    let by_language = match language {
        Some("Python") => topic_image("ai"),
        Some("JavaScript") => topic_image("web"),
        _ => None,
    };
    by_language.unwrap_or(DEFAULT_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_repo;

    fn topics(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn formats_hyphenated_names() {
        assert_eq!(format_repo_name("my-cool-project"), "My Cool Project");
        assert_eq!(format_repo_name("portfolio"), "Portfolio");
        assert_eq!(format_repo_name("already-Upper"), "Already Upper");
        assert_eq!(format_repo_name("snake_case-repo"), "Snake_case Repo");
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(format_repo_name("a--b"), "A  B");
        assert_eq!(format_repo_name("-lead"), " Lead");
        assert_eq!(format_repo_name(""), "");
    }

    #[test]
    fn known_language_colors() {
        assert_eq!(language_color(Some("Go")), "#00ADD8");
        assert_eq!(language_color(Some("C#")), "#178600");
        assert_eq!(language_color(Some("C")), "#555555");
        assert_eq!(language_color(Some("Kotlin")), "#F18E33");
    }

    #[test]
    fn unknown_or_missing_language_uses_fallback() {
        assert_eq!(language_color(Some("Rust")), FALLBACK_COLOR);
        assert_eq!(language_color(Some("go")), FALLBACK_COLOR);
        assert_eq!(language_color(None), FALLBACK_COLOR);
    }

    #[test]
    fn first_listed_topic_wins() {
        let img = project_image(&topics(&["game", "web"]), None);
        assert_eq!(img.key, "game");

        let img = project_image(&topics(&["web", "game"]), None);
        assert_eq!(img.key, "web");

        let img = project_image(&topics(&["rust", "cli", "database"]), Some("Python"));
        assert_eq!(img.key, "database");
    }

    #[test]
    fn language_defaults_when_no_topic_matches() {
        assert_eq!(project_image(&topics(&["misc"]), Some("Python")).key, "ai");
        assert_eq!(project_image(&[], Some("JavaScript")).key, "web");
        assert_eq!(project_image(&[], Some("Go")), DEFAULT_IMAGE);
        assert_eq!(project_image(&[], None), DEFAULT_IMAGE);
    }

    #[test]
    fn go_repo_card_is_colored() {
        let mut repo = make_repo("http-proxy", 4, false);
        repo.language = Some("Go".to_string());
        repo.topics = topics(&["networking"]);

        let card = CardDescriptor::from_record(&repo);
        assert_eq!(card.color, "#00ADD8");
        assert_eq!(card.image, DEFAULT_IMAGE);
        assert_eq!(card.display_name, "Http Proxy");
    }

    #[test]
    fn optional_sections_follow_source_fields() {
        let mut repo = make_repo("plain", 0, false);
        repo.homepage = Some(String::new());
        repo.description = None;
        let card = CardDescriptor::from_record(&repo);
        assert!(!card.has_live_demo());
        assert!(card.topic_chips().is_empty());
        assert_eq!(card.description_or_default(), NO_DESCRIPTION);

        repo.homepage = Some(" ".to_string());
        assert!(CardDescriptor::from_record(&repo).has_live_demo());

        repo.homepage = Some("https://plain.example.com".to_string());
        repo.topics = topics(&["a", "b", "c", "d", "e"]);
        let card = CardDescriptor::from_record(&repo);
        assert!(card.has_live_demo());
        assert_eq!(card.topic_chips(), &topics(&["a", "b", "c", "d"])[..]);
        assert_eq!(card.topics.len(), 5);
    }
}
