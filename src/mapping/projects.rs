// src/mapping/projects.rs
// =============================================================================
// Turns featured repositories into project cards.
//
// - Category: topic tags first (explicit), then the language with the most
//   bytes, then "fullstack"
// - Tech stack: languages above 5% of the bytes, biggest first, at most 5
// - Image: a few language overrides, otherwise one picture per category
// =============================================================================

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::github::{FeaturedRepository, LanguageStats};

const TECH_STACK_LIMIT: usize = 5;

const DESCRIPTION_FALLBACK: &str = "A project built with modern technologies and best practices.";

const IMAGE_FRONTEND: &str =
    "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMAGE_BACKEND: &str =
    "https://images.pexels.com/photos/577585/pexels-photo-577585.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMAGE_MOBILE: &str =
    "https://images.pexels.com/photos/1552242/pexels-photo-1552242.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMAGE_DEVOPS: &str =
    "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMAGE_DATA: &str =
    "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMAGE_FULLSTACK: &str =
    "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMAGE_JAVASCRIPT: &str =
    "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=600";
const IMAGE_PYTHON: &str =
    "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=600";

/// The kind of project, used for filtering and picking an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Fullstack,
    Frontend,
    Backend,
    Mobile,
    Devops,
    Data,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::Fullstack,
        ProjectCategory::Frontend,
        ProjectCategory::Backend,
        ProjectCategory::Mobile,
        ProjectCategory::Devops,
        ProjectCategory::Data,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Devops => "devops",
            ProjectCategory::Data => "data",
        }
    }

    /// Human-readable name for filter buttons and tables
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Fullstack => "Full Stack",
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Backend => "Backend",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Devops => "DevOps",
            ProjectCategory::Data => "Data Science",
        }
    }

    fn image(&self) -> &'static str {
        match self {
            ProjectCategory::Fullstack => IMAGE_FULLSTACK,
            ProjectCategory::Frontend => IMAGE_FRONTEND,
            ProjectCategory::Backend => IMAGE_BACKEND,
            ProjectCategory::Mobile => IMAGE_MOBILE,
            ProjectCategory::Devops => IMAGE_DEVOPS,
            ProjectCategory::Data => IMAGE_DATA,
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown project category: {}", s))
    }
}

/// Category for a GitHub language name. Total: unknown languages are fullstack.
pub fn language_category(language: &str) -> ProjectCategory {
    match language {
        "JavaScript" | "TypeScript" | "React" | "Vue" | "Angular" | "Svelte" | "HTML" | "CSS"
        | "SCSS" => ProjectCategory::Frontend,

        "Python" | "Node.js" | "Java" | "C#" | "Go" | "Rust" | "PHP" | "Ruby" | "C++" | "C" => {
            ProjectCategory::Backend
        }

        "Swift" | "Kotlin" | "Dart" | "Objective-C" | "React Native" | "Flutter" => {
            ProjectCategory::Mobile
        }

        "Shell" | "Dockerfile" | "YAML" | "HCL" | "PowerShell" => ProjectCategory::Devops,

        "Jupyter Notebook" | "R" | "MATLAB" | "SQL" => ProjectCategory::Data,

        _ => ProjectCategory::Fullstack,
    }
}

/// Category for a topic tag, if the tag says anything about it.
pub fn topic_category(topic: &str) -> Option<ProjectCategory> {
    let category = match topic.to_lowercase().as_str() {
        "react" | "vue" | "angular" | "frontend" | "web" | "ui" | "dashboard" => {
            ProjectCategory::Frontend
        }
        "api" | "backend" | "server" | "microservice" | "database" => ProjectCategory::Backend,
        "mobile" | "ios" | "android" | "react-native" | "flutter" => ProjectCategory::Mobile,
        "devops" | "docker" | "kubernetes" | "ci-cd" | "deployment" => ProjectCategory::Devops,
        "machine-learning" | "data-science" | "ai" | "analytics" => ProjectCategory::Data,
        _ => return None,
    };
    Some(category)
}

// Picks a project's category
//
// Parameters:
//   languages: the project's own language -> bytes map
//   topics: the repository's topic tags, in API order
//
// Returns: the first topic that maps to a category; otherwise the category of
//          the language with the most bytes; otherwise Fullstack
pub fn determine_project_category(languages: &LanguageStats, topics: &[String]) -> ProjectCategory {
    if let Some(category) = topics.iter().find_map(|topic| topic_category(topic)) {
        return category;
    }

    match primary_language(languages) {
        Some(language) => language_category(language),
        None => ProjectCategory::Fullstack,
    }
}

// Lists the languages worth showing on a project card
//
// Parameters:
//   languages: language -> bytes
//
// Returns: languages with more than 5% of the bytes, largest first, at most 5
//
// Example:
//   { Rust: 900, Shell: 50, Python: 50 } -> ["Rust"]  (Shell is exactly 5%)
pub fn extract_tech_stack(languages: &LanguageStats) -> Vec<String> {
    let total: u64 = languages.values().sum();
    if total == 0 {
        return Vec::new();
    }

    // bytes / total > 0.05, kept in integers
    let mut significant: Vec<(&String, u64)> = languages
        .iter()
        .map(|(language, &bytes)| (language, bytes))
        .filter(|(_, bytes)| u128::from(*bytes) * 20 > u128::from(total))
        .collect();

    sort_by_bytes(&mut significant);

    significant
        .into_iter()
        .take(TECH_STACK_LIMIT)
        .map(|(language, _)| language.clone())
        .collect()
}

// Picks the image for a project card
//
// Parameters:
//   category: the project's category
//   languages: its tech stack
//
// Returns: a language-specific image when one applies, else the category's
pub fn project_image(category: ProjectCategory, languages: &[String]) -> &'static str {
    let uses = |name: &str| languages.iter().any(|language| language == name);

    if uses("JavaScript") || uses("TypeScript") {
        return IMAGE_JAVASCRIPT;
    }
    if uses("Python") {
        return IMAGE_PYTHON;
    }
    if uses("React") || uses("Vue") {
        return IMAGE_FRONTEND;
    }
    category.image()
}

/// A project card, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub github_url: String,
    pub live_url: String,
    /// Year the repository was created
    pub date: String,
    pub stars: u64,
    pub forks: u64,
    pub last_updated: String,
    pub topics: Vec<String>,
}

impl Project {
    pub fn from_featured(featured: &FeaturedRepository) -> Self {
        let repo = &featured.repo;
        let tech_stack = extract_tech_stack(&featured.detailed_languages);
        let category = determine_project_category(&featured.detailed_languages, &repo.topics);
        let image = project_image(category, &tech_stack);

        let technologies = if tech_stack.is_empty() {
            repo.language.iter().cloned().collect()
        } else {
            tech_stack
        };

        Project {
            id: repo.id,
            title: display_title(&repo.name),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string()),
            image: image.to_string(),
            technologies,
            category,
            github_url: repo.html_url.clone(),
            live_url: repo.homepage.clone().unwrap_or_else(|| repo.html_url.clone()),
            date: repo.created_at.format("%Y").to_string(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            last_updated: repo.updated_at.to_rfc3339(),
            topics: repo.topics.clone(),
        }
    }

    /// True when the project links a demo besides its source code
    pub fn has_live_demo(&self) -> bool {
        self.live_url != self.github_url
    }
}

/// Which projects to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(ProjectCategory),
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(ProjectFilter::All)
        } else {
            s.parse().map(ProjectFilter::Category)
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| match filter {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == category,
        })
        .collect()
}

// "my-cool_app" -> "My Cool_app": dashes become spaces and every letter
// that starts a word is upper-cased
fn display_title(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word_char = c.is_ascii_alphanumeric() || c == '_';
        if is_word_char && !in_word {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        in_word = is_word_char;
    }
    title
}

// The language with the most bytes; ties go to the alphabetically first name
fn primary_language(languages: &LanguageStats) -> Option<&str> {
    let mut entries: Vec<(&String, u64)> = languages
        .iter()
        .map(|(language, &bytes)| (language, bytes))
        .collect();
    sort_by_bytes(&mut entries);
    entries.first().map(|(language, _)| language.as_str())
}

fn sort_by_bytes(entries: &mut [(&String, u64)]) {
    entries.sort_by(|(a_name, a_bytes), (b_name, b_bytes)| {
        b_bytes.cmp(a_bytes).then_with(|| a_name.cmp(b_name))
    });
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why topics before languages?
//    - A tag is something the author chose; byte counts are only a guess
//      (a React app with a big Python build script is still frontend)
//
// 2. Tie-break between languages
//    - HashMap iteration order is random, so equal byte counts are broken
//      by name. The same input always gives the same category and stack
//
// 3. Why u128 in extract_tech_stack?
//    - `bytes * 20 > total` avoids float rounding at the 5% border, and
//      u128 can't overflow for any u64 inputs
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::tests::repo;

    fn stats(entries: &[(&str, u64)]) -> LanguageStats {
        entries
            .iter()
            .map(|(language, bytes)| (language.to_string(), *bytes))
            .collect()
    }

    fn topics(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_language_category_table() {
        assert_eq!(language_category("TypeScript"), ProjectCategory::Frontend);
        assert_eq!(language_category("Rust"), ProjectCategory::Backend);
        assert_eq!(language_category("Dart"), ProjectCategory::Mobile);
        assert_eq!(language_category("HCL"), ProjectCategory::Devops);
        assert_eq!(language_category("Jupyter Notebook"), ProjectCategory::Data);
        assert_eq!(language_category("Brainfuck"), ProjectCategory::Fullstack);
    }

    #[test]
    fn test_react_topic_wins_over_language() {
        let languages = stats(&[("Python", 10_000)]);
        assert_eq!(
            determine_project_category(&languages, &topics(&["react"])),
            ProjectCategory::Frontend
        );
        assert_eq!(
            determine_project_category(&languages, &topics(&["React"])),
            ProjectCategory::Frontend
        );
    }

    #[test]
    fn test_first_matching_topic_is_used() {
        let languages = stats(&[("Python", 10)]);
        assert_eq!(
            determine_project_category(&languages, &topics(&["portfolio", "docker", "api"])),
            ProjectCategory::Devops
        );
    }

    #[test]
    fn test_without_topics_primary_language_decides() {
        let languages = stats(&[("Shell", 50), ("Go", 5_000), ("HTML", 400)]);
        assert_eq!(
            determine_project_category(&languages, &[]),
            ProjectCategory::Backend
        );
    }

    #[test]
    fn test_unmatched_falls_back_to_fullstack() {
        assert_eq!(
            determine_project_category(&stats(&[("Elm", 300)]), &topics(&["hobby"])),
            ProjectCategory::Fullstack
        );
        assert_eq!(
            determine_project_category(&LanguageStats::new(), &[]),
            ProjectCategory::Fullstack
        );
    }

    #[test]
    fn test_primary_language_tie_is_deterministic() {
        let languages = stats(&[("Rust", 100), ("CSS", 100)]);
        assert_eq!(primary_language(&languages), Some("CSS"));
    }

    #[test]
    fn test_tech_stack_drops_small_languages() {
        // Shell is exactly 5% and is left out
        let languages = stats(&[("Rust", 900), ("Shell", 50), ("Python", 50)]);
        assert_eq!(extract_tech_stack(&languages), vec!["Rust"]);

        let languages = stats(&[("Rust", 900), ("Shell", 51), ("Python", 49)]);
        assert_eq!(extract_tech_stack(&languages), vec!["Rust", "Shell"]);
    }

    #[test]
    fn test_tech_stack_top_five_by_bytes() {
        let languages = stats(&[
            ("A", 100),
            ("B", 200),
            ("C", 300),
            ("D", 400),
            ("E", 500),
            ("F", 600),
        ]);
        assert_eq!(extract_tech_stack(&languages), vec!["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_tech_stack_empty_input() {
        assert!(extract_tech_stack(&LanguageStats::new()).is_empty());
        assert!(extract_tech_stack(&stats(&[("Rust", 0)])).is_empty());
    }

    #[test]
    fn test_project_image_overrides() {
        assert_eq!(
            project_image(ProjectCategory::Backend, &topics(&["Go", "TypeScript"])),
            IMAGE_JAVASCRIPT
        );
        assert_eq!(
            project_image(ProjectCategory::Data, &topics(&["Python"])),
            IMAGE_PYTHON
        );
        assert_eq!(
            project_image(ProjectCategory::Mobile, &topics(&["Vue"])),
            IMAGE_FRONTEND
        );
        assert_eq!(project_image(ProjectCategory::Devops, &[]), IMAGE_DEVOPS);
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("weather-app"), "Weather App");
        assert_eq!(display_title("my_cool-tool"), "My_cool Tool");
        assert_eq!(display_title("api.v2"), "Api.V2");
        assert_eq!(display_title("already Nice"), "Already Nice");
    }

    #[test]
    fn test_project_from_featured() {
        let mut r = repo(7, "task-board");
        r.language = Some("TypeScript".to_string());
        r.homepage = Some("https://tasks.example.com".to_string());
        r.topics = topics(&["dashboard"]);
        r.stargazers_count = 4;
        let featured = FeaturedRepository {
            repo: r,
            detailed_languages: stats(&[("TypeScript", 800), ("CSS", 200)]),
        };

        let project = Project::from_featured(&featured);
        assert_eq!(project.title, "Task Board");
        assert_eq!(project.description, DESCRIPTION_FALLBACK);
        assert_eq!(project.technologies, vec!["TypeScript", "CSS"]);
        assert_eq!(project.category, ProjectCategory::Frontend);
        assert_eq!(project.image, IMAGE_JAVASCRIPT);
        assert_eq!(project.live_url, "https://tasks.example.com");
        assert_eq!(project.date, "2024");
        assert!(project.has_live_demo());
    }

    #[test]
    fn test_project_without_languages_uses_primary_language() {
        let mut r = repo(8, "scripts");
        r.language = Some("Shell".to_string());
        let featured = FeaturedRepository {
            repo: r,
            detailed_languages: LanguageStats::new(),
        };

        let project = Project::from_featured(&featured);
        assert_eq!(project.technologies, vec!["Shell"]);
        assert_eq!(project.category, ProjectCategory::Fullstack);
        assert_eq!(project.live_url, project.github_url);
        assert!(!project.has_live_demo());
    }

    #[test]
    fn test_filter_parsing_and_filtering() {
        assert_eq!("all".parse::<ProjectFilter>(), Ok(ProjectFilter::All));
        assert_eq!(
            "DevOps".parse::<ProjectFilter>(),
            Ok(ProjectFilter::Category(ProjectCategory::Devops))
        );
        assert!("games".parse::<ProjectFilter>().is_err());

        let make = |id, languages: &[(&str, u64)]| {
            Project::from_featured(&FeaturedRepository {
                repo: repo(id, "x"),
                detailed_languages: stats(languages),
            })
        };
        let projects = vec![make(1, &[("Rust", 1)]), make(2, &[("Swift", 1)])];

        assert_eq!(filter_projects(&projects, ProjectFilter::All).len(), 2);
        let mobile = filter_projects(&projects, ProjectFilter::Category(ProjectCategory::Mobile));
        assert_eq!(mobile.len(), 1);
        assert_eq!(mobile[0].id, 2);
    }
}
