// src/mapping/skills.rs
// =============================================================================
// Builds the skill bars from aggregated language bytes.
//
// Two sources are merged per category:
// 1. Derived skills: GitHub languages mapped to a display name, with a level
//    computed from that language's share of all bytes (60..=95)
// 2. Declared skills: a fixed list of frameworks and tools GitHub can't see
//
// A name appears once per category; derived skills win over declared ones.
// =============================================================================

use serde::Serialize;

use crate::github::LanguageStats;

const LEVEL_FLOOR: f64 = 60.0;
const LEVEL_CEILING: f64 = 95.0;
const LEVEL_PER_PERCENT: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Mobile,
    Cloud,
    Security,
}

impl SkillCategory {
    /// Display order of the skill tabs
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Mobile,
        SkillCategory::Cloud,
        SkillCategory::Security,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Database => "Database & Storage",
            SkillCategory::Mobile => "Mobile Development",
            SkillCategory::Cloud => "Cloud & DevOps",
            SkillCategory::Security => "Security & Testing",
        }
    }
}

/// One progress bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    /// 0..=100
    pub level: u8,
    /// Derived from GitHub language bytes rather than declared by hand
    pub from_github: bool,
}

/// A tab of skills, highest level first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub title: &'static str,
    pub skills: Vec<Skill>,
}

/// Maps a GitHub language to where it shows up and under which name.
pub fn language_skill(language: &str) -> Option<(SkillCategory, &'static str)> {
    use SkillCategory::*;

    let mapping = match language {
        "JavaScript" => (Frontend, "JavaScript"),
        "TypeScript" => (Frontend, "TypeScript"),
        "HTML" | "CSS" => (Frontend, "HTML/CSS"),
        "Vue" => (Frontend, "Vue.js"),
        "Svelte" => (Frontend, "Svelte"),

        "Python" => (Backend, "Python"),
        "Java" => (Backend, "Java"),
        "C#" => (Backend, "C#"),
        "Go" => (Backend, "Go"),
        "Rust" => (Backend, "Rust"),
        "PHP" => (Backend, "PHP"),
        "Ruby" => (Backend, "Ruby"),
        "C++" => (Backend, "C++"),
        "C" => (Backend, "C"),
        "Jupyter Notebook" => (Backend, "Data Science"),
        "R" => (Backend, "R"),
        "MATLAB" => (Backend, "MATLAB"),

        "SQL" => (Database, "SQL"),
        "PLpgSQL" => (Database, "PostgreSQL"),
        "TSQL" => (Database, "SQL Server"),

        "Kotlin" => (Mobile, "Kotlin"),
        "Swift" => (Mobile, "Swift"),
        "Dart" => (Mobile, "Flutter/Dart"),
        "Objective-C" => (Mobile, "Objective-C"),

        "Shell" => (Cloud, "Shell Scripting"),
        "PowerShell" => (Cloud, "PowerShell"),
        "Dockerfile" => (Cloud, "Docker"),
        "YAML" => (Cloud, "YAML/Config"),
        "HCL" => (Cloud, "Terraform"),

        _ => return None,
    };
    Some(mapping)
}

/// Hand-declared skills that no language detection can find.
pub fn declared_skills(category: SkillCategory) -> &'static [(&'static str, u8)] {
    match category {
        SkillCategory::Frontend => &[
            ("React", 95),
            ("Next.js", 85),
            ("Tailwind CSS", 90),
            ("Sass/SCSS", 85),
        ],
        SkillCategory::Backend => &[
            ("Node.js", 90),
            ("Express.js", 88),
            ("GraphQL", 82),
            ("REST APIs", 95),
            ("Microservices", 80),
        ],
        SkillCategory::Database => &[
            ("PostgreSQL", 88),
            ("MongoDB", 85),
            ("Redis", 80),
            ("Prisma", 85),
            ("Supabase", 90),
            ("Firebase", 82),
        ],
        SkillCategory::Mobile => &[("React Native", 85), ("Expo", 88), ("Mobile UI/UX", 85)],
        SkillCategory::Cloud => &[
            ("AWS", 85),
            ("Docker", 88),
            ("Kubernetes", 75),
            ("CI/CD", 85),
            ("Monitoring", 82),
        ],
        SkillCategory::Security => &[
            ("Jest", 90),
            ("Cypress", 85),
            ("Unit Testing", 95),
            ("OAuth/JWT", 88),
            ("Security Audits", 80),
            ("OWASP", 78),
        ],
    }
}

// Converts a language's byte share into a skill level
//
// Parameters:
//   language_bytes: bytes written in this language
//   total_bytes: bytes across all languages
//
// Returns: round(60 + percent * 0.35), clamped to 60..=95
//          (60 when total_bytes is 0)
//
// Example:
//   400 of 1000 bytes -> 40% -> 60 + 14 = 74
pub fn calculate_skill_level(language_bytes: u64, total_bytes: u64) -> u8 {
    if total_bytes == 0 {
        return LEVEL_FLOOR as u8;
    }
    let percentage = language_bytes as f64 / total_bytes as f64 * 100.0;
    let level = (LEVEL_FLOOR + percentage * LEVEL_PER_PERCENT).round();
    level.clamp(LEVEL_FLOOR, LEVEL_CEILING) as u8
}

// Groups derived and declared skills into the six tabs
//
// Parameters:
//   languages: aggregated language -> bytes for the whole account
//
// Returns: one SkillGroup per SkillCategory, in SkillCategory::ALL order,
//          each sorted by level (highest first)
pub fn build_skill_categories(languages: &LanguageStats) -> Vec<SkillGroup> {
    let total_bytes: u64 = languages.values().sum();

    // Biggest languages first so merged names (HTML/CSS) keep the larger level
    let mut by_size: Vec<(&String, u64)> = languages
        .iter()
        .map(|(language, &bytes)| (language, bytes))
        .collect();
    by_size.sort_by(|(a_name, a_bytes), (b_name, b_bytes)| {
        b_bytes.cmp(a_bytes).then_with(|| a_name.cmp(b_name))
    });

    let mut groups: Vec<SkillGroup> = SkillCategory::ALL
        .into_iter()
        .map(|category| SkillGroup {
            category,
            title: category.title(),
            skills: Vec::new(),
        })
        .collect();

    for (language, bytes) in by_size {
        let Some((category, display_name)) = language_skill(language) else {
            continue;
        };
        let level = calculate_skill_level(bytes, total_bytes);
        if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
            push_unique(&mut group.skills, display_name, level, true);
        }
    }

    for group in &mut groups {
        for &(name, level) in declared_skills(group.category) {
            push_unique(&mut group.skills, name, level, false);
        }
        // Stable: equal levels keep derived-before-declared order
        group.skills.sort_by(|a, b| b.level.cmp(&a.level));
    }

    groups
}

fn push_unique(skills: &mut Vec<Skill>, name: &str, level: u8, from_github: bool) {
    if skills.iter().any(|skill| skill.name == name) {
        return;
    }
    skills.push(Skill {
        name: name.to_string(),
        level,
        from_github,
    });
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. HTML/CSS merge
//    - Both languages map to one "HTML/CSS" bar. Languages are visited
//      biggest first and the first entry wins, so the bar shows the level
//      of whichever of the two has more bytes
//
// 2. Derived vs declared
//    - Derived skills are pushed first, so a declared skill with the same
//      name ("Docker") is dropped and the bar reflects real code
//
// 3. Sorting
//    - sort_by is stable: at equal levels derived skills stay ahead of
//      declared ones
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(entries: &[(&str, u64)]) -> LanguageStats {
        entries
            .iter()
            .map(|(language, bytes)| (language.to_string(), *bytes))
            .collect()
    }

    fn group(groups: &[SkillGroup], category: SkillCategory) -> &SkillGroup {
        groups.iter().find(|g| g.category == category).unwrap()
    }

    #[test]
    fn test_skill_level_bounds() {
        assert_eq!(calculate_skill_level(0, 1_000), 60);
        assert_eq!(calculate_skill_level(1_000, 1_000), 95);
        assert_eq!(calculate_skill_level(0, 0), 60);
    }

    #[test]
    fn test_skill_level_linear_middle() {
        // 40% -> 60 + 14
        assert_eq!(calculate_skill_level(400, 1_000), 74);
        // 25% -> 68.75 rounds up
        assert_eq!(calculate_skill_level(250, 1_000), 69);
        // 20% -> 67
        assert_eq!(calculate_skill_level(200, 1_000), 67);
        // 1% -> 60.35 rounds down to 60
        assert_eq!(calculate_skill_level(10, 1_000), 60);
    }

    #[test]
    fn test_skill_level_stays_in_range() {
        for bytes in (0..=1_000).step_by(37) {
            let level = calculate_skill_level(bytes, 1_000);
            assert!((60..=95).contains(&level), "{} -> {}", bytes, level);
        }
    }

    #[test]
    fn test_language_skill_mapping() {
        assert_eq!(
            language_skill("HCL"),
            Some((SkillCategory::Cloud, "Terraform"))
        );
        assert_eq!(
            language_skill("PLpgSQL"),
            Some((SkillCategory::Database, "PostgreSQL"))
        );
        assert_eq!(language_skill("COBOL"), None);
    }

    #[test]
    fn test_groups_in_tab_order() {
        let groups = build_skill_categories(&LanguageStats::new());
        let order: Vec<SkillCategory> = groups.iter().map(|g| g.category).collect();
        assert_eq!(order, SkillCategory::ALL.to_vec());
        // Only declared skills without language data
        assert!(groups
            .iter()
            .all(|g| g.skills.iter().all(|s| !s.from_github)));
        assert_eq!(group(&groups, SkillCategory::Mobile).skills.len(), 3);
    }

    #[test]
    fn test_derived_skills_merge_with_declared() {
        let groups = build_skill_categories(&stats(&[
            ("Rust", 600),
            ("HTML", 250),
            ("CSS", 150),
            ("Brainfuck", 0),
        ]));

        let backend = group(&groups, SkillCategory::Backend);
        let rust = backend.skills.iter().find(|s| s.name == "Rust").unwrap();
        assert!(rust.from_github);
        assert_eq!(rust.level, 81);

        // HTML and CSS collapse into one entry, keeping the larger share
        let frontend = group(&groups, SkillCategory::Frontend);
        let web: Vec<&Skill> = frontend
            .skills
            .iter()
            .filter(|s| s.name == "HTML/CSS")
            .collect();
        assert_eq!(web.len(), 1);
        assert_eq!(web[0].level, 69);
    }

    #[test]
    fn test_derived_skill_shadows_declared_name() {
        // "Docker" is both a language mapping and a declared cloud skill
        let groups = build_skill_categories(&stats(&[("Dockerfile", 10), ("Go", 990)]));
        let cloud = group(&groups, SkillCategory::Cloud);
        let docker: Vec<&Skill> = cloud.skills.iter().filter(|s| s.name == "Docker").collect();
        assert_eq!(docker.len(), 1);
        assert!(docker[0].from_github);
        assert_eq!(docker[0].level, 60);
    }

    #[test]
    fn test_skills_sorted_by_level() {
        let groups = build_skill_categories(&stats(&[("TypeScript", 700), ("Python", 300)]));
        for g in &groups {
            assert!(g.skills.windows(2).all(|w| w[0].level >= w[1].level));
        }
    }
}
