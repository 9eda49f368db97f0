// src/mapping/mod.rs
// =============================================================================
// Lookup tables that turn GitHub data into portfolio content.
//
// Submodules:
// - projects: featured repository -> project card (category, stack, image)
// - skills: language bytes -> skill bars, merged with hand-declared skills
//
// Every function here is a pure lookup or computation over its inputs.
// =============================================================================

mod projects;
mod skills;

pub use projects::{
    determine_project_category, extract_tech_stack, filter_projects, language_category,
    project_image, topic_category, Project, ProjectCategory, ProjectFilter,
};
pub use skills::{
    build_skill_categories, calculate_skill_level, declared_skills, language_skill, Skill,
    SkillCategory, SkillGroup,
};
