// src/main.rs
// =============================================================================
// Entry point of the portfolio-stats CLI.
//
// What happens here:
// 1. Set up logging (stderr, so --json output on stdout stays clean)
// 2. Parse command-line arguments using clap
// 3. Load the account's GitHub data once
// 4. Print the part the subcommand asks for, as a table or JSON
// 5. Exit with 0 on success, 2 on any error
// =============================================================================

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use reqwest::Client;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands, TargetArgs};
use portfolio_stats::config::FetchConfig;
use portfolio_stats::github::{self, FetchError, GitHubData};
use portfolio_stats::mapping::{
    build_skill_categories, filter_projects, Project, ProjectFilter, SkillGroup,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "portfolio_stats=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = cli.connection.to_config()?;
    let client = github::build_client(&config)?;

    match cli.command {
        Commands::Summary { target } => {
            let data = load(&client, &config, &target).await?;
            handle_summary(&data, target.json)
        }
        Commands::Projects { target, category } => {
            let data = load(&client, &config, &target).await?;
            handle_projects(&data, category, target.json)
        }
        Commands::Skills { target } => {
            let data = load(&client, &config, &target).await?;
            handle_skills(&data, target.json)
        }
    }
}

async fn load(client: &Client, config: &FetchConfig, target: &TargetArgs) -> Result<GitHubData> {
    let username = target.username.as_deref().unwrap_or_default();
    info!(username, api = %config.api_base, "loading GitHub data");

    match github::fetch_github_data(client, config, username).await {
        Ok(data) => Ok(data),
        Err(FetchError::MissingUsername) => Err(anyhow!(
            "No username provided: pass one as an argument or set GITHUB_USERNAME"
        )),
        Err(e) => Err(e).with_context(|| format!("Could not load GitHub data for '{}'", username)),
    }
}

// -----------------------------------------------------------------------------
// summary
// -----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct Summary {
    total_repos: usize,
    total_stars: u64,
    languages: Vec<LanguageShare>,
}

#[derive(Debug, Serialize)]
struct LanguageShare {
    language: String,
    bytes: u64,
    percent: f64,
}

impl Summary {
    fn from_data(data: &GitHubData) -> Self {
        let total = data.total_language_bytes();
        let mut languages: Vec<LanguageShare> = data
            .languages
            .iter()
            .map(|(language, &bytes)| LanguageShare {
                language: language.clone(),
                bytes,
                percent: if total == 0 {
                    0.0
                } else {
                    bytes as f64 / total as f64 * 100.0
                },
            })
            .collect();
        languages.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.language.cmp(&b.language)));

        Summary {
            total_repos: data.total_repos,
            total_stars: data.total_stars,
            languages,
        }
    }
}

fn handle_summary(data: &GitHubData, json: bool) -> Result<i32> {
    let summary = Summary::from_data(data);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(0);
    }

    println!("📦 Repositories: {}", summary.total_repos);
    println!("⭐ Stars: {}", summary.total_stars);
    println!();

    if summary.languages.is_empty() {
        println!("No language data available");
        return Ok(0);
    }

    println!("{:<24} {:>14} {:>8}", "LANGUAGE", "BYTES", "SHARE");
    println!("{}", "=".repeat(48));
    for share in &summary.languages {
        println!(
            "{:<24} {:>14} {:>7.1}%",
            share.language, share.bytes, share.percent
        );
    }
    Ok(0)
}

// -----------------------------------------------------------------------------
// projects
// -----------------------------------------------------------------------------

fn handle_projects(data: &GitHubData, filter: ProjectFilter, json: bool) -> Result<i32> {
    let projects: Vec<Project> = data.featured_repos.iter().map(Project::from_featured).collect();
    let shown = filter_projects(&projects, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(0);
    }

    if shown.is_empty() {
        println!("No projects to show");
        return Ok(0);
    }

    println!("{:<32} {:<14} {:>6} {:<40}", "PROJECT", "CATEGORY", "STARS", "TECHNOLOGIES");
    println!("{}", "=".repeat(95));
    for project in &shown {
        println!(
            "{:<32} {:<14} {:>6} {:<40}",
            truncate(&project.title, 31),
            project.category.label(),
            project.stars,
            truncate(&project.technologies.join(", "), 40)
        );
        if project.has_live_demo() {
            println!("   🔗 {}", project.live_url);
        }
    }
    Ok(0)
}

// -----------------------------------------------------------------------------
// skills
// -----------------------------------------------------------------------------

fn handle_skills(data: &GitHubData, json: bool) -> Result<i32> {
    let groups = build_skill_categories(&data.languages);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(0);
    }

    for group in &groups {
        print_skill_group(group);
    }
    Ok(0)
}

fn print_skill_group(group: &SkillGroup) {
    println!("{} ({} skills)", group.title, group.skills.len());
    for skill in &group.skills {
        let filled = usize::from(skill.level) / 5;
        let source = if skill.from_github { " [GitHub]" } else { "" };
        println!(
            "  {:<20} {:<20} {:>3}%{}",
            skill.name,
            "█".repeat(filled),
            skill.level,
            source
        );
    }
    println!();
}

// Cuts a string to at most `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
