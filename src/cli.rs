// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// portfolio-stats [OPTIONS] <COMMAND> [USERNAME] [--json]
//
// Commands:
//   summary   repository count, total stars, language bytes
//   projects  featured projects as cards (optionally one category)
//   skills    skill bars grouped into tabs
//
// Connection options are global and can also come from the environment.
// =============================================================================

use clap::{Args, Parser, Subcommand};

use portfolio_stats::config::{
    ConfigError, FetchConfig, DEFAULT_API_URL, DEFAULT_LANGUAGE_REPO_LIMIT, DEFAULT_PER_PAGE,
    DEFAULT_TIMEOUT_SECS,
};
use portfolio_stats::mapping::ProjectFilter;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-stats",
    version,
    about = "Turns a GitHub account into portfolio data",
    long_about = "portfolio-stats reads an account's public GitHub repositories and derives \
                  what a portfolio page shows: headline stats, featured projects and skill levels."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show repository count, total stars and language bytes
    ///
    /// Example: portfolio-stats summary octocat
    Summary {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show the featured projects
    ///
    /// Example: portfolio-stats projects octocat --category backend
    Projects {
        #[command(flatten)]
        target: TargetArgs,

        /// Only show one category: all, fullstack, frontend, backend, mobile, devops, data
        #[arg(long, default_value = "all")]
        category: ProjectFilter,
    },

    /// Show skill levels grouped by category
    ///
    /// Example: portfolio-stats skills octocat --json
    Skills {
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Which account to read and how to print it
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// GitHub username
    #[arg(env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}

/// How to reach the GitHub API
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Repositories requested in the listing (1-100)
    #[arg(long, global = true, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// How many repositories feed the language totals
    #[arg(long, global = true, default_value_t = DEFAULT_LANGUAGE_REPO_LIMIT)]
    pub language_limit: usize,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ConnectionArgs {
    pub fn to_config(&self) -> Result<FetchConfig, ConfigError> {
        FetchConfig::new(
            &self.api_url,
            self.per_page,
            self.language_limit,
            self.timeout_secs,
        )
    }
}
