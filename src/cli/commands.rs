//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// GitHub environments and search from the command line
#[derive(Parser, Debug)]
#[command(name = "ghkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub host (default github.com, or GH_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage deployment environments
    Env(EnvArgs),

    /// Search GitHub
    #[command(subcommand)]
    Search(SearchCommands),
}

/// Arguments shared by every `env` subcommand
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Repository as [HOST/]OWNER/REPO (default GH_REPO)
    #[arg(short = 'R', long)]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: EnvCommands,
}

/// `env` subcommands
#[derive(Subcommand, Debug)]
pub enum EnvCommands {
    /// Create or update an environment
    Create {
        /// Environment name
        name: String,

        /// Variables as KEY=VALUE,KEY2=VALUE2
        #[arg(long)]
        variables: Option<String>,
    },

    /// Delete an environment
    Delete {
        /// Environment name
        name: String,
    },

    /// List environments
    List {
        #[arg(short, long, default_value = "pretty")]
        format: ListFormat,
    },

    /// Export an environment with its secrets
    Export {
        /// Environment name
        name: String,

        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },

    /// Run a command with the environment's secrets and variables set
    Run {
        /// Environment name
        name: String,

        /// Command and its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// `search` subcommands
#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Search repositories
    Repos(SearchReposArgs),
}

/// `search repos` arguments. Values are validated when applied to a query,
/// not by clap, so the user sees the validator's message.
#[derive(Args, Debug, Default)]
pub struct SearchReposArgs {
    /// Search keywords
    pub keywords: Vec<String>,

    /// Print the search URL for the browser instead of searching
    #[arg(short, long)]
    pub web: bool,

    /// Fetch every page of results
    #[arg(long)]
    pub paginate: bool,

    /// Skip all qualifier flags
    #[arg(long)]
    pub raw: bool,

    #[arg(short, long, default_value = "pretty")]
    pub format: ListFormat,

    /// Order of results: asc or desc
    #[arg(long)]
    pub order: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<String>,

    /// Results per page (max 100)
    #[arg(long)]
    pub per_page: Option<String>,

    /// Sort by stars, forks, help-wanted-issues or updated
    #[arg(long)]
    pub sort: Option<String>,

    /// Include archived repositories: true or false
    #[arg(long)]
    pub archived: Option<String>,

    /// Creation date, e.g. >2020-01-01
    #[arg(long)]
    pub created: Option<String>,

    /// Follower count range
    #[arg(long)]
    pub followers: Option<String>,

    /// Include forks: true or only
    #[arg(long)]
    pub fork: Option<String>,

    /// Fork count range
    #[arg(long)]
    pub forks: Option<String>,

    /// Good-first-issue count range
    #[arg(long)]
    pub good_first_issues: Option<String>,

    /// Help-wanted-issue count range
    #[arg(long)]
    pub help_wanted_issues: Option<String>,

    /// Fields to match: name, description or readme
    #[arg(long = "in")]
    pub in_fields: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub license: Option<String>,

    /// Mirror repositories: true or false
    #[arg(long)]
    pub mirror: Option<String>,

    #[arg(long)]
    pub org: Option<String>,

    /// Last push date
    #[arg(long)]
    pub pushed: Option<String>,

    /// Restrict to a repository
    #[arg(long)]
    pub repo: Option<String>,

    /// Size range in kilobytes
    #[arg(long)]
    pub size: Option<String>,

    /// Star count range
    #[arg(long)]
    pub stars: Option<String>,

    #[arg(long)]
    pub topic: Option<String>,

    /// Topic count range
    #[arg(long)]
    pub topics: Option<String>,

    #[arg(long)]
    pub user: Option<String>,

    /// Visibility: public or private
    #[arg(long = "is")]
    pub visibility: Option<String>,
}

impl SearchReposArgs {
    /// Parameter flags as `(name, value)`
    pub fn parameters(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("order", self.order.as_deref()),
            ("page", self.page.as_deref()),
            ("per_page", self.per_page.as_deref()),
            ("sort", self.sort.as_deref()),
        ]
    }

    /// Qualifier flags as `(qualifier name, value)`
    pub fn qualifiers(&self) -> [(&'static str, Option<&str>); 20] {
        [
            ("archived", self.archived.as_deref()),
            ("created", self.created.as_deref()),
            ("followers", self.followers.as_deref()),
            ("fork", self.fork.as_deref()),
            ("forks", self.forks.as_deref()),
            ("good_first_issues", self.good_first_issues.as_deref()),
            ("help_wanted_issues", self.help_wanted_issues.as_deref()),
            ("in", self.in_fields.as_deref()),
            ("language", self.language.as_deref()),
            ("license", self.license.as_deref()),
            ("mirror", self.mirror.as_deref()),
            ("org", self.org.as_deref()),
            ("pushed", self.pushed.as_deref()),
            ("repo", self.repo.as_deref()),
            ("size", self.size.as_deref()),
            ("stars", self.stars.as_deref()),
            ("topic", self.topic.as_deref()),
            ("topics", self.topics.as_deref()),
            ("user", self.user.as_deref()),
            ("visibility", self.visibility.as_deref()),
        ]
    }
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListFormat {
    /// Human-readable table
    #[default]
    Pretty,
    /// Indented JSON
    Json,
}

/// Output format for `env export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Indented JSON
    Json,
    /// KEY=VALUE lines
    Env,
}
