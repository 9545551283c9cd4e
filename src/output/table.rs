//! Tables for the `pretty` output format

use crate::environments::Environment;
use crate::search::{Repository, SearchResults};
use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Longest description shown in repository tables
const MAX_DESCRIPTION: usize = 60;

#[derive(Debug, Clone, Tabled)]
struct EnvironmentRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Updated")]
    updated: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&Environment> for EnvironmentRow {
    fn from(env: &Environment) -> Self {
        Self {
            name: env.name.clone(),
            id: env.id,
            updated: format_time(env.updated_at.as_ref()),
            url: env.html_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
struct RepositoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Stars")]
    stars: u64,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Repository> for RepositoryRow {
    fn from(repo: &Repository) -> Self {
        let first_line = repo
            .description
            .as_deref()
            .and_then(|d| d.lines().next())
            .unwrap_or_default();
        Self {
            name: repo.full_name.clone(),
            description: truncate(first_line, MAX_DESCRIPTION),
            language: repo.language.clone().unwrap_or_default(),
            stars: repo.stargazers_count,
            updated: format_time(repo.updated_at.as_ref()),
        }
    }
}

fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{table}\n")
}

/// Environments as a table
pub fn environments_table(environments: &[Environment]) -> String {
    if environments.is_empty() {
        return "No environments\n".to_string();
    }
    render(environments.iter().map(EnvironmentRow::from).collect())
}

/// Repository search results with a summary line
pub fn repositories_table(results: &SearchResults<Repository>) -> String {
    let mut out = format!(
        "Showing {} of {} repositories\n",
        results.items.len(),
        results.total_count
    );
    if !results.items.is_empty() {
        out.push('\n');
        out.push_str(&render(
            results.items.iter().map(RepositoryRow::from).collect(),
        ));
    }
    out
}
