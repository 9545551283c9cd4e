//! CLI runner - executes commands

use crate::cli::commands::{
    Cli, Commands, EnvArgs, EnvCommands, ExportFormat, ListFormat, SearchCommands,
    SearchReposArgs,
};
use crate::config::Settings;
use crate::environments::{parse_variables, EnvironmentsClient};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, Transport};
use crate::output::{environments_table, repositories_table, to_json_pretty, EnvironmentExport};
use crate::process::{child_environment, run_command};
use crate::search::{Query, Repository, Searcher};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, returning the process exit code
    pub async fn run(&self) -> Result<i32> {
        let settings = self.settings()?;
        match &self.cli.command {
            Commands::Env(args) => self.env(settings, args).await,
            Commands::Search(SearchCommands::Repos(args)) => {
                self.search_repos(&settings, args).await?;
                Ok(0)
            }
        }
    }

    /// Defaults, then the config file, then the environment, then flags
    fn settings(&self) -> Result<Settings> {
        let settings = match &self.cli.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("could not load {}", path.display()))?,
            None => Settings::default(),
        };
        let mut settings = settings.with_env();
        if let Some(host) = &self.cli.host {
            settings.host.clone_from(host);
        }
        if settings.token.is_none() {
            debug!("No API token configured; requests are unauthenticated");
        }
        Ok(settings)
    }

    // ========================================================================
    // env
    // ========================================================================

    async fn env(&self, mut settings: Settings, args: &EnvArgs) -> Result<i32> {
        if let Some(repo) = &args.repo {
            settings.repo = Some(repo.clone());
        }
        let repo = settings.repo()?;
        let host = settings.host_for(&repo);
        let http = HttpClient::with_config(settings.http_client_config())
            .context("could not create http client")?;
        let client = EnvironmentsClient::new(http, settings.rest_prefix(&host), repo)
            .with_pagination(settings.pagination());

        match &args.command {
            EnvCommands::Create { name, variables } => {
                let variables = match variables {
                    Some(input) => parse_variables(input)?,
                    None => BTreeMap::new(),
                };
                client.create_or_update(name, &variables).await?;
                Ok(0)
            }
            EnvCommands::Delete { name } => {
                client.delete(name).await?;
                Ok(0)
            }
            EnvCommands::List { format } => {
                let environments = client.list().await?;
                match format {
                    ListFormat::Pretty => print!("{}", environments_table(&environments)),
                    ListFormat::Json => println!("{}", to_json_pretty(&environments)?),
                }
                Ok(0)
            }
            EnvCommands::Export { name, format } => {
                let secrets = match client.secrets(name).await {
                    Ok(secrets) => secrets,
                    Err(e) => {
                        warn!("Failed to get secrets for {}: {}", name, e);
                        Vec::new()
                    }
                };
                let environment = client.get(name).await.context("failed to get env")?;
                let export = EnvironmentExport::new(environment, secrets);
                match format {
                    ExportFormat::Json => println!("{}", to_json_pretty(&export)?),
                    ExportFormat::Env => print!("{}", export.to_env_file()),
                }
                Ok(0)
            }
            EnvCommands::Run { name, command } => {
                let secrets = client.secrets(name).await?;
                let environment = client.get(name).await?;
                let env = child_environment(std::env::vars_os(), &secrets, &environment.variables);
                run_command(command, &env).await
            }
        }
    }

    // ========================================================================
    // search
    // ========================================================================

    async fn search_repos(&self, settings: &Settings, args: &SearchReposArgs) -> Result<()> {
        let query = build_query(args)?;
        let http = HttpClient::with_config(settings.http_client_config())
            .context("could not create http client")?;
        let searcher = searcher_for(settings, http);

        if args.web {
            println!("{}", searcher.browse_url(&query));
            return Ok(());
        }

        let results = searcher.search::<Repository>(&query).await?;
        if results.incomplete_results {
            warn!("Search results are incomplete");
        }
        match args.format {
            ListFormat::Pretty => print!("{}", repositories_table(&results)),
            ListFormat::Json => println!("{}", to_json_pretty(&results)?),
        }
        Ok(())
    }
}

/// Searcher for the configured host. Requests go to `https://api.{host}`
/// unless `api_url` is set explicitly.
pub(crate) fn searcher_for<T: Transport>(settings: &Settings, transport: T) -> Searcher<T> {
    let searcher =
        Searcher::new(settings.host.clone(), transport).with_pagination(settings.pagination());
    match &settings.api_url {
        Some(api_url) => searcher.with_api_base(api_url.as_str()),
        None => searcher,
    }
}

/// Build a repository query from `search repos` flags, validating every
/// value given
pub fn build_query(args: &SearchReposArgs) -> Result<Query> {
    let mut query = Query::repositories().with_keywords(args.keywords.iter().cloned());
    query.paginate = args.paginate;
    query.raw = args.raw;

    for (name, value) in args.parameters() {
        let Some(value) = value else { continue };
        let parameter = match name {
            "order" => &mut query.parameters.order,
            "page" => &mut query.parameters.page,
            "per_page" => &mut query.parameters.per_page,
            "sort" => &mut query.parameters.sort,
            _ => return Err(Error::invalid_argument(name, "unknown parameter")),
        };
        parameter.set(value)?;
    }

    for (name, value) in args.qualifiers() {
        let Some(value) = value else { continue };
        query
            .qualifiers
            .get_mut(name)
            .ok_or_else(|| Error::invalid_argument(name, "unknown qualifier"))?
            .set(value)?;
    }

    Ok(query)
}
