//! Command dispatch: one command, one client call, one printed result

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{
    CardCommands, Cli, Commands, ConfigCommands, GithubCommands, PageArgs, ScopeCommands,
    TokenCommands, WorkspaceCommands,
};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{
    failed_count, ApiToken, BulkCardOperation, CardListParams, CreateCardRequest,
    CreateScopeRequest, CreateWorkspaceRequest, ListParams, OrganizeWorkspaceRequest,
    RepoListParams, ScopeChanges, UpdateCardRequest, UpdateScopeRequest, UpdateWorkspaceRequest,
    WorkspaceChanges,
};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{ClientConfig, InfraError};

pub async fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Workspaces { command } => workspaces(&connect(cli)?, command).await,
        Commands::Scopes { command } => scopes(&connect(cli)?, command).await,
        Commands::Cards { command } => cards(&connect(cli)?, command).await,
        Commands::Github { command } => github(&connect(cli)?, command).await,
        Commands::Tokens { command } => tokens(&connect(cli)?, command).await,
        Commands::Config { command } => config(cli, command),
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
    }
}

/// Flag value (clap already falls back to `PARASCOPE_TOKEN`) or a fatal error.
pub fn resolve_token(flag: Option<&str>) -> CliResult<ApiToken> {
    let raw = flag
        .filter(|t| !t.trim().is_empty())
        .ok_or(CliError::MissingToken)?;
    Ok(ApiToken::new(raw)?)
}

/// Effective settings: config file, env, then `--url`.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Settings::load_from(Some(path.as_path()))?
        }
        None => Settings::load()?,
    };
    Ok(settings.with_url_override(cli.url.as_deref())?)
}

/// Resolve the token first so a missing token fails before any network call.
pub fn connect(cli: &Cli) -> CliResult<ServiceContainer> {
    let token = resolve_token(cli.token.as_deref())?;
    let settings = load_settings(cli)?;
    debug!("connect: base_url={}", settings.base_url);
    let config = ClientConfig::new(token).with_base_url(settings.base_url);
    Ok(ServiceContainer::new(config)?)
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| InfraError::io("read stdin", e))?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|e| InfraError::io(format!("read {}", path.display()), e).into())
}

fn resolve_content(
    content: &Option<String>,
    content_file: &Option<PathBuf>,
) -> CliResult<Option<String>> {
    match (content, content_file) {
        (Some(text), _) => Ok(Some(text.clone())),
        (None, Some(path)) => read_input(path).map(Some),
        (None, None) => Ok(None),
    }
}

fn list_params(page: &PageArgs) -> ListParams {
    ListParams {
        q: page.query.clone(),
        limit: Some(page.limit),
        offset: page.offset,
    }
}

#[instrument(skip(svc))]
async fn workspaces(svc: &ServiceContainer, command: &WorkspaceCommands) -> CliResult<()> {
    match command {
        WorkspaceCommands::List { page } => {
            output::json(&svc.workspaces.list(&list_params(page)).await?)?;
        }
        WorkspaceCommands::Get { id } => {
            output::json(&svc.workspaces.get(id).await?)?;
        }
        WorkspaceCommands::Create {
            name,
            description,
            sharing,
        } => {
            let mut request = CreateWorkspaceRequest::new(name).sharing_type(*sharing);
            if let Some(description) = description {
                request = request.description(description);
            }
            output::json(&svc.workspaces.create(&request).await?)?;
        }
        WorkspaceCommands::Update {
            id,
            name,
            description,
            sharing,
        } => {
            let request = UpdateWorkspaceRequest {
                workspace: WorkspaceChanges {
                    name: name.clone(),
                    description: description.clone(),
                    sharing_type: *sharing,
                },
            };
            if request == UpdateWorkspaceRequest::default() {
                return Err(CliError::Usage("nothing to update".into()));
            }
            output::json(&svc.workspaces.update(id, &request).await?)?;
        }
        WorkspaceCommands::Delete { id } => {
            svc.workspaces.delete(id).await?;
            output::success(&format!("Workspace {id} deleted successfully"));
        }
        WorkspaceCommands::Organize { id, file } => {
            let plan = OrganizeWorkspaceRequest::from_json(&read_input(file)?)?;
            output::json(&svc.workspaces.organize(id, &plan).await?)?;
        }
    }
    Ok(())
}

#[instrument(skip(svc))]
async fn scopes(svc: &ServiceContainer, command: &ScopeCommands) -> CliResult<()> {
    match command {
        ScopeCommands::List { workspace_id } => {
            output::json(&svc.scopes.list(workspace_id).await?)?;
        }
        ScopeCommands::Get { id } => {
            output::json(&svc.scopes.get(id).await?)?;
        }
        ScopeCommands::Create {
            workspace_id,
            name,
            description,
            position,
        } => {
            let mut request = CreateScopeRequest::new(name);
            request.scope.description = description.clone();
            request.scope.position = *position;
            output::json(&svc.scopes.create(workspace_id, &request).await?)?;
        }
        ScopeCommands::Update {
            id,
            name,
            description,
            position,
        } => {
            let request = UpdateScopeRequest {
                scope: ScopeChanges {
                    name: name.clone(),
                    description: description.clone(),
                    position: *position,
                },
            };
            if request == UpdateScopeRequest::default() {
                return Err(CliError::Usage("nothing to update".into()));
            }
            output::json(&svc.scopes.update(id, &request).await?)?;
        }
        ScopeCommands::Delete { id } => {
            svc.scopes.delete(id).await?;
            output::success(&format!("Scope {id} deleted successfully"));
        }
    }
    Ok(())
}

#[instrument(skip(svc))]
async fn cards(svc: &ServiceContainer, command: &CardCommands) -> CliResult<()> {
    match command {
        CardCommands::List {
            workspace_id,
            scope,
            page,
        } => {
            let params = CardListParams {
                scope_id: scope.clone(),
                q: page.query.clone(),
                limit: Some(page.limit),
                offset: page.offset,
            };
            output::json(&svc.cards.list(workspace_id, &params).await?)?;
        }
        CardCommands::Get { id } => {
            output::json(&svc.cards.get(id).await?)?;
        }
        CardCommands::Create {
            workspace_id,
            name,
            content,
            content_file,
            scope,
            github_repo,
            position,
        } => {
            let request = CreateCardRequest {
                name: name.clone(),
                content: resolve_content(content, content_file)?,
                scope_id: scope.clone(),
                github_repo_id: github_repo.clone(),
                position: *position,
            };
            output::json(&svc.cards.create(workspace_id, &request).await?)?;
        }
        CardCommands::Update {
            id,
            name,
            content,
            content_file,
            scope,
            position,
        } => {
            let request = UpdateCardRequest {
                name: name.clone(),
                content: resolve_content(content, content_file)?,
                scope_id: scope.clone(),
                position: *position,
            };
            if request.is_empty() {
                return Err(CliError::Usage("nothing to update".into()));
            }
            output::json(&svc.cards.update(id, &request).await?)?;
        }
        CardCommands::Delete { id } => {
            svc.cards.delete(id).await?;
            output::success(&format!("Card {id} deleted successfully"));
        }
        CardCommands::Bulk { workspace_id, file } => {
            let operations = BulkCardOperation::list_from_json(&read_input(file)?)?;
            let results = svc.cards.bulk(workspace_id, &operations).await?;
            output::json(&results)?;

            let failed = failed_count(&results);
            if failed > 0 {
                return Err(CliError::PartialBulkFailure {
                    failed,
                    total: results.len(),
                });
            }
        }
    }
    Ok(())
}

#[instrument(skip(svc))]
async fn github(svc: &ServiceContainer, command: &GithubCommands) -> CliResult<()> {
    match command {
        GithubCommands::Namespaces => {
            output::json(&svc.github.namespaces().await?)?;
        }
        GithubCommands::Repos {
            namespace,
            query,
            limit,
            offset,
        } => {
            let params = RepoListParams {
                namespace_id: namespace.clone(),
                q: query.clone(),
                limit: *limit,
                offset: *offset,
            };
            output::json(&svc.github.repos(&params).await?)?;
        }
        GithubCommands::Sync { installation_id } => {
            output::json(&svc.github.sync(installation_id).await?)?;
        }
    }
    Ok(())
}

#[instrument(skip(svc))]
async fn tokens(svc: &ServiceContainer, command: &TokenCommands) -> CliResult<()> {
    match command {
        TokenCommands::List => {
            output::json(&svc.tokens.list().await?)?;
        }
        TokenCommands::Create { name, expires_at } => {
            let token = svc.tokens.create(name, *expires_at).await?;
            output::json(&token)?;
            output::warning("Save this token securely. It will not be shown again!");
        }
        TokenCommands::Revoke { id } => {
            svc.tokens.revoke(id).await?;
            output::success(&format!("Token {id} revoked successfully"));
        }
    }
    Ok(())
}

fn config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            print!("{}", settings.to_toml()?);
        }
        ConfigCommands::Path => match config_path(cli) {
            Some(path) => println!("{}", path.display()),
            None => return Err(CliError::Usage("cannot determine config directory".into())),
        },
        ConfigCommands::Init => {
            let path = config_path(cli)
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
        }
    }
    Ok(())
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(global_config_path)
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
