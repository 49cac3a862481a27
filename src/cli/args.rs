//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::domain::SharingType;

/// CLI tool for the Parascope Cloud API
#[derive(Parser, Debug)]
#[command(name = "parascope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API token
    #[arg(short, long, global = true, env = "PARASCOPE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL (default: config file, PARASCOPE_BASE_URL, or production)
    #[arg(short, long, global = true, value_hint = ValueHint::Url)]
    pub url: Option<String>,

    /// Config file (default: ~/.config/parascope/parascope.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage workspaces
    Workspaces {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },

    /// Manage scopes
    Scopes {
        #[command(subcommand)]
        command: ScopeCommands,
    },

    /// Manage cards
    Cards {
        #[command(subcommand)]
        command: CardCommands,
    },

    /// GitHub integration
    Github {
        #[command(subcommand)]
        command: GithubCommands,
    },

    /// Manage personal access tokens
    Tokens {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Search and paging flags shared by list commands.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Search query
    #[arg(short, long)]
    pub query: Option<String>,
    /// Page size
    #[arg(short, long, default_value_t = 50)]
    pub limit: u32,
    /// Page offset
    #[arg(short, long)]
    pub offset: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum WorkspaceCommands {
    /// List workspaces
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Get workspace by ID
    Get {
        /// Workspace ID
        id: String,
    },

    /// Create new workspace
    Create {
        /// Workspace name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Sharing type (private/internal/public)
        #[arg(short, long, default_value = "private")]
        sharing: SharingType,
    },

    /// Update workspace
    Update {
        /// Workspace ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New sharing type (private/internal/public)
        #[arg(short, long)]
        sharing: Option<SharingType>,
    },

    /// Delete workspace
    Delete {
        /// Workspace ID
        id: String,
    },

    /// Reorder scopes and move/reorder cards from a JSON plan
    Organize {
        /// Workspace ID
        id: String,
        /// Plan file `{"scopes": [...], "cards": [...]}` ('-' for stdin)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScopeCommands {
    /// List scopes in workspace
    List {
        /// Workspace ID
        workspace_id: String,
    },

    /// Get scope by ID
    Get {
        /// Scope ID
        id: String,
    },

    /// Create new scope
    Create {
        /// Workspace ID
        workspace_id: String,
        /// Scope name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Position within the workspace
        #[arg(short, long)]
        position: Option<i64>,
    },

    /// Update scope
    Update {
        /// Scope ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New position
        #[arg(short, long)]
        position: Option<i64>,
    },

    /// Delete scope
    Delete {
        /// Scope ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// List cards in workspace
    List {
        /// Workspace ID
        workspace_id: String,
        /// Filter by scope ID
        #[arg(short, long)]
        scope: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Get card by ID
    Get {
        /// Card ID
        id: String,
    },

    /// Create new card
    Create {
        /// Workspace ID
        workspace_id: String,
        /// Card name
        name: String,
        /// Card content
        #[arg(short, long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read card content from file ('-' for stdin)
        #[arg(long, value_hint = ValueHint::FilePath)]
        content_file: Option<PathBuf>,
        /// Scope ID
        #[arg(short, long)]
        scope: Option<String>,
        /// Linked GitHub repository ID
        #[arg(short, long)]
        github_repo: Option<String>,
        /// Position within the scope
        #[arg(short, long)]
        position: Option<i64>,
    },

    /// Update card
    Update {
        /// Card ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New content
        #[arg(short, long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read new content from file ('-' for stdin)
        #[arg(long, value_hint = ValueHint::FilePath)]
        content_file: Option<PathBuf>,
        /// Move to scope
        #[arg(short, long)]
        scope: Option<String>,
        /// New position
        #[arg(short, long)]
        position: Option<i64>,
    },

    /// Delete card
    Delete {
        /// Card ID
        id: String,
    },

    /// Run create/update/delete operations in one request (exit 3 if any item fails)
    Bulk {
        /// Workspace ID
        workspace_id: String,
        /// Operations file: JSON array or `{"operations": [...]}` ('-' for stdin)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum GithubCommands {
    /// List GitHub namespaces
    Namespaces,

    /// List GitHub repositories
    Repos {
        /// Filter by namespace ID
        #[arg(short, long)]
        namespace: Option<String>,
        /// Search query
        #[arg(short, long)]
        query: Option<String>,
        /// Page size
        #[arg(short, long)]
        limit: Option<u32>,
        /// Page offset
        #[arg(short, long)]
        offset: Option<u32>,
    },

    /// Sync GitHub namespace
    Sync {
        /// GitHub App installation ID
        installation_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// List all tokens
    List,

    /// Create new token
    Create {
        /// Token name
        name: String,
        /// Expiry (RFC 3339, e.g. 2026-01-01T00:00:00Z)
        #[arg(long)]
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    },

    /// Revoke token
    Revoke {
        /// Token ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Show config path
    Path,

    /// Create config template
    Init,
}
