use std::path::PathBuf;

use clap::{Args, Parser};

use crate::profile::DEFAULT_EMAIL;

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(version, about = "Applies a one-off fix to a user's profile record")]
pub struct Cli {
    /// Email of the user whose profile is updated
    #[arg(long, default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// JSON file with any of: full_name, linkedin_url, bio, avatar_url
    #[arg(long, value_name = "FILE")]
    pub values: Option<PathBuf>,

    /// New display name
    #[arg(long)]
    pub full_name: Option<String>,

    /// New LinkedIn profile URL
    #[arg(long)]
    pub linkedin_url: Option<String>,

    /// New biography
    #[arg(long)]
    pub bio: Option<String>,

    /// New avatar image URL
    #[arg(long)]
    pub avatar_url: Option<String>,

    /// Look the user up and print the planned change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Ask for confirmation before writing
    #[arg(long)]
    pub confirm: bool,

    /// Fail when the update touches no profile row
    #[arg(long)]
    pub require_profile: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Database connection settings
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Full connection URL; takes precedence over the individual settings
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "PGPORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "PGDATABASE", default_value = "railway")]
    pub db_name: String,

    /// Database user
    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,
}
