mod cli;
mod confirm;
mod db;
mod error;
mod fix;
mod profile;
mod report;
mod validation;

use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Cli,
    confirm::confirm_update,
    error::AppResult,
    fix::{FixRequest, run_fix},
    profile::{ProfileUpdate, UserId},
    validation::{validate_input_email, validate_profile_update},
};

// Main
#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut stdout = io::stdout();

    if let Err(err) = run(cli, &mut stdout).await {
        let _ = report::failure(&mut stdout, &err);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries status lines
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli, out: &mut io::Stdout) -> AppResult<()> {
    let request = build_request(&cli)?;
    debug!(email = %request.email, dry_run = request.dry_run, "request built");

    let options = db::connect_options(&cli.connection)?;
    let mut conn = db::connect(&options).await?;

    let ask = cli.confirm;
    run_fix(&mut conn, &request, out, |user_id: UserId, update: &ProfileUpdate| {
        if ask { confirm_update(user_id, update) } else { Ok(true) }
    })
    .await?;

    sqlx::Connection::close(conn).await?;
    Ok(())
}

/// Merges built-in values, the values file and flag overrides, then validates
fn build_request(cli: &Cli) -> AppResult<FixRequest> {
    let mut update = match &cli.values {
        Some(path) => ProfileUpdate::from_file(path)?,
        None => ProfileUpdate::default(),
    };
    if let Some(full_name) = &cli.full_name {
        update.full_name = full_name.clone();
    }
    if let Some(linkedin_url) = &cli.linkedin_url {
        update.linkedin_url = linkedin_url.clone();
    }
    if let Some(bio) = &cli.bio {
        update.bio = bio.clone();
    }
    if let Some(avatar_url) = &cli.avatar_url {
        update.avatar_url = avatar_url.clone();
    }

    validate_input_email(&cli.email)?;
    validate_profile_update(&update)?;

    Ok(FixRequest {
        email: cli.email.clone(),
        update,
        dry_run: cli.dry_run,
        require_profile: cli.require_profile,
    })
}
