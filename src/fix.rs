use std::io::Write;

use sqlx::PgConnection;
use tracing::{info, warn};

use crate::{
    db::{fetch_profile, find_user_id, update_profile},
    error::{AppError, AppResult},
    profile::{ProfileSnapshot, ProfileUpdate, UserId},
    report,
};

/// What to write and to whom
#[derive(Debug, Clone)]
pub struct FixRequest {
    pub email: String,
    pub update: ProfileUpdate,
    pub dry_run: bool,
    pub require_profile: bool,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// Lookup succeeded, nothing was written
    DryRun { user_id: UserId },
    /// Update statement ran; `snapshot` is the verification read
    Applied {
        user_id: UserId,
        rows_affected: u64,
        snapshot: Option<ProfileSnapshot>,
    },
}

/// Runs lookup, update and verification, writing status lines to `out`.
///
/// # Arguments
/// * `conn` - Open database connection
/// * `request` - Target email and values
/// * `out` - Sink for status lines
/// * `confirm` - Called with the resolved user id before writing; `false` aborts
pub async fn run_fix<W, F>(
    conn: &mut PgConnection,
    request: &FixRequest,
    out: &mut W,
    confirm: F,
) -> AppResult<FixOutcome>
where
    W: Write,
    F: FnOnce(UserId, &ProfileUpdate) -> AppResult<bool>,
{
    report::lookup(out, &request.email)?;
    let user_id = find_user_id(conn, &request.email)
        .await?
        .ok_or_else(|| AppError::UserNotFound(request.email.clone()))?;
    report::success(out, &format!("Found user ID: {}", user_id))?;

    if request.dry_run {
        report::plan(out, user_id, &request.update)?;
        report::success(out, "Dry run, nothing was written")?;
        return Ok(FixOutcome::DryRun { user_id });
    }

    if !confirm(user_id, &request.update)? {
        return Err(AppError::Aborted);
    }

    let rows_affected = update_profile(conn, user_id, &request.update).await?;
    if rows_affected == 0 {
        warn!(user_id = user_id.0, "update matched no profile row");
        if request.require_profile {
            return Err(AppError::ProfileNotFound(user_id));
        }
    }
    report::success(out, &format!("{} profile updated successfully!", request.update.full_name))?;
    if rows_affected != 1 {
        report::warning(out, &format!("{} profile rows changed for user ID {}", rows_affected, user_id))?;
    }

    let snapshot = fetch_profile(conn, user_id).await?;
    match &snapshot {
        Some(snapshot) => {
            report::success(out, &report::verified_message(snapshot))?;
            if !snapshot.matches(&request.update) {
                warn!(user_id = user_id.0, "re-read profile differs from written values");
                report::warning(out, "Stored values differ from the values written")?;
            }
        }
        None => report::warning(out, &format!("No profile data found for user ID {}", user_id))?,
    }
    info!(user_id = user_id.0, rows_affected, "profile fix finished");

    Ok(FixOutcome::Applied { user_id, rows_affected, snapshot })
}
