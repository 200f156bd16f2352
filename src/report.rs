use std::io::Write;

use colored::Colorize;

use crate::{
    error::AppError,
    profile::{AVATAR_DISPLAY_CHARS, ProfileSnapshot, ProfileUpdate, UserId, truncate_chars},
};

const MISSING_VALUE: &str = "<none>";
/// Number of bio characters shown in the planned update
const BIO_PREVIEW_CHARS: usize = 80;

// Status line helpers. Every line starts with a glyph.

pub fn lookup<W: Write>(out: &mut W, email: &str) -> std::io::Result<()> {
    writeln!(out, "🔍 {} {}", "Looking for user with email:".blue(), email)
}

pub fn success<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    writeln!(out, "✅ {}", message.green())
}

pub fn warning<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    writeln!(out, "⚠️ {}", message.yellow())
}

/// Prints the final error line; not-found keeps its own wording
pub fn failure<W: Write>(out: &mut W, err: &AppError) -> std::io::Result<()> {
    match err {
        AppError::UserNotFound(_) => writeln!(out, "❌ {}", err.to_string().red()),
        _ => writeln!(out, "❌ {} {}", "Error:".red(), err),
    }
}

/// Prints the values about to be written
pub fn plan<W: Write>(out: &mut W, user_id: UserId, update: &ProfileUpdate) -> std::io::Result<()> {
    writeln!(out, "📝 {} {}", "Planned update for user ID".blue(), user_id)?;
    writeln!(out, "   full_name    = {}", update.full_name)?;
    writeln!(out, "   linkedin_url = {}", update.linkedin_url)?;
    writeln!(out, "   bio          = {}...", truncate_chars(&update.bio, BIO_PREVIEW_CHARS))?;
    writeln!(out, "   avatar_url   = {}", update.avatar_url)
}

/// Builds the verification summary; the avatar URL is cut for display
pub fn verified_message(snapshot: &ProfileSnapshot) -> String {
    let avatar = snapshot
        .avatar_url
        .as_deref()
        .map(|url| truncate_chars(url, AVATAR_DISPLAY_CHARS))
        .unwrap_or(MISSING_VALUE);
    format!(
        "Verified: Name={}, LinkedIn={}, Avatar={}...",
        snapshot.full_name.as_deref().unwrap_or(MISSING_VALUE),
        snapshot.linkedin_url.as_deref().unwrap_or(MISSING_VALUE),
        avatar
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    fn test_verified_message_truncates_avatar() {
        let update = ProfileUpdate::default();
        let snapshot = ProfileSnapshot {
            full_name: Some(update.full_name.clone()),
            linkedin_url: Some(update.linkedin_url.clone()),
            avatar_url: Some(update.avatar_url.clone()),
        };

        let message = verified_message(&snapshot);

        assert_eq!(
            message,
            format!(
                "Verified: Name=Ricardo Mazzi, LinkedIn={}, Avatar={}...",
                update.linkedin_url,
                &update.avatar_url[..AVATAR_DISPLAY_CHARS]
            )
        );
    }

    #[rstest]
    fn test_verified_message_shows_missing_values() {
        let snapshot = ProfileSnapshot { full_name: None, linkedin_url: None, avatar_url: None };
        assert_eq!(
            verified_message(&snapshot),
            "Verified: Name=<none>, LinkedIn=<none>, Avatar=<none>..."
        );
    }

    #[rstest]
    fn test_failure_line_for_not_found() {
        let line = render(|out| failure(out, &AppError::UserNotFound("a@b.io".to_string())));
        assert!(line.starts_with("❌"));
        assert!(line.contains("User not found with email: a@b.io"));
        assert!(!line.contains("Error:"));
    }

    #[rstest]
    fn test_failure_line_for_other_errors() {
        let line = render(|out| failure(out, &AppError::Validation("bad".to_string())));
        assert!(line.starts_with("❌"));
        assert!(line.contains("Error:"));
        assert!(line.contains("validation error: bad"));
    }

    #[rstest]
    fn test_plan_lists_all_fields() {
        let update = ProfileUpdate::default();
        let text = render(|out| plan(out, UserId(7), &update));
        assert!(text.contains("7"));
        assert!(text.contains(&update.full_name));
        assert!(text.contains(&update.linkedin_url));
        assert!(text.contains(&update.avatar_url));
        assert!(text.contains(&format!("bio          = {}...", &update.bio[..BIO_PREVIEW_CHARS])));
        assert!(!text.contains(&update.bio));
    }
}
