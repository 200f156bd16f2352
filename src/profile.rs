use std::{fmt, fs, path::Path};

use serde::Deserialize;

use crate::error::AppResult;

/// Email of the account the fix targets when none is given
pub const DEFAULT_EMAIL: &str = "rmazzi@gmail.com";

const DEFAULT_FULL_NAME: &str = "Ricardo Mazzi";
const DEFAULT_LINKEDIN_URL: &str = "https://www.linkedin.com/in/ricardomazzi/";
const DEFAULT_BIO: &str = "B2C and B2B marketing executive, interactive media strategist, social media marketer, lead generation, front-end web developer, and project manager. Interested in cutting edge technologies and providing practical revenue-generating solutions for small to large businesses. As a Fractional CMO, Ricardo helps healthcare companies with their marketing strategy and execution, bringing years of expertise in delivering measurable results.";
const DEFAULT_AVATAR_URL: &str =
    "https://files.manuscdn.com/user_upload_by_module/session_file/310519663277157978/bgWDanBYHZbslGUP.png";

/// Number of avatar URL characters shown in the verification line
pub const AVATAR_DISPLAY_CHARS: usize = 50;

/// Primary key of a row in `users`, referenced by `profiles.user_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four profile fields written by the fix
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileUpdate {
    /// Display name (`profiles.full_name`)
    pub full_name: String,
    /// LinkedIn profile URL (`profiles.linkedin_url`)
    pub linkedin_url: String,
    /// Free-form biography (`profiles.bio`)
    pub bio: String,
    /// Avatar image URL (`profiles.avatar_url`)
    pub avatar_url: String,
}

impl Default for ProfileUpdate {
    fn default() -> Self {
        Self {
            full_name: DEFAULT_FULL_NAME.to_string(),
            linkedin_url: DEFAULT_LINKEDIN_URL.to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

impl ProfileUpdate {
    /// Loads field values from a JSON object; absent fields keep their defaults
    ///
    /// # Arguments
    /// * `path` - Path to the JSON values file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Fields re-read from `profiles` after the update. Columns are nullable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub full_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileSnapshot {
    /// Whether the snapshot holds exactly the displayed fields of `update`
    pub fn matches(&self, update: &ProfileUpdate) -> bool {
        self.full_name.as_deref() == Some(update.full_name.as_str())
            && self.linkedin_url.as_deref() == Some(update.linkedin_url.as_str())
            && self.avatar_url.as_deref() == Some(update.avatar_url.as_str())
    }
}

/// Cuts `value` to at most `max_chars` characters without splitting a code point
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}
