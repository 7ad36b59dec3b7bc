//! Saved connection profile.
//!
//! The profile remembers the NAS host and account name between runs. The
//! password is never written to disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored profile data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

/// Get the profile file path.
pub fn profile_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "syno").context("Could not determine config directory")?;
    Ok(dirs.config_dir().join("profile.json"))
}

/// Save the profile to disk.
pub fn save(profile: &Profile) -> Result<PathBuf> {
    let path = profile_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    fs::write(&path, &json).context("Failed to write profile file")?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(path)
}

/// Load the profile, if one was saved.
pub fn load() -> Result<Option<Profile>> {
    let path = profile_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read profile file")?;
    let profile = serde_json::from_str(&json).context("Invalid profile file")?;
    Ok(Some(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_optional_on_disk() {
        let profile: Profile = serde_json::from_str(r#"{"host":"https://nas.local"}"#).unwrap();
        assert_eq!(profile.account, None);

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("account"));
    }

    #[test]
    fn profile_never_carries_a_password() {
        let profile = Profile {
            host: "https://nas.local".into(),
            account: Some("admin".into()),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("passw"));
    }
}
