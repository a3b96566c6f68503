//! Locating and loading `config.toml`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, HolmesConfig};

pub const CONFIG_ENV: &str = "HOLMES_CONFIG";
pub const TOKEN_ENV: &str = "HOLMES_GITLAB_TOKEN";

/// Resolve the config path: explicit flag, then `$HOLMES_CONFIG`, then
/// `$HOME/.config/holmes/config.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home = std::env::var("HOME")
        .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("holmes").join("config.toml"))
}

/// Read, apply environment overrides, and validate.
pub fn load_config(path: &Path) -> Result<HolmesConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::ConfigMissing(path.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;

    let mut config: HolmesConfig = toml::from_str(&content)?;
    if let Some(token) = std::env::var(TOKEN_ENV).ok().filter(|token| !token.trim().is_empty()) {
        log::debug!("using GitLab token from {TOKEN_ENV}");
        config.gitlab.token = token;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    #[serial]
    fn explicit_path_wins() {
        unsafe {
            std::env::set_var(CONFIG_ENV, "/from/env.toml");
        }
        let path = resolve_config_path(Some(Path::new("/explicit.toml"))).unwrap();
        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
        assert_eq!(path, PathBuf::from("/explicit.toml"));
    }

    #[test]
    #[serial]
    fn env_path_then_home_default() {
        unsafe {
            std::env::set_var(CONFIG_ENV, "/from/env.toml");
        }
        assert_eq!(resolve_config_path(None).unwrap(), PathBuf::from("/from/env.toml"));

        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
        let home = std::env::var("HOME").unwrap();
        assert_eq!(
            resolve_config_path(None).unwrap(),
            PathBuf::from(home).join(".config/holmes/config.toml")
        );
    }

    #[test]
    #[serial]
    fn missing_file_is_config_missing() {
        let dir = TempDir::new().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigMissing(_)));
    }

    #[test]
    #[serial]
    fn token_env_fills_empty_token() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[gitlab]\nurl = \"https://gitlab.example.com\"\n");

        unsafe {
            std::env::set_var(TOKEN_ENV, "from-env");
        }
        let loaded = load_config(&path);
        unsafe {
            std::env::remove_var(TOKEN_ENV);
        }

        assert_eq!(loaded.unwrap().gitlab.token, "from-env");
    }

    #[test]
    #[serial]
    fn empty_token_without_env_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[gitlab]\nurl = \"https://gitlab.example.com\"\n");
        unsafe {
            std::env::remove_var(TOKEN_ENV);
        }
        assert!(matches!(load_config(&path).unwrap_err(), AppError::InvalidConfig(_)));
    }
}
