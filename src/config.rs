//! Credential resolution from flags or a YAML config file.
//!
//! `--config` and `--url`/`--token` are mutually exclusive; any missing or
//! conflicting combination is a fatal configuration error before a request
//! is made.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Shape of the YAML config file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    url: String,
    #[serde(default)]
    token: String,
}

/// Resolved server credentials, immutable for the process lifetime
#[derive(Debug, Clone)]
pub struct Credentials {
    pub url: String,
    pub token: String,
}

impl Credentials {
    /// Resolve credentials from the flag combination
    pub fn resolve(
        config: Option<&Path>,
        url: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self> {
        let url = url.unwrap_or_default();
        let token = token.unwrap_or_default();
        let has_url = !url.is_empty();
        let has_token = !token.is_empty();

        match config {
            Some(_) if has_url || has_token => {
                bail!("Remove --url and --token arguments if --config argument is used")
            }
            Some(path) => Self::from_file(path),
            None if !has_url && !has_token => {
                bail!("Missing required arguments --config or --url and --token")
            }
            None if !has_url || !has_token => {
                bail!("Both --url and --token arguments are required")
            }
            None => Ok(Self {
                url: url.to_string(),
                token: token.to_string(),
            }),
        }
    }

    /// Load credentials from a YAML file with required `url` and `token` keys
    fn from_file(path: &Path) -> Result<Self> {
        debug!("reading config file {}", path.display());

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let file: ConfigFile = serde_yaml::from_str(&contents)
            .with_context(|| format!("{} is not a YAML file", path.display()))?;

        if file.url.is_empty() {
            bail!("config file must contain \"url\" property");
        }
        if file.token.is_empty() {
            bail!("config file must contain \"token\" property");
        }

        Ok(Self {
            url: file.url,
            token: file.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn resolves_url_and_token_flags() {
        let creds = Credentials::resolve(None, Some("http://127.0.0.1:8123"), Some("abc")).unwrap();
        assert_eq!(creds.url, "http://127.0.0.1:8123");
        assert_eq!(creds.token, "abc");
    }

    #[test]
    fn rejects_missing_arguments() {
        let err = Credentials::resolve(None, None, None).unwrap_err();
        assert!(err.to_string().contains("--config or --url and --token"));
    }

    #[test]
    fn rejects_url_without_token() {
        let err = Credentials::resolve(None, Some("http://x"), None).unwrap_err();
        assert!(err.to_string().contains("Both --url and --token"));
    }

    #[test]
    fn rejects_config_combined_with_url() {
        let file = write_config("url: http://x\ntoken: t\n");
        let err = Credentials::resolve(Some(file.path()), Some("http://y"), None).unwrap_err();
        assert!(err.to_string().contains("Remove --url and --token"));
    }

    #[test]
    fn loads_config_file() {
        let file = write_config("url: http://127.0.0.1:8123\ntoken: secret\n");
        let creds = Credentials::resolve(Some(file.path()), None, None).unwrap();
        assert_eq!(creds.url, "http://127.0.0.1:8123");
        assert_eq!(creds.token, "secret");
    }

    #[test]
    fn rejects_config_without_token() {
        let file = write_config("url: http://127.0.0.1:8123\n");
        let err = Credentials::resolve(Some(file.path()), None, None).unwrap_err();
        assert!(err.to_string().contains("\"token\" property"));
    }

    #[test]
    fn rejects_config_without_url() {
        let file = write_config("token: secret\n");
        let err = Credentials::resolve(Some(file.path()), None, None).unwrap_err();
        assert!(err.to_string().contains("\"url\" property"));
    }

    #[test]
    fn rejects_unparseable_config() {
        let file = write_config(": [ not yaml ::\n\t{");
        let err = Credentials::resolve(Some(file.path()), None, None).unwrap_err();
        assert!(err.to_string().contains("is not a YAML file"));
    }

    #[test]
    fn rejects_unreadable_config() {
        let err =
            Credentials::resolve(Some(Path::new("/nonexistent/check_ha.yaml")), None, None)
                .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
