use std::{env, path::PathBuf};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORAGE_ROOT: &str = "storage/pdfs";
const DEFAULT_MAX_UPLOAD_MB: usize = 32;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub storage_root: PathBuf,
    pub max_upload_bytes: usize,
    pub seed_access_codes: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            storage_root: PathBuf::from(DEFAULT_STORAGE_ROOT),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB << 20,
            seed_access_codes: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got `{value}`"))?,
            None => defaults.port,
        };

        let storage_root = lookup("STORAGE_ROOT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_root);

        let max_upload_bytes = match lookup("MAX_UPLOAD_MB") {
            Some(value) => {
                let megabytes: usize = value
                    .trim()
                    .parse()
                    .with_context(|| format!("MAX_UPLOAD_MB must be an integer, got `{value}`"))?;
                megabytes << 20
            }
            None => defaults.max_upload_bytes,
        };

        let seed_access_codes = lookup("SEED_ACCESS_CODES")
            .map(|value| parse_code_list(&value))
            .unwrap_or_default();

        Ok(Self {
            port,
            storage_root,
            max_upload_bytes,
            seed_access_codes,
        })
    }
}

fn parse_code_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
