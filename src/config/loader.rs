use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::parser::FlatConfig;
use crate::config::types::{BggConfig, GithubConfig, NestedConfig, ProjectConfig};
use crate::error::SetupError;
use crate::utils::constants::{
    ENV_FILE_NAME, KEY_BGG_TOKEN, KEY_BGG_USERNAME, KEY_GITHUB_REPO, KEY_TITLE, TOKEN_ENV_VAR,
};

impl NestedConfig {
    /// Build the nested config GameCache consumers expect from the flat
    /// key=value mapping, resolving the BGG token on the way.
    pub fn from_flat(flat: &FlatConfig) -> Result<Self, SetupError> {
        Ok(NestedConfig {
            project: ProjectConfig {
                title: require(flat, KEY_TITLE)?,
            },
            boardgamegeek: BggConfig {
                user_name: require(flat, KEY_BGG_USERNAME)?,
                token: resolve_bgg_token(flat),
            },
            github: GithubConfig {
                repo: require(flat, KEY_GITHUB_REPO)?,
            },
        })
    }
}

fn require(flat: &FlatConfig, key: &'static str) -> Result<String, SetupError> {
    flat.get(key).cloned().ok_or(SetupError::MissingField(key))
}

/// Where a `.env` file may live: the working directory, then the crate root
/// (the compile-time anchor standing in for an ancestor-of-this-module
/// lookup).
pub fn env_file_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(ENV_FILE_NAME),
        Path::new(env!("CARGO_MANIFEST_DIR")).join(ENV_FILE_NAME),
    ]
}

/// Resolve the BGG token: environment variable first, then the candidate
/// `.env` files, then the flat config itself. First hit wins.
pub fn resolve_bgg_token(flat: &FlatConfig) -> Option<String> {
    resolve_token(token_from_env(), &env_file_candidates(), flat)
}

/// Whether setup still has to provision a token: a resolvable one
/// short-circuits the run unless the operator forces a replacement.
pub fn needs_provisioning(flat: &FlatConfig, force: bool) -> bool {
    force || resolve_bgg_token(flat).is_none()
}

pub(crate) fn resolve_token(
    env_value: Option<String>,
    candidates: &[PathBuf],
    flat: &FlatConfig,
) -> Option<String> {
    env_value
        .or_else(|| token_from_files(candidates))
        .or_else(|| flat.get(KEY_BGG_TOKEN).cloned())
}

fn token_from_env() -> Option<String> {
    env::var(TOKEN_ENV_VAR).ok().filter(|v| !v.is_empty())
}

/// Scan candidate dotenv files for a `GAMECACHE_BGG_TOKEN=` line. Within a
/// file the first matching line wins; an empty value falls through to the
/// next candidate file.
fn token_from_files(candidates: &[PathBuf]) -> Option<String> {
    let prefix = format!("{TOKEN_ENV_VAR}=");
    for path in candidates {
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        let found = content
            .lines()
            .map(str::trim)
            .find(|line| line.starts_with(&prefix))
            .map(|line| line[prefix.len()..].trim().to_string());
        if let Some(value) = found {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}
