use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::SetupError;
use crate::utils::constants::{ENV_FILE_NAME, TOKEN_ENV_VAR};

/// Write `token` to the `.env` file next to the config file.
///
/// An existing `GAMECACHE_BGG_TOKEN` line is rewritten in place; every other
/// line is kept verbatim in its original order. A missing `.env` is created
/// with exactly the token line. The config file itself is never touched.
/// The write is a whole-file rewrite, not an atomic replace. One deliberate
/// deviation from verbatim preservation: an unterminated last line gains a
/// newline before the token line is appended, so the new entry never
/// concatenates onto it.
pub fn save_token(token: &str, config_path: &Path) -> Result<PathBuf, SetupError> {
    let env_path = config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(ENV_FILE_NAME);

    let canonical = format!("{TOKEN_ENV_VAR}={token}\n");
    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;

    if env_path.exists() {
        let existing = fs::read_to_string(&env_path)?;
        for line in existing.split_inclusive('\n') {
            if line.trim().starts_with(TOKEN_ENV_VAR) {
                lines.push(canonical.clone());
                replaced = true;
            } else {
                lines.push(line.to_string());
            }
        }
    }

    if !replaced {
        // keep the appended entry on its own line
        if let Some(last) = lines.last_mut() {
            if !last.ends_with('\n') {
                last.push('\n');
            }
        }
        lines.push(canonical);
    }

    fs::write(&env_path, lines.concat())?;
    info!("token written to {}", env_path.display());
    Ok(env_path)
}
