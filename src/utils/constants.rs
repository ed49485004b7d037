//! Shared constants and invariants

/// Cloudflare Worker that mints BGG application tokens on behalf of users.
pub const WORKER_URL: &str = "https://gamecache-bgg-token-generator.mybgg.workers.dev";

/// Where to create a token by hand when the worker is unreachable.
pub const MANUAL_TOKEN_URL: &str = "https://boardgamegeek.com/application/189/tokens";

/// Environment variable (and `.env` key) holding the token.
pub const TOKEN_ENV_VAR: &str = "GAMECACHE_BGG_TOKEN";

pub const ENV_FILE_NAME: &str = ".env";

pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// Hard cap on the worker request.
pub const WORKER_TIMEOUT_SECS: u64 = 30;

// Required keys in the flat config
pub const KEY_TITLE: &str = "title";
pub const KEY_BGG_USERNAME: &str = "bgg_username";
pub const KEY_GITHUB_REPO: &str = "github_repo";
pub const KEY_BGG_TOKEN: &str = "bgg_token";
