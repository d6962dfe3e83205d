// Configuration is read from the environment exactly once per run and
// threaded into the pipeline as a plain value, so nothing else in the
// crate touches `std::env` for credentials or identity.

/// Environment variable holding a GitHub personal access token.
pub const TOKEN_VAR: &str = "GETGIST_TOKEN";

/// Environment variable holding the default GitHub user for `getmy`.
pub const USER_VAR: &str = "GETGIST_USER";

/// Settings sourced from the environment. Both fields are optional:
/// a missing token degrades to anonymous mode, and a missing default
/// user falls back to an interactive prompt.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub token: Option<String>,
    pub default_user: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            token: env_var(TOKEN_VAR),
            default_user: env_var(USER_VAR),
        }
    }
}

// Blank values count as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
