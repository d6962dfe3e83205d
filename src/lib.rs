// Library root
// -----------
// This crate exposes the download pipeline shared by the two binaries
// (`getgist` for an explicit user, `getmy` for the configured one).
//
// Module responsibilities:
// - `api`: Blocking GitHub client — transport, token validation, and
//   the gist listing call.
// - `gist`: Locates the one gist file to download (filtering and
//   disambiguation).
// - `local`: Reconciles the download against an existing local file
//   (delete, back up, write).
// - `console`: Indented output and the interactive-prompt seam.
// - `config`: One-shot environment configuration.
//
// Keeping the pipeline in the library makes every stage testable
// without a terminal or a live GitHub.

pub mod api;
pub mod config;
pub mod console;
pub mod gist;
pub mod local;

use anyhow::{Context, Result};

use crate::console::{Console, Prompt};

pub use crate::config::Config;

/// Run the whole pipeline once: resolve the identity, establish the
/// auth mode, locate the gist file, and save it into the current
/// directory. A missing match is a clean no-op, not an error.
pub fn run(
    user: Option<String>,
    file_name: &str,
    assume_yes: bool,
    config: &Config,
) -> Result<()> {
    let mut prompt = Console;
    let user = resolve_user(user, config, &mut prompt)?;

    let mut client = api::GitHubClient::from_env(config.token.clone())?;
    client.authenticate(&user);

    let target = match gist::resolve(&client, &mut prompt, &user, file_name, assume_yes)? {
        Some(target) => target,
        None => return Ok(()),
    };

    let local_dir =
        std::env::current_dir().context("could not determine the working directory")?;
    local::save(&client, &mut prompt, &target, &local_dir, file_name, assume_yes)
}

// Precedence: explicit argument, then GETGIST_USER, then a prompt.
fn resolve_user(
    user: Option<String>,
    config: &Config,
    prompt: &mut dyn Prompt,
) -> Result<String> {
    if let Some(user) = user {
        return Ok(user);
    }
    if let Some(user) = &config.default_user {
        return Ok(user.clone());
    }
    console::output("No default user set yet. To avoid this prompt set an");
    console::output(&format!(
        "environment variable called `{}`.",
        config::USER_VAR
    ));
    prompt.ask("Please type your GitHub user name:")
}
