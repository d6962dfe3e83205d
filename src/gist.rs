// Gist locator: narrows a user's gists down to the ones containing the
// requested file name, then reduces the candidates to exactly one pick
// (automatically when possible, interactively otherwise).

use anyhow::{bail, Result};

use crate::api::{GistEntry, GitHubClient};
use crate::console::{self, Prompt};

/// How many invalid answers the disambiguation prompt tolerates before
/// giving up, so a closed or garbage stdin cannot loop forever.
const MAX_CHOICE_ATTEMPTS: usize = 5;

/// One remote gist that contains a file with the target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistFileMatch {
    pub id: String,
    pub description: Option<String>,
    pub raw_url: String,
}

impl GistFileMatch {
    /// Human-readable label used in listings and notices.
    pub fn describe(&self) -> &str {
        self.description.as_deref().unwrap_or("(no description)")
    }
}

/// Find the single gist file to download, or `None` when the user has
/// no gist containing `file_name`. Never proceeds past this function
/// with more than one candidate.
pub fn resolve(
    client: &GitHubClient,
    prompt: &mut dyn Prompt,
    user: &str,
    file_name: &str,
    assume_yes: bool,
) -> Result<Option<GistFileMatch>> {
    let matches = filter_matches(client.list_gists(user), file_name);
    if matches.is_empty() {
        console::output(&format!(
            "[Error] No file named `{}` found in {}'s Gists.",
            file_name, user
        ));
        return Ok(None);
    }
    select_match(matches, file_name, assume_yes, prompt).map(Some)
}

/// Keep the gists whose file map contains `file_name` as an exact key,
/// preserving the API's ordering. No deduplication: two gists with the
/// same file and description stay two distinct candidates.
pub fn filter_matches(gists: Vec<GistEntry>, file_name: &str) -> Vec<GistFileMatch> {
    gists
        .into_iter()
        .filter_map(|mut gist| {
            let file = gist.files.remove(file_name)?;
            Some(GistFileMatch {
                id: gist.id,
                description: gist.description,
                raw_url: file.raw_url,
            })
        })
        .collect()
}

/// Reduce a non-empty candidate set to one. A single candidate (or the
/// `--yes-to-all` flag) skips the prompt and takes the first match in
/// listing order; otherwise the candidates are listed 1-based and the
/// user picks by number.
pub fn select_match(
    mut matches: Vec<GistFileMatch>,
    file_name: &str,
    assume_yes: bool,
    prompt: &mut dyn Prompt,
) -> Result<GistFileMatch> {
    if matches.len() == 1 || assume_yes {
        return Ok(matches.remove(0));
    }

    console::output(&format!("Download {} from which Gist?", file_name));
    for (index, candidate) in matches.iter().enumerate() {
        console::output(&format!("[{}] {}", index + 1, candidate.describe()));
    }

    for _ in 0..MAX_CHOICE_ATTEMPTS {
        let answer = prompt.ask("Type the number:")?;
        let number: usize = match answer.trim().parse() {
            Ok(number) => number,
            Err(_) => {
                console::output("Please type a number.");
                continue;
            }
        };
        match checked_index(number, matches.len()) {
            Some(index) => {
                let selected = matches.remove(index);
                console::output(&format!("Using `{}` Gist …", selected.describe()));
                return Ok(selected);
            }
            None => console::output("Invalid number, please try again."),
        }
    }
    bail!(
        "no valid choice after {} attempts, giving up",
        MAX_CHOICE_ATTEMPTS
    )
}

// 1-based answer to 0-based index, when in range.
fn checked_index(number: usize, len: usize) -> Option<usize> {
    (1..=len).contains(&number).then(|| number - 1)
}
