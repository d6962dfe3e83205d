// Local reconciler: decides what happens to a file that already sits at
// the target path (delete or back up), then writes the downloaded
// content. The remote content is fetched before the local file is
// touched, so a failed download never deletes or empties anything.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::GitHubClient;
use crate::console::{self, Prompt};
use crate::gist::GistFileMatch;

/// Download the selected gist file into `local_dir/file_name`.
///
/// With a pre-existing local file, `--yes-to-all` (or a confirmed
/// prompt) deletes it; a declined prompt moves it to a fresh `.bkp`
/// name instead. Filesystem errors are the only fatal class here;
/// a failed download reports and leaves the directory untouched.
pub fn save(
    client: &GitHubClient,
    prompt: &mut dyn Prompt,
    target: &GistFileMatch,
    local_dir: &Path,
    file_name: &str,
    assume_yes: bool,
) -> Result<()> {
    let contents = match download(client, &target.raw_url) {
        Ok(contents) => contents,
        Err(_) => {
            // fetch already printed the diagnostic with the URL
            console::output(&format!(
                "[Error] Could not download {}, local files were left untouched.",
                file_name
            ));
            return Ok(());
        }
    };

    let local_path = local_dir.join(file_name);
    if local_path.exists() {
        let delete = assume_yes
            || prompt.confirm(&format!("Delete existing {}? (y/n)", file_name))?;
        if delete {
            console::output(&format!("Deleting existing {} …", file_name));
            fs::remove_file(&local_path)
                .with_context(|| format!("could not delete {}", local_path.display()))?;
        } else {
            backup(local_dir, file_name)?;
        }
    }

    console::output(&format!("Saving new {} …", file_name));
    fs::write(&local_path, contents)
        .with_context(|| format!("could not write {}", local_path.display()))?;

    let shown = local_path.canonicalize().unwrap_or(local_path);
    console::output(&format!("Saved as {}", shown.display()));
    console::output("Done!");
    Ok(())
}

/// First backup name in `<name>.bkp`, `<name>.bkp1`, `<name>.bkp2`, …
/// that does not already exist in the directory. Existing backups are
/// never overwritten.
pub fn backup_path(dir: &Path, file_name: &str) -> PathBuf {
    let mut count = 0;
    let mut candidate = dir.join(format!("{}.bkp", file_name));
    while candidate.exists() {
        count += 1;
        candidate = dir.join(format!("{}.bkp{}", file_name, count));
    }
    candidate
}

fn backup(dir: &Path, file_name: &str) -> Result<()> {
    let target = backup_path(dir, file_name);
    let backup_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());
    console::output(&format!("Moving existing {} to {} …", file_name, backup_name));
    fs::rename(dir.join(file_name), &target)
        .with_context(|| format!("could not back up {}", file_name))?;
    Ok(())
}

fn download(client: &GitHubClient, url: &str) -> Result<String, crate::api::FetchError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Downloading…");
    let result = client.fetch(url);
    spinner.finish_and_clear();
    result
}
