// `getmy` entrypoint: same pipeline as `getgist`, but the username
// comes from `GETGIST_USER` (or an interactive prompt) instead of an
// argument.

use clap::Parser;

use getgist::{run, Config};

/// Download a file from your own GitHub Gists.
#[derive(Parser)]
#[command(name = "getmy", version)]
struct Args {
    /// Gist file name to search for
    file_name: String,

    /// Assume `yes` to all prompts
    #[arg(short = 'y', long = "yes-to-all")]
    yes_to_all: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    run(None, &args.file_name, args.yes_to_all, &config)
}
