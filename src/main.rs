// `getgist` entrypoint: download a named file from a given GitHub
// user's gists into the current directory.

use clap::Parser;

use getgist::{run, Config};

/// Download a file from a GitHub user's Gists.
#[derive(Parser)]
#[command(name = "getgist", version)]
struct Args {
    /// Gist username
    user: String,

    /// Gist file name to search for
    file_name: String,

    /// Assume `yes` to all prompts
    #[arg(short = 'y', long = "yes-to-all")]
    yes_to_all: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    run(Some(args.user), &args.file_name, args.yes_to_all, &config)
}
