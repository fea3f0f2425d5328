//! `bundle` subcommands.

use crate::bundle::{load_config, prepare_output_dir};
use crate::cli::BundleCommand;
use crate::error::Result;

/// Execute a bundle subcommand and return the process exit code.
pub async fn execute(command: BundleCommand) -> Result<i32> {
    match command {
        BundleCommand::Show(args) => {
            let config = load_config(&args.config)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        BundleCommand::Plan(args) => {
            let config = load_config(&args.config)?;
            for artifact in config.artifacts() {
                println!("{}", artifact.path.display());
            }
        }
        BundleCommand::Prepare(args) => {
            let config = load_config(&args.config)?;
            let out_dir = prepare_output_dir(&config).await?;
            println!("{}", out_dir.display());
        }
    }

    Ok(0)
}
