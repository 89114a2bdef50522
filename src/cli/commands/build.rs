use std::env;

use anyhow::{Context, Result};

use super::super::{args::BuildCommand, exit_status::ExitStatus, report};
use crate::{
    config::{ConfigLoadResult, load_config},
    pipeline::{BuildOptions, build as run_build},
};

pub fn build(cmd: BuildCommand) -> Result<ExitStatus> {
    let args = cmd.args;
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let ConfigLoadResult { config, path } = load_config(&cwd)?;

    // Config paths are relative to the config file, CLI paths to the working directory.
    let base_dir = path
        .as_deref()
        .and_then(|p| p.parent())
        .unwrap_or(cwd.as_path())
        .to_path_buf();
    let mut options = BuildOptions::from_config(&config, &base_dir);

    if let Some(master_root) = args.master_root {
        options.master_root = cwd.join(master_root);
    }
    if let Some(output_root) = args.output_root {
        options.output_root = cwd.join(output_root);
    }
    if let Some(source_language) = args.source_language {
        options.source_language = source_language;
    }
    if !args.targets.is_empty() {
        let mut platforms = args.targets;
        platforms.sort();
        platforms.dedup();
        options.platforms = platforms;
    }

    if args.verbose {
        report::print_settings(path.as_deref(), &options);
    }

    report::print_build_start();
    let summary = run_build(&options)?;
    report::print_build_summary(&summary, args.verbose);

    Ok(ExitStatus::Success)
}
