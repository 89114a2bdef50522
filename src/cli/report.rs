//! Console output for the build command.
//!
//! Separate from the pipeline so lingo can be used as a library: the
//! pipeline returns a `BuildSummary`, and only the CLI prints it.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::{
    config::CONFIG_FILE_NAME,
    core::Platform,
    emitters::GeneratedFile,
    pipeline::{BuildOptions, BuildSummary},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the header shown before a build starts.
pub fn print_build_start() {
    print_build_start_to(&mut io::stdout().lock());
}

pub fn print_build_start_to<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", "Generating translations...".bold());
    let _ = writeln!(writer);
}

/// Print the resolved settings (verbose mode).
pub fn print_settings(config_path: Option<&Path>, options: &BuildOptions) {
    print_settings_to(config_path, options, &mut io::stdout().lock());
}

pub fn print_settings_to<W: Write>(
    config_path: Option<&Path>,
    options: &BuildOptions,
    writer: &mut W,
) {
    match config_path {
        Some(path) => {
            let _ = writeln!(writer, "{} {}", "Config:".dimmed(), path.display());
        }
        None => {
            let _ = writeln!(
                writer,
                "{} defaults (no {} found)",
                "Config:".dimmed(),
                CONFIG_FILE_NAME
            );
        }
    }
    let _ = writeln!(
        writer,
        "{} {}",
        "Master root:".dimmed(),
        options.master_root.display()
    );
    let _ = writeln!(
        writer,
        "{} {}",
        "Output root:".dimmed(),
        options.output_root.display()
    );
    let _ = writeln!(
        writer,
        "{} {}",
        "Source language:".dimmed(),
        options.source_language
    );
    let targets: Vec<String> = options.platforms.iter().map(|p| p.to_string()).collect();
    let _ = writeln!(writer, "{} {}", "Targets:".dimmed(), targets.join(", "));
    let _ = writeln!(writer);
}

/// Print what a build generated.
pub fn print_build_summary(summary: &BuildSummary, verbose: bool) {
    print_build_summary_to(summary, verbose, &mut io::stdout().lock());
}

pub fn print_build_summary_to<W: Write>(summary: &BuildSummary, verbose: bool, writer: &mut W) {
    if verbose && summary.cleaned {
        let _ = writeln!(writer, "{}", "Removed previous output".dimmed());
    }

    let _ = writeln!(writer, "{} {}", "Modules:".cyan(), join_or_none(&summary.modules));
    let _ = writeln!(
        writer,
        "{} {}",
        "Languages:".cyan(),
        join_or_none(&summary.languages)
    );

    for platform in Platform::all() {
        let mut files = summary.files_for(platform).peekable();
        if files.peek().is_none() {
            continue;
        }
        let _ = writeln!(writer);
        for file in files {
            print_generated_file(file, verbose, writer);
        }
    }

    let count = summary.files.len();
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Done: {} {} generated",
            count,
            if count == 1 { "file" } else { "files" }
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_generated_file<W: Write>(file: &GeneratedFile, verbose: bool, writer: &mut W) {
    let label = match &file.language {
        Some(language) => format!("{} ({})", file.platform.label(), language),
        None => file.platform.label().to_string(),
    };

    if verbose {
        let _ = writeln!(
            writer,
            "{} {}: {}  {}",
            SUCCESS_MARK.green(),
            label,
            file.file_name(),
            file.path.display().to_string().dimmed()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}: {}",
            SUCCESS_MARK.green(),
            label,
            file.file_name()
        );
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
