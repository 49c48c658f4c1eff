//! Command line surface: one segmentation run per work.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lit_core::{flatten, read_document, SegmenterConfig};
use lit_parser::{profile, works, Pipeline, YieldStatus};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "litseg",
    version,
    about = "Segment public-domain literature into structured JSON documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Segment one work using its fixed input/output pair.
    Run {
        /// Work slug, see `litseg list`.
        work: String,
        /// Override the source text path.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Override the output JSON path.
        #[arg(long)]
        output: Option<PathBuf>,
        /// JSON file with threshold overrides.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List registered works and their default paths.
    List,
    /// Print the import rows a written document flattens into.
    Rows {
        document: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Run {
                work,
                input,
                output,
                config,
            } => run_work(&work, input, output, config),
            Command::List => list(),
            Command::Rows { document } => rows(document),
        }
    }
}

fn run_work(
    work: &str,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let profile = profile(work)?;
    let config = match config {
        Some(path) => SegmenterConfig::from_json_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SegmenterConfig::default(),
    };
    let input = input.unwrap_or_else(|| profile.default_input());
    let output = output.unwrap_or_else(|| profile.default_output());

    let summary = Pipeline::new(profile, config)
        .run(&input, &output)
        .with_context(|| format!("segmenting {}", input.display()))?;

    println!(
        "{}: {} sections{} -> {}",
        summary.work,
        summary.sections,
        summary
            .books
            .map(|b| format!(" in {b} books"))
            .unwrap_or_default(),
        summary.output.display()
    );
    match summary.report.status {
        YieldStatus::Plausible => {}
        YieldStatus::LowYield => println!(
            "warning: only {} sections (primary {}, fallback {:?}); check the heading rules",
            summary.sections, summary.report.primary_sections, summary.report.fallback_sections
        ),
        YieldStatus::Empty => println!("warning: no sections detected; heading style not recognised"),
    }
    Ok(())
}

fn list() -> Result<()> {
    for p in works::all_profiles()? {
        println!(
            "{:<22} {} ({}, {})\n{:<22} {} -> {}",
            p.slug,
            p.title,
            p.author,
            p.year,
            "",
            p.default_input().display(),
            p.default_output().display()
        );
    }
    Ok(())
}

fn rows(document: PathBuf) -> Result<()> {
    let doc = read_document(&document)?;
    let rows = flatten(&doc);
    tracing::info!(rows = rows.len(), document = %document.display(), "flattened");
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_defaults() {
        let cli = Cli::try_parse_from(["litseg", "run", "institutes"]).unwrap();
        match cli.command {
            Command::Run { work, input, output, config } => {
                assert_eq!(work, "institutes");
                assert!(input.is_none() && output.is_none() && config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "litseg", "run", "pilgrims-progress", "--input", "a.txt", "--output", "b.json",
        ])
        .unwrap();
        let Command::Run { input, output, .. } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(input, Some(PathBuf::from("a.txt")));
        assert_eq!(output, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn test_unknown_work_fails() {
        let err = run_work("summa-theologica", None, None, None).unwrap_err();
        assert!(err.to_string().contains("summa-theologica"));
    }
}
