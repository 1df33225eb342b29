use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::discovery::list_projects;
use crate::models::RepairResult;
use crate::repair::{repair_project, repair_project_all, repair_transcript};
use crate::utils::{format_path_with_tilde, get_claude_dir, projects_dir};

#[derive(Parser)]
#[command(name = "thinking-fix")]
#[command(version = "0.1.0")]
#[command(about = "Remove thinking blocks from Claude Code session transcripts", long_about = None)]
pub struct Cli {
    /// Claude configuration directory (defaults to ~/.claude)
    #[arg(long, global = true, env = "CLAUDE_CONFIG_DIR", value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, most recently modified first
    Projects {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Remove thinking blocks from a project's newest transcript
    Repair {
        /// Project directory, or a project name under <DIR>/projects
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        project: Option<PathBuf>,

        /// Repair this transcript file instead of locating one
        #[arg(long, value_name = "TRANSCRIPT")]
        file: Option<PathBuf>,

        /// Repair every transcript in the project, not just the newest
        #[arg(long, conflicts_with = "file")]
        all: bool,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Projects { json }) => {
            show_projects(&claude_dir(&cli)?, *json)?;
        }
        Some(Commands::Repair { project, file, all, json }) => {
            let results = match (project, file) {
                (_, Some(file)) => vec![repair_transcript(file)?],
                (Some(project), None) => {
                    let project_dir = resolve_project_dir(project, || claude_dir(&cli))?;
                    if *all {
                        repair_project_all(&project_dir)?
                    } else {
                        vec![repair_project(&project_dir)?]
                    }
                }
                (None, None) => bail!("Specify a project or --file"),
            };
            show_results(&results, *json, *all)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn claude_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.claude_dir {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.clone()),
        _ => get_claude_dir(),
    }
}

/// Accept either a path to a project directory or a bare project name
///
/// A bare name that is not a directory relative to the working directory is
/// looked up under `<claude-dir>/projects`.
fn resolve_project_dir(
    project: &Path,
    claude_dir: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    if project.is_dir() || project.components().count() != 1 {
        return Ok(project.to_path_buf());
    }

    let candidate = projects_dir(&claude_dir()?).join(project);
    if candidate.is_dir() { Ok(candidate) } else { Ok(project.to_path_buf()) }
}

fn show_projects(claude_dir: &Path, json: bool) -> Result<()> {
    let projects = list_projects(claude_dir)?;

    if json {
        let output =
            serde_json::to_string_pretty(&projects).context("Failed to serialize projects")?;
        println!("{}", output);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects found in {}", format_path_with_tilde(&projects_dir(claude_dir)));
        return Ok(());
    }

    println!("Claude Code Projects");
    println!("====================");
    for project in &projects {
        let modified = project.last_modified.with_timezone(&Local);
        println!("{}  {}", modified.format("%Y-%m-%d %H:%M:%S"), project.name);
        println!("                     {}", format_path_with_tilde(&project.path));
    }
    println!();
    println!("{} projects", projects.len());

    Ok(())
}

fn show_results(results: &[RepairResult], json: bool, as_list: bool) -> Result<()> {
    if json {
        let output = match results {
            [single] if !as_list => serde_json::to_string_pretty(single),
            _ => serde_json::to_string_pretty(results),
        }
        .context("Failed to serialize repair result")?;
        println!("{}", output);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_summary(result);
    }

    Ok(())
}

fn print_summary(result: &RepairResult) {
    println!("Transcript: {}", format_path_with_tilde(&result.transcript_path));
    println!("  Lines processed: {}", result.total_lines);
    println!("  Lines modified: {}", result.modified_lines);
    println!("  Thinking blocks removed: {}", result.thinking_blocks_removed);
    println!("  Unparseable lines: {}", result.errors);
    match &result.backup_path {
        Some(backup) => println!("  Backup: {}", format_path_with_tilde(backup)),
        None => println!("  No changes needed, transcript left untouched"),
    }
}
