use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use aelus::{
    application::parser_registry::ParserRegistry,
    infrastructure::{parsers::FilesystemBackendLocator, storage::list_project_files},
};

/// Inspect Ableton Live Set files from the command line
#[derive(Parser)]
#[command(name = "aelus-inspect", version)]
struct Cli {
    /// Location of the alternate parser's library
    #[arg(long, env = "ALTERNATE_PARSER_PATH", global = true)]
    alternate_parser_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a project and print it as JSON
    Parse {
        file: PathBuf,
        /// builtin, alternate or auto
        #[arg(long, default_value = "auto")]
        parser: String,
    },
    /// Check that a file looks like a Live Set
    Validate {
        file: PathBuf,
        #[arg(long, default_value = "auto")]
        parser: String,
    },
    /// List project files below a directory
    Scan {
        dir: PathBuf,
        /// Parse each file and print a summary
        #[arg(long)]
        parse: bool,
        /// Parser used with --parse
        #[arg(long, default_value = "auto")]
        parser: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = ParserRegistry::new(Arc::new(FilesystemBackendLocator::new(
        cli.alternate_parser_path.clone(),
    )));

    match cli.command {
        Command::Parse { file, parser } => {
            let parser = registry.get_named(&parser)?;
            let project = parser
                .parse(&file)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&project)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { file, parser } => {
            let parser = registry.get_named(&parser)?;
            if parser.validate(&file) {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Scan { dir, parse, parser } => {
            let files = list_project_files(&dir)
                .with_context(|| format!("Failed to scan {}", dir.display()))?;

            if !parse {
                for file in &files {
                    println!("{}", file.display());
                }
                return Ok(ExitCode::SUCCESS);
            }

            let parser = registry.get_named(&parser)?;
            let summaries: Vec<_> = files
                .iter()
                .map(|file| match parser.parse(file) {
                    Ok(project) => json!({
                        "path": file.display().to_string(),
                        "name": project.name(),
                        "version": project.version(),
                        "tempo": project.tempo(),
                        "time_signature": project.time_signature(),
                        "tracks": project.tracks().len(),
                        "samples": project.samples().len(),
                        "plugins": project.plugins(),
                    }),
                    Err(e) => json!({
                        "path": file.display().to_string(),
                        "error": e.to_string(),
                    }),
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&summaries)?);
            Ok(ExitCode::SUCCESS)
        }
    }
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
    fn test_scan_accepts_parser() {
        let cli = Cli::try_parse_from(["aelus-inspect", "scan", "sets", "--parse", "--parser", "builtin"])
            .unwrap();
        match cli.command {
            Command::Scan { dir, parse, parser } => {
                assert_eq!(dir, PathBuf::from("sets"));
                assert!(parse);
                assert_eq!(parser, "builtin");
            }
            _ => panic!("Expected scan command"),
        }
    }

    #[test]
    fn test_scan_parser_defaults_to_auto() {
        let cli = Cli::try_parse_from(["aelus-inspect", "scan", "sets"]).unwrap();
        assert!(matches!(cli.command, Command::Scan { ref parser, .. } if parser == "auto"));
    }
}
