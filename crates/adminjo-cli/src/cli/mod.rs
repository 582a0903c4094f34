use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `adminjo` binary.
#[derive(Debug, Parser)]
#[command(
    name = "adminjo",
    version,
    about = "AdminJO - Olympic sessions, venues and épreuves"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Max rows to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the API snapshot files (overrides `data.dir`)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            limit: self.limit,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::EventsCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "adminjo",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "events",
            "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Events {
                action: EventsCommands::Stats(_)
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "adminjo",
            "venues",
            "list",
            "--format",
            "raw",
            "--quiet",
            "--data-dir",
            "/tmp/snapshots",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(
            cli.global_flags().data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/snapshots"))
        );
    }

    #[test]
    fn event_filters_parse() {
        let cli = Cli::try_parse_from([
            "adminjo",
            "events",
            "list",
            "--venue",
            "3",
            "--discipline",
            "1",
            "--status",
            "ongoing",
            "--from",
            "2024-07-27",
            "--search",
            "finale",
        ])
        .expect("cli should parse");

        let Commands::Events {
            action: EventsCommands::List(filters),
        } = cli.command
        else {
            panic!("expected events list");
        };
        assert_eq!(filters.facets.venue, Some(3));
        assert_eq!(filters.facets.discipline, Some(1));
        assert_eq!(filters.status.as_deref(), Some("ongoing"));
        assert_eq!(filters.from.as_deref(), Some("2024-07-27"));
        assert_eq!(filters.search.as_deref(), Some("finale"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["adminjo", "--format", "xml", "events", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn venue_id_must_be_numeric() {
        let parsed = Cli::try_parse_from(["adminjo", "events", "list", "--venue", "stade"]);
        assert!(parsed.is_err());
    }
}
