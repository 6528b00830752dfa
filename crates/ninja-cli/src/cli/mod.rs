use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ncms` binary.
#[derive(Debug, Parser)]
#[command(name = "ncms", version, about = "Ninja Inflatable Park CMS admin")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["ncms", "--format", "table", "--verbose", "entities"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Entities));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ncms", "list", "faq", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::List(ref args) if args.entity == "faq"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["ncms", "--format", "xml", "entities"]).is_err());
    }

    #[test]
    fn create_collects_repeated_assignments() {
        let cli = Cli::try_parse_from([
            "ncms",
            "create",
            "faq",
            "--set",
            "question=Socks?",
            "--set",
            "answer=Yes",
        ])
        .expect("cli should parse");

        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.entity, "faq");
        assert_eq!(args.assignments, vec!["question=Socks?", "answer=Yes"]);
    }

    #[test]
    fn update_requires_an_assignment() {
        assert!(Cli::try_parse_from(["ncms", "update", "faq", "5"]).is_err());
    }

    #[test]
    fn delete_yes_flag() {
        let cli = Cli::try_parse_from(["ncms", "delete", "faq", "5", "-y"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Delete(ref args) if args.yes && args.id == "5"));
    }

    #[test]
    fn schema_needs_entity_unless_meta() {
        assert!(Cli::try_parse_from(["ncms", "schema"]).is_err());
        assert!(Cli::try_parse_from(["ncms", "schema", "--meta"]).is_ok());
        assert!(Cli::try_parse_from(["ncms", "schema", "faq", "--json-schema"]).is_ok());
    }

    #[test]
    fn serve_and_launch_take_a_port() {
        let cli = Cli::try_parse_from(["ncms", "launch", "--port", "8080"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Launch(ref args) if args.port == Some(8080)));
        let cli = Cli::try_parse_from(["ncms", "serve"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Serve(ref args) if args.port.is_none()));
    }
}
