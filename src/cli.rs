//! Command-line interface for cloudtmpl

use cloudtmpl::output::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cloudtmpl",
    version,
    about = "Validate cloud infrastructure template commands",
    long_about = "cloudtmpl knows, for every supported action and entity, which parameters \
                  a template command requires and which it accepts. Use it to inspect the \
                  definition table and to check commands before they reach the cloud API.",
    after_help = "EXAMPLES:
  cloudtmpl list --entity instance
  cloudtmpl show create instance
  cloudtmpl validate create keypair name=mykey
  cloudtmpl validate create tag resource=i-123 key=env
  cloudtmpl entities --check wormhole
  cloudtmpl complete create
  cloudtmpl completions bash > /etc/bash_completion.d/cloudtmpl"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress everything except results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, value_name = "FILE", env = "CLOUDTMPL_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List definitions
    List(ListArgs),

    /// Show one definition
    Show(ShowArgs),

    /// Validate a command's parameters against its definition
    Validate(ValidateArgs),

    /// List or check entity names
    Entities(EntitiesArgs),

    /// Run the registry integrity self-check
    Check,

    /// Print definition keys starting with a prefix
    Complete {
        /// Key prefix
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage configuration
    Config(ConfigCommand),

    /// Display version information
    Version,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only definitions targeting this entity
    #[arg(short, long)]
    pub entity: Option<String>,

    /// Only definitions using this action
    #[arg(short, long)]
    pub action: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Action verb
    pub action: String,

    /// Entity name
    pub entity: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Action verb
    pub action: String,

    /// Entity name
    pub entity: String,

    /// Parameters as `name=value` or bare `name`
    pub params: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct EntitiesArgs {
    /// Check whether a name is a recognized entity
    #[arg(long, value_name = "NAME")]
    pub check: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Generate a default configuration file
    Generate {
        /// Output file path (.yaml, .toml or .json)
        #[arg(short, long, default_value = "cloudtmpl.yaml", value_name = "FILE")]
        output: PathBuf,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate
        config: PathBuf,
    },

    /// Show current configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "cloudtmpl",
            "validate",
            "create",
            "keypair",
            "name=mykey",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.action, "create");
                assert_eq!(args.entity, "keypair");
                assert_eq!(args.params, vec!["name=mykey"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
