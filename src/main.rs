// cloudtmpl: Template definition registry for cloud infrastructure commands
// Copyright (c) 2024 cloudtmpl Core Team

use clap::{CommandFactory, Parser};
use cloudtmpl::{
    config::Config,
    error::{Error, Result, ResultExt},
    output::{formatter_for, OutputFormat, OutputFormatter},
    template::{is_valid_entity, suggest_entity, DefinitionRegistry},
    types::{Action, Entity},
};
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::{Cli, Commands};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    // Run the command
    if let Err(e) = run(cli, config) {
        if failure_level(&e) == Level::ERROR {
            tracing::error!("Error: {}", e);
        } else {
            tracing::debug!("Command rejected: {}", e);
        }
        for err in e.flatten() {
            eprintln!("Error: {}", err);
        }
        std::process::exit(1);
    }
}

/// Log level for a failed command: rejected input logs at debug
fn failure_level(err: &Error) -> Level {
    if err.is_validation() {
        Level::DEBUG
    } else {
        Level::ERROR
    }
}

/// Initialize logging based on verbosity level
/// - 0: errors only
/// - 1 (-v): info
/// - 2 (-vv): debug
/// - 3+ (-vvv): trace
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = if cli.quiet {
        0
    } else {
        cli.verbose.max(config.global.verbosity)
    };

    let filter_str = match verbosity {
        0 => "error",
        1 => "cloudtmpl=info",
        2 => "cloudtmpl=debug",
        _ => "cloudtmpl=trace,debug",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let file_layer = match &config.global.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install subscriber: {}", e)))?;

    Ok(())
}

/// Run the CLI command
fn run(cli: Cli, config: Config) -> Result<()> {
    let color = !cli.no_color && config.global.color;
    let session = Session {
        registry: DefinitionRegistry::builtin(),
        config,
        color,
        quiet: cli.quiet,
    };

    if session.config.registry.self_check && !matches!(cli.command, Commands::Check) {
        session.registry.self_check()?;
    }

    match cli.command {
        Commands::List(args) => session.list(args),
        Commands::Show(args) => session.show(args),
        Commands::Validate(args) => session.validate(args),
        Commands::Entities(args) => session.entities(args),
        Commands::Check => session.check(),
        Commands::Complete { prefix } => {
            for key in session.registry.complete(&prefix) {
                println!("{}", key);
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "cloudtmpl",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Config(cmd) => run_config_command(cmd, &session.config),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// State shared by the registry commands
struct Session {
    registry: DefinitionRegistry,
    config: Config,
    color: bool,
    quiet: bool,
}

impl Session {
    fn formatter(&self, format: Option<OutputFormat>) -> Box<dyn OutputFormatter> {
        formatter_for(format.unwrap_or(self.config.output.format), self.color)
    }

    fn list(&self, args: cli::ListArgs) -> Result<()> {
        let entity = args.entity.as_deref().map(|e| self.parse_entity(e)).transpose()?;
        let action = args.action.as_deref().map(str::parse::<Action>).transpose()?;

        let mut defs = match (entity, action) {
            (Some(entity), _) => self.registry.for_entity(entity),
            (None, Some(action)) => self.registry.for_action(action),
            (None, None) => self.registry.iter().collect(),
        };
        if let Some(action) = action {
            defs.retain(|d| d.action == action);
        }

        tracing::info!("Listing {} definitions", defs.len());
        println!("{}", self.formatter(args.format).definitions(&defs)?);
        Ok(())
    }

    fn show(&self, args: cli::ShowArgs) -> Result<()> {
        let def = self
            .registry
            .get(&args.action, &args.entity)
            .map_err(|e| self.with_hint(e))?;
        println!("{}", self.formatter(args.format).definition(def)?);
        Ok(())
    }

    fn validate(&self, args: cli::ValidateArgs) -> Result<()> {
        let names: Vec<&str> = args.params.iter().map(|p| param_name(p)).collect();
        let report = self
            .registry
            .validate(&args.action, &args.entity, names)
            .map_err(|e| self.with_hint(e))?;

        println!("{}", self.formatter(args.format).report(&report)?);
        report.into_result()
    }

    fn entities(&self, args: cli::EntitiesArgs) -> Result<()> {
        if let Some(name) = args.check {
            if is_valid_entity(&name) {
                if !self.quiet {
                    println!("{} is a valid entity", name);
                }
                return Ok(());
            }
            return Err(self.with_hint(Error::UnknownEntity(name)));
        }

        let entities: Vec<Entity> = Entity::all().collect();
        println!("{}", self.formatter(args.format).entities(&entities)?);
        Ok(())
    }

    fn check(&self) -> Result<()> {
        self.registry.self_check()?;
        if !self.quiet {
            println!(
                "Registry OK: {} definitions over {} entities",
                self.registry.len(),
                Entity::ALL.len()
            );
        }
        Ok(())
    }

    fn parse_entity(&self, name: &str) -> Result<Entity> {
        name.parse::<Entity>().map_err(|e| self.with_hint(e))
    }

    /// Attach a "did you mean" hint to unknown key and entity errors
    fn with_hint(&self, err: Error) -> Error {
        if !self.config.registry.suggestions {
            return err;
        }
        let threshold = self.config.registry.suggestion_threshold;
        let hint = match &err {
            Error::UnknownDefinition { key } => self
                .registry
                .suggest_with_threshold(key, threshold)
                .map(str::to_string),
            Error::UnknownEntity(name) => {
                suggest_entity(name, threshold).map(|e| e.as_str().to_string())
            }
            _ => None,
        };
        match hint {
            Some(hint) => err.with_hint(hint),
            None => err,
        }
    }
}

/// Parameter name of a `name=value` or bare `name` token
fn param_name(token: &str) -> &str {
    token
        .split_once('=')
        .map_or(token, |(name, _)| name)
        .trim()
}

/// Run config commands
fn run_config_command(cmd: cli::ConfigCommand, current: &Config) -> Result<()> {
    use cli::ConfigAction;

    match cmd.action {
        ConfigAction::Generate { output } => {
            write_default_config(&output)?;
            println!("Configuration generated: {}", output.display());
            Ok(())
        }
        ConfigAction::Validate { config } => {
            let cfg = Config::from_file(&config)?;
            cfg.validate()
                .with_context(|| format!("validating {}", config.display()))?;
            println!("Configuration is valid");
            Ok(())
        }
        ConfigAction::Show => {
            let yaml =
                serde_yaml::to_string(current).map_err(|e| Error::Serialization(e.to_string()))?;
            println!("{}", yaml);
            Ok(())
        }
    }
}

fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    config.validate()?;
    config.save(path)
}

fn print_version() {
    println!("cloudtmpl v{}", env!("CARGO_PKG_VERSION"));
    println!("Template definition registry for cloud infrastructure commands");
    println!();
    println!("Build Information:");
    println!("  Target: {}", std::env::consts::ARCH);
    println!("  OS: {}", std::env::consts::OS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_name() {
        assert_eq!(param_name("name=mykey"), "name");
        assert_eq!(param_name("name"), "name");
        assert_eq!(param_name("userdata=a=b"), "userdata");
        assert_eq!(param_name(" count =1"), "count");
    }

    #[test]
    fn test_failure_level() {
        let rejected = Error::Multiple(vec![
            Error::MissingRequiredParameters {
                key: "createtag".to_string(),
                params: vec!["key".to_string()],
            },
            Error::UnrecognizedParameters {
                key: "createtag".to_string(),
                params: vec!["region".to_string()],
            },
        ]);
        assert_eq!(failure_level(&rejected), Level::DEBUG);

        let hinted = Error::unknown_definition("createinstnace").with_hint("createinstance");
        assert_eq!(failure_level(&hinted), Level::DEBUG);

        assert_eq!(failure_level(&Error::config("bad file")), Level::ERROR);
        assert_eq!(failure_level(&Error::registry("duplicate key")), Level::ERROR);
    }
}
