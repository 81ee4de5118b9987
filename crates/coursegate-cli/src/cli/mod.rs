//! Command-line surface of the `coursegate` binary.
//!
//! Argument names, aliases and help live here; handlers in `commands` never
//! see raw strings except where a value is free-form (locale, rule set).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use coursegate_core::domain::RequestKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};


#[derive(Debug, Parser)]
#[command(
    name    = "coursegate",
    bin_name = "coursegate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate learning-platform requests before they reach storage",
    long_about = "Coursegate checks course, lesson, question, assessment, user and \
                  settings payloads against their domain rules and reports every \
                  violation as a localized message.",
    after_help = "EXAMPLES:\n\
        \x20 coursegate validate lesson.json --kind lesson\n\
        \x20 coursegate validate user.json --kind user --rule-set add --locale ne\n\
        \x20 cat question.json | coursegate validate - --kind question --format json\n\
        \x20 coursegate completions bash > /usr/share/bash-completion/completions/coursegate",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}


#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a JSON request payload.
    #[command(
        visible_alias = "v",
        about = "Validate a request payload",
        after_help = "EXAMPLES:\n\
            \x20 coursegate validate lesson.json --kind lesson\n\
            \x20 coursegate validate pw.json --kind change-password --rule-set self-service\n\
            \x20 coursegate validate - --kind group < group.json\n\n\
            EXIT CODES:\n\
            \x20 0  request is valid\n\
            \x20 2  request failed validation, or the payload is malformed\n\
            \x20 4  configuration error"
    )]
    Validate(ValidateArgs),

    /// List request kinds and their rule sets.
    #[command(
        visible_alias = "ls",
        about = "List request kinds",
        after_help = "EXAMPLES:\n\
            \x20 coursegate kinds\n\
            \x20 coursegate kinds --style json"
    )]
    Kinds(KindsArgs),

    /// Show message catalog entries.
    #[command(
        about = "Show validation messages",
        after_help = "EXAMPLES:\n\
            \x20 coursegate messages --locale ne\n\
            \x20 coursegate messages --locale ne --missing"
    )]
    Messages(MessagesArgs),

    /// Initialise a Coursegate configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 coursegate init                          # default location\n\
            \x20 coursegate --config ./coursegate.toml init\n\
            \x20 coursegate init --force                  # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 coursegate completions bash > ~/.local/share/bash-completion/completions/coursegate\n\
            \x20 coursegate completions zsh  > ~/.zfunc/_coursegate\n\
            \x20 coursegate completions fish > ~/.config/fish/completions/coursegate.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Coursegate configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 coursegate config get locale.default\n\
            \x20 coursegate config list\n\
            \x20 coursegate config path"
    )]
    Config(ConfigCommands),
}


/// Arguments for `coursegate validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Payload file, or - for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Request kind (see `coursegate kinds`)
    #[arg(short, long, value_name = "KIND", value_parser = parse_kind)]
    pub kind: RequestKind,

    /// Rule set to run on top of the default rules
    #[arg(short, long, value_name = "NAME")]
    pub rule_set: Option<String>,

    /// Message locale [default: locale.default from config]
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,
}

fn parse_kind(s: &str) -> Result<RequestKind, String> {
    s.parse().map_err(|_| {
        let known: Vec<_> = RequestKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("unknown request kind '{s}' (expected one of: {})", known.join(", "))
    })
}


#[derive(Debug, Args)]
pub struct KindsArgs {
    #[arg(long, value_enum, default_value_t = KindsStyle::Table)]
    pub style: KindsStyle,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindsStyle {
    /// Aligned columns: kind and rule sets
    Table,
    /// Bare kind names, one per line
    List,
    /// Array of `{kind, rule_sets}` objects
    Json,
}


#[derive(Debug, Args)]
pub struct MessagesArgs {
    /// Locale to show [default: locale.default from config]
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// List the keys with no text in the locale instead
    #[arg(long)]
    pub missing: bool,
}


#[derive(Debug, Args)]
pub struct InitArgs {
    /// Replace an existing config file
    #[arg(short, long)]
    pub force: bool,
}


#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}


#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `locale.default`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}
