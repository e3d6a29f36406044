use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cmdhelp_core::{BuildFeatures, CommandGroup, CommandNode, CommandTable, LookupError, validate_table};
use cmdhelp_render::{
    ArgsError, HelpContext, clean_args_no_options, help_ambiguous_token, help_command_group,
    help_unknown_token, print_features, render_group_overview, usage_command, usage_command_group,
    usage_unknown_option,
};
use cmdhelp_table::{HelpConfig, LoadedTable, TableFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const PACKAGE_STRING: &str = concat!("cmdhelp v", env!("CARGO_PKG_VERSION"));

/// CLI-specific table format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliTableFormat {
    Json,
    Yaml,
}

impl From<CliTableFormat> for TableFormat {
    fn from(fmt: CliTableFormat) -> Self {
        match fmt {
            CliTableFormat::Json => Self::Json,
            CliTableFormat::Yaml => Self::Yaml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cmdhelp", disable_help_subcommand = true)]
#[command(about = "Render help, usage and diagnostics for hierarchical command tables")]
struct Cli {
    /// Command table file (JSON or YAML) replacing the built-in table.
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Help configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the overview of a group, a group listing or a command's usage.
    Help(HelpArgs),
    /// Resolve a command line against the table and check its arguments.
    Resolve(ResolveArgs),
    /// Print the build features banner.
    Features(FeaturesArgs),
    /// Check the command table for authoring defects.
    Validate,
    /// Print the loaded command table.
    Dump(DumpArgs),
}

#[derive(Debug, Args)]
struct HelpArgs {
    /// Include long descriptions and options.
    #[arg(long)]
    full: bool,
    /// Group and command tokens, possibly abbreviated.
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Require exactly this many positional arguments.
    #[arg(long, conflicts_with_all = ["min_args", "max_args"])]
    exact_args: Option<usize>,
    /// Require at least this many positional arguments.
    #[arg(long)]
    min_args: Option<usize>,
    /// Allow at most this many positional arguments.
    #[arg(long)]
    max_args: Option<usize>,
    /// Command tokens followed by the command's arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

#[derive(Debug, Args)]
struct FeaturesArgs {
    /// Text printed before the package string.
    #[arg(long, default_value = "")]
    prefix: String,
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliTableFormat,
}

/// Loaded table and configuration shared by all subcommands.
struct Session {
    table: CommandTable,
    config: HelpConfig,
}

impl Session {
    fn load(cli: &Cli) -> Result<Self, String> {
        let config = match &cli.config {
            Some(path) => HelpConfig::load(path)
                .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
            None => HelpConfig::default(),
        };

        // A table named on the command line never falls back.
        let table = match &cli.table {
            Some(path) => LoadedTable::from_file(path)
                .map_err(|err| format!("Failed to load table '{}': {err}", path.display()))?,
            None => {
                let mut builder = LoadedTable::builder();
                if let Some(path) = &config.table {
                    builder = builder.from_file(path);
                }
                builder.with_builtin().build().map_err(|err| err.to_string())?
            }
        };
        debug!(source = ?table.source(), "Using command table");

        Ok(Self {
            table: table.into_table(),
            config,
        })
    }

    fn context(&self) -> HelpContext {
        HelpContext::new(self.config.program_or(&self.table.program))
    }

    fn features(&self) -> BuildFeatures {
        self.config.features.clone().unwrap_or_else(build_features)
    }
}

fn build_features() -> BuildFeatures {
    let crypto = option_env!("CMDHELP_CRYPTO_PROVIDER").unwrap_or("builtin");
    BuildFeatures::from_standard(PACKAGE_STRING, crypto, |name| match name {
        "EXPERIMENTAL" => cfg!(feature = "experimental"),
        "INJECT" => cfg!(feature = "inject"),
        "STATIC" => cfg!(feature = "static"),
        "LZO" => cfg!(feature = "lzo"),
        "ZSTD" => cfg!(feature = "zstd"),
        "UDEV" => cfg!(feature = "udev"),
        "FSVERITY" => cfg!(feature = "fsverity"),
        "ZONED" => cfg!(feature = "zoned"),
        _ => false,
    })
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = Session::load(&cli).and_then(|session| match cli.command {
        Command::Help(args) => run_help(&session, args),
        Command::Resolve(args) => run_resolve(&session, args),
        Command::Features(args) => run_features(&session, args),
        Command::Validate => run_validate(&session),
        Command::Dump(args) => run_dump(&session, args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Resolves `token` in `group`, exiting with the matching diagnostic when
/// it names no single command.
fn resolve_or_exit<'a>(ctx: &HelpContext, group: &'a CommandGroup, token: &str) -> &'a CommandNode {
    match group.resolve(token) {
        Ok(node) => node,
        Err(LookupError::Unknown(_)) => help_unknown_token(ctx, token, group),
        Err(LookupError::Ambiguous(_)) => help_ambiguous_token(ctx, token, group),
    }
}

fn write_err(err: io::Error) -> String {
    format!("Failed to write output: {err}")
}

fn run_help(session: &Session, args: HelpArgs) -> Result<(), String> {
    let mut ctx = session.context();
    let mut group = &session.table.root;
    let mut out = io::stdout().lock();

    for (index, token) in args.tokens.iter().enumerate() {
        let node = resolve_or_exit(&ctx, group, token);
        ctx = ctx.descend(&node.token);
        match &node.group {
            Some(nested) => group = nested,
            None => {
                if index + 1 < args.tokens.len() {
                    return Err(format!("{}: is a command, not a group", ctx.program()));
                }
                usage_command(node, args.full, &mut out).map_err(write_err)?;
                return Ok(());
            }
        }
    }

    if args.tokens.is_empty() && !args.full {
        render_group_overview(group, &ctx, &mut out).map_err(write_err)
    } else {
        usage_command_group(group, args.full, &mut out).map_err(write_err)
    }
}

fn run_resolve(session: &Session, args: ResolveArgs) -> Result<(), String> {
    let mut ctx = session.context();
    let mut group = &session.table.root;
    let mut words = args.words.as_slice();

    let node = loop {
        let Some((word, rest)) = words.split_first() else {
            // A group needs a command.
            usage_command_group(group, false, &mut io::stderr().lock()).map_err(write_err)?;
            std::process::exit(1);
        };
        if word == "--help" {
            return help_command_group(group, rest, &mut io::stdout().lock()).map_err(write_err);
        }

        let node = resolve_or_exit(&ctx, group, word);
        ctx = ctx.descend(&node.token);
        words = rest;
        match &node.group {
            Some(nested) => group = nested,
            None => break node,
        }
    };

    let positional = match clean_args_no_options(node, words) {
        Ok(positional) => positional,
        Err(ArgsError::HelpRequested) => {
            return usage_command(node, true, &mut io::stdout().lock())
                .map(drop)
                .map_err(write_err);
        }
        Err(ArgsError::UnknownOption(bad)) => usage_unknown_option(node, &bad),
    };

    let given = positional.len();
    if let Some(expected) = args.exact_args {
        ctx.check_argc_exact(given, expected).map_err(|err| err.to_string())?;
    }
    if let Some(expected) = args.min_args {
        ctx.check_argc_min(given, expected).map_err(|err| err.to_string())?;
    }
    if let Some(expected) = args.max_args {
        ctx.check_argc_max(given, expected).map_err(|err| err.to_string())?;
    }

    println!("command: {}", ctx.program());
    for arg in positional {
        println!("  {arg}");
    }
    Ok(())
}

fn run_features(session: &Session, args: FeaturesArgs) -> Result<(), String> {
    print_features(&session.features(), &args.prefix).map_err(write_err)
}

fn run_validate(session: &Session) -> Result<(), String> {
    let errors = validate_table(&session.table);
    if errors.is_empty() {
        println!(
            "Command table '{}' is valid ({} commands).",
            session.table.program,
            session.table.command_count()
        );
        return Ok(());
    }

    for err in &errors {
        eprintln!("  {err}");
    }
    Err(format!("{} validation error(s)", errors.len()))
}

fn run_dump(session: &Session, args: DumpArgs) -> Result<(), String> {
    let format: TableFormat = args.format.into();
    let text = format.render_table(&session.table).map_err(|err| err.to_string())?;
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes()).map_err(write_err)?;
    if !text.ends_with('\n') {
        writeln!(out).map_err(write_err)?;
    }
    Ok(())
}
