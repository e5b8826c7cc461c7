use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pn_graph::{Category, Feature};
use pn_inp::{LoadError, ParseOptions, ParseOutcome, Summary};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{count} problem(s) found in {path}")]
    Problems { path: PathBuf, count: usize },
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "pn-cli")]
#[command(about = "pipenet CLI - Read network model files into typed feature graphs", long_about = None)]
struct Cli {
    /// Parser options file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a network file and print features and errors
    Parse {
        /// Path to the network file
        network_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write only the feature collection as JSON
    Features {
        /// Path to the network file
        network_path: PathBuf,
        /// Output JSON file path
        output: PathBuf,
    },
    /// Report parse errors and a summary
    Check {
        /// Path to the network file
        network_path: PathBuf,
        /// Exit with failure when any error is found
        #[arg(long)]
        strict: bool,
    },
    /// List features of one category
    List {
        /// Path to the network file
        network_path: PathBuf,
        /// Category to list
        #[arg(value_enum)]
        category: CategoryArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Junction,
    Tank,
    Reservoir,
    Pipe,
    Valve,
    Pump,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Junction => Category::Junction,
            CategoryArg::Tank => Category::Tank,
            CategoryArg::Reservoir => Category::Reservoir,
            CategoryArg::Pipe => Category::Pipe,
            CategoryArg::Valve => Category::Valve,
            CategoryArg::Pump => Category::Pump,
        }
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match &cli.config {
        Some(path) => pn_inp::load_options(path)?,
        None => ParseOptions::default(),
    };

    match cli.command {
        Commands::Parse {
            network_path,
            format,
            output,
        } => cmd_parse(&network_path, &options, format, output.as_deref()),
        Commands::Features {
            network_path,
            output,
        } => cmd_features(&network_path, &options, &output),
        Commands::Check {
            network_path,
            strict,
        } => cmd_check(&network_path, &options, strict),
        Commands::List {
            network_path,
            category,
        } => cmd_list(&network_path, &options, category.into()),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(network_path: &Path, options: &ParseOptions) -> CliResult<ParseOutcome> {
    info!(path = %network_path.display(), "loading network");
    Ok(pn_inp::load_file(network_path, options)?)
}

fn cmd_parse(
    network_path: &Path,
    options: &ParseOptions,
    format: Format,
    output: Option<&Path>,
) -> CliResult<()> {
    let outcome = load(network_path, options)?;
    let text = match format {
        Format::Json => outcome.to_json()?,
        Format::Yaml => outcome.to_yaml()?,
    };

    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!(
            "✓ Wrote {} features and {} errors to {}",
            outcome.graph.len(),
            outcome.errors.len(),
            path.display()
        );
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_features(network_path: &Path, options: &ParseOptions, output: &Path) -> CliResult<()> {
    let outcome = load(network_path, options)?;
    outcome.write_features_json(output)?;
    println!(
        "✓ Exported {} features to {}",
        outcome.graph.len(),
        output.display()
    );
    if !outcome.is_clean() {
        eprintln!(
            "  {} problem(s) found; run `check` for details",
            outcome.errors.len()
        );
    }
    Ok(())
}

fn cmd_check(network_path: &Path, options: &ParseOptions, strict: bool) -> CliResult<()> {
    println!("Checking network: {}", network_path.display());
    let outcome = load(network_path, options)?;

    for err in &outcome.errors {
        println!("  {:?}: {}", err.kind, err);
    }
    println!("{}", Summary::of(&outcome));

    if outcome.is_clean() {
        println!("✓ No problems found");
    } else if strict {
        return Err(CliError::Problems {
            path: network_path.to_path_buf(),
            count: outcome.errors.len(),
        });
    }
    Ok(())
}

fn cmd_list(network_path: &Path, options: &ParseOptions, category: Category) -> CliResult<()> {
    let outcome = load(network_path, options)?;
    let matching: Vec<_> = outcome
        .graph
        .features()
        .iter()
        .filter(|f| f.category() == category)
        .collect();

    if matching.is_empty() {
        println!("No {} features found", category);
        return Ok(());
    }

    println!("{} features:", category);
    for feature in matching {
        match feature {
            Feature::Node(node) => println!("  {} at {}", node.identifier, node.geometry),
            Feature::Link(link) => println!(
                "  {} ({} -> {}, {} points)",
                link.identifier,
                link.start_node_id,
                link.end_node_id,
                link.geometry.len()
            ),
        }
    }
    Ok(())
}
