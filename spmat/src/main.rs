use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use spmat::{
    load_matrix, load_pair, log_filter_directive, print_info, print_query, print_result,
    run_query, run_session, select_query, DuplicatePolicy, MatrixInfo, Operation, OutputFormat,
    Result, RunConfig, SparseAccess, Value, ValueType,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Sparse matrix calculator for (row,col,value) triple files")]
struct Cli {
    /// Numeric type of matrix values
    #[arg(long, value_enum, default_value_t = ValueType::Int, global = true)]
    value_type: ValueType,

    /// How repeated coordinates within one file are resolved
    #[arg(long, value_enum, default_value_t = Duplicates::Last, global = true)]
    duplicates: Duplicates,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Duplicates {
    /// Keep the last occurrence
    Last,
    /// Sum all occurrences
    Sum,
}

impl From<Duplicates> for DuplicatePolicy {
    fn from(value: Duplicates) -> Self {
        match value {
            Duplicates::Last => DuplicatePolicy::LastWins,
            Duplicates::Sum => DuplicatePolicy::Accumulate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices
    Add { first: PathBuf, second: PathBuf },
    /// Subtract the second matrix from the first
    Sub { first: PathBuf, second: PathBuf },
    /// Multiply the first matrix by the second
    Mul { first: PathBuf, second: PathBuf },
    /// Load two matrices and choose operations from a menu
    Run { first: PathBuf, second: PathBuf },
    /// Query entries of a matrix file
    Query {
        /// Matrix file
        file: PathBuf,

        /// Row to query
        #[arg(long)]
        row: Option<usize>,

        /// Column to query
        #[arg(long)]
        col: Option<usize>,

        /// Row range (format: start:end)
        #[arg(long, conflicts_with_all = ["row", "col"])]
        row_range: Option<String>,
    },
    /// Show matrix dimensions and fill
    Info {
        /// Matrix file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = match log_filter_directive(cli.verbose) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::default()
        .with_duplicate_policy(cli.duplicates.into())
        .with_value_type(cli.value_type)
        .with_output_format(if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        });
    debug!(?config, "starting");

    let outcome = match config.value_type {
        ValueType::Int => execute::<i64>(&cli.command, &config),
        ValueType::Float => execute::<f64>(&cli.command, &config),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn execute<T: Value>(command: &Commands, config: &RunConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Add { first, second } => {
            compute::<T, _>(Operation::Addition, first, second, config, &mut out)
        }
        Commands::Sub { first, second } => {
            compute::<T, _>(Operation::Subtraction, first, second, config, &mut out)
        }
        Commands::Mul { first, second } => {
            compute::<T, _>(Operation::Multiplication, first, second, config, &mut out)
        }
        Commands::Run { first, second } => {
            let (a, b) = load_pair::<T, _, _>(first, second, config)?;
            run_session(io::stdin().lock(), &mut out, &a, &b, config.output_format)
        }
        Commands::Query {
            file,
            row,
            col,
            row_range,
        } => {
            let matrix = load_matrix::<T, _>(file, config)?;
            let query = select_query(*row, *col, row_range.as_deref(), matrix.rows())?;
            let hits = run_query(&matrix, &query);
            debug!(?query, hits = hits.len(), "query complete");
            print_query(&mut out, &query, &hits, config.output_format)
        }
        Commands::Info { file } => {
            let matrix = load_matrix::<T, _>(file, config)?;
            let info = MatrixInfo::of(&matrix);
            print_info(&mut out, &file.display().to_string(), &info, config.output_format)
        }
    }
}

fn compute<T: Value, W: Write>(
    operation: Operation,
    first: &Path,
    second: &Path,
    config: &RunConfig,
    out: &mut W,
) -> Result<()> {
    let (a, b) = load_pair::<T, _, _>(first, second, config)?;
    let result = operation.apply(&a, &b)?;
    info!(
        %operation,
        rows = result.rows(),
        cols = result.cols(),
        nnz = result.nnz(),
        "computed result"
    );
    print_result(out, &result, config.output_format)
}
