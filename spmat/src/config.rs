//! Run configuration shared by the loader, printer and CLI

use clap::ValueEnum;
use spmat_core::DuplicatePolicy;

/// Numeric type used for matrix values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueType {
    /// 64-bit signed integers
    #[default]
    Int,
    /// 64-bit floating point
    Float,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Sparse Matrix Result:` banner followed by `(row,col,value)` lines
    #[default]
    Text,
    /// A single JSON object with dimensions and sorted entries
    Json,
}

/// Options for one load/compute/print cycle
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Resolution of repeated coordinates within one input file
    pub duplicate_policy: DuplicatePolicy,
    /// Element type the inputs are parsed as
    pub value_type: ValueType,
    /// Result rendering
    pub output_format: OutputFormat,
}

impl RunConfig {
    /// Set the duplicate coordinate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the element type
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}

/// Log filter directive for a `-v` count
///
/// `None` leaves the choice to `RUST_LOG`, falling back to `warn`.
pub fn log_filter_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}
