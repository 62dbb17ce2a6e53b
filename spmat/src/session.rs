//! Interactive operation menu
//!
//! Both operands are loaded once; the user then picks operations until they
//! choose exit or input ends. A failed operation is reported and the menu
//! comes back.

use std::io::{BufRead, Write};

use spmat_core::{Operation, SparseAccess, SparseMatrix};
use tracing::{info, warn};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::printer::print_result;
use crate::Value;

const EXIT_CHOICE: &str = "4";

/// One parsed menu answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Run(Operation::Addition),
            "2" => MenuChoice::Run(Operation::Subtraction),
            "3" => MenuChoice::Run(Operation::Multiplication),
            EXIT_CHOICE => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

fn write_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nChoose an operation:")?;
    for (index, operation) in Operation::ALL.iter().enumerate() {
        writeln!(out, "{}. {operation}", index + 1)?;
    }
    writeln!(out, "{EXIT_CHOICE}. Exit")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

/// Run the menu loop over `input` and `out`
pub fn run_session<R, W, T>(
    input: R,
    out: &mut W,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    output: OutputFormat,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    T: Value,
{
    writeln!(out, "Sparse Matrix Operations")?;
    let mut lines = input.lines();

    loop {
        write_menu(out)?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        match MenuChoice::parse(&line) {
            MenuChoice::Run(operation) => match operation.apply(a, b) {
                Ok(result) => {
                    info!(%operation, nnz = result.nnz(), "operation complete");
                    writeln!(out, "\nResult of {operation}:")?;
                    print_result(out, &result, output)?;
                }
                Err(err) => {
                    warn!(%operation, error = %err, "operation failed");
                    writeln!(out, "Error: {err}")?;
                }
            },
            MenuChoice::Exit => {
                writeln!(out, "Exiting...")?;
                break;
            }
            MenuChoice::Invalid => {
                writeln!(out, "Invalid choice. Please enter a number between 1 and 4.")?;
            }
        }
    }
    Ok(())
}
