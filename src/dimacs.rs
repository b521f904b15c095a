//! DIMACS CNF text format: parsing (reading) and printing (writing).
//!
//! Header line is `p cnf V K`; `c`-prefixed lines are comments; each clause
//! is a whitespace-separated list of literals terminated by a literal `0`.

use std::fmt::Write as _;

use crate::error::{DissatError, Result};

pub struct Dimacs;

impl Dimacs {
    /// Parses DIMACS text into a list of clauses (as raw literal vectors).
    /// The `p cnf V K` header, if present, is only used to skip past; the
    /// variable count and clause count returned to the caller are always
    /// recomputed from the clauses themselves.
    pub fn parse(input: &str) -> Result<Vec<Vec<i32>>> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with('c'))
            .filter(|line| !line.starts_with('p'))
            .map(|line| -> Result<Vec<i32>> {
                line.split_whitespace()
                    .map(|tok| {
                        tok.parse::<i32>()
                            .map_err(|e| DissatError::DimacsParseError(e.to_string()))
                    })
                    .filter(|n| !matches!(n, Ok(0)))
                    .collect()
            })
            .collect()
    }

    /// Renders clauses as a DIMACS `p cnf V K` document.
    pub fn print(num_vars: u32, clauses: &[Vec<i32>]) -> String {
        let mut out = String::new();
        writeln!(out, "p cnf {} {}", num_vars, clauses.len()).unwrap();
        for clause in clauses {
            for lit in clause {
                write!(out, "{lit} ").unwrap();
            }
            writeln!(out, "0").unwrap();
        }
        out
    }
}
