//! A DPLL-style propositional SAT engine: unit propagation, chronological
//! backtracking, and model enumeration by blocking-clause refinement.
//!
//! No conflict-driven learning, no watched literals, no restarts — see
//! `Cnf` for the public entry point.

pub mod dimacs;
pub mod error;
pub mod numbering;

mod cnf;
mod enumerate;
mod lit;
mod scan;
mod search;
mod trace;
mod valuation;

pub use cnf::Cnf;
pub use enumerate::enumerate_models;
pub use error::{DissatError, Result};
pub use lit::{Lit, Var};
pub use numbering::Numbering;
pub use search::{Model, SolveResult};
