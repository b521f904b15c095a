//! Error taxonomy.
//!
//! Kinds reachable from user input are modeled here and propagated with
//! `?`; kinds that can only arise from a violated internal invariant
//! (an unassigned-variable read, a `force` precondition violation) stay as
//! `debug_assert!` panics in the modules that own those invariants.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DissatError {
    #[error("clause must contain at least one literal")]
    MalformedClause,

    #[error("literal cannot be zero")]
    MalformedLiteral,

    #[error("unknown variable number: {0}")]
    UnknownNumber(u32),

    #[error("malformed DIMACS input: {0}")]
    DimacsParseError(String),
}

pub type Result<T> = std::result::Result<T, DissatError>;
