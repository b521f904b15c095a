//! CNF container: accumulates clauses, tracks the maximum variable index,
//! evaluates total assignments, and bridges to DIMACS I/O and the search
//! driver.

use std::collections::HashMap;

use crate::dimacs::Dimacs;
use crate::error::{DissatError, Result};
use crate::lit::Lit;
use crate::search::{self, SolveResult};

/// A CNF problem: `clauses()` is the clause set, `num_vars()` is the
/// highest variable index mentioned by any clause added so far.
#[derive(Default, Clone)]
pub struct Cnf {
    clauses: Vec<Vec<Lit>>,
    num_vars: u32,
}

impl Cnf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub(crate) fn clauses(&self) -> &[Vec<Lit>] {
        &self.clauses
    }

    /// Appends a clause, growing the tracked variable count to cover its
    /// largest variable. Fails with `MalformedClause` on an empty clause or
    /// `MalformedLiteral` on a zero literal.
    pub fn add<I>(&mut self, clause: I) -> Result<()>
    where
        I: IntoIterator<Item = i32>,
    {
        let raw: Vec<i32> = clause.into_iter().collect();

        if raw.is_empty() {
            return Err(DissatError::MalformedClause);
        }
        if raw.contains(&0) {
            return Err(DissatError::MalformedLiteral);
        }

        let lits: Vec<Lit> = raw.into_iter().map(Lit::new).collect();
        let max_var = lits
            .iter()
            .map(|l| l.var().get())
            .max()
            .expect("non-empty clause has a max literal");

        self.num_vars = self.num_vars.max(max_var);
        self.clauses.push(lits);
        Ok(())
    }

    pub(crate) fn add_lits(&mut self, clause: Vec<Lit>) {
        let max_var = clause
            .iter()
            .map(|l| l.var().get())
            .max()
            .expect("non-empty clause has a max literal");
        self.num_vars = self.num_vars.max(max_var);
        self.clauses.push(clause);
    }

    /// True iff every clause has at least one literal true under `assignment`.
    pub fn evaluate(&self, assignment: &HashMap<u32, bool>) -> bool {
        self.clauses.iter().all(|clause| {
            clause.iter().any(|lit| {
                let value = assignment
                    .get(&lit.var().get())
                    .copied()
                    .unwrap_or_else(|| panic!("assignment missing variable {}", lit.var()));
                value == lit.polarity()
            })
        })
    }

    /// Delegates to the search driver.
    pub fn solve(&self, unit_prop: bool, logging: bool) -> SolveResult {
        search::solve(self, unit_prop, logging)
    }

    pub fn from_dimacs(input: &str) -> Result<Cnf> {
        let mut cnf = Cnf::new();
        for clause in Dimacs::parse(input)? {
            cnf.add(clause)?;
        }
        Ok(cnf)
    }

    pub fn to_dimacs(&self) -> String {
        let raw: Vec<Vec<i32>> = self
            .clauses
            .iter()
            .map(|clause| clause.iter().map(|l| l.get()).collect())
            .collect();
        Dimacs::print(self.num_vars, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tracks_max_variable() {
        let mut cnf = Cnf::new();
        cnf.add([1, -3]).unwrap();
        cnf.add([2]).unwrap();
        assert_eq!(cnf.num_vars(), 3);
        assert_eq!(cnf.num_clauses(), 2);
    }

    #[test]
    fn empty_clause_is_malformed() {
        let mut cnf = Cnf::new();
        assert_eq!(cnf.add(Vec::<i32>::new()), Err(DissatError::MalformedClause));
    }

    #[test]
    fn zero_literal_is_malformed() {
        let mut cnf = Cnf::new();
        assert_eq!(cnf.add([1, 0]), Err(DissatError::MalformedLiteral));
    }

    #[test]
    fn evaluate_checks_every_clause() {
        let mut cnf = Cnf::new();
        cnf.add([1, 2]).unwrap();
        cnf.add([-1, 2]).unwrap();

        let mut assignment = HashMap::new();
        assignment.insert(1, false);
        assignment.insert(2, true);
        assert!(cnf.evaluate(&assignment));

        assignment.insert(2, false);
        assert!(!cnf.evaluate(&assignment));
    }

    #[test]
    fn dimacs_round_trip() {
        let mut cnf = Cnf::new();
        cnf.add([1, -2]).unwrap();
        cnf.add([-1, 2, 3]).unwrap();

        let text = cnf.to_dimacs();
        let parsed = Cnf::from_dimacs(&text).unwrap();
        assert_eq!(parsed.num_vars(), cnf.num_vars());
        assert_eq!(parsed.num_clauses(), cnf.num_clauses());
    }
}
