//! DPLL search driver.
//!
//! `PROPAGATE -> DECIDE -> BACKTRACK` state machine. No activity heuristic,
//! no conflict-driven learning, no watched literals — the initial guess
//! polarity is always `true`, and the only thing backtracking does is flip
//! the most recent still-live decision.

use std::collections::HashMap;
use std::fmt;

use crate::cnf::Cnf;
use crate::scan::{sweep, SweepResult};
use crate::valuation::{Backtrack, Guess, Valuation};

/// A satisfying total assignment, returned on `Sat`.
pub struct Model {
    num_vars: u32,
    assignment: HashMap<u32, bool>,
}

impl Model {
    fn from_valuation(valuation: &Valuation) -> Self {
        Model {
            num_vars: valuation.total_vars(),
            assignment: valuation.assignment(),
        }
    }

    /// Truth value of `l` under this model; an unmentioned variable
    /// (possible only when no clause names it) is treated as `false`.
    pub fn lit(&self, l: i32) -> bool {
        assert_ne!(l, 0, "literal cannot be zero");
        let value = self.assignment.get(&(l.unsigned_abs())).copied().unwrap_or(false);
        if l > 0 {
            value
        } else {
            !value
        }
    }

    pub fn assignment(&self) -> &HashMap<u32, bool> {
        &self.assignment
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Signed-literal rendering of this model, one entry per variable
    /// `1..=num_vars`, unmentioned variables canonicalized to `false`.
    pub fn as_vec(&self) -> Vec<i32> {
        (1..=self.num_vars)
            .map(|v| if self.lit(v as i32) { v as i32 } else { -(v as i32) })
            .collect()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Model").field(&self.as_vec()).finish()
    }
}

/// Either `Unsat` or a satisfying `Model`.
#[derive(Debug)]
pub enum SolveResult {
    Unsat,
    Sat(Model),
}

impl SolveResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, SolveResult::Sat(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SolveResult::Unsat)
    }

    pub fn unwrap_sat(self) -> Model {
        match self {
            SolveResult::Sat(model) => model,
            SolveResult::Unsat => panic!("solve result is UNSAT"),
        }
    }
}

pub(crate) fn solve(cnf: &Cnf, unit_prop: bool, logging: bool) -> SolveResult {
    let mut valuation = Valuation::new(cnf.num_vars(), logging);

    loop {
        match sweep(cnf.clauses(), &mut valuation, unit_prop) {
            SweepResult::Sat => return SolveResult::Sat(Model::from_valuation(&valuation)),
            SweepResult::Updated => continue,
            SweepResult::Unsat => {
                if valuation.backtrack() == Backtrack::Exhausted {
                    return SolveResult::Unsat;
                }
            }
            SweepResult::Unknown => match valuation.guess(true) {
                Guess::Ok => continue,
                // Defensive path: sweep said Unknown but nothing is left
                // to decide.
                Guess::NoMore => {
                    if valuation.backtrack() == Backtrack::Exhausted {
                        return SolveResult::Unsat;
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cnf_from(clauses: &[&[i32]]) -> Cnf {
        let mut cnf = Cnf::new();
        for &clause in clauses {
            cnf.add(clause.iter().copied()).unwrap();
        }
        cnf
    }

    #[test]
    fn s1_unit_clause_is_sat() {
        let cnf = cnf_from(&[&[1]]);
        let model = cnf.solve(true, false).unwrap_sat();
        assert!(model.lit(1));
    }

    #[test]
    fn s2_contradictory_units_are_unsat() {
        let cnf = cnf_from(&[&[1], &[-1]]);
        assert!(cnf.solve(true, false).is_unsat());
    }

    #[test]
    fn s3_all_polarities_excluded_is_unsat() {
        let cnf = cnf_from(&[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]]);
        assert!(cnf.solve(true, false).is_unsat());
    }

    #[test]
    fn s4_package_linear_chain_is_sat() {
        // progA=1 libC=2 libD=3 libE1=4 libE2=5
        let cnf = cnf_from(&[
            &[-4, -5],
            &[-1, 2],
            &[-1, 3],
            &[-2, 4],
            &[-3, 4],
            &[1],
        ]);
        let model = cnf.solve(true, false).unwrap_sat();
        assert!(model.lit(1));
        assert!(model.lit(2));
        assert!(model.lit(3));
        assert!(model.lit(4));
        assert!(!model.lit(5));
    }

    #[test]
    fn s5_package_unsolvable_diamond_is_unsat() {
        let cnf = cnf_from(&[
            &[-4, -5],
            &[-1, 2],
            &[-1, 3],
            &[-2, 5],
            &[-3, 4],
            &[1],
        ]);
        assert!(cnf.solve(true, false).is_unsat());
    }

    #[test]
    fn soundness_holds_on_every_sat_result() {
        let cnf = cnf_from(&[&[1, -2, 3], &[-1, 2], &[-3, -1]]);
        if let SolveResult::Sat(model) = cnf.solve(true, false) {
            assert!(cnf.evaluate(model.assignment()));
        }
    }

    #[test]
    fn unit_prop_flag_does_not_change_satisfiability() {
        let cnf = cnf_from(&[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]]);
        assert_eq!(
            cnf.solve(true, false).is_unsat(),
            cnf.solve(false, false).is_unsat()
        );
    }

    #[test]
    fn idempotent_resolve() {
        let cnf = cnf_from(&[&[1, 2], &[-1, 3]]);
        let m1 = cnf.solve(true, false).unwrap_sat();
        let m2 = cnf.solve(true, false).unwrap_sat();
        assert!(cnf.evaluate(m1.assignment()));
        assert!(cnf.evaluate(m2.assignment()));
    }
}
