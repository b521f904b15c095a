//! Model enumerator: repeated solve with blocking clauses, collecting
//! every total model.

use std::collections::HashSet;

use crate::cnf::Cnf;
use crate::lit::{Lit, Var};
use crate::search::{Model, SolveResult};

/// Solves `cnf` repeatedly, adding a blocking clause after each model,
/// until `Unsat`. Mutates `cnf` in place (the blocking clauses accumulate),
/// matching the external interface's incremental-clause-addition contract.
pub fn enumerate_models(cnf: &mut Cnf, unit_prop: bool, logging: bool) -> Vec<Model> {
    let mut models = Vec::new();

    if cnf.num_vars() == 0 {
        // No variables at all: there is exactly one (empty) model and no
        // literal exists to build a blocking clause from.
        if let SolveResult::Sat(model) = cnf.solve(unit_prop, logging) {
            models.push(model);
        }
        return models;
    }

    pin_unmentioned_variables_false(cnf);

    loop {
        match cnf.solve(unit_prop, logging) {
            SolveResult::Unsat => break,
            SolveResult::Sat(model) => {
                let blocking = blocking_clause(&model);
                cnf.add_lits(blocking);
                models.push(model);
            }
        }
    }

    models
}

/// Forces every variable no clause mentions to `false`, once, before the
/// first solve. Decide always picks the lowest-indexed unassigned variable
/// regardless of relevance, so without this a variable no clause constrains
/// could still get swept into a decision and later flip under pressure from
/// an accumulated blocking clause — producing two "different" models that
/// agree on every variable that actually matters.
fn pin_unmentioned_variables_false(cnf: &mut Cnf) {
    let mentioned: HashSet<u32> = cnf
        .clauses()
        .iter()
        .flatten()
        .map(|lit| lit.var().get())
        .collect();

    for v in 1..=cnf.num_vars() {
        if !mentioned.contains(&v) {
            cnf.add_lits(vec![Lit::from_var_value(Var::new(v), false)]);
        }
    }
}

/// The negation of `model`, canonicalizing unmentioned variables to
/// `false` first, so the blocker always covers the full cube rather than
/// a projection onto only the variables some clause happens to mention.
fn blocking_clause(model: &Model) -> Vec<Lit> {
    (1..=model.num_vars())
        .map(|v| {
            let var = Var::new(v);
            let canonical_value = model.lit(v as i32);
            Lit::from_var_value(var, !canonical_value)
        })
        .collect()
}
