//! Partial valuation and decision trail: current assignment, unassigned
//! pool, and backtrack history.

use fixedbitset::FixedBitSet;

use crate::lit::{Lit, Var};
use crate::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrailKind {
    Decision,
    Forced,
}

impl TrailKind {
    fn letter(self) -> char {
        match self {
            TrailKind::Decision => 'd',
            TrailKind::Forced => 'f',
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    var: Var,
    kind: TrailKind,
}

/// Outcome of [`Valuation::guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Guess {
    Ok,
    NoMore,
}

/// Outcome of [`Valuation::backtrack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backtrack {
    Ok,
    Exhausted,
}

/// The current assignment, the pool of unassigned variables, and the trail
/// recording how each currently-assigned variable got its value.
pub(crate) struct Valuation {
    num_vars: u32,
    assignment: Vec<Option<bool>>,
    unassigned: FixedBitSet,
    trail: Vec<TrailEntry>,
    logging: bool,
}

impl Valuation {
    /// Creates an empty valuation for `num_vars` variables. Emits `INIT`
    /// when `logging` is enabled.
    pub fn new(num_vars: u32, logging: bool) -> Self {
        let n = num_vars as usize;
        let mut unassigned = FixedBitSet::with_capacity(n);
        for i in 0..n {
            unassigned.insert(i);
        }

        let valuation = Valuation {
            num_vars,
            assignment: vec![None; n],
            unassigned,
            trail: Vec::new(),
            logging,
        };

        if valuation.logging {
            trace::emit_init(&valuation.render_trail());
        }

        valuation
    }

    pub fn is_assigned(&self, lit: Lit) -> bool {
        self.assignment[lit.var().index()].is_some()
    }

    /// Panics if `lit`'s variable has no binding.
    pub fn is_true(&self, lit: Lit) -> bool {
        let value = self.assignment[lit.var().index()]
            .unwrap_or_else(|| panic!("variable {} is unassigned", lit.var()));
        value == lit.polarity()
    }

    /// Picks the lowest-indexed unassigned variable and assigns it
    /// `initial_value`. Fixed, deterministic policy so runs are repeatable.
    pub fn guess(&mut self, initial_value: bool) -> Guess {
        let Some(idx) = self.unassigned.ones().next() else {
            return Guess::NoMore;
        };

        let var = Var::new(idx as u32 + 1);
        self.assign(var, initial_value);
        self.unassigned.set(idx, false);
        self.trail.push(TrailEntry {
            var,
            kind: TrailKind::Decision,
        });

        if self.logging {
            trace::emit_guess(&self.render_trail());
        }

        Guess::Ok
    }

    /// Forces `lit` true. Precondition: `lit`'s variable is unassigned;
    /// violating it is a programmer error (`ForcePreconditionViolated`).
    pub fn force(&mut self, lit: Lit) {
        let var = lit.var();
        debug_assert!(
            self.unassigned.contains(var.index()),
            "force precondition violated: {var} is already assigned"
        );

        self.assign(var, lit.polarity());
        self.unassigned.set(var.index(), false);
        self.trail.push(TrailEntry {
            var,
            kind: TrailKind::Forced,
        });

        if self.logging {
            trace::emit_unitprop(&self.render_trail());
        }
    }

    /// Pops forced entries until a decision is found, flips it, and
    /// rewrites it as forced. Returns `Exhausted` if the trail runs out.
    pub fn backtrack(&mut self) -> Backtrack {
        let result = loop {
            match self.trail.pop() {
                Some(TrailEntry {
                    var,
                    kind: TrailKind::Forced,
                }) => {
                    self.unassign(var);
                }
                Some(TrailEntry {
                    var,
                    kind: TrailKind::Decision,
                }) => {
                    let current = self.assignment[var.index()]
                        .expect("decision variable must be assigned");
                    self.assignment[var.index()] = Some(!current);
                    self.trail.push(TrailEntry {
                        var,
                        kind: TrailKind::Forced,
                    });
                    break Backtrack::Ok;
                }
                None => break Backtrack::Exhausted,
            }
        };

        if self.logging {
            trace::emit_backtrack(&self.render_trail());
        }

        result
    }

    /// A stable snapshot of the current assignment, keyed by variable
    /// number.
    pub fn assignment(&self) -> std::collections::HashMap<u32, bool> {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(idx, value)| value.map(|v| (idx as u32 + 1, v)))
            .collect()
    }

    pub fn total_vars(&self) -> u32 {
        self.num_vars
    }

    fn assign(&mut self, var: Var, value: bool) {
        self.assignment[var.index()] = Some(value);
    }

    fn unassign(&mut self, var: Var) {
        self.assignment[var.index()] = None;
        self.unassigned.set(var.index(), true);
    }

    fn render_trail(&self) -> String {
        trace::render_trail(self.trail.iter().map(|entry| {
            let value = self.assignment[entry.var.index()]
                .expect("trail entries always name currently-assigned variables");
            (entry.var.get(), entry.kind.letter(), value)
        }))
    }
}
