//! Package installation encoder: conflicts, dependencies, and
//! at-least-one-of requirements compiled down to CNF.

use dissat::{Cnf, Numbering, SolveResult};

struct PackageProblem {
    conflicts: Vec<(&'static str, &'static str)>,
    dependencies: Vec<(&'static str, Vec<&'static str>)>,
    requirements: Vec<Vec<&'static str>>,
}

fn package_installations(problem: &PackageProblem, debugging: bool) {
    let mut cnf = Cnf::new();
    let mut numbering = Numbering::new();

    // No two conflicting packages may both be installed.
    for &(package1, package2) in &problem.conflicts {
        let var1 = numbering.number_of(package1) as i32;
        let var2 = numbering.number_of(package2) as i32;
        cnf.add([-var1, -var2]).unwrap();
    }

    // Installing a package implies installing each of its dependencies.
    for (package1, depends_on) in &problem.dependencies {
        let var1 = numbering.number_of(package1) as i32;
        for package2 in depends_on {
            let var2 = numbering.number_of(package2) as i32;
            cnf.add([-var1, var2]).unwrap();
        }
    }

    // At least one package from each requirement choice must be installed.
    for choice in &problem.requirements {
        let clause: Vec<i32> = choice
            .iter()
            .map(|package| numbering.number_of(package) as i32)
            .collect();
        cnf.add(clause).unwrap();
    }

    if debugging {
        println!("Clauses:");
        print!("{}", cnf.to_dimacs());
    }

    match cnf.solve(true, false) {
        SolveResult::Unsat => println!("No installation possible"),
        SolveResult::Sat(model) => {
            let named = numbering.name_assignment(model.assignment()).unwrap();
            let mut entries: Vec<(String, bool)> = named.into_iter().collect();
            entries.sort();
            println!("{entries:?}");
        }
    }
}

fn main() {
    println!("Test 1: following dependency chains");
    package_installations(
        &PackageProblem {
            conflicts: vec![("libE1", "libE2")],
            dependencies: vec![
                ("progA", vec!["libC", "libD"]),
                ("libC", vec!["libE1"]),
                ("libD", vec!["libE1"]),
            ],
            requirements: vec![vec!["progA"]],
        },
        true,
    );
    println!();

    println!("Test 2: unsolvable diamond dependency");
    package_installations(
        &PackageProblem {
            conflicts: vec![("libE1", "libE2")],
            dependencies: vec![
                ("progA", vec!["libC", "libD"]),
                ("libC", vec!["libE2"]),
                ("libD", vec!["libE1"]),
            ],
            requirements: vec![vec!["progA"]],
        },
        true,
    );
    println!();

    println!("Test 3: upgraded package solves dependency issue");
    package_installations(
        &PackageProblem {
            conflicts: vec![("libE1", "libE2"), ("libD1", "libD2")],
            dependencies: vec![
                ("progA1", vec!["libC", "libD1"]),
                ("progA2", vec!["libC", "libD2"]),
                ("libC", vec!["libE2"]),
                ("libD1", vec!["libE1"]),
                ("libD2", vec!["libE2"]),
            ],
            requirements: vec![vec!["progA1", "progA2"]],
        },
        true,
    );
}
