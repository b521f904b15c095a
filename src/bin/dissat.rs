//! CLI front-end: runs the solver against a DIMACS file.

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use dissat::{Cnf, SolveResult};

/// Decide satisfiability of a DIMACS CNF file.
#[derive(Parser, Debug)]
#[command(name = "dissat", version, about)]
struct Args {
    /// Path to a DIMACS CNF file.
    path: String,

    /// Disable unit propagation (affects performance and trace, not
    /// satisfiability).
    #[arg(long)]
    no_unit_prop: bool,

    /// Enumerate all models instead of stopping at the first one.
    #[arg(long)]
    enumerate: bool,

    /// Increase trace verbosity (INIT/GUESS/UNITPROP/BACKTRACK events).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let text = match fs::read_to_string(&args.path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error reading {}: {e}", args.path);
            return ExitCode::from(2);
        }
    };

    let mut cnf = match Cnf::from_dimacs(&text) {
        Ok(cnf) => cnf,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let unit_prop = !args.no_unit_prop;
    let logging = args.verbose > 0;

    if args.enumerate {
        let models = dissat::enumerate_models(&mut cnf, unit_prop, logging);
        if models.is_empty() {
            println!("s UNSATISFIABLE");
        } else {
            for (i, model) in models.iter().enumerate() {
                println!("c model {}", i + 1);
                println!("s SATISFIABLE");
                print_solution_line(model.as_vec());
            }
        }
        return ExitCode::SUCCESS;
    }

    match cnf.solve(unit_prop, logging) {
        SolveResult::Unsat => {
            println!("s UNSATISFIABLE");
            ExitCode::SUCCESS
        }
        SolveResult::Sat(model) => {
            println!("s SATISFIABLE");
            print_solution_line(model.as_vec());
            ExitCode::SUCCESS
        }
    }
}

fn print_solution_line(lits: Vec<i32>) {
    let rendered: Vec<String> = lits.iter().map(i32::to_string).collect();
    println!("v {} 0", rendered.join(" "));
}
