//! Resource allocation encoder: assigns tasks to machines subject to
//! conflict constraints, enumerating every valid allocation.
//!
//! `(task, machine)` pairs are recovered from a side table keyed by
//! numeric variable rather than by parsing digits back out of the
//! generated identifier, which would break once variable counts reach two
//! digits.

use std::collections::HashMap;

use dissat::{enumerate_models, Cnf, Numbering};

fn assignment_name(task: usize, machine: usize) -> String {
    format!("assign{task}to{machine}")
}

fn var_of(
    numbering: &mut Numbering,
    table: &mut HashMap<u32, (usize, usize)>,
    task: usize,
    machine: usize,
) -> i32 {
    let var = numbering.number_of(&assignment_name(task, machine));
    table.entry(var).or_insert((task, machine));
    var as i32
}

fn resource_allocation(num_tasks: usize, num_machines: usize, conflicts: &[(usize, usize)]) {
    let mut cnf = Cnf::new();
    let mut numbering = Numbering::new();
    let mut table: HashMap<u32, (usize, usize)> = HashMap::new();

    // Conflicting tasks may not share a machine.
    for &(x, y) in conflicts {
        for z in 0..num_machines {
            let var1 = var_of(&mut numbering, &mut table, x, z);
            let var2 = var_of(&mut numbering, &mut table, y, z);
            cnf.add([-var1, -var2]).unwrap();
        }
    }

    // Every task must be assigned to at least one machine.
    for task in 0..num_tasks {
        let clause: Vec<i32> = (0..num_machines)
            .map(|machine| var_of(&mut numbering, &mut table, task, machine))
            .collect();
        cnf.add(clause).unwrap();
    }

    let models = enumerate_models(&mut cnf, true, false);
    if models.is_empty() {
        println!("No allocation possible");
        return;
    }

    for (i, model) in models.iter().enumerate() {
        println!("For Solution {}", i + 1);

        let mut assigned: Vec<(usize, usize)> = model
            .assignment()
            .iter()
            .filter(|&(_, &value)| value)
            .filter_map(|(var, _)| table.get(var).copied())
            .collect();
        assigned.sort();

        for (task, machine) in assigned {
            println!("Task {task} is assigned to machine:  {machine}");
        }
    }
}

fn main() {
    println!("Test 1: 3 tasks, 1 machine, no conflicts");
    resource_allocation(3, 1, &[]);
    println!();

    println!("Test 2: 3 tasks, 1 machine, tasks 0/1 conflict");
    resource_allocation(3, 1, &[(0, 1)]);
    println!();

    println!("Test 3: 3 tasks, 3 machines, tasks 0/1, 1/2 and 0/2 conflict");
    resource_allocation(3, 3, &[(0, 1), (1, 2), (0, 2)]);
}
