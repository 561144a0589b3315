//! The `fib` command: Fibonacci with configurable seed values.
//!
//! The sub-table mixes literal keys (`f0`, `f1`) with numeric predicates, so
//! seed assignments and the computation compose in one command line:
//! `fib f0 2 f1 3 10`. The seed state lives in the command handler, not in
//! process-wide globals; it is shared with the table's handlers through
//! `Rc<Cell<_>>` and persists across invocations of the same command.

use std::cell::Cell;
use std::rc::Rc;

use argtree::{Outcome, Table, table};

use super::numeric;

struct Seeds {
    f0: Cell<i64>,
    f1: Cell<i64>,
}

/// Handler for the root-level `fib` command; owns the nested table and the
/// seed state (defaults: fibonacci(0) = 0, fibonacci(1) = 1).
pub fn command() -> impl Fn(&[String]) -> Outcome {
    let seeds = Rc::new(Seeds { f0: Cell::new(0), f1: Cell::new(1) });
    let table = sub_table(&seeds);
    move |view: &[String]| table.dispatch(view, 0)
}

fn sub_table(seeds: &Rc<Seeds>) -> Table {
    let set_f0 = {
        let seeds = Rc::clone(seeds);
        move |view: &[String]| assign_seed(view, |z| seeds.f0.set(z))
    };
    let set_f1 = {
        let seeds = Rc::clone(seeds);
        move |view: &[String]| assign_seed(view, |z| seeds.f1.set(z))
    };
    let calc = {
        let seeds = Rc::clone(seeds);
        move |view: &[String]| calculate(view, &seeds)
    };
    table! {
        "f0" => set_f0,
        "f1" => set_f1,
        pred numeric::is_out_of_range_integer => out_of_range,
        pred numeric::is_non_negative_integer => calc,
        noarg => missing_argument,
        anyarg => rejected,
    }
}

/// `view[0]` is the seed name (`f0` or `f1`); the value to assign follows
/// it, so a successful assignment consumes two tokens.
fn assign_seed(view: &[String], assign: impl Fn(i64)) -> Outcome {
    if view.len() == 1 {
        println!("No argument provided to fib/{} command.", view[0]);
        return Outcome::Invalid;
    }
    match view[1].parse::<i64>() {
        Ok(z) => {
            assign(z);
            Outcome::after(view.len(), 1)
        }
        Err(_) if numeric::is_integer(&view[1]) => {
            println!(
                "fib/{} argument \"{}\" out of range. Try an integer closer to zero.",
                view[0], view[1]
            );
            Outcome::Invalid
        }
        Err(_) => {
            println!("fib/{} argument \"{}\" is not an integer.", view[0], view[1]);
            Outcome::Invalid
        }
    }
}

fn calculate(view: &[String], seeds: &Seeds) -> Outcome {
    let Ok(n) = view[0].parse::<i64>() else {
        return Outcome::Invalid;
    };
    println!("{}", fib(n, seeds.f0.get(), seeds.f1.get()));
    Outcome::after(view.len(), 0)
}

fn out_of_range(view: &[String]) -> Outcome {
    println!("Fib argument {} out of range. Try a non-negative integer closer to zero.", view[0]);
    Outcome::Invalid
}

fn missing_argument(_: &[String]) -> Outcome {
    println!("No argument provided to fib command.");
    Outcome::Invalid
}

fn rejected(view: &[String]) -> Outcome {
    println!(
        "Fib argument \"{}\" is invalid - not \"f0\", nor \"f1\", nor a non-negative integer.",
        view[0]
    );
    Outcome::Invalid
}

/// The n-th element of the series whose first two elements are `f0`, `f1`.
fn fib(n: i64, f0: i64, f1: i64) -> i64 {
    debug_assert!(n >= 0);
    match n {
        0 => f0,
        1 => f1,
        _ => {
            let (mut prev, mut cur) = (f0, f1);
            for _ in 2..=n {
                let next = prev + cur;
                prev = cur;
                cur = next;
            }
            cur
        }
    }
}
