//! The `fact` command.

use argtree::{Outcome, table};

use super::numeric;

/// Handler for the root-level `fact` command; owns the nested table.
pub fn command() -> impl Fn(&[String]) -> Outcome {
    let table = table! {
        pred numeric::is_out_of_range_integer => out_of_range,
        pred numeric::is_non_negative_integer => calculate,
        noarg => missing_argument,
        anyarg => rejected,
    };
    move |view: &[String]| table.dispatch(view, 0)
}

fn calculate(view: &[String]) -> Outcome {
    let Ok(n) = view[0].parse::<i64>() else {
        return Outcome::Invalid;
    };
    println!("{}", fact(n));
    Outcome::after(view.len(), 0)
}

fn out_of_range(view: &[String]) -> Outcome {
    println!("Fact argument {} out of range. Try a non-negative integer closer to zero.", view[0]);
    Outcome::Invalid
}

fn missing_argument(_: &[String]) -> Outcome {
    println!("No argument provided to fact command.");
    Outcome::Invalid
}

fn rejected(view: &[String]) -> Outcome {
    println!("Fact argument {} is not a non-negative integer.", view[0]);
    Outcome::Invalid
}

/// n factorial (n!).
fn fact(n: i64) -> i64 {
    debug_assert!(n >= 0);
    (1..=n).product()
}
