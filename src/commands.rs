//! Demonstration command suite for the `argtree` binary.
//!
//! Each command is a thin consumer of the dispatch engine: a handler that
//! owns a nested [`Table`] and re-enters the engine on the view it received.
//! Together they exercise every engine feature: literal and predicate keys,
//! end-of-input and wildcard fallbacks, multi-token consumption (`fib f0
//! <z>`), and command chaining through the remainder protocol.

#[path = "commands/fact.rs"]
pub mod fact;
#[path = "commands/fib.rs"]
pub mod fib;
#[path = "commands/fizzbuzz.rs"]
pub mod fizzbuzz;
#[path = "commands/numeric.rs"]
pub mod numeric;

#[cfg(test)]
#[path = "commands/tests.rs"]
mod tests;

use argtree::{Outcome, Table, table};

/// Root dispatch table for the binary.
///
/// `prog` is the program name shown by the help command; threading it
/// through construction keeps the handlers free of process-wide globals.
pub fn root(prog: &str) -> Table {
    table! {
        "fizzbuzz" => fizzbuzz::command(),
        "fact" => fact::command(),
        "fib" => fib::command(),
        "help" => help(prog.to_string()),
        noarg => help(prog.to_string()),
        anyarg => unrecognized,
    }
}

/// Usage hint printed by the reporting dispatch after a failure.
pub fn usage(prog: &str) -> String {
    format!("Run \"{prog} help\" for more information.\n")
}

fn help(prog: String) -> impl Fn(&[String]) -> Outcome {
    move |view: &[String]| {
        println!("{}", help_text(&prog));
        Outcome::after(view.len(), 0)
    }
}

fn help_text(prog: &str) -> String {
    format!(
        "{prog}
   fizzbuzz <n>    For some positive (>=1) integer n.
   fact <n>        Factorial of some non-negative integer n (n!).
   fib             Fibonacci series whereby fibonacci(n) = fibonacci(n-1) + fibonacci(n-2)
       f0 <z>      Set fibonacci(0), the zeroth number in the series, to some integer z. 0 by default.
       f1 <z>      Set fibonacci(1), the first number in the series, to some integer z. 1 by default.
       <n>         Find fibonacci(n), the nth number in the series, for some non-negative integer n."
    )
}

fn unrecognized(view: &[String]) -> Outcome {
    println!("Invalid argument \"{}\".", view[0]);
    Outcome::Invalid
}
