//! The `fizzbuzz` command.

use argtree::{Outcome, table};

use super::numeric;

/// Handler for the root-level `fizzbuzz` command; owns the nested table.
pub fn command() -> impl Fn(&[String]) -> Outcome {
    let table = table! {
        pred numeric::is_out_of_range_integer => out_of_range,
        pred numeric::is_positive_integer => calculate,
        noarg => missing_argument,
        anyarg => rejected,
    };
    move |view: &[String]| table.dispatch(view, 0)
}

fn calculate(view: &[String]) -> Outcome {
    let Ok(n) = view[0].parse::<i64>() else {
        return Outcome::Invalid;
    };
    println!("{}", fizzbuzz(n));
    Outcome::after(view.len(), 0)
}

fn out_of_range(view: &[String]) -> Outcome {
    println!("Fizzbuzz argument {} out of range. Try a positive integer closer to zero.", view[0]);
    Outcome::Invalid
}

fn missing_argument(_: &[String]) -> Outcome {
    println!("No argument provided to fizzbuzz command.");
    Outcome::Invalid
}

fn rejected(view: &[String]) -> Outcome {
    println!("Fizzbuzz argument {} is not a positive (>=1) integer.", view[0]);
    Outcome::Invalid
}

/// Fizzbuzz word for positive `n`.
fn fizzbuzz(n: i64) -> String {
    debug_assert!(n >= 1);
    if n % 15 == 0 {
        "fizzbuzz".to_string()
    } else if n % 3 == 0 {
        "fizz".to_string()
    } else if n % 5 == 0 {
        "buzz".to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fizzbuzz_words() {
        // (expected, n)
        let cases: Vec<(&str, i64)> = vec![
            ("1", 1),
            ("2", 2),
            ("fizz", 3),
            ("4", 4),
            ("buzz", 5),
            ("fizz", 6),
            ("7", 7),
            ("buzz", 10),
            ("fizzbuzz", 15),
            ("fizzbuzz", 30),
            ("fizz", 33),
            ("buzz", 35),
        ];
        for (expected, n) in cases {
            assert_eq!(fizzbuzz(n), expected, "fizzbuzz({n})");
        }
    }

    #[test]
    fn command_outcomes() {
        let toks = |parts: &[&str]| -> Vec<String> { parts.iter().map(|s| s.to_string()).collect() };
        let cmd = command();
        assert_eq!(cmd(&toks(&["fizzbuzz", "15"])), Outcome::SUCCESS);
        assert_eq!(cmd(&toks(&["fizzbuzz"])), Outcome::Invalid);
        assert_eq!(cmd(&toks(&["fizzbuzz", "0"])), Outcome::Invalid);
        assert_eq!(cmd(&toks(&["fizzbuzz", "-3"])), Outcome::Invalid);
        assert_eq!(cmd(&toks(&["fizzbuzz", "xyz"])), Outcome::Invalid);
        assert_eq!(cmd(&toks(&["fizzbuzz", "99999999999999999999"])), Outcome::Invalid);
    }
}
