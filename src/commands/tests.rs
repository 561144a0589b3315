use argtree::Outcome;

use super::{root, usage};

fn toks(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn commands_compute_and_succeed() {
    let cases: Vec<&[&str]> = vec![
        &["prog", "fizzbuzz", "15"],
        &["prog", "fact", "5"],
        &["prog", "fib", "7"],
        &["prog", "fib", "f0", "2", "f1", "3", "4"],
        &["prog", "help"],
        // Bare invocation routes through the noarg rule to help.
        &["prog"],
        // Commands chain: each handler returns the remainder past what its
        // sub-dispatch consumed, and the root loop re-dispatches.
        &["prog", "fizzbuzz", "3", "fact", "4"],
        &["prog", "fact", "2", "fib", "f0", "5", "3"],
    ];
    for argv in cases {
        let table = root("prog");
        assert_eq!(table.dispatch_main(&toks(argv), 0), Outcome::SUCCESS, "{argv:?}");
    }
}

#[test]
fn malformed_arguments_are_invalid() {
    let cases: Vec<&[&str]> = vec![
        &["prog", "fizzbuzz"],
        &["prog", "fizzbuzz", "0"],
        &["prog", "fizzbuzz", "xyz"],
        &["prog", "fact", "-1"],
        &["prog", "fact", "99999999999999999999"],
        &["prog", "fib", "f0"],
        &["prog", "fib", "f0", "x"],
        &["prog", "bogus"],
        // The failure short-circuits before the trailing valid command.
        &["prog", "fib", "xyz", "fact", "3"],
    ];
    for argv in cases {
        let table = root("prog");
        assert_eq!(table.dispatch_main(&toks(argv), 0), Outcome::Invalid, "{argv:?}");
    }
}

#[test]
fn help_consumes_only_itself() {
    let table = root("prog");
    // Help prints, returns the remainder, and the root wildcard then
    // rejects the trailing token.
    assert_eq!(table.dispatch_main(&toks(&["prog", "help", "extra"]), 0), Outcome::Invalid);
}

#[test]
fn usage_hint_names_the_program() {
    assert_eq!(usage("wb"), "Run \"wb help\" for more information.\n");
}
