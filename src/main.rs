mod commands;

fn main() {
    let tokens: Vec<String> = std::env::args().collect();
    if tokens.is_empty() {
        std::process::exit(2);
    }

    let prog = tokens[0].clone();
    let table = commands::root(&prog);
    let outcome = table.dispatch_main_reporting(&tokens, 0, &commands::usage(&prog));

    std::process::exit(if outcome.is_invalid() { 2 } else { 0 });
}
