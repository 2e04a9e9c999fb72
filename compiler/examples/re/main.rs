use std::io::{self, BufRead};

use fa_regex_compiler::create_nfa;
use finite_automata::DotGeneratable;

const USAGE: &str = "re [--debug] [--dot] PATTERN";

fn main() -> Result<(), String> {
    let (debug, dot, args) = std::env::args().skip(1).fold(
        (false, false, vec![]),
        |(debug, dot, mut args), arg| {
            if arg == "--debug" || arg == "-d" {
                (true, dot, args)
            } else if arg == "--dot" {
                (debug, true, args)
            } else {
                args.push(arg);
                (debug, dot, args)
            }
        },
    );

    let pattern = match args.as_slice() {
        [pattern] => Ok(pattern.as_str()),
        _ => Err(USAGE.to_string()),
    }?;

    let nfa = create_nfa(pattern).map_err(|e| e.to_string())?;
    let dfa = nfa.to_dfa();

    if debug {
        println!(
            "NFA
--------
{}--------
DFA
--------
{}--------
",
            nfa, dfa
        )
    }

    if dot {
        print!("{}", dfa.to_dot());
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) if dfa.accepts(&line) => println!("{}", line),
            Ok(_) => continue,
            Err(e) => return Err(format!("{}", e)),
        }
    }

    Ok(())
}
