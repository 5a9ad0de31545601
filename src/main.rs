use std::env;
use std::io;
use std::process;

use rcat::{exit_code, help_text, parse, run, ParseOutcome};

fn main() {
    let code = match parse(env::args().skip(1)) {
        Ok(ParseOutcome::Help) => {
            print!("{}", help_text());
            exit_code::NORMAL
        }
        Ok(ParseOutcome::Run(config)) => match run(&config) {
            Ok(()) => exit_code::NORMAL,
            Err(err) => report_failure(&err),
        },
        Err(invalid) => {
            eprintln!("Error: Invalid argument: {invalid}");
            exit_code::ERROR
        }
    };
    process::exit(code);
}

fn report_failure(err: &anyhow::Error) -> i32 {
    if err.root_cause().downcast_ref::<io::Error>().is_some() {
        eprintln!("I/O Error: {err:#}");
        exit_code::FILE
    } else {
        eprintln!("Fatal Error: Unknown application error");
        eprintln!("!Contact developers!");
        eprintln!("Error detail: {}", err.root_cause());
        eprintln!("Full error trace:");
        for cause in err.chain() {
            eprintln!("    {cause}");
        }
        exit_code::FATAL
    }
}
