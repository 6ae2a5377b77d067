use std::io;
use std::process::ExitCode;

use postfix_repl::{ReplConfig, Session};

fn main() -> ExitCode {
    let mut session = Session::new(ReplConfig::default());
    let stdin = io::stdin();
    let result = session.run(stdin.lock(), io::stdout().lock(), io::stderr().lock());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
