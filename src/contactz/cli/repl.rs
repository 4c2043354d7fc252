use super::dispatch::{self, Outcome};
use super::print;
use contactz::api::ContactzApi;
use contactz::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "> ";

/// Reads commands from `input` until an exit command or end of input.
///
/// Command errors are printed and the loop carries on; only I/O failures on the
/// terminal itself end it early.
pub fn run<S, R, W>(api: &mut ContactzApi<S>, mut input: R, mut out: W) -> io::Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, leaving");
            writeln!(out)?;
            if let Ok(outcome) = dispatch::execute(api, "exit") {
                print::render(&mut out, outcome.result())?;
            }
            break;
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match dispatch::execute(api, command) {
            Ok(Outcome::Continue(result)) => print::render(&mut out, &result)?,
            Ok(Outcome::Exit(result)) => {
                print::render(&mut out, &result)?;
                break;
            }
            Err(e) => print::render_error(&mut out, &e)?,
        }
    }
    out.flush()
}
