//! Interactive confirmation prompt.

use std::io::{self, BufRead, Write};

/// Asks the operator whether to download the findings.
///
/// Reads one line from stdin; only `y` (any case) confirms.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn confirm_download() -> io::Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm_from(&mut stdin.lock(), &mut stdout.lock())
}

fn confirm_from<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Download results? y/n: ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
