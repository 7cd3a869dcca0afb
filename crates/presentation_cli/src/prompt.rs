//! Interactive retry prompt

use std::io::{self, BufRead, Write};

pub const RETRY_PROMPT: &str = "Retry? [y/N] ";

/// Ask whether to retry; anything but "y"/"yes" (or end of input) declines
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails.
pub fn confirm_retry(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{RETRY_PROMPT}")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
