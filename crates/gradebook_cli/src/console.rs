//! Line-oriented console helpers shared by the interactive sessions.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Writes `prompt`, then reads one trimmed line.
///
/// Returns `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from console")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::prompt_line;
    use std::io::Cursor;

    #[test]
    fn prompt_line_trims_and_detects_end_of_input() {
        let mut input = Cursor::new("  hello  \n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line.as_deref(), Some("hello"));
        assert_eq!(output, b"> ");

        let line = prompt_line(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line, None);
    }
}
