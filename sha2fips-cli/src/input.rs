use std::io::BufRead;

use anyhow::{ensure, Context, Result};

/// Reads one line and strips its terminator (`\n` or `\r\n`).
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("failed to read a UTF-8 line from stdin")?;
    ensure!(read > 0, "no input line on stdin");

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
