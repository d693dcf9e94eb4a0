//! CLI command implementations.

pub mod manage;
pub mod register;

use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt with a pre-filled value; an empty answer keeps it.
pub fn prompt_with_default(label: &str, default: &str) -> io::Result<String> {
    if default.is_empty() {
        return prompt(label);
    }

    let answer = prompt(&format!("{label} [{default}]"))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Ask a yes/no question; only `s`/`sim` (case-insensitive) counts as yes.
pub fn confirm(label: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{label} (s/N)"))?.to_lowercase();
    Ok(answer == "s" || answer == "sim")
}
