//! Interactive prompt helpers for tube-dl
//!
//! Reads answers line by line from the session's input source. Re-prompting
//! on bad input is always an explicit bounded loop, never recursion.

use std::io::{self, BufRead, Write};

use tube_dl::Result;

/// Upper bound on re-prompts for persistently invalid input
pub const MAX_INPUT_ATTEMPTS: usize = 5;

/// Prints a prompt and reads one trimmed line. Returns `None` on EOF.
pub fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks a y/n question, re-prompting on anything else.
///
/// Returns `None` on EOF or after [`MAX_INPUT_ATTEMPTS`] invalid answers.
pub fn confirm<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<bool>> {
    for _ in 0..MAX_INPUT_ATTEMPTS {
        let Some(answer) = prompt_line(input, prompt)? else {
            return Ok(None);
        };

        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => println!("❌ Invalid choice. Please try again."),
        }
    }

    println!("❌ Too many invalid answers.");
    Ok(None)
}
