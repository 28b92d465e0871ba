//! Reading command inputs from files or stdin.

use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

/// Argument value that selects stdin.
pub const STDIN_ARG: &str = "-";

/// Reads a text input, from stdin when `source` is `-`.
///
/// Invalid UTF-8 is replaced rather than rejected, since job descriptions are often pasted
/// from documents with stray bytes.
pub fn read_text(source: &str) -> Result<String, ExitCode> {
    let bytes = if source == STDIN_ARG {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer).map(|_| buffer)
    } else {
        fs::read(source)
    };

    match bytes {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            let name = if source == STDIN_ARG { "stdin" } else { source };
            eprintln!("error: failed to read {name}: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}

/// Reads an optional input, returning an empty string when absent.
pub fn read_optional(source: Option<&str>) -> Result<String, ExitCode> {
    source.map_or_else(|| Ok(String::new()), read_text)
}

/// Fails when more than one input asks for stdin.
pub fn ensure_single_stdin<'a>(
    sources: impl IntoIterator<Item = Option<&'a str>>,
) -> Result<(), ExitCode> {
    let stdin_count = sources
        .into_iter()
        .flatten()
        .filter(|s| *s == STDIN_ARG)
        .count();
    if stdin_count > 1 {
        eprintln!("error: only one input can be read from stdin");
        return Err(ExitCode::FAILURE);
    }
    Ok(())
}
