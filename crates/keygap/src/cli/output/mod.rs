//! Rendering and JSON serialization for CLI output.

mod highlight;

use std::{
    io::{self, IsTerminal},
    path::Path,
    process::ExitCode,
    sync::LazyLock,
};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use keygap_engine::RankedTerm;
use serde::Serialize;

pub use self::highlight::Highlighter;

/// Whether stdout is a terminal; styling is skipped otherwise.
static STYLED: LazyLock<bool> = LazyLock::new(|| io::stdout().is_terminal());

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in a style when stdout is a terminal.
fn styled(style: &str, text: &str) -> String {
    if *STYLED {
        format!("{style}{text}{}", colors::RESET)
    } else {
        text.to_string()
    }
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    styled(colors::BOLD, text)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    styled(colors::DIM, text)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    styled(colors::YELLOW, text)
}

/// Highlights TOML when stdout is a terminal.
pub fn toml(content: &str) -> String {
    if *STYLED {
        Highlighter::new().highlight_toml(content)
    } else {
        content.to_string()
    }
}

/// Indents every line by three spaces.
pub fn indent(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("   {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shows a path relative to `base` when it lies underneath it.
pub fn display_path(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.display().to_string(),
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds a table of ranked terms.
pub fn ranked_table(terms: &[RankedTerm]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Term", "Kind", "Count", "Bonus", "Score"]);
    for (idx, ranked) in terms.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1).set_alignment(CellAlignment::Right),
            Cell::new(ranked.text()),
            Cell::new(ranked.term.kind.to_string()),
            Cell::new(ranked.term.count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", ranked.term.bonus)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", ranked.score)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use keygap_engine::WeightedTerm;

    use super::*;

    #[test]
    fn display_path_relative_to_base() {
        let base = PathBuf::from("/work/project");
        assert_eq!(
            display_path(&base.join(".keygap.toml"), &base),
            ".keygap.toml"
        );
        assert_eq!(
            display_path(Path::new("/home/me/.keygap.toml"), &base),
            "/home/me/.keygap.toml"
        );
    }

    #[test]
    fn indent_lines() {
        assert_eq!(indent("a\nb"), "   a\n   b");
    }

    #[test]
    fn table_lists_terms() {
        let terms = vec![
            RankedTerm::new(WeightedTerm::new("seo", 3, 1.25)),
            RankedTerm::new(WeightedTerm::new("social media", 1, 1.5)),
        ];
        let rendered = ranked_table(&terms).to_string();
        assert!(rendered.contains("seo"));
        assert!(rendered.contains("social media"));
        assert!(rendered.contains("bigram"));
        assert!(rendered.contains("3.75"));
    }
}
