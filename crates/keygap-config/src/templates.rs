//! Starter files written by `keygap init`.
//!
//! The templates under `templates/` are live TOML so tests can check that every documented
//! key parses. They are handed out with each setting commented out, which makes a freshly
//! initialized file behave exactly like no file at all.

/// Project-level template.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Template for `~/.keygap.toml`.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project template with every setting commented out.
pub fn local_template() -> String {
    disable_settings(LOCAL_TEMPLATE)
}

/// Returns the global template with every setting commented out.
pub fn global_template() -> String {
    disable_settings(GLOBAL_TEMPLATE)
}

/// Prefixes each setting and table header with `# `; blank lines and comments pass through.
fn disable_settings(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
