//! Implementation of `keygap check`.

use std::process::ExitCode;

use keygap_config::{ConfigWarning, discover_config_files};
use keygap_engine::Lexicon;

use crate::cli::{
    context::CommandContext,
    output::{dim, display_path, subheader, warning},
};

/// Shows configuration files, effective settings, and validation warnings.
///
/// Exits with failure when any warning is reported.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found; using defaults."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("keygap init")
        );
        println!();
    } else {
        println!("{}", subheader("Config files:"));
        for path in &config_files {
            println!("   {}", display_path(path, cwd));
        }
        println!();
    }

    let extract = &config.extract;
    println!("{}", subheader("Extraction:"));
    println!("   limit            {}", extract.limit);
    println!("   min_count        {}", extract.min_count);
    println!(
        "   candidate_factor {} {}",
        extract.candidate_factor,
        dim(&format!(
            "({} candidates for the default limit)",
            extract.candidate_limit(extract.limit)
        ))
    );
    println!();

    let lexicon = Lexicon::from_settings(&config.lexicon);
    println!("{}", subheader("Lexicon:"));
    println!(
        "   stopwords        {} {}",
        lexicon.stopword_count(),
        dim(if config.lexicon.iso_stopwords {
            "(with Stopwords-ISO)"
        } else {
            "(built-in)"
        })
    );
    println!("   allowlist keys   {}", lexicon.allow_count());
    let added = [
        ("stopwords", config.lexicon.stopwords.len()),
        ("junk", config.lexicon.junk.len()),
        ("allow", config.lexicon.allow.len()),
        ("short_keep", config.lexicon.short_keep.len()),
    ];
    for (name, count) in added.iter().filter(|(_, count)| *count > 0) {
        println!("   {} {count} {name}", dim("+"));
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::ZeroLimit => {
                println!("{}", dim("Hint: limit = 0 makes every command return nothing"));
            }
            ConfigWarning::ConflictingTerm { .. } => {
                println!(
                    "{}",
                    dim("Hint: remove the term from the stopword or junk list to surface it")
                );
            }
            _ => {}
        }
    }
}
