//! Implementation of `keygap keywords`.

use std::process::ExitCode;

use keygap_engine::RankedTerm;
use serde::Serialize;

use crate::cli::{
    args::KeywordsCommand,
    context::CommandContext,
    input::read_text,
    output::{dim, print_json, ranked_table},
};

/// JSON output for `keygap keywords`.
#[derive(Serialize)]
struct JsonKeywords<'a> {
    /// Tokens in the job description before filtering.
    token_count: usize,
    /// Candidates that passed the count threshold.
    candidate_count: usize,
    /// Deduplicated ranked terms.
    keywords: &'a [RankedTerm],
}

/// Shows the deduplicated ranked terms of a job description with their scores.
pub fn run(ctx: &CommandContext, cmd: &KeywordsCommand) -> ExitCode {
    let job = match read_text(&cmd.job) {
        Ok(job) => job,
        Err(code) => return code,
    };

    let limit = ctx.limit(cmd.limit);
    let analysis = ctx.extractor().analyze_with_limit(&job, limit);

    if cmd.output.json {
        return print_json(&JsonKeywords {
            token_count: analysis.token_count,
            candidate_count: analysis.ranked.len(),
            keywords: &analysis.keywords,
        });
    }

    if analysis.keywords.is_empty() {
        println!("{}", dim("No keywords found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", ranked_table(&analysis.keywords));
    println!(
        "{}",
        dim(&format!(
            "{} tokens, {} unigrams, {} bigrams, {} candidates above threshold",
            analysis.token_count,
            analysis.unigrams.len(),
            analysis.bigrams.len(),
            analysis.ranked.len()
        ))
    );
    ExitCode::SUCCESS
}
