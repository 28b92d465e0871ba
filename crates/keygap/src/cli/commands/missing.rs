//! Implementation of `keygap missing`.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::{
    args::MissingCommand,
    context::CommandContext,
    input::{ensure_single_stdin, read_optional, read_text},
    output::print_json,
};

/// Prints ranked job-description keywords that the resume does not contain.
pub fn run(ctx: &CommandContext, cmd: &MissingCommand) -> ExitCode {
    let (job, resume) = match read_inputs(cmd) {
        Ok(inputs) => inputs,
        Err(code) => return code,
    };

    let limit = ctx.limit(cmd.limit);
    debug!(job_bytes = job.len(), resume_bytes = resume.len(), limit, "inputs read");

    let missing = ctx
        .extractor()
        .suggest_missing(&job, &resume.to_lowercase(), limit);

    if cmd.output.json {
        return print_json(&missing);
    }

    for term in &missing {
        println!("{term}");
    }
    ExitCode::SUCCESS
}

/// Reads the job description and the optional resume.
fn read_inputs(cmd: &MissingCommand) -> Result<(String, String), ExitCode> {
    ensure_single_stdin([Some(cmd.job.as_str()), cmd.resume.as_deref()])?;
    let job = read_text(&cmd.job)?;
    let resume = read_optional(cmd.resume.as_deref())?;
    Ok((job, resume))
}
