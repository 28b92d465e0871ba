//! Implementation of `keygap role`.

use std::process::ExitCode;

use keygap_engine::{RoleInput, extract_role_with_source};
use tracing::debug;

use crate::cli::{
    args::RoleCommand,
    input::read_text,
    output::print_json,
};

/// Prints the best-guess role title.
pub fn run(cmd: &RoleCommand) -> ExitCode {
    let input = match build_input(cmd) {
        Ok(input) => input,
        Err(code) => return code,
    };

    let guess = extract_role_with_source(&input);
    debug!(source = ?guess.source, "role extracted");

    if cmd.output.json {
        return print_json(&guess);
    }

    println!("{}", guess.role);
    ExitCode::SUCCESS
}

/// Assembles role input from `--input`, the job file and the resume flags.
///
/// `--role` and `--headline` override fields read from `--input`.
fn build_input(cmd: &RoleCommand) -> Result<RoleInput, ExitCode> {
    let mut input = if let Some(source) = &cmd.input {
        parse_input(&read_text(source)?)?
    } else if let Some(job) = &cmd.job {
        RoleInput::from_job_text(read_text(job)?)
    } else {
        RoleInput::default()
    };

    if let Some(role) = &cmd.role {
        input = input.with_resume_role(role.as_str());
    }
    if let Some(headline) = &cmd.headline {
        input = input.with_headline(headline.as_str());
    }
    Ok(input)
}

/// Parses the JSON role input; fields of the wrong type read as absent.
fn parse_input(json: &str) -> Result<RoleInput, ExitCode> {
    serde_json::from_str(json).map_err(|e| {
        eprintln!("error: invalid role input: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use keygap_engine::extract_role;

    use super::*;

    #[test]
    fn parse_input_tolerates_wrong_types() {
        let input = parse_input(r#"{"jobText": "Title: Chef", "resume": 7}"#).unwrap();
        assert_eq!(extract_role(&input), "Chef");
    }

    #[test]
    fn parse_input_rejects_non_json() {
        assert!(parse_input("not json").is_err());
    }

    #[test]
    fn flags_override_input() {
        let cmd = RoleCommand {
            job: None,
            role: Some("Line Cook".into()),
            headline: None,
            input: None,
            output: Default::default(),
        };
        let input = build_input(&cmd).unwrap();
        assert_eq!(extract_role(&input), "Line Cook");
    }
}
