//! Implementation of `keygap config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::toml};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    print!("{}", toml(&ctx.config.settings_to_toml()));
    ExitCode::SUCCESS
}
