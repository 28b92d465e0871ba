//! Implementation of `keygap init`.

use std::{fs, path::Path, process::ExitCode};

use keygap_config::{
    CONFIG_FILENAME, global_config_path, global_template, local_template,
    require_global_config_path,
};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{dim, indent, subheader, toml},
};

/// Writes a commented-out `.keygap.toml` starter file.
///
/// Running in the home directory writes the global template even without `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let in_home = global_config_path()
        .as_deref()
        .and_then(|path| path.parent())
        .is_some_and(|dir| dir == ctx.cwd);

    let (target, template) = if cmd.global || in_home {
        let path = match require_global_config_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        };
        (path, global_template())
    } else {
        (ctx.cwd.join(CONFIG_FILENAME), local_template())
    };

    if let Err(code) = write_template(&target, &template, cmd.force) {
        return code;
    }

    println!("Created {}", target.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    println!("{}", indent(&toml(&template)));
    println!("{}", dim("Uncomment settings to use them; `keygap check` validates the result."));

    ExitCode::SUCCESS
}

/// Writes `template` to `target`, refusing to clobber an existing file unless forced.
fn write_template(target: &Path, template: &str, force: bool) -> Result<(), ExitCode> {
    if target.exists() && !force {
        eprintln!(
            "error: configuration file already exists: {}",
            target.display()
        );
        eprintln!("use --force to overwrite");
        return Err(ExitCode::FAILURE);
    }

    fs::write(target, template).map_err(|e| {
        eprintln!("error: failed to write {}: {e}", target.display());
        ExitCode::FAILURE
    })
}
