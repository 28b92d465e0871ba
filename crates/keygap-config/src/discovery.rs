//! Locating `.keygap.toml` files.
//!
//! Every ancestor of the working directory may hold a `.keygap.toml`. The nearest file has the
//! highest precedence; `~/.keygap.toml` comes last unless a `root = true` file ends the search.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{ConfigError, parse::is_root_config};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".keygap.toml";

/// Lists the config files that apply to `cwd`, nearest first.
///
/// Directories named `.keygap.toml` are ignored. An empty list means keygap runs on built-in
/// defaults.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    // The walk passes through $HOME when cwd is below it.
    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Location of `~/.keygap.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}

/// Location of `~/.keygap.toml` for writing, failing when there is no home directory.
pub fn require_global_config_path() -> Result<PathBuf, ConfigError> {
    global_config_path().ok_or(ConfigError::NoHomeDirectory)
}

/// Whether `path` is `~/.keygap.toml`.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| global == path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Discovers from `cwd`, hiding a global config the test machine may have.
    fn discover_local(cwd: &Path) -> Vec<PathBuf> {
        discover_config_files(cwd)
            .into_iter()
            .filter(|path| !is_global_config(path))
            .collect()
    }

    #[test]
    fn nothing_to_find() {
        let dir = TestDir::new();
        let posting = dir.dir("applications/acme/backend");

        assert!(discover_local(&posting).is_empty());
    }

    #[test]
    fn nearest_config_comes_first() {
        let dir = TestDir::new();
        let all = dir.config("", "[extract]\nlimit = 40\n");
        let acme = dir.config("applications/acme", "[extract]\nlimit = 20\n");
        let posting = dir.config("applications/acme/backend", "[lexicon]\nallow = \"grpc\"\n");
        let cwd = dir.dir("applications/acme/backend/notes");

        assert_eq!(discover_local(&cwd), vec![posting, acme, all]);
    }

    #[test]
    fn config_in_cwd_itself_is_found() {
        let dir = TestDir::new();
        let config = dir.config("", "");

        assert_eq!(discover_local(dir.path()), vec![config]);
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let dir = TestDir::new();
        fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();
        let cwd = dir.dir("drafts");

        assert!(discover_local(&cwd).is_empty());
    }

    #[test]
    fn root_config_ends_the_search() {
        let dir = TestDir::new();
        dir.config("", "[extract]\nmin_count = 9\n");
        let acme = dir.config("acme", "root = true\n");
        let team = dir.config("acme/platform", "[extract]\nlimit = 5\n");
        let cwd = dir.dir("acme/platform/sre");

        // Unfiltered: a root config also shuts out the global file.
        assert_eq!(discover_config_files(&cwd), vec![team, acme]);
    }

    #[test]
    fn root_false_keeps_walking() {
        let dir = TestDir::new();
        let outer = dir.config("", "");
        let inner = dir.config("acme", "root = false\n");

        assert_eq!(discover_local(&dir.dir("acme/data")), vec![inner, outer]);
    }

    #[test]
    fn required_global_path_matches_lookup() {
        assert_eq!(require_global_config_path().ok(), global_config_path());
        assert_eq!(
            ConfigError::NoHomeDirectory.to_string(),
            "could not determine home directory"
        );
    }

    #[test]
    fn global_path_is_recognized() {
        let global = global_config_path().unwrap();
        assert!(is_global_config(&global));
        assert!(global.ends_with(CONFIG_FILENAME));
        assert!(!is_global_config(Path::new("/srv/jobs/.keygap.toml")));
    }
}
