//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `userbook_core` linkage, logging and storage bootstrap end to end.
//! - Keep stdout deterministic for quick local sanity checks.
//!
//! Usage: `userbook_cli [--log-dir <dir>]`. Without the flag, `USERBOOK_LOG_DIR`
//! is used, then `<temp dir>/userbook-logs`. Relative paths resolve against the
//! current directory.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use userbook_core::db::migrations::latest_version;
use userbook_core::db::open_db_in_memory;
use userbook_core::{default_log_level, init_logging, SqliteUserRepository, UserService};

const LOG_DIR_FLAG: &str = "--log-dir";
const LOG_DIR_ENV: &str = "USERBOOK_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "userbook-logs";

fn main() -> ExitCode {
    println!("userbook_core ping={}", userbook_core::ping());
    println!("userbook_core version={}", userbook_core::core_version());
    println!("userbook_core schema_version={}", latest_version());

    let log_dir = match resolve_log_dir(env::args().skip(1), env::var_os(LOG_DIR_ENV)) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("userbook_core logging=error error={err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("userbook_core logging=error error={err}");
        return ExitCode::FAILURE;
    }
    println!("userbook_core logging=ok log_dir={}", log_dir.display());

    let outcome = storage_probe();
    log::logger().flush();
    match outcome {
        Ok(label) => {
            println!("userbook_core storage=ok label={label}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("userbook_core storage=error error={err}");
            ExitCode::FAILURE
        }
    }
}

/// Picks the log directory from `--log-dir`, then the env override, then the
/// temp dir. The result is always absolute.
fn resolve_log_dir(
    mut args: impl Iterator<Item = String>,
    env_dir: Option<std::ffi::OsString>,
) -> Result<PathBuf, String> {
    let mut flag_dir = None;
    while let Some(arg) = args.next() {
        if arg == LOG_DIR_FLAG {
            let value = args
                .next()
                .ok_or_else(|| format!("{LOG_DIR_FLAG} requires a directory"))?;
            flag_dir = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--log-dir=") {
            flag_dir = Some(PathBuf::from(value));
        } else {
            return Err(format!("unexpected argument `{arg}`"));
        }
    }

    let chosen = flag_dir
        .or_else(|| env_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
    absolutize(&chosen)
}

fn absolutize(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|err| format!("cannot resolve relative log dir `{}`: {err}", path.display()))
}

/// Round-trips one user through an in-memory database.
fn storage_probe() -> Result<String, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let service = UserService::new(SqliteUserRepository::try_new(&conn)?);
    let id = service.register_user("Ada Lovelace", "ada@example.com", "12 Analytical Engine Way")?;
    let stored = service
        .get_user(id)?
        .ok_or("probe user missing after insert")?;
    Ok(stored.user.display_label().to_string())
}
