use std::path::Path;
use std::process::Command;

/// A `Command` that hands `line` to the platform shell as a single argument.
///
/// Prefixes like `docker compose exec web` and flags like
/// `--settings=app.test` reach the shell untouched.
pub fn shell_command(line: &str, working_dir: Option<&Path>) -> Command {
    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", line]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", line]);
        cmd
    };

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    cmd
}
