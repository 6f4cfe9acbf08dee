//! Open a URL in the platform's default browser.

use std::io;
use std::process::Command;

/// Launch the platform opener for `url`. The child is left to run on its
/// own; only spawn failures are reported.
pub fn open_url(url: &str) -> io::Result<()> {
    let mut command = opener_command(url);
    command.spawn().map(|_| ())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_command_carries_url() {
        let command = opener_command("https://projecteuler.net/problem=1");
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy()).collect();
        assert!(args.iter().any(|a| a.contains("projecteuler.net/problem=1")));
    }
}
