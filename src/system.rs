// Desktop integration.
// Opens links in the browser and copies text via the platform's own tools.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{ActivityError, Result};

/// Program and arguments that open `url` in the default browser.
pub fn open_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Clipboard writers to try in order; each reads the text from stdin.
pub fn clipboard_commands() -> Vec<(&'static str, Vec<&'static str>)> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", vec![])]
    } else if cfg!(target_os = "windows") {
        vec![("clip", vec![])]
    } else {
        vec![
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
        ]
    }
}

/// Open a URL without waiting for the browser.
pub fn open_url(url: &str) -> Result<()> {
    let (program, args) = open_command(url);
    spawn_detached(program, &args)?;
    Ok(())
}

/// Start a program and reap it on a helper thread once it exits.
fn spawn_detached(program: &str, args: &[String]) -> Result<thread::JoinHandle<()>> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ActivityError::Other(format!("Could not run {}: {}", program, e)))?;

    let program = program.to_string();
    Ok(thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::debug!(%program, error = %e, "could not reap child");
        }
    }))
}

/// Copy text to the system clipboard using the first tool that works.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_with(&clipboard_commands(), text)
}

fn copy_with(commands: &[(&str, Vec<&str>)], text: &str) -> Result<()> {
    for (program, args) in commands {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = child else {
            continue;
        };

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        if let Err(e) = written {
            tracing::debug!(%program, error = %e, "clipboard tool rejected input");
            let _ = child.kill();
            let _ = child.wait();
            continue;
        }

        match child.wait() {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => tracing::debug!(%program, %status, "clipboard tool failed"),
            Err(e) => tracing::debug!(%program, error = %e, "clipboard tool failed"),
        }
    }
    Err(ActivityError::Other("No clipboard tool available".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_command_passes_url_last() {
        let (program, args) = open_command("https://github.com/octo/repo");
        assert!(!program.is_empty());
        assert_eq!(args.last().map(String::as_str), Some("https://github.com/octo/repo"));
    }

    #[test]
    fn test_clipboard_has_candidates() {
        assert!(!clipboard_commands().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_detached_child_is_reaped() {
        let reaper = spawn_detached("true", &[]).unwrap();
        assert!(reaper.join().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_tool_is_skipped() {
        let commands: Vec<(&str, Vec<&str>)> =
            vec![("ghactivity-no-such-tool", vec![]), ("cat", vec![])];
        assert!(copy_with(&commands, "octo/repo").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_tool_that_refuses_input_falls_through() {
        // Larger than a pipe buffer, so writing to `true` fails once it exits.
        let text = "x".repeat(1 << 20);

        let only_refusing: Vec<(&str, Vec<&str>)> = vec![("true", vec![])];
        assert!(copy_with(&only_refusing, &text).is_err());

        let with_fallback: Vec<(&str, Vec<&str>)> = vec![("true", vec![]), ("cat", vec![])];
        assert!(copy_with(&with_fallback, &text).is_ok());
    }
}
