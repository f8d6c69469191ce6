//! System clipboard access
//!
//! Writes go through the platform's clipboard tool (xclip/xsel, pbcopy,
//! clip) on a tokio child process, so the UI loop keeps running while the
//! tool works.

use std::process::Stdio;

use shelf_core::ClipboardError;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Candidate tools for this platform, in the order they are tried
fn candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    #[cfg(target_os = "linux")]
    {
        vec![
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
            ("wl-copy", vec![]),
        ]
    }

    #[cfg(target_os = "macos")]
    {
        vec![("pbcopy", vec![])]
    }

    #[cfg(target_os = "windows")]
    {
        vec![("clip", vec![])]
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        Vec::new()
    }
}

/// Put `text` on the system clipboard
///
/// Tries each candidate tool until one succeeds. Tools that are not
/// installed are skipped; the last real failure is returned.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let mut last_error = ClipboardError::Unavailable;

    for (tool, args) in candidates() {
        match write_with(tool, &args, text).await {
            Ok(()) => return Ok(()),
            Err(ClipboardError::Unavailable) => continue,
            Err(e) => last_error = e,
        }
    }

    Err(last_error)
}

async fn write_with(tool: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::from_io(e, tool))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| ClipboardError::from_io(e, tool))?;
        stdin
            .flush()
            .await
            .map_err(|e| ClipboardError::from_io(e, tool))?;
    }

    let status = child
        .wait()
        .await
        .map_err(|e| ClipboardError::from_io(e, tool))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::ExitStatus {
            tool: tool.to_string(),
            status: status.to_string(),
        })
    }
}
