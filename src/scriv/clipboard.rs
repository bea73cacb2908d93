use crate::error::CollaboratorError;
use std::process::Command;

/// The clipboard collaborator. The applier only needs to hand text
/// over and learn whether it worked.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), CollaboratorError>;
}

/// Copies to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CollaboratorError> {
        copy_to_clipboard(text)
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), CollaboratorError> {
    #[cfg(target_os = "macos")]
    {
        copy_macos(text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(target_os = "windows")]
    {
        copy_windows(text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(CollaboratorError::new(
            "clipboard",
            "Clipboard not supported on this platform",
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut child: std::process::Child, text: &str) -> Result<(), CollaboratorError> {
    use std::io::Write;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            CollaboratorError::new("clipboard", format!("Failed to write to clipboard: {}", e))
        })?;
    }

    let status = child.wait().map_err(|e| {
        CollaboratorError::new(
            "clipboard",
            format!("Failed to wait for clipboard command: {}", e),
        )
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(CollaboratorError::new(
            "clipboard",
            "Clipboard command exited with error",
        ))
    }
}

#[cfg(target_os = "macos")]
fn copy_macos(text: &str) -> Result<(), CollaboratorError> {
    use std::process::Stdio;

    let child = Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| {
            CollaboratorError::new("clipboard", format!("Failed to spawn pbcopy: {}", e))
        })?;
    pipe_to(child, text)
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<(), CollaboratorError> {
    use std::process::Stdio;

    // Try xclip first, then xsel
    let result = Command::new("xclip")
        .args(["-selection", "clipboard"])
        .stdin(Stdio::piped())
        .spawn();

    let child = match result {
        Ok(child) => child,
        Err(_) => Command::new("xsel")
            .args(["--clipboard", "--input"])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                CollaboratorError::new(
                    "clipboard",
                    format!("Failed to spawn xclip or xsel: {}. Install xclip or xsel.", e),
                )
            })?,
    };
    pipe_to(child, text)
}

#[cfg(target_os = "windows")]
fn copy_windows(text: &str) -> Result<(), CollaboratorError> {
    use std::process::Stdio;

    let child = Command::new("clip")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CollaboratorError::new("clipboard", format!("Failed to spawn clip: {}", e)))?;
    pipe_to(child, text)
}

/// Records copied text instead of touching the system clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub copied: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.copied.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CollaboratorError> {
        self.copied.push(text.to_string());
        Ok(())
    }
}
