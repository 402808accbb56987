use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found (tried {0})")]
    Unavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{program} exited with {status}")]
    Failed { program: String, status: String },
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies through whichever platform clipboard tool is installed.
pub struct SystemClipboard {
    program: PathBuf,
    args: &'static [&'static str],
    display: &'static str,
}

type Tool = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CANDIDATES: &[Tool] = &[("pbcopy", &[])];

#[cfg(windows)]
const CANDIDATES: &[Tool] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const CANDIDATES: &[Tool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl SystemClipboard {
    /// Find the first available clipboard tool on PATH.
    pub fn detect() -> Result<Self, ClipboardError> {
        for &(name, args) in CANDIDATES {
            if let Ok(program) = which::which(name) {
                log::debug!("using {} for clipboard", program.display());
                return Ok(Self {
                    program,
                    args,
                    display: name,
                });
            }
        }

        let tried: Vec<&str> = CANDIDATES.iter().map(|(n, _)| *n).collect();
        Err(ClipboardError::Unavailable(tried.join(", ")))
    }

    pub fn program(&self) -> &str {
        self.display
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::Failed {
                program: self.display.to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
