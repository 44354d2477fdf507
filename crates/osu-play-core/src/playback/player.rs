//! External player invocation

use std::path::Path;
use std::process::Stdio;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Plays a single audio file
#[allow(async_fn_in_trait)]
pub trait Player {
    /// Play `path`, returning once playback has finished
    async fn play(&self, path: &Path) -> Result<()>;

    /// Name shown in logs
    fn name(&self) -> &str;
}

/// An external program invoked as `program [args..] <path>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl PlayerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// The platform's default media opener
    pub fn system_default() -> Self {
        #[cfg(target_os = "windows")]
        {
            Self {
                program: "cmd".to_string(),
                args: ["/C", "start", "", "/WAIT"].map(String::from).to_vec(),
            }
        }

        #[cfg(target_os = "macos")]
        {
            Self {
                program: "open".to_string(),
                args: vec!["-W".to_string()],
            }
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Self::new("xdg-open")
        }
    }
}

impl Default for PlayerCommand {
    fn default() -> Self {
        Self::system_default()
    }
}

impl Player for PlayerCommand {
    async fn play(&self, path: &Path) -> Result<()> {
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|source| Error::PlayerLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::PlayerExit {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}
