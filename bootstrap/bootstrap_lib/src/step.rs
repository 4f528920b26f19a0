use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("step {step} failed with exit code {code:?}")]
pub struct StepFailed {
    pub step: String,
    pub code: Option<i32>,
}

/// One external command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Cmd {
    pub fn new<P: Into<PathBuf>>(program: P, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// The things a build step does in its working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Cmd),
    /// Moves a build product, used to fix up library names cmake gives
    /// us on Linux.
    Rename { from: PathBuf, to: PathBuf },
}

/// A named stage of the bootstrap. Actions run sequentially to
/// completion, each from `cwd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub name: &'static str,
    pub cwd: PathBuf,
    pub actions: Vec<Action>,
}

impl BuildStep {
    pub fn run(&self) -> Result<()> {
        log::info!("building {} ...", self.name);
        for action in self.actions.iter() {
            match action {
                Action::Run(cmd) => {
                    let status = Command::new(&cmd.program)
                        .args(&cmd.args)
                        .current_dir(&self.cwd)
                        .status()
                        .with_context(|| {
                            format!(
                                "failed to launch {} for step {}",
                                cmd.program.display(),
                                self.name
                            )
                        })?;
                    if !status.success() {
                        return Err(StepFailed {
                            step: self.name.to_string(),
                            code: status.code(),
                        }
                        .into());
                    }
                }
                Action::Rename { from, to } => {
                    let from = self.cwd.join(from);
                    let to = self.cwd.join(to);
                    fs::rename(&from, &to).with_context(|| {
                        format!("failed to rename {} to {}", from.display(), to.display())
                    })?;
                }
            }
        }
        Ok(())
    }
}
