mod platform;
mod step;
mod thirdparty;
pub use anyhow;
use anyhow::{Context, Result};
pub use platform::Platform;
use std::io::{BufRead, Write};
use std::path::Path;
pub use step::{Action, BuildStep, Cmd, StepFailed};
pub use thirdparty::steps;

/// What to do about the optional asset download stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStage {
    /// Ask on stdin, the historical behaviour.
    Prompt,
    Fetch,
    Skip,
}

/// Runs the whole bootstrap: detect the platform, drive every
/// third-party build in order, then optionally pull the demo assets.
pub fn run(root: &Path, assets: AssetStage) -> Result<()> {
    let platform = Platform::detect()?;
    log::info!("bootstrapping {} for {:?}", root.display(), platform);
    for step in thirdparty::steps(root, platform) {
        step.run()?;
    }

    let fetch = match assets {
        AssetStage::Fetch => true,
        AssetStage::Skip => false,
        AssetStage::Prompt => {
            let stdin = std::io::stdin();
            let mut line = String::new();
            prompt_yes_no(
                "Download assets from the remote data store?",
                &mut stdin.lock(),
                &mut std::io::stdout(),
                &mut line,
            )?
        }
    };
    if fetch {
        asset_store_lib::fetch_all(root.join("Assets/Store"))?;
    } else {
        log::info!(
            "skipping asset download stage. You can always download the archive from {} and place it under Assets/Store",
            asset_store_lib::MANUAL_DOWNLOAD_URL
        );
    }
    Ok(())
}

/// Only an explicit `y` answer counts as yes.
fn prompt_yes_no<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
    line: &mut String,
) -> Result<bool> {
    write!(output, "{} (y/n) ", question).context("failed to write the prompt")?;
    output.flush().context("failed to flush the prompt")?;
    input
        .read_line(line)
        .context("failed to read the answer")?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
