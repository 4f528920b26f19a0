use bootstrap_lib::{anyhow::Result, AssetStage};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bootstrap",
    about = "Builds the Cinder third-party dependencies and project files"
)]
struct Opt {
    /// Engine checkout to bootstrap
    #[structopt(long = "root", default_value = ".", parse(from_os_str))]
    root: PathBuf,
    /// Fetch the demo assets without asking
    #[structopt(long = "assets", conflicts_with = "skip_assets")]
    assets: bool,
    /// Skip the demo assets without asking
    #[structopt(long = "skip-assets")]
    skip_assets: bool,
}

fn run(options: Opt) -> Result<()> {
    let stage = if options.assets {
        AssetStage::Fetch
    } else if options.skip_assets {
        AssetStage::Skip
    } else {
        AssetStage::Prompt
    };
    bootstrap_lib::run(&options.root, stage)
}

fn main() {
    env_logger::init();
    let options = Opt::from_args();
    run(options).expect("failed to bootstrap dependencies");
}
