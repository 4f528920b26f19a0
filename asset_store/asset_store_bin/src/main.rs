use asset_store_lib::anyhow::{bail, Result};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "asset_store", about = "Downloads Cinder demo assets from the remote store")]
struct Opt {
    /// Asset to download, see --list for the known names
    name: Option<String>,
    /// Download every asset in the store
    #[structopt(long = "all", conflicts_with = "name")]
    all: bool,
    /// Print the known asset names and exit
    #[structopt(long = "list")]
    list: bool,
    /// Directory the archives are unpacked into
    #[structopt(long = "out", default_value = "Assets/Store", parse(from_os_str))]
    out: PathBuf,
}

fn run(options: Opt) -> Result<()> {
    if options.list {
        for name in asset_store_lib::ASSET_NAMES.iter() {
            println!("{}", name);
        }
        return Ok(());
    }
    if options.all {
        return asset_store_lib::fetch_all(&options.out);
    }
    match options.name {
        Some(name) => asset_store_lib::fetch(&name, &options.out),
        None => bail!("nothing to do, pass an asset name, --all or --list"),
    }
}

fn main() {
    env_logger::init();
    let options = Opt::from_args();
    run(options).expect("failed to fetch assets");
}
