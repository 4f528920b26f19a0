mod fetch;
mod registry;
pub use anyhow;
pub use fetch::{extract, fetch, fetch_all};
pub use registry::{url, ASSET_NAMES, MANUAL_DOWNLOAD_URL};
