use phf::phf_map;

/// Download URLs for the remote asset store, keyed by asset name.
static ASSET_URLS: phf::Map<&'static str, &'static str> = phf_map! {
    "sponza" => "https://drive.google.com/uc?id=1AYOpwipLlZyBuxZoi3QsVWPhBoYuzbCF",
    "skybox" => "https://drive.google.com/uc?id=1Kb4CxyLxgtFvdQkFjpE2y7PlgN8MXoaC",
    "textures" => "https://drive.google.com/uc?id=1Qw9rJm4uHSchyP0tRwnzFcjUd27aYqTn",
};

/// Fetch order for `fetch_all` and the order `--list` prints.
pub const ASSET_NAMES: [&str; 3] = ["sponza", "skybox", "textures"];

/// Share link printed when the user skips the download stage.
pub const MANUAL_DOWNLOAD_URL: &str =
    "https://drive.google.com/file/d/1AYOpwipLlZyBuxZoi3QsVWPhBoYuzbCF/view?usp=sharing";

pub fn url(name: &str) -> Option<&'static str> {
    ASSET_URLS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_asset_has_a_url() {
        for name in ASSET_NAMES.iter() {
            assert!(url(name).is_some(), "no url for {}", name);
        }
        assert_eq!(ASSET_NAMES.len(), ASSET_URLS.len());
    }

    #[test]
    fn unknown_asset_has_no_url() {
        assert!(url("teapot").is_none());
    }
}
