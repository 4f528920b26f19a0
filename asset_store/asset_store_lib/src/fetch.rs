use crate::registry;
use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

/// Per-request timeout on the store download.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Downloads one named asset archive into `dest`, extracts it there and
/// removes the archive. Unknown names list the registry.
pub fn fetch<P: AsRef<Path>>(name: &str, dest: P) -> Result<()> {
    let url = match registry::url(name) {
        Some(url) => url,
        None => bail!(
            "unknown asset {:?}, known assets are: {}",
            name,
            registry::ASSET_NAMES.join(", ")
        ),
    };
    let dest = dest.as_ref();
    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create asset directory {}", dest.display()))?;

    let archive_path = dest.join(format!("{}.zip", name));
    log::info!("downloading {} from {}", name, url);
    download(url, &archive_path)?;

    log::info!("extracting {}", archive_path.display());
    extract(&archive_path, dest).with_context(|| {
        format!(
            "failed to extract {}, the archive was left in place",
            archive_path.display()
        )
    })?;

    fs::remove_file(&archive_path)
        .with_context(|| format!("failed to remove archive {}", archive_path.display()))?;
    Ok(())
}

/// Fetches every registry entry, in registry order.
pub fn fetch_all<P: AsRef<Path>>(dest: P) -> Result<()> {
    let dest = dest.as_ref();
    for name in registry::ASSET_NAMES.iter() {
        fetch(name, dest)?;
    }
    Ok(())
}

fn download(url: &str, archive_path: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .context("failed to build the http client")?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to request {}", url))?;
    if !response.status().is_success() {
        bail!("http error {} downloading {}", response.status(), url);
    }
    let bytes = response
        .bytes()
        .with_context(|| format!("failed to read the body of {}", url))?;

    // Write under a partial name first so an interrupted download never
    // leaves a plausible-looking archive behind.
    let partial_path = archive_path.with_extension("zip.part");
    fs::write(&partial_path, &bytes)
        .with_context(|| format!("failed to write {}", partial_path.display()))?;
    fs::rename(&partial_path, archive_path)
        .with_context(|| format!("failed to move archive into {}", archive_path.display()))?;
    Ok(())
}

/// Unpacks a downloaded zip archive into `dest`.
pub fn extract(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .with_context(|| format!("failed to open archive {}", archive_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("{} is not a zip archive", archive_path.display()))?;
    archive
        .extract(dest)
        .with_context(|| format!("failed to unpack into {}", dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    #[test]
    fn unknown_asset_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = fetch("teapot", dir.path()).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("unknown asset"));
        assert!(message.contains("sponza"));
    }

    #[test]
    fn extract_unpacks_archive_contents() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("store.zip");

        let file = File::create(&archive_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("models/cube.obj", FileOptions::default())
            .unwrap();
        writer.write_all(b"o Cube\n").unwrap();
        writer.finish().unwrap();

        extract(&archive_path, dir.path()).unwrap();
        let unpacked = dir.path().join("models").join("cube.obj");
        assert_eq!(fs::read_to_string(unpacked).unwrap(), "o Cube\n");
    }

    #[test]
    fn extract_reports_a_bad_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("store.zip");
        fs::write(&archive_path, b"not a zip").unwrap();
        let err = extract(&archive_path, dir.path()).unwrap_err();
        assert!(format!("{}", err).contains("not a zip archive"));
    }
}
