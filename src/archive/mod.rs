//! Zip packaging of generated projects

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::catalog::Template;
use crate::error::Result;
use crate::scaffold::{generate_project, Framework, ProjectTree};
use crate::theme::generate_theme_config;

/// File name of the archive for a tree: `<slug>-<framework>.zip`
pub fn archive_name(tree: &ProjectTree) -> String {
    format!("{}.zip", tree.name)
}

/// Options shared by every entry. The fixed timestamp keeps the bytes
/// stable across runs.
fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

/// Package every file of the tree into an in-memory zip
pub fn package(tree: &ProjectTree) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = entry_options();

    for (path, content) in &tree.files {
        writer.start_file(path.as_str(), options)?;
        writer.write_all(content.as_bytes())?;
    }

    let bytes = writer.finish()?.into_inner();
    tracing::debug!("Packaged {} into {} bytes", tree.name, bytes.len());
    Ok(bytes)
}

/// Write the archive into `dir`, creating the directory when missing
pub fn write_archive(tree: &ProjectTree, dir: &Path) -> Result<PathBuf> {
    let bytes = package(tree)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(archive_name(tree));
    fs::write(&path, bytes)?;

    tracing::info!("Wrote {}", path.display());
    Ok(path)
}

/// Generate the project for a template and write its archive to `dir`
pub fn download(template: &Template, framework: Framework, dir: &Path) -> Result<PathBuf> {
    let theme = generate_theme_config(template);
    let tree = generate_project(template, framework, &theme);

    write_archive(&tree, dir).map_err(|e| {
        tracing::error!("Download of {} failed: {}", tree.name, e);
        e
    })
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use tempfile::TempDir;
    use zip::ZipArchive;

    use super::*;
    use crate::catalog::find;

    fn tree(slug: &str, framework: Framework) -> ProjectTree {
        let template = find(slug).unwrap();
        generate_project(template, framework, &generate_theme_config(template))
    }

    #[test]
    fn test_archive_name() {
        assert_eq!(
            archive_name(&tree("neo-brutalism", Framework::React)),
            "neo-brutalism-react.zip"
        );
    }

    #[test]
    fn test_package_contains_every_file() {
        let tree = tree("claymorphism", Framework::Nextjs);
        let bytes = package(&tree).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), tree.len());

        let mut readme = String::new();
        archive
            .by_name("README.md")
            .unwrap()
            .read_to_string(&mut readme)
            .unwrap();
        assert_eq!(Some(readme.as_str()), tree.file("README.md"));
    }

    #[test]
    fn test_package_is_deterministic() {
        let tree = tree("retro-pixel-art", Framework::React);
        assert_eq!(package(&tree).unwrap(), package(&tree).unwrap());
    }

    #[test]
    fn test_write_archive_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested").join("out");

        let path = write_archive(&tree("gaming-theme", Framework::Nextjs), &out).unwrap();

        assert_eq!(path, out.join("gaming-theme-nextjs.zip"));
        assert!(path.is_file());
    }

    #[test]
    fn test_download_reports_io_failure() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "not a dir").unwrap();

        let result = download(find("dark-luxury").unwrap(), Framework::React, &blocker);
        assert!(result.is_err());
    }
}
