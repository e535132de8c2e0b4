//! Zip archive writing

use std::fs::File;
use std::io;
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Result, archive};

/// What an archiving pass produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Files written into the archive
    pub entries: usize,
    /// Final size of the archive on disk
    pub bytes: u64,
}

/// Write the given project-relative files into a zip archive
///
/// Entry names use forward slashes regardless of platform. An existing
/// archive at `output` is overwritten.
pub fn write_archive<F>(
    root: &Path,
    files: &[std::path::PathBuf],
    output: &Path,
    mut on_entry: F,
) -> Result<ArchiveSummary>
where
    F: FnMut(&Path),
{
    let file = File::create(output)
        .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for rel in files {
        on_entry(rel);
        let name = entry_name(rel);
        writer
            .start_file(name, options)
            .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?;

        let mut source = File::open(root.join(rel))
            .map_err(|e| archive::write_failed(rel.display().to_string(), e.to_string()))?;
        io::copy(&mut source, &mut writer)
            .map_err(|e| archive::write_failed(rel.display().to_string(), e.to_string()))?;
    }

    writer
        .finish()
        .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?;

    let bytes = std::fs::metadata(output)
        .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?
        .len();

    Ok(ArchiveSummary {
        entries: files.len(),
        bytes,
    })
}

/// Compress a whole directory into a zip archive
///
/// Entry names are prefixed with the directory's own name, matching how a
/// frozen bundle is distributed (unzipping yields the bundle directory).
pub fn zip_directory(dir: &Path, output: &Path) -> Result<ArchiveSummary> {
    let prefix = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = File::create(output)
        .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0;
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            archive::write_failed(output.display().to_string(), e.to_string())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?;
        let name = format!("{prefix}/{}", entry_name(rel));
        writer
            .start_file(name, options)
            .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?;

        let mut source = File::open(entry.path())
            .map_err(|e| archive::write_failed(entry.path().display().to_string(), e.to_string()))?;
        io::copy(&mut source, &mut writer)
            .map_err(|e| archive::write_failed(entry.path().display().to_string(), e.to_string()))?;
        entries += 1;
    }

    writer
        .finish()
        .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?;

    let bytes = std::fs::metadata(output)
        .map_err(|e| archive::write_failed(output.display().to_string(), e.to_string()))?
        .len();

    Ok(ArchiveSummary { entries, bytes })
}

fn entry_name(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry_names(archive_path: &Path) -> Vec<String> {
        let file = File::open(archive_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_write_archive_round_trip() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("voice_app.py"), "print('hi')").unwrap();
        std::fs::create_dir_all(temp.path().join("core")).unwrap();
        std::fs::write(temp.path().join("core").join("processor.py"), "pass").unwrap();

        let output = temp.path().join("out.zip");
        let files = vec![
            PathBuf::from("voice_app.py"),
            PathBuf::from("core").join("processor.py"),
        ];
        let summary = write_archive(temp.path(), &files, &output, |_| {}).unwrap();

        assert_eq!(summary.entries, 2);
        assert!(summary.bytes > 0);
        let names = entry_names(&output);
        assert!(names.contains(&"voice_app.py".to_string()));
        assert!(names.contains(&"core/processor.py".to_string()));
    }

    #[test]
    fn test_write_archive_overwrites_previous() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.py"), "a").unwrap();
        let output = temp.path().join("out.zip");

        write_archive(temp.path(), &[PathBuf::from("a.py")], &output, |_| {}).unwrap();
        let summary = write_archive(temp.path(), &[PathBuf::from("a.py")], &output, |_| {}).unwrap();
        assert_eq!(summary.entries, 1);
        assert_eq!(entry_names(&output).len(), 1);
    }

    #[test]
    fn test_zip_directory_prefixes_entries() {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("VoiceTools");
        std::fs::create_dir_all(bundle.join("_internal")).unwrap();
        std::fs::write(bundle.join("VoiceTools.exe"), "binary").unwrap();
        std::fs::write(bundle.join("_internal").join("base.dll"), "dll").unwrap();

        let output = temp.path().join("VoiceTools-v3.0.0.zip");
        let summary = zip_directory(&bundle, &output).unwrap();

        assert_eq!(summary.entries, 2);
        let names = entry_names(&output);
        assert!(names.contains(&"VoiceTools/VoiceTools.exe".to_string()));
        assert!(names.contains(&"VoiceTools/_internal/base.dll".to_string()));
    }

    #[test]
    fn test_write_archive_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.zip");
        let result = write_archive(temp.path(), &[PathBuf::from("ghost.py")], &output, |_| {});
        assert!(result.is_err());
    }
}
