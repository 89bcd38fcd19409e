//! Skill archive construction.
//!
//! Walks a validated skill directory and writes a deflate-compressed zip
//! container named `<skill-name>.skill`. Entry paths are relative to the
//! skill root; the skill directory itself is never a path prefix.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Result, SkillpackError};

/// Extension of the produced archive.
pub const ARCHIVE_EXTENSION: &str = "skill";

const CACHE_DIR: &str = "__pycache__";

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_cache_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == CACHE_DIR
}

/// Package a skill directory into `<output_dir>/<skill-name>.skill`.
///
/// The output directory is created if absent and an existing archive at the
/// target path is overwritten. Hidden files and directories are excluded,
/// as are bytecode cache directories. Any I/O failure mid-traversal is
/// fatal; no partial-archive cleanup is attempted.
pub fn package_skill(skill_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let skill_name = skill_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SkillpackError::InvalidName(format!(
                "skill path has no final component: {}",
                skill_path.display()
            ))
        })?;

    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{skill_name}.{ARCHIVE_EXTENSION}"));

    let file = File::create(&output_path)?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let walker = WalkDir::new(skill_path)
        .into_iter()
        .filter_entry(|entry| {
            // The root entry is always kept, even for a hidden skill directory.
            entry.depth() == 0 || (!is_hidden(entry) && !is_cache_dir(entry))
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(skill_path)
            .map_err(|err| io::Error::other(err.to_string()))?;
        let entry_name = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        debug!(path = %entry.path().display(), "packing");
        archive.start_file(entry_name, options)?;
        let mut reader = File::open(entry.path())?;
        io::copy(&mut reader, &mut archive)?;
    }

    archive.finish()?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tempfile::TempDir;
    use zip::ZipArchive;

    use super::*;

    fn build_skill(root: &Path) -> PathBuf {
        let skill = root.join("demo-skill");
        std::fs::create_dir_all(skill.join("scripts")).unwrap();
        std::fs::create_dir_all(skill.join("references/deep")).unwrap();
        std::fs::create_dir_all(skill.join(".git")).unwrap();
        std::fs::create_dir_all(skill.join("__pycache__")).unwrap();
        std::fs::write(skill.join("SKILL.md"), "---\nname: demo-skill\n---\n").unwrap();
        std::fs::write(skill.join("scripts/run.sh"), "#!/bin/sh\n").unwrap();
        std::fs::write(skill.join("references/deep/notes.md"), "notes").unwrap();
        std::fs::write(skill.join(".hidden"), "secret").unwrap();
        std::fs::write(skill.join(".git/config"), "git").unwrap();
        std::fs::write(skill.join("__pycache__/mod.pyc"), "pyc").unwrap();
        skill
    }

    fn entry_names(archive_path: &Path) -> HashSet<String> {
        let file = File::open(archive_path).unwrap();
        let mut archive = ZipArchive::new(file).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn archive_contains_only_visible_files() {
        let temp = TempDir::new().unwrap();
        let skill = build_skill(temp.path());
        let out = temp.path().join("dist");

        let archive_path = package_skill(&skill, &out).unwrap();
        assert_eq!(archive_path, out.join("demo-skill.skill"));

        let names = entry_names(&archive_path);
        let expected: HashSet<String> = [
            "SKILL.md",
            "scripts/run.sh",
            "references/deep/notes.md",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn entries_have_no_skill_dir_prefix() {
        let temp = TempDir::new().unwrap();
        let skill = build_skill(temp.path());

        let archive_path = package_skill(&skill, temp.path()).unwrap();
        for name in entry_names(&archive_path) {
            assert!(!name.starts_with("demo-skill/"), "prefixed entry: {name}");
        }
    }

    #[test]
    fn repackaging_overwrites_existing_archive() {
        let temp = TempDir::new().unwrap();
        let skill = build_skill(temp.path());
        let out = temp.path().join("dist");

        let first = package_skill(&skill, &out).unwrap();
        std::fs::write(skill.join("extra.txt"), "more").unwrap();
        let second = package_skill(&skill, &out).unwrap();

        assert_eq!(first, second);
        assert!(entry_names(&second).contains("extra.txt"));
    }

    #[test]
    fn output_directory_is_created_with_intermediates() {
        let temp = TempDir::new().unwrap();
        let skill = build_skill(temp.path());
        let out = temp.path().join("a/b/c");

        let archive_path = package_skill(&skill, &out).unwrap();
        assert!(archive_path.is_file());
    }

    #[test]
    fn archive_entries_are_deflate_compressed() {
        let temp = TempDir::new().unwrap();
        let skill = build_skill(temp.path());

        let archive_path = package_skill(&skill, temp.path()).unwrap();
        let file = File::open(&archive_path).unwrap();
        let mut archive = ZipArchive::new(file).unwrap();
        for i in 0..archive.len() {
            let entry = archive.by_index(i).unwrap();
            assert_eq!(entry.compression(), CompressionMethod::Deflated);
        }
    }
}
