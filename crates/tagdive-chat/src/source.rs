//! Transcript source resolution: a folder of .txt files or a zip archive
//!
//! Folder names drift between exports (en-dash vs hyphen, optional dated
//! subfolder), and some exports arrive zipped. Both shapes resolve to one
//! source type yielding named byte buffers, so extraction never cares
//! which it got.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tagdive_core::PipelineConfig;

/// A logical source of transcript files for one tag
#[derive(Debug)]
pub enum ChatSource {
    Dir {
        dir: PathBuf,
        files: Vec<PathBuf>,
    },
    Zip {
        archive: PathBuf,
        members: Vec<String>,
    },
}

impl ChatSource {
    pub fn label(&self) -> String {
        match self {
            ChatSource::Dir { dir, .. } => dir.display().to_string(),
            ChatSource::Zip { archive, .. } => archive.display().to_string(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChatSource::Dir { files, .. } => files.len(),
            ChatSource::Zip { members, .. } => members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read every transcript as (display name, raw bytes)
    pub fn read_all(&self) -> Result<Vec<(String, Vec<u8>)>> {
        match self {
            ChatSource::Dir { files, .. } => {
                let mut out = Vec::with_capacity(files.len());
                for path in files {
                    let bytes = std::fs::read(path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    out.push((path.display().to_string(), bytes));
                }
                Ok(out)
            }
            ChatSource::Zip { archive, members } => {
                let file = std::fs::File::open(archive)
                    .with_context(|| format!("opening {}", archive.display()))?;
                let mut zip = zip::ZipArchive::new(file)
                    .with_context(|| format!("reading {}", archive.display()))?;
                let mut out = Vec::with_capacity(members.len());
                for member in members {
                    let mut entry = zip
                        .by_name(member)
                        .with_context(|| format!("{}::{}", archive.display(), member))?;
                    let mut bytes = Vec::new();
                    entry
                        .read_to_end(&mut bytes)
                        .with_context(|| format!("{}::{}", archive.display(), member))?;
                    out.push((format!("{}::{}", archive.display(), member), bytes));
                }
                Ok(out)
            }
        }
    }
}

/// Try each folder-name candidate as a directory of .txt files, then as a
/// same-named zip. `Ok(None)` means the tag has no source and is skipped;
/// an unreadable archive is an error.
pub fn resolve_source(
    root: &Path,
    folder: &str,
    config: &PipelineConfig,
) -> Result<Option<ChatSource>> {
    for candidate in config.folder_candidates(folder) {
        let candidate_path = root.join(&candidate);

        if candidate_path.is_dir() {
            let files = list_txt_files(&candidate_path)?;
            if !files.is_empty() {
                return Ok(Some(ChatSource::Dir {
                    dir: candidate_path,
                    files,
                }));
            }
        }

        let zip_path = zip_variant(&candidate_path);
        if zip_path.is_file() {
            let members = list_zip_txt_members(&zip_path)?;
            if !members.is_empty() {
                return Ok(Some(ChatSource::Zip {
                    archive: zip_path,
                    members,
                }));
            }
        }
    }
    Ok(None)
}

fn list_txt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && has_txt_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn list_zip_txt_members(archive: &Path) -> Result<Vec<String>> {
    let file =
        std::fs::File::open(archive).with_context(|| format!("opening {}", archive.display()))?;
    let zip = zip::ZipArchive::new(file)
        .with_context(|| format!("reading {}", archive.display()))?;
    let mut members: Vec<String> = zip
        .file_names()
        .filter(|name| name.to_lowercase().ends_with(".txt"))
        .map(String::from)
        .collect();
    members.sort();
    Ok(members)
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

fn zip_variant(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".zip");
    PathBuf::from(os)
}

/// Decode transcript bytes: UTF-8 first, then a single-byte fallback.
/// `None` means the file is undecodable and should be skipped.
pub fn decode_transcript(bytes: &[u8]) -> Option<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(text.to_string());
    }
    let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}
