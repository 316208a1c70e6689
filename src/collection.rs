//! Collection loading, filesystem discovery and asset verification.
//!
//! A collection is described by one file, `collection.toml` or
//! `collection.json`, with the same shape in both formats:
//!
//! ```toml
//! base_path = "./"
//!
//! [meta]
//! name = "Geometria"
//! tagline = "Sacred patterns, generated"
//!
//! [discover]
//! gifs = true      # fill `gifs` from gif/NN-name.gif when the list is empty
//!
//! [[pdfs]]
//! n = 1
//! file = "seed-of-life"
//! name = "Seed of Life"
//! series = "Sacred"
//! palette = ["#ffd700", "#1a1040"]
//! ```
//!
//! Lists left empty can be filled from the directory next to the file when
//! `[discover]` asks for it. Discovery never overrides a list that the file
//! already provides.

use crate::naming::{parse_entry_name, title_case};
use crate::types::{Collection, GifItem, SourceItem};
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported collection file (expected .toml or .json): {0}")]
    UnsupportedFormat(PathBuf),
}

/// Read a collection file and run discovery against its directory.
pub fn load_collection(path: &Path) -> Result<Collection, CollectionError> {
    let mut collection = parse_collection(path)?;
    apply_discovery(&mut collection, collection_dir(path))?;
    Ok(collection)
}

/// Directory holding the collection file. A bare file name lives in `.`.
fn collection_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Parse a collection file without touching the rest of the filesystem.
pub fn parse_collection(path: &Path) -> Result<Collection, CollectionError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "toml" => Ok(toml::from_str(&fs::read_to_string(path)?)?),
        "json" => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        _ => Err(CollectionError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Fill the lists `collection.discover` enables, when they are empty.
pub fn apply_discovery(collection: &mut Collection, dir: &Path) -> Result<(), CollectionError> {
    if collection.discover.gifs && collection.gifs.is_empty() {
        collection.gifs = discover_gifs(dir)?;
        tracing::debug!(count = collection.gifs.len(), "discovered gifs");
    }
    if collection.discover.sources && collection.sources.is_empty() {
        collection.sources = discover_sources(dir)?;
        tracing::debug!(count = collection.sources.len(), "discovered sources");
    }
    Ok(())
}

/// GIFs named `gif/NN-name.gif`, ordered by number. Files without a number
/// prefix are skipped.
pub fn discover_gifs(dir: &Path) -> Result<Vec<GifItem>, CollectionError> {
    let gif_dir = dir.join("gif");
    if !gif_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut gifs = Vec::new();
    for entry in fs::read_dir(&gif_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("gif") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let parsed = parse_entry_name(stem);
        let Some(id) = parsed.number else {
            tracing::debug!(path = %path.display(), "skipping unnumbered gif");
            continue;
        };
        let gif = GifItem {
            id,
            name: title_case(&parsed.display_title),
            file: parsed.name,
            ..GifItem::default()
        };
        if !path.ends_with(gif.asset_path()) {
            // Zero-padded numbers parse fine but the card links to `{id}-{file}.gif`.
            tracing::warn!(
                path = %path.display(),
                expected = %gif.asset_path(),
                "gif will not be found at its linked path"
            );
        }
        gifs.push(gif);
    }
    gifs.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.file.cmp(&b.file)));
    Ok(gifs)
}

/// Python generator scripts anywhere under `dir`, as paths relative to it,
/// sorted. Hidden directories are not entered.
pub fn discover_sources(dir: &Path) -> Result<Vec<SourceItem>, CollectionError> {
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    let mut sources = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file()
            || entry.path().extension().and_then(|e| e.to_str()) != Some("py")
        {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let file = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let stem = entry
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        sources.push(SourceItem {
            file,
            name: stem,
            desc: String::new(),
        });
    }
    sources.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(sources)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Gif,
    Pdf,
    Standalone,
    Source,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Gif => "gif",
            AssetKind::Pdf => "pdf",
            AssetKind::Standalone => "standalone",
            AssetKind::Source => "source",
        })
    }
}

/// Why an item's asset cannot be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetProblem {
    /// No file at the linked path.
    Missing,
    /// The linked path is absolute or climbs out with `..`.
    OutsideCollection,
}

/// An item whose file is not where its card will link.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingAsset {
    pub kind: AssetKind,
    pub name: String,
    /// Path relative to the collection directory.
    pub path: String,
    pub problem: AssetProblem,
}

/// True when `path` is a non-empty relative path that stays inside the
/// directory it is joined to.
pub fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Every item whose asset cannot be published from `root`: PDFs, GIFs,
/// standalone pieces, then sources.
pub fn verify_assets(collection: &Collection, root: &Path) -> Vec<MissingAsset> {
    let gifs = collection
        .gifs
        .iter()
        .map(|g| (AssetKind::Gif, &g.name, g.asset_path()));
    let pdfs = collection
        .pdfs
        .iter()
        .map(|p| (AssetKind::Pdf, &p.name, p.asset_path()));
    let standalone = collection
        .standalone
        .iter()
        .map(|s| (AssetKind::Standalone, &s.name, s.file.clone()));
    let sources = collection
        .sources
        .iter()
        .map(|s| (AssetKind::Source, &s.name, s.file.clone()));

    pdfs.chain(gifs)
        .chain(standalone)
        .chain(sources)
        .filter_map(|(kind, name, path)| {
            let problem = if !is_contained(Path::new(&path)) {
                tracing::warn!(%kind, path = %path, "asset path leaves the collection directory");
                AssetProblem::OutsideCollection
            } else if !root.join(&path).is_file() {
                AssetProblem::Missing
            } else {
                return None;
            };
            Some(MissingAsset {
                kind,
                name: name.clone(),
                path,
                problem,
            })
        })
        .collect()
}
