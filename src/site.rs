//! Site build: collection directory → static page.
//!
//! ```text
//! <source>/config.toml       (optional, also read from the parent directory)
//! <source>/collection.toml   → <output>/index.html
//!                            → <output>/hero.svg
//! <source>/gif/1-seed.gif    → <output>/gif/1-seed.gif   (when base_path is "./")
//! ```
//!
//! Rendering runs against an in-memory [`Document`](crate::dom::Document)
//! exactly as it would in a browser; the result is then serialized into one
//! HTML file with inline CSS.
//! Asset files are copied only when the page links to them relative to
//! itself (`base_path = "./"`). Any other base path points at assets hosted
//! elsewhere, and nothing is copied.

use crate::collection::{self, CollectionError, MissingAsset, is_contained, verify_assets};
use crate::config::{self, ConfigError, SiteConfig};
use crate::dom::RenderOutcome;
use crate::fade::FadeInObserver;
use crate::filter::series_set;
use crate::hero::render_snapshot;
use crate::page::{self, PageOutcome, Section, Stat};
use crate::types::{Collection, DEFAULT_BASE_PATH};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSS_STATIC: &str = include_str!("../static/style.css");

pub const INDEX_FILE: &str = "index.html";
pub const HERO_FILE: &str = "hero.svg";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),
    #[error("Page mount points missing from document")]
    MissingMounts,
}

/// A loaded collection and the config it was loaded with.
#[derive(Debug)]
pub struct LoadedCollection {
    pub config: SiteConfig,
    pub collection: Collection,
    pub collection_file: PathBuf,
}

/// Read `config.toml` layers, then the collection file they name.
pub fn load(source: &Path) -> Result<LoadedCollection, SiteError> {
    let config = config::load_config(source)?;
    let collection_file = source.join(&config.collection_file);
    let collection = collection::load_collection(&collection_file)?;
    Ok(LoadedCollection {
        config,
        collection,
        collection_file,
    })
}

#[derive(Debug)]
pub struct CheckReport {
    pub loaded: LoadedCollection,
    pub missing: Vec<MissingAsset>,
}

/// Load the collection and list items whose files are missing.
pub fn check(source: &Path) -> Result<CheckReport, SiteError> {
    let loaded = load(source)?;
    let missing = verify_assets(&loaded.collection, source);
    Ok(CheckReport { loaded, missing })
}

#[derive(Debug)]
pub struct BuildReport {
    pub name: String,
    pub stats: Vec<Stat>,
    pub sections: Vec<(Section, RenderOutcome)>,
    pub series: Vec<String>,
    /// Elements registered for fade-in.
    pub faded_in: usize,
    /// Files written, relative to the output directory.
    pub written: Vec<PathBuf>,
    /// Assets linked from the page that were not copied: absent from the
    /// source directory, or linked outside it.
    pub missing: Vec<MissingAsset>,
}

/// Build the page for the collection in `source` into `output`.
pub fn build(source: &Path, output: &Path) -> Result<BuildReport, SiteError> {
    let LoadedCollection {
        config, collection, ..
    } = load(source)?;

    let mut doc = page::page_mounts();
    let mut fade = FadeInObserver::new();
    let PageOutcome::Rendered(summary) =
        page::render_collection_page(&mut doc, &collection, &mut fade)
    else {
        return Err(SiteError::MissingMounts);
    };

    fs::create_dir_all(output)?;
    let mut written = Vec::new();

    let backdrop = render_snapshot(&config.hero, &config.colors.background);
    write_file(output, Path::new(HERO_FILE), backdrop.into_string(), &mut written)?;

    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let title = page_title(&collection);
    let html = page::page_document(&title, &css, Some(HERO_FILE), &doc)
        .ok_or(SiteError::MissingMounts)?;
    write_file(output, Path::new(INDEX_FILE), html.into_string(), &mut written)?;

    let missing = verify_assets(&collection, source);
    if collection.base_path == DEFAULT_BASE_PATH {
        copy_assets(&collection, source, output, &missing, &mut written)?;
    }

    Ok(BuildReport {
        name: collection.meta.name.clone(),
        stats: summary.stats,
        sections: summary.sections,
        series: series_set(&collection.pdfs),
        faded_in: summary.faded_in,
        written,
        missing,
    })
}

/// Render only the hero backdrop for the collection in `source`.
pub fn hero_svg(source: &Path) -> Result<String, SiteError> {
    let config = config::load_config(source)?;
    Ok(render_snapshot(&config.hero, &config.colors.background).into_string())
}

fn page_title(collection: &Collection) -> String {
    if collection.meta.name.is_empty() {
        "Collection".to_string()
    } else {
        collection.meta.name.clone()
    }
}

fn write_file(
    output: &Path,
    rel: &Path,
    contents: String,
    written: &mut Vec<PathBuf>,
) -> Result<(), SiteError> {
    let path = output.join(rel);
    fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), "wrote");
    written.push(rel.to_path_buf());
    Ok(())
}

/// Copy every present asset the page links to, keeping relative paths.
///
/// Paths that leave the collection directory are never copied; `missing`
/// already reports them. A file is not copied onto itself, which happens
/// when the output directory is the source directory.
fn copy_assets(
    collection: &Collection,
    source: &Path,
    output: &Path,
    missing: &[MissingAsset],
    written: &mut Vec<PathBuf>,
) -> Result<(), SiteError> {
    let linked = collection
        .pdfs
        .iter()
        .map(|p| p.asset_path())
        .chain(collection.gifs.iter().map(|g| g.asset_path()))
        .chain(collection.standalone.iter().map(|s| s.file.clone()))
        .chain(collection.sources.iter().map(|s| s.file.clone()));

    for rel in linked {
        if missing.iter().any(|m| m.path == rel) || !is_contained(Path::new(&rel)) {
            continue;
        }
        let src = source.join(&rel);
        let dst = output.join(&rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        if same_file(&src, &dst) {
            tracing::debug!(path = %dst.display(), "asset already in place");
            written.push(PathBuf::from(rel));
            continue;
        }
        fs::copy(&src, &dst)?;
        tracing::info!(path = %dst.display(), "copied");
        written.push(PathBuf::from(rel));
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
