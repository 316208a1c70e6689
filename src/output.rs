//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every item is shown by
//! its positional index and name, with the asset it links to as an indented
//! `Source:` line. This reads as an inventory of the collection while still
//! letting users trace each card back to a file.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Geometria
//!     Sacred patterns, generated
//!     Source: collection.toml
//!
//! Animated GIFs (3)
//!     001 Flower of Life
//!         Source: gif/1-flower-of-life.gif
//! PDF Posters (2)
//!     001 Seed of Life [Sacred]
//!         Source: 1-seed-of-life.pdf
//!
//! Missing
//!     pdf 2-vesica.pdf (Vesica)
//! ```
//!
//! ## Build
//!
//! ```text
//! Geometria → index.html
//!     Animated GIFs: 3 cards
//!     PDF Posters: 2 cards (Fractals, Sacred)
//!     Stats: 2 PDF Posters · 3 Animated GIFs
//! Wrote 7 files
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::collection::{AssetProblem, MissingAsset};
use crate::page::{self, Section};
use crate::site::{BuildReport, CheckReport, INDEX_FILE};
use crate::types::Collection;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an item line: named items show the name, unnamed show the asset
/// path in parens.
///
/// ```text
/// 001 Seed of Life        // named
/// 001 (1-seed.pdf)        // unnamed, the file IS the identity
/// ```
fn item_line(index: usize, name: &str, path: &str) -> String {
    if name.is_empty() {
        format!("{} ({})", format_index(index), path)
    } else {
        format!("{} {}", format_index(index), name)
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// One entry per item of `section`: display name, detail suffix, asset path.
fn section_items(section: Section, collection: &Collection) -> Vec<(String, String, String)> {
    match section {
        Section::Gifs => collection
            .gifs
            .iter()
            .map(|g| (g.name.clone(), String::new(), g.asset_path()))
            .collect(),
        Section::Posters => collection
            .pdfs
            .iter()
            .map(|p| {
                let series = if p.series.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", p.series)
                };
                (p.name.clone(), series, p.asset_path())
            })
            .collect(),
        Section::Standalone => collection
            .standalone
            .iter()
            .map(|s| (s.name.clone(), format!(" ({})", s.format), s.file.clone()))
            .collect(),
        Section::Source => collection
            .sources
            .iter()
            .map(|s| (s.name.clone(), String::new(), s.file.clone()))
            .collect(),
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the collection inventory: header, one block per section, then
/// any missing assets.
pub fn format_check_output(report: &CheckReport, source_root: &Path) -> Vec<String> {
    let collection = &report.loaded.collection;
    let mut lines = Vec::new();

    let name = if collection.meta.name.is_empty() {
        "(unnamed collection)"
    } else {
        collection.meta.name.as_str()
    };
    lines.push(name.to_string());
    let tagline = truncate_desc(collection.meta.tagline.trim(), 60);
    if !tagline.is_empty() {
        lines.push(format!("{}{}", indent(1), tagline));
    }
    let file = report
        .loaded
        .collection_file
        .strip_prefix(source_root)
        .unwrap_or(&report.loaded.collection_file);
    lines.push(format!("{}Source: {}", indent(1), file.display()));

    let sections = page::sections(collection);
    if !sections.is_empty() {
        lines.push(String::new());
    }
    for section in sections {
        let items = section_items(section, collection);
        lines.push(format!("{} ({})", section.title(), items.len()));
        for (i, (name, detail, path)) in items.iter().enumerate() {
            lines.push(format!("{}{}{}", indent(1), item_line(i + 1, name, path), detail));
            lines.push(format!("{}Source: {}", indent(2), path));
        }
    }

    lines.extend(format_missing(&report.missing));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(report: &CheckReport, source_root: &Path) {
    for line in format_check_output(report, source_root) {
        println!("{}", line);
    }
}

fn format_missing(missing: &[MissingAsset]) -> Vec<String> {
    if missing.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Missing".to_string()];
    for asset in missing {
        let name = if asset.name.is_empty() {
            String::new()
        } else {
            format!(" ({})", asset.name)
        };
        let note = match asset.problem {
            AssetProblem::Missing => "",
            AssetProblem::OutsideCollection => " [outside collection]",
        };
        lines.push(format!(
            "{}{} {}{}{}",
            indent(1),
            asset.kind,
            asset.path,
            name,
            note
        ));
    }
    lines
}

// ============================================================================
// Build output
// ============================================================================

/// Format build output: rendered sections, stats, then written files.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();
    let name = if report.name.is_empty() {
        "Collection"
    } else {
        report.name.as_str()
    };
    lines.push(format!("{} \u{2192} {}", name, INDEX_FILE));

    for (section, outcome) in &report.sections {
        let mut line = format!("{}{}: {} cards", indent(1), section.title(), outcome.cards());
        if *section == Section::Posters && !report.series.is_empty() {
            line.push_str(&format!(" ({})", report.series.join(", ")));
        }
        lines.push(line);
    }

    if !report.stats.is_empty() {
        let stats: Vec<String> = report
            .stats
            .iter()
            .map(|s| format!("{} {}", s.value, s.label))
            .collect();
        lines.push(format!("{}Stats: {}", indent(1), stats.join(" \u{b7} ")));
    }

    lines.extend(format_missing(&report.missing));
    lines.push(format!("Wrote {} files", report.written.len()));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::AssetKind;
    use crate::config::SiteConfig;
    use crate::dom::RenderOutcome;
    use crate::page::stats;
    use crate::site::LoadedCollection;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    fn check_report(collection: Collection, missing: Vec<MissingAsset>) -> CheckReport {
        CheckReport {
            loaded: LoadedCollection {
                config: SiteConfig::default(),
                collection,
                collection_file: PathBuf::from("/src/geometria/collection.toml"),
            },
            missing,
        }
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        let expected = format!("{}...", "a".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn truncate_desc_counts_chars_not_bytes() {
        assert_eq!(truncate_desc("géométrie", 3), "géo...");
    }

    #[test]
    fn format_index_pads_to_three() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn unnamed_item_shows_path() {
        assert_eq!(item_line(2, "", "2-koch.pdf"), "002 (2-koch.pdf)");
        assert_eq!(item_line(2, "Koch", "2-koch.pdf"), "002 Koch");
    }

    #[test]
    fn check_lists_sections_in_page_order() {
        let report = check_report(sample_collection(), Vec::new());
        let lines = format_check_output(&report, Path::new("/src/geometria"));

        assert_eq!(lines[0], "Geometria");
        assert_eq!(lines[1], "    Sacred patterns, generated");
        assert_eq!(lines[2], "    Source: collection.toml");
        let headers: Vec<&String> = lines
            .iter()
            .filter(|l| !l.starts_with(' ') && l.contains(" ("))
            .collect();
        assert_eq!(
            headers,
            vec![
                "Animated GIFs (3)",
                "PDF Posters (3)",
                "Standalone Pieces (2)",
                "Source Code (2)"
            ]
        );
        assert!(lines.contains(&"    001 Seed of Life [Sacred]".to_string()));
        assert!(lines.contains(&"        Source: gif/1-flower-of-life.gif".to_string()));
        assert!(lines.contains(&"    002 torus-knot (html)".to_string()));
        assert!(!lines.contains(&"Missing".to_string()));
    }

    #[test]
    fn check_appends_missing_assets() {
        let missing = vec![MissingAsset {
            kind: AssetKind::Pdf,
            name: "Vesica".into(),
            path: "2-vesica.pdf".into(),
            problem: AssetProblem::Missing,
        }];
        let report = check_report(Collection::default(), missing);
        let lines = format_check_output(&report, Path::new("/src/geometria"));

        assert_eq!(lines[0], "(unnamed collection)");
        assert_eq!(
            &lines[lines.len() - 2..],
            &["Missing".to_string(), "    pdf 2-vesica.pdf (Vesica)".to_string()]
        );
    }

    #[test]
    fn check_marks_assets_outside_collection() {
        let missing = vec![MissingAsset {
            kind: AssetKind::Standalone,
            name: "Shared".into(),
            path: "../shared.png".into(),
            problem: AssetProblem::OutsideCollection,
        }];
        let report = check_report(Collection::default(), missing);
        let lines = format_check_output(&report, Path::new("/src/geometria"));
        assert_eq!(
            lines.last().unwrap(),
            "    standalone ../shared.png (Shared) [outside collection]"
        );
    }

    #[test]
    fn build_summary_lists_cards_and_series() {
        let collection = sample_collection();
        let report = BuildReport {
            name: "Geometria".into(),
            stats: stats(&collection),
            sections: vec![
                (Section::Gifs, RenderOutcome::Rendered { cards: 3 }),
                (Section::Posters, RenderOutcome::Rendered { cards: 3 }),
            ],
            series: vec!["Fractals".into(), "Sacred".into()],
            faded_in: 10,
            written: vec![PathBuf::from("hero.svg"), PathBuf::from("index.html")],
            missing: Vec::new(),
        };
        let lines = format_build_output(&report);

        assert_eq!(lines[0], "Geometria \u{2192} index.html");
        assert_eq!(lines[1], "    Animated GIFs: 3 cards");
        assert_eq!(lines[2], "    PDF Posters: 3 cards (Fractals, Sacred)");
        assert!(lines[3].starts_with("    Stats: 3 PDF Posters \u{b7} 3 Animated GIFs"));
        assert_eq!(lines.last().unwrap(), "Wrote 2 files");
    }
}
