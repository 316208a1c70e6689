//! # Folio
//!
//! A static gallery page generator for generative art collections. One data
//! file describes the artworks (looping GIFs, PDF posters, standalone pieces
//! and the scripts that made them); folio turns it into a single page with a
//! counted hero, one card grid per category, a series filter for posters and
//! a particle-field backdrop.
//!
//! # Architecture: Render Into a Document, Then Serialize
//!
//! ```text
//! 1. Load      config.toml + collection.toml  →  Collection
//! 2. Render    Collection  →  Document        (containers keyed by id)
//! 3. Publish   Document    →  dist/index.html + dist/hero.svg
//! ```
//!
//! Renderers never touch a browser or the filesystem. They write into the
//! [`dom::Container`]s of an in-memory [`dom::Document`], the same way the
//! page scripts would fill elements by id. That keeps every renderer a pure
//! function of `(items, base_path)` and lets tests assert on a container's
//! content directly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Collection data model (`GifItem`, `PdfItem`, `StandaloneItem`, `SourceItem`) |
//! | [`dom`] | Rendering target: `Document`, `Container`, `RenderOutcome` |
//! | [`gallery`] | Card grid renderers, one per category |
//! | [`filter`] | Poster series filter: pure state machine plus controller |
//! | [`page`] | Collection page assembler: hero, nav, section scaffolding, page shell |
//! | [`fade`] | Fade-in observer registering newly inserted elements |
//! | [`hero`] | Particle simulation, canvas abstraction, frame loop |
//! | [`collection`] | Collection file loading, filesystem discovery, asset checks |
//! | [`naming`] | `NN-name` filename convention parser used by discovery |
//! | [`config`] | Layered `config.toml` loading, validation, CSS generation |
//! | [`site`] | Build pipeline from a collection directory to `dist/` |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Absence Is Not an Error
//!
//! A missing container, an empty item list or a missing canvas makes the
//! corresponding step a no-op. Renderers report this as
//! [`dom::RenderOutcome::Skipped`] instead of failing, so a page with only
//! posters renders exactly the poster section and nothing else complains.
//! Errors are reserved for things the user must fix: unreadable files, bad
//! TOML/JSON, invalid config values.
//!
//! ## Filtering as a State Machine
//!
//! The poster filter has one piece of state, the active filter. Clicks are
//! mapped to [`filter::ClickTarget`]s and fed through the pure
//! [`filter::transition`] function; only [`filter::PdfFilterController`]
//! touches the document. The filtering rules are tested without any markup.
//!
//! ## Scheduled Frames With a Stop Handle
//!
//! The hero animation does not reschedule itself. A [`hero::FrameLoop`] pulls
//! ticks from a [`hero::FrameClock`] and can be cancelled through a
//! [`hero::StopHandle`]. Tests use [`hero::ManualClock`] to step the
//! simulation exactly once; the build runs a fixed number of frames and
//! publishes the last one as SVG.
//!
//! ## Maud Over Template Strings
//!
//! Cards are built with [Maud](https://maud.lambda.xyz/) rather than string
//! concatenation. Markup errors are compile errors and every interpolated
//! value is escaped, so artwork names and descriptions can never inject
//! markup into the page.
//!
//! ## Config Cascading (Shared → Collection)
//!
//! ```text
//! collections/config.toml            ← shared (overrides stock defaults)
//! collections/geometria/config.toml  ← collection (overrides shared)
//! ```
//!
//! Colors and hero settings are usually shared across collections, with the
//! odd per-collection tweak. The merge logic lives in [`config::merge_toml`].

pub mod collection;
pub mod config;
pub mod dom;
pub mod fade;
pub mod filter;
pub mod gallery;
pub mod hero;
pub mod naming;
pub mod output;
pub mod page;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
