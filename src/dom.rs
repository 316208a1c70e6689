//! In-memory rendering target.
//!
//! Renderers never look containers up by a global id. They receive an explicit
//! `Option<&mut Container>` and report what they did through [`RenderOutcome`],
//! so "rendered" and "skipped" are distinguishable without inspecting markup.
//!
//! A [`Document`] is the stand-in for the page: a flat registry of mounted
//! containers. Writing markup that contains an empty element with a given id
//! and then mounting that id models the browser creating the element; on
//! [`Document::serialize`] each mounted child's content is substituted into its
//! placeholder in the parent.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Why a render left its container untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The target container is not mounted.
    MissingContainer,
    /// There was nothing to render.
    Empty,
}

/// Result of a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The container content was replaced with `cards` cards.
    Rendered { cards: usize },
    Skipped(Skip),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }

    /// Number of cards written, zero when skipped.
    pub fn cards(&self) -> usize {
        match self {
            RenderOutcome::Rendered { cards } => *cards,
            RenderOutcome::Skipped(_) => 0,
        }
    }
}

/// A mounted element whose inner HTML is owned by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    content: String,
    generation: u64,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            generation: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Bumped on every content replacement; elements from an older
    /// generation no longer exist.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the whole content. There is no incremental diffing.
    pub fn set_content(&mut self, html: impl Into<String>) {
        self.content = html.into();
        self.generation += 1;
    }
}

/// Registry of mounted containers.
#[derive(Debug, Clone, Default)]
pub struct Document {
    containers: BTreeMap<String, Container>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a fresh, empty container. An existing container with the same id
    /// is replaced, like an element recreated by a parent's re-render.
    pub fn mount(&mut self, id: &str) -> &mut Container {
        match self.containers.entry(id.to_string()) {
            Entry::Occupied(entry) => {
                let container = entry.into_mut();
                container.content.clear();
                container.generation += 1;
                container
            }
            Entry::Vacant(entry) => entry.insert(Container::new(id)),
        }
    }

    /// Builder-style [`mount`](Self::mount) for setting up documents.
    pub fn with(mut self, id: &str) -> Self {
        self.mount(id);
        self
    }

    pub fn unmount(&mut self, id: &str) -> Option<Container> {
        self.containers.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    /// Content of a mounted container.
    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(Container::content)
    }

    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.values()
    }

    /// Composed HTML of `root_id` with every mounted descendant inlined into
    /// its empty placeholder element. `None` if `root_id` is not mounted.
    pub fn serialize(&self, root_id: &str) -> Option<String> {
        let mut visiting = BTreeSet::new();
        self.serialize_inner(root_id, &mut visiting)
    }

    fn serialize_inner<'a>(
        &'a self,
        id: &'a str,
        visiting: &mut BTreeSet<&'a str>,
    ) -> Option<String> {
        let container = self.containers.get(id)?;
        if !visiting.insert(id) {
            return Some(String::new());
        }
        let mut html = container.content.clone();
        for child_id in self.containers.keys() {
            if child_id == id {
                continue;
            }
            let Some(insert_at) = placeholder_end(&html, child_id) else {
                continue;
            };
            if let Some(child_html) = self.serialize_inner(child_id, visiting) {
                html.insert_str(insert_at, &child_html);
            }
        }
        visiting.remove(id);
        Some(html)
    }
}

/// Byte offset just inside an empty element carrying `id="{id}"`, i.e. the
/// position between its opening tag's `>` and its closing tag.
fn placeholder_end(html: &str, id: &str) -> Option<usize> {
    let needle = format!("id=\"{id}\"");
    let attr = html.find(&needle)?;
    let tag_close = attr + html[attr..].find('>')? + 1;
    html[tag_close..].starts_with("</").then_some(tag_close)
}
