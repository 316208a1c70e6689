//! Fade-in observation.
//!
//! Elements marked with the `fade-in` class get a visibility-triggered CSS
//! transition on the published page. The renderers only need one thing from
//! this collaborator: after inserting markup, call [`FadeInObserver::observe`]
//! so the new elements are registered. Calling it again without DOM changes
//! registers nothing.

use crate::dom::Document;
use std::collections::BTreeSet;

/// Class that marks an element for fade-in.
pub const FADE_IN_CLASS: &str = "fade-in";

/// Identity of an observed element: container, content generation, ordinal.
type ElementKey = (String, u64, usize);

#[derive(Debug, Default)]
pub struct FadeInObserver {
    observed: BTreeSet<ElementKey>,
}

impl FadeInObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every `fade-in` element currently in `doc`. Returns how many
    /// of them were not observed before.
    ///
    /// Elements from replaced content (an older generation, or a container
    /// that is gone) are dropped.
    pub fn observe(&mut self, doc: &Document) -> usize {
        self.observed.retain(|(id, generation, _)| {
            doc.get(id).is_some_and(|c| c.generation() == *generation)
        });
        let mut added = 0;
        for container in doc.containers() {
            let count = count_marked(container.content());
            for ordinal in 0..count {
                let key = (container.id().to_string(), container.generation(), ordinal);
                if self.observed.insert(key) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Elements observed in the current content of the document.
    pub fn observed(&self) -> usize {
        self.observed.len()
    }
}

/// Number of elements whose `class` attribute contains the fade-in token.
fn count_marked(html: &str) -> usize {
    html.split("class=\"")
        .skip(1)
        .filter(|rest| {
            rest.split('"')
                .next()
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == FADE_IN_CLASS))
        })
        .count()
}
