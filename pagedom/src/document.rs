//! The document: an owned element tree with the traversal and mutation
//! operations a page script needs.
//!
//! Elements are addressed by id. Operations on ids that are not in the tree
//! are no-ops (logged at debug level) rather than errors.

use std::time::Instant;

use log::{debug, trace};

use crate::animation::{collect_element_ids, SlideState};
use crate::element::{find_element, find_element_mut, find_siblings, find_siblings_mut, Content, Element};
use crate::selector::Selector;
use crate::transitions::SlideOptions;

#[derive(Debug)]
pub struct Document {
    root: Element,
    slides: SlideState,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            slides: SlideState::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Whether `id` is `ancestor` itself or inside its subtree.
    pub fn is_within(&self, id: &str, ancestor: &str) -> bool {
        self.get(ancestor)
            .is_some_and(|el| find_element(el, id).is_some())
    }

    /// Whether the element is hidden. Unknown ids are reported as not hidden.
    pub fn is_hidden(&self, id: &str) -> bool {
        self.get(id).is_some_and(|el| el.hidden)
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    /// Direct children of `parent` matching `selector`, in document order.
    pub fn children(&self, parent: &str, selector: &Selector) -> Vec<String> {
        let Some(parent) = self.get(parent) else {
            debug!("children: no element {parent:?}");
            return Vec::new();
        };
        parent
            .child_elements()
            .iter()
            .filter(|child| selector.matches(child))
            .map(|child| child.id.clone())
            .collect()
    }

    /// Following siblings of `id` matching `selector`, in document order.
    pub fn next_all(&self, id: &str, selector: &Selector) -> Vec<String> {
        let Some((siblings, index)) = find_siblings(&self.root, id) else {
            debug!("next_all: {id:?} has no parent in the document");
            return Vec::new();
        };
        let found: Vec<String> = siblings[index + 1..]
            .iter()
            .filter(|sibling| selector.matches(sibling))
            .map(|sibling| sibling.id.clone())
            .collect();
        trace!("next_all({id:?}, {selector}) -> {} elements", found.len());
        found
    }

    /// Ids of all visible direct children of `parent`, in document order.
    pub fn visible_children(&self, parent: &str) -> Vec<String> {
        self.get(parent)
            .map(|p| {
                p.child_elements()
                    .iter()
                    .filter(|c| !c.hidden)
                    .map(|c| c.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Hide elements immediately. Any slide running on them is stopped.
    pub fn hide<S: AsRef<str>>(&mut self, ids: &[S]) {
        for id in ids {
            let id = id.as_ref();
            self.slides.cancel(id);
            self.set_hidden(id, true);
        }
    }

    /// Show elements immediately, without a slide.
    pub fn show<S: AsRef<str>>(&mut self, ids: &[S]) {
        for id in ids {
            self.set_hidden(id.as_ref(), false);
        }
    }

    /// Reveal elements with a slide-down. Elements become visible right away;
    /// the slide finishes later and is reported by [`Document::tick`].
    pub fn slide_down<S: AsRef<str>>(&mut self, ids: &[S], options: &SlideOptions) {
        self.slide_down_at(ids, options, Instant::now());
    }

    pub fn slide_down_at<S: AsRef<str>>(&mut self, ids: &[S], options: &SlideOptions, now: Instant) {
        for id in ids {
            let id = id.as_ref();
            if self.set_hidden(id, false) {
                self.slides.start(id, options, now);
            }
        }
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.hidden = hidden;
                true
            }
            None => {
                debug!("set_hidden: no element {id:?}");
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Insert `element` right after `anchor` (or move it there if an element
    /// with the same id is already in the document). Returns the inserted id,
    /// or None if the anchor is not in the document.
    pub fn insert_after(&mut self, element: Element, anchor: &str) -> Option<String> {
        if find_element(&element, anchor).is_some() {
            debug!("insert_after: anchor {anchor:?} is inside the inserted element");
            return None;
        }
        if find_siblings(&self.root, anchor).is_none() {
            debug!("insert_after: anchor {anchor:?} has no parent in the document");
            return None;
        }

        // Detach first so the element is never in the tree twice.
        let element = match find_siblings_mut(&mut self.root, &element.id) {
            Some((siblings, index)) => {
                siblings.remove(index);
                element
            }
            None => element,
        };

        let (siblings, index) = find_siblings_mut(&mut self.root, anchor)?;
        let id = element.id.clone();
        siblings.insert(index + 1, element);
        trace!("insert_after: {id:?} after {anchor:?}");
        Some(id)
    }

    /// Move an element already in the document to just after `anchor`.
    pub fn move_after(&mut self, id: &str, anchor: &str) -> bool {
        let Some(element) = self.get(id) else {
            return false;
        };
        if find_element(element, anchor).is_some() || find_siblings(&self.root, anchor).is_none() {
            return false;
        }
        let Some((siblings, index)) = find_siblings_mut(&mut self.root, id) else {
            return false;
        };
        let element = siblings.remove(index);
        self.insert_after(element, anchor).is_some()
    }

    /// Append a child to `parent`. Returns the child id, or None if the parent
    /// is not in the document.
    pub fn append_child(&mut self, parent: &str, child: Element) -> Option<String> {
        let parent = self.get_mut(parent)?;
        let id = child.id.clone();
        match &mut parent.content {
            Content::Children(children) => children.push(child),
            _ => parent.content = Content::Children(vec![child]),
        }
        Some(id)
    }

    /// Remove an element and its subtree. Slides running inside it are
    /// dropped.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let Some((siblings, index)) = find_siblings_mut(&mut self.root, id) else {
            debug!("remove: {id:?} has no parent in the document");
            return None;
        };
        let removed = siblings.remove(index);
        self.slides.cleanup(&collect_element_ids(&self.root));
        trace!("remove: {id:?}");
        Some(removed)
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.slides.set_reduced_motion(enabled);
    }

    pub fn has_active_slides(&self) -> bool {
        self.slides.has_active_slides()
    }

    /// Eased slide progress of an element, if it is sliding.
    pub fn slide_progress(&self, id: &str, now: Instant) -> Option<f32> {
        self.slides.progress(id, now)
    }

    /// Advance slides to `now` and return the ids whose slide completed.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        let completed = self.slides.tick(now);
        if !completed.is_empty() {
            trace!("tick: {} slides completed", completed.len());
        }
        completed
    }
}
