//! The document capabilities a widget needs.
//!
//! The widget never touches a document directly. Everything goes through
//! [`Host`], which [`pagedom::Document`] implements and which tests can
//! implement over any fake node store.

use std::fmt::Debug;
use std::hash::Hash;

use pagedom::{Document, Element, Selector, SlideOptions};

pub trait Host {
    /// Handle to a node in the host document.
    type Node: Clone + Eq + Hash + Debug;

    /// Whether `node` is currently in the document.
    fn exists(&self, node: &Self::Node) -> bool;

    /// Whether `node` is `ancestor` or one of its descendants. Hosts without
    /// nesting can keep the default, which only matches the node itself.
    fn is_within(&self, node: &Self::Node, ancestor: &Self::Node) -> bool {
        node == ancestor
    }

    /// Direct children of `parent` matching `selector`, in document order.
    fn children(&self, parent: &Self::Node, selector: &Selector) -> Vec<Self::Node>;

    /// Following siblings of `node` matching `selector`, in document order.
    fn next_all(&self, node: &Self::Node, selector: &Selector) -> Vec<Self::Node>;

    fn is_hidden(&self, node: &Self::Node) -> bool;

    /// Hide nodes immediately.
    fn hide(&mut self, nodes: &[Self::Node]);

    /// Reveal nodes with a slide. The host may animate asynchronously; nodes
    /// count as visible as soon as this returns.
    fn slide_down(&mut self, nodes: &[Self::Node], options: &SlideOptions);

    /// Insert a new element right after `anchor`. Returns its handle, or None
    /// if it could not be inserted.
    fn insert_after(&mut self, element: Element, anchor: &Self::Node) -> Option<Self::Node>;

    /// Move an existing node to right after `anchor`.
    fn move_after(&mut self, node: &Self::Node, anchor: &Self::Node) -> bool;

    /// Remove a node and its subtree.
    fn remove(&mut self, node: &Self::Node);
}

impl Host for Document {
    type Node = String;

    fn exists(&self, node: &String) -> bool {
        self.contains(node)
    }

    fn is_within(&self, node: &String, ancestor: &String) -> bool {
        Document::is_within(self, node, ancestor)
    }

    fn children(&self, parent: &String, selector: &Selector) -> Vec<String> {
        Document::children(self, parent, selector)
    }

    fn next_all(&self, node: &String, selector: &Selector) -> Vec<String> {
        Document::next_all(self, node, selector)
    }

    fn is_hidden(&self, node: &String) -> bool {
        Document::is_hidden(self, node)
    }

    fn hide(&mut self, nodes: &[String]) {
        Document::hide(self, nodes);
    }

    fn slide_down(&mut self, nodes: &[String], options: &SlideOptions) {
        Document::slide_down(self, nodes, options);
    }

    fn insert_after(&mut self, element: Element, anchor: &String) -> Option<String> {
        Document::insert_after(self, element, anchor)
    }

    fn move_after(&mut self, node: &String, anchor: &String) -> bool {
        Document::move_after(self, node, anchor)
    }

    fn remove(&mut self, node: &String) {
        Document::remove(self, node);
    }
}
