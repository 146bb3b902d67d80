mod content;
mod node;

pub use content::Content;
pub use node::Element;

pub(crate) use node::generate_id;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Locate the sibling list holding `id`, with its index in that list.
pub(crate) fn find_siblings<'a>(root: &'a Element, id: &str) -> Option<(&'a [Element], usize)> {
    let Content::Children(children) = &root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|c| c.id == id) {
        return Some((children.as_slice(), index));
    }

    for child in children {
        if let Some(found) = find_siblings(child, id) {
            return Some(found);
        }
    }

    None
}

pub(crate) fn find_siblings_mut<'a>(
    root: &'a mut Element,
    id: &str,
) -> Option<(&'a mut Vec<Element>, usize)> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|c| c.id == id) {
        return Some((children, index));
    }

    for child in children.iter_mut() {
        if let Some(found) = find_siblings_mut(child, id) {
            return Some(found);
        }
    }

    None
}
