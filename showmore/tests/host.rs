//! Drives the widget through a host that is not a document at all: a flat
//! list of numbered nodes under a single container.

use std::collections::HashSet;
use std::sync::Arc;

use pagedom::{Element, Selector, SlideOptions};
use showmore::{Host, Phase, ShowMore, ShowMoreConfig, ShowMoreOptions, WidgetResult};

const CONTAINER: u32 = 0;

#[derive(Debug, Default)]
struct FlatHost {
    /// Children of the container, in order.
    order: Vec<u32>,
    hidden: HashSet<u32>,
    next_id: u32,
    refuse_insert: bool,
    refuse_move: bool,
    slides: Vec<Vec<u32>>,
    inserted: Vec<Element>,
}

impl FlatHost {
    fn with_items(n: u32) -> Self {
        Self {
            order: (1..=n).collect(),
            next_id: n + 1,
            ..Default::default()
        }
    }

    fn visible(&self) -> Vec<u32> {
        self.order
            .iter()
            .copied()
            .filter(|node| !self.hidden.contains(node))
            .collect()
    }

    fn position(&self, node: u32) -> Option<usize> {
        self.order.iter().position(|n| *n == node)
    }
}

impl Host for FlatHost {
    type Node = u32;

    fn exists(&self, node: &u32) -> bool {
        *node == CONTAINER || self.order.contains(node)
    }

    // Selectors are ignored; every numbered child counts as an item.
    fn children(&self, parent: &u32, _selector: &Selector) -> Vec<u32> {
        if *parent == CONTAINER {
            self.order.clone()
        } else {
            Vec::new()
        }
    }

    fn next_all(&self, node: &u32, _selector: &Selector) -> Vec<u32> {
        match self.position(*node) {
            Some(index) => self.order[index + 1..].to_vec(),
            None => Vec::new(),
        }
    }

    fn is_hidden(&self, node: &u32) -> bool {
        self.hidden.contains(node)
    }

    fn hide(&mut self, nodes: &[u32]) {
        self.hidden.extend(nodes.iter().copied());
    }

    fn slide_down(&mut self, nodes: &[u32], _options: &SlideOptions) {
        for node in nodes {
            self.hidden.remove(node);
        }
        self.slides.push(nodes.to_vec());
    }

    fn insert_after(&mut self, element: Element, anchor: &u32) -> Option<u32> {
        if self.refuse_insert {
            return None;
        }
        let index = self.position(*anchor)?;
        let id = self.next_id;
        self.next_id += 1;
        self.order.insert(index + 1, id);
        self.inserted.push(element);
        Some(id)
    }

    fn move_after(&mut self, node: &u32, anchor: &u32) -> bool {
        if self.refuse_move {
            return false;
        }
        let (Some(from), Some(_)) = (self.position(*node), self.position(*anchor)) else {
            return false;
        };
        self.order.remove(from);
        let Some(to) = self.position(*anchor) else {
            return false;
        };
        self.order.insert(to + 1, *node);
        true
    }

    fn remove(&mut self, node: &u32) {
        self.order.retain(|n| n != node);
        self.hidden.remove(node);
    }
}

fn config(initial: i64, batch: i64) -> Arc<ShowMoreConfig> {
    let options = ShowMoreOptions::new()
        .initial_items(initial)
        .batch_size(batch)
        .slide_options(SlideOptions::instant());
    Arc::new(ShowMoreConfig::from_options(&options).unwrap())
}

#[test]
fn test_widget_runs_on_any_host() {
    let mut host = FlatHost::with_items(7);
    let mut widget = ShowMore::new(&mut host, CONTAINER, config(3, 3)).unwrap();

    let control = *widget.control().unwrap();
    assert_eq!(control, 8);
    assert_eq!(host.visible(), vec![1, 2, 3, 8]);
    assert!(host.inserted[0].clickable);

    assert_eq!(widget.reveal(&mut host), WidgetResult::Activated);
    assert_eq!(host.visible(), vec![1, 2, 3, 4, 5, 6, 8]);
    assert_eq!(widget.phase(), Phase::Expanding);
    assert_eq!(widget.state().revealed(), 6);

    assert_eq!(widget.reveal(&mut host), WidgetResult::Activated);
    assert_eq!(host.visible(), (1..=7).collect::<Vec<_>>());
    assert_eq!(widget.phase(), Phase::FullyExpanded);
    assert!(widget.control().is_none());

    assert_eq!(host.slides, vec![vec![4, 5, 6], vec![7]]);
    assert_eq!(widget.reveal(&mut host), WidgetResult::Ignored);
}

#[test]
fn test_missing_container() {
    let mut host = FlatHost::with_items(3);
    let result = ShowMore::new(&mut host, 42, config(1, 1));
    assert!(result.is_err());
}

#[test]
fn test_refused_insert_shows_everything() {
    let mut host = FlatHost {
        refuse_insert: true,
        ..FlatHost::with_items(5)
    };
    let mut widget = ShowMore::new(&mut host, CONTAINER, config(2, 1)).unwrap();

    assert_eq!(host.visible(), vec![1, 2, 3, 4, 5]);
    assert!(widget.state().is_terminal());
    assert_eq!(widget.state().revealed(), 5);
    assert!(widget.control().is_none());
    assert_eq!(widget.reveal(&mut host), WidgetResult::Ignored);
}

#[test]
fn test_refused_insert_not_needed_when_items_fit() {
    let mut host = FlatHost {
        refuse_insert: true,
        ..FlatHost::with_items(2)
    };
    let widget = ShowMore::new(&mut host, CONTAINER, config(2, 1)).unwrap();
    assert_eq!(widget.phase(), Phase::FullyExpanded);
    assert!(host.slides.is_empty());
    assert!(host.hidden.is_empty());
}

#[test]
fn test_refused_move_shows_everything() {
    let mut host = FlatHost::with_items(8);
    let mut widget = ShowMore::new(&mut host, CONTAINER, config(2, 2)).unwrap();
    let control = *widget.control().unwrap();
    host.refuse_move = true;

    assert_eq!(widget.reveal(&mut host), WidgetResult::Activated);
    assert!(widget.state().is_terminal());
    assert_eq!(widget.state().revealed(), 8);
    assert!(!host.exists(&control));
    assert_eq!(host.visible(), (1..=8).collect::<Vec<_>>());
    assert_eq!(host.slides, vec![vec![3, 4], vec![5, 6, 7, 8]]);
}

#[test]
fn test_teardown_restores_container() {
    let mut host = FlatHost::with_items(5);
    let mut widget = ShowMore::new(&mut host, CONTAINER, config(2, 1)).unwrap();
    let control = *widget.control().unwrap();

    widget.teardown(&mut host);
    assert!(!host.exists(&control));
    assert_eq!(host.visible(), vec![1, 2, 3, 4, 5]);
    assert_eq!(widget.phase(), Phase::FullyExpanded);

    // A second teardown has nothing left to do.
    widget.teardown(&mut host);
    assert_eq!(host.slides.len(), 1);
}

#[test]
fn test_items_removed_under_the_widget() {
    let mut host = FlatHost::with_items(6);
    let mut widget = ShowMore::new(&mut host, CONTAINER, config(2, 2)).unwrap();

    // Both items of the next batch disappear before activation.
    host.remove(&3);
    host.remove(&4);

    widget.reveal(&mut host);
    assert_eq!(host.slides, vec![vec![5, 6]]);
    assert_eq!(widget.phase(), Phase::FullyExpanded);
    assert_eq!(host.visible(), vec![1, 2, 5, 6]);
}

#[test]
fn test_control_removed_under_the_widget() {
    let mut host = FlatHost::with_items(6);
    let mut widget = ShowMore::new(&mut host, CONTAINER, config(2, 2)).unwrap();
    let control = *widget.control().unwrap();
    host.remove(&control);

    // No items follow a control that is gone; the widget gives up.
    assert_eq!(widget.reveal(&mut host), WidgetResult::Activated);
    assert!(widget.state().is_terminal());
    assert_eq!(host.visible(), vec![1, 2]);
}
