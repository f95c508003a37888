//==============================================================================
// Copy lineage
//==============================================================================
//
// Records where every buffer's bytes came from: a fresh allocation or a deep
// copy of another buffer, plus the names of the shallow aliases handed out
// for it. `report` walks the deep-copy edges out of one buffer and shows
// which of its copies were released while still holding data.
//
// Per thread, like the ledger.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

thread_local! {
    static LINEAGE: RefCell<LineageGraph> = RefCell::new(LineageGraph::default());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Live,
    Wiped,
    /// Released with data still in it.
    Unwiped,
}

#[derive(Debug, Clone)]
struct Node {
    capacity: usize,
    parent: Option<BufferId>,
    aliases: Vec<&'static str>,
    release: Release,
}

#[derive(Debug, Default)]
struct LineageGraph {
    next_id: u64,
    nodes: BTreeMap<BufferId, Node>,
}

impl LineageGraph {
    fn children(&self, id: BufferId) -> impl Iterator<Item = BufferId> + '_ {
        self.nodes
            .iter()
            .filter(move |(_, node)| node.parent == Some(id))
            .map(|(&child, _)| child)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRecord {
    pub id: BufferId,
    pub parent: Option<BufferId>,
    /// Deep-copy hops from the traced buffer.
    pub depth: usize,
    pub capacity: usize,
    pub release: Release,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageReport {
    pub root: BufferId,
    pub aliases: Vec<&'static str>,
    /// The traced buffer first, then its copies breadth-first.
    pub copies: Vec<CopyRecord>,
}

impl LineageReport {
    pub fn record(&self, id: BufferId) -> Option<&CopyRecord> {
        self.copies.iter().find(|record| record.id == id)
    }

    /// Buffers holding the traced data that were released without a wipe.
    pub fn unwiped(&self) -> Vec<BufferId> {
        self.copies
            .iter()
            .filter(|record| record.release == Release::Unwiped)
            .map(|record| record.id)
            .collect()
    }
}

pub fn register(capacity: usize) -> BufferId {
    LINEAGE.with(|graph| {
        let mut graph = graph.borrow_mut();
        let id = BufferId(graph.next_id);
        graph.next_id += 1;
        graph.nodes.insert(
            id,
            Node {
                capacity,
                parent: None,
                aliases: Vec::new(),
                release: Release::Live,
            },
        );
        id
    })
}

pub fn record_deep_copy(source: BufferId, copy: BufferId) {
    LINEAGE.with(|graph| {
        if let Some(node) = graph.borrow_mut().nodes.get_mut(&copy) {
            node.parent = Some(source);
        }
    });
}

pub fn record_alias(id: BufferId, name: &'static str) {
    LINEAGE.with(|graph| {
        if let Some(node) = graph.borrow_mut().nodes.get_mut(&id) {
            node.aliases.push(name);
        }
    });
}

/// Buffers registered before a `reset` are ignored.
pub fn record_release(id: BufferId, wiped: bool) {
    LINEAGE.with(|graph| {
        if let Some(node) = graph.borrow_mut().nodes.get_mut(&id) {
            node.release = if wiped { Release::Wiped } else { Release::Unwiped };
        }
    });
}

pub fn report(root: BufferId) -> LineageReport {
    LINEAGE.with(|graph| {
        let graph = graph.borrow();
        let aliases = graph
            .nodes
            .get(&root)
            .map(|node| node.aliases.clone())
            .unwrap_or_default();

        let mut copies = Vec::new();
        let mut queue = VecDeque::from([(root, 0)]);
        while let Some((id, depth)) = queue.pop_front() {
            let Some(node) = graph.nodes.get(&id) else {
                continue;
            };
            copies.push(CopyRecord {
                id,
                parent: node.parent,
                depth,
                capacity: node.capacity,
                release: node.release,
            });
            queue.extend(graph.children(id).map(|child| (child, depth + 1)));
        }

        LineageReport { root, aliases, copies }
    })
}

/// Forgets every recorded buffer. Ids keep counting up.
pub fn reset() {
    LINEAGE.with(|graph| graph.borrow_mut().nodes.clear());
}
