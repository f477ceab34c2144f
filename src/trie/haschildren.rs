use derive_new::new;
use serde::Serialize;

use crate::trie::node::Node;

#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct TrieStats {
    pub nodes: usize,
    pub words: usize,
    pub max_depth: usize,
}

impl Node {
    pub(crate) fn children(&self) -> impl Iterator<Item=&Node> {
        self.slots.iter().filter_map(|slot| slot.child())
    }

    /// Visits every node below and including `self` with its depth, parents
    /// before children. Uses an explicit stack rather than recursion.
    pub(crate) fn traverse_prefix<'f, F>(&'f self, f: &mut F)
        where F: FnMut(&'f Node, usize) {
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            f(node, depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
    }

    pub(crate) fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        self.traverse_prefix(&mut |node, depth| {
            stats.nodes += 1;
            if node.is_end() {
                stats.words += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
        });
        stats
    }
}
