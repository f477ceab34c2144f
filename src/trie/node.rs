use std::fmt::{Debug, Formatter};
use std::mem::take;

use metrics::counter;
use serde::{Serialize, Serializer};

use crate::alphabet::{letter_at, SLOTS, TERMINATOR_SLOT};

/// One entry of a node. The terminator slot only ever holds `Empty` or
/// `End`; letter slots only ever hold `Empty` or `Child`.
#[derive(PartialEq, Eq, Debug, Default)]
pub enum Slot {
    #[default]
    Empty,
    End,
    Child(Box<Node>),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub(crate) fn child(&self) -> Option<&Node> {
        match self {
            Slot::Child(node) => Some(node.as_ref()),
            Slot::Empty | Slot::End => None,
        }
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        match self {
            Slot::Empty => serializer.serialize_none(),
            Slot::End => serializer.serialize_bool(true),
            Slot::Child(node) => node.serialize(serializer),
        }
    }
}

#[derive(Serialize, Default)]
#[serde(transparent)]
pub struct Node {
    pub(crate) slots: [Slot; SLOTS],
}

impl Node {
    pub fn is_end(&self) -> bool {
        !self.slots[TERMINATOR_SLOT].is_empty()
    }

    pub(crate) fn set_end(&mut self, end: bool) {
        self.slots[TERMINATOR_SLOT] = if end { Slot::End } else { Slot::Empty };
    }

    /// True when none of the 27 slots carries information.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().filter(|x| !x.is_empty()).count()
    }

    pub(crate) fn get_child(&self, slot: usize) -> Option<&Node> {
        self.slots[slot].child()
    }

    pub(crate) fn get_child_mut(&mut self, slot: usize) -> Option<&mut Node> {
        match &mut self.slots[slot] {
            Slot::Child(node) => Some(node.as_mut()),
            Slot::Empty | Slot::End => None,
        }
    }

    fn create_child(&mut self, slot: usize) {
        self.slots[slot] = Slot::Child(Box::default());
        counter!("trie_nodes_allocated", 1);
    }

    pub(crate) fn get_or_create_child(&mut self, slot: usize) -> &mut Node {
        debug_assert_ne!(slot, TERMINATOR_SLOT);
        if self.get_child(slot).is_none() {
            self.create_child(slot);
        }
        match &mut self.slots[slot] {
            Slot::Child(node) => node,
            Slot::Empty | Slot::End => unreachable!("child slot {} was just filled", slot),
        }
    }

    /// Releases the child at `slot`, returning how many nodes went with it.
    pub(crate) fn release_child(&mut self, slot: usize) -> usize {
        match take(&mut self.slots[slot]) {
            Slot::Child(node) => node.count_nodes(),
            Slot::Empty | Slot::End => 0,
        }
    }

    fn count_nodes(&self) -> usize {
        let mut count = 0;
        self.traverse_prefix(&mut |_, _| count += 1);
        count
    }

    pub(crate) fn take_children(&mut self) -> impl Iterator<Item=Box<Node>> + '_ {
        self.slots.iter_mut()
            .filter_map(|slot| match take(slot) {
                Slot::Child(node) => Some(node),
                Slot::Empty | Slot::End => None,
            })
    }
}

// Iterative: the derived drop would take one stack frame per symbol of the
// longest word.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.take_children().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
        }
    }
}

// Pairwise walk with an explicit stack, for the same reason as `Drop`.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            for (l, r) in left.slots.iter().zip(right.slots.iter()) {
                match (l, r) {
                    (Slot::Child(l), Slot::Child(r)) => stack.push((l.as_ref(), r.as_ref())),
                    (Slot::Empty, Slot::Empty) | (Slot::End, Slot::End) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("is_end", &self.is_end())
            .field("children", &self.slots.iter()
                .enumerate()
                .filter(|(_, x)| x.child().is_some())
                .filter_map(|(idx, _)| letter_at(idx))
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
