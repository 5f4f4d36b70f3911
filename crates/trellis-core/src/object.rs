//! Arena-based object model for widget trees.
//!
//! Provides the storage layer the widget system is built on:
//! - Stable node identifiers via arena-based storage ([`WidgetId`])
//! - Parent-child ownership with order-preserving child sequences
//! - Circular-parentage rejection
//! - Ancestor and preorder traversal helpers
//!
//! The arena owns every node value; the tree structure is expressed purely
//! through ids, so back-references never alias the owning sequence. A node
//! whose parent link is `None` is either a root or an orphan awaiting
//! explicit destruction.
//!
//! # Key Types
//!
//! - [`WidgetId`] - Unique stable identifier for each node
//! - [`ObjectArena`] - Generic arena managing values and topology

use slotmap::{SlotMap, new_key_type};

use crate::error::{ObjectError, ObjectResult};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a node in an [`ObjectArena`].
    ///
    /// `WidgetId`s are stable handles that remain valid as the tree mutates
    /// around them. They become invalid when the node is removed from the
    /// arena.
    pub struct WidgetId;
}

/// One arena slot: the owned value plus its tree links.
#[derive(Debug)]
struct Entry<T> {
    value: T,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
}

/// Generic arena holding tree-structured values.
///
/// The arena is the single owner of all node values. Child sequences
/// preserve insertion order, including across interior removals; every
/// mutation keeps the `child.parent == parent` invariant in both directions.
#[derive(Debug, Default)]
pub struct ObjectArena<T> {
    entries: SlotMap<WidgetId, Entry<T>>,
}

impl<T> ObjectArena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Number of live nodes, attached or orphaned.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the arena holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether an id refers to a live node.
    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.entries.contains_key(id)
    }

    /// Insert a value with no parent (a root or detached node).
    pub fn insert_detached(&mut self, value: T) -> WidgetId {
        self.entries.insert(Entry {
            value,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Insert a value as the last child of `parent`.
    pub fn insert(&mut self, parent: WidgetId, value: T) -> ObjectResult<WidgetId> {
        if !self.contains(parent) {
            return Err(ObjectError::InvalidWidgetId);
        }
        let id = self.entries.insert(Entry {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.entries[parent].children.push(id);
        Ok(id)
    }

    /// Insert a value as a child of `parent` at `index`.
    ///
    /// Children at and after `index` shift right; an out-of-range index
    /// appends.
    pub fn insert_at(&mut self, parent: WidgetId, index: usize, value: T) -> ObjectResult<WidgetId> {
        if !self.contains(parent) {
            return Err(ObjectError::InvalidWidgetId);
        }
        let id = self.entries.insert(Entry {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        let children = &mut self.entries[parent].children;
        let index = index.min(children.len());
        children.insert(index, id);
        Ok(id)
    }

    /// Get a reference to a node's value.
    #[inline]
    pub fn get(&self, id: WidgetId) -> Option<&T> {
        self.entries.get(id).map(|e| &e.value)
    }

    /// Get a mutable reference to a node's value.
    #[inline]
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut T> {
        self.entries.get_mut(id).map(|e| &mut e.value)
    }

    /// Get a node's parent link.
    pub fn parent(&self, id: WidgetId) -> ObjectResult<Option<WidgetId>> {
        self.entries
            .get(id)
            .map(|e| e.parent)
            .ok_or(ObjectError::InvalidWidgetId)
    }

    /// Get a node's children in insertion order.
    pub fn children(&self, id: WidgetId) -> ObjectResult<&[WidgetId]> {
        self.entries
            .get(id)
            .map(|e| e.children.as_slice())
            .ok_or(ObjectError::InvalidWidgetId)
    }

    /// Reparent a node, breaking and reestablishing both link directions
    /// atomically.
    ///
    /// Rejects attempts to make a node an ancestor of itself. With
    /// `new_parent == None` the node becomes an orphan.
    pub fn set_parent(&mut self, id: WidgetId, new_parent: Option<WidgetId>) -> ObjectResult<()> {
        if !self.contains(id) {
            return Err(ObjectError::InvalidWidgetId);
        }
        if let Some(parent) = new_parent {
            if !self.contains(parent) {
                return Err(ObjectError::InvalidWidgetId);
            }
            if parent == id || self.is_ancestor(id, parent) {
                tracing::error!(
                    target: targets::OBJECT,
                    ?id,
                    ?parent,
                    "rejected circular parentage"
                );
                return Err(ObjectError::CircularParentage);
            }
        }

        // Break the old link first so the node is never in two child lists.
        if let Some(old_parent) = self.entries[id].parent {
            let children = &mut self.entries[old_parent].children;
            children.retain(|&c| c != id);
        }
        self.entries[id].parent = new_parent;
        if let Some(parent) = new_parent {
            self.entries[parent].children.push(id);
        }
        Ok(())
    }

    /// Detach the child at `index`, orphaning it.
    ///
    /// The remaining children keep their relative order. Returns the
    /// orphan's id, or `None` for an out-of-range index.
    pub fn detach_child_at(
        &mut self,
        parent: WidgetId,
        index: usize,
    ) -> ObjectResult<Option<WidgetId>> {
        let entry = self
            .entries
            .get_mut(parent)
            .ok_or(ObjectError::InvalidWidgetId)?;
        if index >= entry.children.len() {
            return Ok(None);
        }
        let child = entry.children.remove(index);
        self.entries[child].parent = None;
        Ok(Some(child))
    }

    /// Detach a child by identity, orphaning it.
    ///
    /// A linear search; an absent child is a benign no-op and returns
    /// `Ok(false)`.
    pub fn detach_child(&mut self, parent: WidgetId, child: WidgetId) -> ObjectResult<bool> {
        let entry = self
            .entries
            .get(parent)
            .ok_or(ObjectError::InvalidWidgetId)?;
        let Some(index) = entry.children.iter().position(|&c| c == child) else {
            return Ok(false);
        };
        self.detach_child_at(parent, index)?;
        Ok(true)
    }

    /// Remove a node and its entire subtree from the arena.
    ///
    /// The node is detached from its parent first; every descendant value is
    /// dropped. Returns the number of nodes removed. Removing a dead id is a
    /// benign no-op returning zero.
    pub fn remove_subtree(&mut self, id: WidgetId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        if let Some(parent) = self.entries[id].parent {
            self.entries[parent].children.retain(|&c| c != id);
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            if let Some(entry) = self.entries.remove(node) {
                stack.extend(entry.children);
                removed += 1;
            }
        }
        tracing::trace!(target: targets::OBJECT, ?id, removed, "removed subtree");
        removed
    }

    /// Collect ancestor ids from the immediate parent to the root.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut current = self.entries.get(id).and_then(|e| e.parent);
        while let Some(parent) = current {
            out.push(parent);
            current = self.entries.get(parent).and_then(|e| e.parent);
        }
        out
    }

    /// Walk parent links to the topmost node above `id` (or `id` itself when
    /// it has no parent).
    pub fn root_of(&self, id: WidgetId) -> ObjectResult<WidgetId> {
        if !self.contains(id) {
            return Err(ObjectError::InvalidWidgetId);
        }
        let mut current = id;
        while let Some(parent) = self.entries[current].parent {
            current = parent;
        }
        Ok(current)
    }

    /// Check whether `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = self.entries.get(id).and_then(|e| e.parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.entries.get(parent).and_then(|e| e.parent);
        }
        false
    }

    /// Collect the subtree rooted at `id` in depth-first preorder.
    pub fn preorder(&self, id: WidgetId) -> ObjectResult<Vec<WidgetId>> {
        if !self.contains(id) {
            return Err(ObjectError::InvalidWidgetId);
        }
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(entry) = self.entries.get(node) {
                stack.extend(entry.children.iter().rev());
            }
        }
        Ok(out)
    }
}
