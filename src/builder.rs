//! Assembles owned trees from flat id/parent records.
//!
//! Callers register every node with [`TreeBuilder::insert`], connect them
//! with [`TreeBuilder::link`], and finally call [`TreeBuilder::build`],
//! which returns one [`Tree`] per root. Each node has at most one parent,
//! so the result is a forest of strict trees; edges forming a parentless
//! cycle are reported instead of looping forever.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::tree::Tree;

pub struct TreeBuilder<P> {
    payloads: HashMap<String, P>,
    /// Node ids in insertion order, determines root order in the result
    insertion_order: Vec<String>,
    /// Parent id -> child ids in link order
    children: HashMap<String, Vec<String>>,
    /// Child id -> parent id, enforces the single-parent invariant
    parent_of: HashMap<String, String>,
}

impl<P> Default for TreeBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TreeBuilder<P> {
    pub fn new() -> Self {
        Self {
            payloads: HashMap::new(),
            insertion_order: Vec::new(),
            children: HashMap::new(),
            parent_of: HashMap::new(),
        }
    }

    /// Registers a node under `id`.
    #[instrument(level = "debug", skip(self, payload))]
    pub fn insert(&mut self, id: &str, payload: P) -> TreeResult<()> {
        if self.payloads.contains_key(id) {
            return Err(TreeError::DuplicateNode(id.to_string()));
        }
        self.payloads.insert(id.to_string(), payload);
        self.insertion_order.push(id.to_string());
        Ok(())
    }

    /// Records a parent/child edge between two registered nodes.
    ///
    /// A child can be linked to at most one parent; children appear in
    /// the built tree in link order.
    #[instrument(level = "debug", skip(self))]
    pub fn link(&mut self, parent: &str, child: &str) -> TreeResult<()> {
        if !self.payloads.contains_key(parent) {
            return Err(TreeError::UnknownNode(parent.to_string()));
        }
        if !self.payloads.contains_key(child) {
            return Err(TreeError::UnknownNode(child.to_string()));
        }
        if let Some(existing) = self.parent_of.get(child) {
            return Err(TreeError::MultipleParents {
                child: child.to_string(),
                parent: existing.clone(),
            });
        }

        self.parent_of.insert(child.to_string(), parent.to_string());
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
        Ok(())
    }

    /// Consumes the builder and returns one tree per root node.
    ///
    /// Roots are the nodes never linked as a child, in insertion order.
    /// Nodes left unreachable after all roots are built can only sit on a
    /// parentless cycle and are reported as [`TreeError::CycleDetected`].
    #[instrument(level = "debug", skip(self))]
    pub fn build(mut self) -> TreeResult<Vec<Tree<P>>> {
        let roots: Vec<String> = self
            .insertion_order
            .iter()
            .filter(|id| !self.parent_of.contains_key(*id))
            .cloned()
            .collect();
        debug!("roots: {:?}", roots);

        let mut trees = Vec::with_capacity(roots.len());
        for root in roots {
            trees.push(self.build_node(&root)?);
        }

        if let Some(id) = self
            .insertion_order
            .iter()
            .find(|id| self.payloads.contains_key(*id))
        {
            // Single-parent edges that reach no root must close on themselves
            return Err(TreeError::CycleDetected(id.clone()));
        }

        Ok(trees)
    }

    fn build_node(&mut self, id: &str) -> TreeResult<Tree<P>> {
        let data = self
            .payloads
            .remove(id)
            .ok_or_else(|| TreeError::CycleDetected(id.to_string()))?;

        let child_ids = self.children.remove(id).unwrap_or_default();
        let mut children = Vec::with_capacity(child_ids.len());
        for child_id in child_ids {
            children.push(self.build_node(&child_id)?);
        }

        Ok(Tree::with_children(data, children))
    }
}
