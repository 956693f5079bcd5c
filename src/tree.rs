//! Generic recursive tree with payload-carrying nodes.
//!
//! A [`Tree<P>`] is a node holding a caller-defined payload plus an ordered
//! sequence of child trees of the same shape. The root node represents the
//! whole tree; there is no separate container type. Payload fields are read
//! through accessor closures, so a wrong field name or a non-string field
//! passed to the text query is a compile error rather than a runtime failure.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::iter::{PostOrderIter, PreOrderIter};

/// A tree node: payload plus ordered children.
///
/// Nodes own their children, so shared subtrees and cycles cannot be
/// expressed and every traversal terminates. Recursion depth equals tree
/// depth; extremely deep trees are bounded by the call stack (use the
/// stack-based iterators in [`crate::iter`] for those).
///
/// The serialized form flattens the payload into the node object and omits
/// `children` when empty:
///
/// ```json
/// { "id": "hoge", "children": [{ "id": "piyo" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree<P> {
    /// Caller-defined payload, present on every node
    #[serde(flatten)]
    pub data: P,
    /// Child subtrees in sequence order, empty for a leaf
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tree<P>>,
}

impl<P> Tree<P> {
    /// Creates a leaf node.
    pub fn new(data: P) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children.
    pub fn with_children(data: P, children: Vec<Tree<P>>) -> Self {
        Self { data, children }
    }

    /// Appends a child subtree.
    pub fn push(&mut self, child: Tree<P>) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether `field` of this node or of any descendant contains `text`.
    ///
    /// Case-sensitive substring containment, not a regex. Depth-first
    /// pre-order with short-circuit: the node itself is checked first, then
    /// each child subtree in sequence order, stopping at the first match.
    ///
    /// ```
    /// use rstree::Tree;
    ///
    /// struct Section { id: String }
    ///
    /// let tree = Tree::with_children(
    ///     Section { id: "hoge".into() },
    ///     vec![Tree::new(Section { id: "fuga".into() })],
    /// );
    /// assert!(tree.has_matching_text(|s: &Section| s.id.as_str(), "ug"));
    /// assert!(!tree.has_matching_text(|s: &Section| s.id.as_str(), "invalid"));
    /// ```
    #[instrument(level = "trace", skip(self, field))]
    pub fn has_matching_text<F>(&self, field: F, text: &str) -> bool
    where
        F: Fn(&P) -> &str,
    {
        self.matches_text(&field, text)
    }

    fn matches_text<F>(&self, field: &F, text: &str) -> bool
    where
        F: Fn(&P) -> &str,
    {
        if field(&self.data).contains(text) {
            return true;
        }
        self.children
            .iter()
            .any(|child| child.matches_text(field, text))
    }

    /// Collects `field` of every node in depth-first pre-order.
    ///
    /// The root value comes first, then each child subtree in sequence
    /// order. The result length equals [`node_count`](Self::node_count);
    /// duplicates are kept and the order is deterministic but not sorted.
    ///
    /// ```
    /// use rstree::Tree;
    ///
    /// struct Section { id: String }
    ///
    /// let tree = Tree::with_children(
    ///     Section { id: "hoge".into() },
    ///     vec![Tree::new(Section { id: "piyo".into() })],
    /// );
    /// assert_eq!(
    ///     tree.values_of(|s: &Section| s.id.clone()),
    ///     vec!["hoge", "piyo"],
    /// );
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn values_of<F, V>(&self, field: F) -> Vec<V>
    where
        F: Fn(&P) -> V,
    {
        let mut values = Vec::new();
        self.collect_values(&field, &mut values);
        values
    }

    fn collect_values<F, V>(&self, field: &F, out: &mut Vec<V>)
    where
        F: Fn(&P) -> V,
    {
        out.push(field(&self.data));
        for child in &self.children {
            child.collect_values(field, out);
        }
    }

    /// Collects `field` of the leaf nodes only, in pre-order.
    pub fn leaf_values<F, V>(&self, field: F) -> Vec<V>
    where
        F: Fn(&P) -> V,
    {
        let mut leaves = Vec::new();
        self.collect_leaves(&field, &mut leaves);
        leaves
    }

    fn collect_leaves<F, V>(&self, field: &F, out: &mut Vec<V>)
    where
        F: Fn(&P) -> V,
    {
        if self.children.is_empty() {
            out.push(field(&self.data));
        } else {
            for child in &self.children {
                child.collect_leaves(field, out);
            }
        }
    }

    /// Number of levels: 1 for a leaf, 1 + the deepest child otherwise.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.node_count())
            .sum::<usize>()
    }

    /// Stack-based pre-order traversal, same order as [`values_of`](Self::values_of).
    pub fn iter(&self) -> PreOrderIter<'_, P> {
        PreOrderIter::new(self)
    }

    /// Stack-based post-order traversal, leaves before their parents.
    pub fn iter_postorder(&self) -> PostOrderIter<'_, P> {
        PostOrderIter::new(self)
    }
}

impl<'a, P> IntoIterator for &'a Tree<P> {
    type Item = &'a Tree<P>;
    type IntoIter = PreOrderIter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    struct Labeled {
        label: String,
    }

    fn labeled(label: &str) -> Labeled {
        Labeled {
            label: label.to_string(),
        }
    }

    #[test]
    fn test_deserialize_flattened_payload_with_optional_children() {
        let json = r#"{ "label": "hoge", "children": [{ "label": "fuga" }] }"#;
        let tree: Tree<Labeled> = serde_json::from_str(json).unwrap();

        assert_eq!(tree.data.label, "hoge");
        assert_eq!(tree.children.len(), 1);
        assert!(tree.children[0].is_leaf());
    }

    #[test]
    fn test_serialize_leaf_omits_children() {
        let json = serde_json::to_string(&Tree::new(labeled("hoge"))).unwrap();
        assert_eq!(json, r#"{"label":"hoge"}"#);
    }

    #[test]
    fn test_push_turns_leaf_into_branch() {
        let mut tree = Tree::new(labeled("root"));
        assert!(tree.is_leaf());

        tree.push(Tree::new(labeled("child")));
        assert!(!tree.is_leaf());
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node_count(), 2);
    }
}
