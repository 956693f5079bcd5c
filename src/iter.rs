//! Explicit-stack traversal iterators.
//!
//! Stack-based equivalents of the recursive operations on
//! [`Tree`](crate::tree::Tree): identical visit order, but no call-stack
//! growth on deep trees.

use crate::tree::Tree;

/// Depth-first pre-order: a node before any of its descendants,
/// children in sequence order.
pub struct PreOrderIter<'a, P> {
    stack: Vec<&'a Tree<P>>,
}

impl<'a, P> PreOrderIter<'a, P> {
    pub(crate) fn new(root: &'a Tree<P>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, P> Iterator for PreOrderIter<'a, P> {
    type Item = &'a Tree<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Depth-first post-order: leaves before their parents, the root last.
pub struct PostOrderIter<'a, P> {
    stack: Vec<(&'a Tree<P>, bool)>,
}

impl<'a, P> PostOrderIter<'a, P> {
    pub(crate) fn new(root: &'a Tree<P>) -> Self {
        Self {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, P> Iterator for PostOrderIter<'a, P> {
    type Item = &'a Tree<P>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            for child in node.children.iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    // root
    // ├── a
    // │   └── b
    // └── c
    fn sample() -> Tree<&'static str> {
        Tree::with_children(
            "root",
            vec![
                Tree::with_children("a", vec![Tree::new("b")]),
                Tree::new("c"),
            ],
        )
    }

    #[test]
    fn test_preorder_matches_recursive_collection() {
        let tree = sample();
        let iterated: Vec<_> = tree.iter().map(|node| node.data).collect();

        assert_eq!(iterated, vec!["root", "a", "b", "c"]);
        assert_eq!(iterated, tree.values_of(|&data| data));
    }

    #[test]
    fn test_postorder_visits_leaves_first() {
        let tree = sample();
        let iterated: Vec<_> = tree.iter_postorder().map(|node| node.data).collect();

        assert_eq!(iterated, vec!["b", "a", "c", "root"]);
    }

    #[test]
    fn test_single_node_yields_once() {
        let tree = Tree::new("only");
        assert_eq!(tree.iter().count(), 1);
        assert_eq!(tree.iter_postorder().count(), 1);
    }
}
