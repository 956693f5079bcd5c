//! Text rendering of trees via `termtree`.

use termtree::Tree as TextTree;
use tracing::instrument;

use crate::tree::Tree;

impl<P> Tree<P> {
    /// Renders the tree for terminal display, labelling each node with
    /// `label`. Printing the result draws the usual box-drawing layout:
    ///
    /// ```text
    /// hoge
    /// ├── fuga
    /// │   └── guru
    /// └── piyo
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn to_tree_string<F>(&self, label: F) -> TextTree<String>
    where
        F: Fn(&P) -> String,
    {
        self.render(&label)
    }

    fn render<F>(&self, label: &F) -> TextTree<String>
    where
        F: Fn(&P) -> String,
    {
        let root = label(&self.data);
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(|child| child.render(label))
            .collect();

        TextTree::new(root).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    #[test]
    fn test_render_nested_tree() {
        let tree = Tree::with_children(
            "root",
            vec![
                Tree::with_children("a", vec![Tree::new("b")]),
                Tree::new("c"),
            ],
        );

        let rendered = tree
            .to_tree_string(|&data: &&str| data.to_string())
            .to_string();

        assert!(rendered.starts_with("root"));
        assert!(rendered.contains("├── a"));
        assert!(rendered.contains("└── b"));
        assert!(rendered.contains("└── c"));
    }
}
