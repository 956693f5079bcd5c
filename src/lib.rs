//! Generic recursive trees with payload-carrying nodes.
//!
//! A [`Tree<P>`] is a caller-defined payload plus an ordered sequence of
//! child trees; the root node stands for the whole tree. The crate answers
//! two questions about such trees — "does some node's text field contain
//! this substring?" and "what are the values of this field across all
//! nodes?" — plus the supporting cast: stack-based traversal iterators, a
//! builder that assembles forests from flat id/parent records, and terminal
//! rendering.
//!
//! Payload fields are addressed with accessor closures rather than string
//! keys, so referencing a missing field or passing a non-string field to
//! the text query does not compile.
//!
//! ```
//! use rstree::Tree;
//!
//! struct Section {
//!     id: String,
//! }
//!
//! fn section(id: &str) -> Tree<Section> {
//!     Tree::new(Section { id: id.to_string() })
//! }
//!
//! let mut tree = section("hoge");
//! tree.push(Tree::with_children(
//!     Section { id: "fuga".to_string() },
//!     vec![section("guru")],
//! ));
//! tree.push(section("piyo"));
//!
//! assert!(tree.has_matching_text(|s: &Section| s.id.as_str(), "og"));
//! assert_eq!(
//!     tree.values_of(|s: &Section| s.id.clone()),
//!     vec!["hoge", "fuga", "guru", "piyo"],
//! );
//! ```

pub mod builder;
pub mod display;
pub mod errors;
pub mod iter;
pub mod tree;
pub mod util;

pub use builder::TreeBuilder;
pub use errors::{TreeError, TreeResult};
pub use iter::{PostOrderIter, PreOrderIter};
pub use tree::Tree;
