//! Generic rendering of tree-shaped structures.
//!
//! The renderer walks a tree through the minimal [`TreeNode`] capability and never sees the
//! concrete node type, so any structure that can label itself and enumerate its children can be
//! drawn.

/// A minimal structural view of a tree node.
pub trait TreeNode: Sized {
    /// Returns the text label of this node.
    fn label(&self) -> String;

    /// Returns the parent of this node, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Returns the number of children, not counting empty slots.
    fn child_count(&self) -> usize;

    /// Returns the child at `index`, counting only present children.
    fn child_at(&self, index: usize) -> Option<Self>;
}

/// Renders the tree rooted at `node` into an indented multi-line string.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackSet;
/// use ordered_collections::render;
///
/// let mut set = RedBlackSet::new();
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// let root = set.root().unwrap();
/// assert!(render::render(&root).starts_with("2\n"));
/// ```
pub fn render<N>(node: &N) -> String
where
    N: TreeNode,
{
    let mut out = String::new();
    render_node(node, "", "", &mut out);
    out
}

fn render_node<N>(node: &N, prefix: &str, child_prefix: &str, out: &mut String)
where
    N: TreeNode,
{
    out.push_str(prefix);
    out.push_str(&node.label());
    out.push('\n');

    let count = node.child_count();
    for index in 0..count {
        if let Some(child) = node.child_at(index) {
            let last = index + 1 == count;
            let (prefix, child_prefix) = if last {
                (format!("{}`-- ", child_prefix), format!("{}    ", child_prefix))
            } else {
                (format!("{}|-- ", child_prefix), format!("{}|   ", child_prefix))
            };
            render_node(&child, &prefix, &child_prefix, out);
        }
    }
}
