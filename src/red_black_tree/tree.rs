use crate::arena::{Arena, Handle};
use crate::entry::Entry;
use crate::error::Error;
use crate::red_black_tree::node::{Color, Node, Side};
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

/// A strict "less-than" ordering over keys.
///
/// The comparator must be a strict weak ordering: irreflexive, transitive, and consistent. It is
/// invoked on every ordering decision and must never fail. A comparator violating these
/// requirements yields an unspecified but memory-safe tree shape.
pub type Comparator<K> = Box<dyn Fn(&K, &K) -> bool>;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// An opaque reference to a node of a specific tree.
///
/// A `NodeId` stays valid until the node it names is erased; using it afterwards yields `None`
/// from the accessors. Traversal loops that erase as they go must capture the neighbor id before
/// erasing the current one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeId {
    tree: u64,
    slot: Handle,
}

/// A red-black tree holding key-value entries ordered by a user-supplied comparator.
///
/// Nodes live in an arena and reference each other by handle, so rotations and fixup walks are
/// plain index reassignments. Child slots that hold no data are per-position sentinel nodes:
/// always black, never shared, each carrying its own parent link.
pub struct RedBlackTree<K, V> {
    arena: Arena<Node<K, V>>,
    root: Option<Handle>,
    size: usize,
    less: Comparator<K>,
    id: u64,
}

impl<K, V> RedBlackTree<K, V> {
    /// Constructs a tree ordered by `comparator`. Fails with [`Error::MissingComparator`] when no
    /// comparator is supplied; nothing is built in that case.
    pub fn new(comparator: Option<Comparator<K>>) -> Result<Self, Error> {
        comparator.map(Self::with_less).ok_or(Error::MissingComparator)
    }

    /// Constructs a tree ordered by the key type's built-in ordering.
    pub fn natural() -> Self
    where
        K: Ord,
    {
        Self::with_less(Box::new(|lhs, rhs| lhs < rhs))
    }

    pub(crate) fn with_less(less: Comparator<K>) -> Self {
        RedBlackTree {
            arena: Arena::new(),
            root: None,
            size: 0,
            less,
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry. The backing storage, sentinels included, is dropped as a unit rather
    /// than walked node by node.
    pub fn clear(&mut self) {
        self.arena = Arena::new();
        self.root = None;
        self.size = 0;
    }

    /// Returns the node holding `key`, or `None` if the key is absent.
    pub fn find(&self, key: &K) -> Option<NodeId> {
        let mut curr = self.root;
        while let Some(node) = curr {
            if self.arena[node].is_sentinel() {
                return None;
            }
            if (self.less)(key, self.key_of(node)) {
                curr = self.arena[node].left;
            } else if (self.less)(self.key_of(node), key) {
                curr = self.arena[node].right;
            } else {
                return Some(self.wrap(node));
            }
        }
        None
    }

    /// Inserts `key` with `value`. If the key is already present, its value is overwritten in
    /// place with no structural change and the second component is `false`; otherwise a new node
    /// is linked and rebalanced and the second component is `true`.
    pub fn insert(&mut self, key: K, value: V) -> (NodeId, bool) {
        let mut attach: Option<(Handle, Side)> = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            if self.arena[node].is_sentinel() {
                break;
            }
            if (self.less)(&key, self.key_of(node)) {
                attach = Some((node, Side::Left));
                curr = self.arena[node].left;
            } else if (self.less)(self.key_of(node), &key) {
                attach = Some((node, Side::Right));
                curr = self.arena[node].right;
            } else {
                let entry = self.arena[node]
                    .entry
                    .as_mut()
                    .expect("Expected a data node.");
                entry.value = value;
                return (self.wrap(node), false);
            }
        }

        let node = self.arena.allocate(Node::new(key, value));
        let left = self.arena.allocate(Node::sentinel(node));
        let right = self.arena.allocate(Node::sentinel(node));
        self.arena[node].left = Some(left);
        self.arena[node].right = Some(right);

        match attach {
            Some((parent, side)) => {
                let displaced = curr.expect("Expected a sentinel at the insertion point.");
                self.arena.free(displaced);
                self.arena[parent].set_child(side, Some(node));
                self.arena[node].parent = Some(parent);
            }
            None => self.root = Some(node),
        }

        self.size += 1;
        self.insert_fixup(node);
        (self.wrap(node), true)
    }

    /// Removes the entry holding `key`. Returns `false` if the key is absent, leaving the tree
    /// untouched.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.find(key) {
            Some(node) => {
                self.unlink(node.slot);
                true
            }
            None => false,
        }
    }

    /// Removes the given node. Returns `false` without changing anything when the node does not
    /// belong to this tree.
    ///
    /// The membership test is best-effort: the id must have been minted by this tree, must name a
    /// live data slot, and the slot's ancestor chain must end at this tree's root. An id whose
    /// node was erased earlier and whose slot has since been reused will pass the test and erase
    /// the current occupant.
    pub fn erase(&mut self, node: NodeId) -> bool {
        if !self.contains_node(node) {
            return false;
        }
        self.unlink(node.slot);
        true
    }

    /// Returns the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|root| self.wrap(root))
    }

    /// Returns the node holding the smallest key.
    pub fn first(&self) -> Option<NodeId> {
        self.root
            .map(|root| self.wrap(self.extreme_in_subtree(root, Side::Left)))
    }

    /// Returns the node holding the largest key.
    pub fn last(&self) -> Option<NodeId> {
        self.root
            .map(|root| self.wrap(self.extreme_in_subtree(root, Side::Right)))
    }

    /// Returns the in-order successor of `node`.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.neighbor(node, Side::Right)
    }

    /// Returns the in-order predecessor of `node`.
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        self.neighbor(node, Side::Left)
    }

    /// Collects every key in comparator order. The vector is empty for an empty tree.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.size);
        let mut curr = self.root.map(|root| self.extreme_in_subtree(root, Side::Left));
        while let Some(node) = curr {
            keys.push(self.key_of(node));
            curr = self.neighbor_of(node, Side::Right);
        }
        keys
    }

    /// Collects every value in key order. The vector is empty for an empty tree.
    pub fn values(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.size);
        let mut curr = self.root.map(|root| self.extreme_in_subtree(root, Side::Left));
        while let Some(node) = curr {
            values.push(&self.entry_of(node).value);
            curr = self.neighbor_of(node, Side::Right);
        }
        values
    }

    /// Returns the key of `node`, or `None` if the id no longer names a live node of this tree.
    pub fn key(&self, node: NodeId) -> Option<&K> {
        let slot = self.resolve(node)?;
        self.arena
            .get(slot)
            .and_then(|node| node.entry.as_ref())
            .map(|entry| &entry.key)
    }

    /// Returns the value of `node`.
    pub fn value(&self, node: NodeId) -> Option<&V> {
        let slot = self.resolve(node)?;
        self.arena
            .get(slot)
            .and_then(|node| node.entry.as_ref())
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value of `node`.
    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut V> {
        let slot = self.resolve(node)?;
        self.arena
            .get_mut(slot)
            .and_then(|node| node.entry.as_mut())
            .map(|entry| &mut entry.value)
    }

    /// Replaces the value of `node`, returning the previous value.
    pub fn set_value(&mut self, node: NodeId, value: V) -> Option<V> {
        self.value_mut(node).map(|slot| mem::replace(slot, value))
    }

    /// Returns the parent of `node`, or `None` at the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let slot = self.resolve(node)?;
        let parent = self.arena.get(slot)?.parent?;
        Some(self.wrap(parent))
    }

    /// Returns how many data children `node` has, ignoring sentinels.
    pub fn num_children(&self, node: NodeId) -> usize {
        match self.resolve(node) {
            Some(slot) => self.data_children(slot).count(),
            None => 0,
        }
    }

    /// Returns the `index`-th data child of `node`, skipping sentinel slots.
    pub fn child_by_index(&self, node: NodeId, index: usize) -> Option<NodeId> {
        let slot = self.resolve(node)?;
        self.data_children(slot).nth(index).map(|child| self.wrap(child))
    }

    pub(crate) fn into_ordered_entries(mut self) -> Vec<(K, V)> {
        let mut handles = Vec::with_capacity(self.size);
        let mut curr = self.root.map(|root| self.extreme_in_subtree(root, Side::Left));
        while let Some(node) = curr {
            handles.push(node);
            curr = self.neighbor_of(node, Side::Right);
        }
        handles
            .into_iter()
            .map(|node| {
                let entry = self.arena[node].entry.take().expect("Expected a data node.");
                (entry.key, entry.value)
            })
            .collect()
    }

    fn wrap(&self, slot: Handle) -> NodeId {
        NodeId {
            tree: self.id,
            slot,
        }
    }

    fn resolve(&self, node: NodeId) -> Option<Handle> {
        if node.tree == self.id {
            Some(node.slot)
        } else {
            None
        }
    }

    fn key_of(&self, node: Handle) -> &K {
        &self.entry_of(node).key
    }

    fn entry_of(&self, node: Handle) -> &Entry<K, V> {
        self.arena[node].entry.as_ref().expect("Expected a data node.")
    }

    fn color(&self, node: Handle) -> Color {
        self.arena[node].color
    }

    fn child_of(&self, node: Handle, side: Side) -> Handle {
        self.arena[node]
            .child(side)
            .expect("Expected a data node to own two children.")
    }

    // side of a non-root node under its parent
    fn side_of(&self, node: Handle) -> Side {
        let parent = self.arena[node]
            .parent
            .expect("Expected a non-root node.");
        if self.arena[parent].left == Some(node) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn data_children<'a>(&'a self, node: Handle) -> impl Iterator<Item = Handle> + 'a {
        let (left, right) = match self.arena.get(node) {
            Some(node) => (node.left, node.right),
            None => (None, None),
        };
        vec![left, right]
            .into_iter()
            .filter_map(|child| child)
            .filter(move |&child| !self.arena[child].is_sentinel())
    }

    fn extreme_in_subtree(&self, mut curr: Handle, side: Side) -> Handle {
        loop {
            let child = self.child_of(curr, side);
            if self.arena[child].is_sentinel() {
                return curr;
            }
            curr = child;
        }
    }

    fn neighbor(&self, node: NodeId, side: Side) -> Option<NodeId> {
        let slot = self.resolve(node)?;
        if self.arena.get(slot).map_or(true, Node::is_sentinel) {
            return None;
        }
        self.neighbor_of(slot, side).map(|next| self.wrap(next))
    }

    fn neighbor_of(&self, node: Handle, side: Side) -> Option<Handle> {
        let child = self.child_of(node, side);
        if !self.arena[child].is_sentinel() {
            return Some(self.extreme_in_subtree(child, side.opposite()));
        }
        let mut curr = node;
        while let Some(parent) = self.arena[curr].parent {
            if self.side_of(curr) != side {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    fn contains_node(&self, node: NodeId) -> bool {
        let slot = match self.resolve(node) {
            Some(slot) => slot,
            None => return false,
        };
        match self.arena.get(slot) {
            Some(node) if !node.is_sentinel() => {}
            _ => return false,
        }
        let mut curr = slot;
        while let Some(parent) = self.arena[curr].parent {
            curr = parent;
        }
        self.root == Some(curr)
    }

    /// Rotates the subtree rooted at `node` towards `direction`, promoting the child on the
    /// opposite side. Touches exactly four link slots: the demoted node, the promoted child, the
    /// promoted child's inner grandchild, and the incoming slot above.
    fn rotate(&mut self, node: Handle, direction: Side) {
        let up = self.child_of(node, direction.opposite());
        let inner = self.child_of(up, direction);

        self.arena[node].set_child(direction.opposite(), Some(inner));
        self.arena[inner].parent = Some(node);

        let parent = self.arena[node].parent;
        self.arena[up].parent = parent;
        match parent {
            None => self.root = Some(up),
            Some(parent) => {
                if self.arena[parent].left == Some(node) {
                    self.arena[parent].left = Some(up);
                } else {
                    self.arena[parent].right = Some(up);
                }
            }
        }

        self.arena[up].set_child(direction, Some(node));
        self.arena[node].parent = Some(up);
    }

    // restores the red-black invariants above a freshly linked red node
    fn insert_fixup(&mut self, mut node: Handle) {
        loop {
            let parent = match self.arena[node].parent {
                Some(parent) if self.color(parent) == Color::Red => parent,
                _ => break,
            };
            // a red parent is never the root, so the grandparent exists
            let grandparent = self.arena[parent]
                .parent
                .expect("Expected a red node to have a parent.");
            let parent_side = self.side_of(parent);
            let uncle = self.child_of(grandparent, parent_side.opposite());

            if self.color(uncle) == Color::Red {
                self.arena[parent].color = Color::Black;
                self.arena[uncle].color = Color::Black;
                self.arena[grandparent].color = Color::Red;
                node = grandparent;
            } else {
                let mut pivot = parent;
                if self.side_of(node) != parent_side {
                    // zig-zag: straighten the path before rotating the grandparent
                    self.rotate(parent, parent_side);
                    pivot = node;
                }
                self.arena[pivot].color = Color::Black;
                self.arena[grandparent].color = Color::Red;
                self.rotate(grandparent, parent_side.opposite());
                break;
            }
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }

    fn unlink(&mut self, node: Handle) {
        let mut target = node;
        let right = self.child_of(target, Side::Right);
        if !self.arena[right].is_sentinel() {
            // move the in-order successor's entry here and splice the successor's simpler slot
            let successor = self.extreme_in_subtree(right, Side::Left);
            let moved = self.arena[successor].entry.take();
            let displaced = mem::replace(&mut self.arena[target].entry, moved);
            self.arena[successor].entry = displaced;
            target = successor;
        }
        self.splice(target);
        self.size -= 1;
    }

    // `node` has at most one data child; replace it with that child and rebalance
    fn splice(&mut self, node: Handle) {
        let left = self.child_of(node, Side::Left);
        let right = self.child_of(node, Side::Right);
        let (child, spare) = if self.arena[left].is_sentinel() {
            (right, left)
        } else {
            (left, right)
        };

        let parent = self.arena[node].parent;
        self.arena[child].parent = parent;
        match parent {
            None => {
                if self.arena[child].is_sentinel() {
                    self.arena.free(child);
                    self.arena.free(spare);
                    self.arena.free(node);
                    self.root = None;
                    return;
                }
                self.root = Some(child);
            }
            Some(parent) => {
                if self.arena[parent].left == Some(node) {
                    self.arena[parent].left = Some(child);
                } else {
                    self.arena[parent].right = Some(child);
                }
            }
        }

        let removed_color = self.arena[node].color;
        self.arena.free(spare);
        self.arena.free(node);

        if removed_color == Color::Black {
            if self.color(child) == Color::Red {
                self.arena[child].color = Color::Black;
            } else {
                self.delete_fixup(child);
            }
        }
    }

    // resolves the double-black deficiency carried by `node` after a black splice
    fn delete_fixup(&mut self, mut node: Handle) {
        while Some(node) != self.root && self.color(node) == Color::Black {
            let parent = self.arena[node]
                .parent
                .expect("Expected a non-root node to have a parent.");
            let side = self.side_of(node);
            let mut sibling = self.child_of(parent, side.opposite());

            if self.color(sibling) == Color::Red {
                // a deficient node's red sibling has black data children; rotate one into place
                self.arena[sibling].color = Color::Black;
                self.arena[parent].color = Color::Red;
                self.rotate(parent, side);
                sibling = self.child_of(parent, side.opposite());
            }

            let near = self.child_of(sibling, side);
            let far = self.child_of(sibling, side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                // both nephews black: the deficiency moves up to the parent
                self.arena[sibling].color = Color::Red;
                node = parent;
            } else {
                if self.color(far) == Color::Black {
                    // bring the red nephew to the far side
                    self.arena[near].color = Color::Black;
                    self.arena[sibling].color = Color::Red;
                    self.rotate(sibling, side.opposite());
                    sibling = self.child_of(parent, side.opposite());
                }
                let far = self.child_of(sibling, side.opposite());
                self.arena[sibling].color = self.arena[parent].color;
                self.arena[parent].color = Color::Black;
                self.arena[far].color = Color::Black;
                self.rotate(parent, side);
                node = self.root.expect("Expected a non-empty tree during fixup.");
            }
        }
        self.arena[node].color = Color::Black;
    }
}
