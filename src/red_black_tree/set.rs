use crate::red_black_tree::map::{MapNode, RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
use crate::red_black_tree::tree::NodeId;
use crate::render::{self, TreeNode};
use std::fmt;

/// An ordered set implemented by a red black tree.
///
/// The set stores each key with an empty payload in a [`RedBlackMap`], so every ordering and
/// rebalancing guarantee of the map carries over unchanged.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&0));
///
/// let first = set.first().unwrap();
/// assert_eq!(set.key(first), Some(&0));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct RedBlackSet<K> {
    map: RedBlackMap<K, ()>,
}

impl<K> RedBlackSet<K> {
    /// Constructs a new, empty `RedBlackSet<K>` ordered by the key type's built-in ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self
    where
        K: Ord,
    {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }

    /// Constructs a new, empty `RedBlackSet<K>` ordered by a "less-than" comparator. The
    /// comparator must be a strict weak ordering and must never fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|lhs: &u32, rhs: &u32| lhs > rhs);
    /// set.insert(1);
    /// set.insert(5);
    ///
    /// let first = set.first().unwrap();
    /// assert_eq!(set.key(first), Some(&5));
    /// ```
    pub fn with_comparator<F>(less: F) -> Self
    where
        F: Fn(&K, &K) -> bool + 'static,
    {
        RedBlackSet {
            map: RedBlackMap::with_comparator(less),
        }
    }

    /// Inserts a key into the set, returning the node holding it. If the key already exists, the
    /// set does not grow and the second component is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// let (_, inserted) = set.insert(1);
    /// assert!(inserted);
    /// let (_, inserted) = set.insert(1);
    /// assert!(!inserted);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> (NodeId, bool) {
        self.map.insert(key, ())
    }

    /// Returns the node holding `key`, or `None` if the key does not exist in the set.
    pub fn find(&self, key: &K) -> Option<NodeId> {
        self.map.find(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains(key)
    }

    /// Removes a key from the set. Returns `false` if the key does not exist in the set, leaving
    /// the set unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.map.remove(key)
    }

    /// Removes the given node from the set. Returns `false` without changing anything when the
    /// node does not belong to this set; the membership test is best-effort.
    pub fn erase(&mut self, node: NodeId) -> bool {
        self.map.erase(node)
    }

    /// Returns the node holding the smallest key, or `None` if the set is empty.
    pub fn first(&self) -> Option<NodeId> {
        self.map.first()
    }

    /// Returns the node holding the largest key, or `None` if the set is empty.
    pub fn last(&self) -> Option<NodeId> {
        self.map.last()
    }

    /// Returns the node holding the next larger key, or `None` at the largest key.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.map.next(node)
    }

    /// Returns the node holding the next smaller key, or `None` at the smallest key.
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        self.map.prev(node)
    }

    /// Returns the key held by `node`, or `None` if the node no longer belongs to this set.
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.map.key(node)
    }

    /// Collects every key in comparator order. The vector is empty for an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.keys(), vec![&1, &3]);
    /// ```
    pub fn keys(&self) -> Vec<&K> {
        self.map.keys()
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a cursor over the root node, or `None` if the set is empty.
    pub fn root(&self) -> Option<SetNode<'_, K>> {
        self.map.root().map(|node| SetNode { node })
    }

    /// Returns a cursor over `node`, or `None` if the node no longer belongs to this set.
    pub fn node(&self, node: NodeId) -> Option<SetNode<'_, K>> {
        self.map.node(node).map(|node| SetNode { node })
    }

    /// Returns an iterator over the set. The iterator yields keys using in-order traversal and
    /// walks backwards when reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, K> {
        RedBlackSetIter {
            map_iter: self.map.iter(),
        }
    }

    /// Renders the tree shape of the set into an indented multi-line string. Diagnostics only.
    pub fn pretty(&self) -> String
    where
        K: fmt::Display,
    {
        match self.root() {
            Some(root) => render::render(&root),
            None => String::new(),
        }
    }
}

impl<K> fmt::Display for RedBlackSet<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, key) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "}}")
    }
}

impl<K> IntoIterator for RedBlackSet<K> {
    type IntoIter = RedBlackSetIntoIter<K>;
    type Item = K;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackSetIntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, K> IntoIterator for &'a RedBlackSet<K>
where
    K: 'a,
{
    type IntoIter = RedBlackSetIter<'a, K>;
    type Item = &'a K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Default for RedBlackSet<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An owning iterator for `RedBlackSet<K>`.
///
/// This iterator traverses the keys of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<K> {
    map_iter: RedBlackMapIntoIter<K, ()>,
}

impl<K> Iterator for RedBlackSetIntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<K> DoubleEndedIterator for RedBlackSetIntoIter<K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map_iter.next_back().map(|pair| pair.0)
    }
}

/// An iterator for `RedBlackSet<K>`.
///
/// This iterator traverses the keys of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, K> {
    map_iter: RedBlackMapIter<'a, K, ()>,
}

impl<'a, K> Iterator for RedBlackSetIter<'a, K>
where
    K: 'a,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<'a, K> DoubleEndedIterator for RedBlackSetIter<'a, K>
where
    K: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map_iter.next_back().map(|pair| pair.0)
    }
}

/// A borrowed cursor over a node of a `RedBlackSet<K>`.
pub struct SetNode<'a, K> {
    node: MapNode<'a, K, ()>,
}

impl<'a, K> SetNode<'a, K> {
    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    /// Returns the key held by this node.
    pub fn key(&self) -> &'a K {
        self.node.key()
    }

    /// Returns a cursor over the parent node, or `None` at the root.
    pub fn parent(&self) -> Option<SetNode<'a, K>> {
        self.node.parent().map(|node| SetNode { node })
    }

    /// Returns a cursor over the in-order successor.
    pub fn next(&self) -> Option<SetNode<'a, K>> {
        self.node.next().map(|node| SetNode { node })
    }

    /// Returns a cursor over the in-order predecessor.
    pub fn prev(&self) -> Option<SetNode<'a, K>> {
        self.node.prev().map(|node| SetNode { node })
    }

    /// Returns how many children this node has, ignoring empty slots.
    pub fn child_count(&self) -> usize {
        self.node.child_count()
    }

    /// Returns a cursor over the `index`-th present child.
    pub fn child_at(&self, index: usize) -> Option<SetNode<'a, K>> {
        self.node.child_at(index).map(|node| SetNode { node })
    }
}

impl<'a, K> Clone for SetNode<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K> Copy for SetNode<'a, K> {}

impl<'a, K> TreeNode for SetNode<'a, K>
where
    K: fmt::Display,
{
    fn label(&self) -> String {
        self.key().to_string()
    }

    fn parent(&self) -> Option<Self> {
        SetNode::parent(self)
    }

    fn child_count(&self) -> usize {
        SetNode::child_count(self)
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        SetNode::child_at(self, index)
    }
}
