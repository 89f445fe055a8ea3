use crate::red_black_tree::tree::{NodeId, RedBlackTree};
use crate::render::{self, TreeNode};
use std::fmt;
use std::vec;

/// An ordered map implemented by a red black tree.
///
/// A red black tree is a self-balancing binary search tree that uses a color bit per node to keep
/// the tree approximately balanced during insertions and deletions, bounding the height at
/// `O(log n)`. Keys are unique: inserting an existing key overwrites its value in place. Ordering
/// is decided by a "less-than" comparator, which defaults to the key type's built-in ordering.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// let first = map.first().unwrap();
/// assert_eq!(map.key(first), Some(&0));
///
/// assert!(map.remove(&0));
/// assert!(!map.remove(&1));
/// ```
pub struct RedBlackMap<K, V> {
    tree: RedBlackTree<K, V>,
}

impl<K, V> RedBlackMap<K, V> {
    /// Constructs a new, empty `RedBlackMap<K, V>` ordered by the key type's built-in ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self
    where
        K: Ord,
    {
        RedBlackMap {
            tree: RedBlackTree::natural(),
        }
    }

    /// Constructs a new, empty `RedBlackMap<K, V>` ordered by a "less-than" comparator. The
    /// comparator must be a strict weak ordering and must never fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_comparator(|lhs: &u32, rhs: &u32| lhs > rhs);
    /// map.insert(1, 'a');
    /// map.insert(5, 'b');
    ///
    /// let first = map.first().unwrap();
    /// assert_eq!(map.key(first), Some(&5));
    /// ```
    pub fn with_comparator<F>(less: F) -> Self
    where
        F: Fn(&K, &K) -> bool + 'static,
    {
        RedBlackMap {
            tree: RedBlackTree::with_less(Box::new(less)),
        }
    }

    /// Inserts a key-value pair into the map, returning the node holding the pair. If the key
    /// already exists, its value is overwritten in place, the map does not grow, and the second
    /// component is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// let (node, inserted) = map.insert(1, 1);
    /// assert!(inserted);
    ///
    /// let (same_node, inserted) = map.insert(1, 2);
    /// assert!(!inserted);
    /// assert_eq!(node, same_node);
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (NodeId, bool) {
        self.tree.insert(key, value)
    }

    /// Returns the node holding `key`, or `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(map.find(&1).is_some());
    /// assert!(map.find(&0).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<NodeId> {
        self.tree.find(key)
    }

    /// Returns an immutable reference to the value associated with `key`, or `None` if the key
    /// does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.find(key).and_then(|node| self.tree.value(node))
    }

    /// Returns a mutable reference to the value associated with `key`, or `None` if the key does
    /// not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() += 1;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.tree.find(key) {
            Some(node) => self.tree.value_mut(node),
            None => None,
        }
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains(&0));
    /// assert!(map.contains(&1));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.tree.find(key).is_some()
    }

    /// Removes the entry associated with `key`. Returns `false` if the key does not exist in the
    /// map, leaving the map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.tree.remove(key)
    }

    /// Removes the given node from the map. Returns `false` without changing anything when the
    /// node does not belong to this map; the membership test is best-effort.
    ///
    /// Neighbor lookups on an erased node are undefined, so a traversal that erases as it goes
    /// must capture the neighbor before erasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// let (node, _) = map.insert(2, 2);
    /// assert!(map.erase(node));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn erase(&mut self, node: NodeId) -> bool {
        self.tree.erase(node)
    }

    /// Returns the node holding the smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'b');
    ///
    /// let first = map.first().unwrap();
    /// assert_eq!(map.key(first), Some(&1));
    /// ```
    pub fn first(&self) -> Option<NodeId> {
        self.tree.first()
    }

    /// Returns the node holding the largest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'b');
    ///
    /// let last = map.last().unwrap();
    /// assert_eq!(map.key(last), Some(&3));
    /// ```
    pub fn last(&self) -> Option<NodeId> {
        self.tree.last()
    }

    /// Returns the node holding the next larger key, or `None` at the largest key.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.tree.next(node)
    }

    /// Returns the node holding the next smaller key, or `None` at the smallest key.
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        self.tree.prev(node)
    }

    /// Returns the key held by `node`, or `None` if the node no longer belongs to this map.
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.tree.key(node)
    }

    /// Returns the value held by `node`.
    pub fn value(&self, node: NodeId) -> Option<&V> {
        self.tree.value(node)
    }

    /// Replaces the value held by `node`, returning the previous value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// let (node, _) = map.insert(1, 1);
    /// assert_eq!(map.set_value(node, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn set_value(&mut self, node: NodeId, value: V) -> Option<V> {
        self.tree.set_value(node, value)
    }

    /// Collects every key in comparator order. The vector is empty for an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 'c');
    /// map.insert(1, 'a');
    /// assert_eq!(map.keys(), vec![&1, &3]);
    /// ```
    pub fn keys(&self) -> Vec<&K> {
        self.tree.keys()
    }

    /// Collects every value in key order. The vector is empty for an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 'c');
    /// map.insert(1, 'a');
    /// assert_eq!(map.values(), vec![&'a', &'c']);
    /// ```
    pub fn values(&self) -> Vec<&V> {
        self.tree.values()
    }

    /// Clears the map, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns a cursor over the root node, or `None` if the map is empty.
    pub fn root(&self) -> Option<MapNode<'_, K, V>> {
        self.tree.root().map(|id| MapNode { map: self, id })
    }

    /// Returns a cursor over `node`, or `None` if the node no longer belongs to this map.
    pub fn node(&self, node: NodeId) -> Option<MapNode<'_, K, V>> {
        self.tree.key(node).map(|_| MapNode { map: self, id: node })
    }

    /// Returns an iterator over the map. The iterator yields key-value pairs using in-order
    /// traversal and walks backwards when reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'b');
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &'a')));
    /// assert_eq!(iterator.next(), Some((&3, &'b')));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, K, V> {
        RedBlackMapIter {
            map: self,
            front: self.first(),
            back: self.last(),
            exhausted: false,
        }
    }

    /// Renders the tree shape of the map into an indented multi-line string. Diagnostics only.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert_eq!(map.pretty(), "");
    /// ```
    pub fn pretty(&self) -> String
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        match self.root() {
            Some(root) => render::render(&root),
            None => String::new(),
        }
    }
}

impl<K, V> fmt::Display for RedBlackMap<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl<K, V> IntoIterator for RedBlackMap<K, V> {
    type IntoIter = RedBlackMapIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        RedBlackMapIntoIter {
            entries: self.tree.into_ordered_entries().into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackMap<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = RedBlackMapIter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for RedBlackMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An owning iterator for `RedBlackMap<K, V>`.
///
/// This iterator traverses the entries of the map in-order and yields owned pairs.
pub struct RedBlackMapIntoIter<K, V> {
    entries: vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for RedBlackMapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }
}

impl<K, V> DoubleEndedIterator for RedBlackMapIntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

/// An iterator for `RedBlackMap<K, V>`.
///
/// This iterator traverses the entries of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, K, V> {
    map: &'a RedBlackMap<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    exhausted: bool,
}

impl<'a, K, V> RedBlackMapIter<'a, K, V> {
    fn entry(&self, node: NodeId) -> (&'a K, &'a V) {
        let key = self.map.tree.key(node).expect("Expected a live node.");
        let value = self.map.tree.value(node).expect("Expected a live node.");
        (key, value)
    }
}

impl<'a, K, V> Iterator for RedBlackMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let curr = self.front?;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.map.next(curr);
        }
        Some(self.entry(curr))
    }
}

impl<'a, K, V> DoubleEndedIterator for RedBlackMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let curr = self.back?;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.map.prev(curr);
        }
        Some(self.entry(curr))
    }
}

/// A borrowed cursor over a node of a `RedBlackMap<K, V>`.
pub struct MapNode<'a, K, V> {
    map: &'a RedBlackMap<K, V>,
    id: NodeId,
}

impl<'a, K, V> MapNode<'a, K, V> {
    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the key held by this node.
    pub fn key(&self) -> &'a K {
        self.map.tree.key(self.id).expect("Expected a live node.")
    }

    /// Returns the value held by this node.
    pub fn value(&self) -> &'a V {
        self.map.tree.value(self.id).expect("Expected a live node.")
    }

    /// Returns a cursor over the parent node, or `None` at the root.
    pub fn parent(&self) -> Option<MapNode<'a, K, V>> {
        self.map
            .tree
            .parent(self.id)
            .map(|id| MapNode { map: self.map, id })
    }

    /// Returns a cursor over the in-order successor.
    pub fn next(&self) -> Option<MapNode<'a, K, V>> {
        self.map
            .tree
            .next(self.id)
            .map(|id| MapNode { map: self.map, id })
    }

    /// Returns a cursor over the in-order predecessor.
    pub fn prev(&self) -> Option<MapNode<'a, K, V>> {
        self.map
            .tree
            .prev(self.id)
            .map(|id| MapNode { map: self.map, id })
    }

    /// Returns how many children this node has, ignoring empty slots.
    pub fn child_count(&self) -> usize {
        self.map.tree.num_children(self.id)
    }

    /// Returns a cursor over the `index`-th present child.
    pub fn child_at(&self, index: usize) -> Option<MapNode<'a, K, V>> {
        self.map
            .tree
            .child_by_index(self.id, index)
            .map(|id| MapNode { map: self.map, id })
    }
}

impl<'a, K, V> Clone for MapNode<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for MapNode<'a, K, V> {}

impl<'a, K, V> TreeNode for MapNode<'a, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn label(&self) -> String {
        format!("{}: {}", self.key(), self.value())
    }

    fn parent(&self) -> Option<Self> {
        MapNode::parent(self)
    }

    fn child_count(&self) -> usize {
        MapNode::child_count(self)
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        MapNode::child_at(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_first_last_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.first(), None);
        assert_eq!(map.last(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        let (_, inserted) = map.insert(1, 1);
        assert!(inserted);
        assert!(map.contains(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_existing_key() {
        let mut map = RedBlackMap::new();
        let (node, _) = map.insert(1, 1);
        let (same_node, inserted) = map.insert(1, 2);
        assert!(!inserted);
        assert_eq!(node, same_node);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&2));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert!(map.remove(&1));
        assert!(!map.contains(&1));
        assert!(!map.remove(&1));
    }

    #[test]
    fn test_erase() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        let (node, _) = map.insert(2, 2);
        assert!(map.erase(node));
        assert_eq!(map.len(), 1);
        assert!(!map.contains(&2));
    }

    #[test]
    fn test_erase_foreign_node() {
        let mut map = RedBlackMap::new();
        let mut other = RedBlackMap::new();
        map.insert(1, 1);
        let (foreign, _) = other.insert(1, 1);
        assert!(!map.erase(foreign));
        assert_eq!(map.len(), 1);
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_first_last() {
        let mut map = RedBlackMap::new();
        map.insert(1, 'a');
        map.insert(3, 'b');
        map.insert(5, 'c');

        assert_eq!(map.key(map.first().unwrap()), Some(&1));
        assert_eq!(map.key(map.last().unwrap()), Some(&5));
    }

    #[test]
    fn test_next_prev() {
        let mut map = RedBlackMap::new();
        for key in 1..=5 {
            map.insert(key, key * 10);
        }

        let mut walked = Vec::new();
        let mut curr = map.first();
        while let Some(node) = curr {
            walked.push(*map.key(node).unwrap());
            curr = map.next(node);
        }
        assert_eq!(walked, vec![1, 2, 3, 4, 5]);

        let mut walked_back = Vec::new();
        let mut curr = map.last();
        while let Some(node) = curr {
            walked_back.push(*map.key(node).unwrap());
            curr = map.prev(node);
        }
        assert_eq!(walked_back, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_keys_values() {
        let mut map = RedBlackMap::new();
        map.insert(3, 'c');
        map.insert(1, 'a');
        map.insert(2, 'b');

        assert_eq!(map.keys(), vec![&1, &2, &3]);
        assert_eq!(map.values(), vec![&'a', &'b', &'c']);
    }

    #[test]
    fn test_clear() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.keys(), Vec::<&u32>::new());
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 'a');
        map.insert(5, 'c');
        map.insert(3, 'b');

        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(&1, &'a'), (&3, &'b'), (&5, &'c')],
        );
    }

    #[test]
    fn test_iter_rev() {
        let mut map = RedBlackMap::new();
        map.insert(1, 'a');
        map.insert(5, 'c');
        map.insert(3, 'b');

        assert_eq!(
            map.iter().rev().collect::<Vec<_>>(),
            vec![(&5, &'c'), (&3, &'b'), (&1, &'a')],
        );
    }

    #[test]
    fn test_iter_both_ends() {
        let mut map = RedBlackMap::new();
        map.insert(1, 'a');
        map.insert(2, 'b');
        map.insert(3, 'c');

        let mut iterator = map.iter();
        assert_eq!(iterator.next(), Some((&1, &'a')));
        assert_eq!(iterator.next_back(), Some((&3, &'c')));
        assert_eq!(iterator.next(), Some((&2, &'b')));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next_back(), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 'a');
        map.insert(5, 'c');
        map.insert(3, 'b');

        assert_eq!(
            map.into_iter().collect::<Vec<_>>(),
            vec![(1, 'a'), (3, 'b'), (5, 'c')],
        );
    }

    #[test]
    fn test_traverse_then_remove() {
        let mut map = RedBlackMap::new();
        for key in 0..16 {
            map.insert(key, key);
        }

        let even: Vec<u32> = map.keys().into_iter().cloned().filter(|key| key % 2 == 0).collect();
        for key in even {
            assert!(map.remove(&key));
        }

        assert_eq!(map.keys(), vec![&1, &3, &5, &7, &9, &11, &13, &15]);
    }

    #[test]
    fn test_cursor() {
        let mut map = RedBlackMap::new();
        map.insert(2, 'b');
        map.insert(1, 'a');
        map.insert(3, 'c');

        let root = map.root().unwrap();
        assert_eq!(root.key(), &2);
        assert_eq!(root.child_count(), 2);
        assert!(root.parent().is_none());

        let left = root.child_at(0).unwrap();
        assert_eq!(left.key(), &1);
        assert_eq!(left.parent().unwrap().key(), &2);
        assert_eq!(left.next().unwrap().key(), &2);
        assert!(left.prev().is_none());
    }

    #[test]
    fn test_display() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.to_string(), "{}");
        map.insert(2, 'b');
        map.insert(1, 'a');
        assert_eq!(map.to_string(), "{1: a, 2: b}");
    }

    #[test]
    fn test_pretty() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.pretty(), "");
        map.insert(2, 'b');
        map.insert(1, 'a');
        map.insert(3, 'c');

        let expected = "2: b\n\
                        |-- 1: a\n\
                        `-- 3: c\n";
        assert_eq!(map.pretty(), expected);
    }
}
