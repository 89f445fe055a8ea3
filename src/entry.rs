/// A key-value pair held by a tree node.
///
/// Ordering between entries is never derived from the pair itself; it always
/// flows through the comparator of the owning tree.
#[derive(Serialize, Deserialize, Debug)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}
