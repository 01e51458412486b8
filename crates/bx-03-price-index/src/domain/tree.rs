//! # Arena Binary Search Tree
//!
//! Nodes are appended to `nodes` and never moved or freed. Children are
//! referenced by `NodeId`, an index into that vector.

/// Index of a node in the tree's arena.
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// Ordered key → value index supporting inclusive range queries.
///
/// Keys only need `PartialOrd`, so `f64` prices work directly. NaN keys are
/// not ordered against anything and must not be inserted.
#[derive(Debug, Clone)]
pub struct PriceIndex<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

impl<K: PartialOrd, V> PriceIndex<K, V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates an empty index with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node. Used before a rebuild from the store.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Inserts `value` under `key`.
    ///
    /// Always succeeds. A key equal to an existing one becomes a new node in
    /// that node's right subtree, so equal keys come back in insertion order.
    pub fn insert(&mut self, key: K, value: V) -> NodeId {
        let id = self.nodes.len();

        match self.root {
            None => self.root = Some(id),
            Some(mut current) => loop {
                let node = &mut self.nodes[current];
                let link = if key < node.key {
                    &mut node.left
                } else {
                    &mut node.right
                };
                match *link {
                    Some(child) => current = child,
                    None => {
                        *link = Some(id);
                        break;
                    }
                }
            },
        }

        self.nodes.push(Node::leaf(key, value));
        id
    }

    /// Returns every entry with `min <= key <= max`, ascending by key.
    ///
    /// In-order traversal with pruning: the left child is visited only when
    /// the node's key is above `min`, the right child only when the key is at
    /// most `max`, since copies of a key equal to `max` sit in its right
    /// subtree. An inverted range (`min > max`) returns an empty vector.
    pub fn range_search(&self, min: &K, max: &K) -> Vec<(&K, &V)> {
        let mut hits = Vec::new();
        if !(min <= max) {
            return hits;
        }

        let mut stack: Vec<NodeId> = Vec::new();
        let mut cursor = self.root;
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                let node = &self.nodes[id];
                cursor = if node.key > *min { node.left } else { None };
            }

            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id];
            if node.key >= *min && node.key <= *max {
                hits.push((&node.key, &node.value));
            }
            cursor = if node.key <= *max { node.right } else { None };
        }

        hits
    }

    /// Iterates every entry in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(root, 1)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl<K: PartialOrd, V> Default for PriceIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Full in-order traversal of a [`PriceIndex`].
pub struct Iter<'a, K, V> {
    tree: &'a PriceIndex<K, V>,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree: &'a PriceIndex<K, V> = self.tree;
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = tree.nodes[id].left;
        }

        let id = self.stack.pop()?;
        let node = &tree.nodes[id];
        self.cursor = node.right;
        Some((&node.key, &node.value))
    }
}
