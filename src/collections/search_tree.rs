//! Unbalanced binary search tree stored in an index arena.
//!
//! Nodes live in a `Vec` and refer to their children by index, so neither
//! insertion, traversal nor drop recurses. Ordering is strict: every element
//! in a left subtree is less than its node, every element in a right subtree
//! is greater. Inserting an element equal to an existing one overwrites that
//! node's value in place.

use core::cmp::Ordering;
use core::fmt;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

/// A binary search tree.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(h)\) | `h` is the tree height, `n` in the worst case |
/// | `contains` | \(O(h)\) | |
/// | `iter` | \(O(n)\) total | In-order, explicit stack |
#[derive(Debug, Clone)]
pub struct SearchTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<usize>,
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<T: Ord> SearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value`, keeping the ordering invariant.
    ///
    /// Returns `true` if a new node was created, `false` if an equal element
    /// was overwritten.
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut cur) = self.root else {
            self.root = Some(self.push(value));
            return true;
        };

        loop {
            let ord = value.cmp(&self.nodes[cur].value);
            let child = match ord {
                Ordering::Equal => {
                    self.nodes[cur].value = value;
                    return false;
                }
                Ordering::Less => self.nodes[cur].left,
                Ordering::Greater => self.nodes[cur].right,
            };
            if let Some(child) = child {
                cur = child;
                continue;
            }

            let idx = self.push(value);
            if ord == Ordering::Less {
                self.nodes[cur].left = Some(idx);
            } else {
                self.nodes[cur].right = Some(idx);
            }
            return true;
        }
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            cur = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }
}

impl<T> SearchTree<T> {
    fn push(&mut self, value: T) -> usize {
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an in-order iterator over the elements.
    pub fn iter(&self) -> InOrder<'_, T> {
        let mut iter = InOrder {
            tree: self,
            stack: Vec::new(),
        };
        iter.descend_left(self.root);
        iter
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the elements in order, separated by single spaces.
impl<T: fmt::Display> fmt::Display for SearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// In-order iterator over a [`SearchTree`].
pub struct InOrder<'a, T> {
    tree: &'a SearchTree<T>,
    stack: Vec<usize>,
}

impl<T> InOrder<'_, T> {
    fn descend_left(&mut self, mut cur: Option<usize>) {
        while let Some(idx) = cur {
            self.stack.push(idx);
            cur = self.tree.nodes[idx].left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[idx];
        self.descend_left(node.right);
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_tree_in_order() {
        let tree: SearchTree<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(tree.to_string(), "1 2 3");
    }

    #[test]
    fn search_tree_duplicate_overwrites() {
        let mut tree = SearchTree::new();
        assert!(tree.insert(5));
        assert!(tree.insert(2));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(&2));
        assert!(!tree.contains(&4));
    }

    #[test]
    fn search_tree_overwrite_replaces_value() {
        // Orders by key only, so an equal key carries a new payload.
        #[derive(Debug)]
        struct Keyed(u32, &'static str);

        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut tree = SearchTree::new();
        tree.insert(Keyed(1, "old"));
        tree.insert(Keyed(0, "low"));
        assert!(!tree.insert(Keyed(1, "new")));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().map(|k| k.1).collect::<Vec<_>>(), vec!["low", "new"]);
    }

    #[test]
    fn empty_tree_renders_nothing() {
        let tree = SearchTree::<u8>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.to_string(), "");
        assert_eq!(tree.iter().next(), None);
    }
}
