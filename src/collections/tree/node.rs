use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;
use crate::collections::order::Compare;

/// An optional, owned subtree. All tree algorithms are implemented on branches rather than nodes,
/// so that a subtree can replace itself during rotations and removals.
pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
    /// The number of nodes on the longest path from this node to a leaf, including itself.
    pub height: usize,
}

impl<K, V> Node<K, V> {
    pub const fn leaf(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
            height: 1,
        }
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    /// The height of the left subtree minus the height of the right. A balanced node has a balance
    /// of -1, 0 or 1.
    pub fn balance(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }
}

impl<K, V> Branch<K, V> {
    pub fn height(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.height)
    }

    pub fn balance(&self) -> isize {
        self.0.as_ref().map_or(0, |node| node.balance())
    }

    pub fn insert<C: Compare<K>>(&mut self, key: K, value: V, cmp: &C) -> Option<V> {
        let previous = match &mut self.0 {
            Some(node) => match cmp.compare(&key, &node.key) {
                Ordering::Less => node.left.insert(key, value, cmp),
                Ordering::Greater => node.right.insert(key, value, cmp),
                // Replacing a value doesn't change the shape of the tree.
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            },
            None => {
                self.0 = Some(Box::new(Node::leaf(key, value)));
                return None;
            },
        };

        self.rebalance();
        previous
    }

    pub fn get_entry<Q, C>(&self, key: &Q, cmp: &C) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let mut current = self.0.as_deref();

        while let Some(node) = current {
            current = match cmp.compare(key, &node.key) {
                Ordering::Less => node.left.0.as_deref(),
                Ordering::Greater => node.right.0.as_deref(),
                Ordering::Equal => return Some(node.tuple()),
            };
        }

        None
    }

    pub fn get_mut<Q, C>(&mut self, key: &Q, cmp: &C) -> Option<&mut V>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        match &mut self.0 {
            Some(node) => match cmp.compare(key, &node.key) {
                Ordering::Less => node.left.get_mut(key, cmp),
                Ordering::Greater => node.right.get_mut(key, cmp),
                Ordering::Equal => Some(&mut node.value),
            },
            None => None,
        }
    }

    pub fn remove_entry<Q, C>(&mut self, key: &Q, cmp: &C) -> Option<(K, V)>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let removed = match &mut self.0 {
            Some(node) => match cmp.compare(key, &node.key) {
                Ordering::Less => node.left.remove_entry(key, cmp),
                Ordering::Greater => node.right.remove_entry(key, cmp),
                Ordering::Equal => return self.take_root(),
            },
            None => return None,
        };

        self.rebalance();
        removed
    }

    /// Removes the root of this branch, replacing it with its in-order successor if it has two
    /// children.
    pub fn take_root(&mut self) -> Option<(K, V)> {
        let mut node = self.0.take()?;

        self.0 = match (node.left.0.take(), node.right.0.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Branch(Some(right));
                match right.take_first_entry() {
                    Some((key, value)) => Some(Box::new(Node {
                        left: Branch(Some(left)),
                        right,
                        key,
                        value,
                        height: 1,
                    })),
                    // A non-empty branch always has a first entry.
                    None => Some(left),
                }
            },
        };

        self.rebalance();

        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node.tuple())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node.tuple())
    }

    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let node = self.0.as_mut()?;

        let first = if node.left.0.is_some() {
            node.left.take_first_entry()
        } else {
            return self.take_root();
        };

        self.rebalance();
        first
    }

    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let node = self.0.as_mut()?;

        let last = if node.right.0.is_some() {
            node.right.take_last_entry()
        } else {
            return self.take_root();
        };

        self.rebalance();
        last
    }

    /// Restores the height of the root and rotates the branch if it has become unbalanced. Assumes
    /// that both subtrees are already balanced.
    pub fn rebalance(&mut self) {
        let Some(node) = &mut self.0 else { return };
        node.update_height();

        let balance = node.balance();
        if balance > 1 {
            if node.left.balance() < 0 {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if balance < -1 {
            if node.right.balance() > 0 {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }

    fn rotate_right(&mut self) {
        let Some(mut node) = self.0.take() else { return };
        let Some(mut pivot) = node.left.0.take() else {
            self.0 = Some(node);
            return;
        };

        node.left.0 = pivot.right.0.take();
        node.update_height();
        pivot.right.0 = Some(node);
        pivot.update_height();

        self.0 = Some(pivot);
    }

    fn rotate_left(&mut self) {
        let Some(mut node) = self.0.take() else { return };
        let Some(mut pivot) = node.right.0.take() else {
            self.0 = Some(node);
            return;
        };

        node.right.0 = pivot.left.0.take();
        node.update_height();
        pivot.left.0 = Some(node);
        pivot.update_height();

        self.0 = Some(pivot);
    }
}

impl<K: Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n"),
                node.key,
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
