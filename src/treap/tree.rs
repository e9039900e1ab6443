use crate::entry::Entry;
use crate::treap::node::Node;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

pub type Tree<V> = Option<Box<Node<V>>>;

fn rotate_left<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.left = Some(node);
    child
}

fn rotate_right<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.right = Some(node);
    child
}

fn violates_heap_property<V>(child: &Tree<V>, priority: u32) -> bool {
    match child {
        Some(ref child_node) => child_node.priority < priority,
        None => false,
    }
}

// precondition: every key in `l_tree` is less than every key in `r_tree`
pub fn merge<V>(l_tree: &mut Tree<V>, r_tree: Tree<V>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority < r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

pub fn insert<V>(tree: &mut Tree<V>, new_node: Node<V>) -> Option<Entry<V>> {
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let ret = match new_node.entry.key.cmp(&node.entry.key) {
        Ordering::Less => {
            let ret = insert(&mut node.left, new_node);
            if violates_heap_property(&node.left, node.priority) {
                node = rotate_right(node);
            }
            ret
        },
        Ordering::Greater => {
            let ret = insert(&mut node.right, new_node);
            if violates_heap_property(&node.right, node.priority) {
                node = rotate_left(node);
            }
            ret
        },
        Ordering::Equal => {
            // the node keeps its priority and position on an overwrite
            let Node { ref mut entry, .. } = &mut *node;
            Some(mem::replace(entry, new_node.entry))
        },
    };

    *tree = Some(node);
    ret
}

pub fn remove<V>(tree: &mut Tree<V>, key: &[u8]) -> Option<Entry<V>> {
    let new_tree = {
        let node = match tree {
            Some(ref mut node) => node,
            None => return None,
        };
        match key.cmp(&node.entry.key[..]) {
            Ordering::Less => return remove(&mut node.left, key),
            Ordering::Greater => return remove(&mut node.right, key),
            Ordering::Equal => {
                let Node {
                    ref mut left,
                    ref mut right,
                    ..
                } = &mut **node;
                merge(left, right.take());
                left.take()
            },
        }
    };

    mem::replace(tree, new_tree).map(|node| node.entry)
}

pub fn get<'a, V>(tree: &'a Tree<V>, key: &[u8]) -> Option<&'a Entry<V>> {
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key[..]) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, V>(tree: &'a mut Tree<V>, key: &[u8]) -> Option<&'a mut Entry<V>> {
    tree.as_mut().and_then(|node| {
        match key.cmp(&node.entry.key[..]) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, V>(tree: &'a Tree<V>, key: &[u8]) -> Option<&'a Entry<V>> {
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key[..]) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, V>(tree: &'a Tree<V>, key: &[u8]) -> Option<&'a Entry<V>> {
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key[..]) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<V>(tree: &Tree<V>) -> Option<&Entry<V>> {
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.entry)
    })
}

pub fn max<V>(tree: &Tree<V>) -> Option<&Entry<V>> {
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.entry)
    })
}

/// Writes an indented in-order rendering of the tree into `buffer`, one line
/// per node with its key, priority, and value. Diagnostic output only; the
/// format is not stable.
pub fn describe<V>(tree: &Tree<V>, depth: usize, buffer: &mut String)
where
    V: fmt::Debug,
{
    if let Some(ref node) = *tree {
        describe(&node.left, depth + 1, buffer);
        let line = format!(
            "{:width$}{:?} [{}] => {:?}\n",
            "",
            String::from_utf8_lossy(&node.entry.key),
            node.priority,
            node.entry.value,
            width = depth,
        );
        buffer.push_str(&line);
        describe(&node.right, depth + 1, buffer);
    }
}
