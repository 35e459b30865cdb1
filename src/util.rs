use crate::node::{Link, Node};

/// Drops a subtree one node at a time. Letting `Box` drop a tall subtree recurses once per level
/// which overflows the stack on long, list-shaped trees.
pub(crate) fn dismantle<K>(root: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Builds a subtree out of the next `len` keys of an ascending iterator. The middle key (rounding
/// down) becomes the root so the two subtrees' sizes differ by at most one.
///
/// Keys are consumed strictly in order: the left subtree first, then the root, then the right
/// subtree. That's what lets this work on owned keys without needing them to be `Clone`.
pub(crate) fn build_balanced<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    // For an index range `[start, end]` this is `mid - start` where `mid = (start + end) / 2`.
    let left_len = (len - 1) / 2;
    let left = build_balanced(keys, left_len);
    let key = keys.next().expect("build_balanced was given fewer keys than `len`");
    let right = build_balanced(keys, len - 1 - left_len);

    Some(Box::new(Node { key, left, right }))
}
