//! Generic operations over [`SignatureNode`] trees.

use super::SignatureNode;

/// Visiting order for [`transform_leaves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Children are fully transformed before their parent.
    DepthFirstPostOrder,
    /// A node is transformed before any of its children.
    PreOrder,
}

/// Number of bracket levels below `tree`: 0 for a leaf.
pub fn depth(tree: &SignatureNode) -> usize {
    tree.children
        .iter()
        .map(|child| depth(child) + 1)
        .max()
        .unwrap_or(0)
}

/// Prunes every descendant for which `keep` returns false, together with its
/// whole subtree.
///
/// The root is never tested. Surviving siblings keep their relative order.
pub fn filter<F>(keep: F, tree: SignatureNode) -> SignatureNode
where
    F: Fn(&SignatureNode) -> bool,
{
    filter_impl(&keep, tree)
}

fn filter_impl<F>(keep: &F, tree: SignatureNode) -> SignatureNode
where
    F: Fn(&SignatureNode) -> bool,
{
    let children = tree
        .children
        .into_iter()
        .filter(|child| keep(child))
        .map(|child| filter_impl(keep, child))
        .collect();

    SignatureNode { children, ..tree }
}

/// Applies `transformer` to every node of `tree`, in place.
pub fn transform_leaves<F>(transformer: &mut F, tree: &mut SignatureNode, order: TraversalOrder)
where
    F: FnMut(&mut SignatureNode),
{
    match order {
        TraversalOrder::DepthFirstPostOrder => {
            for child in tree.children.iter_mut() {
                transform_leaves(transformer, child, order);
            }
            transformer(tree);
        }
        TraversalOrder::PreOrder => {
            transformer(tree);
            for child in tree.children.iter_mut() {
                transform_leaves(transformer, child, order);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SignatureNode {
        // a<b<c>, d>
        SignatureNode::new(
            "a",
            "",
            vec![
                SignatureNode::new("b", "", vec![SignatureNode::leaf("c")]),
                SignatureNode::leaf("d"),
            ],
        )
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth(&SignatureNode::leaf("int")), 0);
        assert_eq!(depth(&sample()), 2);
    }

    #[test]
    fn test_filter_prunes_whole_subtree() {
        let filtered = filter(|n| n.left != "b", sample());
        assert_eq!(filtered.children, vec![SignatureNode::leaf("d")]);
        assert_eq!(depth(&filtered), 1);
    }

    #[test]
    fn test_filter_never_tests_root() {
        let filtered = filter(|n| n.left != "a", sample());
        assert_eq!(filtered, sample());
    }

    #[test]
    fn test_filter_reaches_grandchildren() {
        let filtered = filter(|n| n.left != "c", sample());
        assert!(filtered.children[0].children.is_empty());
        assert_eq!(filtered.children[1], SignatureNode::leaf("d"));
    }

    #[test]
    fn test_transform_orders() {
        let mut post = Vec::new();
        let mut tree = sample();
        transform_leaves(&mut |n: &mut SignatureNode| post.push(n.left.clone()), &mut tree, TraversalOrder::DepthFirstPostOrder);
        assert_eq!(post, vec!["c", "b", "d", "a"]);

        let mut pre = Vec::new();
        transform_leaves(&mut |n: &mut SignatureNode| pre.push(n.left.clone()), &mut tree, TraversalOrder::PreOrder);
        assert_eq!(pre, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_post_order_sees_transformed_children() {
        let mut tree = sample();
        transform_leaves(
            &mut |n: &mut SignatureNode| {
                let inner: String = n.children.iter().map(|c| c.left.as_str()).collect();
                n.left = format!("{}{}", n.left, inner);
            },
            &mut tree,
            TraversalOrder::DepthFirstPostOrder,
        );
        assert_eq!(tree.children[0].left, "bc");
        assert_eq!(tree.left, "abcd");
    }
}
