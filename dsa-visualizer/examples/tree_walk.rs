// Example: build a BST and watch each traversal order grow.
use dsa_visualizer::{build_bst, inorder, level_order, postorder, preorder};

fn main() {
    let tree = build_bst(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    println!("len={} height={}", tree.len(), tree.height());

    let out = inorder(&tree, |v| println!("visit {} -> {:?}", v.node.value(), v.order));
    println!("inorder={:?} ({})", out.value, out.complexity);
    println!("preorder={:?}", preorder(&tree, |_| {}).value);
    println!("postorder={:?}", postorder(&tree, |_| {}).value);
    let level = level_order(&tree, |_| {});
    println!("level_order={:?} ({})", level.value, level.complexity);
}
