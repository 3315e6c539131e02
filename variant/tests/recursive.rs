use variant::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub left: Expr,
    pub right: Expr,
}

#[variant(Debug, Clone, PartialEq)]
pub struct Expr(i32, String, RecursiveWrapper<Node>);

fn leaf(n: i32) -> Expr {
    Expr::from(n)
}

#[test]
fn nested_values_are_reachable() {
    let tree = Expr::from(Node {
        left: leaf(1),
        right: Expr::from(Node {
            left: leaf(2),
            right: Expr::from(String::from("end")),
        }),
    });

    let root = tree.get::<Node>().unwrap();
    assert_eq!(root.left.get::<i32>(), Ok(&1));

    let inner = root.right.get::<Node>().unwrap();
    assert_eq!(inner.left.get::<i32>(), Ok(&2));
    assert_eq!(inner.right.get::<String>().map(String::as_str), Ok("end"));
}

#[test]
fn wrapper_is_projected() {
    let e = Expr::from(Node {
        left: leaf(1),
        right: leaf(2),
    });
    assert_eq!(e.which(), 2);
    assert_eq!(e.active_name(), "Node");
    assert!(e.is::<Node>());
    assert_eq!(format!("{:?}", leaf(5)), "Expr(5)");
}

#[test]
fn clone_is_deep() {
    let original = Expr::from(Node {
        left: leaf(1),
        right: leaf(2),
    });
    let mut copy = original.clone();
    copy.get_mut::<Node>().unwrap().left.set(10);

    assert_eq!(original.get::<Node>().unwrap().left, leaf(1));
    assert_eq!(copy.get::<Node>().unwrap().left, leaf(10));
    assert_ne!(original, copy);
}

#[test]
fn taking_the_node_out() {
    let e = Expr::from(Node {
        left: leaf(3),
        right: leaf(4),
    });
    let node = e.into_alternative::<Node>().unwrap();
    assert_eq!(node.right, leaf(4));
}
