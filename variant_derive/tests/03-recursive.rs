use binary_archive_derive::BinarySerializable;
use variant::io::{from_bytes, to_bytes};
use variant::prelude::*;

#[derive(Debug, Clone, PartialEq, BinarySerializable)]
pub struct List {
    head: i64,
    tail: Cell,
}

#[variant(Debug, Clone, PartialEq, BinarySerializable)]
pub struct Cell((), RecursiveWrapper<List>);

fn cons(head: i64, tail: Cell) -> Cell {
    Cell::from(List { head, tail })
}

fn main() {
    let list = cons(1, cons(2, cons(3, Cell::from(()))));

    let mut sum = 0;
    let mut cursor = &list;
    while let Ok(node) = cursor.get::<List>() {
        sum += node.head;
        cursor = &node.tail;
    }
    assert_eq!(sum, 6);

    let bytes = to_bytes(&list).unwrap();
    assert_eq!(from_bytes::<Cell>(&bytes).unwrap(), list);
}
