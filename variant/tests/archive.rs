use binary_archive_derive::BinarySerializable;
use variant::archive::BinarySerializable;
use variant::io::{from_bytes, read, to_bytes, write};
use variant::prelude::*;
use variant::VariantError;

#[derive(Debug, Clone, PartialEq, BinarySerializable)]
pub struct Point {
    x: i32,
    y: i32,
}

#[variant(Debug, Clone, PartialEq, BinarySerializable)]
pub struct Value(i32, f64, String, Point);

#[test]
fn double_round_trips() {
    let original = Value::from(5.5);
    let bytes = to_bytes(&original).unwrap();

    let mut restored = Value::from(0);
    let rest = read(&mut restored, &bytes).unwrap();

    assert!(rest.is_empty());
    assert_eq!(restored, original);
    assert_eq!(restored.get::<f64>(), Ok(&5.5));
}

#[test]
fn layout_is_discriminant_then_value() {
    let mut bytes = Vec::new();
    write(&Value::from(7), &mut bytes).unwrap();

    let mut expected = 0u32.to_ne_bytes().to_vec();
    expected.extend_from_slice(&7i32.to_ne_bytes());
    assert_eq!(bytes, expected);
    assert_eq!(Value::from(7).encode().unwrap(), expected);
}

#[test]
fn aggregates_and_strings_round_trip() {
    for value in vec![
        Value::from(-3),
        Value::from(String::from("text")),
        Value::from(Point { x: 1, y: -1 }),
    ] {
        let bytes = to_bytes(&value).unwrap();
        assert_eq!(from_bytes::<Value>(&bytes).unwrap(), value);
    }
}

#[test]
fn out_of_range_discriminant_is_corrupt() {
    let mut bytes = 9u32.to_ne_bytes().to_vec();
    bytes.extend_from_slice(&[0; 8]);

    let mut target = Value::from(String::from("kept"));
    match read(&mut target, &bytes) {
        Err(VariantError::CorruptData(e)) => {
            assert_eq!(e.discriminant, 9);
            assert_eq!(e.offset, 0);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(target, Value::from(String::from("kept")));

    assert!(matches!(
        from_bytes::<Value>(&bytes),
        Err(VariantError::CorruptData(_))
    ));
}

#[test]
fn truncated_input_is_malformed() {
    let bytes = to_bytes(&Value::from(String::from("truncated"))).unwrap();
    assert!(matches!(
        from_bytes::<Value>(&bytes[..bytes.len() - 2]),
        Err(VariantError::Malformed(_))
    ));
    assert!(matches!(
        from_bytes::<Value>(&[1, 0]),
        Err(VariantError::Malformed(_))
    ));
}

#[test]
fn read_leaves_the_rest() {
    let mut bytes = to_bytes(&Value::from(1)).unwrap();
    bytes.extend(to_bytes(&Value::from(2.0)).unwrap());

    let mut first = Value::from(0);
    let rest = read(&mut first, &bytes).unwrap();
    let mut second = Value::from(0);
    let rest = read(&mut second, rest).unwrap();

    assert_eq!(first, Value::from(1));
    assert_eq!(second, Value::from(2.0));
    assert!(rest.is_empty());
}

#[variant(Debug, PartialEq, BinarySerializable)]
pub struct Outer(Value, bool);

#[test]
fn nested_variant_round_trips() {
    let outer = Outer::from(Value::from(Point { x: 4, y: 5 }));
    let bytes = to_bytes(&outer).unwrap();
    assert_eq!(bytes.len(), 4 + 4 + 8);
    assert_eq!(from_bytes::<Outer>(&bytes).unwrap(), outer);
}

#[test]
fn corrupt_nested_discriminant_is_corrupt() {
    let mut bytes = 0u32.to_ne_bytes().to_vec();
    bytes.extend_from_slice(&9u32.to_ne_bytes());
    bytes.extend_from_slice(&[0; 8]);

    let mut target = Outer::from(true);
    match read(&mut target, &bytes) {
        Err(VariantError::CorruptData(e)) => {
            assert_eq!(e.discriminant, 9);
            assert_eq!(e.offset, 4);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(target, Outer::from(true));

    assert!(matches!(
        from_bytes::<Outer>(&bytes),
        Err(VariantError::CorruptData(_))
    ));
}

#[derive(Debug, PartialEq, BinarySerializable)]
pub struct Branch {
    left: Expr,
    right: Expr,
}

#[variant(Debug, PartialEq, BinarySerializable)]
pub struct Expr(i32, RecursiveWrapper<Branch>);

#[test]
fn corrupt_discriminant_inside_recursion_is_corrupt() {
    let tree = Expr::from(Branch {
        left: Expr::from(1),
        right: Expr::from(2),
    });
    let mut bytes = to_bytes(&tree).unwrap();
    assert_eq!(from_bytes::<Expr>(&bytes).unwrap(), tree);

    // right child: outer tag, left tag, left value, then its tag
    bytes[12..16].copy_from_slice(&7u32.to_ne_bytes());
    match from_bytes::<Expr>(&bytes) {
        Err(VariantError::CorruptData(e)) => {
            assert_eq!(e.discriminant, 7);
            assert_eq!(e.offset, 12);
        }
        other => panic!("unexpected {:?}", other),
    }
}
