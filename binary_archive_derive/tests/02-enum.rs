use binary_archive::{ArchiveError, BinarySerializable};
use binary_archive_derive::BinarySerializable;
use std::fmt::Debug;

#[derive(Debug, PartialEq, BinarySerializable)]
enum Shape<T: Debug>
where
    T: PartialEq,
{
    Point,
    Pair(T, i64),
    Named { id: i32, weight: f64 },
}

fn main() -> std::io::Result<()> {
    let point = Shape::<i32>::Point;
    let pair = Shape::<i32>::Pair(1i32, 2i64);
    let named = Shape::<i32>::Named { id: 3, weight: 0.5 };

    assert_eq!(point.encode()?, 0u32.to_ne_bytes().to_vec());

    let mut expected = 1u32.to_ne_bytes().to_vec();
    expected.extend_from_slice(&1i32.to_ne_bytes());
    expected.extend_from_slice(&2i64.to_ne_bytes());
    assert_eq!(pair.encode()?, expected);

    for value in vec![point, pair, named] {
        let bytes = value.encode()?;
        assert_eq!(value, Shape::<i32>::decode(&bytes).unwrap());
    }

    match Shape::<i32>::decode(&9u32.to_ne_bytes()) {
        Err(ArchiveError::Malformed { offset, context }) => {
            assert_eq!(offset, 0);
            assert_eq!(context, "unknown enum discriminant");
        }
        other => panic!("unexpected {:?}", other),
    }

    Ok(())
}
