use binary_archive::BinarySerializable;
use binary_archive_derive::BinarySerializable;
use std::fmt::Debug;

#[derive(Debug, PartialEq, BinarySerializable)]
struct VoidStruct;

#[derive(Debug, PartialEq, BinarySerializable)]
struct NamedStruct<T: Debug>
where
    T: PartialEq,
{
    i: T,
    j: i64,
}

#[derive(Debug, PartialEq, BinarySerializable)]
struct UnNamedStruct<T: Debug>(T, i64)
where
    T: PartialEq;

#[derive(Debug, PartialEq, BinarySerializable)]
struct Nested {
    name: String,
    inner: UnNamedStruct<u8>,
    tail: Vec<bool>,
}

fn main() -> std::io::Result<()> {
    let vs = VoidStruct {};
    let ns: NamedStruct<i32> = NamedStruct { i: 1i32, j: 2i64 };
    let uns = UnNamedStruct::<i32>(1i32, 2i64);

    let wrt_vs = vs.encode()?;
    let wrt_ns = ns.encode()?;
    let wrt_uns = uns.encode()?;

    assert_eq!(wrt_vs, Vec::<u8>::new());
    let mut expected = 1i32.to_ne_bytes().to_vec();
    expected.extend_from_slice(&2i64.to_ne_bytes());
    assert_eq!(wrt_ns, expected);
    assert_eq!(wrt_uns, expected);

    assert_eq!(vs, VoidStruct::decode(&wrt_vs).unwrap());
    assert_eq!(ns, NamedStruct::<i32>::decode(&wrt_ns).unwrap());
    assert_eq!(
        uns,
        UnNamedStruct::<i32>::deserialize(wrt_uns.as_slice(), wrt_uns.as_slice())
            .unwrap()
            .1
    );

    let nested = Nested {
        name: "leaf".to_string(),
        inner: UnNamedStruct(7, -1),
        tail: vec![true, false],
    };
    assert_eq!(nested, Nested::decode(&nested.encode()?).unwrap());

    // cut short inside `inner`
    let bytes = nested.encode()?;
    assert!(Nested::decode(&bytes[..14]).is_err());

    Ok(())
}
