#[test]
fn tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/01-basic.rs");
    t.pass("tests/02-capabilities.rs");
    t.pass("tests/03-recursive.rs");
    t.pass("tests/04-module.rs");
}
