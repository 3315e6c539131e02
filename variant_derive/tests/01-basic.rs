use variant::{variant, VariantCore, VariantExt};

#[variant]
pub struct Value(i32, f64, String, i32, &'static str);

fn main() {
    assert_eq!(Value::alternative_count(), 4);

    let v = Value::from("literal");
    assert_eq!(v.which(), 3);
    assert_eq!(v.get::<&'static str>(), Ok(&"literal"));
    assert!(v.get::<String>().is_err());

    let v = Value::from(String::from("owned"));
    assert_eq!(v.get_if::<String>().map(String::len), Some(5));
    assert_eq!(v.active_name(), "String");
}
