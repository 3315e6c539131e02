use std::collections::BTreeSet;
use variant::prelude::*;

#[variant(Debug, Display, Clone, Ord, Hash, Default, MoveOut)]
pub struct Token(u64, char, String);

fn main() {
    let set: BTreeSet<Token> = vec![Token::from('b'), Token::from(3u64), Token::from('a')]
        .into_iter()
        .collect();
    let rendered = set.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(rendered, vec!["3", "a", "b"]);

    let mut text = Token::from(String::from("moved"));
    let taken = text.move_out();
    assert_eq!(format!("{:?}", taken), "Token(\"moved\")");
    assert_eq!(text.to_string(), "");
    assert_eq!(text.which(), taken.which());

    assert_eq!(Token::default(), Token::from(0u64));
    assert_eq!(taken.clone(), taken);
}
