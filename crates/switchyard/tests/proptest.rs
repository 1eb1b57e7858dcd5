//! Property tests for the tokenizer's lexing invariants.

use proptest::prelude::*;
use switchyard::{Argv, Token, Tokenizer};

proptest! {
    // Entries without a leading dash always lex to exactly one Value each,
    // in order.
    #[test]
    fn plain_entries_lex_to_single_values(
        entries in prop::collection::vec("[a-z][a-z0-9 ._/]{0,12}", 0..8)
    ) {
        let mut args = vec!["program".to_string()];
        args.extend(entries.iter().cloned());
        let argv = Argv::new(args);

        let tokens: Vec<_> = Tokenizer::new(&argv).collect();
        prop_assert_eq!(tokens.len(), entries.len());
        for (token, entry) in tokens.iter().zip(&entries) {
            prop_assert_eq!(*token, Token::Value(entry.as_str()));
        }
    }

    // A short group of n characters lexes to n Short tokens, one per
    // character, in order.
    #[test]
    fn short_groups_lex_one_token_per_char(chars in "[a-z0-9]{1,10}") {
        let argv = Argv::new(vec!["program".to_string(), format!("-{chars}")]);

        let tokens: Vec<_> = Tokenizer::new(&argv).collect();
        prop_assert_eq!(tokens.len(), chars.chars().count());
        for (token, ch) in tokens.iter().zip(chars.chars()) {
            prop_assert_eq!(*token, Token::Short(ch));
        }
    }

    // `--name=value` splits at the first `=`; the value keeps any further
    // `=` characters.
    #[test]
    fn long_entries_split_at_the_first_equals(
        name in "[a-z][a-z0-9-]{0,10}",
        value in "[a-z0-9=]{0,10}"
    ) {
        let argv = Argv::new(vec!["program".to_string(), format!("--{name}={value}")]);

        let tokens: Vec<_> = Tokenizer::new(&argv).collect();
        prop_assert_eq!(tokens, vec![Token::Long(name.as_str()), Token::Value(value.as_str())]);
    }

    // A long switcher without `=` never swallows the following entry.
    #[test]
    fn separate_values_stay_separate(name in "[a-z][a-z0-9-]{0,10}", value in "[a-z0-9]{1,10}") {
        let argv = Argv::new(vec!["program".to_string(), format!("--{name}"), value.clone()]);

        let tokens: Vec<_> = Tokenizer::new(&argv).collect();
        prop_assert_eq!(tokens, vec![Token::Long(name.as_str()), Token::Value(value.as_str())]);
    }
}
