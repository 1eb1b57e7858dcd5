//! Lexer for raw argument entries.
//!
//! Turns [`Argv`] entries into a lazy stream of [`Token`]s:
//!
//! - an entry not starting with `-` is one [`Token::Value`];
//! - `-abc` is a short group: one [`Token::Short`] per character;
//! - `--name` is one [`Token::Long`]; `--name=value` additionally queues
//!   `value` so the *next* call yields it as a [`Token::Value`];
//! - a single dash never carries `=` semantics: `-name=value` stays in
//!   short mode, every character (`=` included) its own [`Token::Short`].
//!
//! The stream is finite and not restartable; end of input is iterator
//! exhaustion.

use crate::argv::Argv;

/// One lexed token. Payload slices borrow from the [`Argv`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A single character out of a short group (`-v`, `-abc`).
    Short(char),
    /// A long switcher name (`--name`, the name part of `--name=value`).
    Long(&'a str),
    /// A bare value, a separate-entry value, or a `=`-bound value.
    Value(&'a str),
}

/// Cursor state carried between `next` calls.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    /// At the start of the current entry.
    Entry,
    /// Inside a short group, `byte` past the characters already yielded.
    Shorts { byte: usize },
    /// A `--name=value` split happened; the value at `byte` is owed next.
    Queued { byte: usize },
}

/// Lexes [`Argv`] entries into [`Token`]s, one `next` call at a time.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    argv: &'a Argv,
    entry: usize,
    cursor: Cursor,
}

impl<'a> Tokenizer<'a> {
    /// Starts a tokenizer at the first entry of `argv`.
    pub fn new(argv: &'a Argv) -> Self {
        Self { argv, entry: 0, cursor: Cursor::Entry }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            match self.cursor {
                Cursor::Entry => {
                    let entry = self.argv.get(self.entry)?;
                    if let Some(rest) = entry.strip_prefix("--") {
                        if let Some(split) = rest.find('=') {
                            // Name now, the queued value on the next call.
                            self.cursor = Cursor::Queued { byte: 2 + split + 1 };
                            return Some(Token::Long(&rest[..split]));
                        }
                        self.entry += 1;
                        return Some(Token::Long(rest));
                    }
                    if entry.len() > 1 && entry.starts_with('-') {
                        self.cursor = Cursor::Shorts { byte: 1 };
                        continue;
                    }
                    // Plain value. A bare `-` lands here too.
                    self.entry += 1;
                    return Some(Token::Value(entry));
                }
                Cursor::Shorts { byte } => {
                    let entry = self.argv.get(self.entry)?;
                    match entry[byte..].chars().next() {
                        Some(ch) => {
                            self.cursor = Cursor::Shorts { byte: byte + ch.len_utf8() };
                            return Some(Token::Short(ch));
                        }
                        None => {
                            self.entry += 1;
                            self.cursor = Cursor::Entry;
                        }
                    }
                }
                Cursor::Queued { byte } => {
                    let entry = self.argv.get(self.entry)?;
                    self.entry += 1;
                    self.cursor = Cursor::Entry;
                    return Some(Token::Value(&entry[byte..]));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        let argv = Argv::new(args.iter().copied());
        Tokenizer::new(&argv)
            .map(|t| match t {
                Token::Short(c) => format!("s:{c}"),
                Token::Long(n) => format!("l:{n}"),
                Token::Value(v) => format!("v:{v}"),
            })
            .collect()
    }

    #[test]
    fn plain_values() {
        assert_eq!(tokens(&["program", "a", "b", "c"]), ["v:a", "v:b", "v:c"]);
    }

    #[test]
    fn short_all_separated() {
        assert_eq!(tokens(&["program", "-a", "-b", "-c"]), ["s:a", "s:b", "s:c"]);
    }

    #[test]
    fn short_all_in_one() {
        assert_eq!(tokens(&["program", "-abc"]), ["s:a", "s:b", "s:c"]);
    }

    #[test]
    fn short_mixed() {
        assert_eq!(tokens(&["program", "-ab", "-c"]), ["s:a", "s:b", "s:c"]);
    }

    #[test]
    fn long_and_values() {
        assert_eq!(
            tokens(&["program", "--long-name", "separate-value", "--long-name-2=value"]),
            ["l:long-name", "v:separate-value", "l:long-name-2", "v:value"]
        );
    }

    #[test]
    fn single_dash_never_splits_on_equals() {
        let expected: Vec<String> = "mistype=value".chars().map(|c| format!("s:{c}")).collect();
        assert_eq!(tokens(&["program", "-mistype=value"]), expected);
    }

    #[test]
    fn equals_value_is_yielded_before_the_next_entry() {
        assert_eq!(
            tokens(&["program", "--name=value", "-a"]),
            ["l:name", "v:value", "s:a"]
        );
    }

    #[test]
    fn empty_equals_value() {
        assert_eq!(tokens(&["program", "--name="]), ["l:name", "v:"]);
    }

    #[test]
    fn bare_dash_is_a_value() {
        assert_eq!(tokens(&["program", "-"]), ["v:-"]);
    }

    #[test]
    fn bare_double_dash_is_an_empty_long_name() {
        assert_eq!(tokens(&["program", "--"]), ["l:"]);
    }

    #[test]
    fn exhausted_stream_stays_exhausted() {
        let argv = Argv::new(["program", "a"]);
        let mut tok = Tokenizer::new(&argv);
        assert_eq!(tok.next(), Some(Token::Value("a")));
        assert_eq!(tok.next(), None);
        assert_eq!(tok.next(), None);
    }
}
