//! The parsing automaton.
//!
//! Drives the [`Tokenizer`] against the registry tree: resolves switcher
//! tokens flag-first, tracks the argument currently owed a value, binds
//! value tokens, descends into subcommands, and validates required
//! arguments once per node at the moment the node is left (subcommand
//! descent or end of input). Fail-fast: the first error stops token
//! consumption.

use crate::argv::Argv;
use crate::error::ProcessError;
use crate::options::Options;
use crate::tokenizer::{Token, Tokenizer};

/// The outcome of one parse pass.
///
/// Bound values live in the registry, not here; this carries the error (if
/// any), the subcommand descent path, and the bare values that matched
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct ProcessResult {
    /// The first fatal error, or `None` on success.
    pub error: Option<ProcessError>,
    /// Names of the subcommands descended into, in order.
    pub subcommand_path: Vec<String>,
    /// Bare values that matched neither a switcher nor a subcommand.
    pub unparsed: Vec<String>,
}

impl ProcessResult {
    /// `true` if the pass finished without an error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Parses an [`Argv`] against an [`Options`] tree.
///
/// The parser exclusively borrows the registry for the duration of one
/// [`process`](Parser::process) call; bound values are read back out of
/// the registry afterwards.
#[derive(Debug)]
pub struct Parser<'a> {
    options: &'a mut Options,
    strict_subcommands: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the registry root.
    pub fn new(options: &'a mut Options) -> Self {
        Self { options, strict_subcommands: false }
    }

    /// In strict mode a bare value that matches no subcommand is a fatal
    /// [`ProcessError::UnknownSubcommand`] instead of accumulating on
    /// [`ProcessResult::unparsed`].
    pub fn strict_subcommands(mut self, strict: bool) -> Self {
        self.strict_subcommands = strict;
        self
    }

    /// Runs one parse pass over `argv`.
    pub fn process(&mut self, argv: &Argv) -> ProcessResult {
        let mut result = ProcessResult::default();
        // Index path from the root to the current node; the borrow is
        // re-walked per token so descent never holds a child reference.
        let mut path: Vec<usize> = Vec::new();
        // The argument owed a value, as an index into the current node.
        let mut pending: Option<usize> = None;

        for token in Tokenizer::new(argv) {
            if let Some(idx) = pending {
                if !matches!(token, Token::Value(_)) {
                    let node = node_mut(self.options, &path);
                    let name = node.argument_at(idx).display_name();
                    result.error = Some(ProcessError::ExpectingValue(name));
                    return result;
                }
            }

            match token {
                Token::Short(short) => {
                    let node = node_mut(self.options, &path);
                    if let Some(flag) = node.flag_mut_by_short(short) {
                        flag.mark_found();
                    } else if let Some(idx) = node.argument_index_by_short(short) {
                        pending = Some(idx);
                    } else {
                        result.error = Some(ProcessError::UnknownSwitcher(format!("-{short}")));
                        return result;
                    }
                }
                Token::Long(long) => {
                    let node = node_mut(self.options, &path);
                    if let Some(flag) = node.flag_mut_by_long(long) {
                        flag.mark_found();
                    } else if let Some(idx) = node.argument_index_by_long(long) {
                        pending = Some(idx);
                    } else {
                        result.error = Some(ProcessError::UnknownSwitcher(format!("--{long}")));
                        return result;
                    }
                }
                Token::Value(text) => {
                    let node = node_mut(self.options, &path);
                    if let Some(idx) = pending.take() {
                        let argument = node.argument_at_mut(idx);
                        if let Err(message) = argument.bind(text) {
                            let name = argument.display_name();
                            result.error = Some(ProcessError::WrongValueType { name, message });
                            return result;
                        }
                    } else if !result.unparsed.is_empty() {
                        // Once accumulation starts, bare values are not
                        // retried as subcommands.
                        result.unparsed.push(text.to_string());
                    } else if let Some(idx) = node.subcommand_index(text) {
                        if let Some(error) = missing_required(node) {
                            result.error = Some(error);
                            return result;
                        }
                        result.subcommand_path.push(text.to_string());
                        path.push(idx);
                    } else if self.strict_subcommands {
                        result.error = Some(ProcessError::UnknownSubcommand(text.to_string()));
                        return result;
                    } else {
                        result.unparsed.push(text.to_string());
                    }
                }
            }
        }

        let node = node_mut(self.options, &path);
        if let Some(error) = missing_required(node) {
            result.error = Some(error);
        }
        result
    }
}

/// Runs one parse pass; shorthand for [`Parser::new`] + `process`.
pub fn parse_argv(options: &mut Options, argv: &Argv) -> ProcessResult {
    Parser::new(options).process(argv)
}

fn node_mut<'o>(root: &'o mut Options, path: &[usize]) -> &'o mut Options {
    path.iter().fold(root, |node, &idx| node.subcommand_at_mut(idx))
}

fn missing_required(node: &Options) -> Option<ProcessError> {
    node.arguments()
        .iter()
        .find(|argument| argument.is_required() && !argument.has_value())
        .map(|argument| ProcessError::RequiredArgument(argument.display_name()))
}
