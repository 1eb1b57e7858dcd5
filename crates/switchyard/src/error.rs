//! Error types for declaration and parsing.

use thiserror::Error;

/// Programmer errors raised while declaring options.
///
/// These abort construction ([`Options::add_flag`](crate::Options::add_flag)
/// and friends, [`Builder::build`](crate::Builder::build)); they are never
/// produced by a parse pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// A short name is already taken by a flag or argument on this node.
    #[error("duplicated short name: '-{0}'")]
    DuplicateShortName(char),

    /// A long name is already taken by a flag or argument on this node.
    #[error("duplicated long name: '--{0}'")]
    DuplicateLongName(String),

    /// A subcommand with this name already exists on this node.
    #[error("duplicated subcommand name: '{0}'")]
    DuplicateSubcommand(String),

    /// Subcommand names must be non-empty.
    #[error("subcommand name can't be empty")]
    EmptySubcommandName,

    /// A flag or argument was declared with neither a short nor a long name.
    #[error("a switcher needs a short or a long name")]
    UnnamedSwitcher,
}

/// User errors raised by a parse pass.
///
/// The parser is fail-fast: the first error stops token consumption and is
/// returned on [`ProcessResult::error`](crate::ProcessResult). Switcher
/// names are rendered long-name-first (`'--input'`, else `'-i'`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// A short or long name not declared on the current node.
    #[error("unknown switcher: '{0}'")]
    UnknownSwitcher(String),

    /// An argument owed a value but another switcher arrived instead.
    #[error("argument '{0}' expected a value")]
    ExpectingValue(String),

    /// A value could not be converted to the argument's declared type.
    #[error("wrong value for argument '{name}': {message}")]
    WrongValueType {
        /// The argument the value was bound to.
        name: String,
        /// The underlying parse message.
        message: String,
    },

    /// A required argument had no value when its node was finalized.
    #[error("argument '{0}' requires a value")]
    RequiredArgument(String),

    /// Strict mode only: a bare value matched no subcommand.
    #[error("unknown subcommand: '{0}'")]
    UnknownSubcommand(String),
}
