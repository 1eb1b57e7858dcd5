//! The options registry: one node per command level.

use crate::argument::{Argument, TypedArgument, TypedArgumentList};
use crate::error::DeclarationError;
use crate::flag::Flag;
use crate::value::ArgType;

/// One command level: the root program or a subcommand.
///
/// Holds the declared flags, arguments, and child subcommands in
/// declaration order. The tree is built once, before any parse call, and
/// its shape never changes afterwards; only the value state inside flags
/// and arguments mutates during a parse pass.
///
/// Lookups are linear first-match scans; duplicate names are rejected at
/// declaration time, so first-match is the only match.
#[derive(Debug, Clone)]
pub struct Options {
    name: String,
    description: String,
    flags: Vec<Flag>,
    arguments: Vec<Argument>,
    subcommands: Vec<Options>,
}

impl Options {
    /// Creates an empty node.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            flags: Vec::new(),
            arguments: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// The node's display name (program or subcommand name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Registers a flag.
    ///
    /// Fails if the flag has no name at all, or if its short or long name
    /// is already taken by a flag or argument on this node.
    pub fn add_flag(&mut self, flag: Flag) -> Result<(), DeclarationError> {
        if !flag.is_named() {
            return Err(DeclarationError::UnnamedSwitcher);
        }
        self.check_short(flag.short_name())?;
        self.check_long(flag.long_name())?;
        self.flags.push(flag);
        Ok(())
    }

    /// Registers an argument. Same name rules as [`add_flag`](Self::add_flag).
    pub fn add_argument(&mut self, argument: Argument) -> Result<(), DeclarationError> {
        if !argument.is_named() {
            return Err(DeclarationError::UnnamedSwitcher);
        }
        self.check_short(argument.short_name())?;
        self.check_long(argument.long_name())?;
        self.arguments.push(argument);
        Ok(())
    }

    /// Registers a subcommand. Its name must be non-empty and unique among
    /// this node's subcommands.
    pub fn add_subcommand(&mut self, subcommand: Options) -> Result<(), DeclarationError> {
        if subcommand.name.is_empty() {
            return Err(DeclarationError::EmptySubcommandName);
        }
        if self.subcommands.iter().any(|s| s.name == subcommand.name) {
            return Err(DeclarationError::DuplicateSubcommand(subcommand.name));
        }
        self.subcommands.push(subcommand);
        Ok(())
    }

    /// The declared flags, in declaration order.
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// The declared arguments, in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// The declared subcommands, in declaration order.
    pub fn subcommands(&self) -> &[Options] {
        &self.subcommands
    }

    /// Finds a flag by long name.
    pub fn find_flag(&self, long: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.long_name() == Some(long))
    }

    /// Finds a flag by short name.
    pub fn find_flag_short(&self, short: char) -> Option<&Flag> {
        self.flags.iter().find(|f| f.short_name() == Some(short))
    }

    /// Finds a flag by long name, only if it is a counting flag.
    pub fn find_counting_flag(&self, long: &str) -> Option<&Flag> {
        self.find_flag(long).filter(|f| f.is_counting())
    }

    /// Finds an argument by long name.
    pub fn find_argument(&self, long: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.long_name() == Some(long))
    }

    /// Finds an argument by short name.
    pub fn find_argument_short(&self, short: char) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.short_name() == Some(short))
    }

    /// Finds a subcommand by exact name.
    pub fn find_subcommand(&self, name: &str) -> Option<&Options> {
        self.subcommands.iter().find(|s| s.name == name)
    }

    /// Finds a single-valued argument by long name, viewed at type `T`.
    ///
    /// `None` (not an error) if the argument is missing, declared with a
    /// different value type, or declared as a list.
    pub fn typed_argument<T: ArgType>(&self, long: &str) -> Option<TypedArgument<'_, T>> {
        self.find_argument(long)
            .filter(|a| a.kind() == T::KIND && !a.is_list())
            .map(TypedArgument::new)
    }

    /// Finds a list argument by long name, viewed at type `T`. Same
    /// mismatch rules as [`typed_argument`](Self::typed_argument).
    pub fn typed_argument_list<T: ArgType>(&self, long: &str) -> Option<TypedArgumentList<'_, T>> {
        self.find_argument(long)
            .filter(|a| a.kind() == T::KIND && a.is_list())
            .map(TypedArgumentList::new)
    }

    /// Clears bound state through the whole tree: flags to unset/zero,
    /// arguments to their no-binding state (defaults survive). Declares
    /// nothing away.
    pub fn reset_to_default(&mut self) {
        for flag in &mut self.flags {
            flag.reset();
        }
        for argument in &mut self.arguments {
            argument.reset();
        }
        for subcommand in &mut self.subcommands {
            subcommand.reset_to_default();
        }
    }

    pub(crate) fn flag_mut_by_short(&mut self, short: char) -> Option<&mut Flag> {
        self.flags.iter_mut().find(|f| f.short_name() == Some(short))
    }

    pub(crate) fn flag_mut_by_long(&mut self, long: &str) -> Option<&mut Flag> {
        self.flags.iter_mut().find(|f| f.long_name() == Some(long))
    }

    pub(crate) fn argument_index_by_short(&self, short: char) -> Option<usize> {
        self.arguments.iter().position(|a| a.short_name() == Some(short))
    }

    pub(crate) fn argument_index_by_long(&self, long: &str) -> Option<usize> {
        self.arguments.iter().position(|a| a.long_name() == Some(long))
    }

    pub(crate) fn argument_at(&self, idx: usize) -> &Argument {
        &self.arguments[idx]
    }

    pub(crate) fn argument_at_mut(&mut self, idx: usize) -> &mut Argument {
        &mut self.arguments[idx]
    }

    pub(crate) fn subcommand_index(&self, name: &str) -> Option<usize> {
        self.subcommands.iter().position(|s| s.name == name)
    }

    pub(crate) fn subcommand_at_mut(&mut self, idx: usize) -> &mut Options {
        &mut self.subcommands[idx]
    }

    fn check_short(&self, short: Option<char>) -> Result<(), DeclarationError> {
        let Some(short) = short else { return Ok(()) };
        let taken = self.flags.iter().any(|f| f.short_name() == Some(short))
            || self.arguments.iter().any(|a| a.short_name() == Some(short));
        if taken {
            return Err(DeclarationError::DuplicateShortName(short));
        }
        Ok(())
    }

    fn check_long(&self, long: Option<&str>) -> Result<(), DeclarationError> {
        let Some(long) = long else { return Ok(()) };
        let taken = self.flags.iter().any(|f| f.long_name() == Some(long))
            || self.arguments.iter().any(|a| a.long_name() == Some(long));
        if taken {
            return Err(DeclarationError::DuplicateLongName(long.to_string()));
        }
        Ok(())
    }
}
