//! Fluent declaration of an options tree.

use crate::argument::ArgSpec;
use crate::error::DeclarationError;
use crate::flag::Flag;
use crate::options::Options;
use crate::value::ArgType;

/// Builds an [`Options`] tree fluently.
///
/// Declaration errors (duplicate names, empty subcommand names) are
/// remembered and surfaced by [`build`](Builder::build); the first one
/// wins and later declarations are skipped.
///
/// ```
/// use switchyard::{Argument, Builder, Flag};
///
/// let options = Builder::new("test", "test options")
///     .flag(Flag::boolean("simple flag").short('s').long("simple"))
///     .flag(Flag::counting("countable flag").short('c').long("countable"))
///     .argument(Argument::single::<i64>("single int").short('i').long("input").default(10))
///     .subcommand(Builder::new("run", "run the thing"))
///     .build()
///     .unwrap();
/// assert_eq!(options.flags().len(), 2);
/// ```
#[derive(Debug)]
pub struct Builder {
    options: Options,
    error: Option<DeclarationError>,
}

impl Builder {
    /// Starts a builder for a node with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { options: Options::new(name, description), error: None }
    }

    /// Declares a flag.
    pub fn flag(mut self, flag: Flag) -> Self {
        if self.error.is_none() {
            self.error = self.options.add_flag(flag).err();
        }
        self
    }

    /// Declares an argument.
    pub fn argument<T: ArgType>(mut self, spec: ArgSpec<T>) -> Self {
        if self.error.is_none() {
            self.error = self.options.add_argument(spec.into_argument()).err();
        }
        self
    }

    /// Declares a subcommand from a nested builder.
    pub fn subcommand(mut self, subcommand: Builder) -> Self {
        if self.error.is_none() {
            match subcommand.build() {
                Ok(options) => self.error = self.options.add_subcommand(options).err(),
                Err(error) => self.error = Some(error),
            }
        }
        self
    }

    /// Finishes the tree, surfacing the first declaration error if any.
    pub fn build(self) -> Result<Options, DeclarationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Argument;

    #[test]
    fn builds_a_tree() {
        let options = Builder::new("app", "an app")
            .flag(Flag::boolean("verbose").short('v'))
            .argument(Argument::single::<String>("config file").long("config").label("FILE"))
            .subcommand(
                Builder::new("add", "adds things")
                    .argument(Argument::single::<i64>("priority").short('p').default(1)),
            )
            .build()
            .unwrap();

        assert_eq!(options.name(), "app");
        assert!(options.find_flag_short('v').is_some());
        let add = options.find_subcommand("add").unwrap();
        assert!(add.find_argument_short('p').is_some());
        // Defaulted arguments are never required.
        assert!(!add.find_argument_short('p').unwrap().is_required());
    }

    #[test]
    fn duplicate_short_name_fails_the_build() {
        let result = Builder::new("app", "an app")
            .flag(Flag::boolean("one").short('x'))
            .argument(Argument::single::<i64>("two").short('x'))
            .build();
        assert_eq!(result.unwrap_err(), DeclarationError::DuplicateShortName('x'));
    }

    #[test]
    fn nested_declaration_errors_propagate() {
        let result = Builder::new("app", "an app")
            .subcommand(
                Builder::new("sub", "nested")
                    .flag(Flag::boolean("a").long("same"))
                    .flag(Flag::boolean("b").long("same")),
            )
            .build();
        assert_eq!(result.unwrap_err(), DeclarationError::DuplicateLongName("same".to_string()));
    }

    #[test]
    fn first_error_wins() {
        let result = Builder::new("app", "an app")
            .flag(Flag::boolean("nameless"))
            .subcommand(Builder::new("", "empty name"))
            .build();
        assert_eq!(result.unwrap_err(), DeclarationError::UnnamedSwitcher);
    }
}
