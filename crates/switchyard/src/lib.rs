//! Switchyard - declarative command-line switch registry and parsing engine.
//!
//! Switchyard parses a process's raw argument vector against a declared
//! tree of flags, typed arguments, and nested subcommands. It supports:
//!
//! - Boolean and counting flags (`-v`, `-vvv`), bundled short groups
//!   (`-abc`)
//! - Typed single and list arguments with defaults, `--name value` and
//!   `--name=value` binding
//! - Nested subcommand trees with per-node required-argument validation
//! - Fail-fast typed errors for unknown switchers, missing values, type
//!   mismatches, and unsatisfied required arguments
//!
//! # Quick Start
//!
//! ```rust
//! use switchyard::{Argument, Argv, Builder, Flag, Parser};
//!
//! let mut options = Builder::new("greet", "greets people")
//!     .flag(Flag::boolean("verbose output").short('v').long("verbose"))
//!     .argument(
//!         Argument::single::<String>("name to greet")
//!             .short('n')
//!             .long("name")
//!             .label("NAME")
//!             .default("world".to_string()),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let argv = Argv::new(["greet", "-v", "--name=crab"]);
//! let result = Parser::new(&mut options).process(&argv);
//! assert!(result.is_ok());
//!
//! assert!(options.find_flag("verbose").unwrap().is_set());
//! let name = options.typed_argument::<String>("name").unwrap().get().unwrap();
//! assert_eq!(name, "crab");
//! ```
//!
//! # Parsing rules
//!
//! One raw entry lexes as either a bare value (no leading `-`), a short
//! group (`-abc` is three short switchers), or a long switcher (`--name`,
//! with `--name=value` binding the value immediately). A single dash never
//! carries `=` semantics: `-name=value` is a short group of every
//! character. Bare values first try to match a subcommand of the current
//! node; unmatched ones accumulate on
//! [`ProcessResult::unparsed`] (or fail fatally in
//! [strict mode](Parser::strict_subcommands)).
//!
//! Bound state lives in the [`Options`] tree and is read back after the
//! parse; [`Options::reset_to_default`] returns the whole tree to its
//! declared state so it can be parsed against again.

mod argument;
mod argv;
mod builder;
mod error;
mod flag;
mod options;
mod parser;
mod printer;
mod tokenizer;
mod value;

pub use argument::{ArgSpec, Argument, Cardinality, TypedArgument, TypedArgumentList};
pub use argv::Argv;
pub use builder::Builder;
pub use error::{DeclarationError, ProcessError};
pub use flag::{Flag, FlagKind};
pub use options::Options;
pub use parser::{parse_argv, Parser, ProcessResult};
pub use printer::Printer;
pub use tokenizer::{Token, Tokenizer};
pub use value::{ArgType, Value, ValueKind};
