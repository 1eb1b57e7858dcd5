//! Value-bearing options.
//!
//! An [`Argument`] is declared through a typed [`ArgSpec`] (so defaults and
//! declared kinds can't disagree at compile time) and read back through the
//! typed views [`TypedArgument`] / [`TypedArgumentList`], which are safe
//! downcasts: a kind or cardinality mismatch yields `None`, never a panic.

use std::marker::PhantomData;

use crate::value::{ArgType, Value, ValueKind};

/// How many values an argument holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// At most one bound value; repeated binding overwrites (last write
    /// wins).
    Single,
    /// Every bound value is kept, in encounter order.
    List,
}

/// A value-bearing option, referenced by a short and/or long name.
///
/// Created from an [`ArgSpec`] at registration time. Value state is bound
/// by the parser during a parse pass and read back with
/// [`value`](Argument::value) / [`values`](Argument::values) or through the
/// typed registry lookups on [`Options`](crate::Options).
#[derive(Debug, Clone)]
pub struct Argument {
    short: Option<char>,
    long: Option<String>,
    description: String,
    label: String,
    kind: ValueKind,
    cardinality: Cardinality,
    required: bool,
    default: Option<Value>,
    values: Vec<Value>,
}

/// Typed declaration of an [`Argument`].
///
/// ```
/// use switchyard::Argument;
///
/// let input = Argument::single::<i64>("input size").short('i').long("input").label("INT").default(10);
/// let files = Argument::list::<String>("files to read").short('f').label("FILE").required();
/// ```
#[derive(Debug, Clone)]
pub struct ArgSpec<T: ArgType> {
    short: Option<char>,
    long: Option<String>,
    description: String,
    label: String,
    cardinality: Cardinality,
    required: bool,
    default: Option<T>,
    _kind: PhantomData<T>,
}

impl Argument {
    /// Declares a single-valued argument of type `T`.
    pub fn single<T: ArgType>(description: impl Into<String>) -> ArgSpec<T> {
        ArgSpec::new(Cardinality::Single, description)
    }

    /// Declares a list argument of type `T`.
    pub fn list<T: ArgType>(description: impl Into<String>) -> ArgSpec<T> {
        ArgSpec::new(Cardinality::List, description)
    }

    /// The short name, if declared.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The long name, if declared.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The declaration description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The type-display label (e.g. `INT`, `FILE`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The declared value kind.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The declared cardinality.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// `true` if this argument is a list.
    pub fn is_list(&self) -> bool {
        self.cardinality == Cardinality::List
    }

    /// `true` if a parse pass must bind a value for this argument.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// `true` if a default was declared.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The declared default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// `true` if a value is bound or a default exists.
    pub fn has_value(&self) -> bool {
        !self.values.is_empty() || self.default.is_some()
    }

    /// The current single value: the most recent binding, else the default.
    /// `None` on kind mismatch or when nothing is bound and no default
    /// exists.
    pub fn value<T: ArgType>(&self) -> Option<T> {
        self.values
            .last()
            .or(self.default.as_ref())
            .and_then(T::from_value)
    }

    /// The current list of values: every binding in encounter order, else
    /// the default as a one-element list, else empty. `None` on kind
    /// mismatch.
    pub fn values<T: ArgType>(&self) -> Option<Vec<T>> {
        if T::KIND != self.kind {
            return None;
        }
        if self.values.is_empty() {
            return Some(self.default.as_ref().and_then(T::from_value).into_iter().collect());
        }
        self.values.iter().map(T::from_value).collect()
    }

    /// Parses `text` as the declared kind and binds it. Single overwrites,
    /// List appends. The error is the underlying parse message.
    pub(crate) fn bind(&mut self, text: &str) -> Result<(), String> {
        let value = self.kind.parse(text)?;
        if self.cardinality == Cardinality::Single {
            self.values.clear();
        }
        self.values.push(value);
        Ok(())
    }

    /// Clears bound values; the default survives.
    pub(crate) fn reset(&mut self) {
        self.values.clear();
    }

    /// `--long` if a long name exists, else `-s`.
    pub(crate) fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }

    pub(crate) fn is_named(&self) -> bool {
        self.short.is_some() || self.long.is_some()
    }
}

impl<T: ArgType> ArgSpec<T> {
    fn new(cardinality: Cardinality, description: impl Into<String>) -> Self {
        Self {
            short: None,
            long: None,
            description: description.into(),
            label: String::new(),
            cardinality,
            required: false,
            default: None,
            _kind: PhantomData,
        }
    }

    /// Sets the short name.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the long name.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Sets the type-display label shown in help output.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Marks the argument required. Ignored if a default is declared.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declares a default value. A defaulted argument is never required.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    pub(crate) fn into_argument(self) -> Argument {
        let required = self.required && self.default.is_none();
        Argument {
            short: self.short,
            long: self.long,
            description: self.description,
            label: self.label,
            kind: T::KIND,
            cardinality: self.cardinality,
            required,
            default: self.default.map(ArgType::into_value),
            values: Vec::new(),
        }
    }
}

/// A single-valued [`Argument`] viewed at its declared type.
#[derive(Debug, Clone, Copy)]
pub struct TypedArgument<'a, T: ArgType> {
    argument: &'a Argument,
    _kind: PhantomData<T>,
}

impl<'a, T: ArgType> TypedArgument<'a, T> {
    pub(crate) fn new(argument: &'a Argument) -> Self {
        Self { argument, _kind: PhantomData }
    }

    /// The bound value, else the default, else `None`.
    pub fn get(&self) -> Option<T> {
        self.argument.value::<T>()
    }

    /// `true` if a value is bound or a default exists.
    pub fn has_value(&self) -> bool {
        self.argument.has_value()
    }

    /// `true` if a default was declared.
    pub fn has_default(&self) -> bool {
        self.argument.has_default()
    }

    /// `true` if a parse pass must bind this argument.
    pub fn is_required(&self) -> bool {
        self.argument.is_required()
    }

    /// The untyped argument.
    pub fn argument(&self) -> &'a Argument {
        self.argument
    }
}

/// A list [`Argument`] viewed at its declared type.
#[derive(Debug, Clone, Copy)]
pub struct TypedArgumentList<'a, T: ArgType> {
    argument: &'a Argument,
    _kind: PhantomData<T>,
}

impl<'a, T: ArgType> TypedArgumentList<'a, T> {
    pub(crate) fn new(argument: &'a Argument) -> Self {
        Self { argument, _kind: PhantomData }
    }

    /// Every bound value in encounter order, else the default as a
    /// one-element list, else empty.
    pub fn get(&self) -> Vec<T> {
        self.argument.values::<T>().unwrap_or_default()
    }

    /// `true` if a value is bound or a default exists.
    pub fn has_value(&self) -> bool {
        self.argument.has_value()
    }

    /// `true` if a default was declared.
    pub fn has_default(&self) -> bool {
        self.argument.has_default()
    }

    /// `true` if a parse pass must bind this argument.
    pub fn is_required(&self) -> bool {
        self.argument.is_required()
    }

    /// The untyped argument.
    pub fn argument(&self) -> &'a Argument {
        self.argument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_binding_overwrites() {
        let mut arg = Argument::single::<i64>("input").short('i').into_argument();
        arg.bind("20").unwrap();
        arg.bind("40").unwrap();
        assert_eq!(arg.value::<i64>(), Some(40));
    }

    #[test]
    fn list_binding_accumulates_in_order() {
        let mut arg = Argument::list::<i64>("inputs").short('l').into_argument();
        arg.bind("30").unwrap();
        arg.bind("50").unwrap();
        assert_eq!(arg.values::<i64>(), Some(vec![30, 50]));
    }

    #[test]
    fn default_reported_until_bound() {
        let mut arg = Argument::single::<i64>("input").short('i').default(10).into_argument();
        assert!(arg.has_value());
        assert_eq!(arg.value::<i64>(), Some(10));

        arg.bind("20").unwrap();
        assert_eq!(arg.value::<i64>(), Some(20));

        arg.reset();
        assert!(arg.has_value());
        assert_eq!(arg.value::<i64>(), Some(10));
    }

    #[test]
    fn list_default_is_a_one_element_list() {
        let mut arg = Argument::list::<i64>("inputs").short('l').default(100).into_argument();
        assert_eq!(arg.values::<i64>(), Some(vec![100]));

        arg.bind("30").unwrap();
        assert_eq!(arg.values::<i64>(), Some(vec![30]));

        arg.reset();
        assert_eq!(arg.values::<i64>(), Some(vec![100]));
    }

    #[test]
    fn no_default_no_binding_no_value() {
        let arg = Argument::single::<i64>("input").short('i').into_argument();
        assert!(!arg.has_value());
        assert_eq!(arg.value::<i64>(), None);

        let list = Argument::list::<i64>("inputs").short('l').into_argument();
        assert_eq!(list.values::<i64>(), Some(vec![]));
    }

    #[test]
    fn bind_rejects_wrong_type() {
        let mut arg = Argument::single::<i64>("input").short('i').into_argument();
        assert!(arg.bind("twenty").is_err());
        assert!(!arg.has_value());
    }

    #[test]
    fn typed_read_rejects_other_kinds() {
        let mut arg = Argument::single::<i64>("input").short('i').into_argument();
        arg.bind("20").unwrap();
        assert_eq!(arg.value::<i16>(), None);
        assert_eq!(arg.values::<i16>(), None);
    }

    #[test]
    fn default_disables_required() {
        let arg = Argument::single::<i64>("input").short('i').required().default(10).into_argument();
        assert!(!arg.is_required());
        let arg = Argument::single::<i64>("input").short('i').required().into_argument();
        assert!(arg.is_required());
    }
}
