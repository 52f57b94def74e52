/*!
Switch declarations. A [`Switch`] is a named command-line option, matched as
`--name` or by its one-character alias `-s`. Switches are either typed (they
produce a [`Value`], possibly from the following token) or actions (they run a
function, which can request that the program exit early).

Switches are read-only templates: handling a switch never modifies it.
Instead, [`Switch::handle`] returns a [`Step`] describing what happened, and
the parser records the resulting value.
 */

use core::fmt;

use switchline_scanner::Token;

use crate::{
    Tag,
    errors::{ConfigError, ParseError},
    value::{Kind, Value},
};

/// The function run by an action switch. Returning `Some(code)` requests that
/// parsing stop and the program exit with `code`.
pub type Action = Box<dyn Fn() -> Option<i32>>;

enum Behavior {
    Typed {
        kind: Kind,
        default: Option<Value>,
        placeholder: Option<&'static str>,
    },
    Action(Action),
}

/// A single declared command-line switch.
pub struct Switch {
    name: &'static str,
    short: char,
    description: &'static str,
    behavior: Behavior,
}

/**
The result of handling a switch at some position in the command line.

Indexes always refer to positions in the full argument list, including the
invocation token at index 0.
*/
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A typed switch produced a value. Scanning should resume at `next`,
    /// which is past the value token if one was consumed.
    Value { value: Value, next: usize },

    /// An action switch ran and didn't request an exit. Scanning should
    /// resume at `next`; the switch's recorded value is unchanged.
    Ran { next: usize },

    /// An action switch requested that the program exit with this code
    Exit(i32),
}

impl Switch {
    /// Start declaring a typed switch. At least one of
    /// [`kind`][SwitchBuilder::kind] or [`default`][SwitchBuilder::default]
    /// must be given before it can be built.
    #[inline]
    #[must_use]
    pub fn builder(name: &'static str) -> SwitchBuilder {
        SwitchBuilder {
            identity: Identity::new(name),
            kind: None,
            default: None,
            placeholder: None,
        }
    }

    /// Start declaring an action switch, like `--help`. Action switches have
    /// no kind and never take a value; when they appear on the command line,
    /// `action` is run.
    #[inline]
    #[must_use]
    pub fn action(
        name: &'static str,
        action: impl Fn() -> Option<i32> + 'static,
    ) -> ActionBuilder {
        ActionBuilder {
            identity: Identity::new(name),
            action: Box::new(action),
        }
    }

    /// Shorthand for a typed switch with no default and a short alias taken
    /// from the first character of its name.
    pub fn typed(name: &'static str, kind: Kind) -> Result<Self, ConfigError> {
        Self::builder(name).kind(kind).build()
    }

    /// Shorthand for a switch whose kind is taken from its default value.
    pub fn with_default(name: &'static str, default: impl Into<Value>) -> Result<Self, ConfigError> {
        Self::builder(name).default(default).build()
    }

    /// The long name, matched as `--name`
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The short alias, matched as `-s`
    #[inline]
    #[must_use]
    pub fn short(&self) -> char {
        self.short
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The kind of value this switch produces. Action switches have none.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        match self.behavior {
            Behavior::Typed { kind, .. } => Some(kind),
            Behavior::Action(_) => None,
        }
    }

    /// The default value, used for this switch if it doesn't appear on the
    /// command line.
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        match self.behavior {
            Behavior::Typed { ref default, .. } => default.as_ref(),
            Behavior::Action(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.behavior, Behavior::Action(_))
    }

    /// The placeholder shown for this switch's value in usage messages, if it
    /// takes a value.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.behavior {
            Behavior::Typed {
                kind, placeholder, ..
            } if kind.takes_value() => Some(placeholder.unwrap_or(kind.placeholder())),
            Behavior::Typed { .. } | Behavior::Action(_) => None,
        }
    }

    /// The lookup keys for this switch: its long name and its short alias.
    #[inline]
    #[must_use]
    pub fn tags(&self) -> [Tag<'static>; 2] {
        [Tag::Long(self.name), Tag::Short(self.short)]
    }

    /**
    Handle this switch, having just seen it on the command line. `index` is
    the position of the token immediately *after* the switch itself, which
    may be past the end of `tokens`.

    - Action switches run their action, and never consume a token.
    - Bool switches are presence flags: they produce `true` and never consume
      a token, even if the next token isn't a switch.
    - Other switches consume the token at `index` as their value. It's an
      error if there is no such token, or if it starts with `-`.
    */
    pub fn handle<S>(&self, tokens: &[S], index: usize) -> Result<Step, ParseError>
    where
        S: AsRef<str>,
    {
        let kind = match self.behavior {
            Behavior::Action(ref action) => {
                return Ok(match action() {
                    Some(code) => Step::Exit(code),
                    None => Step::Ran { next: index },
                });
            }
            Behavior::Typed { kind, .. } => kind,
        };

        let token = tokens.get(index).map(AsRef::as_ref);

        match (kind, token) {
            (Kind::Bool, _) => Ok(Step::Value {
                value: Value::Bool(true),
                next: index,
            }),
            (_, None) => Err(self.missing_value()),
            (_, Some(token)) if Token::classify(token).is_dashed() => Err(self.missing_value()),
            (kind, Some(token)) => match kind.coerce(token) {
                Ok(value) => Ok(Step::Value {
                    value,
                    next: index + 1,
                }),
                Err(reason) => Err(ParseError::InvalidValue {
                    switch: self.name,
                    raw: token.to_owned(),
                    reason,
                }),
            },
        }
    }

    #[inline]
    fn missing_value(&self) -> ParseError {
        ParseError::MissingValue { switch: self.name }
    }
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Switch");

        debug.field("name", &self.name).field("short", &self.short);

        match self.behavior {
            Behavior::Typed {
                kind, ref default, ..
            } => debug.field("kind", &kind).field("default", default),
            Behavior::Action(_) => debug.field("action", &format_args!("..")),
        };

        debug.finish_non_exhaustive()
    }
}

/// The parts of a declaration shared by typed and action switches
struct Identity {
    name: &'static str,
    short: Option<char>,
    description: &'static str,
}

impl Identity {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            short: None,
            description: "",
        }
    }

    /// Check the name and resolve the short alias, which defaults to the
    /// first character of the name.
    fn validate(&self) -> Result<char, ConfigError> {
        let name = self.name;

        let first = match name.chars().next() {
            None => return Err(ConfigError::EmptyName),
            Some('-') => return Err(ConfigError::DashedName { name }),
            Some(first) => first,
        };

        match self.short.unwrap_or(first) {
            short if short == '-' || short.is_whitespace() => {
                Err(ConfigError::InvalidShort { name, short })
            }
            short => Ok(short),
        }
    }
}

/// Builder for a typed [`Switch`]. Created with [`Switch::builder`].
#[must_use]
pub struct SwitchBuilder {
    identity: Identity,
    kind: Option<Kind>,
    default: Option<Value>,
    placeholder: Option<&'static str>,
}

impl SwitchBuilder {
    /// Use `short` as the alias instead of the first character of the name.
    pub fn short(mut self, short: char) -> Self {
        self.identity.short = Some(short);
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the one-line description shown in usage messages
    pub fn describe(mut self, description: &'static str) -> Self {
        self.identity.description = description;
        self
    }

    /// Set the name shown for this switch's value in usage messages
    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn build(self) -> Result<Switch, ConfigError> {
        let short = self.identity.validate()?;
        let name = self.identity.name;

        let kind = match (self.kind, &self.default) {
            (None, None) => return Err(ConfigError::Untyped { name }),
            (None, Some(default)) => default.kind(),
            (Some(kind), Some(default)) if default.kind() != kind => {
                return Err(ConfigError::KindMismatch {
                    name,
                    kind,
                    default: default.kind(),
                });
            }
            (Some(kind), _) => kind,
        };

        Ok(Switch {
            name,
            short,
            description: self.identity.description,
            behavior: Behavior::Typed {
                kind,
                default: self.default,
                placeholder: self.placeholder,
            },
        })
    }
}

/// Builder for an action [`Switch`]. Created with [`Switch::action`].
#[must_use]
pub struct ActionBuilder {
    identity: Identity,
    action: Action,
}

impl ActionBuilder {
    /// Use `short` as the alias instead of the first character of the name.
    pub fn short(mut self, short: char) -> Self {
        self.identity.short = Some(short);
        self
    }

    /// Set the one-line description shown in usage messages
    pub fn describe(mut self, description: &'static str) -> Self {
        self.identity.description = description;
        self
    }

    pub fn build(self) -> Result<Switch, ConfigError> {
        let short = self.identity.validate()?;

        Ok(Switch {
            name: self.identity.name,
            short,
            description: self.identity.description,
            behavior: Behavior::Action(self.action),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    fn switch(name: &'static str, kind: Kind) -> Switch {
        Switch::typed(name, kind).unwrap()
    }

    #[test]
    fn short_defaults_to_first_char() {
        assert_eq!(switch("auth", Kind::String).short(), 'a');
        assert_eq!(
            Switch::builder("auth")
                .short('t')
                .kind(Kind::String)
                .build()
                .unwrap()
                .short(),
            't'
        );
    }

    #[test]
    fn untyped_switch_is_rejected() {
        assert_eq!(
            Switch::builder("auth").build().unwrap_err(),
            ConfigError::Untyped { name: "auth" }
        );
    }

    #[test]
    fn bad_names_are_rejected() {
        assert_eq!(
            Switch::typed("", Kind::Bool).unwrap_err(),
            ConfigError::EmptyName
        );
        assert_eq!(
            Switch::typed("--auth", Kind::String).unwrap_err(),
            ConfigError::DashedName { name: "--auth" }
        );
        assert_eq!(
            Switch::builder("auth")
                .short('-')
                .kind(Kind::String)
                .build()
                .unwrap_err(),
            ConfigError::InvalidShort {
                name: "auth",
                short: '-'
            }
        );
    }

    #[test]
    fn default_kind_must_agree() {
        assert_eq!(
            Switch::builder("count")
                .kind(Kind::Int)
                .default("seven")
                .build()
                .unwrap_err(),
            ConfigError::KindMismatch {
                name: "count",
                kind: Kind::Int,
                default: Kind::String,
            }
        );
    }

    #[test]
    fn kind_is_inferred_from_default() {
        let port = Switch::with_default("port", 4567i64).unwrap();

        assert_eq!(port.kind(), Some(Kind::Int));
        assert_eq!(port.default_value(), Some(&Value::Int(4567)));
        assert_eq!(
            port.handle(&["prog", "--port", "80"], 2),
            Ok(Step::Value {
                value: Value::Int(80),
                next: 3
            })
        );
    }

    #[test]
    fn string_consumes_one_token() {
        let auth = switch("auth", Kind::String);

        assert_eq!(
            auth.handle(&["prog", "--auth", "tok", "file"], 2),
            Ok(Step::Value {
                value: Value::String("tok".to_owned()),
                next: 3
            })
        );
    }

    #[test]
    fn value_switch_at_end_is_missing_value() {
        let auth = switch("auth", Kind::String);

        assert_eq!(
            auth.handle(&["prog", "--auth"], 2),
            Err(ParseError::MissingValue { switch: "auth" })
        );
    }

    #[test]
    fn value_switch_before_dash_is_missing_value() {
        let count = switch("count", Kind::Int);

        // Negative numbers look like switches
        assert_eq!(
            count.handle(&["prog", "--count", "-5"], 2),
            Err(ParseError::MissingValue { switch: "count" })
        );
    }

    #[test]
    fn invalid_numbers() {
        let count = switch("count", Kind::Int);
        let ratio = switch("ratio", Kind::Float);

        assert!(matches!(
            count.handle(&["prog", "--count", "abc"], 2),
            Err(ParseError::InvalidValue { switch: "count", ref raw, .. }) if raw == "abc"
        ));
        assert!(matches!(
            ratio.handle(&["prog", "--ratio", "x1"], 2),
            Err(ParseError::InvalidValue { switch: "ratio", .. })
        ));
        assert_eq!(
            ratio.handle(&["prog", "--ratio", "0.25"], 2),
            Ok(Step::Value {
                value: Value::Float(0.25),
                next: 3
            })
        );
    }

    #[test]
    fn bool_never_consumes() {
        let verbose = switch("verbose", Kind::Bool);
        let expected = |next| -> Result<Step, ParseError> {
            Ok(Step::Value {
                value: Value::Bool(true),
                next,
            })
        };

        assert_eq!(verbose.handle(&["prog", "-v"], 2), expected(2));
        assert_eq!(verbose.handle(&["prog", "-v", "-x"], 2), expected(2));
        assert_eq!(verbose.handle(&["prog", "-v", "file"], 2), expected(2));
    }

    #[test]
    fn action_runs_and_reports_exit() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);

        let help = Switch::action("help", move || {
            counter.set(counter.get() + 1);
            Some(0)
        })
        .build()
        .unwrap();

        assert!(help.is_action());
        assert_eq!(help.kind(), None);
        assert_eq!(help.handle(&["prog", "--help", "x"], 2), Ok(Step::Exit(0)));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn action_without_exit_consumes_nothing() {
        let noop = Switch::action("noop", || None).build().unwrap();

        assert_eq!(noop.handle(&["prog", "--noop", "x"], 2), Ok(Step::Ran { next: 2 }));
        assert_eq!(noop.default_value(), None);
        assert_eq!(noop.placeholder(), None);
    }

    #[test]
    fn placeholders() {
        assert_eq!(switch("count", Kind::Int).placeholder(), Some("INT"));
        assert_eq!(switch("verbose", Kind::Bool).placeholder(), None);
        assert_eq!(
            Switch::builder("auth")
                .kind(Kind::String)
                .placeholder("TOKEN")
                .build()
                .unwrap()
                .placeholder(),
            Some("TOKEN")
        );
        assert_eq!(
            Switch::builder("verbose")
                .kind(Kind::Bool)
                .placeholder("IGNORED")
                .build()
                .unwrap()
                .placeholder(),
            None
        );
    }
}
