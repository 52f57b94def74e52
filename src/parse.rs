/*!
The switch scanner. [`parse`] walks the command line left to right, routing
each recognized switch to its declaration and stopping at the first token that
isn't a switch. That token, and everything after it, are positional arguments.
 */

use switchline_scanner::{Cursor, Token};

use crate::{
    Tag,
    errors::ParseError,
    set::SwitchSet,
    switch::Step,
    value::Value,
};

/// The outcome of a successful [`parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<'arg, S> {
    /// Every switch was handled. `positionals` borrows the tail of the
    /// original argument list, starting at the first non-switch token.
    Success {
        positionals: &'arg [S],
        options: Options,
    },

    /// An action switch requested that the program exit with `code`. The
    /// rest of the command line was not examined.
    EarlyExit { code: i32 },
}

impl<'arg, S> Parsed<'arg, S> {
    /// The exit code, if an action switch requested an early exit.
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match *self {
            Parsed::EarlyExit { code } => Some(code),
            Parsed::Success { .. } => None,
        }
    }

    /// The positional arguments and switch values, unless an action switch
    /// requested an early exit.
    #[inline]
    #[must_use]
    pub fn success(self) -> Option<(&'arg [S], Options)> {
        match self {
            Parsed::Success {
                positionals,
                options,
            } => Some((positionals, options)),
            Parsed::EarlyExit { .. } => None,
        }
    }
}

/**
The value of every declared switch after parsing, keyed by switch name, in
declaration order.

Switches that didn't appear on the command line have their default value;
switches with no default (including every action switch) are absent. A switch
that appeared more than once has the value from its last appearance.
*/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    entries: Vec<(&'static str, Option<Value>)>,
}

impl Options {
    /// Seed options from each switch's default. Later declarations of a
    /// repeated name replace earlier ones.
    fn seeded(switches: &SwitchSet) -> Self {
        let mut options = Self {
            entries: Vec::with_capacity(switches.len()),
        };

        switches
            .iter()
            .for_each(|switch| options.insert(switch.name(), switch.default_value().cloned()));

        options
    }

    fn insert(&mut self, name: &'static str, value: Option<Value>) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// The value of the switch called `name`, or `None` if there is no such
    /// switch or it has no value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// True if a switch called `name` was declared, whether or not it has a
    /// value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    /// True if the bool switch called `name` is set. Absent or non-bool
    /// switches are never set.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&Value>)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_ref()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/**
Parse `argv` against a set of switches.

`argv` is the complete argument list, including the invocation token at index
0, which is always skipped. Scanning proceeds left to right:

- A token matching a switch's `--name` or `-s` is handled by that switch,
  which may consume the following token as its value.
- A token starting with `-` that matches no switch is an error.
- Any other token ends scanning. It and every token after it, including any
  that look like switches, are positional arguments.

If an action switch requests an exit, parsing stops immediately and
[`Parsed::EarlyExit`] is returned, even if the rest of the command line is
invalid.
*/
pub fn parse<'arg, S>(argv: &'arg [S], switches: &SwitchSet) -> Result<Parsed<'arg, S>, ParseError>
where
    S: AsRef<str>,
{
    let lookup = switches.lookup();
    let mut options = Options::seeded(switches);
    let mut cursor = Cursor::new(argv);

    while let Some(raw) = cursor.peek() {
        let token = Token::classify(raw);

        let switch = match token {
            Token::Long(long) => lookup.get(Tag::Long(long)),
            Token::Short(short) => lookup.get(Tag::Short(short)),
            Token::Dashed(_) | Token::Word(_) => None,
        };

        let Some(switch) = switch else {
            if token.is_dashed() {
                return Err(ParseError::UnknownSwitch {
                    token: raw.to_owned(),
                });
            }

            break;
        };

        tracing::trace!(index = cursor.index(), ?token, switch = switch.name(), "handling switch");

        match switch.handle(argv, cursor.index() + 1)? {
            Step::Exit(code) => {
                tracing::debug!(switch = switch.name(), code, "switch requested early exit");
                return Ok(Parsed::EarlyExit { code });
            }
            Step::Ran { next } => cursor.seek(next),
            Step::Value { value, next } => {
                options.insert(switch.name(), Some(value));
                cursor.seek(next);
            }
        }
    }

    let positionals = cursor.rest();
    tracing::trace!(count = positionals.len(), "finished scanning switches");

    Ok(Parsed::Success {
        positionals,
        options,
    })
}
