/*!
Error types for [`switchline`][crate]. Declaring a switch can fail with a
[`ConfigError`], which is always a programmer error in the calling program;
parsing the command line can fail with a [`ParseError`], which is always a
user error and should usually be reported alongside a usage message.
 */

use crate::value::Kind;

/// A switch was declared incorrectly. These errors are detected when the
/// switch is built, before any command-line arguments are looked at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Switches must have a name
    #[error("switch name must not be empty")]
    EmptyName,

    /// The name was given with its leading dashes, which are added
    /// automatically when matching tokens
    #[error("switch name {name:?} must not start with '-'")]
    DashedName { name: &'static str },

    /// The short alias can't be matched as `-c` on the command line
    #[error("switch --{name} has an unusable short alias {short:?}")]
    InvalidShort { name: &'static str, short: char },

    /// The switch was declared with neither a kind nor a default value, so
    /// there's no way to know how to handle it
    #[error("switch --{name} must have a kind or a default value")]
    Untyped { name: &'static str },

    /// The switch's declared kind disagrees with the kind of its default
    #[error("switch --{name} is declared as {kind} but its default is a {default}")]
    KindMismatch {
        name: &'static str,
        kind: Kind,
        default: Kind,
    },
}

/// The command line didn't match the declared switches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A switch that takes a value appeared at the end of the command line,
    /// or was directly followed by something that looks like another switch
    #[error("missing value for switch --{switch}")]
    MissingValue { switch: &'static str },

    /// The value given to a numeric switch couldn't be parsed
    #[error("invalid value {raw:?} for switch --{switch}: {reason}")]
    InvalidValue {
        switch: &'static str,
        raw: String,
        reason: String,
    },

    /// A token started with `-` but didn't match any declared switch
    #[error("unknown switch: {token}")]
    UnknownSwitch { token: String },
}

impl ParseError {
    /// The name of the switch that caused this error, if it was caused by a
    /// declared switch rather than an unrecognized token.
    #[must_use]
    pub fn switch(&self) -> Option<&'static str> {
        match *self {
            Self::MissingValue { switch } | Self::InvalidValue { switch, .. } => Some(switch),
            Self::UnknownSwitch { .. } => None,
        }
    }
}
