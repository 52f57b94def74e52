/*!
A small, typed command-line switch parser.

Programs declare a [`SwitchSet`] of named [`Switch`]es, each matched as
`--name` or by a one-character alias `-s`. A switch is either *typed*,
producing a string, integer, float, or bool [`Value`], or an *action*, which
runs a function when it appears and can request that the program exit early
(the usual way to implement `--help`).

[`parse`] scans the command line left to right. Switches may appear in any
order and may repeat (the last value wins); the first token that isn't a
switch ends scanning, and it and everything after it are positional
arguments.

```
use switchline::{Kind, Parsed, Switch, SwitchSet, parse};

let switches = SwitchSet::new()
    .with(Switch::action("help", || Some(0)).build()?)
    .with(Switch::typed("auth", Kind::String)?)
    .with(Switch::typed("verbose", Kind::Bool)?);

let argv = ["upload", "--auth", "secret", "-v", "localhost", "notes.md"];

match parse(&argv, &switches)? {
    Parsed::Success { positionals, options } => {
        assert_eq!(positionals, ["localhost", "notes.md"]);
        assert_eq!(options.string("auth"), Some("secret"));
        assert!(options.flag("verbose"));
    }
    Parsed::EarlyExit { .. } => unreachable!(),
}
# Ok::<(), Box<dyn std::error::Error>>(())
```

For typical programs, [`LoadedArguments`][arguments::LoadedArguments] loads
the process arguments and takes care of printing errors and exiting.
*/

use core::fmt::{self, Display};

pub mod arguments;
pub mod errors;
pub mod help;
pub mod parse;
pub mod set;
pub mod switch;
pub mod value;

pub use errors::{ConfigError, ParseError};
pub use parse::{Options, Parsed, parse};
pub use set::SwitchSet;
pub use switch::{Step, Switch};
pub use value::{Kind, Value};

/// A key that identifies a switch on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag<'a> {
    /// Matched as `--long`
    Long(&'a str),

    /// Matched as `-s`
    Short(char),
}

impl Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tag::Long(long) => write!(f, "--{long}"),
            Tag::Short(short) => write!(f, "-{short}"),
        }
    }
}
