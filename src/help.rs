/*!
Usage messages. Switch declarations carry a description and a placeholder, so
a [`SwitchSet`] can be rendered into a conventional usage message:

```text
Upload one or more files to the server.

Usage:
  upload [OPTIONS] <host> [files...]

Options:
  -h, --help              Show this help message and exit
  -a, --auth <TOKEN>      Authentication token
```
 */

use std::{
    fmt::Display,
    io::{self, Write as _},
};

use indent_write::io::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::{set::SwitchSet, switch::Switch, value::Value};

/// Width of the column of switch tags; descriptions start after it.
const TAG_COLUMN: usize = 24;

/// Descriptions are wrapped to fit within this many columns overall.
const WIDTH: usize = 80;

/// The parts of a usage message that aren't derived from the switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Usage<'a> {
    /// The name of the program, as shown in the synopsis
    pub command: &'a str,

    /// A paragraph describing what the program does
    pub description: &'a str,

    /// Placeholders for the positional arguments, in order, like `<host>` or
    /// `[files...]`
    pub positionals: &'a [&'a str],
}

/// Write a usage message for `switches` to `out`.
pub fn print_usage(
    out: &mut (impl io::Write + ?Sized),
    usage: &Usage<'_>,
    switches: &SwitchSet,
) -> io::Result<()> {
    if !usage.description.is_empty() {
        writeln!(out, "{}", textwrap::fill(usage.description, WIDTH))?;
    }

    section(out, "Usage", |mut out| {
        write!(out, "{}", usage.command)?;

        if !switches.is_empty() {
            write!(out, " [OPTIONS]")?;
        }

        if !usage.positionals.is_empty() {
            write!(out, " {}", usage.positionals.iter().join_with(' '))?;
        }

        writeln!(out)
    })?;

    if switches.is_empty() {
        return Ok(());
    }

    section(out, "Options", |mut out| {
        switches
            .iter()
            .try_for_each(|switch| print_switch(&mut out, switch))
    })
}

/// Render a usage message for `switches` into a `String`.
#[must_use]
pub fn usage_string(usage: &Usage<'_>, switches: &SwitchSet) -> String {
    let mut buffer = Vec::new();

    // Writing into a Vec can't fail
    let _ = print_usage(&mut buffer, usage, switches);

    String::from_utf8_lossy(&buffer).into_owned()
}

/// The tags for a switch, as shown in the options list: `-s, --name <VALUE>`
pub fn printable_tags(switch: &Switch) -> impl Display + '_ {
    let short = switch.short();
    let name = switch.name();

    lazy_format!(match (switch.placeholder()) {
        None => "-{short}, --{name}",
        Some(placeholder) => "-{short}, --{name} <{placeholder}>",
    })
}

fn printable_default(switch: &Switch) -> Option<impl Display + '_> {
    match switch.default_value()? {
        // A bool default is either redundant or impossible to unset
        Value::Bool(_) => None,
        value => Some(value.printable()),
    }
}

fn print_switch(out: &mut (impl io::Write + ?Sized), switch: &Switch) -> io::Result<()> {
    let description = switch.description();

    let description = match (printable_default(switch), description.is_empty()) {
        (None, _) => description.to_owned(),
        (Some(default), true) => format!("(default: {default})"),
        (Some(default), false) => format!("{description} (default: {default})"),
    };

    describe(out, printable_tags(switch), &description)
}

/// Write a section by writing a newline, then the `header`, then an
/// indented `body`.
fn section<O: io::Write + ?Sized, T>(
    out: &mut O,
    header: &str,
    body: impl FnOnce(IndentWriter<&mut O>) -> io::Result<T>,
) -> io::Result<T> {
    writeln!(out, "\n{header}:")?;
    body(IndentWriter::new("  ", out))
}

/// Describe an item by printing the item, followed by its description. If
/// the item fits in the tag column, the description is printed on the same
/// line; otherwise it starts on the next line, indented to the column.
fn describe(
    out: &mut (impl io::Write + ?Sized),
    item: impl Display,
    description: &str,
) -> io::Result<()> {
    let item = item.to_string();
    let wrapped = textwrap::fill(description, WIDTH - TAG_COLUMN - 2);

    if wrapped.is_empty() {
        return writeln!(out, "{item}");
    }

    let mut lines = wrapped.lines();

    match TAG_COLUMN.checked_sub(item.chars().count()) {
        Some(space) if space >= 2 => {
            let first = lines.next().unwrap_or_default();
            writeln!(out, "{item}{:space$}{first}", "")?;
        }
        _ => writeln!(out, "{item}")?,
    }

    let indent = format!("{:TAG_COLUMN$}", "");
    let mut out = IndentWriter::new(&indent, out);
    lines.try_for_each(|line| writeln!(out, "{line}"))
}
