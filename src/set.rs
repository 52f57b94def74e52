/*!
Ordered collections of switch declarations, and the tag lookup table built
from them for each parse.
 */

use std::collections::HashMap;

use crate::{Tag, switch::Switch};

/// The ordered set of switches a program accepts.
#[derive(Debug, Default)]
pub struct SwitchSet {
    switches: Vec<Switch>,
}

impl SwitchSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a switch to the end of this set, builder style.
    #[inline]
    #[must_use]
    pub fn with(mut self, switch: Switch) -> Self {
        self.push(switch);
        self
    }

    #[inline]
    pub fn push(&mut self, switch: Switch) {
        self.switches.push(switch);
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Switch> {
        self.switches.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Find a switch by its long name. If more than one switch has this
    /// name, the last one wins, as it would on the command line.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Switch> {
        self.switches.iter().rev().find(|switch| switch.name() == name)
    }

    /**
    Build the lookup table from `--name` and `-s` tags to switches.

    When two switches share a tag (most commonly, two names starting with
    the same letter and neither given an explicit short alias), the switch
    registered last wins. This is a frequent source of surprise, so each
    overridden tag is reported as a warning.
    */
    #[must_use]
    pub fn lookup(&self) -> Lookup<'_> {
        let mut lookup = Lookup {
            long: HashMap::with_capacity(self.switches.len()),
            short: HashMap::with_capacity(self.switches.len()),
        };

        for switch in &self.switches {
            for tag in switch.tags() {
                let previous = match tag {
                    Tag::Long(long) => lookup.long.insert(long, switch),
                    Tag::Short(short) => lookup.short.insert(short, switch),
                };

                if let Some(previous) = previous {
                    tracing::warn!(
                        %tag,
                        previous = previous.name(),
                        replacement = switch.name(),
                        "switch tag declared more than once; the last declaration wins",
                    );
                }
            }
        }

        lookup
    }
}

impl FromIterator<Switch> for SwitchSet {
    fn from_iter<I: IntoIterator<Item = Switch>>(iter: I) -> Self {
        Self {
            switches: iter.into_iter().collect(),
        }
    }
}

impl Extend<Switch> for SwitchSet {
    fn extend<I: IntoIterator<Item = Switch>>(&mut self, iter: I) {
        self.switches.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SwitchSet {
    type Item = &'a Switch;
    type IntoIter = core::slice::Iter<'a, Switch>;

    fn into_iter(self) -> Self::IntoIter {
        self.switches.iter()
    }
}

/// Table mapping each tag to the switch that owns it. Only lives as long as a
/// single parse.
#[derive(Debug)]
pub struct Lookup<'a> {
    long: HashMap<&'a str, &'a Switch>,
    short: HashMap<char, &'a Switch>,
}

impl<'a> Lookup<'a> {
    #[inline]
    #[must_use]
    pub fn get(&self, tag: Tag<'_>) -> Option<&'a Switch> {
        let switch = match tag {
            Tag::Long(long) => self.long.get(long),
            Tag::Short(short) => self.short.get(&short),
        };

        switch.copied()
    }
}
