#![no_std]

/*!
Low-level token handling for `switchline`. Classifies raw command-line tokens
as long switches, short switches, or plain words, and tracks a position within
a borrowed argument slice. No type handling or switch lookup happens here.
Usually this is too low level to use directly.
*/

mod populated_slice;

use core::fmt::{self, Debug};

use populated_slice::PopulatedStr;

/**
The syntactic shape of a single command-line token.

For `--auth tok -v input.txt`, the tokens classify as `Long("auth")`,
`Word("tok")`, `Short('v')`, and `Word("input.txt")`. Whether `tok` is the
value of `--auth` or a positional argument is not decided here; that depends
on the switch declared for `--auth`.
*/
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Token<'arg> {
    /// `--name`, with the leading dashes removed. Never empty. There is no
    /// `=` handling, so `--name=value` is the long name `name=value`.
    Long(&'arg str),

    /// `-c`: a single dash followed by exactly one character
    Short(char),

    /// Any other token starting with `-`: a bare `-` or `--`, or grouped
    /// short flags like `-abc`. None of these forms are interpreted, so they
    /// can never match a declared switch.
    Dashed(&'arg str),

    /// A token that doesn't start with `-`
    Word(&'arg str),
}

impl<'arg> Token<'arg> {
    /// Classify a raw token.
    #[must_use]
    pub fn classify(raw: &'arg str) -> Self {
        match raw.strip_prefix('-') {
            None => Token::Word(raw),
            Some(rest) => match rest.strip_prefix('-') {
                Some(long) => match PopulatedStr::new(long) {
                    Some(long) if !long.get().starts_with('-') => Token::Long(long.get()),
                    _ => Token::Dashed(raw),
                },
                None => match PopulatedStr::new(rest).map(PopulatedStr::split_first) {
                    Some((short, "")) => Token::Short(short),
                    _ => Token::Dashed(raw),
                },
            },
        }
    }

    /// True if this token begins with a `-`, which is to say that it *looks*
    /// like a switch even if no switch matches it.
    #[inline]
    #[must_use]
    pub const fn is_dashed(&self) -> bool {
        !matches!(self, Token::Word(_))
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Long(long) => write!(f, "--{long}"),
            Token::Short(short) => write!(f, "-{short}"),
            Token::Dashed(raw) => write!(f, "{raw:?}"),
            Token::Word(raw) => write!(f, "{raw:?}"),
        }
    }
}

/**
A [`Cursor`] walks a borrowed slice of command-line arguments by index.

Scanning begins at index 1, because index 0 is the invocation token (the
program name) and is never interpreted. The cursor never copies arguments;
the ubiquitous `'arg` lifetime refers to the caller's argument storage, which
is usually loaded once at the top of `main`.
*/
#[derive(Clone)]
pub struct Cursor<'arg, S> {
    tokens: &'arg [S],
    index: usize,
}

impl<'arg, S> Cursor<'arg, S>
where
    S: AsRef<str>,
{
    /// Create a new cursor positioned just past the invocation token.
    #[inline]
    #[must_use]
    pub fn new(tokens: &'arg [S]) -> Self {
        Self { tokens, index: 1 }
    }

    /// The index of the token the cursor is currently looking at.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// The raw token at `index`, if there is one.
    #[inline]
    #[must_use]
    pub fn token_at(&self, index: usize) -> Option<&'arg str> {
        self.tokens.get(index).map(AsRef::as_ref)
    }

    /// The raw token at the current position, if there is one.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&'arg str> {
        self.token_at(self.index)
    }

    /// Move the cursor to `index`. Moving past the end is allowed; the cursor
    /// is then finished.
    #[inline]
    pub fn seek(&mut self, index: usize) {
        self.index = index;
    }

    /// All tokens from the current position to the end. Empty if the cursor
    /// is finished.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &'arg [S] {
        self.tokens.get(self.index..).unwrap_or(&[])
    }
}

impl<S> Debug for Cursor<'_, S>
where
    S: AsRef<str>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.tokens.len())
            .field("next", &self.peek())
            .finish()
    }
}
