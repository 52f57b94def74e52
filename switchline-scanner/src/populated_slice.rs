/// A string slice that is statically guaranteed to be non-empty
#[derive(Debug)]
#[repr(transparent)]
pub struct PopulatedStr(str);

impl PopulatedStr {
    #[inline]
    pub fn new(s: &str) -> Option<&Self> {
        match s.is_empty() {
            true => None,
            // SAFETY: PopulatedStr is repr transparent over str, and we just
            // confirmed the length is greater than 0
            false => Some(unsafe { &*(s as *const str as *const Self) }),
        }
    }

    /// The whole point: a static guarantee that there is a first character
    #[inline]
    pub fn split_first(&self) -> (char, &str) {
        let mut chars = self.0.chars();

        match chars.next() {
            Some(first) => (first, chars.as_str()),
            // A populated str always has a first char
            None => unreachable!(),
        }
    }

    #[inline(always)]
    pub fn get(&self) -> &str {
        &self.0
    }
}
