//! Fixed-position grammar engine
//!
//! A [`Grammar`] is a total length plus an ordered list of [`Segment`]s.
//! Each segment covers a character range and carries the rule it must
//! satisfy and the reason reported when it does not. Checking stops at the
//! first failing segment, in declaration order.

use super::outcome::RejectionReason;
use std::fmt;

/// Character classes used by the identity-code grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `0-9`
    Digit,
    /// `A-Z`
    UpperLetter,
    /// `A-Z` or `0-9`
    UpperAlphanumeric,
}

impl CharClass {
    /// Whether `c` belongs to this class
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::UpperLetter => c.is_ascii_uppercase(),
            Self::UpperAlphanumeric => c.is_ascii_uppercase() || c.is_ascii_digit(),
        }
    }
}

/// What a segment must contain
#[derive(Clone, Copy)]
pub enum Rule {
    /// Every character belongs to the class
    Class(CharClass),
    /// The segment equals the literal exactly
    Literal(&'static str),
    /// The segment text is accepted by the lookup function
    Lookup(fn(&str) -> bool),
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => f.debug_tuple("Class").field(class).finish(),
            Self::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Self::Lookup(_) => f.write_str("Lookup"),
        }
    }
}

/// One checked range of a grammar
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub start: usize,
    pub len: usize,
    pub rule: Rule,
    pub reason: RejectionReason,
}

impl Segment {
    fn check(&self, chars: &[char]) -> Result<(), RejectionReason> {
        let slice = &chars[self.start..self.start + self.len];

        let ok = match self.rule {
            Rule::Class(class) => slice.iter().all(|&c| class.matches(c)),
            Rule::Literal(literal) => slice.iter().copied().eq(literal.chars()),
            Rule::Lookup(accepts) => accepts(&slice.iter().collect::<String>()),
        };

        if ok {
            Ok(())
        } else {
            Err(self.reason)
        }
    }
}

/// Positional grammar for a fixed-length code
#[derive(Debug, Clone)]
pub struct Grammar {
    name: &'static str,
    length: usize,
    segments: Vec<Segment>,
}

impl Grammar {
    /// Create an empty grammar for codes of exactly `length` characters
    pub fn new(name: &'static str, length: usize) -> Self {
        Self {
            name,
            length,
            segments: Vec::new(),
        }
    }

    /// Append a segment
    ///
    /// # Panics
    ///
    /// Panics if the segment reaches past the grammar length.
    pub fn segment(
        mut self,
        start: usize,
        len: usize,
        rule: Rule,
        reason: RejectionReason,
    ) -> Self {
        assert!(
            start + len <= self.length,
            "segment {start}..{} exceeds grammar '{}' of length {}",
            start + len,
            self.name,
            self.length
        );
        self.segments.push(Segment {
            start,
            len,
            rule,
            reason,
        });
        self
    }

    /// Grammar name, used in log fields
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Required input length in characters
    pub fn length(&self) -> usize {
        self.length
    }

    /// Segments in check order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Check `input` against the grammar
    ///
    /// Length is measured in `char`s and is always checked first.
    pub fn check(&self, input: &str) -> Result<(), RejectionReason> {
        let chars: Vec<char> = input.chars().collect();

        if chars.len() != self.length {
            return Err(RejectionReason::WrongLength {
                expected: self.length,
                actual: chars.len(),
            });
        }

        for segment in &self.segments {
            if let Err(reason) = segment.check(&chars) {
                tracing::debug!(
                    grammar = self.name,
                    reason = reason.tag(),
                    start = segment.start,
                    "Code rejected"
                );
                return Err(reason);
            }
        }

        Ok(())
    }
}
