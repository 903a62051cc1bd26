use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::SetupError;

/// Matcher for a single fleet description line.
static RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)
        (?P<kind>\S+)\s+
        (?P<x1>[+-]?[0-9]+)\s+(?P<y1>[+-]?[0-9]+)\s+
        (?P<x2>[+-]?[0-9]+)\s+(?P<y2>[+-]?[0-9]+)$",
    )
    .unwrap()
});

/// One line of a fleet description: `<kind> <x1> <y1> <x2> <y2>`, in input coordinates.
///
/// The kind is kept as written so that an unknown kind is reported by the composition
/// check rather than as a malformed line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipRecord {
    kind: String,
    start: (i32, i32),
    end: (i32, i32),

    /// The line this record was read from, used in diagnostics.
    text: String,
}

impl ShipRecord {
    /// Build a record from its parts. The diagnostic text is the canonical formatting
    /// of the record.
    pub fn new(kind: impl Into<String>, start: (i32, i32), end: (i32, i32)) -> Self {
        let kind = kind.into();
        let text = format!("{} {} {} {} {}", kind, start.0, start.1, end.0, end.1);
        Self {
            kind,
            start,
            end,
            text,
        }
    }

    /// The kind token as written.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// First endpoint `(x, y)`.
    pub fn start(&self) -> (i32, i32) {
        self.start
    }

    /// Second endpoint `(x, y)`.
    pub fn end(&self) -> (i32, i32) {
        self.end
    }

    /// All four coordinate components, in the order they were written.
    pub fn coords(&self) -> [i32; 4] {
        [self.start.0, self.start.1, self.end.0, self.end.1]
    }

    /// The text of the record, with trailing whitespace removed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FromStr for ShipRecord {
    type Err = SetupError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let text = line.trim_end();
        let malformed = || SetupError::MalformedRecord(text.to_owned());
        let captures = RECORD.captures(text.trim_start()).ok_or_else(malformed)?;
        let coord = |name: &str| -> Result<i32, SetupError> {
            captures[name].parse().map_err(|_| malformed())
        };
        Ok(Self {
            kind: captures["kind"].to_owned(),
            start: (coord("x1")?, coord("y1")?),
            end: (coord("x2")?, coord("y2")?),
            text: text.to_owned(),
        })
    }
}

impl fmt::Display for ShipRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.text)
    }
}

/// Parse every line of a fleet description, stopping at the first malformed line.
pub fn parse_records<I>(lines: I) -> Result<Vec<ShipRecord>, SetupError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().parse())
        .collect()
}
