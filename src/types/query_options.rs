//! Encoding options of an ASOS request: response format and the tokens IEM
//! substitutes for missing and trace values.

use std::fmt;

/// Layout of the response payload (`format=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Comma separated values with no debug preamble.
    #[default]
    OnlyComma,
    /// Tab delimited values with no debug preamble.
    OnlyTdf,
    /// Comma separated values after `#DEBUG` comment lines.
    Comma,
    /// Tab delimited values after `#DEBUG` comment lines.
    Tdf,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::OnlyComma => "onlycomma",
            Format::OnlyTdf => "onlytdf",
            Format::Comma => "comma",
            Format::Tdf => "tdf",
        }
    }

    /// Field separator of the payload.
    pub fn delimiter(&self) -> u8 {
        match self {
            Format::OnlyComma | Format::Comma => b',',
            Format::OnlyTdf | Format::Tdf => b'\t',
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How IEM represents a value that was not recorded (`missing=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissingValue {
    /// The letter `M`.
    #[default]
    M,
    /// The literal string `null`.
    Null,
    /// An empty cell.
    Empty,
}

impl MissingValue {
    /// Value transmitted as the `missing` request parameter.
    pub fn param(&self) -> &'static str {
        match self {
            MissingValue::M => "M",
            MissingValue::Null => "null",
            MissingValue::Empty => "empty",
        }
    }

    /// Text a cell holds when the value is missing.
    pub fn cell(&self) -> &'static str {
        match self {
            MissingValue::M => "M",
            MissingValue::Null => "null",
            MissingValue::Empty => "",
        }
    }
}

/// How IEM represents a trace (measurable but negligible) amount (`trace=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraceValue {
    /// The letter `T`.
    #[default]
    T,
    /// The literal string `null`.
    Null,
    /// An empty cell.
    Empty,
    /// The fixed number `0.0001`.
    Float,
}

impl TraceValue {
    /// Value transmitted as the `trace` request parameter.
    pub fn param(&self) -> &'static str {
        match self {
            TraceValue::T => "T",
            TraceValue::Null => "null",
            TraceValue::Empty => "empty",
            TraceValue::Float => "0.0001",
        }
    }

    /// Text a cell holds when the value is a trace amount.
    pub fn cell(&self) -> &'static str {
        match self {
            TraceValue::T => "T",
            TraceValue::Null => "null",
            TraceValue::Empty => "",
            TraceValue::Float => "0.0001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens_transmit_keyword_but_match_blank_cells() {
        assert_eq!(MissingValue::Empty.param(), "empty");
        assert_eq!(MissingValue::Empty.cell(), "");
        assert_eq!(TraceValue::Empty.param(), "empty");
        assert_eq!(TraceValue::Empty.cell(), "");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Format::default().to_string(), "onlycomma");
        assert_eq!(MissingValue::default().param(), "M");
        assert_eq!(TraceValue::default().param(), "T");
        assert_eq!(TraceValue::Float.cell(), "0.0001");
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(Format::OnlyComma.delimiter(), b',');
        assert_eq!(Format::Comma.delimiter(), b',');
        assert_eq!(Format::OnlyTdf.delimiter(), b'\t');
        assert_eq!(Format::Tdf.delimiter(), b'\t');
    }
}
