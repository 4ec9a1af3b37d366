//! Error codes for shorthand diagnostics.
//!
//! All codes are in the `E1xx` range, one per way a string position can be
//! malformed.

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected character.
    ///
    /// A character was found after a complete position, e.g. a second `/`
    /// in `3/C/E`.
    E100,

    /// Empty string position.
    ///
    /// Two `.` separators follow each other, the shorthand starts or ends
    /// with `.`, or a label has no fret in front of it.
    E101,

    /// Unrecognized marker.
    ///
    /// The position is neither `x`, `o`, `-` nor a fret number.
    E102,

    /// Label on a muted or open string.
    ///
    /// Only fretted positions are drawn as a dot that can carry a label.
    E103,

    /// Empty label.
    ///
    /// A `/` is not followed by any label text.
    E104,

    /// Fret number out of range.
    ///
    /// The fret number does not fit into 32 bits.
    E105,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected character",
            ErrorCode::E101 => "empty string position",
            ErrorCode::E102 => "unrecognized marker",
            ErrorCode::E103 => "label on unfretted string",
            ErrorCode::E104 => "empty label",
            ErrorCode::E105 => "fret number out of range",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E105.to_string(), "E105");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "empty string position");
        assert_eq!(ErrorCode::E103.description(), "label on unfretted string");
    }
}
