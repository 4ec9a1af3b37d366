//! The chord semantic model.
//!
//! A [`Fingering`] holds one optional [`Marker`] per string, ordered from the
//! lowest-pitched string (leftmost in a diagram) to the highest.

use std::{fmt, num::NonZeroU32};

/// What is drawn for a single string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The string is not played; drawn as a cross.
    Muted,
    /// The string is played open; drawn as a circle.
    Open,
    /// A finger placement on `position`, the 1-based row counted from the top
    /// of the diagram.
    Fretted {
        position: NonZeroU32,
        label: Option<String>,
    },
}

impl Marker {
    /// Creates a fretted marker. Position `0` yields [`Marker::Open`].
    pub fn fretted(position: u32) -> Self {
        match NonZeroU32::new(position) {
            Some(position) => Self::Fretted {
                position,
                label: None,
            },
            None => Self::Open,
        }
    }

    /// Attaches a label to a fretted marker. Other markers are returned
    /// unchanged since they carry no label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        match self {
            Self::Fretted { position, .. } => Self::Fretted {
                position,
                label: Some(label.into()),
            },
            other => other,
        }
    }

    /// Fret row of a fretted marker.
    pub fn position(&self) -> Option<u32> {
        match self {
            Self::Fretted { position, .. } => Some(position.get()),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Fretted { label, .. } => label.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    /// Formats the marker in shorthand notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Muted => f.write_str("x"),
            Self::Open => f.write_str("0"),
            Self::Fretted {
                position,
                label: Some(label),
            } => write!(f, "{position}/{label}"),
            Self::Fretted {
                position,
                label: None,
            } => write!(f, "{position}"),
        }
    }
}

/// The per-string marker sequence of a chord.
///
/// `None` entries are strings without any marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fingering(Vec<Option<Marker>>);

impl Fingering {
    pub fn new(markers: Vec<Option<Marker>>) -> Self {
        Self(markers)
    }

    pub fn markers(&self) -> &[Option<Marker>] {
        &self.0
    }

    /// Number of strings covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Marker>> {
        self.0.iter().map(Option::as_ref)
    }
}

impl FromIterator<Option<Marker>> for Fingering {
    fn from_iter<I: IntoIterator<Item = Option<Marker>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Marker> for Fingering {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

impl fmt::Display for Fingering {
    /// Formats the fingering in shorthand notation. Strings without a marker
    /// are written as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, marker) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match marker {
                Some(marker) => write!(f, "{marker}")?,
                None => f.write_str("-")?,
            }
        }
        Ok(())
    }
}
