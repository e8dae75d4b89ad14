//! `Corner`: one slot of the flattened face-corner array.
//!
//! A polygon soup arrives as a single `i32` array in which every face is a
//! run of vertex ids terminated by `-1`. Each slot becomes a [`Corner`]:
//! either a vertex corner (one half-edge of one face) or the separator that
//! closes a face. The separator remembers how many vertex corners precede it,
//! so stepping past the last corner of a face wraps back to its first corner
//! in O(1) without a side table of face sizes.

use std::fmt;

/// Sentinel returned by every total query when an argument or result is invalid.
pub const NO_ID: i32 = -1;

/// A slot of the corner array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Corner {
    /// A vertex reference belonging to exactly one face.
    Vertex { vertex: u32, face: u32 },
    /// The end of `face`, which has `corner_count` vertex corners.
    ///
    /// The first corner of the face sits `corner_count` slots before the
    /// separator.
    Separator { face: u32, corner_count: u32 },
}

impl Corner {
    #[inline]
    pub const fn is_vertex(self) -> bool {
        matches!(self, Corner::Vertex { .. })
    }

    #[inline]
    pub const fn is_separator(self) -> bool {
        matches!(self, Corner::Separator { .. })
    }

    /// Vertex id for a vertex corner, `None` for a separator.
    #[inline]
    pub const fn vertex(self) -> Option<u32> {
        match self {
            Corner::Vertex { vertex, .. } => Some(vertex),
            Corner::Separator { .. } => None,
        }
    }

    /// The face this slot belongs to (vertex corner) or terminates (separator).
    #[inline]
    pub const fn face(self) -> u32 {
        match self {
            Corner::Vertex { face, .. } | Corner::Separator { face, .. } => face,
        }
    }

    /// The value this slot held in the raw corner array.
    #[inline]
    pub const fn raw(self) -> i32 {
        match self {
            Corner::Vertex { vertex, .. } => vertex as i32,
            Corner::Separator { .. } => NO_ID,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::Vertex { vertex, face } => write!(f, "v{vertex}@f{face}"),
            Corner::Separator { face, corner_count } => write!(f, "|f{face}:{corner_count}|"),
        }
    }
}

/// Map a signed id onto `0..len`, or `None` when it falls outside.
#[inline]
pub(crate) fn checked_index(id: i32, len: usize) -> Option<usize> {
    usize::try_from(id).ok().filter(|&i| i < len)
}

/// Narrow an in-range index back to the signed id space.
///
/// Every array in this crate is bounded by the corner count, which
/// construction caps at `i32::MAX`.
#[inline]
pub(crate) fn to_id(index: usize) -> i32 {
    index as i32
}
