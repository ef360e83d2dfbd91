//! Fit comparison between a piece of furniture and a room.
//!
//! The check is axis-aligned: length is compared with length, width with
//! width, height with height. Rotating the item is never considered, and a
//! dimension equal to the room's counts as fitting.

use serde::{Deserialize, Serialize};

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Verdict message when every dimension fits.
pub const MSG_FITS: &str = "Furniture FITS in the room";

/// Verdict message when at least one dimension overflows.
pub const MSG_DOES_NOT_FIT: &str = "Furniture DOES NOT FIT in the room";

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// One of the three measured axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Length,
    Width,
    Height,
}

impl Axis {
    /// All axes in comparison order.
    pub const ALL: [Axis; 3] = [Axis::Length, Axis::Width, Axis::Height];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Length => "length",
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length, width and height of a room or an item, in consistent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Value along a single axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length,
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Axes on which `self` is strictly larger than `container`.
    pub fn exceeding_axes(&self, container: &Dimensions) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.along(axis) > container.along(axis))
            .collect()
    }
}

/// Returns `true` when every furniture dimension is less than or equal to the
/// matching room dimension.
pub fn fits(furniture: &Dimensions, room: &Dimensions) -> bool {
    furniture.length <= room.length
        && furniture.width <= room.width
        && furniture.height <= room.height
}

/// Outcome of a fit check, ready to be returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitVerdict {
    pub fits: bool,
    pub message: &'static str,
    /// Axes that overflow; empty when the item fits.
    pub exceeding: Vec<Axis>,
}

impl FitVerdict {
    pub fn evaluate(furniture: &Dimensions, room: &Dimensions) -> Self {
        let fits = fits(furniture, room);
        Self {
            fits,
            message: if fits { MSG_FITS } else { MSG_DOES_NOT_FIT },
            exceeding: furniture.exceeding_axes(room),
        }
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
