//! Grid geometry and cell frame calculations
//!
//! This module handles the logical dot grid for the pattern lock. It maps
//! a widget width, a dot size and a grid dimension to row-major cell
//! frames, and resolves pointer positions back to cell indices.

use crate::domain::core::{Point, Rect, Size};

/// Row-major N×N grid of dot frames
///
/// The grid divides the widget width into N dot frames per row with
/// uniform spacing on both axes. Frames are ordered row-major, so the
/// frame at (col, row) has index `row * N + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    /// Cells per row and per column
    dimension: usize,
    /// Frame for every cell, row-major
    frames: Vec<Rect>,
}

impl CellGrid {
    /// Creates a grid with no frames
    ///
    /// Used as the initial state before the widget has enough
    /// configuration to lay out its dots.
    pub fn empty() -> Self {
        Self {
            dimension: 0,
            frames: Vec::new(),
        }
    }

    /// Computes the frames for an N×N grid inside the given width
    ///
    /// Spacing is `(width - N * icon.w) / (N + 1)`, applied on both axes;
    /// both axes advance by the dot width, the dot height only sets the
    /// frame height. A width too small for the requested grid yields
    /// negative spacing and overlapping frames; that input is accepted
    /// as-is, not rejected.
    ///
    /// # Arguments
    /// * `width` - Widget width in pixels
    /// * `icon` - Size of one dot visual
    /// * `dimension` - Cells per row (must be >= 1 for a usable grid)
    pub fn compute(width: f32, icon: Size, dimension: usize) -> Self {
        let spacing = (width - dimension as f32 * icon.w) / (dimension as f32 + 1.0);
        let step = icon.w + spacing;

        let mut frames = Vec::with_capacity(dimension * dimension);
        for row in 0..dimension {
            for col in 0..dimension {
                let x = spacing + col as f32 * step;
                let y = spacing + row as f32 * step;
                frames.push(Rect::new(x, y, icon.w, icon.h));
            }
        }

        Self { dimension, frames }
    }

    /// Returns the grid dimension (cells per row)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns all cell frames in row-major order
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Returns the number of cells in the grid
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the grid has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the index of the first frame containing the point
    ///
    /// Frames are scanned in row-major order; with non-overlapping frames
    /// at most one can contain the point, so first-match is well-defined.
    /// Returns None when the point lies in the spacing between dots or
    /// outside the grid entirely.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.frames.iter().position(|frame| frame.contains(point))
    }
}
