#![forbid(unsafe_code)]

//! Grid space allocation for panel contents.
//!
//! A [`GridSpaceAllocator`] owns a boolean occupancy matrix with a fixed
//! number of rows and a column count that only ever grows. Callers ask for a
//! `row_span x col_span` rectangle and receive the origin of the cells that
//! were reserved for them.
//!
//! # Fill modes
//!
//! - [`FillMode::ColumnWise`]: best fit, first found. Candidate origins are
//!   scanned column-major (smallest column first, then smallest row) and the
//!   first fully free rectangle wins.
//! - [`FillMode::RowWise`]: single-row packing. The first column whose row-0
//!   suffix is entirely free becomes the insertion point, and the whole
//!   suffix of row 0 is reserved, not just `col_span` columns. This keeps
//!   the rest of the row for sequential row-wise insertions. A request taller
//!   than one row needs (and reserves) the same suffix in every spanned row.
//!
//! When nothing fits, the grid grows by appending free columns. A fully free
//! trailing column is reused as the first column of the new rectangle.
//!
//! # Invariants
//!
//! 1. `rows` never changes after construction.
//! 2. `cols` is monotonically non-decreasing.
//! 3. No cell is reserved twice; reserved rectangles are pairwise disjoint.
//! 4. Validation happens before any mutation: a failed request leaves the
//!    grid untouched.

use std::fmt;

use ribbon_core::{Result, RibbonError};

/// Widest column span a single request may ask for.
pub const MAX_COL_SPAN: usize = 1024;

/// How to search for free space in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Precise best-fit rectangle packing.
    #[default]
    ColumnWise,
    /// Sequential packing along row 0.
    RowWise,
}

impl FillMode {
    /// Parse a mode name (`"ColumnWise"`/`"RowWise"`, case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "columnwise" | "column_wise" | "column" => Some(Self::ColumnWise),
            "rowwise" | "row_wise" | "row" => Some(Self::RowWise),
            _ => None,
        }
    }
}

/// A request for a rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRequest {
    /// Rows to span (`1..=rows`).
    pub row_span: usize,
    /// Columns to span (`>= 1`).
    pub col_span: usize,
    /// Search strategy.
    pub mode: FillMode,
}

impl CellRequest {
    /// A column-wise request.
    pub const fn new(row_span: usize, col_span: usize) -> Self {
        Self {
            row_span,
            col_span,
            mode: FillMode::ColumnWise,
        }
    }

    /// Set the fill mode.
    #[must_use]
    pub const fn mode(mut self, mode: FillMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Top-left cell of a reserved rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellOrigin {
    pub row: usize,
    pub col: usize,
}

impl CellOrigin {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellOrigin {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellRect {
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl CellRect {
    pub const fn new(row: usize, col: usize, row_span: usize, col_span: usize) -> Self {
        Self {
            row,
            col,
            row_span,
            col_span,
        }
    }

    /// Rectangle anchored at `origin`.
    pub const fn at(origin: CellOrigin, row_span: usize, col_span: usize) -> Self {
        Self::new(origin.row, origin.col, row_span, col_span)
    }

    /// One past the last row.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.row + self.row_span
    }

    /// One past the last column.
    #[inline]
    pub const fn right(&self) -> usize {
        self.col + self.col_span
    }

    /// Whether the two rectangles share at least one cell.
    pub const fn overlaps(&self, other: &CellRect) -> bool {
        self.row < other.bottom()
            && other.row < self.bottom()
            && self.col < other.right()
            && other.col < self.right()
    }
}

/// Occupancy matrix with fixed rows and growable columns.
///
/// Storage is column-major so appending columns is a plain `extend`.
#[derive(Clone, PartialEq, Eq)]
pub struct GridSpaceAllocator {
    rows: usize,
    cols: usize,
    occupied: Vec<bool>,
}

impl GridSpaceAllocator {
    /// Create an allocator with `rows` rows and a single free column.
    ///
    /// A zero row count is bumped to one so every grid can hold a 1x1 cell.
    pub fn new(rows: usize) -> Self {
        let rows = rows.max(1);
        ribbon_core::debug!(rows, "grid allocator created");
        Self {
            rows,
            cols: 1,
            occupied: vec![false; rows],
        }
    }

    /// Fixed row count.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Current column count.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        col * self.rows + row
    }

    /// Whether a cell is reserved. Cells outside the grid count as free.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.occupied[self.index(row, col)]
    }

    /// Number of reserved cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&cell| cell).count()
    }

    /// Whether every cell of `rect` lies inside the grid and is free.
    pub fn is_free(&self, rect: CellRect) -> bool {
        if rect.bottom() > self.rows || rect.right() > self.cols {
            return false;
        }
        (rect.col..rect.right())
            .all(|col| (rect.row..rect.bottom()).all(|row| !self.occupied[self.index(row, col)]))
    }

    /// Whether every row of `col` is free.
    pub fn column_is_free(&self, col: usize) -> bool {
        col < self.cols && (0..self.rows).all(|row| !self.occupied[self.index(row, col)])
    }

    /// Reserve a rectangle of `request.row_span x request.col_span` cells.
    ///
    /// Returns the origin of the reserved rectangle. The grid may grow in
    /// columns as a side effect.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidSpan`] when either span is zero, the row span
    /// exceeds the row count, or the column span exceeds [`MAX_COL_SPAN`].
    /// Nothing is mutated in that case.
    pub fn request(&mut self, request: CellRequest) -> Result<CellOrigin> {
        self.request_cells(request.row_span, request.col_span, request.mode)
    }

    /// Reserve cells; see [`request`](Self::request).
    pub fn request_cells(
        &mut self,
        row_span: usize,
        col_span: usize,
        mode: FillMode,
    ) -> Result<CellOrigin> {
        if row_span == 0 || row_span > self.rows || !(1..=MAX_COL_SPAN).contains(&col_span) {
            return Err(RibbonError::InvalidSpan {
                row_span,
                col_span,
                rows: self.rows,
            });
        }

        let span = ribbon_core::debug_span!(
            "request_cells",
            row_span,
            col_span,
            mode = ?mode,
            cols = self.cols
        );
        let _guard = span.enter();

        let found = match mode {
            FillMode::ColumnWise => {
                let origin = self.find_column_wise(row_span, col_span);
                if let Some(origin) = origin {
                    self.occupy(CellRect::at(origin, row_span, col_span));
                }
                origin
            }
            FillMode::RowWise => self.take_row_suffix(row_span, col_span),
        };
        let origin = match found {
            Some(origin) => origin,
            None => self.grow_for(row_span, col_span),
        };

        ribbon_core::trace!(row = origin.row, col = origin.col, "cells reserved");
        Ok(origin)
    }

    /// First free origin in column-major order, if any.
    pub fn find_column_wise(&self, row_span: usize, col_span: usize) -> Option<CellOrigin> {
        if row_span == 0 || col_span == 0 || row_span > self.rows || col_span > self.cols {
            return None;
        }
        (0..=self.cols - col_span).find_map(|col| {
            (0..=self.rows - row_span)
                .find(|&row| self.is_free(CellRect::new(row, col, row_span, col_span)))
                .map(|row| CellOrigin::new(row, col))
        })
    }

    fn take_row_suffix(&mut self, row_span: usize, col_span: usize) -> Option<CellOrigin> {
        let col = (0..self.cols).find(|&col| {
            self.is_free(CellRect::new(0, col, row_span, self.cols - col))
        })?;
        let width = self.cols - col;
        if width < col_span {
            self.append_columns(col_span - width);
        }
        // Reserve the whole remaining suffix, not just `col_span` columns.
        self.occupy(CellRect::new(0, col, row_span, self.cols - col));
        Some(CellOrigin::new(0, col))
    }

    fn grow_for(&mut self, row_span: usize, col_span: usize) -> CellOrigin {
        let mut start = self.cols;
        let mut needed = col_span;
        if self.column_is_free(self.cols - 1) {
            start -= 1;
            needed -= 1;
        }
        self.append_columns(needed);
        self.occupy(CellRect::new(0, start, row_span, col_span));
        CellOrigin::new(0, start)
    }

    fn append_columns(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        // `count` never exceeds MAX_COL_SPAN, so this cannot overflow.
        self.occupied.resize(self.occupied.len() + count * self.rows, false);
        self.cols += count;
        ribbon_core::debug!(added = count, cols = self.cols, "grid grew");
    }

    fn occupy(&mut self, rect: CellRect) {
        debug_assert!(self.is_free(rect), "double reservation of {rect:?}");
        for col in rect.col..rect.right() {
            for row in rect.row..rect.bottom() {
                let idx = self.index(row, col);
                self.occupied[idx] = true;
            }
        }
    }
}

impl fmt::Debug for GridSpaceAllocator {
    /// Rows of `#` (reserved) and `.` (free).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GridSpaceAllocator {}x{}", self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_str(if self.is_occupied(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cw(grid: &mut GridSpaceAllocator, row_span: usize, col_span: usize) -> (usize, usize) {
        let o = grid
            .request_cells(row_span, col_span, FillMode::ColumnWise)
            .unwrap();
        (o.row, o.col)
    }

    fn rw(grid: &mut GridSpaceAllocator, row_span: usize, col_span: usize) -> (usize, usize) {
        let o = grid
            .request_cells(row_span, col_span, FillMode::RowWise)
            .unwrap();
        (o.row, o.col)
    }

    #[test]
    fn fresh_grid_has_one_free_column() {
        let grid = GridSpaceAllocator::new(6);
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 1);
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.column_is_free(0));
    }

    #[test]
    fn zero_rows_bumped_to_one() {
        assert_eq!(GridSpaceAllocator::new(0).rows(), 1);
    }

    #[test]
    fn stacked_small_requests_fill_a_column() {
        let mut grid = GridSpaceAllocator::new(6);
        assert_eq!(cw(&mut grid, 2, 1), (0, 0));
        assert_eq!(cw(&mut grid, 2, 1), (2, 0));
        assert_eq!(cw(&mut grid, 2, 1), (4, 0));
        assert_eq!(grid.cols(), 1);
        assert_eq!(cw(&mut grid, 2, 1), (0, 1));
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn full_height_requests_append_one_column_each() {
        let mut grid = GridSpaceAllocator::new(6);
        assert_eq!(cw(&mut grid, 6, 1), (0, 0));
        assert_eq!(cw(&mut grid, 6, 1), (0, 1));
        assert_eq!(cw(&mut grid, 6, 1), (0, 2));
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn wide_request_reuses_free_trailing_column() {
        let mut grid = GridSpaceAllocator::new(3);
        assert_eq!(cw(&mut grid, 1, 3), (0, 0));
        assert_eq!(grid.cols(), 3);
        // Rows 1..3 of columns 0..3 are still free.
        assert_eq!(cw(&mut grid, 2, 2), (1, 0));
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn wide_request_without_free_trailing_column_appends_all() {
        let mut grid = GridSpaceAllocator::new(2);
        cw(&mut grid, 2, 1);
        assert_eq!(cw(&mut grid, 2, 2), (0, 1));
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn column_wise_prefers_smallest_column() {
        let mut grid = GridSpaceAllocator::new(4);
        cw(&mut grid, 4, 1);
        cw(&mut grid, 1, 1); // (0, 1)
        // A 1x1 hole exists at (1, 1): column 1 wins over anything further right.
        assert_eq!(cw(&mut grid, 1, 1), (1, 1));
    }

    #[test]
    fn row_wise_reserves_entire_suffix() {
        let mut grid = GridSpaceAllocator::new(3);
        assert_eq!(rw(&mut grid, 1, 2), (0, 0));
        assert_eq!(grid.cols(), 2);
        assert!(grid.is_occupied(0, 0));
        assert!(grid.is_occupied(0, 1));
        assert!(!grid.is_occupied(1, 0));

        // Row 0 is full: fall back to column growth.
        assert_eq!(rw(&mut grid, 1, 1), (0, 2));
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn tall_row_wise_request_reserves_suffix_in_every_spanned_row() {
        let mut grid = GridSpaceAllocator::new(3);
        assert_eq!(rw(&mut grid, 2, 1), (0, 0));
        assert!(grid.is_occupied(0, 0));
        assert!(grid.is_occupied(1, 0));
        assert!(!grid.is_occupied(2, 0));
        assert_eq!(cw(&mut grid, 1, 1), (2, 0));
        assert_eq!(grid.cols(), 1);
    }

    #[test]
    fn tall_row_wise_request_needs_free_suffix_in_lower_rows() {
        let mut grid = GridSpaceAllocator::new(3);
        cw(&mut grid, 1, 1);
        grid.append_columns(1);
        // Column 1 is free in row 0 but taken in rows 1..3.
        assert_eq!(cw(&mut grid, 2, 2), (1, 0));

        let mut single = grid.clone();
        assert_eq!(rw(&mut single, 1, 1), (0, 1));

        assert_eq!(rw(&mut grid, 2, 1), (0, 2));
        assert_eq!(grid.cols(), 3);
        assert!(!grid.is_occupied(0, 1));
    }

    #[test]
    fn row_wise_inserts_after_column_wise_content() {
        let mut grid = GridSpaceAllocator::new(3);
        cw(&mut grid, 3, 1);
        // Last column is fully occupied, so growth appends.
        assert_eq!(rw(&mut grid, 1, 1), (0, 1));
        assert_eq!(grid.cols(), 2);
        // Rows below the row-wise entry stay available for column-wise requests.
        assert_eq!(cw(&mut grid, 2, 1), (1, 1));
    }

    #[test]
    fn row_wise_uses_free_suffix_without_growth() {
        let mut grid = GridSpaceAllocator::new(2);
        cw(&mut grid, 2, 3);
        grid.append_columns(2);
        assert_eq!(rw(&mut grid, 1, 1), (0, 3));
        // Whole suffix (columns 3 and 4) reserved.
        assert!(grid.is_occupied(0, 4));
        assert_eq!(grid.cols(), 5);
    }

    #[test]
    fn invalid_span_leaves_grid_untouched() {
        let mut grid = GridSpaceAllocator::new(3);
        cw(&mut grid, 1, 1);
        let before = grid.clone();
        for (r, c) in [(4, 1), (0, 1), (1, 0), (1, MAX_COL_SPAN + 1), (1, usize::MAX)] {
            let err = grid.request_cells(r, c, FillMode::ColumnWise).unwrap_err();
            assert!(matches!(err, RibbonError::InvalidSpan { rows: 3, .. }));
        }
        let err = grid.request(CellRequest::new(4, 1).mode(FillMode::RowWise));
        assert!(err.is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn rect_overlap() {
        let a = CellRect::new(0, 0, 2, 2);
        assert!(a.overlaps(&CellRect::new(1, 1, 2, 2)));
        assert!(!a.overlaps(&CellRect::new(2, 0, 1, 1)));
        assert!(!a.overlaps(&CellRect::new(0, 2, 1, 1)));
    }

    #[test]
    fn fill_mode_parse() {
        assert_eq!(FillMode::parse("RowWise"), Some(FillMode::RowWise));
        assert_eq!(FillMode::parse("columnwise"), Some(FillMode::ColumnWise));
        assert_eq!(FillMode::parse("diagonal"), None);
    }

    #[test]
    fn debug_renders_occupancy() {
        let mut grid = GridSpaceAllocator::new(2);
        cw(&mut grid, 1, 1);
        let text = format!("{grid:?}");
        assert!(text.contains("2x1"));
        assert!(text.contains("#\n.\n"));
    }
}
