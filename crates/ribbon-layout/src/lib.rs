#![forbid(unsafe_code)]

//! Layout primitives for ribbon panels.
//!
//! - [`GridSpaceAllocator`] - fixed-row, growable-column occupancy grid that
//!   packs controls of heterogeneous row/column span
//! - [`PanelSizingPolicy`] - pixel heights derived from that grid
//! - [`SpanClasses`] - small/medium/large row counts of a panel
//!
//! ```
//! use ribbon_layout::{FillMode, GridSpaceAllocator};
//!
//! let mut grid = GridSpaceAllocator::new(6);
//! let first = grid.request_cells(2, 1, FillMode::ColumnWise).unwrap();
//! let second = grid.request_cells(2, 1, FillMode::ColumnWise).unwrap();
//! assert_eq!((first.row, first.col), (0, 0));
//! assert_eq!((second.row, second.col), (2, 0));
//! ```

pub mod grid;
pub mod sizing;
pub mod span;

pub use grid::{CellOrigin, CellRect, CellRequest, FillMode, GridSpaceAllocator, MAX_COL_SPAN};
pub use ribbon_core::geometry::{Sides, Size};
pub use sizing::{
    ControlHeights, FixedHeight, MIN_FIXED_HEIGHT_RATIO, PanelMetrics, PanelSizingPolicy,
    large_icon_size,
};
pub use span::{RowSpan, SizeClass, SpanClasses};
