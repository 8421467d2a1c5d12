//! Pixel layout of the tile grid
//!
//! Turns the parameter record into concrete geometry: the size of one basis
//! unit, the canvas, every cell (with brick or staircase offset stepping), the
//! crop strips that square off ragged offset edges, and hole subtraction.
//!
//! Rows are numbered upward from the bottom course, so row `row_count` sits at
//! the top of the canvas. Grout lines surround every cell; a cell located with
//! `inside = false` includes the grout around it, with `inside = true` only the
//! tile face.

use crate::io::configuration::{BASIS_UNIT_PX, GROUT_PX};
use crate::model::parameters::{Orientation, Parameters, StepDirection};
use crate::model::region::{GridCell, Region};
use crate::pattern::row::TileRow;
use crate::spatial::cache::{CacheStats, HoleCache};
use crate::spatial::geometry::{Point, Rect, Size};
use std::rc::Rc;
use tracing::debug;

/// Geometry of one pattern at one magnification
#[derive(Debug)]
pub struct Layout {
    basis_px: f64,
    column_unit: f64,
    row_unit: f64,
    row_count: usize,
    column_count: usize,
    orientation: Orientation,
    offset: usize,
    step_direction: StepDirection,
    step_alternate: bool,
    holes: Vec<Region>,
    canvas_size: Size,
    cell_size: Size,
    crops: Vec<Rect>,
    hole_cache: HoleCache,
}

impl Layout {
    /// Lay out a generated pattern
    ///
    /// `magnification` is a percentage; `basis_factor` scales the short side
    /// of a tile in basis units. `rows` are only read to find the ragged edges
    /// produced by offset stepping; an empty slice stands for the full grid.
    pub fn new(
        basis_factor: f64,
        magnification: f64,
        parameters: &Parameters,
        rows: &[TileRow],
    ) -> Self {
        let basis_px = BASIS_UNIT_PX * magnification / 100.0;
        let unit = basis_px * basis_factor;
        let ratio = f64::from(parameters.aspect_ratio.unsigned_abs());

        // Negative ratios stretch rows, positive ratios stretch columns
        let (column_unit, row_unit) = if parameters.aspect_ratio < 0 {
            (unit, unit * ratio)
        } else {
            (unit * ratio, unit)
        };

        let mut layout = Self {
            basis_px,
            column_unit,
            row_unit,
            row_count: parameters.row_count,
            column_count: parameters.column_count,
            orientation: parameters.orientation,
            offset: parameters.offset,
            step_direction: parameters.step_direction,
            step_alternate: parameters.step_alternate,
            holes: parameters.holes.clone(),
            canvas_size: Size::default(),
            cell_size: Size::default(),
            crops: Vec::new(),
            hole_cache: HoleCache::new(),
        };

        layout.canvas_size = layout.measure(layout.row_count, layout.column_count, false);
        layout.cell_size = layout.measure(1, 1, true);
        layout.crops = layout.edge_crops(rows);

        debug!(
            width = layout.canvas_size.width,
            height = layout.canvas_size.height,
            crops = layout.crops.len(),
            holes = layout.holes.len(),
            "layout computed"
        );

        layout
    }

    /// Pixel size of one basis unit at this magnification
    pub const fn basis_px(&self) -> f64 {
        self.basis_px
    }

    /// Size the drawing surface must allocate
    pub const fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Size of one tile face
    pub const fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Standing crop strips trimmed from every tile
    pub fn crops(&self) -> &[Rect] {
        &self.crops
    }

    /// Hole regions in configuration order
    pub fn holes(&self) -> &[Region] {
        &self.holes
    }

    /// Hit and miss counts of the hole rectangle cache
    pub fn hole_cache_stats(&self) -> CacheStats {
        self.hole_cache.stats()
    }

    /// Pixel size of a block of cells
    ///
    /// Grout lines sit between and around cells; an inside block drops the
    /// outer lines, leaving one fewer line than cells along each axis.
    pub fn measure(&self, rows: usize, columns: usize, inside: bool) -> Size {
        let grout_lines = |cells: usize| {
            let lines = if inside {
                cells.saturating_sub(1)
            } else {
                cells + 1
            };
            lines as f64 * GROUT_PX
        };

        Size::new(
            columns as f64 * self.column_unit + grout_lines(columns),
            rows as f64 * self.row_unit + grout_lines(rows),
        )
    }

    /// Rectangle of a single cell after offset stepping
    ///
    /// Grout-inclusive rectangles pushed before the canvas origin are clipped
    /// to it; tile faces are returned where they were laid.
    pub fn locate_cell(&self, cell: GridCell, inside: bool) -> Rect {
        let column_pitch = self.column_unit + GROUT_PX;
        let row_pitch = self.row_unit + GROUT_PX;

        let x = (cell.column as f64 - 1.0) * column_pitch;
        let y = (self.row_count as f64 - cell.row as f64) * row_pitch;

        let rect = if inside {
            Rect::new(x + GROUT_PX, y + GROUT_PX, self.column_unit, self.row_unit)
        } else {
            Rect::new(x, y, column_pitch + GROUT_PX, row_pitch + GROUT_PX)
        };

        if self.offset <= 1 {
            return rect;
        }

        let shift = self.step_shift(cell);
        let shifted = match self.orientation {
            Orientation::Horizontal => Rect { x: rect.x + shift, ..rect },
            Orientation::Vertical => Rect { y: rect.y + shift, ..rect },
        };

        if inside {
            shifted
        } else {
            clip_to_origin(shifted)
        }
    }

    /// Union of two cells' rectangles
    ///
    /// Covers single tiles (`from == to`), selections and hole ranges alike.
    pub fn locate(&self, from: GridCell, to: GridCell, inside: bool) -> Rect {
        self.locate_cell(from, inside)
            .union(&self.locate_cell(to, inside))
    }

    /// Grout-inclusive rectangles covering every cell of a region
    ///
    /// Offset stepping shifts each course by its own amount, so a stepped
    /// region is located one course at a time: one rectangle per row
    /// (horizontal) or per column (vertical). Unstepped regions are a single
    /// rectangle.
    pub fn locate_region(&self, region: &Region) -> Vec<Rect> {
        let (start, end) = (region.start(), region.end());
        if self.offset <= 1 {
            return vec![self.locate(start, end, false)];
        }

        match self.orientation {
            Orientation::Horizontal => (start.row..=end.row)
                .map(|row| {
                    self.locate(
                        GridCell::new(row, start.column),
                        GridCell::new(row, end.column),
                        false,
                    )
                })
                .collect(),
            Orientation::Vertical => (start.column..=end.column)
                .map(|column| {
                    self.locate(
                        GridCell::new(start.row, column),
                        GridCell::new(end.row, column),
                        false,
                    )
                })
                .collect(),
        }
    }

    /// Memoized rectangles of a hole region
    pub fn hole_rects(&self, region: &Region) -> Rc<[Rect]> {
        self.hole_cache
            .get_or_compute(region, |normalized| self.locate_region(normalized))
    }

    /// Remove crop strips and holes from a tile rectangle
    ///
    /// Returns `None` when nothing remains and the input unchanged when
    /// nothing overlapped.
    pub fn intersect_with_holes(&self, rect: Rect) -> Option<Rect> {
        let mut remaining = rect;
        for crop in &self.crops {
            remaining = remaining.subtract(crop)?;
        }
        for hole in &self.holes {
            for course in &*self.hole_rects(hole) {
                remaining = remaining.subtract(course)?;
            }
        }
        Some(remaining)
    }

    /// Shift along the stepping axis for a cell
    ///
    /// Horizontal courses shift each row along x, vertical courses shift each
    /// column along y. Alternating steps move every odd course by
    /// `pitch / offset`; staircases move course `i` by `i mod offset` steps,
    /// starting `offset - 1` steps back when stepping right so no course
    /// starts past the origin.
    fn step_shift(&self, cell: GridCell) -> f64 {
        let (index, pitch) = match self.orientation {
            Orientation::Horizontal => (cell.row.saturating_sub(1), self.column_unit + GROUT_PX),
            Orientation::Vertical => (cell.column.saturating_sub(1), self.row_unit + GROUT_PX),
        };

        let steps = if self.offset <= 2 || self.step_alternate {
            match (index % 2, self.step_direction) {
                (0, _) => 0.0,
                (_, StepDirection::Right) => 1.0,
                (_, StepDirection::Left) => -1.0,
            }
        } else {
            let ramp = (index % self.offset) as f64;
            match self.step_direction {
                StepDirection::Left => -ramp,
                StepDirection::Right => ramp - (self.offset - 1) as f64,
            }
        };

        steps * pitch / self.offset as f64
    }

    /// Rows as `(row key, first column key, last column key)`
    ///
    /// Without generated rows the full `row_count` x `column_count` grid is
    /// assumed, which is what generation always produces.
    fn courses(&self, rows: &[TileRow]) -> Vec<(usize, usize, usize)> {
        if rows.is_empty() {
            if self.column_count == 0 {
                return Vec::new();
            }
            return (1..=self.row_count)
                .map(|row| (row, 1, self.column_count))
                .collect();
        }

        rows.iter()
            .filter_map(|row| Some((row.key, row.tiles.first()?.key, row.tiles.last()?.key)))
            .collect()
    }

    /// Crop strips squaring off the ragged edges of an offset pattern
    ///
    /// Scans the first and last tile of every row (horizontal) or every tile
    /// of the top and bottom rows (vertical) for the tightest common bound.
    fn edge_crops(&self, rows: &[TileRow]) -> Vec<Rect> {
        let courses = self.courses(rows);
        if self.offset <= 1 || courses.is_empty() {
            return Vec::new();
        }

        let canvas = Rect::from_size(Point::default(), self.canvas_size);
        let locate =
            |row: usize, column: usize| self.locate_cell(GridCell::new(row, column), false);

        let mut crops = Vec::new();
        match self.orientation {
            Orientation::Horizontal => {
                let mut near = canvas.left();
                let mut far = canvas.right();
                for &(row, first, last) in &courses {
                    near = near.max(locate(row, first).left());
                    far = far.min(locate(row, last).right());
                }
                if near > canvas.left() {
                    crops.push(Rect::from_edges(canvas.left(), canvas.top(), near, canvas.bottom()));
                }
                if far < canvas.right() {
                    crops.push(Rect::from_edges(far, canvas.top(), canvas.right(), canvas.bottom()));
                }
            }
            Orientation::Vertical => {
                let mut near = canvas.top();
                let mut far = canvas.bottom();
                if let Some(&(row, first, last)) = courses.iter().max_by_key(|course| course.0) {
                    for column in first..=last {
                        near = near.max(locate(row, column).top());
                    }
                }
                if let Some(&(row, first, last)) = courses.iter().min_by_key(|course| course.0) {
                    for column in first..=last {
                        far = far.min(locate(row, column).bottom());
                    }
                }
                if near > canvas.top() {
                    crops.push(Rect::from_edges(canvas.left(), canvas.top(), canvas.right(), near));
                }
                if far < canvas.bottom() {
                    crops.push(Rect::from_edges(canvas.left(), far, canvas.right(), canvas.bottom()));
                }
            }
        }

        crops
    }
}

/// Clip the part of a rectangle lying before the canvas origin
fn clip_to_origin(rect: Rect) -> Rect {
    if rect.x >= 0.0 && rect.y >= 0.0 {
        return rect;
    }
    Rect::from_edges(
        rect.left().max(0.0),
        rect.top().max(0.0),
        rect.right().max(0.0),
        rect.bottom().max(0.0),
    )
}
