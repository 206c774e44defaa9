use std::fmt;

use bevy::prelude::*;

use crate::config::{
    CAMERA_HEIGHT_FACTOR, CELL_SIZE, DEFAULT_GRID_DEPTH, DEFAULT_GRID_WIDTH,
    GROUND_EXTENT_FACTOR, GRID_OVERLAY_Y, MAX_GRID_DIMENSION,
};

/// Integer grid coordinates. World position is `(x, z) * cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCell {
    pub x: i32,
    pub z: i32,
}

impl GridCell {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Which grid dimension a size error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    Width,
    Depth,
}

impl GridAxis {
    pub fn label(self) -> &'static str {
        match self {
            GridAxis::Width => "width",
            GridAxis::Depth => "depth",
        }
    }
}

/// Why a requested grid size was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    NotANumber { axis: GridAxis, input: String },
    NotPositive { axis: GridAxis, value: i64 },
    OutOfRange { axis: GridAxis, value: i64 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSizeError::NotANumber { axis, input } => {
                write!(f, "grid {} '{}' is not a number", axis.label(), input)
            }
            GridSizeError::NotPositive { axis, value } => {
                write!(f, "grid {} must be positive (got {})", axis.label(), value)
            }
            GridSizeError::OutOfRange { axis, value } => {
                write!(
                    f,
                    "grid {} {} is too large (max {})",
                    axis.label(),
                    value,
                    MAX_GRID_DIMENSION
                )
            }
        }
    }
}

/// Validate a single dimension.
pub fn validate_dimension(axis: GridAxis, value: i64) -> Result<u32, GridSizeError> {
    if value <= 0 {
        return Err(GridSizeError::NotPositive { axis, value });
    }
    match u32::try_from(value) {
        Ok(dim) if dim <= MAX_GRID_DIMENSION => Ok(dim),
        _ => Err(GridSizeError::OutOfRange { axis, value }),
    }
}

/// Parse an integer typed into a text field without range checks. Surrounding
/// whitespace is ignored; anything else that isn't an integer is rejected.
pub fn parse_integer(axis: GridAxis, input: &str) -> Result<i64, GridSizeError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GridSizeError::NotANumber {
            axis,
            input: trimmed.to_string(),
        })
}

/// Parse and validate a dimension.
pub fn parse_dimension(axis: GridAxis, input: &str) -> Result<u32, GridSizeError> {
    validate_dimension(axis, parse_integer(axis, input)?)
}

/// Snap a world coordinate to the nearest multiple of `cell_size`, in cell
/// units. Halves round toward positive infinity, so -2.5 becomes -2.
pub fn snap_to_cell(value: f32, cell_size: f32) -> i32 {
    (value / cell_size + 0.5).floor() as i32
}

/// A single overlay line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLine {
    pub start: Vec3,
    pub end: Vec3,
}

/// Grid dimensions, cell size, and overlay visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub width: u32,
    pub depth: u32,
    pub cell_size: f32,
    pub visible: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            depth: DEFAULT_GRID_DEPTH,
            cell_size: CELL_SIZE,
            visible: true,
        }
    }
}

impl GridConfig {
    /// A config with the given size, validated. Cell size and visibility keep
    /// their defaults.
    pub fn with_size(width: i64, depth: i64) -> Result<Self, GridSizeError> {
        Self::default().resized(width, depth)
    }

    /// Copy of this config with new dimensions. Both dimensions are checked
    /// before anything is applied.
    pub fn resized(&self, width: i64, depth: i64) -> Result<Self, GridSizeError> {
        let width = validate_dimension(GridAxis::Width, width)?;
        let depth = validate_dimension(GridAxis::Depth, depth)?;
        Ok(Self {
            width,
            depth,
            ..self.clone()
        })
    }

    pub fn snap(&self, world_x: f32, world_z: f32) -> GridCell {
        GridCell::new(
            snap_to_cell(world_x, self.cell_size),
            snap_to_cell(world_z, self.cell_size),
        )
    }

    /// Ground-level world position of a cell as (x, z).
    pub fn cell_to_world(&self, cell: GridCell) -> Vec2 {
        Vec2::new(
            cell.x as f32 * self.cell_size,
            cell.z as f32 * self.cell_size,
        )
    }

    /// Full ground plane size as (x extent, z extent).
    pub fn ground_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.cell_size * GROUND_EXTENT_FACTOR,
            self.depth as f32 * self.cell_size * GROUND_EXTENT_FACTOR,
        )
    }

    pub fn ground_half_extents(&self) -> Vec2 {
        self.ground_size() / 2.0
    }

    /// Where the camera sits by default: `(w, w * 0.7, d)`, looking at the origin.
    pub fn camera_home(&self) -> Vec3 {
        let w = self.width as f32;
        Vec3::new(w, w * CAMERA_HEIGHT_FACTOR, self.depth as f32)
    }

    /// Cell boundary lines covering the ground plane. Cells are centered on
    /// multiples of the cell size, so boundaries sit at half-cell offsets.
    pub fn overlay_lines(&self) -> Vec<OverlayLine> {
        let half = self.ground_half_extents();
        let cs = self.cell_size;
        let w = self.width as i64;
        let d = self.depth as i64;
        let mut lines = Vec::with_capacity((2 * (w + d)) as usize);

        for i in -w..w {
            let x = (i as f32 + 0.5) * cs;
            lines.push(OverlayLine {
                start: Vec3::new(x, GRID_OVERLAY_Y, -half.y),
                end: Vec3::new(x, GRID_OVERLAY_Y, half.y),
            });
        }
        for j in -d..d {
            let z = (j as f32 + 0.5) * cs;
            lines.push(OverlayLine {
                start: Vec3::new(-half.x, GRID_OVERLAY_Y, z),
                end: Vec3::new(half.x, GRID_OVERLAY_Y, z),
            });
        }
        lines
    }
}
