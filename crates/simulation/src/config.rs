/// World-space edge length of one grid cell. Placement snaps to multiples of this.
pub const CELL_SIZE: f32 = 1.0;

pub const DEFAULT_GRID_WIDTH: u32 = 20;
pub const DEFAULT_GRID_DEPTH: u32 = 20;

/// Largest accepted grid width or depth. Overlay lines and the ground mesh
/// scale with the grid, so larger grids are rejected.
pub const MAX_GRID_DIMENSION: u32 = 1000;

/// Camera home height as a fraction of the grid width: home = (w, w * k, d).
pub const CAMERA_HEIGHT_FACTOR: f32 = 0.7;

/// The ground plane extends this many cells past the grid on each side.
/// A 30x30 grid gets a 60x60 ground plane.
pub const GROUND_EXTENT_FACTOR: f32 = 2.0;

/// Overlay lines float slightly above the ground to avoid z-fighting.
pub const GRID_OVERLAY_Y: f32 = 0.01;

/// Pointer travel (in logical pixels) after which a press becomes a camera drag.
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;
