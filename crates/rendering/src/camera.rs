use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::config::CLICK_DRAG_THRESHOLD;
use simulation::grid::GridConfig;
use simulation::keybindings::KeyBindings;
use simulation::placement::{GridEffect, PlacementController};

use crate::egui_input_guard::egui_wants_pointer;

const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 5000.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0; // 5 degrees
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0; // 85 degrees
const ORBIT_SENSITIVITY: f32 = 0.005;
/// World units panned per pixel at distance 1.
const PAN_SENSITIVITY: f32 = 0.0015;

/// Orbital camera model: camera orbits around a focus point on the ground.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::home(&GridConfig::default())
    }
}

impl OrbitCamera {
    /// Orbit parameters that put the camera at `position` looking at `focus`.
    pub fn look_from(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let distance = offset.length().max(MIN_DISTANCE);
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
        }
    }

    /// The grid's home view: `(w, w * 0.7, d)` looking at the origin.
    pub fn home(config: &GridConfig) -> Self {
        Self::look_from(config.camera_home(), Vec3::ZERO)
    }
}

/// Press/drag/release state for one mouse button. A press that moves less
/// than `CLICK_DRAG_THRESHOLD` pixels before release is a click; beyond that
/// it is a camera drag and never reaches the placement tools.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub is_dragging: bool,
    /// Pointer movement this frame while dragging.
    pub delta: Vec2,
    /// True for the single frame on which a click (not a drag) was released.
    pub clicked: bool,
}

impl DragTracker {
    /// Advance one frame. `pressed`/`released` are this frame's button edges;
    /// `pos` is the current pointer position, if the pointer is in the window.
    pub fn update(&mut self, pressed: bool, released: bool, pos: Option<Vec2>) {
        self.delta = Vec2::ZERO;
        self.clicked = false;

        if pressed {
            if let Some(pos) = pos {
                self.pressed = true;
                self.start_pos = pos;
                self.last_pos = pos;
                self.is_dragging = false;
            }
        }

        if self.pressed {
            if let Some(pos) = pos {
                if !self.is_dragging && (pos - self.start_pos).length() > CLICK_DRAG_THRESHOLD {
                    self.is_dragging = true;
                    self.last_pos = pos;
                }
                if self.is_dragging {
                    self.delta = pos - self.last_pos;
                    self.last_pos = pos;
                }
            }
        }

        if released {
            self.clicked = self.pressed && !self.is_dragging;
            self.pressed = false;
            self.is_dragging = false;
        }
    }
}

/// Left button orbits, right button pans. Both also produce clicks.
#[derive(Resource, Debug, Default)]
pub struct PointerDrags {
    pub left: DragTracker,
    pub right: DragTracker,
}

pub fn setup_camera(mut commands: Commands, controller: Res<PlacementController>) {
    let orbit = OrbitCamera::home(controller.grid());
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

pub(crate) fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// System: apply OrbitCamera state to the actual camera Transform.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// Feed both mouse buttons into their drag trackers. Presses that start over
/// the toolbar are ignored.
pub fn update_pointer_drags(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drags: ResMut<PointerDrags>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let pos = window.cursor_position();
    let over_ui = egui_wants_pointer(&mut contexts);

    drags.left.update(
        buttons.just_pressed(MouseButton::Left) && !over_ui,
        buttons.just_released(MouseButton::Left),
        pos,
    );
    drags.right.update(
        buttons.just_pressed(MouseButton::Right) && !over_ui,
        buttons.just_released(MouseButton::Right),
        pos,
    );
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(drags: Res<PointerDrags>, mut orbit: ResMut<OrbitCamera>) {
    let delta = drags.left.delta;
    if delta == Vec2::ZERO {
        return;
    }
    orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
    orbit.pitch = (orbit.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
}

/// Right-mouse drag: pan focus along the ground.
pub fn camera_pan_drag(drags: Res<PointerDrags>, mut orbit: ResMut<OrbitCamera>) {
    let delta = drags.right.delta;
    if delta == Vec2::ZERO {
        return;
    }
    let offset = pan_offset(&orbit, delta);
    orbit.focus += offset;
}

/// Ground-plane focus offset for a screen-space drag of `delta` pixels.
/// Dragging moves the ground with the pointer.
pub(crate) fn pan_offset(orbit: &OrbitCamera, delta: Vec2) -> Vec3 {
    let scale = orbit.distance * PAN_SENSITIVITY;
    // Rotate pan direction by current yaw
    let cos_yaw = orbit.yaw.cos();
    let sin_yaw = orbit.yaw.sin();
    let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
    let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
    Vec3::new(world_x * scale, 0.0, world_z * scale)
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Resizing the grid moves the camera to the new home view.
pub fn rehome_on_resize(mut grid_events: EventReader<GridEffect>, mut orbit: ResMut<OrbitCamera>) {
    for effect in grid_events.read() {
        if let GridEffect::Resized { camera_home, .. } = effect {
            *orbit = OrbitCamera::look_from(*camera_home, Vec3::ZERO);
        }
    }
}

pub fn recenter_camera(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    controller: Res<PlacementController>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if bindings.recenter_camera.just_pressed(&keys) {
        *orbit = OrbitCamera::home(controller.grid());
    }
}
