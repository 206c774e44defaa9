//! Keyboard shortcuts.
//!
//! Systems read from the `KeyBindings` resource instead of hardcoding
//! `KeyCode` values.

use bevy::prelude::*;

use crate::buildings::BuildingType;

// =============================================================================
// Key binding definition
// =============================================================================

/// A single key binding: a key code plus optional modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    /// Create a simple binding with no modifiers.
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Create a binding that requires Shift.
    pub const fn shift(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: true,
        }
    }

    /// True on the frame the key goes down with exactly these modifiers held.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        ctrl_held(keys) == self.ctrl && shift_held(keys) == self.shift
    }

    /// Human-readable label (e.g. "Shift+R", "G").
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(keycode_label(self.key));
        parts.join("+")
    }
}

pub fn ctrl_held(keys: &ButtonInput<KeyCode>) -> bool {
    keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight)
}

pub fn shift_held(keys: &ButtonInput<KeyCode>) -> bool {
    keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight)
}

fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::Digit5 => "5",
        KeyCode::KeyG => "G",
        KeyCode::KeyR => "R",
        KeyCode::Home => "Home",
        _ => "?",
    }
}

// =============================================================================
// KeyBindings resource
// =============================================================================

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub tool_residential: KeyBinding,
    pub tool_commercial: KeyBinding,
    pub tool_industrial: KeyBinding,
    pub tool_road: KeyBinding,
    pub tool_park: KeyBinding,
    pub toggle_grid: KeyBinding,
    pub reset_all: KeyBinding,
    pub recenter_camera: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            tool_residential: KeyBinding::simple(KeyCode::Digit1),
            tool_commercial: KeyBinding::simple(KeyCode::Digit2),
            tool_industrial: KeyBinding::simple(KeyCode::Digit3),
            tool_road: KeyBinding::simple(KeyCode::Digit4),
            tool_park: KeyBinding::simple(KeyCode::Digit5),
            toggle_grid: KeyBinding::simple(KeyCode::KeyG),
            reset_all: KeyBinding::shift(KeyCode::KeyR),
            recenter_camera: KeyBinding::simple(KeyCode::Home),
        }
    }
}

impl KeyBindings {
    pub fn tool_binding(&self, tool: BuildingType) -> KeyBinding {
        match tool {
            BuildingType::Residential => self.tool_residential,
            BuildingType::Commercial => self.tool_commercial,
            BuildingType::Industrial => self.tool_industrial,
            BuildingType::Road => self.tool_road,
            BuildingType::Park => self.tool_park,
        }
    }

    /// The tool whose shortcut was pressed this frame, if any.
    pub fn pressed_tool(&self, keys: &ButtonInput<KeyCode>) -> Option<BuildingType> {
        BuildingType::ALL
            .into_iter()
            .find(|tool| self.tool_binding(*tool).just_pressed(keys))
    }

    /// (description, binding) pairs for the help panel.
    pub fn help_entries(&self) -> Vec<(String, KeyBinding)> {
        let mut entries: Vec<(String, KeyBinding)> = BuildingType::ALL
            .iter()
            .map(|tool| (format!("Tool: {}", tool.label()), self.tool_binding(*tool)))
            .collect();
        entries.push(("Toggle grid".to_string(), self.toggle_grid));
        entries.push(("Remove all buildings".to_string(), self.reset_all));
        entries.push(("Recenter camera".to_string(), self.recenter_camera));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_shortcut_detection() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Digit3);
        assert_eq!(bindings.pressed_tool(&keys), Some(BuildingType::Industrial));
    }

    #[test]
    fn test_reset_requires_shift_only() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyR);
        assert!(!bindings.reset_all.just_pressed(&keys));

        // Ctrl+R is the browser's reload shortcut and must not reset.
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ControlLeft);
        keys.press(KeyCode::KeyR);
        assert!(!bindings.reset_all.just_pressed(&keys));

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ShiftRight);
        keys.press(KeyCode::KeyR);
        assert!(bindings.reset_all.just_pressed(&keys));
    }

    #[test]
    fn test_modifier_blocks_simple_binding() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ShiftLeft);
        keys.press(KeyCode::KeyG);
        assert!(!bindings.toggle_grid.just_pressed(&keys));
    }

    #[test]
    fn test_display_labels() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.reset_all.display_label(), "Shift+R");
        assert_eq!(bindings.tool_park.display_label(), "5");
        assert_eq!(bindings.help_entries().len(), 8);
    }
}
