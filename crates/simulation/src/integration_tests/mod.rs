//! Integration tests using the `TestCity` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and drive it
//! through the `ActionQueue`, the same path the pointer, keyboard, and
//! toolbar use.
