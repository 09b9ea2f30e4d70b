//! Application Shell: scene selection, wave height and pointer routing.
//!
//! # Invariants
//! - Exactly one scene is active at a time.
//! - Pointer input reaches the drawing only while it is on screen.
//! - Wave height is always within [0, 2].

mod shell;

pub use shell::SceneShell;
