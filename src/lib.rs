//! Interactive textured model viewer.
//!
//! Loads a directory of Wavefront OBJ meshes and a directory of PNG
//! textures, then renders the selected mesh/texture pair under a
//! first-person camera. Keyboard input transforms the selected model,
//! switches the active assets and tunes the shading parameters.

pub mod assets;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod controller;
pub mod input;
pub mod keymap;
pub mod mesh;
pub mod sampler;
pub mod status;
pub mod texture;
pub mod viewer;
pub mod viewport;
