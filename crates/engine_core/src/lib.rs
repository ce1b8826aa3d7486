//! Core types for the safari world simulation.
//!
//! This crate provides the foundational types used across all simulation
//! systems:
//! - Transform and spatial components
//! - Time management
//! - Model bounds and the loaded-asset catalog

pub mod assets;
pub mod components;
pub mod time;
pub mod transform;

pub use assets::*;
pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use hecs::{Entity, World};
