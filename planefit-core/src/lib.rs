//! Core data structures for planefit
//!
//! This crate provides the fundamental value types shared by the plane
//! fitting pipeline: points, planes, point clouds and the common error type.

pub mod point;
pub mod plane;
pub mod point_cloud;
pub mod error;

pub use point::*;
pub use plane::*;
pub use point_cloud::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Vector4};
