//! # Planefit Algorithms
//!
//! Random sampling, inlier scoring and the RANSAC driver that estimates the
//! dominant plane of a point cloud.

pub mod sampling;
pub mod inliers;
pub mod ransac;

// Re-export commonly used items
pub use sampling::*;
pub use inliers::*;
pub use ransac::*;
