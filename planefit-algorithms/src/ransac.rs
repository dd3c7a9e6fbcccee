//! RANSAC plane estimation

use crate::inliers::count_inliers;
use crate::sampling::{random_sub_vector, RandomSource};
use log::{debug, info};
use planefit_core::{Error, Plane3d, Point3d, PointCloud, Result};
use serde::{Deserialize, Serialize};

/// Maximal number of RANSAC iterations
pub const RANSAC_MAX_ITERATIONS: usize = 100;

/// Number of points drawn for one hypothesis
pub const RANSAC_NUM_ELEMENTS: usize = 3;

/// Parameters of a RANSAC run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RansacConfig {
    /// Maximum point-to-plane distance for a point to count as an inlier
    pub tolerance: f64,
    /// Upper bound on the number of hypotheses evaluated
    pub max_iterations: usize,
    /// Points drawn per hypothesis
    pub sample_size: usize,
}

impl RansacConfig {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            max_iterations: RANSAC_MAX_ITERATIONS,
            sample_size: RANSAC_NUM_ELEMENTS,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidData(format!(
                "Tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }

        if self.max_iterations == 0 {
            return Err(Error::InvalidData("Max iterations must be positive".to_string()));
        }

        if self.sample_size != RANSAC_NUM_ELEMENTS {
            return Err(Error::InvalidData(format!(
                "A plane hypothesis needs exactly {} points, got sample size {}",
                RANSAC_NUM_ELEMENTS, self.sample_size
            )));
        }

        Ok(())
    }
}

/// A candidate plane together with its inlier count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypothesis {
    pub plane: Plane3d,
    pub inliers: usize,
}

/// Outcome of [`fit_plane`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFit {
    /// The best plane found
    pub plane: Plane3d,
    /// Number of inliers of the best plane
    pub inliers: usize,
    /// Number of hypotheses evaluated
    pub iterations: usize,
    /// Whether the run stopped because a hypothesis beat the consensus threshold
    pub early_exit: bool,
}

impl PlaneFit {
    pub fn hypothesis(&self) -> Hypothesis {
        Hypothesis {
            plane: self.plane,
            inliers: self.inliers,
        }
    }
}

/// Inlier count a hypothesis must exceed to stop the search early
///
/// Half the cloud size, truncated.
pub fn consensus_threshold(cloud_size: usize) -> usize {
    cloud_size / 2
}

/// Estimate the dominant plane of a point cloud using RANSAC
///
/// Each iteration draws three distinct points, builds the plane through
/// them and counts the points within `config.tolerance` of it. The first
/// hypothesis with the highest count wins; the search stops as soon as a
/// hypothesis has more inliers than half the cloud.
///
/// # Arguments
/// * `cloud` - Input point cloud, at least three points
/// * `config` - Tolerance and iteration bounds
/// * `rng` - Source of sample indices
///
/// # Returns
/// * `Result<PlaneFit>` - The best plane and how the search ended
pub fn fit_plane<S: RandomSource + ?Sized>(
    cloud: &PointCloud<Point3d>,
    config: &RansacConfig,
    rng: &mut S,
) -> Result<PlaneFit> {
    config.validate()?;

    if cloud.len() < config.sample_size {
        return Err(Error::InsufficientPoints {
            required: config.sample_size,
            found: cloud.len(),
        });
    }

    let points = cloud.as_slice();
    let threshold = consensus_threshold(points.len());
    let mut best: Option<Hypothesis> = None;
    let mut iterations = 0;
    let mut early_exit = false;

    while iterations < config.max_iterations {
        iterations += 1;

        let samples = random_sub_vector(points, config.sample_size, rng)?;
        let plane = Plane3d::from_points(&samples[0], &samples[1], &samples[2]);
        let inliers = count_inliers(points, &plane, config.tolerance);

        if inliers > best.map_or(0, |h| h.inliers) {
            debug!("iteration {}: new best plane {:?} with {} inliers", iterations, plane, inliers);
            best = Some(Hypothesis { plane, inliers });
        }

        if inliers > threshold {
            debug!("iteration {}: {} inliers exceed threshold {}, stopping", iterations, inliers, threshold);
            early_exit = true;
            break;
        }
    }

    match best {
        Some(Hypothesis { plane, inliers }) => {
            info!(
                "best plane has {}/{} inliers after {} iterations",
                inliers,
                points.len(),
                iterations
            );
            Ok(PlaneFit {
                plane,
                inliers,
                iterations,
                early_exit,
            })
        }
        None => Err(Error::Algorithm(format!(
            "No hypothesis had any inliers after {} iterations",
            iterations
        ))),
    }
}
