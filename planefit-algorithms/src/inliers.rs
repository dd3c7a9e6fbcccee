//! Inlier scoring against a candidate plane

use planefit_core::{Plane3d, Point3d};

/// Count points whose distance to `plane` is within `tolerance` (inclusive)
pub fn count_inliers(points: &[Point3d], plane: &Plane3d, tolerance: f64) -> usize {
    points.iter()
        .filter(|point| plane.distance_to_point(point) <= tolerance)
        .count()
}

/// Get indices of points whose distance to `plane` is within `tolerance`
pub fn inlier_indices(points: &[Point3d], plane: &Plane3d, tolerance: f64) -> Vec<usize> {
    points.iter()
        .enumerate()
        .filter(|(_, point)| plane.distance_to_point(point) <= tolerance)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_plane() -> Plane3d {
        Plane3d::from_points(
            &Point3d::new(0.0, 0.0, 0.0),
            &Point3d::new(1.0, 0.0, 0.0),
            &Point3d::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        let points = vec![
            Point3d::new(0.0, 0.0, 0.5),
            Point3d::new(0.0, 0.0, -0.5),
            Point3d::new(0.0, 0.0, 0.50001),
        ];

        assert_eq!(count_inliers(&points, &xy_plane(), 0.5), 2);
        assert_eq!(inlier_indices(&points, &xy_plane(), 0.5), vec![0, 1]);
    }

    #[test]
    fn test_zero_tolerance_keeps_points_on_plane() {
        let points = vec![
            Point3d::new(3.0, 4.0, 0.0),
            Point3d::new(3.0, 4.0, 0.1),
        ];

        assert_eq!(count_inliers(&points, &xy_plane(), 0.0), 1);
    }

    #[test]
    fn test_degenerate_plane_has_no_inliers() {
        let plane = Plane3d::from_points(
            &Point3d::new(1.0, 0.0, 0.0),
            &Point3d::new(2.0, 0.0, 0.0),
            &Point3d::new(3.0, 0.0, 0.0),
        );
        let points = vec![Point3d::new(1.0, 0.0, 0.0), Point3d::new(5.0, 5.0, 5.0)];

        assert_eq!(count_inliers(&points, &plane, f64::MAX), 0);
    }
}
