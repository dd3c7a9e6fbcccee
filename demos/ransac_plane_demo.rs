//! RANSAC Plane Fitting Demo
//!
//! Runs the plane estimator on a few synthetic clouds and reports the plane,
//! inlier share and whether the search stopped early.

use planefit_algorithms::{fit_plane, inlier_indices, RansacConfig, RngSource};
use planefit_core::{Point3d, PointCloud};
use planefit_io::{format_plane, DEFAULT_OUTPUT_PRECISION};
use rand::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("=== RANSAC Plane Fitting Demo ===\n");

    let scenes = [
        ("Simple planar cloud", create_simple_planar_cloud(), 0.01),
        ("Noisy planar cloud", create_noisy_planar_cloud(), 0.05),
        ("Tilted plane with outliers", create_tilted_plane_with_outliers(), 0.1),
        ("Two planes (largest wins)", create_two_planes(), 0.05),
    ];

    let mut rng = RngSource::from_entropy();
    for (i, (name, cloud, tolerance)) in scenes.iter().enumerate() {
        let fit = fit_plane(cloud, &RansacConfig::new(*tolerance), &mut rng)?;
        let inliers = inlier_indices(cloud.as_slice(), &fit.plane, *tolerance);

        println!("{}. {}:", i + 1, name);
        println!("   Input points: {}", cloud.len());
        println!("   Plane: {}", format_plane(&fit.plane, DEFAULT_OUTPUT_PRECISION));
        println!("   Inliers: {} ({:.1}%)", inliers.len(), inliers.len() as f64 / cloud.len() as f64 * 100.0);
        println!("   Iterations: {}{}", fit.iterations, if fit.early_exit { " (early exit)" } else { "" });
        println!();
    }

    println!("=== Demo completed successfully! ===");
    Ok(())
}

/// 10x10 grid on z = 0 plus three outliers
fn create_simple_planar_cloud() -> PointCloud<Point3d> {
    let mut cloud = PointCloud::new();
    for i in 0..10 {
        for j in 0..10 {
            cloud.push(Point3d::new(i as f64, j as f64, 0.0));
        }
    }

    cloud.push(Point3d::new(5.0, 5.0, 10.0));
    cloud.push(Point3d::new(5.0, 5.0, -10.0));
    cloud.push(Point3d::new(15.0, 15.0, 5.0));
    cloud
}

/// 20x20 grid with small z jitter plus outliers above it
fn create_noisy_planar_cloud() -> PointCloud<Point3d> {
    let mut rng = StdRng::seed_from_u64(17);
    let mut cloud = PointCloud::new();

    for i in 0..20 {
        for j in 0..20 {
            cloud.push(Point3d::new(i as f64, j as f64, rng.gen_range(-0.03..0.03)));
        }
    }

    for _ in 0..30 {
        let x = rng.gen_range(0.0..20.0);
        let y = rng.gen_range(0.0..20.0);
        cloud.push(Point3d::new(x, y, rng.gen_range(2.0..8.0)));
    }

    cloud
}

/// Plane x + y + z = 0 with jitter plus outliers
fn create_tilted_plane_with_outliers() -> PointCloud<Point3d> {
    let mut rng = StdRng::seed_from_u64(23);
    let mut cloud = PointCloud::new();

    for i in 0..15 {
        for j in 0..15 {
            let x = i as f64 + rng.gen_range(-0.02..0.02);
            let y = j as f64 + rng.gen_range(-0.02..0.02);
            let z = -(i as f64 + j as f64) + rng.gen_range(-0.02..0.02);
            cloud.push(Point3d::new(x, y, z));
        }
    }

    for _ in 0..50 {
        let x = rng.gen_range(0.0..15.0);
        let y = rng.gen_range(0.0..15.0);
        cloud.push(Point3d::new(x, y, rng.gen_range(5.0..15.0)));
    }

    cloud
}

/// A large plane at z = 0 and a smaller one at z = 5
fn create_two_planes() -> PointCloud<Point3d> {
    let mut rng = StdRng::seed_from_u64(31);
    let mut cloud = PointCloud::new();

    for i in 0..25 {
        for j in 0..25 {
            cloud.push(Point3d::new(i as f64, j as f64, rng.gen_range(-0.02..0.02)));
        }
    }

    for i in 0..10 {
        for j in 0..10 {
            cloud.push(Point3d::new(i as f64, j as f64, 5.0 + rng.gen_range(-0.02..0.02)));
        }
    }

    cloud
}
