//! Task input parsing
//!
//! The input is a stream of whitespace-separated numbers:
//!
//! ```text
//! <p>
//! <N>
//! <x1> <y1> <z1>
//! <x2> <y2> <z2>
//! ...
//! ```
//!
//! `p` is the inlier tolerance and `N` the declared number of points. `N` is
//! informational only: every complete triple that follows is read, and
//! reading stops at the first token that is not a finite number.
//!
//! A missing, malformed or fractional tolerance or count (`N` written as
//! `4.0`) is rejected outright rather than read partially.

use crate::error::{IoError, IoResult};
use log::{debug, warn};
use planefit_core::{Point3d, PointCloud};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default input file name
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Parsed contents of an input file
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneFitInput {
    /// Inlier distance tolerance `p`
    pub tolerance: f64,
    /// Point count as declared in the file
    pub declared_count: i64,
    /// All points read
    pub cloud: PointCloud<Point3d>,
}

/// Parse input from text
pub fn parse_input(text: &str) -> IoResult<PlaneFitInput> {
    let mut tokens = text.split_whitespace();

    let tolerance = match tokens.next() {
        Some(token) => token.parse::<f64>().map_err(|e| IoError::Parse {
            message: format!("invalid tolerance {:?}: {}", token, e),
        })?,
        None => {
            return Err(IoError::Parse {
                message: "missing tolerance".to_string(),
            })
        }
    };

    let declared_count = match tokens.next() {
        Some(token) => token.parse::<i64>().map_err(|e| IoError::Parse {
            message: format!("invalid point count {:?}: {}", token, e),
        })?,
        None => {
            return Err(IoError::Parse {
                message: "missing point count".to_string(),
            })
        }
    };

    let mut cloud = PointCloud::new();
    let mut rest = tokens.peekable();
    while rest.peek().is_some() {
        match read_triple(&mut rest) {
            Some(point) => cloud.push(point),
            None => {
                warn!("stopped reading after {} points at malformed or incomplete coordinates", cloud.len());
                break;
            }
        }
    }

    if declared_count < 0 || declared_count as usize != cloud.len() {
        warn!("input declares {} points but {} were read", declared_count, cloud.len());
    }
    debug!("read {} points with tolerance {}", cloud.len(), tolerance);

    Ok(PlaneFitInput {
        tolerance,
        declared_count,
        cloud,
    })
}

fn read_triple<'a, I: Iterator<Item = &'a str>>(tokens: &mut I) -> Option<Point3d> {
    // `inf` and `nan` parse as f64 but are not numbers in the input format
    let mut coordinate = || {
        tokens
            .next()
            .and_then(|t| t.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    };
    let x = coordinate()?;
    let y = coordinate()?;
    let z = coordinate()?;
    Some(Point3d::new(x, y, z))
}

/// Read and parse an input file
pub fn read_input<P: AsRef<Path>>(path: P) -> IoResult<PlaneFitInput> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => IoError::Io(e),
    })?;

    parse_input(&text)
}
