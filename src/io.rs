//! Reading point sets and writing tours.
//!
//! Input is a point count `n` followed by `n` coordinate pairs, all
//! whitespace separated. Points are indexed in the order they are read.
//! Tokens after the last pair are ignored.

use std::io::{Read, Write};

use crate::error::{Result, TspError};
use crate::tour::Tour;

/// Parses `n x0 y0 x1 y1 ...` into coordinate pairs.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_points;
///
/// let points = parse_points("2\n0 0\n3.5 -1\n").unwrap();
/// assert_eq!(points, vec![(0.0, 0.0), (3.5, -1.0)]);
/// ```
pub fn parse_points(input: &str) -> Result<Vec<(f64, f64)>> {
    let mut tokens = input.split_whitespace();

    let count = tokens
        .next()
        .ok_or_else(|| TspError::invalid_input("missing point count"))?;
    let n: usize = count.parse().map_err(|_| {
        TspError::invalid_input(format!("point count must be a non-negative integer, got `{count}`"))
    })?;

    let mut coordinate = |index: usize, axis: &str| -> Result<f64> {
        let token = tokens.next().ok_or_else(|| {
            TspError::invalid_input(format!("expected {n} points, input ended at point {index}"))
        })?;
        let value: f64 = token.parse().map_err(|_| {
            TspError::invalid_input(format!("point {index}: `{token}` is not a valid {axis}"))
        })?;
        if !value.is_finite() {
            return Err(TspError::invalid_input(format!(
                "point {index}: {axis} must be finite, got {value}"
            )));
        }
        Ok(value)
    };

    let mut points = Vec::with_capacity(n.min(1 << 20));
    for index in 0..n {
        let x = coordinate(index, "x")?;
        let y = coordinate(index, "y")?;
        points.push((x, y));
    }
    Ok(points)
}

/// Reads the whole of `reader` and parses it with [`parse_points`].
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<(f64, f64)>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_points(&input)
}

/// Writes the tour as point indices, one per line, starting at point 0.
pub fn write_tour<W: Write>(tour: &Tour, mut writer: W) -> Result<()> {
    for index in tour {
        writeln!(writer, "{index}")?;
    }
    writer.flush()?;
    Ok(())
}
