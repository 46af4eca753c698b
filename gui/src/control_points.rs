use std::path::Path;

use bezier::DVec3;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read control points: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {text:?} is not a number")]
    Parse { line: usize, text: String },
    #[error("line {line}: expected 3 coordinates, found {found}")]
    Arity { line: usize, found: usize },
}

/// Two-segment S curve used when no input file is given
pub fn default_control_points() -> Vec<DVec3> {
    vec![
        DVec3::new(-1.2, -0.6, 0.0),
        DVec3::new(-1.0, 0.8, 0.3),
        DVec3::new(-0.4, 0.8, -0.3),
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.4, -0.8, 0.3),
        DVec3::new(1.0, -0.8, -0.3),
        DVec3::new(1.2, 0.6, 0.0),
    ]
}

pub fn load(path: &Path) -> Result<Vec<DVec3>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parses one `x y z` triple per line. Anything after `#` is a comment and
/// blank lines are skipped.
pub fn parse(text: &str) -> Result<Vec<DVec3>, LoadError> {
    let mut points = vec![];
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let body = raw.split_once('#').map_or(raw, |(head, _)| head);
        let found = body.split_whitespace().count();
        if found == 0 {
            continue;
        }
        let (x, y, z) = body
            .split_whitespace()
            .map(|f| parse_coord(f, line))
            .collect_tuple()
            .ok_or(LoadError::Arity { line, found })?;
        points.push(DVec3::new(x?, y?, z?));
    }
    Ok(points)
}

fn parse_coord(text: &str, line: usize) -> Result<f64, LoadError> {
    text.parse().map_err(|_| LoadError::Parse {
        line,
        text: text.to_owned(),
    })
}

/// Parses an `r,g,b,a` color with components in `0..=1`
pub fn parse_color(text: &str) -> Option<[f32; 4]> {
    let (r, g, b, a) = text
        .split(',')
        .map(|c| c.trim().parse::<f32>().ok().filter(|v| (0.0..=1.0).contains(v)))
        .collect_tuple()?;
    Some([r?, g?, b?, a?])
}
