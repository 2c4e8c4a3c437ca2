/// Command line front end: arguments, stage wiring and output
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::Vector3;
use obj2array_core::{convert, RotationState, TransformParams};
use tracing::info;

/// Convert an OBJ mesh on stdin into a flat list of transformed triangles.
///
/// The mesh is recentered and scaled so its largest coordinate is 1 before
/// the scale, rotation and translation given here are applied.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "obj2array", version)]
pub struct Args {
    /// Uniform scale applied after normalization
    #[arg(default_value_t = 1.0, allow_negative_numbers = true, allow_hyphen_values = true)]
    pub scale: f64,

    /// Rotation about the x axis, in radians
    #[arg(default_value_t = 0.0, allow_negative_numbers = true, allow_hyphen_values = true)]
    pub rot_x: f64,

    /// Rotation about the y axis, in radians
    #[arg(default_value_t = 0.0, allow_negative_numbers = true, allow_hyphen_values = true)]
    pub rot_y: f64,

    /// Rotation about the z axis, in radians
    #[arg(default_value_t = 0.0, allow_negative_numbers = true, allow_hyphen_values = true)]
    pub rot_z: f64,

    /// Translation along x
    #[arg(default_value_t = 0.0, allow_negative_numbers = true, allow_hyphen_values = true)]
    pub trans_x: f64,

    /// Translation along y
    #[arg(default_value_t = 0.0, allow_negative_numbers = true, allow_hyphen_values = true)]
    pub trans_y: f64,

    /// Translation along z
    #[arg(default_value_t = 0.0, allow_negative_numbers = true, allow_hyphen_values = true)]
    pub trans_z: f64,
}

impl From<&Args> for TransformParams {
    fn from(args: &Args) -> Self {
        Self {
            scale: args.scale,
            rotation: RotationState::new(args.rot_x, args.rot_y, args.rot_z),
            translation: Vector3::new(args.trans_x, args.trans_y, args.trans_z),
        }
    }
}

/// Run one conversion from `input` to `output`.
///
/// The triangle list is rendered in full before anything is written, so a
/// failed run leaves `output` untouched.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, output: &mut W) -> Result<()> {
    let params = TransformParams::from(args);
    info!(?params, "converting mesh");

    let conversion = convert(input, &params)?;

    output
        .write_all(conversion.text.as_bytes())
        .and_then(|()| output.flush())
        .context("writing output")?;

    info!(
        vertices = conversion.vertices,
        triangles = conversion.triangles,
        "conversion complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("obj2array").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let params = TransformParams::from(&parse(&[]));
        assert_eq!(params, TransformParams::default());
    }

    #[test]
    fn test_positional_order() {
        let args = parse(&["2", "0.5", "-1.5", "3", "-4", "5", "-6e-1"]);
        let params = TransformParams::from(&args);
        assert_eq!(params.scale, 2.0);
        assert_eq!(params.rotation, RotationState::new(0.5, -1.5, 3.0));
        assert_eq!(params.translation, Vector3::new(-4.0, 5.0, -0.6));
    }

    #[test]
    fn test_negative_float_forms() {
        let args = parse(&["1", "-.5", "-1e-3", "-2E+1", "-0", "-inf"]);
        assert_eq!(args.rot_x, -0.5);
        assert_eq!(args.rot_y, -0.001);
        assert_eq!(args.rot_z, -20.0);
        assert_eq!(args.trans_x, 0.0);
        assert_eq!(args.trans_y, f64::NEG_INFINITY);

        assert_eq!(parse(&["-.25"]).scale, -0.25);
    }

    #[test]
    fn test_partial_arguments_keep_defaults() {
        let args = parse(&["0.25", "1"]);
        assert_eq!(args.scale, 0.25);
        assert_eq!(args.rot_x, 1.0);
        assert_eq!(args.rot_y, 0.0);
        assert_eq!(args.trans_z, 0.0);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(Args::try_parse_from(["obj2array", "big"]).is_err());
    }

    #[test]
    fn test_run_writes_triangles() {
        let input = "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\nf 3 2 1\n";
        let mut output = Vec::new();
        run(&parse(&["1", "0", "0", "0", "1"]), input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] ],"));
        assert!(lines[1].ends_with("] ]"));

        // Second vertex after normalization is (1, -1/5, 0), shifted by 1 in x.
        let second: f64 = lines[0]
            .split("], [")
            .nth(1)
            .and_then(|v| v.split(',').next())
            .unwrap()
            .parse()
            .unwrap();
        assert_relative_eq!(second, 2.0);
    }

    #[test]
    fn test_run_failure_writes_nothing() {
        let input = "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\nf 1 2 9\n";
        let mut output = Vec::new();
        let err = run(&parse(&[]), input.as_bytes(), &mut output).unwrap_err();

        assert!(output.is_empty());
        assert_eq!(err.to_string(), "emitting triangles");
        assert!(format!("{err:#}").contains("vertex index 8 out of range"));
    }

    #[test]
    fn test_run_reports_parse_stage() {
        let mut output = Vec::new();
        let err = run(&parse(&[]), "v 1 2\n".as_bytes(), &mut output).unwrap_err();
        assert_eq!(err.to_string(), "reading mesh");
    }
}
