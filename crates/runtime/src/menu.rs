//! Interactive configuration intake.
//!
//! Each parameter is prompted for on its own line and re-prompted until it
//! parses and satisfies its predicate. Values already supplied as CLI flags
//! skip their prompt but still pass through [`SimConfig::new`], so an
//! invalid flag fails startup with the same message instead of looping.
//!
//! The reader and writer are injected so the whole exchange is unit
//! testable against in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use physics::{SimConfig, MAX_BALLS};

/// Parameters that may have been provided up front.
#[derive(Debug, Default, Clone, Copy)]
pub struct Presets {
    pub balls: Option<usize>,
    pub max_speed: Option<f32>,
    pub restitution: Option<f32>,
    pub cube_size: Option<f32>,
}

impl Presets {
    fn is_complete(&self) -> bool {
        self.balls.is_some()
            && self.max_speed.is_some()
            && self.restitution.is_some()
            && self.cube_size.is_some()
    }
}

/// Resolve the full configuration, prompting for whatever is missing.
pub fn resolve_config<R, W>(presets: Presets, input: &mut R, output: &mut W) -> Result<SimConfig>
where
    R: BufRead,
    W: Write,
{
    if !presets.is_complete() {
        writeln!(output, "=== 3D Collision Simulator ===")?;
    }

    let balls = match presets.balls {
        Some(n) => n,
        None => prompt_value(
            input,
            output,
            &format!("Number of balls (1 to {MAX_BALLS}): "),
            parse_ball_count,
        )?,
    };
    let max_speed = match presets.max_speed {
        Some(v) => v,
        None => prompt_value(
            input,
            output,
            "Maximum initial speed (e.g. 10.0): ",
            parse_max_speed,
        )?,
    };
    let restitution = match presets.restitution {
        Some(v) => v,
        None => prompt_value(
            input,
            output,
            "Restitution coefficient (e.g. 0.9, 1.0 or 1.2): ",
            parse_restitution,
        )?,
    };
    let cube_size = match presets.cube_size {
        Some(v) => v,
        None => prompt_value(input, output, "Cube size (e.g. 40.0): ", parse_cube_size)?,
    };

    Ok(SimConfig::new(balls, max_speed, restitution, cube_size)?)
}

/// Prompt until `parse` accepts a line. EOF aborts with an error rather
/// than looping on a closed stream.
fn prompt_value<T, R, W, F>(input: &mut R, output: &mut W, prompt: &str, parse: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("read configuration")?;
        if bytes == 0 {
            bail!("input closed before configuration was complete");
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(reason) => writeln!(output, "{reason}")?,
        }
    }
}

fn parse_ball_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("enter a whole number between 1 and {MAX_BALLS}"))?;
    if (1..=MAX_BALLS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("ball count must be between 1 and {MAX_BALLS}"))
    }
}

fn parse_max_speed(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|_| "enter a number".to_string())?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err("maximum speed must be positive".to_string())
    }
}

fn parse_restitution(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|_| "enter a number".to_string())?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err("restitution must be positive".to_string())
    }
}

fn parse_cube_size(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|_| "enter a number".to_string())?;
    if v > 1.0 {
        Ok(v)
    } else {
        Err("cube size must be greater than 1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn resolve(presets: Presets, input: &str) -> (Result<SimConfig>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut written = Vec::new();
        let result = resolve_config(presets, &mut reader, &mut written);
        (result, String::from_utf8(written).unwrap())
    }

    #[test]
    fn accepts_a_clean_session() {
        let (result, output) = resolve(Presets::default(), "50\n20\n1.0\n40\n");
        let config = result.unwrap();
        assert_eq!(config.ball_count, 50);
        assert!((config.max_speed - 20.0).abs() < f32::EPSILON);
        assert!((config.cube_size - 40.0).abs() < f32::EPSILON);
        assert!(output.contains("=== 3D Collision Simulator ==="));
    }

    #[test]
    fn reprompts_until_a_field_is_valid() {
        // Garbage, out-of-range, then a valid count.
        let (result, output) = resolve(Presets::default(), "abc\n0\n250\n30\n10\n1.0\n40\n");
        assert_eq!(result.unwrap().ball_count, 30);
        assert!(output.contains("whole number"));
        assert!(output.contains("between 1 and 100"));
    }

    #[test]
    fn rejects_non_positive_speed_and_small_cube() {
        let (result, output) = resolve(Presets::default(), "10\n-3\n5\n0\n1.0\n1\n40\n");
        let config = result.unwrap();
        assert!((config.max_speed - 5.0).abs() < f32::EPSILON);
        assert!((config.cube_size - 40.0).abs() < f32::EPSILON);
        assert!(output.contains("must be positive"));
        assert!(output.contains("greater than 1"));
    }

    #[test]
    fn presets_skip_their_prompts() {
        let presets = Presets {
            balls: Some(10),
            max_speed: Some(5.0),
            restitution: Some(1.0),
            cube_size: Some(20.0),
        };
        let (result, output) = resolve(presets, "");
        assert_eq!(result.unwrap().ball_count, 10);
        assert!(output.is_empty(), "nothing should be printed: {output:?}");
    }

    #[test]
    fn invalid_preset_fails_without_prompting() {
        let presets = Presets {
            balls: Some(0),
            max_speed: Some(5.0),
            restitution: Some(1.0),
            cube_size: Some(20.0),
        };
        let (result, _) = resolve(presets, "");
        assert!(result.is_err());
    }

    #[test]
    fn eof_is_an_error_not_a_hang() {
        let (result, _) = resolve(Presets::default(), "");
        assert!(result.is_err());
    }
}
