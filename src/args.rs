use crate::bearing::Pt;
use crate::error::ArcError;
use clap::Parser;
use std::fmt;

pub const DEFAULT_SEGMENTS: u16 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    ClockWise,
    CounterClockWise,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ClockWise => write!(f, "CW"),
            Direction::CounterClockWise => write!(f, "CCW"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author = "Brian Kuhns", version, about, allow_negative_numbers = true)]
/// Prints the start and end bearing of an arc around a center point
pub struct Args {
    /// echo the parsed arguments before the report
    #[arg(short = 'v')]
    pub verbose: bool,

    #[arg(value_name = "start x", value_parser = coordinate, allow_hyphen_values = true)]
    pub start_x: f64,
    #[arg(value_name = "start y", value_parser = coordinate, allow_hyphen_values = true)]
    pub start_y: f64,
    #[arg(value_name = "end x", value_parser = coordinate, allow_hyphen_values = true)]
    pub end_x: f64,
    #[arg(value_name = "end y", value_parser = coordinate, allow_hyphen_values = true)]
    pub end_y: f64,
    #[arg(value_name = "center x", value_parser = coordinate, allow_hyphen_values = true)]
    pub center_x: f64,
    #[arg(value_name = "center y", value_parser = coordinate, allow_hyphen_values = true)]
    pub center_y: f64,

    /// CW, CCW, 0 or 1 (any case)
    #[arg(value_name = "direction", value_parser = direction)]
    pub direction: Direction,

    /// accepted and echoed, nothing uses it
    #[arg(value_name = "num segments in 2π", value_parser = segments, default_value_t = DEFAULT_SEGMENTS)]
    pub segments: u16,

    // anything past the segment count is ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    _rest: Vec<String>,
}

impl Args {
    pub fn start(&self) -> Pt {
        [self.start_x, self.start_y]
    }

    pub fn end(&self) -> Pt {
        [self.end_x, self.end_y]
    }

    pub fn center(&self) -> Pt {
        [self.center_x, self.center_y]
    }
}

fn coordinate(s: &str) -> Result<f64, ArcError> {
    let bad = || ArcError::NumericParse {
        expected: "a real number",
        value: s.to_string(),
    };
    let v: f64 = s.parse().map_err(|_| bad())?;
    // "1e400" parses to inf, only a spelled out inf/nan may be non-finite
    let word = s.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if !v.is_finite() && !matches!(word.as_str(), "inf" | "infinity" | "nan") {
        return Err(bad());
    }
    Ok(v)
}

fn direction(s: &str) -> Result<Direction, ArcError> {
    match s.to_ascii_uppercase().as_str() {
        "CW" | "0" => Ok(Direction::ClockWise),
        "CCW" | "1" => Ok(Direction::CounterClockWise),
        _ => Err(ArcError::InvalidDirection(s.to_string())),
    }
}

fn segments(s: &str) -> Result<u16, ArcError> {
    s.parse().map_err(|_| ArcError::NumericParse {
        expected: "a segment count (0-65535)",
        value: s.to_string(),
    })
}

/// argv[0] without its directory, either separator style
pub fn program_name(argv0: &str) -> &str {
    argv0.rsplit(['/', '\\']).next().unwrap_or(argv0)
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n{program} <start x> <start y> <end x> <end y> <center x> <center y> <direction> [num segments in 2\u{03C0}]"
    )
}
