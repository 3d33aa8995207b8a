//! Grid command implementation.
//!
//! Builds a character grid from cell-write operations and exports it
//! as plain text.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PxlError, Result};
use crate::grid::{CharGrid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::output::{display_path, plural, Printer};

/// Draw a character grid and export it as plain text
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Grid width in cells (10-200, clamped)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Grid height in cells (5-100, clamped)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Cell writes as X,Y,CHAR (repeatable; out-of-range writes are ignored)
    #[arg(long = "set", value_name = "X,Y,CHAR")]
    pub sets: Vec<String>,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GridArgs, printer: &Printer) -> Result<()> {
    let mut grid = CharGrid::new(args.width, args.height);

    for spec in &args.sets {
        let (x, y, ch) = parse_set(spec)?;
        grid.set_cell(x, y, ch);
    }

    let text = grid.serialize();

    match &args.output {
        Some(path) => {
            fs::write(path, &text).map_err(|e| PxlError::Io {
                path: path.clone(),
                message: format!("Failed to write grid: {}", e),
            })?;
            printer.status(
                "Exporting",
                &format!(
                    "{}x{} grid ({}) -> {}",
                    grid.width(),
                    grid.height(),
                    plural(args.sets.len(), "write", "writes"),
                    display_path(path)
                ),
            );
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Parse an `X,Y,CHAR` cell-write spec.
///
/// The character part is a single character; `,` itself is allowed as
/// the final field (`3,4,,`).
fn parse_set(spec: &str) -> Result<(u32, u32, char)> {
    let malformed = || PxlError::Parse {
        message: format!("Invalid cell write: {}", spec),
        help: Some("Use X,Y,CHAR — e.g. --set 3,4,#".to_string()),
    };

    let mut parts = spec.splitn(3, ',');
    let x = parts
        .next()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or_else(malformed)?;
    let y = parts
        .next()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or_else(malformed)?;
    let rest = parts.next().ok_or_else(malformed)?;

    let mut chars = rest.chars();
    let ch = chars.next().ok_or_else(malformed)?;
    if chars.next().is_some() {
        return Err(malformed());
    }

    Ok((x, y, ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_set_valid() {
        assert_eq!(parse_set("3,4,#").unwrap(), (3, 4, '#'));
        assert_eq!(parse_set("0,0,x").unwrap(), (0, 0, 'x'));
        assert_eq!(parse_set("1,2,,").unwrap(), (1, 2, ','));
        assert_eq!(parse_set(" 7 , 8 ,@").unwrap(), (7, 8, '@'));
    }

    #[test]
    fn test_parse_set_invalid() {
        assert!(parse_set("").is_err());
        assert!(parse_set("3,4").is_err());
        assert!(parse_set("a,b,c").is_err());
        assert!(parse_set("3,4,").is_err());
        assert!(parse_set("3,4,##").is_err());
    }

    #[test]
    fn test_grid_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("drawing.txt");

        let args = GridArgs {
            width: 15,
            height: 8,
            sets: vec!["4,2,#".to_string(), "99,99,!".to_string()],
            output: Some(path.clone()),
        };

        run(args, &Printer::new()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2].chars().nth(4), Some('#'));
        // The out-of-range write left no trace.
        assert_eq!(text.matches('!').count(), 0);
    }

    #[test]
    fn test_grid_malformed_set_errors() {
        let args = GridArgs {
            width: 15,
            height: 8,
            sets: vec!["not-a-spec".to_string()],
            output: None,
        };

        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, PxlError::Parse { .. }));
    }
}
