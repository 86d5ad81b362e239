//! Frame script parser.
//!
//! A frame script drives the camera without a window. One step per line:
//!
//! ```text
//! # comment
//! resize 1024 768
//! 30 zoom_in
//! 45 pan_right, pan_up
//! 1 shake
//! 40
//! ```
//!
//! `<frames> [cmd, cmd, ...]` holds the listed commands for that many frames
//! (no commands means idle frames). `resize <w> <h>` resizes the viewport.
//! Unknown command names are skipped with a warning.

use log::warn;
use std::path::Path;

use crate::resources::input::CameraCommand;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// Hold `commands` for `frames` consecutive frames.
    Hold {
        frames: u32,
        commands: Vec<CameraCommand>,
    },
    /// Resize the viewport.
    Resize { width: f32, height: f32 },
}

/// Parse a script from text.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, String> {
    let mut steps = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        if head.eq_ignore_ascii_case("resize") {
            let (width, height) = parse_size(rest)
                .map_err(|e| format!("Line {}: {}", line_no, e))?;
            steps.push(ScriptStep::Resize { width, height });
            continue;
        }

        let frames = head
            .parse::<u32>()
            .map_err(|e| format!("Line {}: invalid frame count '{}': {}", line_no, head, e))?;

        let mut commands = Vec::new();
        for name in rest.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.parse::<CameraCommand>() {
                Ok(cmd) => commands.push(cmd),
                Err(e) => warn!("Line {}: {}, ignoring", line_no, e),
            }
        }

        steps.push(ScriptStep::Hold { frames, commands });
    }

    Ok(steps)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
    parse_script(&text)
}

/// Parse `"<w> <h>"` or `"<w>x<h>"` into a viewport size.
pub fn parse_size(text: &str) -> Result<(f32, f32), String> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == 'x' || c == 'X')
        .filter(|p| !p.is_empty())
        .collect();

    let [w, h] = parts.as_slice() else {
        return Err(format!("expected a size like '1024 768', got '{}'", text));
    };

    let parse = |s: &str| -> Result<f32, String> {
        let v = s
            .parse::<f32>()
            .map_err(|e| format!("invalid size component '{}': {}", s, e))?;
        if v.is_finite() && v > 0.0 {
            Ok(v)
        } else {
            Err(format!("size component must be positive, got '{}'", s))
        }
    };

    Ok((parse(*w)?, parse(*h)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_steps() {
        let text = "\
# warm up
resize 800 600
10 zoom_in
5 pan_right, pan_up   # diagonal
3
";
        let steps = parse_script(text).unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Resize {
                    width: 800.0,
                    height: 600.0
                },
                ScriptStep::Hold {
                    frames: 10,
                    commands: vec![CameraCommand::ZoomIn]
                },
                ScriptStep::Hold {
                    frames: 5,
                    commands: vec![CameraCommand::PanRight, CameraCommand::PanUp]
                },
                ScriptStep::Hold {
                    frames: 3,
                    commands: vec![]
                },
            ]
        );
    }

    #[test]
    fn test_parse_script_skips_unknown_commands() {
        let steps = parse_script("2 jump, shake").unwrap();
        assert_eq!(
            steps,
            vec![ScriptStep::Hold {
                frames: 2,
                commands: vec![CameraCommand::ShakeTrigger]
            }]
        );
    }

    #[test]
    fn test_parse_script_reports_line_of_bad_frame_count() {
        let err = parse_script("1 reset\nmany zoom_in\n").unwrap_err();
        assert!(err.starts_with("Line 2:"), "{}", err);
    }

    #[test]
    fn test_parse_size_formats() {
        assert_eq!(parse_size("1024x768"), Ok((1024.0, 768.0)));
        assert_eq!(parse_size(" 640  480 "), Ok((640.0, 480.0)));
        assert!(parse_size("640").is_err());
        assert!(parse_size("0x480").is_err());
        assert!(parse_size("wide x tall").is_err());
    }
}
