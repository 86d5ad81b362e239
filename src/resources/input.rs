//! Per-frame camera command resource.
//!
//! The input collaborator decodes whatever device it polls into
//! [`CameraCommand`]s and writes the set held this frame into
//! [`ActiveCommands`]. A held key means the command is present for the frame.
//!
//! Commands on the same axis are mutually exclusive; the `*_AXIS` tables list
//! them in priority order and [`ActiveCommands::first_of`] resolves the tie.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Discrete camera command decoded from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraCommand {
    /// Start a shake (ignored while one is running). Demo key: Space.
    ShakeTrigger,
    /// Zoom in towards the minimum zoom factor. Demo key: S.
    ZoomIn,
    /// Zoom out towards the maximum zoom factor. Demo key: W.
    ZoomOut,
    /// Rotate counter-clockwise. Demo key: A.
    RotateLeft,
    /// Rotate clockwise. Demo key: D.
    RotateRight,
    /// Demo key: Left arrow.
    PanLeft,
    /// Demo key: Right arrow.
    PanRight,
    /// Demo key: Up arrow.
    PanUp,
    /// Demo key: Down arrow.
    PanDown,
    /// Recenter, unrotate and restore the mid zoom. Demo key: R.
    Reset,
}

/// Zoom commands, highest priority first.
pub const ZOOM_AXIS: [CameraCommand; 2] = [CameraCommand::ZoomOut, CameraCommand::ZoomIn];
/// Rotation commands, highest priority first.
pub const ROTATE_AXIS: [CameraCommand; 2] =
    [CameraCommand::RotateLeft, CameraCommand::RotateRight];
/// Horizontal pan commands, highest priority first.
pub const HORIZONTAL_PAN_AXIS: [CameraCommand; 2] =
    [CameraCommand::PanLeft, CameraCommand::PanRight];
/// Vertical pan commands, highest priority first.
pub const VERTICAL_PAN_AXIS: [CameraCommand; 2] = [CameraCommand::PanUp, CameraCommand::PanDown];

impl CameraCommand {
    /// Every command, in declaration order.
    pub const ALL: [CameraCommand; 10] = [
        CameraCommand::ShakeTrigger,
        CameraCommand::ZoomIn,
        CameraCommand::ZoomOut,
        CameraCommand::RotateLeft,
        CameraCommand::RotateRight,
        CameraCommand::PanLeft,
        CameraCommand::PanRight,
        CameraCommand::PanUp,
        CameraCommand::PanDown,
        CameraCommand::Reset,
    ];

    /// Snake-case name used by frame scripts and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            CameraCommand::ShakeTrigger => "shake",
            CameraCommand::ZoomIn => "zoom_in",
            CameraCommand::ZoomOut => "zoom_out",
            CameraCommand::RotateLeft => "rotate_left",
            CameraCommand::RotateRight => "rotate_right",
            CameraCommand::PanLeft => "pan_left",
            CameraCommand::PanRight => "pan_right",
            CameraCommand::PanUp => "pan_up",
            CameraCommand::PanDown => "pan_down",
            CameraCommand::Reset => "reset",
        }
    }
}

impl fmt::Display for CameraCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CameraCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CameraCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == wanted)
            .ok_or_else(|| format!("Unknown camera command: '{}'", s.trim()))
    }
}

/// Resource holding the commands active during the current frame.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCommands {
    commands: FxHashSet<CameraCommand>,
}

impl ActiveCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, command: CameraCommand) -> Self {
        self.commands.insert(command);
        self
    }

    pub fn insert(&mut self, command: CameraCommand) {
        self.commands.insert(command);
    }

    pub fn remove(&mut self, command: CameraCommand) {
        self.commands.remove(&command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn contains(&self, command: CameraCommand) -> bool {
        self.commands.contains(&command)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Replace the frame's commands.
    pub fn set(&mut self, commands: impl IntoIterator<Item = CameraCommand>) {
        self.commands.clear();
        self.commands.extend(commands);
    }

    /// First command of `axis` (a priority-ordered list) that is active.
    pub fn first_of(&self, axis: &[CameraCommand]) -> Option<CameraCommand> {
        axis.iter().copied().find(|cmd| self.contains(*cmd))
    }
}

impl FromIterator<CameraCommand> for ActiveCommands {
    fn from_iter<T: IntoIterator<Item = CameraCommand>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_command_name() {
        for cmd in CameraCommand::ALL {
            assert_eq!(cmd.name().parse::<CameraCommand>(), Ok(cmd));
        }
    }

    #[test]
    fn test_parse_is_case_and_space_insensitive() {
        assert_eq!(
            "  Zoom_Out ".parse::<CameraCommand>(),
            Ok(CameraCommand::ZoomOut)
        );
    }

    #[test]
    fn test_parse_unknown_fails() {
        assert!("jump".parse::<CameraCommand>().is_err());
    }

    #[test]
    fn test_first_of_respects_priority() {
        let both: ActiveCommands = [CameraCommand::ZoomIn, CameraCommand::ZoomOut]
            .into_iter()
            .collect();
        assert_eq!(both.first_of(&ZOOM_AXIS), Some(CameraCommand::ZoomOut));

        let only_in = ActiveCommands::new().with(CameraCommand::ZoomIn);
        assert_eq!(only_in.first_of(&ZOOM_AXIS), Some(CameraCommand::ZoomIn));

        let none = ActiveCommands::new().with(CameraCommand::Reset);
        assert_eq!(none.first_of(&ZOOM_AXIS), None);
    }

    #[test]
    fn test_set_replaces_previous_frame() {
        let mut active = ActiveCommands::new().with(CameraCommand::PanLeft);
        active.set([CameraCommand::PanUp, CameraCommand::PanUp]);
        assert!(!active.contains(CameraCommand::PanLeft));
        assert!(active.contains(CameraCommand::PanUp));
        assert_eq!(active.len(), 1);
    }
}
