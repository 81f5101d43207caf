//! Single-byte terminal commands

/// Byte that resets the servo (carriage return, sent by ENTER)
pub const RESET_BYTE: u8 = b'\r';

/// Commands decoded from one input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `,` - one step counter-clockwise
    StepDown,
    /// `.` - one step clockwise
    StepUp,
    /// SPACE - middle of the bound range
    Center,
    /// ENTER - restore startup width and bounds
    Reset,
    /// `<` - set counter-clockwise limit at the current width
    SetMin,
    /// `>` - set clockwise limit at the current width
    SetMax,
    /// `0`-`9` - relative position between the limits
    Position(u8),
    /// Anything else
    Invalid(u8),
}

impl Command {
    /// Decode a raw input byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b',' => Command::StepDown,
            b'.' => Command::StepUp,
            b' ' => Command::Center,
            RESET_BYTE => Command::Reset,
            b'<' => Command::SetMin,
            b'>' => Command::SetMax,
            b'0'..=b'9' => Command::Position(byte - b'0'),
            other => Command::Invalid(other),
        }
    }
}

impl From<u8> for Command {
    fn from(byte: u8) -> Self {
        Command::from_byte(byte)
    }
}
