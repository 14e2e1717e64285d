/// Logical control inputs, decoded from the buttons by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Command {
    Start,
    Stop,
    Reset,
}

/// Run-state shown on the status LED after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Indicator {
    Running,
    Stopped,
    Off,
}

impl Command {
    pub fn indicator(self) -> Indicator {
        match self {
            Command::Start => Indicator::Running,
            Command::Stop => Indicator::Stopped,
            Command::Reset => Indicator::Off,
        }
    }
}

impl Indicator {
    /// The Pico has a single on-board LED, so only `Running` lights it.
    pub fn is_lit(self) -> bool {
        matches!(self, Indicator::Running)
    }
}
