use thiserror::Error;

/// Problems with the farm description. Always fatal, raised before any routing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("no data in input")]
    Empty,
    #[error("invalid number of ants: {0}")]
    InvalidAntCount(String),
    #[error("empty line inside data at line {0}")]
    EmptyLine(usize),
    #[error("invalid line {line}: {content}")]
    InvalidLine { line: usize, content: String },
    #[error("unknown command {0} (only ##start and ##end are allowed)")]
    UnknownCommand(String),
    #[error("command {0} appears more than once")]
    RepeatedCommand(&'static str),
    #[error("command {0} is not followed by a room")]
    DanglingCommand(&'static str),
    #[error("invalid room name: {0}")]
    InvalidRoomName(String),
    #[error("room {0} is declared twice")]
    DuplicateRoom(String),
    #[error("room {0} does not exist")]
    UnknownRoom(String),
    #[error("tunnel from {0} to itself")]
    SelfLoop(String),
    #[error("tunnel {0}-{1} is declared twice")]
    DuplicateTunnel(String, String),
    #[error("no start room found")]
    MissingStart,
    #[error("no end room found")]
    MissingEnd,
    #[error("start and end are the same room: {0}")]
    SameStartEnd(String),
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum LeminError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid data format, {0}")]
    Input(#[from] InputError),
    #[error("no path from {start} to {end}")]
    NoPath { start: String, end: String },
    #[error("no usable path survived selection")]
    NoUsablePath,
    #[error("ant {ant} is planned on lane {lane}, which does not exist")]
    UnknownLane { ant: u32, lane: usize },
    /// A turn where nobody moved. Bundled schedules never reach it; plans
    /// whose lanes cross can.
    #[error("scheduling invariant broken: no ant moved on turn {turn}")]
    Stalled { turn: usize },
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, LeminError>;
