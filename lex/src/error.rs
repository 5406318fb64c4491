use thiserror::Error;

/// Problems found on a single source line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unknown command: `{0}`")]
    UnknownCommand(String),

    #[error("Missing argument {0} of `{1}`")]
    MissingArgument(usize, String),

    #[error("Invalid memory segment: `{0}`")]
    InvalidSegment(String),

    #[error("Cannot pop to constant segment")]
    WriteToConstant,

    #[error("Cannot parse `{0}` as number")]
    NumberParse(String),

    #[error("Index {0} of {1} segment is not between {2} and {3}")]
    NumberOutOfRange(i64, String, i64, i64),

    #[error("Extra argument ignored: `{0}`")]
    ExtraArgument(String),
}

impl LexError {
    /// Whether the offending line is dropped.
    pub fn rejects_line(&self) -> bool {
        !matches!(self, LexError::ExtraArgument(_))
    }

    /// Whether this error fails the whole run.
    /// Unknown commands only do so in strict mode.
    pub fn is_fatal(&self, strict: bool) -> bool {
        match self {
            LexError::UnknownCommand(_) => strict,
            LexError::ExtraArgument(_) => false,
            _ => true,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line {0}")]
    FileRead(usize, #[source] std::io::Error),

    #[error("Failed to serialize instructions")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to compile: {0} error(s)")]
    Failed(usize),
}
