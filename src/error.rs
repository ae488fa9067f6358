use thiserror::Error;

/// Coarse classification of every [`Error`], used by the command boundary to
/// pick a message style and an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidState,
    InvalidInput,
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Classroom {0} doesn't exist")]
    ClassroomNotFound(String),

    #[error("Student {student} is not enrolled in {classroom}")]
    StudentNotFound { student: String, classroom: String },

    #[error("No students enrolled in {0}")]
    NoStudents(String),

    #[error("Classroom {0} already exists")]
    ClassroomExists(String),

    #[error("Student {student} already enrolled in {classroom}")]
    StudentExists { student: String, classroom: String },

    #[error("No assignment scheduled for {0}")]
    NoAssignment(String),

    #[error("Assignment hasn't been given in {0}")]
    NotYetAssigned(String),

    #[error("Assignment already submitted by Student {student} in {classroom}")]
    AlreadySubmitted { student: String, classroom: String },

    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    #[error("{field} field missing for '{command}'")]
    MissingArgument { command: String, field: &'static str },

    #[error("File could not be read or written: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse roster JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ClassroomNotFound(_) | Error::StudentNotFound { .. } | Error::NoStudents(_) => ErrorKind::NotFound,
            Error::ClassroomExists(_) | Error::StudentExists { .. } => ErrorKind::AlreadyExists,
            Error::NoAssignment(_) | Error::NotYetAssigned(_) | Error::AlreadySubmitted { .. } => ErrorKind::InvalidState,
            Error::UnknownCommand(_) | Error::MissingArgument { .. } => ErrorKind::InvalidInput,
            Error::IoError(_) | Error::DeserializationError(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
