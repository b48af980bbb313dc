use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Borrowing an already-borrowed book, returning an available one, or
    // removing a book that is currently out.
    InvalidState {
        message: String,
    },
    Unauthorized {
        message: String,
    },
    MembershipExpired {
        message: String,
    },
    // Duplicate business key or stale record version.
    Conflict {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn invalid_state(message: &str) -> LibraryError {
        LibraryError::InvalidState { message: message.to_string() }
    }

    pub fn unauthorized(message: &str) -> LibraryError {
        LibraryError::Unauthorized { message: message.to_string() }
    }

    pub fn membership_expired(message: &str) -> LibraryError {
        LibraryError::MembershipExpired { message: message.to_string() }
    }

    pub fn conflict(message: &str) -> LibraryError {
        LibraryError::Conflict { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn recoverable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => true,
            LibraryError::InvalidState { .. } => true,
            LibraryError::Unauthorized { .. } => true,
            LibraryError::MembershipExpired { .. } => true,
            LibraryError::Conflict { .. } => true,
            LibraryError::Validation { .. } => true,
            LibraryError::Serialization { .. } => false,
            LibraryError::Runtime { .. } => false,
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidState { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Unauthorized { message } => {
                write!(f, "{}", message)
            }
            LibraryError::MembershipExpired { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Conflict { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for registry operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum UserKind {
    Patron,
    Librarian,
}

impl From<String> for UserKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Librarian" => UserKind::Librarian,
            _ => UserKind::Patron,
        }
    }
}

impl Display for UserKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UserKind::Patron => write!(f, "Patron"),
            UserKind::Librarian => write!(f, "Librarian"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchField {
    Title,
    Author,
    Isbn,
}

impl From<String> for SearchField {
    fn from(s: String) -> Self {
        match s.as_str() {
            "author" => SearchField::Author,
            "isbn" => SearchField::Isbn,
            _ => SearchField::Title,
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Isbn => write!(f, "isbn"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum SortField {
    Title,
    Author,
}

impl From<String> for SortField {
    fn from(s: String) -> Self {
        match s.as_str() {
            "author" => SortField::Author,
            _ => SortField::Title,
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Title => write!(f, "title"),
            SortField::Author => write!(f, "author"),
        }
    }
}
