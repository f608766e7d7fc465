//! Error types for Matrix link parsing.

use std::fmt;

use crate::sigil::Sigil;

/// Errors that can occur when parsing a link fragment.
///
/// The original input is always preserved so callers can echo the raw link
/// back to the user ("this link looks wrong") and probe for corrections via
/// [`LinkError::suggestions`](crate::Link).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: LinkErrorKind,
}

/// Specific link parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkErrorKind {
    /// Fragment is empty
    Empty,
    /// Fragment exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Missing the `#/` navigational prefix
    MissingPrefix {
        /// What the fragment started with instead, if anything
        found: Option<String>,
    },
    /// The primary identifier failed the grammar
    InvalidIdentifier(IdentifierError),
    /// The room half of a permalink failed the room-only grammar
    InvalidPermalinkRoom(IdentifierError),
    /// The room half of a permalink parsed, but as a non-room kind
    PermalinkRoomKind {
        /// The sigil that was found
        found: Sigil,
    },
    /// The event half of a permalink failed the grammar
    InvalidEventId(IdentifierError),
    /// The query string failed to parse
    InvalidArguments(ArgsError),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse link '{}': ", self.input)?;
        match &self.kind {
            LinkErrorKind::Empty => write!(f, "input is empty"),
            LinkErrorKind::TooLong { max, actual } => {
                write!(f, "fragment length {actual} exceeds maximum {max}")
            }
            LinkErrorKind::MissingPrefix { found } => match found {
                Some(s) => write!(f, "expected prefix '#/', found '{s}'"),
                None => write!(f, "missing prefix; links must start with '#/'"),
            },
            LinkErrorKind::InvalidIdentifier(e) => write!(f, "invalid identifier: {e}"),
            LinkErrorKind::InvalidPermalinkRoom(e) => {
                write!(f, "invalid room in permalink: {e}")
            }
            LinkErrorKind::PermalinkRoomKind { found } => {
                write!(
                    f,
                    "permalink must reference a room alias or room ID, found '{found}' identifier"
                )
            }
            LinkErrorKind::InvalidEventId(e) => write!(f, "invalid event ID: {e}"),
            LinkErrorKind::InvalidArguments(e) => write!(f, "invalid query arguments: {e}"),
        }
    }
}

impl std::error::Error for LinkError {}

/// Errors for identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifier is empty
    Empty,
    /// Identifier exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// First character is not a recognized sigil
    MissingSigil {
        /// The character that was found, if any
        found: Option<char>,
    },
    /// The sigil does not match the expected identifier kind
    WrongSigil {
        /// The expected sigil
        expected: Sigil,
        /// The sigil that was found
        found: Sigil,
    },
    /// A character the `encodeURI` round-trip would alter
    OpaqueChar {
        /// The offending character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// No `:` separator between localpart and server name
    MissingServerPart,
    /// The localpart is empty where the kind requires one
    EmptyLocalpart,
    /// The localpart contains a character forbidden at this position
    InvalidLocalpart {
        /// The offending character
        char: char,
        /// Position in the localpart
        position: usize,
    },
    /// The server name failed to parse
    InvalidServerName(ServerNameError),
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "identifier length {actual} exceeds maximum {max}")
            }
            Self::MissingSigil { found } => match found {
                Some(c) => write!(f, "missing identifier sigil; found '{c}'"),
                None => write!(f, "missing identifier sigil"),
            },
            Self::WrongSigil { expected, found } => {
                write!(f, "expected sigil '{expected}', found '{found}'")
            }
            Self::OpaqueChar { char, position } => {
                write!(
                    f,
                    "character '{char}' at position {position} would not survive URI encoding; escape it or remove it"
                )
            }
            Self::MissingServerPart => {
                write!(f, "missing ':' separator between localpart and server name")
            }
            Self::EmptyLocalpart => write!(f, "localpart cannot be empty"),
            Self::InvalidLocalpart { char, position } => {
                write!(f, "invalid character '{char}' at localpart position {position}")
            }
            Self::InvalidServerName(e) => write!(f, "invalid server name: {e}"),
        }
    }
}

impl std::error::Error for IdentifierError {}

/// Errors for server name parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerNameError {
    /// Server name is empty
    Empty,
    /// Server name exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Invalid domain name
    InvalidDomain {
        /// The invalid domain
        domain: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Invalid IP address
    InvalidIpAddress {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Invalid port number
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// DNS label too long
    LabelTooLong {
        /// The too-long label
        label: String,
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Invalid character in domain
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for ServerNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "server name cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "server name length {actual} exceeds maximum {max}")
            }
            Self::InvalidDomain { domain, reason } => {
                write!(f, "invalid domain '{domain}': {reason}")
            }
            Self::InvalidIpAddress { value, reason } => {
                write!(f, "invalid IP address '{value}': {reason}")
            }
            Self::InvalidPort { value, reason } => {
                write!(f, "invalid port '{value}': {reason}")
            }
            Self::LabelTooLong { label, max, actual } => {
                write!(f, "DNS label '{label}' is {actual} chars, max is {max}")
            }
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for ServerNameError {}

/// Errors for query argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Invalid percent encoding
    InvalidPercentEncoding {
        /// The invalid value
        value: String,
    },
    /// A `via` value is not a valid server name
    InvalidViaServer {
        /// The invalid value
        value: String,
        /// The underlying server name error
        source: ServerNameError,
    },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPercentEncoding { value } => {
                write!(f, "invalid percent encoding in '{value}'")
            }
            Self::InvalidViaServer { value, source } => {
                write!(f, "invalid via server '{value}': {source}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}
