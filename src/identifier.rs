//! Validated Matrix identifier types and the grammar classifier.
//!
//! Every primary identifier has the shape `<sigil><localpart>:<server_name>`
//! with the first unescaped `:` acting as the separator. Event IDs are the
//! exception: modern room versions use `$opaque` forms with no server part,
//! so the tail is optional there.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_IDENTIFIER_LENGTH;
use crate::encoding::find_opaque_char;
use crate::error::IdentifierError;
use crate::server_name::ServerName;
use crate::sigil::Sigil;

/// Splits and validates `<sigil><localpart>:<server_name>`.
///
/// Checks, in order: non-empty, length cap, `encodeURI` transparency, the
/// expected sigil, the `:` separator, localpart shape, server name grammar.
fn split_validated(
    input: &str,
    expected: Sigil,
    require_localpart: bool,
) -> Result<(String, ServerName), IdentifierError> {
    let body = validate_prefix(input, expected)?;

    let colon_idx = body.find(':').ok_or(IdentifierError::MissingServerPart)?;
    let localpart = &body[..colon_idx];
    let server_str = &body[colon_idx + 1..];

    if require_localpart && localpart.is_empty() {
        return Err(IdentifierError::EmptyLocalpart);
    }
    validate_localpart(localpart)?;

    let server =
        ServerName::parse(server_str).map_err(IdentifierError::InvalidServerName)?;

    Ok((localpart.to_string(), server))
}

/// Common prefix validation; returns the body after the sigil.
fn validate_prefix(input: &str, expected: Sigil) -> Result<&str, IdentifierError> {
    if input.is_empty() {
        return Err(IdentifierError::Empty);
    }

    if input.len() > MAX_IDENTIFIER_LENGTH {
        return Err(IdentifierError::TooLong {
            max: MAX_IDENTIFIER_LENGTH,
            actual: input.len(),
        });
    }

    if let Some((position, char)) = find_opaque_char(input) {
        return Err(IdentifierError::OpaqueChar { char, position });
    }

    let first = input.chars().next().ok_or(IdentifierError::Empty)?;
    match Sigil::from_char(first) {
        Some(found) if found == expected => Ok(&input[first.len_utf8()..]),
        Some(found) => Err(IdentifierError::WrongSigil { expected, found }),
        None => Err(IdentifierError::MissingSigil { found: Some(first) }),
    }
}

/// Localparts must not contain path separators; the permalink splitter and
/// the web deep-link formats both treat `/` as structural.
fn validate_localpart(localpart: &str) -> Result<(), IdentifierError> {
    if let Some(position) = localpart.find('/') {
        return Err(IdentifierError::InvalidLocalpart {
            char: '/',
            position,
        });
    }
    Ok(())
}

macro_rules! identifier_common_impls {
    ($ty:ident) => {
        impl $ty {
            /// Returns the localpart (between the sigil and the separator).
            #[must_use]
            pub fn localpart(&self) -> &str {
                &self.localpart
            }

            /// Returns the server name.
            #[must_use]
            pub const fn server(&self) -> &ServerName {
                &self.server
            }

            /// Returns the canonical identifier string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.normalized
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.normalized)
            }
        }

        impl FromStr for $ty {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.normalized
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = IdentifierError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }
    };
}

/// A human-readable room alias, e.g. `#rust:matrix.org`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomAlias {
    localpart: String,
    server: ServerName,
    normalized: String,
}

impl RoomAlias {
    /// The sigil for room aliases.
    pub const SIGIL: Sigil = Sigil::RoomAlias;

    /// Parses a room alias.
    ///
    /// The localpart may be empty; some historical aliases have one, and the
    /// grammar here follows the lenient alias rules.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the sigil, separator, encoding, or
    /// server name is invalid.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let (localpart, server) = split_validated(input, Self::SIGIL, false)?;
        Ok(Self {
            localpart,
            server,
            normalized: input.to_string(),
        })
    }
}

identifier_common_impls!(RoomAlias);

/// An opaque room ID, e.g. `!qporfwt:matrix.org`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId {
    localpart: String,
    server: ServerName,
    normalized: String,
}

impl RoomId {
    /// The sigil for room IDs.
    pub const SIGIL: Sigil = Sigil::RoomId;

    /// Parses a room ID.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the sigil, separator, encoding, or
    /// server name is invalid.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let (localpart, server) = split_validated(input, Self::SIGIL, false)?;
        Ok(Self {
            localpart,
            server,
            normalized: input.to_string(),
        })
    }
}

identifier_common_impls!(RoomId);

/// A user ID, e.g. `@alice:example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId {
    localpart: String,
    server: ServerName,
    normalized: String,
}

impl UserId {
    /// The sigil for user IDs.
    pub const SIGIL: Sigil = Sigil::User;

    /// Parses a user ID. The localpart must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the sigil, separator, encoding,
    /// localpart, or server name is invalid.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let (localpart, server) = split_validated(input, Self::SIGIL, true)?;
        Ok(Self {
            localpart,
            server,
            normalized: input.to_string(),
        })
    }
}

identifier_common_impls!(UserId);

/// A group (community) ID, e.g. `+rust:matrix.org`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId {
    localpart: String,
    server: ServerName,
    normalized: String,
}

impl GroupId {
    /// The sigil for group IDs.
    pub const SIGIL: Sigil = Sigil::Group;

    /// Parses a group ID. The localpart must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the sigil, separator, encoding,
    /// localpart, or server name is invalid.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let (localpart, server) = split_validated(input, Self::SIGIL, true)?;
        Ok(Self {
            localpart,
            server,
            normalized: input.to_string(),
        })
    }
}

identifier_common_impls!(GroupId);

/// An event ID, e.g. `$1560174708:example.com` or the modern `$opaquehash`
/// form with no server part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId {
    local: String,
    server: Option<ServerName>,
    normalized: String,
}

impl EventId {
    /// The sigil for event IDs.
    pub const SIGIL: Sigil = Sigil::Event;

    /// Parses an event ID.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the sigil or encoding is invalid, the
    /// local part is empty, or a server part is present but malformed.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let body = validate_prefix(input, Self::SIGIL)?;

        let (local, server) = match body.find(':') {
            Some(colon_idx) => {
                let server = ServerName::parse(&body[colon_idx + 1..])
                    .map_err(IdentifierError::InvalidServerName)?;
                (&body[..colon_idx], Some(server))
            }
            None => (body, None),
        };

        if local.is_empty() {
            return Err(IdentifierError::EmptyLocalpart);
        }
        validate_localpart(local)?;

        Ok(Self {
            local: local.to_string(),
            server,
            normalized: input.to_string(),
        })
    }

    /// Returns the opaque local part.
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Returns the server name, absent for modern opaque event IDs.
    #[must_use]
    pub const fn server(&self) -> Option<&ServerName> {
        self.server.as_ref()
    }

    /// Returns the canonical identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for EventId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for EventId {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// One of the four primary identifier kinds, classified by sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatrixId {
    /// A room alias (`#`)
    RoomAlias(RoomAlias),
    /// A room ID (`!`)
    RoomId(RoomId),
    /// A user ID (`@`)
    User(UserId),
    /// A group ID (`+`)
    Group(GroupId),
}

impl MatrixId {
    /// Parses a primary identifier, dispatching on its sigil.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError::MissingSigil` when the first character is
    /// not one of `#`, `!`, `@`, `+`, and the kind-specific error otherwise.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        match input.chars().next() {
            Some('#') => RoomAlias::parse(input).map(Self::RoomAlias),
            Some('!') => RoomId::parse(input).map(Self::RoomId),
            Some('@') => UserId::parse(input).map(Self::User),
            Some('+') => GroupId::parse(input).map(Self::Group),
            Some(c) => Err(IdentifierError::MissingSigil { found: Some(c) }),
            None => Err(IdentifierError::Empty),
        }
    }

    /// Returns the identifier's sigil.
    #[must_use]
    pub const fn sigil(&self) -> Sigil {
        match self {
            Self::RoomAlias(_) => Sigil::RoomAlias,
            Self::RoomId(_) => Sigil::RoomId,
            Self::User(_) => Sigil::User,
            Self::Group(_) => Sigil::Group,
        }
    }

    /// Returns the server name embedded in the identifier.
    #[must_use]
    pub const fn server(&self) -> &ServerName {
        match self {
            Self::RoomAlias(id) => id.server(),
            Self::RoomId(id) => id.server(),
            Self::User(id) => id.server(),
            Self::Group(id) => id.server(),
        }
    }

    /// Returns the canonical identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RoomAlias(id) => id.as_str(),
            Self::RoomId(id) => id.as_str(),
            Self::User(id) => id.as_str(),
            Self::Group(id) => id.as_str(),
        }
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatrixId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MatrixId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MatrixId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// The room-only subset of the grammar: alias or room ID.
///
/// Permalinks are restricted to this subset for their room half; a
/// permalink whose room half classifies as anything else is a parse error,
/// not a silent fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomTarget {
    /// Addressed by alias
    Alias(RoomAlias),
    /// Addressed by room ID
    Id(RoomId),
}

impl RoomTarget {
    /// Parses a room alias or room ID, dispatching on the sigil.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the input is not a valid room alias or
    /// room ID. A valid non-room identifier yields `WrongSigil`.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        match input.chars().next() {
            Some('#') => RoomAlias::parse(input).map(Self::Alias),
            Some('!') => RoomId::parse(input).map(Self::Id),
            Some(c) => match Sigil::from_char(c) {
                Some(found) => Err(IdentifierError::WrongSigil {
                    expected: Sigil::RoomId,
                    found,
                }),
                None => Err(IdentifierError::MissingSigil { found: Some(c) }),
            },
            None => Err(IdentifierError::Empty),
        }
    }

    /// Returns the target's sigil.
    #[must_use]
    pub const fn sigil(&self) -> Sigil {
        match self {
            Self::Alias(_) => Sigil::RoomAlias,
            Self::Id(_) => Sigil::RoomId,
        }
    }

    /// Returns the server name embedded in the identifier.
    #[must_use]
    pub const fn server(&self) -> &ServerName {
        match self {
            Self::Alias(id) => id.server(),
            Self::Id(id) => id.server(),
        }
    }

    /// Returns the canonical identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alias(id) => id.as_str(),
            Self::Id(id) => id.as_str(),
        }
    }
}

impl fmt::Display for RoomTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classification result of the full identifier grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// `#localpart:server`
    RoomAlias,
    /// `!localpart:server`
    RoomId,
    /// `@localpart:server`
    UserId,
    /// `+localpart:server`
    GroupId,
    /// `room/$event`
    Permalink,
}

impl IdentifierKind {
    /// Classifies an identifier string against the grammar.
    ///
    /// The permalink pattern is checked first since it structurally contains
    /// one of the plain room forms; the remaining patterns are mutually
    /// exclusive by sigil.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` for any string no pattern accepts,
    /// including anything that fails the `encodeURI` round-trip check.
    pub fn classify(input: &str) -> Result<Self, IdentifierError> {
        if let Some(slash_idx) = permalink_split(input) {
            RoomTarget::parse(&input[..slash_idx])?;
            EventId::parse(&input[slash_idx + 1..])?;
            return Ok(Self::Permalink);
        }

        match MatrixId::parse(input)? {
            MatrixId::RoomAlias(_) => Ok(Self::RoomAlias),
            MatrixId::RoomId(_) => Ok(Self::RoomId),
            MatrixId::User(_) => Ok(Self::UserId),
            MatrixId::Group(_) => Ok(Self::GroupId),
        }
    }
}

/// Returns the index of the `/` separating a permalink's room half from its
/// event half.
///
/// Fires for any sigil-led input containing a separator so that a permalink
/// built on a non-room identifier is diagnosed as such rather than failing
/// as a garbled plain identifier.
pub(crate) fn permalink_split(input: &str) -> Option<usize> {
    let first = input.chars().next()?;
    Sigil::from_char(first)?;
    input.find('/')
}
