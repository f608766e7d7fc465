//! The parsed link type and the fragment parser.

use std::fmt;
use std::str::FromStr;

use crate::args::LinkArgs;
use crate::constants::{FRAGMENT_PREFIX, MAX_FRAGMENT_LENGTH};
use crate::error::{IdentifierError, LinkError, LinkErrorKind};
use crate::identifier::{permalink_split, EventId, GroupId, MatrixId, RoomTarget, UserId};
use crate::server_name::ServerName;
use crate::sigil::Sigil;

/// The kind of resource a link addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A room addressed by alias
    RoomAlias,
    /// A room addressed by ID
    RoomId,
    /// A user
    UserId,
    /// A group
    GroupId,
    /// An event within a room
    Permalink,
}

/// The resource a link points at.
///
/// The event half of a permalink exists only in the `Event` variant, so
/// "`eventId` present iff permalink" is a structural fact rather than a
/// runtime invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// A room, by alias or ID
    Room(RoomTarget),
    /// A user
    User(UserId),
    /// A group
    Group(GroupId),
    /// An event within a room (a permalink)
    Event {
        /// The room half of the permalink
        room: RoomTarget,
        /// The event half of the permalink
        event: EventId,
    },
}

impl LinkTarget {
    /// Returns the link kind this target represents.
    #[must_use]
    pub const fn kind(&self) -> LinkKind {
        match self {
            Self::Room(RoomTarget::Alias(_)) => LinkKind::RoomAlias,
            Self::Room(RoomTarget::Id(_)) => LinkKind::RoomId,
            Self::User(_) => LinkKind::UserId,
            Self::Group(_) => LinkKind::GroupId,
            Self::Event { .. } => LinkKind::Permalink,
        }
    }

    /// Returns the primary identifier string (the room half for permalinks).
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Room(room) | Self::Event { room, .. } => room.as_str(),
            Self::User(user) => user.as_str(),
            Self::Group(group) => group.as_str(),
        }
    }

    /// Returns the server name embedded in the primary identifier.
    #[must_use]
    pub const fn server(&self) -> &ServerName {
        match self {
            Self::Room(room) | Self::Event { room, .. } => room.server(),
            Self::User(user) => user.server(),
            Self::Group(group) => group.server(),
        }
    }

    /// Returns the event half, present only for permalinks.
    #[must_use]
    pub const fn event(&self) -> Option<&EventId> {
        match self {
            Self::Event { event, .. } => Some(event),
            _ => None,
        }
    }
}

impl From<MatrixId> for LinkTarget {
    fn from(id: MatrixId) -> Self {
        match id {
            MatrixId::RoomAlias(alias) => Self::Room(RoomTarget::Alias(alias)),
            MatrixId::RoomId(room) => Self::Room(RoomTarget::Id(room)),
            MatrixId::User(user) => Self::User(user),
            MatrixId::Group(group) => Self::Group(group),
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event { room, event } => write!(f, "{room}/{event}"),
            other => write!(f, "{}", other.identifier()),
        }
    }
}

/// A parsed, validated link to a federated resource.
///
/// A `Link` is immutable once constructed; equality is structural. The
/// candidate server list is computed at construction: the identifier's own
/// server first, then the `via` arguments deduplicated in first-seen order
/// (byte-wise comparison).
///
/// # Examples
///
/// ```
/// use matrix_link::{Link, LinkKind};
///
/// let link = Link::parse_fragment("#/@alice:example.com").unwrap();
/// assert_eq!(link.kind(), LinkKind::UserId);
/// assert_eq!(link.identifier(), "@alice:example.com");
///
/// let link = Link::parse_fragment("#/!room:example.org?via=a.org&via=a.org").unwrap();
/// let servers: Vec<_> = link.servers().iter().map(|s| s.as_str()).collect();
/// assert_eq!(servers, ["example.org", "a.org"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    target: LinkTarget,
    args: LinkArgs,
    servers: Vec<ServerName>,
    /// Normalized fragment representation
    normalized: String,
}

impl Link {
    /// Parses a URL fragment of the form `#/<identifier>[/<eventId>]?<query>`.
    ///
    /// The parser never panics; every malformed input is reported as a
    /// [`LinkError`] carrying the raw input for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns `LinkError` if:
    /// - The fragment is empty or exceeds the maximum length
    /// - The `#/` prefix is absent
    /// - The identifier fails the grammar (including the `encodeURI`
    ///   round-trip check)
    /// - A permalink's room half is not a room alias or room ID
    /// - The query arguments are malformed
    pub fn parse_fragment(input: &str) -> Result<Self, LinkError> {
        Self::parse_inner(input).map_err(|kind| LinkError {
            input: input.to_string(),
            kind,
        })
    }

    /// Creates a link from its components.
    #[must_use]
    pub fn new(target: LinkTarget, args: LinkArgs) -> Self {
        let servers = Self::compute_servers(&target, &args);
        let normalized = Self::normalize(&target, &args);
        Self {
            target,
            args,
            servers,
            normalized,
        }
    }

    /// Returns the link kind.
    #[must_use]
    pub const fn kind(&self) -> LinkKind {
        self.target.kind()
    }

    /// Returns the target resource.
    #[must_use]
    pub const fn target(&self) -> &LinkTarget {
        &self.target
    }

    /// Returns the canonical primary identifier string.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.target.identifier()
    }

    /// Returns the event ID, present only for permalinks.
    #[must_use]
    pub const fn event_id(&self) -> Option<&EventId> {
        self.target.event()
    }

    /// Returns the candidate servers: the identifier's own server followed
    /// by deduplicated `via` servers in first-seen order.
    #[must_use]
    pub fn servers(&self) -> &[ServerName] {
        &self.servers
    }

    /// Returns the query arguments.
    #[must_use]
    pub const fn args(&self) -> &LinkArgs {
        &self.args
    }

    /// Returns the originating client ID, if the link carried one.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.args.client()
    }

    /// Returns the sharer identifier, if the link carried one.
    #[must_use]
    pub fn sharer(&self) -> Option<&str> {
        self.args.sharer()
    }

    /// Returns the requested (untrusted) web instance for a client ID.
    #[must_use]
    pub fn web_instance(&self, client_id: &str) -> Option<&str> {
        self.args.web_instance(client_id)
    }

    /// Returns the normalized fragment string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    fn parse_inner(input: &str) -> Result<Self, LinkErrorKind> {
        if input.is_empty() {
            return Err(LinkErrorKind::Empty);
        }

        if input.len() > MAX_FRAGMENT_LENGTH {
            return Err(LinkErrorKind::TooLong {
                max: MAX_FRAGMENT_LENGTH,
                actual: input.len(),
            });
        }

        let (link_part, query_part) = match input.find('?') {
            Some(q_idx) => (&input[..q_idx], &input[q_idx + 1..]),
            None => (input, ""),
        };

        let body = link_part.strip_prefix(FRAGMENT_PREFIX).ok_or_else(|| {
            LinkErrorKind::MissingPrefix {
                found: Some(link_part.chars().take(2).collect()),
            }
        })?;

        let target = Self::parse_target(body)?;
        let args = LinkArgs::parse(query_part).map_err(LinkErrorKind::InvalidArguments)?;

        Ok(Self::new(target, args))
    }

    fn parse_target(body: &str) -> Result<LinkTarget, LinkErrorKind> {
        if let Some(slash_idx) = permalink_split(body) {
            let room = RoomTarget::parse(&body[..slash_idx]).map_err(|e| match e {
                IdentifierError::WrongSigil { found, .. } => {
                    LinkErrorKind::PermalinkRoomKind { found }
                }
                other => LinkErrorKind::InvalidPermalinkRoom(other),
            })?;
            let event = EventId::parse(&body[slash_idx + 1..])
                .map_err(LinkErrorKind::InvalidEventId)?;
            return Ok(LinkTarget::Event { room, event });
        }

        MatrixId::parse(body)
            .map(LinkTarget::from)
            .map_err(LinkErrorKind::InvalidIdentifier)
    }

    fn compute_servers(target: &LinkTarget, args: &LinkArgs) -> Vec<ServerName> {
        let mut servers = vec![target.server().clone()];
        for via in args.vias() {
            if !servers.iter().any(|s| s.as_str() == via.as_str()) {
                servers.push(via.clone());
            }
        }
        servers
    }

    fn normalize(target: &LinkTarget, args: &LinkArgs) -> String {
        let mut result = format!("{FRAGMENT_PREFIX}{target}");
        if !args.is_empty() {
            result.push('?');
            result.push_str(&args.to_string());
        }
        result
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for Link {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_fragment(s)
    }
}

impl AsRef<str> for Link {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for Link {
    type Error = LinkError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse_fragment(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Link {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Link {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_fragment(&s).map_err(serde::de::Error::custom)
    }
}

impl LinkError {
    /// Suggests plausible reinterpretations of a failed link.
    ///
    /// Probes the raw identifier with each of the `@`, `#`, `!` sigils
    /// prepended and returns every candidate that validates, so a UI can
    /// offer "did you mean" corrections next to the failure notice.
    #[must_use]
    pub fn suggestions(&self) -> Vec<Link> {
        let link_part = self.input.split('?').next().unwrap_or("");
        let body = link_part
            .strip_prefix(FRAGMENT_PREFIX)
            .unwrap_or(link_part);

        let mut suggestions = Vec::new();
        for sigil in [Sigil::User, Sigil::RoomAlias, Sigil::RoomId] {
            let candidate = format!("{sigil}{body}");
            if let Ok(id) = MatrixId::parse(&candidate) {
                suggestions.push(Link::new(LinkTarget::from(id), LinkArgs::new()));
            }
        }
        suggestions
    }
}
