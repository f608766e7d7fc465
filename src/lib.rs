//! Parser and validator for Matrix resource identifiers and link fragments.
//!
//! This crate implements parsing, validation, and serialization of the
//! shareable link fragments used to point at federated Matrix resources:
//! rooms, users, groups, and single events.
//!
//! # Overview
//!
//! A link fragment has the structure:
//!
//! ```text
//! #/<identifier>[/<eventId>]?<query>
//! ```
//!
//! where the identifier is one of the five grammar shapes (`#alias`,
//! `!roomId`, `@userId`, `+groupId`, or a `room/$event` permalink) and the
//! query carries routing hints (`via`), the originating client, the sharer,
//! and per-client web-instance overrides.
//!
//! # Quick Start
//!
//! ```rust
//! use matrix_link::{Link, LinkKind};
//!
//! // Parse a link fragment
//! let link = Link::parse_fragment(
//!     "#/!room:example.org/$event:example.org?via=a.org&via=b.org"
//! ).unwrap();
//!
//! // Access components
//! assert_eq!(link.kind(), LinkKind::Permalink);
//! assert_eq!(link.identifier(), "!room:example.org");
//! let servers: Vec<_> = link.servers().iter().map(|s| s.as_str()).collect();
//! assert_eq!(servers, ["example.org", "a.org", "b.org"]);
//! ```
//!
//! # Builder Pattern
//!
//! Links can also be assembled from validated components:
//!
//! ```rust
//! use matrix_link::{LinkBuilder, RoomTarget, ServerName};
//!
//! let link = LinkBuilder::new()
//!     .room(RoomTarget::parse("#rust:matrix.org").unwrap())
//!     .via(ServerName::parse("a.org").unwrap())
//!     .build();
//!
//! assert_eq!(link.to_string(), "#/#rust:matrix.org?via=a.org");
//! ```
//!
//! # Failure Model
//!
//! Parsing never panics. Every malformed input is reported as a
//! [`LinkError`] that keeps the raw input for diagnostic display, and
//! [`LinkError::suggestions`] probes sigil-insertion corrections for
//! "did you mean" UI affordances.
//!
//! # Grammar Notes
//!
//! - Identifiers must survive an exact `encodeURI` round-trip: any
//!   character the encoder would alter (whitespace, `%`, non-ASCII) is a
//!   grammar rejection, which guards against unescaped reserved characters
//!   and truncated escapes.
//! - Server names are compared byte-for-byte; casing is preserved.
//! - Event IDs accept both `$local:server` and modern opaque `$hash` forms.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod args;
mod builder;
mod constants;
mod encoding;
mod error;
mod identifier;
mod link;
pub mod prelude;
mod server_name;
mod sigil;

pub use args::LinkArgs;
pub use builder::{LinkBuilder, TargetedLinkBuilder};
pub use constants::{
    FRAGMENT_PREFIX, MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH, MAX_FRAGMENT_LENGTH,
    MAX_IDENTIFIER_LENGTH, MAX_SERVER_NAME_LENGTH,
};
pub use error::{ArgsError, IdentifierError, LinkError, LinkErrorKind, ServerNameError};
pub use identifier::{
    EventId, GroupId, IdentifierKind, MatrixId, RoomAlias, RoomId, RoomTarget, UserId,
};
pub use link::{Link, LinkKind, LinkTarget};
pub use server_name::{Host, ServerName};
pub use sigil::Sigil;
