//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use matrix_link::prelude::*;
//!
//! let link = Link::parse_fragment("#/#rust:matrix.org").unwrap();
//! assert_eq!(link.kind(), LinkKind::RoomAlias);
//! ```

pub use crate::{
    // Core types
    EventId, GroupId, Host, IdentifierKind, Link, LinkArgs, LinkKind, LinkTarget, MatrixId,
    RoomAlias, RoomId, RoomTarget, ServerName, Sigil, UserId,
    // Builder
    LinkBuilder, TargetedLinkBuilder,
    // Errors
    ArgsError, IdentifierError, LinkError, LinkErrorKind, ServerNameError,
    // Constants
    FRAGMENT_PREFIX, MAX_FRAGMENT_LENGTH, MAX_IDENTIFIER_LENGTH, MAX_SERVER_NAME_LENGTH,
};
