//! Staged builder for programmatic link construction.
//!
//! The builder enforces "target first, arguments second" at compile time:
//! argument methods and `build` only exist once a target has been chosen,
//! so a target-less link cannot be expressed.

use crate::args::LinkArgs;
use crate::identifier::{EventId, GroupId, RoomTarget, UserId};
use crate::link::{Link, LinkTarget};
use crate::server_name::ServerName;

/// Entry stage of the builder: no target chosen yet.
///
/// # Examples
///
/// ```
/// use matrix_link::{LinkBuilder, RoomTarget, ServerName};
///
/// let room = RoomTarget::parse("#rust:matrix.org").unwrap();
/// let link = LinkBuilder::new()
///     .room(room)
///     .via(ServerName::parse("a.org").unwrap())
///     .client("element.io")
///     .build();
///
/// assert_eq!(link.to_string(), "#/#rust:matrix.org?via=a.org&client=element.io");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    _private: (),
}

/// Second stage of the builder: target chosen, arguments may be attached.
#[derive(Debug, Clone)]
pub struct TargetedLinkBuilder {
    target: LinkTarget,
    args: LinkArgs,
}

impl LinkBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary target.
    #[must_use]
    pub fn target(self, target: LinkTarget) -> TargetedLinkBuilder {
        TargetedLinkBuilder {
            target,
            args: LinkArgs::new(),
        }
    }

    /// Targets a room by alias or ID.
    #[must_use]
    pub fn room(self, room: RoomTarget) -> TargetedLinkBuilder {
        self.target(LinkTarget::Room(room))
    }

    /// Targets a user.
    #[must_use]
    pub fn user(self, user: UserId) -> TargetedLinkBuilder {
        self.target(LinkTarget::User(user))
    }

    /// Targets a group.
    #[must_use]
    pub fn group(self, group: GroupId) -> TargetedLinkBuilder {
        self.target(LinkTarget::Group(group))
    }

    /// Targets an event within a room (a permalink).
    #[must_use]
    pub fn permalink(self, room: RoomTarget, event: EventId) -> TargetedLinkBuilder {
        self.target(LinkTarget::Event { room, event })
    }
}

impl TargetedLinkBuilder {
    /// Appends a `via` routing server.
    #[must_use]
    pub fn via(mut self, server: ServerName) -> Self {
        self.args.push_via(server);
        self
    }

    /// Sets the originating client ID.
    #[must_use]
    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.args.set_client(client);
        self
    }

    /// Sets the sharer identifier.
    #[must_use]
    pub fn sharer(mut self, sharer: impl Into<String>) -> Self {
        self.args.set_sharer(sharer);
        self
    }

    /// Requests a web instance for a client ID.
    #[must_use]
    pub fn web_instance(
        mut self,
        client_id: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        self.args.set_web_instance(client_id, host);
        self
    }

    /// Attaches an unrecognized key/value pair.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push_extra(key, value);
        self
    }

    /// Builds the link.
    #[must_use]
    pub fn build(self) -> Link {
        Link::new(self.target, self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkKind;

    #[test]
    fn build_room_link() {
        let room = RoomTarget::parse("#rust:matrix.org").unwrap();
        let link = LinkBuilder::new().room(room).build();
        assert_eq!(link.kind(), LinkKind::RoomAlias);
        assert_eq!(link.to_string(), "#/#rust:matrix.org");
    }

    #[test]
    fn build_permalink_with_vias() {
        let room = RoomTarget::parse("!abc:example.org").unwrap();
        let event = EventId::parse("$ev:example.org").unwrap();
        let link = LinkBuilder::new()
            .permalink(room, event)
            .via(ServerName::parse("a.org").unwrap())
            .via(ServerName::parse("b.org").unwrap())
            .build();

        assert_eq!(link.kind(), LinkKind::Permalink);
        let servers: Vec<_> = link.servers().iter().map(|s| s.as_str()).collect();
        assert_eq!(servers, ["example.org", "a.org", "b.org"]);
    }

    #[test]
    fn built_link_reparses_equal() {
        let user = UserId::parse("@alice:example.com").unwrap();
        let link = LinkBuilder::new()
            .user(user)
            .client("element.io")
            .web_instance("element.io", "chat.example.org")
            .build();

        let reparsed = Link::parse_fragment(&link.to_string()).unwrap();
        assert_eq!(link, reparsed);
    }
}
