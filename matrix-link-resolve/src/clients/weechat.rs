//! Weechat with the weechat-matrix script.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::clients::join_command;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Weechat descriptor.
pub struct Weechat;

impl Client for Weechat {
    fn id(&self) -> &'static str {
        "weechat"
    }

    fn name(&self) -> &'static str {
        "Weechat"
    }

    fn description(&self) -> &'static str {
        "Command-line Matrix interface using Weechat"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://github.com/poljar/weechat-matrix")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Stable
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Windows, Platform::MacOs, Platform::Linux]
    }

    fn supports(&self, link: &Link) -> bool {
        matches!(link.kind(), LinkKind::RoomAlias | LinkKind::RoomId)
    }

    fn deep_link(&self, _platform: Platform, _link: &Link) -> Option<String> {
        None
    }

    fn install_links(&self, _platform: Platform) -> Vec<InstallLink> {
        vec![InstallLink::website(
            "https://github.com/poljar/weechat-matrix",
        )]
    }

    fn link_instructions(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(format!("Type /join {}", link.identifier()))
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        join_command(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_rooms_only() {
        let room = Link::parse_fragment("#/#rust:matrix.org").unwrap();
        let user = Link::parse_fragment("#/@alice:example.com").unwrap();
        assert!(Weechat.supports(&room));
        assert!(!Weechat.supports(&user));
    }

    #[test]
    fn instructions_name_the_room() {
        let room = Link::parse_fragment("#/#rust:matrix.org").unwrap();
        assert_eq!(
            Weechat.link_instructions(Platform::Linux, &room),
            Some("Type /join #rust:matrix.org".to_string())
        );
        assert_eq!(
            Weechat.copy_string(Platform::Linux, &room),
            Some("/join #rust:matrix.org".to_string())
        );
    }

    #[test]
    fn never_deep_links() {
        let room = Link::parse_fragment("#/#rust:matrix.org").unwrap();
        for platform in Platform::ALL {
            assert!(Weechat.deep_link(platform, &room).is_none());
        }
    }
}
