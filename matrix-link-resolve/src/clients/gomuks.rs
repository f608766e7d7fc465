//! gomuks, the terminal client written in Go.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::clients::join_command;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// gomuks descriptor.
pub struct Gomuks;

impl Client for Gomuks {
    fn id(&self) -> &'static str {
        "gomuks"
    }

    fn name(&self) -> &'static str {
        "gomuks"
    }

    fn description(&self) -> &'static str {
        "A terminal-based Matrix client"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://github.com/gomuks/gomuks")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Alpha
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
        vec![InstallLink::website("https://github.com/gomuks/gomuks")]
    }

    fn link_instructions(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(format!("Type /join {}", link.identifier()))
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        join_command(link)
    }
}
