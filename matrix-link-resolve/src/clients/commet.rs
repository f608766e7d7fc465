//! Commet, a Flutter-based client.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Commet descriptor.
pub struct Commet;

impl Client for Commet {
    fn id(&self) -> &'static str {
        "chat.commet"
    }

    fn name(&self) -> &'static str {
        "Commet"
    }

    fn description(&self) -> &'static str {
        "A client with a focus on voice, communities and customization"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://commet.chat")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Alpha
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Android, Platform::Windows, Platform::Linux]
    }

    fn supports(&self, link: &Link) -> bool {
        matches!(link.kind(), LinkKind::RoomAlias | LinkKind::RoomId)
    }

    fn deep_link(&self, _platform: Platform, _link: &Link) -> Option<String> {
        None
    }

    fn install_links(&self, platform: Platform) -> Vec<InstallLink> {
        match platform {
            Platform::Android => vec![
                InstallLink::play_store("chat.commet.commetapp"),
                InstallLink::website("https://commet.chat"),
            ],
            _ => vec![InstallLink::website("https://commet.chat")],
        }
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some("Open Commet and paste the identifier into the room search.".to_string())
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }
}
