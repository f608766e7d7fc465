//! NeoChat, the KDE Matrix client.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// NeoChat descriptor.
pub struct NeoChat;

impl Client for NeoChat {
    fn id(&self) -> &'static str {
        "org.kde.neochat"
    }

    fn name(&self) -> &'static str {
        "NeoChat"
    }

    fn description(&self) -> &'static str {
        "A convergent Matrix client for desktop and mobile from KDE"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://apps.kde.org/neochat/")
    }

    fn author(&self) -> Option<&'static str> {
        Some("KDE")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Beta
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Linux, Platform::Windows, Platform::Android]
    }

    fn supports(&self, link: &Link) -> bool {
        matches!(
            link.kind(),
            LinkKind::RoomAlias | LinkKind::RoomId | LinkKind::UserId
        )
    }

    fn deep_link(&self, _platform: Platform, _link: &Link) -> Option<String> {
        None
    }

    fn install_links(&self, platform: Platform) -> Vec<InstallLink> {
        match platform {
            Platform::Linux => vec![
                InstallLink::flathub("org.kde.neochat"),
                InstallLink::website("https://apps.kde.org/neochat/"),
            ],
            _ => vec![InstallLink::website("https://apps.kde.org/neochat/")],
        }
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some("Open NeoChat, choose Explore Rooms, and paste the identifier.".to_string())
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }
}
