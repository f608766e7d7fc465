//! FluffyChat, the cute cross-platform client.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// FluffyChat descriptor.
pub struct FluffyChat;

impl Client for FluffyChat {
    fn id(&self) -> &'static str {
        "im.fluffychat"
    }

    fn name(&self) -> &'static str {
        "FluffyChat"
    }

    fn description(&self) -> &'static str {
        "The cutest messenger in the Matrix network"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://fluffychat.im")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Beta
    }

    fn platforms(&self) -> &'static [Platform] {
        &[
            Platform::Android,
            Platform::Ios,
            Platform::Linux,
            Platform::DesktopWeb,
            Platform::MobileWeb,
        ]
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
            Platform::Android => vec![
                InstallLink::play_store("chat.fluffy.fluffychat"),
                InstallLink::f_droid("chat.fluffy.fluffychat"),
                InstallLink::website("https://fluffychat.im"),
            ],
            Platform::Ios => vec![
                InstallLink::apple_app_store("1551469600"),
                InstallLink::website("https://fluffychat.im"),
            ],
            Platform::Linux => vec![
                InstallLink::flathub("im.fluffychat.Fluffychat"),
                InstallLink::website("https://fluffychat.im"),
            ],
            _ => vec![InstallLink::website("https://fluffychat.im")],
        }
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some("Open FluffyChat, tap the search icon, and paste the identifier.".to_string())
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }

    fn can_intercept_matrix_to_links(&self, platform: Platform) -> bool {
        platform == Platform::Android
    }
}
