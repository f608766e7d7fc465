//! Thunderbird's built-in Matrix chat support.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Thunderbird descriptor.
pub struct Thunderbird;

impl Client for Thunderbird {
    fn id(&self) -> &'static str {
        "thunderbird"
    }

    fn name(&self) -> &'static str {
        "Thunderbird"
    }

    fn description(&self) -> &'static str {
        "Mozilla's mail client with built-in Matrix chat"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://www.thunderbird.net")
    }

    fn author(&self) -> Option<&'static str> {
        Some("MZLA Technologies")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Beta
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
        vec![InstallLink::website("https://www.thunderbird.net")]
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some(
            "Add your Matrix account under Thunderbird's chat settings, then use Join Chat with the identifier."
                .to_string(),
        )
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }
}
