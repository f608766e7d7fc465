//! Quaternion, the Qt desktop client built on libQuotient.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::clients::join_command;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Quaternion descriptor.
pub struct Quaternion;

impl Client for Quaternion {
    fn id(&self) -> &'static str {
        "quaternion"
    }

    fn name(&self) -> &'static str {
        "Quaternion"
    }

    fn description(&self) -> &'static str {
        "A Qt5-based desktop client built on libQuotient"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://github.com/quotient-im/Quaternion")
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
        vec![
            InstallLink::flathub("com.github.quaternion"),
            InstallLink::website("https://github.com/quotient-im/Quaternion"),
        ]
    }

    fn link_instructions(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(format!(
            "Open Quaternion and run /join {} from any room.",
            link.identifier()
        ))
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        join_command(link)
    }
}
