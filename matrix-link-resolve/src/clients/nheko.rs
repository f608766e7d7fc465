//! Nheko, the native desktop client built with Qt.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::clients::join_command;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Nheko descriptor.
pub struct Nheko;

impl Client for Nheko {
    fn id(&self) -> &'static str {
        "nheko"
    }

    fn name(&self) -> &'static str {
        "Nheko"
    }

    fn description(&self) -> &'static str {
        "A native desktop client aiming to feel like a lightweight messenger"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://nheko-reborn.github.io")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Beta
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Windows, Platform::MacOs, Platform::Linux]
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

    fn install_links(&self, _platform: Platform) -> Vec<InstallLink> {
        vec![
            InstallLink::flathub("io.github.NhekoReborn.Nheko"),
            InstallLink::website("https://nheko-reborn.github.io"),
        ]
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some(
            "Open Nheko, press Ctrl+K to open the quick switcher, and paste the identifier."
                .to_string(),
        )
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        join_command(link).or_else(|| Some(link.identifier().to_string()))
    }
}
