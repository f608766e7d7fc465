//! Mirage, the keyboard-driven Qt client.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Mirage descriptor.
pub struct Mirage;

impl Client for Mirage {
    fn id(&self) -> &'static str {
        "mirage"
    }

    fn name(&self) -> &'static str {
        "Mirage"
    }

    fn description(&self) -> &'static str {
        "A fancy, customizable, keyboard-operable Matrix client"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://github.com/mirukana/mirage")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Alpha
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Windows, Platform::Linux]
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
        vec![InstallLink::website("https://github.com/mirukana/mirage")]
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some("Open Mirage, press the + button, and paste the identifier.".to_string())
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }
}
