//! Hydrogen, the lightweight web client.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Hydrogen descriptor.
pub struct Hydrogen;

impl Client for Hydrogen {
    fn id(&self) -> &'static str {
        "hydrogen.element.io"
    }

    fn name(&self) -> &'static str {
        "Hydrogen"
    }

    fn description(&self) -> &'static str {
        "A lightweight web client that works on older browsers"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://hydrogen.element.io")
    }

    fn author(&self) -> Option<&'static str> {
        Some("Element")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Alpha
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::DesktopWeb, Platform::MobileWeb]
    }

    fn supports(&self, link: &Link) -> bool {
        matches!(link.kind(), LinkKind::RoomAlias | LinkKind::RoomId)
    }

    fn deep_link(&self, _platform: Platform, _link: &Link) -> Option<String> {
        // Room routing requires an existing session, so the fallback text
        // is the reliable path.
        None
    }

    fn install_links(&self, _platform: Platform) -> Vec<InstallLink> {
        vec![InstallLink::website("https://hydrogen.element.io")]
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some(
            "Open hydrogen.element.io, log in, and paste the identifier into the room search."
                .to_string(),
        )
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }

    fn trusted_web_instances(&self) -> &'static [&'static str] {
        &["hydrogen.element.io"]
    }
}
