//! Syphon, the privacy-focused mobile client.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Syphon descriptor.
pub struct Syphon;

impl Client for Syphon {
    fn id(&self) -> &'static str {
        "org.tether.tether"
    }

    fn name(&self) -> &'static str {
        "Syphon"
    }

    fn description(&self) -> &'static str {
        "A privacy-centric mobile client"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://syphon.org")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Alpha
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Android, Platform::Ios]
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
                InstallLink::play_store("org.tether.tether"),
                InstallLink::f_droid("org.tether.tether"),
                InstallLink::website("https://syphon.org"),
            ],
            Platform::Ios => vec![
                InstallLink::apple_app_store("1496285352"),
                InstallLink::website("https://syphon.org"),
            ],
            _ => vec![InstallLink::website("https://syphon.org")],
        }
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some("Open Syphon and search for the identifier.".to_string())
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }
}
