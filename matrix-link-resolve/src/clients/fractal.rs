//! Fractal, the GNOME Matrix client.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// Fractal descriptor.
pub struct Fractal;

impl Client for Fractal {
    fn id(&self) -> &'static str {
        "org.gnome.Fractal"
    }

    fn name(&self) -> &'static str {
        "Fractal"
    }

    fn description(&self) -> &'static str {
        "A Matrix client for the GNOME desktop"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://gitlab.gnome.org/World/fractal")
    }

    fn author(&self) -> Option<&'static str> {
        Some("GNOME")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Beta
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::Linux]
    }

    fn supports(&self, link: &Link) -> bool {
        matches!(link.kind(), LinkKind::RoomAlias | LinkKind::RoomId)
    }

    fn deep_link(&self, _platform: Platform, _link: &Link) -> Option<String> {
        None
    }

    fn install_links(&self, _platform: Platform) -> Vec<InstallLink> {
        vec![
            InstallLink::flathub("org.gnome.Fractal"),
            InstallLink::website("https://gitlab.gnome.org/World/fractal"),
        ]
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        Some(
            "Open Fractal, press the + button, choose Join Room, and paste the identifier."
                .to_string(),
        )
    }

    fn copy_string(&self, _platform: Platform, link: &Link) -> Option<String> {
        Some(link.identifier().to_string())
    }
}
