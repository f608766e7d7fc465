//! Cinny, a web client focused on simplicity.

use matrix_link::{Link, LinkKind};

use crate::client::Client;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

const DEFAULT_INSTANCE: &str = "app.cinny.in";

/// Cinny descriptor.
pub struct Cinny;

impl Client for Cinny {
    fn id(&self) -> &'static str {
        "cinny.in"
    }

    fn name(&self) -> &'static str {
        "Cinny"
    }

    fn description(&self) -> &'static str {
        "A web client focusing on simplicity, elegance and security"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://cinny.in")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Beta
    }

    fn platforms(&self) -> &'static [Platform] {
        &[Platform::DesktopWeb, Platform::MobileWeb]
    }

    fn supports(&self, link: &Link) -> bool {
        matches!(link.kind(), LinkKind::RoomAlias | LinkKind::RoomId)
    }

    fn deep_link(&self, platform: Platform, link: &Link) -> Option<String> {
        // No per-room routing; the app opens on its room search.
        if platform.is_web() {
            let instance = self.preferred_web_instance(link).unwrap_or(DEFAULT_INSTANCE);
            Some(format!("https://{instance}/"))
        } else {
            None
        }
    }

    fn install_links(&self, _platform: Platform) -> Vec<InstallLink> {
        vec![InstallLink::website("https://cinny.in")]
    }

    fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
        None
    }

    fn copy_string(&self, _platform: Platform, _link: &Link) -> Option<String> {
        None
    }

    fn trusted_web_instances(&self) -> &'static [&'static str] {
        &["app.cinny.in"]
    }
}
