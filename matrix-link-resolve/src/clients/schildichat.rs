//! SchildiChat, an Element fork with a denser layout.

use matrix_link::Link;

use crate::client::Client;
use crate::clients::web_hash_path;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

const DEFAULT_INSTANCE: &str = "app.schildi.chat";

/// SchildiChat descriptor.
pub struct SchildiChat;

impl Client for SchildiChat {
    fn id(&self) -> &'static str {
        "schildi.chat"
    }

    fn name(&self) -> &'static str {
        "SchildiChat"
    }

    fn description(&self) -> &'static str {
        "An Element fork with message bubbles and a unified chat list"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://schildi.chat")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Beta
    }

    fn platforms(&self) -> &'static [Platform] {
        &[
            Platform::Android,
            Platform::Windows,
            Platform::MacOs,
            Platform::Linux,
            Platform::DesktopWeb,
        ]
    }

    fn supports(&self, _link: &Link) -> bool {
        true
    }

    fn deep_link(&self, platform: Platform, link: &Link) -> Option<String> {
        if platform.is_web() {
            let instance = self.preferred_web_instance(link).unwrap_or(DEFAULT_INSTANCE);
            Some(format!("https://{instance}/#/{}", web_hash_path(link)))
        } else {
            None
        }
    }

    fn install_links(&self, platform: Platform) -> Vec<InstallLink> {
        match platform {
            Platform::Android => vec![
                InstallLink::play_store("de.spiritcroc.riotx"),
                InstallLink::f_droid("de.spiritcroc.riotx"),
                InstallLink::website("https://schildi.chat"),
            ],
            _ => vec![InstallLink::website("https://schildi.chat")],
        }
    }

    fn link_instructions(&self, platform: Platform, _link: &Link) -> Option<String> {
        if platform.is_native_desktop() {
            Some("Open SchildiChat and paste the identifier into the search bar.".to_string())
        } else {
            None
        }
    }

    fn copy_string(&self, platform: Platform, link: &Link) -> Option<String> {
        if platform.is_native_desktop() {
            Some(link.identifier().to_string())
        } else {
            None
        }
    }

    fn can_intercept_matrix_to_links(&self, platform: Platform) -> bool {
        platform == Platform::Android
    }

    fn trusted_web_instances(&self) -> &'static [&'static str] {
        &["app.schildi.chat"]
    }
}
