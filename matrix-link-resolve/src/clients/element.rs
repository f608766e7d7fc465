//! Element (formerly Riot), the reference Matrix client.

use matrix_link::Link;

use crate::client::Client;
use crate::clients::web_hash_path;
use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

const DEFAULT_INSTANCE: &str = "app.element.io";

/// Element descriptor.
pub struct Element;

impl Client for Element {
    fn id(&self) -> &'static str {
        "element.io"
    }

    fn name(&self) -> &'static str {
        "Element"
    }

    fn description(&self) -> &'static str {
        "Fully-featured Matrix client for the web, desktop, Android and iOS"
    }

    fn homepage(&self) -> Option<&'static str> {
        Some("https://element.io")
    }

    fn author(&self) -> Option<&'static str> {
        Some("Element")
    }

    fn maturity(&self) -> Maturity {
        Maturity::Stable
    }

    fn platforms(&self) -> &'static [Platform] {
        &Platform::ALL
    }

    fn supports(&self, _link: &Link) -> bool {
        true
    }

    fn deep_link(&self, platform: Platform, link: &Link) -> Option<String> {
        match platform {
            Platform::DesktopWeb | Platform::MobileWeb => {
                let instance = self.preferred_web_instance(link).unwrap_or(DEFAULT_INSTANCE);
                Some(format!("https://{instance}/#/{}", web_hash_path(link)))
            }
            Platform::Windows | Platform::MacOs | Platform::Linux => {
                Some(format!("element://vector/webapp/#/{}", web_hash_path(link)))
            }
            // Android hands off at the OS level; iOS goes through install.
            Platform::Android | Platform::Ios => None,
        }
    }

    fn install_links(&self, platform: Platform) -> Vec<InstallLink> {
        match platform {
            Platform::Android => vec![
                InstallLink::play_store("im.vector.app"),
                InstallLink::f_droid("im.vector.app"),
                InstallLink::website("https://element.io/download"),
            ],
            Platform::Ios => vec![
                InstallLink::apple_app_store("1083446067"),
                InstallLink::website("https://element.io/download"),
            ],
            _ => vec![InstallLink::website("https://element.io/download")],
        }
    }

    fn link_instructions(&self, platform: Platform, _link: &Link) -> Option<String> {
        match platform {
            Platform::Ios => Some(
                "Install Element from the App Store, then open this link again on your device."
                    .to_string(),
            ),
            _ => None,
        }
    }

    fn copy_string(&self, platform: Platform, link: &Link) -> Option<String> {
        match platform {
            Platform::Ios => Some(link.identifier().to_string()),
            _ => None,
        }
    }

    fn can_intercept_matrix_to_links(&self, platform: Platform) -> bool {
        platform == Platform::Android
    }

    fn trusted_web_instances(&self) -> &'static [&'static str] {
        &["app.element.io", "develop.element.io", "staging.element.io"]
    }
}
