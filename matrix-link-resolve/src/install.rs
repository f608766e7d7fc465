//! Install links and distribution channels.

use std::fmt;

/// A distribution channel an install link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstallChannel {
    /// Apple's App Store
    AppleAppStore,
    /// Google Play
    PlayStore,
    /// The F-Droid free-software repository
    FDroid,
    /// Flathub
    Flathub,
    /// The client's own download page
    Website,
}

impl InstallChannel {
    /// Returns true for platform app stores, which are listed before
    /// generic website fallbacks.
    #[must_use]
    pub const fn is_store(self) -> bool {
        !matches!(self, Self::Website)
    }

    /// A short human-readable label for the channel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AppleAppStore => "Download on the App Store",
            Self::PlayStore => "Get it on Google Play",
            Self::FDroid => "Get it on F-Droid",
            Self::Flathub => "Get it on Flathub",
            Self::Website => "Download from the website",
        }
    }
}

impl fmt::Display for InstallChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AppleAppStore => "app-store",
            Self::PlayStore => "play-store",
            Self::FDroid => "f-droid",
            Self::Flathub => "flathub",
            Self::Website => "website",
        };
        write!(f, "{name}")
    }
}

/// A way to install a client on some platform.
///
/// # Examples
///
/// ```
/// use matrix_link_resolve::{InstallChannel, InstallLink};
///
/// let play = InstallLink::play_store("im.vector.app");
/// assert_eq!(play.channel(), InstallChannel::PlayStore);
/// assert!(play.url().contains("im.vector.app"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstallLink {
    channel: InstallChannel,
    url: String,
}

impl InstallLink {
    /// Creates an install link for an arbitrary channel and URL.
    #[must_use]
    pub fn new(channel: InstallChannel, url: impl Into<String>) -> Self {
        Self {
            channel,
            url: url.into(),
        }
    }

    /// Creates an App Store link from a numeric app ID.
    #[must_use]
    pub fn apple_app_store(app_id: &str) -> Self {
        Self::new(
            InstallChannel::AppleAppStore,
            format!("https://apps.apple.com/app/id{app_id}"),
        )
    }

    /// Creates a Google Play link from a package name.
    #[must_use]
    pub fn play_store(package: &str) -> Self {
        Self::new(
            InstallChannel::PlayStore,
            format!("https://play.google.com/store/apps/details?id={package}"),
        )
    }

    /// Creates an F-Droid link from a package name.
    #[must_use]
    pub fn f_droid(package: &str) -> Self {
        Self::new(
            InstallChannel::FDroid,
            format!("https://f-droid.org/packages/{package}/"),
        )
    }

    /// Creates a Flathub link from an application ID.
    #[must_use]
    pub fn flathub(app_id: &str) -> Self {
        Self::new(
            InstallChannel::Flathub,
            format!("https://flathub.org/apps/{app_id}"),
        )
    }

    /// Creates a plain website link.
    #[must_use]
    pub fn website(url: impl Into<String>) -> Self {
        Self::new(InstallChannel::Website, url)
    }

    /// Returns the channel.
    #[must_use]
    pub const fn channel(&self) -> InstallChannel {
        self.channel
    }

    /// Returns the URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_constructors_build_urls() {
        assert_eq!(
            InstallLink::play_store("im.vector.app").url(),
            "https://play.google.com/store/apps/details?id=im.vector.app"
        );
        assert_eq!(
            InstallLink::f_droid("im.vector.app").url(),
            "https://f-droid.org/packages/im.vector.app/"
        );
        assert_eq!(
            InstallLink::apple_app_store("1083446067").url(),
            "https://apps.apple.com/app/id1083446067"
        );
        assert_eq!(
            InstallLink::flathub("org.gnome.Fractal").url(),
            "https://flathub.org/apps/org.gnome.Fractal"
        );
    }

    #[test]
    fn website_is_not_a_store() {
        assert!(!InstallChannel::Website.is_store());
        assert!(InstallChannel::PlayStore.is_store());
        assert!(InstallChannel::Flathub.is_store());
    }
}
