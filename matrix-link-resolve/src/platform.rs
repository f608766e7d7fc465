//! Platform enumeration and user-agent detection.

use std::fmt;

/// A platform a client can run on.
///
/// The set is closed and partitioned into web platforms, native desktop
/// platforms, and native mobile platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    /// A browser on a desktop machine
    DesktopWeb,
    /// A browser on a phone or tablet
    MobileWeb,
    /// Native Android
    Android,
    /// Native iOS
    Ios,
    /// Native Windows
    Windows,
    /// Native macOS
    MacOs,
    /// Native Linux
    Linux,
}

impl Platform {
    /// All platforms, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::DesktopWeb,
        Self::MobileWeb,
        Self::Android,
        Self::Ios,
        Self::Windows,
        Self::MacOs,
        Self::Linux,
    ];

    /// Returns true for browser platforms.
    #[must_use]
    pub const fn is_web(self) -> bool {
        matches!(self, Self::DesktopWeb | Self::MobileWeb)
    }

    /// Returns true for native desktop platforms.
    #[must_use]
    pub const fn is_native_desktop(self) -> bool {
        matches!(self, Self::Windows | Self::MacOs | Self::Linux)
    }

    /// Returns true for native mobile platforms.
    #[must_use]
    pub const fn is_native_mobile(self) -> bool {
        matches!(self, Self::Android | Self::Ios)
    }

    /// Returns true for any non-web platform.
    #[must_use]
    pub const fn is_native(self) -> bool {
        !self.is_web()
    }

    /// Maps a user-agent string (and an optional OS hint, e.g. from
    /// `navigator.platform`) to an ordered candidate list, native platform
    /// first where both a native and a web platform apply.
    ///
    /// Detection is heuristic and best-effort: unrecognized user agents
    /// default to `[Windows, DesktopWeb]` rather than failing.
    #[must_use]
    pub fn detect(user_agent: &str, os_hint: Option<&str>) -> Vec<Self> {
        let ua = user_agent.to_ascii_lowercase();

        // Mobile checks first: mobile user agents routinely mention the
        // desktop OS names as well ("like Mac OS X").
        if ua.contains("android") {
            return vec![Self::Android, Self::MobileWeb];
        }
        if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
            return vec![Self::Ios, Self::MobileWeb];
        }

        if let Some(desktop) = os_hint.and_then(Self::desktop_from_hint) {
            return vec![desktop, Self::DesktopWeb];
        }

        if ua.contains("windows") {
            return vec![Self::Windows, Self::DesktopWeb];
        }
        if ua.contains("macintosh") || ua.contains("mac os") {
            return vec![Self::MacOs, Self::DesktopWeb];
        }
        if ua.contains("linux") || ua.contains("x11") || ua.contains("freebsd") {
            return vec![Self::Linux, Self::DesktopWeb];
        }

        vec![Self::Windows, Self::DesktopWeb]
    }

    fn desktop_from_hint(hint: &str) -> Option<Self> {
        let hint = hint.to_ascii_lowercase();
        if hint.starts_with("win") {
            Some(Self::Windows)
        } else if hint.starts_with("mac") {
            Some(Self::MacOs)
        } else if hint.contains("linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DesktopWeb => "desktop web",
            Self::MobileWeb => "mobile web",
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        };
        write!(f, "{name}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(match self {
            Self::DesktopWeb => "desktop-web",
            Self::MobileWeb => "mobile-web",
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "desktop-web" => Ok(Self::DesktopWeb),
            "mobile-web" => Ok(Self::MobileWeb),
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(serde::de::Error::custom(format!(
                "unknown platform '{other}'"
            ))),
        }
    }
}
