//! Client descriptor trait.

use matrix_link::Link;

use crate::install::InstallLink;
use crate::maturity::Maturity;
use crate::platform::Platform;

/// A Matrix client known to the resolver.
///
/// One implementation exists per client; the set is assembled once into a
/// [`ClientRegistry`](crate::ClientRegistry) at startup and never mutated.
/// Every method is a pure function of its arguments so resolution stays
/// deterministic.
///
/// # Capability contract
///
/// - [`supports`](Client::supports) must return `false` for any link kind
///   the client's protocol support cannot address; such clients are
///   filtered out before resolution rather than rendered as broken actions.
/// - When [`deep_link`](Client::deep_link) returns `None` for a platform
///   the client claims (and the OS cannot intercept generic links for it),
///   [`link_instructions`](Client::link_instructions) or
///   [`copy_string`](Client::copy_string) must provide a textual fallback.
/// - [`install_links`](Client::install_links) is ordered: platform app
///   stores first, generic website fallbacks last.
pub trait Client: Send + Sync {
    /// Stable identifier, also the key for `web-instance[...]` overrides.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// One-sentence description for the client detail view.
    fn description(&self) -> &'static str;

    /// Project homepage, if any.
    fn homepage(&self) -> Option<&'static str> {
        None
    }

    /// Author or maintaining organization, if known.
    fn author(&self) -> Option<&'static str> {
        None
    }

    /// How production-ready the client is.
    fn maturity(&self) -> Maturity;

    /// The platforms the client runs on. Never empty.
    fn platforms(&self) -> &'static [Platform];

    /// Whether the client can address this kind of link at all.
    fn supports(&self, link: &Link) -> bool;

    /// A URL that opens the link directly in the client on the given
    /// platform, or `None` when the client has no addressable scheme
    /// there. `None` is a normal fall-through to install links and
    /// instructions, not an error.
    fn deep_link(&self, platform: Platform, link: &Link) -> Option<String>;

    /// Ways to install the client on the given platform, primary channel
    /// first.
    fn install_links(&self, platform: Platform) -> Vec<InstallLink>;

    /// Human-readable steps for opening the link manually, for platforms
    /// without a deep-link scheme.
    fn link_instructions(&self, platform: Platform, link: &Link) -> Option<String>;

    /// A string worth copying to the clipboard alongside the instructions
    /// (a `/join` command, or the raw identifier).
    fn copy_string(&self, platform: Platform, link: &Link) -> Option<String>;

    /// True only where the operating system itself routes generic link
    /// URLs to the client without an explicit "open" step, letting the
    /// resolver skip the open action entirely.
    fn can_intercept_matrix_to_links(&self, platform: Platform) -> bool {
        let _ = platform;
        false
    }

    /// The fixed allow-list of web deployments this client trusts.
    fn trusted_web_instances(&self) -> &'static [&'static str] {
        &[]
    }

    /// Resolves the link's requested web instance against the allow-list.
    ///
    /// Returns `None` unless the instance the link asked for is on
    /// [`trusted_web_instances`](Client::trusted_web_instances); an
    /// attacker-supplied hostname must never make it into a rendered URL,
    /// so the request is dropped silently rather than reported.
    fn preferred_web_instance(&self, link: &Link) -> Option<&'static str> {
        let requested = link.web_instance(self.id())?;
        self.trusted_web_instances()
            .iter()
            .copied()
            .find(|&trusted| trusted == requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_link::Link;

    struct AllowListed;

    impl Client for AllowListed {
        fn id(&self) -> &'static str {
            "allow.listed"
        }
        fn name(&self) -> &'static str {
            "AllowListed"
        }
        fn description(&self) -> &'static str {
            "test double"
        }
        fn maturity(&self) -> Maturity {
            Maturity::Stable
        }
        fn platforms(&self) -> &'static [Platform] {
            &[Platform::DesktopWeb]
        }
        fn supports(&self, _link: &Link) -> bool {
            true
        }
        fn deep_link(&self, _platform: Platform, _link: &Link) -> Option<String> {
            None
        }
        fn install_links(&self, _platform: Platform) -> Vec<InstallLink> {
            Vec::new()
        }
        fn link_instructions(&self, _platform: Platform, _link: &Link) -> Option<String> {
            Some("open it manually".to_string())
        }
        fn copy_string(&self, _platform: Platform, _link: &Link) -> Option<String> {
            None
        }
        fn trusted_web_instances(&self) -> &'static [&'static str] {
            &["chat.example.org"]
        }
    }

    #[test]
    fn trusted_instance_is_returned() {
        let link = Link::parse_fragment(
            "#/#room:example.org?web-instance[allow.listed]=chat.example.org",
        )
        .unwrap();
        assert_eq!(
            AllowListed.preferred_web_instance(&link),
            Some("chat.example.org")
        );
    }

    #[test]
    fn untrusted_instance_is_dropped() {
        let link = Link::parse_fragment(
            "#/#room:example.org?web-instance[allow.listed]=evil.example.com",
        )
        .unwrap();
        assert_eq!(AllowListed.preferred_web_instance(&link), None);
    }

    #[test]
    fn absent_request_yields_none() {
        let link = Link::parse_fragment("#/#room:example.org").unwrap();
        assert_eq!(AllowListed.preferred_web_instance(&link), None);
    }
}
