//! Per-client resolution: platform selection and action assembly.

use std::fmt;

use matrix_link::Link;

use crate::action::{Action, ActionKind};
use crate::client::Client;
use crate::platform::Platform;
use crate::preferences::{PreferenceUpdate, Preferences};
use crate::registry::ClientRegistry;

/// Whether a client view starts from "the app should open this" or from
/// "get the app first".
///
/// `Open` is only entered when a deep link exists for a native platform the
/// OS will *not* intercept for: interception hands the URL off at the OS
/// level, and web platforms carry no install doubt. The single transition
/// `Open → Install` happens the first time the user activates the primary
/// action on a native platform, modeling "the open attempt may have hit a
/// missing install".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenState {
    /// A recognized native app is expected to be installed
    Open,
    /// No interception guarantee; lead with install channels
    Install,
}

impl OpenState {
    fn initial(has_deep_link: bool, can_intercept: bool, platform: Platform) -> Self {
        if has_deep_link && !can_intercept && platform.is_native() {
            Self::Open
        } else {
            Self::Install
        }
    }

    /// Advances the state after the primary action was activated on the
    /// given platform. Web platforms never transition.
    #[must_use]
    pub const fn advance(self, platform: Platform) -> Self {
        match (self, platform.is_native()) {
            (Self::Open, true) => Self::Install,
            (state, _) => state,
        }
    }
}

/// Everything the UI needs to render one client's row.
pub struct ClientView<'a> {
    client: &'a dyn Client,
    proposed_platform: Platform,
    open_state: OpenState,
    actions: Vec<Action>,
    instructions: Option<String>,
    copy_string: Option<String>,
}

impl<'a> ClientView<'a> {
    /// Returns the client this view describes.
    #[must_use]
    pub const fn client(&self) -> &'a dyn Client {
        self.client
    }

    /// Returns the platform resolution selected for this client.
    #[must_use]
    pub const fn proposed_platform(&self) -> Platform {
        self.proposed_platform
    }

    /// Returns the current open-or-install state.
    #[must_use]
    pub const fn open_state(&self) -> OpenState {
        self.open_state
    }

    /// Returns the state the view moves to once the user activates the
    /// primary action.
    #[must_use]
    pub const fn after_primary_activation(&self) -> OpenState {
        self.open_state.advance(self.proposed_platform)
    }

    /// Returns the ordered action list, primary action first.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns manual-opening instructions, present exactly when no deep
    /// link exists for the proposed platform.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Returns a copyable fallback string, if the client provides one.
    #[must_use]
    pub fn copy_string(&self) -> Option<&str> {
        self.copy_string.as_deref()
    }
}

impl fmt::Debug for ClientView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientView")
            .field("client", &self.client.id())
            .field("proposed_platform", &self.proposed_platform)
            .field("open_state", &self.open_state)
            .field("actions", &self.actions)
            .field("instructions", &self.instructions)
            .field("copy_string", &self.copy_string)
            .finish()
    }
}

/// Selects the platform to target for one client.
///
/// `matching` is the intersection of the detected candidates with the
/// client's supported platforms, in candidate order. The user's preference
/// wins if it is in `matching`; otherwise the first native match, then the
/// first web match.
#[must_use]
pub fn select_platform(
    candidates: &[Platform],
    client_platforms: &[Platform],
    preference: Option<Platform>,
) -> Option<Platform> {
    let matching: Vec<Platform> = candidates
        .iter()
        .copied()
        .filter(|p| client_platforms.contains(p))
        .collect();

    if let Some(preferred) = preference {
        if matching.contains(&preferred) {
            return Some(preferred);
        }
    }

    let native = matching.iter().copied().find(|p| p.is_native());
    let web = matching.iter().copied().find(|p| p.is_web());
    native.or(web)
}

/// Resolves a link against a registry: one [`ClientView`] per client that
/// supports the link and has an addressable platform.
///
/// The output order follows the registry, except that the client named by
/// the link's `client` argument (the originating client) is moved to the
/// front. Resolution is pure: the same inputs always produce the same
/// views, byte for byte.
#[must_use]
pub fn resolve<'a>(
    link: &Link,
    candidates: &[Platform],
    preferences: &Preferences,
    registry: &'a ClientRegistry,
) -> Vec<ClientView<'a>> {
    let mut views: Vec<ClientView<'a>> = registry
        .iter()
        .filter(|client| client.supports(link))
        .filter_map(|client| resolve_client(client, link, candidates, preferences))
        .collect();

    if let Some(pinned) = link.client_id() {
        if let Some(idx) = views.iter().position(|v| v.client.id() == pinned) {
            let view = views.remove(idx);
            views.insert(0, view);
        }
    }

    views
}

fn resolve_client<'a>(
    client: &'a dyn Client,
    link: &Link,
    candidates: &[Platform],
    preferences: &Preferences,
) -> Option<ClientView<'a>> {
    let proposed = match select_platform(candidates, client.platforms(), preferences.platform()) {
        Some(platform) => platform,
        // No detected platform applies. The client stays visible through
        // its install channels if it has any; otherwise it is dropped.
        None => {
            let fallback = client.platforms().first().copied()?;
            if client.install_links(fallback).is_empty() {
                return None;
            }
            fallback
        }
    };

    let deep_link = client.deep_link(proposed, link);
    let can_intercept = client.can_intercept_matrix_to_links(proposed);
    let open_state = OpenState::initial(deep_link.is_some(), can_intercept, proposed);
    let instance = client.preferred_web_instance(link);

    let mut actions = Vec::new();

    if let Some(url) = deep_link {
        let label = match (instance, proposed.is_web()) {
            (Some(host), true) => format!("Open on {host}"),
            (Some(_), false) => "Open in app".to_string(),
            (None, _) => "Continue".to_string(),
        };
        let kind = if proposed.is_web() {
            ActionKind::OpenInWeb
        } else {
            ActionKind::OpenInApp
        };
        actions.push(Action::new(
            label,
            url,
            kind,
            true,
            PreferenceUpdate::SetClient {
                client_id: client.id().to_string(),
                platform: proposed,
            },
        ));
    }

    // A distinct web action only makes sense when a trusted instance was
    // requested and the proposal is not already that web platform.
    if let Some(host) = instance {
        let web = candidates
            .iter()
            .copied()
            .filter(|p| client.platforms().contains(p))
            .find(|p| p.is_web());
        if let Some(web) = web {
            if web != proposed {
                if let Some(url) = client.deep_link(web, link) {
                    actions.push(Action::new(
                        format!("Open on {host}"),
                        url,
                        ActionKind::OpenInWeb,
                        false,
                        PreferenceUpdate::SetClient {
                            client_id: client.id().to_string(),
                            platform: web,
                        },
                    ));
                }
            }
        }
    }

    if proposed.is_native() {
        let mut install_links = client.install_links(proposed);
        // Clients already order their channels; the stable sort enforces the
        // stores-before-website tie-break even if one forgets.
        install_links.sort_by_key(|l| usize::from(!l.channel().is_store()));
        for install in install_links {
            actions.push(Action::new(
                install.channel().label(),
                install.url().to_string(),
                ActionKind::Install(install.channel()),
                false,
                PreferenceUpdate::SetClient {
                    client_id: client.id().to_string(),
                    platform: proposed,
                },
            ));
        }
    }

    Some(ClientView {
        client,
        proposed_platform: proposed,
        open_state,
        actions,
        instructions: client.link_instructions(proposed, link),
        copy_string: client.copy_string(proposed, link),
    })
}
