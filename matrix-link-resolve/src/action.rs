//! Render-agnostic action descriptors.

use crate::install::InstallChannel;
use crate::preferences::PreferenceUpdate;

/// What activating an action does, beyond navigating to its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Opens the link in a native application
    OpenInApp,
    /// Opens the link in a web deployment of the client
    OpenInWeb,
    /// Navigates to an install channel
    Install(InstallChannel),
}

/// A single renderable instruction: one link or button.
///
/// Activation is modeled as data, not as a callback: each action carries
/// the [`PreferenceUpdate`] the embedding layer should apply to its
/// preference store when the user picks it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    label: String,
    url: String,
    kind: ActionKind,
    primary: bool,
    on_activate: PreferenceUpdate,
}

impl Action {
    /// Creates an action.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        url: impl Into<String>,
        kind: ActionKind,
        primary: bool,
        on_activate: PreferenceUpdate,
    ) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            kind,
            primary,
            on_activate,
        }
    }

    /// Returns the label to render.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the URL to navigate to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the action kind.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Returns true for the single most prominent action of a client view.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.primary
    }

    /// Returns the preference update to apply when the user activates
    /// this action.
    #[must_use]
    pub const fn on_activate(&self) -> &PreferenceUpdate {
        &self.on_activate
    }
}
