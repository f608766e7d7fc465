//! User preference state and its pure reducer.
//!
//! The resolver never talks to storage. It consumes a [`Preferences`]
//! value and emits [`PreferenceUpdate`]s on the actions it builds; the
//! embedding layer owns persistence, applies updates through
//! [`Preferences::reduce`], and feeds the new value back in. Persistence
//! failures therefore cannot affect resolution.

use crate::platform::Platform;

/// The user's remembered client and platform choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    client_id: Option<String>,
    platform: Option<Platform>,
}

impl Preferences {
    /// Creates an empty preference state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the remembered client ID, if any.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Returns the remembered platform, if any.
    #[must_use]
    pub const fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Applies an update, returning the new state.
    ///
    /// Pure and total: the same state and update always produce the same
    /// result.
    #[must_use]
    pub fn reduce(self, update: &PreferenceUpdate) -> Self {
        match update {
            PreferenceUpdate::SetClient {
                client_id,
                platform,
            } => Self {
                client_id: Some(client_id.clone()),
                platform: Some(*platform),
            },
            PreferenceUpdate::Clear => Self::new(),
        }
    }
}

/// A requested change to the preference state.
///
/// Emitted by actions when activated; never applied by this crate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreferenceUpdate {
    /// Remember this client and platform as the user's choice.
    SetClient {
        /// The chosen client's ID
        client_id: String,
        /// The platform the choice was made for
        platform: Platform,
    },
    /// Forget the remembered choice.
    Clear,
}
