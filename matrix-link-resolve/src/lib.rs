//! Client discovery and deep-link resolution for Matrix links.
//!
//! This crate takes a parsed [`matrix_link::Link`] and answers: which
//! application can open it, and by which exact mechanism? It includes:
//!
//! - **Platform detection**: [`Platform::detect`] maps a user agent to an
//!   ordered candidate list
//! - **Client registry**: [`ClientRegistry`] with one [`Client`] descriptor
//!   per known application
//! - **Resolution**: [`resolve`] builds an ordered [`Action`] list per
//!   client — a primary open action, install channels, and textual
//!   fallbacks — with deterministic tie-breaks
//! - **Preferences**: a pure [`Preferences::reduce`] reducer; persistence
//!   stays outside this crate
//!
//! # Quick Start
//!
//! ```rust
//! use matrix_link::Link;
//! use matrix_link_resolve::{resolve, Client, ClientRegistry, Platform, Preferences};
//!
//! let link = Link::parse_fragment("#/#rust:matrix.org?via=example.org").unwrap();
//! let registry = ClientRegistry::default();
//! let candidates = Platform::detect(
//!     "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
//!     None,
//! );
//!
//! let views = resolve(&link, &candidates, &Preferences::new(), &registry);
//! assert!(!views.is_empty());
//!
//! // Every view renders independently: a proposed platform, ordered
//! // actions, and optional manual instructions.
//! for view in &views {
//!     assert!(view.client().supports(&link));
//! }
//! ```
//!
//! # Side Effects as Data
//!
//! Nothing here touches storage. Each [`Action`] carries the
//! [`PreferenceUpdate`] to apply when the user activates it; the embedding
//! layer persists it and feeds the new [`Preferences`] value back into the
//! next [`resolve`] call. Re-running with the same inputs always yields the
//! same actions.
//!
//! # Security
//!
//! Links can request a specific web deployment per client
//! (`web-instance[id]=host`). Requests are honored only when the host is on
//! the client's fixed allow-list ([`Client::trusted_web_instances`]);
//! anything else silently falls back to the default instance so that
//! attacker-supplied hostnames never reach a rendered URL.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod action;
mod client;
pub mod clients;
mod install;
mod maturity;
mod platform;
mod preferences;
mod registry;
mod resolver;

pub use action::{Action, ActionKind};
pub use client::Client;
pub use install::{InstallChannel, InstallLink};
pub use maturity::Maturity;
pub use platform::Platform;
pub use preferences::{PreferenceUpdate, Preferences};
pub use registry::ClientRegistry;
pub use resolver::{resolve, select_platform, ClientView, OpenState};
