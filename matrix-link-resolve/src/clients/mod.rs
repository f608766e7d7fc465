//! Descriptors for the known Matrix clients, one module each.

use matrix_link::{Link, LinkTarget};

use crate::client::Client;

mod cinny;
mod commet;
mod element;
mod fluffychat;
mod fractal;
mod gomuks;
mod hydrogen;
mod mirage;
mod neochat;
mod nheko;
mod quaternion;
mod schildichat;
mod syphon;
mod thunderbird;
mod weechat;

pub use cinny::Cinny;
pub use commet::Commet;
pub use element::Element;
pub use fluffychat::FluffyChat;
pub use fractal::Fractal;
pub use gomuks::Gomuks;
pub use hydrogen::Hydrogen;
pub use mirage::Mirage;
pub use neochat::NeoChat;
pub use nheko::Nheko;
pub use quaternion::Quaternion;
pub use schildichat::SchildiChat;
pub use syphon::Syphon;
pub use thunderbird::Thunderbird;
pub use weechat::Weechat;

/// All known clients in display order: stable, then beta, then alpha,
/// alphabetical within a grade.
pub(crate) fn all() -> Vec<Box<dyn Client>> {
    vec![
        Box::new(Element),
        Box::new(Weechat),
        Box::new(Cinny),
        Box::new(FluffyChat),
        Box::new(Fractal),
        Box::new(NeoChat),
        Box::new(Nheko),
        Box::new(SchildiChat),
        Box::new(Thunderbird),
        Box::new(Commet),
        Box::new(Gomuks),
        Box::new(Hydrogen),
        Box::new(Mirage),
        Box::new(Quaternion),
        Box::new(Syphon),
    ]
}

/// Builds the hash-route path used by Element-descended web apps:
/// `room/…`, `user/…`, or `group/…`, with the candidate servers attached
/// as `via` query parameters for room targets.
pub(crate) fn web_hash_path(link: &Link) -> String {
    let mut path = match link.target() {
        LinkTarget::Room(room) => format!("room/{room}"),
        LinkTarget::Event { room, event } => format!("room/{room}/{event}"),
        LinkTarget::User(user) => format!("user/{user}"),
        LinkTarget::Group(group) => format!("group/{group}"),
    };

    if matches!(
        link.target(),
        LinkTarget::Room(_) | LinkTarget::Event { .. }
    ) {
        let vias: Vec<String> = link
            .servers()
            .iter()
            .skip(1)
            .map(|s| format!("via={s}"))
            .collect();
        if !vias.is_empty() {
            path.push('?');
            path.push_str(&vias.join("&"));
        }
    }

    path
}

/// The `/join` console command for room targets, used as the copyable
/// fallback by terminal-style clients.
pub(crate) fn join_command(link: &Link) -> Option<String> {
    match link.target() {
        LinkTarget::Room(room) => Some(format!("/join {room}")),
        LinkTarget::Event { room, .. } => Some(format!("/join {room}")),
        _ => None,
    }
}
