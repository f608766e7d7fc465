//! Sigil characters that discriminate Matrix identifier kinds.

use std::fmt;

/// The leading character of a Matrix identifier, determining its kind.
///
/// # Examples
///
/// ```
/// use matrix_link::Sigil;
///
/// assert_eq!(Sigil::from_char('#'), Some(Sigil::RoomAlias));
/// assert_eq!(Sigil::User.as_char(), '@');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sigil {
    /// `#` — a human-readable room alias.
    RoomAlias,
    /// `!` — an opaque room ID.
    RoomId,
    /// `@` — a user ID.
    User,
    /// `+` — a group (community) ID.
    Group,
    /// `$` — an event ID, only valid as the second half of a permalink.
    Event,
}

impl Sigil {
    /// Returns the sigil character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::RoomAlias => '#',
            Self::RoomId => '!',
            Self::User => '@',
            Self::Group => '+',
            Self::Event => '$',
        }
    }

    /// Maps a character to its sigil, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::RoomAlias),
            '!' => Some(Self::RoomId),
            '@' => Some(Self::User),
            '+' => Some(Self::Group),
            '$' => Some(Self::Event),
            _ => None,
        }
    }

    /// Returns true for the two sigils that address a room directly.
    #[must_use]
    pub const fn is_room(self) -> bool {
        matches!(self, Self::RoomAlias | Self::RoomId)
    }
}

impl fmt::Display for Sigil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
