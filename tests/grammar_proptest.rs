//! Property-based tests validating the parser against the identifier grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them, plus round-trip and determinism
//! properties over whole fragments.

use proptest::prelude::*;

use matrix_link::{
    EventId, GroupId, IdentifierKind, Link, LinkKind, MatrixId, RoomAlias, RoomId, RoomTarget,
    ServerName, UserId,
};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Valid alphanumeric characters for DNS labels
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    /// Valid characters for DNS labels (alphanumeric + hyphen)
    const DNS_LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

    /// Conservative localpart alphabet shared by all identifier kinds
    const LOCALPART_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789._=-";

    /// Generate a valid DNS label (1-20 chars, alphanumeric + inner hyphens)
    pub fn dns_label() -> impl Strategy<Value = String> {
        (1..=20usize).prop_flat_map(|len| {
            if len == 1 {
                prop::sample::select(ALPHANUMERIC.to_vec())
                    .prop_map(|c| (c as char).to_string())
                    .boxed()
            } else {
                let first = prop::sample::select(ALPHANUMERIC.to_vec());
                let middle_len = len.saturating_sub(2);
                let middle = prop::collection::vec(
                    prop::sample::select(DNS_LABEL_CHARS.to_vec()),
                    middle_len..=middle_len,
                );
                let last = prop::sample::select(ALPHANUMERIC.to_vec());

                (first, middle, last)
                    .prop_map(|(f, m, l)| {
                        let mut s = String::with_capacity(2 + m.len());
                        s.push(f as char);
                        for c in m {
                            s.push(c as char);
                        }
                        s.push(l as char);
                        s
                    })
                    .boxed()
            }
        })
    }

    /// Generate a valid domain name (1-4 labels joined by dots)
    pub fn domain() -> impl Strategy<Value = String> {
        prop::collection::vec(dns_label(), 1..=4).prop_filter_map(
            "domain too long",
            |labels| {
                let domain = labels.join(".");
                (domain.len() <= 253).then_some(domain)
            },
        )
    }

    /// Generate a valid server name (domain with optional port)
    pub fn server_name() -> impl Strategy<Value = String> {
        domain().prop_flat_map(|d| {
            prop::option::of(1u16..=65535).prop_map(move |port| match port {
                Some(p) => format!("{d}:{p}"),
                None => d.clone(),
            })
        })
    }

    /// Generate a localpart (1-32 chars from the conservative alphabet)
    pub fn localpart() -> impl Strategy<Value = String> {
        (1..=32usize).prop_flat_map(|len| {
            prop::collection::vec(prop::sample::select(LOCALPART_CHARS.to_vec()), len..=len)
                .prop_map(|chars| chars.into_iter().map(|c| c as char).collect())
        })
    }

    /// Generate a valid user ID
    pub fn user_id() -> impl Strategy<Value = String> {
        (localpart(), server_name()).prop_map(|(l, s)| format!("@{l}:{s}"))
    }

    /// Generate a valid room alias
    pub fn room_alias() -> impl Strategy<Value = String> {
        (localpart(), server_name()).prop_map(|(l, s)| format!("#{l}:{s}"))
    }

    /// Generate a valid room ID
    pub fn room_id() -> impl Strategy<Value = String> {
        (localpart(), server_name()).prop_map(|(l, s)| format!("!{l}:{s}"))
    }

    /// Generate a valid group ID
    pub fn group_id() -> impl Strategy<Value = String> {
        (localpart(), server_name()).prop_map(|(l, s)| format!("+{l}:{s}"))
    }

    /// Generate a valid event ID (domain-qualified or opaque)
    pub fn event_id() -> impl Strategy<Value = String> {
        (localpart(), prop::option::of(server_name())).prop_map(|(l, s)| match s {
            Some(s) => format!("${l}:{s}"),
            None => format!("${l}"),
        })
    }

    /// Generate a valid room target (alias or ID)
    pub fn room_target() -> impl Strategy<Value = String> {
        prop_oneof![room_alias(), room_id()]
    }

    /// Generate a valid permalink identifier
    pub fn permalink() -> impl Strategy<Value = String> {
        (room_target(), event_id()).prop_map(|(r, e)| format!("{r}/{e}"))
    }

    /// Generate a query string of 0-3 via arguments
    pub fn via_query() -> impl Strategy<Value = String> {
        prop::collection::vec(domain(), 0..=3).prop_map(|vias| {
            vias.iter()
                .map(|v| format!("via={v}"))
                .collect::<Vec<_>>()
                .join("&")
        })
    }

    /// Generate a complete parseable fragment
    pub fn fragment() -> impl Strategy<Value = String> {
        let identifier = prop_oneof![
            user_id(),
            room_alias(),
            room_id(),
            group_id(),
            permalink(),
        ];
        (identifier, via_query()).prop_map(|(id, query)| {
            if query.is_empty() {
                format!("#/{id}")
            } else {
                format!("#/{id}?{query}")
            }
        })
    }
}

mod server_name_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_domains_parse(d in domain()) {
            prop_assert!(ServerName::parse(&d).is_ok(), "Failed to parse domain: {}", d);
        }

        #[test]
        fn valid_server_names_parse(s in server_name()) {
            prop_assert!(ServerName::parse(&s).is_ok(), "Failed to parse server name: {}", s);
        }

        #[test]
        fn server_name_display_roundtrip(s in server_name()) {
            let parsed = ServerName::parse(&s).unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }
    }
}

mod identifier_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_user_ids_parse(id in user_id()) {
            prop_assert!(UserId::parse(&id).is_ok(), "Failed to parse user ID: {}", id);
        }

        #[test]
        fn valid_room_aliases_parse(id in room_alias()) {
            prop_assert!(RoomAlias::parse(&id).is_ok(), "Failed to parse alias: {}", id);
        }

        #[test]
        fn valid_room_ids_parse(id in room_id()) {
            prop_assert!(RoomId::parse(&id).is_ok(), "Failed to parse room ID: {}", id);
        }

        #[test]
        fn valid_group_ids_parse(id in group_id()) {
            prop_assert!(GroupId::parse(&id).is_ok(), "Failed to parse group ID: {}", id);
        }

        #[test]
        fn valid_event_ids_parse(id in event_id()) {
            prop_assert!(EventId::parse(&id).is_ok(), "Failed to parse event ID: {}", id);
        }

        #[test]
        fn valid_room_targets_parse(id in room_target()) {
            prop_assert!(RoomTarget::parse(&id).is_ok(), "Failed to parse room target: {}", id);
        }

        #[test]
        fn identifier_with_space_fails(id in user_id(), pos in 1usize..8) {
            let mut broken = id.clone();
            let pos = pos.min(broken.len());
            broken.insert(pos, ' ');
            prop_assert!(MatrixId::parse(&broken).is_err());
        }

        #[test]
        fn identifier_with_percent_fails(id in user_id()) {
            let broken = format!("{id}%20");
            prop_assert!(MatrixId::parse(&broken).is_err());
        }
    }
}

mod classify_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn classify_matches_generated_kind(
            alias in room_alias(),
            room in room_id(),
            user in user_id(),
            group in group_id(),
            link in permalink(),
        ) {
            prop_assert_eq!(IdentifierKind::classify(&alias).unwrap(), IdentifierKind::RoomAlias);
            prop_assert_eq!(IdentifierKind::classify(&room).unwrap(), IdentifierKind::RoomId);
            prop_assert_eq!(IdentifierKind::classify(&user).unwrap(), IdentifierKind::UserId);
            prop_assert_eq!(IdentifierKind::classify(&group).unwrap(), IdentifierKind::GroupId);
            prop_assert_eq!(IdentifierKind::classify(&link).unwrap(), IdentifierKind::Permalink);
        }
    }
}

mod fragment_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_fragments_parse(f in fragment()) {
            prop_assert!(Link::parse_fragment(&f).is_ok(), "Failed to parse fragment: {}", f);
        }

        #[test]
        fn roundtrip_parse_serialize(f in fragment()) {
            let parsed = Link::parse_fragment(&f).unwrap();
            let serialized = parsed.to_string();
            let reparsed = Link::parse_fragment(&serialized).unwrap();
            prop_assert_eq!(parsed, reparsed, "round-trip failed for {}", f);
        }

        #[test]
        fn parsing_is_deterministic(f in fragment()) {
            let first = Link::parse_fragment(&f).unwrap();
            let second = Link::parse_fragment(&f).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn servers_start_with_own_domain(f in fragment()) {
            let parsed = Link::parse_fragment(&f).unwrap();
            let own = parsed.target().server().as_str();
            prop_assert_eq!(parsed.servers()[0].as_str(), own);
        }

        #[test]
        fn servers_are_unique(f in fragment()) {
            let parsed = Link::parse_fragment(&f).unwrap();
            let servers: Vec<_> = parsed.servers().iter().map(|s| s.as_str()).collect();
            let mut sorted = servers.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), servers.len(), "duplicate server in {:?}", servers);
        }

        #[test]
        fn permalinks_expose_event_ids(r in room_target(), e in event_id()) {
            let parsed = Link::parse_fragment(&format!("#/{r}/{e}")).unwrap();
            prop_assert_eq!(parsed.kind(), LinkKind::Permalink);
            prop_assert!(parsed.event_id().is_some());
        }

        #[test]
        fn non_permalinks_have_no_event_id(u in user_id()) {
            let parsed = Link::parse_fragment(&format!("#/{u}")).unwrap();
            prop_assert!(parsed.event_id().is_none());
        }
    }
}
