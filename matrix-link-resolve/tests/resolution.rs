//! Integration tests for the resolver: capability filtering, the
//! descriptor contract, allow-list hardening, and determinism.

use proptest::prelude::*;

use matrix_link::Link;
use matrix_link_resolve::{
    resolve, ActionKind, Client, ClientRegistry, OpenState, Platform, PreferenceUpdate,
    Preferences,
};

fn sample_links() -> Vec<Link> {
    [
        "#/#rust:matrix.org",
        "#/!qporfwt:matrix.org?via=a.org",
        "#/@alice:example.com",
        "#/+community:matrix.org",
        "#/!qporfwt:matrix.org/$event:matrix.org",
    ]
    .into_iter()
    .map(|f| Link::parse_fragment(f).unwrap())
    .collect()
}

#[test]
fn unsupported_clients_never_resolve() {
    let registry = ClientRegistry::default();
    for link in sample_links() {
        for candidates in [
            vec![Platform::Android, Platform::MobileWeb],
            vec![Platform::Linux, Platform::DesktopWeb],
            vec![Platform::Ios, Platform::MobileWeb],
        ] {
            let views = resolve(&link, &candidates, &Preferences::new(), &registry);
            for view in &views {
                assert!(
                    view.client().supports(&link),
                    "{} resolved for unsupported link {}",
                    view.client().id(),
                    link
                );
            }
        }
    }
}

/// For every platform a client claims, a missing deep link must be covered
/// by instructions or a copy string, unless the OS intercepts generic
/// links there; and where a deep link exists, the textual fallback must be
/// absent.
#[test]
fn textual_fallback_contract() {
    let registry = ClientRegistry::default();
    for client in registry.iter() {
        for &platform in client.platforms() {
            for link in sample_links().iter().filter(|l| client.supports(l)) {
                let deep = client.deep_link(platform, link);
                let instructions = client.link_instructions(platform, link);
                let copy = client.copy_string(platform, link);

                if deep.is_none() && !client.can_intercept_matrix_to_links(platform) {
                    assert!(
                        instructions.is_some() || copy.is_some(),
                        "{} claims {platform} but offers neither a deep link nor a fallback",
                        client.id()
                    );
                }
                if deep.is_some() {
                    assert!(
                        instructions.is_none(),
                        "{} has both a deep link and instructions on {platform}",
                        client.id()
                    );
                }
            }
        }
    }
}

#[test]
fn install_links_order_stores_first() {
    let registry = ClientRegistry::default();
    for client in registry.iter() {
        for &platform in client.platforms() {
            let channels: Vec<_> = client
                .install_links(platform)
                .iter()
                .map(|l| l.channel())
                .collect();
            let first_website = channels.iter().position(|c| !c.is_store());
            if let Some(first_website) = first_website {
                assert!(
                    channels[first_website..].iter().all(|c| !c.is_store()),
                    "{} lists a store after a website link on {platform}",
                    client.id()
                );
            }
        }
    }
}

#[test]
fn resolution_is_byte_identical_across_runs() {
    let registry = ClientRegistry::default();
    let prefs = Preferences::new().reduce(&PreferenceUpdate::SetClient {
        client_id: "element.io".to_string(),
        platform: Platform::DesktopWeb,
    });

    for link in sample_links() {
        let candidates = [Platform::Linux, Platform::DesktopWeb];
        let first = resolve(&link, &candidates, &prefs, &registry);
        let second = resolve(&link, &candidates, &prefs, &registry);
        assert_eq!(
            format!("{first:?}"),
            format!("{second:?}"),
            "resolution differed across runs for {link}"
        );
    }
}

#[test]
fn platform_preference_overrides_native_first() {
    let registry = ClientRegistry::default();
    let link = Link::parse_fragment("#/#rust:matrix.org").unwrap();
    let candidates = [Platform::Linux, Platform::DesktopWeb];
    let prefs = Preferences::new().reduce(&PreferenceUpdate::SetClient {
        client_id: "element.io".to_string(),
        platform: Platform::DesktopWeb,
    });

    let views = resolve(&link, &candidates, &prefs, &registry);
    let element = views
        .iter()
        .find(|v| v.client().id() == "element.io")
        .unwrap();
    assert_eq!(element.proposed_platform(), Platform::DesktopWeb);
    // A web proposal never starts in the Open state.
    assert_eq!(element.open_state(), OpenState::Install);
}

#[test]
fn native_proposal_with_deep_link_starts_open() {
    let registry = ClientRegistry::default();
    let link = Link::parse_fragment("#/#rust:matrix.org").unwrap();
    let candidates = [Platform::Linux, Platform::DesktopWeb];

    let views = resolve(&link, &candidates, &Preferences::new(), &registry);
    let element = views
        .iter()
        .find(|v| v.client().id() == "element.io")
        .unwrap();
    assert_eq!(element.proposed_platform(), Platform::Linux);
    assert_eq!(element.open_state(), OpenState::Open);
    assert_eq!(element.after_primary_activation(), OpenState::Install);
}

#[test]
fn trusted_instance_changes_labels_and_adds_web_action() {
    let registry = ClientRegistry::default();
    let link = Link::parse_fragment(
        "#/#rust:matrix.org?web-instance[element.io]=develop.element.io",
    )
    .unwrap();
    let candidates = [Platform::Linux, Platform::DesktopWeb];

    let views = resolve(&link, &candidates, &Preferences::new(), &registry);
    let element = views
        .iter()
        .find(|v| v.client().id() == "element.io")
        .unwrap();

    let primary = &element.actions()[0];
    assert!(primary.is_primary());
    assert_eq!(primary.label(), "Open in app");

    let web_actions: Vec<_> = element
        .actions()
        .iter()
        .filter(|a| a.kind() == ActionKind::OpenInWeb)
        .collect();
    assert_eq!(web_actions.len(), 1);
    assert_eq!(web_actions[0].label(), "Open on develop.element.io");
    assert!(web_actions[0].url().starts_with("https://develop.element.io/"));
}

#[test]
fn no_duplicate_web_action_when_already_on_web() {
    let registry = ClientRegistry::default();
    let link = Link::parse_fragment(
        "#/#rust:matrix.org?web-instance[element.io]=develop.element.io",
    )
    .unwrap();
    let candidates = [Platform::DesktopWeb];

    let views = resolve(&link, &candidates, &Preferences::new(), &registry);
    let element = views
        .iter()
        .find(|v| v.client().id() == "element.io")
        .unwrap();

    let web_actions: Vec<_> = element
        .actions()
        .iter()
        .filter(|a| a.kind() == ActionKind::OpenInWeb)
        .collect();
    assert_eq!(web_actions.len(), 1, "duplicate actions to the same destination");
    assert!(web_actions[0].is_primary());
    assert_eq!(web_actions[0].label(), "Open on develop.element.io");
}

#[test]
fn untrusted_instance_is_silently_ignored() {
    let registry = ClientRegistry::default();
    let link = Link::parse_fragment(
        "#/#rust:matrix.org?web-instance[element.io]=attacker.example",
    )
    .unwrap();
    let candidates = [Platform::DesktopWeb];

    let views = resolve(&link, &candidates, &Preferences::new(), &registry);
    let element = views
        .iter()
        .find(|v| v.client().id() == "element.io")
        .unwrap();

    let primary = &element.actions()[0];
    assert_eq!(primary.label(), "Continue");
    assert!(primary.url().starts_with("https://app.element.io/"));
    for action in element.actions() {
        assert!(
            !action.url().contains("attacker.example"),
            "attacker host leaked into {}",
            action.url()
        );
    }
}

#[test]
fn every_action_records_the_choice() {
    let registry = ClientRegistry::default();
    let link = Link::parse_fragment("#/#rust:matrix.org").unwrap();
    let candidates = [Platform::Android, Platform::MobileWeb];

    let views = resolve(&link, &candidates, &Preferences::new(), &registry);
    for view in &views {
        for action in view.actions() {
            match action.on_activate() {
                PreferenceUpdate::SetClient { client_id, .. } => {
                    assert_eq!(client_id, view.client().id());
                }
                PreferenceUpdate::Clear => panic!("actions never clear preferences"),
            }
        }
    }
}

proptest! {
    /// The allow-list check must hold for arbitrary, adversarial instance
    /// requests: whatever the link asks for, the resolved instance is
    /// either absent or on the client's fixed list.
    #[test]
    fn preferred_instance_is_always_allow_listed(host in "[a-z0-9./%-]{1,40}") {
        let fragment = format!("#/#rust:matrix.org?web-instance[element.io]={host}");
        if let Ok(link) = Link::parse_fragment(&fragment) {
            let registry = ClientRegistry::default();
            let element = registry.get("element.io").unwrap();
            if let Some(instance) = element.preferred_web_instance(&link) {
                prop_assert!(element.trusted_web_instances().contains(&instance));
            }
        }
    }

    /// Deep links never embed a host that was not allow-listed.
    #[test]
    fn deep_links_never_embed_untrusted_hosts(host in "[a-z0-9.-]{1,30}") {
        prop_assume!(host != "app.element.io");
        prop_assume!(host != "develop.element.io");
        prop_assume!(host != "staging.element.io");
        let fragment = format!("#/#rust:matrix.org?web-instance[element.io]={host}");
        if let Ok(link) = Link::parse_fragment(&fragment) {
            let registry = ClientRegistry::default();
            let element = registry.get("element.io").unwrap();
            if let Some(url) = element.deep_link(Platform::DesktopWeb, &link) {
                prop_assert!(url.starts_with("https://app.element.io/"));
            }
        }
    }
}
