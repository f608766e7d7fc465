//! The fixed collection of known clients.

use matrix_link::Link;

use crate::client::Client;
use crate::clients;

/// A read-only, ordered collection of client descriptors.
///
/// Constructed once at startup. The order is the display order: stable
/// clients first, then beta, then alpha, alphabetical within a grade.
///
/// # Examples
///
/// ```
/// use matrix_link_resolve::ClientRegistry;
///
/// let registry = ClientRegistry::default();
/// assert!(registry.get("element.io").is_some());
/// assert!(registry.get("no-such-client").is_none());
/// ```
pub struct ClientRegistry {
    clients: Vec<Box<dyn Client>>,
}

impl ClientRegistry {
    /// Creates a registry from an explicit client list.
    #[must_use]
    pub fn new(clients: Vec<Box<dyn Client>>) -> Self {
        Self { clients }
    }

    /// Returns the client with the given ID, if registered.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Client> {
        self.iter().find(|c| c.id() == id)
    }

    /// Iterates the clients in display order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Client> {
        self.clients.iter().map(|c| &**c)
    }

    /// Returns the clients able to address the given link, in display
    /// order.
    #[must_use]
    pub fn supporting(&self, link: &Link) -> Vec<&dyn Client> {
        self.iter().filter(|c| c.supports(link)).collect()
    }

    /// Returns the number of registered clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns true if no clients are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new(clients::all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_link::Link;

    #[test]
    fn default_registry_has_all_clients() {
        let registry = ClientRegistry::default();
        assert_eq!(registry.len(), 15);
    }

    #[test]
    fn ids_are_unique() {
        let registry = ClientRegistry::default();
        let mut ids: Vec<_> = registry.iter().map(Client::id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn every_client_claims_a_platform() {
        let registry = ClientRegistry::default();
        for client in registry.iter() {
            assert!(
                !client.platforms().is_empty(),
                "{} claims no platforms",
                client.id()
            );
        }
    }

    #[test]
    fn supporting_filters_by_capability() {
        let registry = ClientRegistry::default();
        let group = Link::parse_fragment("#/+group:example.org").unwrap();
        for client in registry.supporting(&group) {
            assert!(client.supports(&group));
        }
    }

    #[test]
    fn stable_clients_lead_the_order() {
        let registry = ClientRegistry::default();
        let maturities: Vec<_> = registry.iter().map(Client::maturity).collect();
        let mut sorted = maturities.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(maturities, sorted, "registry order must be maturity-descending");
    }
}
