//! Auxiliary query arguments carried by a link fragment.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::encoding::{percent_decode, percent_encode};
use crate::error::ArgsError;
use crate::server_name::ServerName;

/// Prefix of the per-client web instance override keys.
const WEB_INSTANCE_PREFIX: &str = "web-instance[";

/// Parsed query arguments of a link fragment.
///
/// Recognized keys are `via` (repeatable, order preserved), `client` and
/// `sharer` (single-valued, last occurrence wins), and
/// `web-instance[<clientId>]=<host>` overrides. Anything else accumulates
/// into an extras multimap so unknown arguments survive a re-serialization.
///
/// # Examples
///
/// ```
/// use matrix_link::LinkArgs;
///
/// let args = LinkArgs::parse("via=a.org&via=b.org&client=element.io").unwrap();
/// assert_eq!(args.vias().len(), 2);
/// assert_eq!(args.client(), Some("element.io"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkArgs {
    vias: Vec<ServerName>,
    client: Option<String>,
    sharer: Option<String>,
    web_instances: BTreeMap<String, String>,
    extras: BTreeMap<String, Vec<String>>,
}

impl LinkArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses arguments from a query string (without leading '?').
    ///
    /// Values are percent-decoded before interpretation. `via` values must
    /// be valid server names; duplicates are kept here and deduplicated
    /// later when the candidate server list is assembled.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` on malformed percent escapes or invalid `via`
    /// server names.
    pub fn parse(input: &str) -> Result<Self, ArgsError> {
        let mut args = Self::new();
        if input.is_empty() {
            return Ok(args);
        }

        for pair in input.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (raw_key, raw_value) = match pair.find('=') {
                Some(eq_idx) => (&pair[..eq_idx], &pair[eq_idx + 1..]),
                None => (pair, ""),
            };
            let key = percent_decode(raw_key)?;
            let value = percent_decode(raw_value)?;

            match key.as_str() {
                "via" => {
                    let server = ServerName::parse(&value).map_err(|source| {
                        ArgsError::InvalidViaServer {
                            value: value.clone(),
                            source,
                        }
                    })?;
                    args.vias.push(server);
                }
                "client" => args.client = Some(value),
                "sharer" => args.sharer = Some(value),
                _ => {
                    if let Some(id) = web_instance_key(&key) {
                        args.web_instances.insert(id.to_string(), value);
                    } else {
                        args.extras.entry(key).or_default().push(value);
                    }
                }
            }
        }

        Ok(args)
    }

    /// Returns the `via` servers in the order they appeared.
    #[must_use]
    pub fn vias(&self) -> &[ServerName] {
        &self.vias
    }

    /// Returns the originating client ID, if one was given.
    #[must_use]
    pub fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }

    /// Returns the sharer identifier, if one was given.
    #[must_use]
    pub fn sharer(&self) -> Option<&str> {
        self.sharer.as_deref()
    }

    /// Returns the requested web instance for a client ID, if any.
    ///
    /// This is the raw, unvalidated request from the link; resolving it
    /// against a client's trusted allow-list happens downstream.
    #[must_use]
    pub fn web_instance(&self, client_id: &str) -> Option<&str> {
        self.web_instances.get(client_id).map(String::as_str)
    }

    /// Returns the full client-to-instance override map.
    #[must_use]
    pub const fn web_instances(&self) -> &BTreeMap<String, String> {
        &self.web_instances
    }

    /// Returns the values of an unrecognized key, in appearance order.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&[String]> {
        self.extras.get(key).map(Vec::as_slice)
    }

    /// Returns the full extras multimap.
    #[must_use]
    pub const fn extras(&self) -> &BTreeMap<String, Vec<String>> {
        &self.extras
    }

    /// Returns true if no arguments are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vias.is_empty()
            && self.client.is_none()
            && self.sharer.is_none()
            && self.web_instances.is_empty()
            && self.extras.is_empty()
    }

    /// Appends a `via` server.
    pub fn push_via(&mut self, server: ServerName) {
        self.vias.push(server);
    }

    /// Sets the originating client ID.
    pub fn set_client(&mut self, client: impl Into<String>) {
        self.client = Some(client.into());
    }

    /// Sets the sharer identifier.
    pub fn set_sharer(&mut self, sharer: impl Into<String>) {
        self.sharer = Some(sharer.into());
    }

    /// Sets the requested web instance for a client ID.
    pub fn set_web_instance(&mut self, client_id: impl Into<String>, host: impl Into<String>) {
        self.web_instances.insert(client_id.into(), host.into());
    }

    /// Appends a value under an unrecognized key.
    pub fn push_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extras.entry(key.into()).or_default().push(value.into());
    }
}

/// Extracts the client ID from a `web-instance[<id>]` key.
fn web_instance_key(key: &str) -> Option<&str> {
    let id = key.strip_prefix(WEB_INSTANCE_PREFIX)?.strip_suffix(']')?;
    if id.is_empty() { None } else { Some(id) }
}

impl fmt::Display for LinkArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<String> = Vec::new();

        for via in &self.vias {
            pairs.push(format!("via={}", percent_encode(via.as_str())));
        }
        if let Some(client) = &self.client {
            pairs.push(format!("client={}", percent_encode(client)));
        }
        if let Some(sharer) = &self.sharer {
            pairs.push(format!("sharer={}", percent_encode(sharer)));
        }
        for (id, host) in &self.web_instances {
            pairs.push(format!(
                "web-instance[{}]={}",
                percent_encode(id),
                percent_encode(host)
            ));
        }
        for (key, values) in &self.extras {
            for value in values {
                pairs.push(format!("{}={}", percent_encode(key), percent_encode(value)));
            }
        }

        write!(f, "{}", pairs.join("&"))
    }
}

impl FromStr for LinkArgs {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
