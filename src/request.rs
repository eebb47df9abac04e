//! Construction of complete request descriptors.
//!
//! [`RequestBuilder`] performs no I/O: it only combines the immutable
//! [`ClientConfig`] with a module, an action and a parameter bag.

use crate::config::ClientConfig;
use crate::params::Params;
use url::Url;
use url::form_urlencoded::Serializer;

/// `Content-Type` sent with verification submissions.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Keys every request carries, filled in by the builder.
const RESERVED_KEYS: [&str; 3] = ["module", "action", "apikey"];

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully built request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// The origin with the request's pairs appended to its query string.
    pub url: Url,
    pub headers: Vec<(&'static str, &'static str)>,
    /// Form-encoded body; only set for [`Method::Post`].
    pub body: Option<String>,
}

/// Turns `(module, action, params)` into a [`RequestDescriptor`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: ClientConfig,
}

impl RequestBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a read request: every parameter goes into the query string,
    /// followed by `module`, `action` and `apikey`.
    pub fn get(&self, module: &str, action: &str, params: &Params) -> RequestDescriptor {
        let mut url = self.config.origin();
        url.query_pairs_mut()
            .extend_pairs(self.normalized(params).pairs())
            .extend_pairs(self.reserved(module, action));

        RequestDescriptor {
            method: Method::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Builds a write request: the query string carries only `module`,
    /// `action` and `apikey`, the parameters travel in a form-encoded body.
    pub fn post_form(&self, module: &str, action: &str, params: &Params) -> RequestDescriptor {
        let mut url = self.config.origin();
        url.query_pairs_mut()
            .extend_pairs(self.reserved(module, action));

        let body = Serializer::new(String::new())
            .extend_pairs(self.normalized(params).pairs())
            .finish();

        RequestDescriptor {
            method: Method::Post,
            url,
            headers: vec![("Content-Type", FORM_CONTENT_TYPE)],
            body: Some(body),
        }
    }

    fn normalized(&self, params: &Params) -> Params {
        let mut normalized = params.normalize(self.config.key_case());
        for key in RESERVED_KEYS {
            normalized.remove(key);
        }
        normalized
    }

    fn reserved<'a>(&'a self, module: &'a str, action: &'a str) -> [(&'a str, &'a str); 3] {
        [
            ("module", module),
            ("action", action),
            ("apikey", self.config.api_key()),
        ]
    }
}

impl From<ClientConfig> for RequestBuilder {
    fn from(config: ClientConfig) -> Self {
        Self::new(config)
    }
}
