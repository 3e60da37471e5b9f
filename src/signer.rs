use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::fmt;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::credentials::Credentials;
use crate::encoding::escape;
use crate::parameters::{ParamValue, ParameterSet};
use crate::util;
use crate::values::*;

type HmacSha1 = Hmac<Sha1>;

/// OAuth 1.0 HMAC-SHA1 signer for a single request.
///
/// Seeded with the protocol parameters on construction; set the method and
/// target, optionally add parameters, then read [`Signer::header_string`].
///
/// ```
/// use oauth1_signer::Signer;
///
/// let mut signer = Signer::new("consumer-key", "consumer-secret");
/// let header = signer
///     .method("post")
///     .target_url("https://api.example.com/v1/payments")
///     .header_string();
/// assert!(header.starts_with("OAuth oauth_consumer_key=\"consumer-key\""));
/// ```
#[derive(Clone)]
pub struct Signer {
    credentials: Credentials,
    http_method: String,
    endpoint: String,
    parameters: ParameterSet,
    // names added by the last `target_from_url`
    query_names: Vec<String>,
}

impl Signer {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Signer::with_credentials(Credentials::new(consumer_key, consumer_secret))
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        let mut parameters = ParameterSet::new();
        parameters.insert(OAUTH_PARAM_KEY_CONSUMER_KEY, credentials.consumer_key());
        parameters.insert(
            OAUTH_PARAM_KEY_SIGNATURE_METHOD,
            OAUTH_VALUE_SIGMETHOD_HMACSHA1,
        );
        parameters.insert(OAUTH_PARAM_KEY_TIMESTAMP, Utc::now().timestamp());
        parameters.insert(OAUTH_PARAM_KEY_NONCE, generate_nonce());
        parameters.insert(OAUTH_PARAM_KEY_VERSION, OAUTH_VALUE_VERSION);
        Signer {
            credentials,
            http_method: DEFAULT_HTTP_METHOD.into(),
            endpoint: String::new(),
            parameters,
            query_names: Vec::new(),
        }
    }

    /// HTTP method, uppercased. Empty input means `GET`.
    pub fn method(&mut self, http_method: &str) -> &mut Self {
        self.http_method = if http_method.is_empty() {
            DEFAULT_HTTP_METHOD.into()
        } else {
            http_method.to_ascii_uppercase()
        };
        self.invalidate();
        self
    }

    /// Target URL, used verbatim. Must not carry a query string.
    pub fn target_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.endpoint = url.into();
        self.invalidate();
        self
    }

    /// Target taken from a full URL: the query moves into the parameters.
    ///
    /// Query parameters of a previous call are replaced, not accumulated.
    /// `oauth_*` names in the query overwrite the existing value.
    pub fn target_from_url(&mut self, url: &url::Url) -> &mut Self {
        let (endpoint, queries) = util::url_to_endpoint_and_queries(url);
        for name in std::mem::take(&mut self.query_names) {
            self.parameters.remove(&name);
        }
        self.endpoint = endpoint;
        for (k, v) in queries {
            if k.starts_with(OAUTH_PARAM_PREFIX) {
                self.parameters.insert(k, v);
                continue;
            }
            if !self.query_names.contains(&k) {
                self.query_names.push(k.clone());
            }
            self.parameters.append(k, v);
        }
        self.invalidate();
        self
    }

    pub fn param(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.invalidate();
        self.parameters.insert(name, value);
        self
    }

    pub fn remove_param(&mut self, name: &str) -> &mut Self {
        self.parameters.remove(name);
        self.invalidate();
        self
    }

    pub fn oauth_nonce(&mut self, nonce: impl Into<String>) -> &mut Self {
        self.param(OAUTH_PARAM_KEY_NONCE, nonce.into())
    }

    pub fn oauth_timestamp(&mut self, timestamp: i64) -> &mut Self {
        self.param(OAUTH_PARAM_KEY_TIMESTAMP, timestamp)
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn http_method(&self) -> &str {
        &self.http_method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The cached `oauth_signature`, if the request has been signed.
    pub fn signature(&self) -> Option<&str> {
        match self.parameters.get(OAUTH_PARAM_KEY_SIGNATURE) {
            Some(ParamValue::Single(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Sorted `key=value` pairs joined with `&`, both sides percent-encoded.
    pub fn normalized_parameters(&self) -> String {
        let mut params = self
            .parameters
            .iter()
            .filter(|(k, _)| is_signed_param(k))
            .map(|(k, v)| {
                let mut values = v.values().into_iter().map(escape).collect::<Vec<String>>();
                values.sort();
                (escape(k), values)
            })
            .collect::<Vec<(String, Vec<String>)>>();

        // then, alphabetic sort by encoded key
        params.sort();

        params
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| format!("{}={}", k, v)))
            .collect::<Vec<String>>()
            .join("&")
    }

    /// `METHOD&url&params`, each part percent-encoded once more.
    pub fn signature_base_string(&self) -> String {
        let normalized = self.normalized_parameters();
        trace!(normalized = %normalized, "normalized OAuth parameters");
        // (parameters end up encoded twice.)
        format!(
            "{}&{}&{}",
            escape(&self.http_method),
            escape(&self.endpoint),
            escape(&normalized)
        )
    }

    /// Compute `oauth_signature` from the current parameters.
    pub fn sign(&mut self) -> &mut Self {
        let base_str = self.signature_base_string();
        let signature = generate_signature_hmacsha1(self.credentials.consumer_secret(), &base_str);
        debug!(
            method = %self.http_method,
            endpoint = %self.endpoint,
            base_string = %base_str,
            "signed OAuth request"
        );
        self.parameters.insert(OAUTH_PARAM_KEY_SIGNATURE, signature);
        self
    }

    /// `Authorization` header value; signs first when there is no signature.
    pub fn header_string(&mut self) -> String {
        if self.signature().is_none() {
            self.sign();
        }
        let clauses = self
            .parameters
            .iter()
            .filter(|(k, _)| k.starts_with(OAUTH_PARAM_PREFIX))
            .flat_map(|(k, v)| match v {
                ParamValue::Single(_) => vec![format!("{}=\"{}\"", k, v.escaped_scalar())],
                ParamValue::List(list) => list
                    .iter()
                    .map(|item| format!("{}=\"{}\"", k, escape(item)))
                    .collect(),
            })
            .collect::<Vec<String>>()
            .join(", ");
        format!("{} {}", OAUTH_HEADER, clauses)
    }

    fn invalidate(&mut self) {
        self.parameters.remove(OAUTH_PARAM_KEY_SIGNATURE);
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("credentials", &self.credentials)
            .field("http_method", &self.http_method)
            .field("endpoint", &self.endpoint)
            .field("parameters", &RedactedParameters(&self.parameters))
            .finish()
    }
}

struct RedactedParameters<'a>(&'a ParameterSet);

impl fmt::Debug for RedactedParameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| {
                let value: &dyn fmt::Debug = if is_secret_param(k) { &"<redacted>" } else { v };
                (k, value)
            }))
            .finish()
    }
}

fn generate_nonce() -> String {
    Uuid::new_v4().simple().to_string()
}

fn is_secret_param(name: &str) -> bool {
    name.len() > SECRET_PARAM_SUFFIX.len() && name.ends_with(SECRET_PARAM_SUFFIX)
}

fn is_signed_param(name: &str) -> bool {
    name != OAUTH_PARAM_KEY_SIGNATURE && name != PARAM_KEY_REALM && !is_secret_param(name)
}

fn generate_signature_hmacsha1(consumer_secret: &str, base_str: &str) -> String {
    // no token in this flow, so the token secret half stays empty
    let sign_key = format!("{}&", escape(consumer_secret));

    // NOTE: HMAC accepts keys of any length, new_from_slice never fails.
    let mut mac = HmacSha1::new_from_slice(sign_key.as_bytes())
        .expect("HMAC-SHA1 accepts any size of keys");
    mac.update(base_str.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
