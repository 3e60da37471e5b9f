pub const OAUTH_VALUE_VERSION: &str = "1.0";

pub const OAUTH_VALUE_SIGMETHOD_HMACSHA1: &str = "HMAC-SHA1";

pub const OAUTH_HEADER: &str = "OAuth";

pub const OAUTH_PARAM_PREFIX: &str = "oauth_";
pub const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
pub const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";

// "realm" travels in the header only, never in the signature base string.
pub const PARAM_KEY_REALM: &str = "realm";

pub const SECRET_PARAM_SUFFIX: &str = "_secret";

pub const DEFAULT_HTTP_METHOD: &str = "GET";
