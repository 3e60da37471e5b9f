use oauth1_signer::{escape, Credentials, ParamValue, Signer};

fn header_pairs(header: &str) -> Vec<(String, String)> {
    header
        .trim_start_matches("OAuth ")
        .split(", ")
        .map(|clause| {
            let (k, v) = clause.split_once('=').unwrap();
            (k.to_string(), v.trim_matches('"').to_string())
        })
        .collect()
}

#[test]
fn test_header_contains_only_oauth_params() {
    let mut signer = Signer::with_credentials(Credentials::new("ck", "cs"));
    signer
        .method("post")
        .target_url("https://api.example.com/v1/payments")
        .param("amount", "15.00")
        .param("currency", "EUR")
        .param("oauth_callback", "https://shop.example.com/return?id=1");
    let pairs = header_pairs(&signer.header_string());
    let names: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "oauth_consumer_key",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_nonce",
            "oauth_version",
            "oauth_callback",
            "oauth_signature",
        ]
    );
    assert_eq!(pairs[5].1, "https%3A%2F%2Fshop.example.com%2Freturn%3Fid%3D1");
    assert_eq!(pairs[6].1, escape(signer.signature().unwrap()));
}

#[test]
fn test_same_inputs_same_signature() {
    let build = || {
        let mut signer = Signer::new("ck", "cs");
        signer
            .method("GET")
            .target_url("https://api.example.com/v1/payments/42")
            .oauth_nonce("fixed")
            .oauth_timestamp(1_600_000_000)
            .param("tags", vec!["b", "a"]);
        signer
    };
    let mut a = build();
    let mut b = build();
    assert_eq!(a.header_string(), b.header_string());

    // a different secret must change the signature
    let mut c = Signer::new("ck", "other");
    c.method("GET")
        .target_url("https://api.example.com/v1/payments/42")
        .oauth_nonce("fixed")
        .oauth_timestamp(1_600_000_000)
        .param("tags", vec!["b", "a"]);
    assert_ne!(a.sign().signature(), c.sign().signature());
}

#[test]
fn test_reinserted_param_signs_the_same() {
    let mut first = Signer::new("ck", "a&b");
    first
        .target_url("https://example.com/x")
        .oauth_nonce("n")
        .oauth_timestamp(0);
    let mut second = first.clone();
    second.remove_param("oauth_nonce").param("oauth_nonce", "n");
    assert_eq!(first.sign().signature(), second.sign().signature());

    // only the header order moves
    assert_ne!(first.header_string(), second.header_string());
    assert_eq!(
        second.parameters().get("oauth_signature"),
        Some(&ParamValue::Single(
            first.signature().unwrap_or_default().to_string()
        ))
    );
}

#[test]
fn test_target_from_url_signs_like_explicit_params() {
    let url = url::Url::parse("https://example.com/x?q=hello%20world&page=2").unwrap();
    let mut from_url = Signer::new("ck", "cs");
    from_url.target_from_url(&url).oauth_nonce("n").oauth_timestamp(0);

    let mut explicit = Signer::new("ck", "cs");
    explicit
        .target_url("https://example.com/x")
        .oauth_nonce("n")
        .oauth_timestamp(0)
        .param("q", "hello world")
        .param("page", "2");

    assert_eq!(
        from_url.signature_base_string(),
        explicit.signature_base_string()
    );
}
