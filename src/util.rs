/// Split a URL into the base string URI and its decoded query pairs.
///
/// The endpoint drops the query and fragment; pairs keep their order.
pub fn url_to_endpoint_and_queries(url: &url::Url) -> (String, Vec<(String, String)>) {
    let queries = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut endpoint = url.clone();
    endpoint.set_query(None);
    endpoint.set_fragment(None);
    (endpoint.to_string(), queries)
}
