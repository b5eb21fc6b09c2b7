// Request record handling as exchanged with the host

use kirikae::rewrite::RequestFilter;
use serde_json::{json, Value};

fn viewer_request(uri: &str, querystring: &str, accept: Option<&str>) -> Value {
    let mut headers = json!({
        "host": [{"key": "Host", "value": "d111111abcdef8.cloudfront.net"}],
        "user-agent": [{"key": "User-Agent", "value": "curl/8.4.0"}]
    });
    if let Some(accept) = accept {
        headers["accept"] = json!([{"key": "Accept", "value": accept}]);
    }
    json!({
        "clientIp": "203.0.113.178",
        "method": "GET",
        "uri": uri,
        "querystring": querystring,
        "headers": headers
    })
}

#[test]
fn test_record_rewrite_touches_only_uri() {
    let filter = RequestFilter::default();
    let input = viewer_request("/a1b2/photo.jpg", "w=600&h=400", Some("image/webp,*/*"));

    let output = filter.apply_record(&input.to_string()).unwrap();
    let output: Value = serde_json::from_str(&output).unwrap();

    let mut expected = input.clone();
    expected["uri"] = json!("/a1b2/c/640x360/m/webp/photo.jpg");
    assert_eq!(output, expected);
}

#[test]
fn test_record_rewrite_keeps_extra_header_fields() {
    let filter = RequestFilter::default();
    let mut input = viewer_request("/a1b2/photo.png", "h=64", None);
    input["headers"]["x-origin"] =
        json!([{"key": "X-Origin", "value": "edge", "readOnly": true}]);

    let output = filter.apply_record(&input.to_string()).unwrap();
    let output: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(output["uri"], "/a1b2/h/64/m/png/photo.png");
    assert_eq!(output["headers"], input["headers"]);
}

#[test]
fn test_record_without_sizing_is_byte_identical() {
    let filter = RequestFilter::default();
    let raw = serde_json::to_string_pretty(&viewer_request("/a1b2/photo.jpg", "q=h", None)).unwrap();
    assert_eq!(filter.apply_record(&raw).unwrap(), raw);
}

#[test]
fn test_record_with_malformed_path_is_byte_identical() {
    let filter = RequestFilter::default();
    let raw = viewer_request("/a1b2/photo", "w=300", None).to_string();
    assert_eq!(filter.apply_record(&raw).unwrap(), raw);
}

#[test]
fn test_record_without_uri_is_rejected() {
    let filter = RequestFilter::default();
    assert!(filter.apply_record(r#"{"querystring": "w=300"}"#).is_err());
}
