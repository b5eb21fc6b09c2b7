// Request filter behaviour with alternate configurations

use kirikae::config::RewriteConfig;
use kirikae::request::Request;
use kirikae::rewrite::{FilterDecision, ProcessingMode, RequestFilter, SizeSpec};

fn rewrite(filter: &RequestFilter, uri: &str, query: &str) -> String {
    filter.apply(Request::new(uri, query)).uri
}

#[test]
fn test_coercion_is_total_for_garbage_input() {
    let filter = RequestFilter::default();
    for query in [
        "w=300&t=&q=",
        "w=300&t=%00&q=%FF",
        "w=300&t=fit&q=medium",
        "w=300&t=f&t=c&q=x",
    ] {
        let decision = filter.decide("/id/pic.png", query, None);
        assert!(decision.is_rewrite(), "{query} -> {decision:?}");
    }
}

#[test]
fn test_malformed_dimensions_use_default() {
    let filter = RequestFilter::default();
    assert_eq!(
        rewrite(&filter, "/id/pic.png", "w=abc&h=-5"),
        "/id/c/360x360/m/png/pic.png"
    );
    assert_eq!(rewrite(&filter, "/id/pic.png", "w=0"), "/id/w/360/m/png/pic.png");
}

#[test]
fn test_alternate_configuration() {
    let config = RewriteConfig {
        allowed_dimensions: vec![100, 500],
        default_dimension: 100,
        variance: 0.5,
        ..RewriteConfig::default()
    };
    let filter = RequestFilter::new(config);

    // 260 falls only in 500's window [250, 750]
    assert_eq!(rewrite(&filter, "/a/b.jpg", "w=260"), "/a/w/500/m/jpeg/b.jpg");
    // 1000 misses every window
    assert_eq!(rewrite(&filter, "/a/b.jpg", "w=1000"), "/a/w/100/m/jpeg/b.jpg");
}

#[test]
fn test_default_transform_from_configuration() {
    let config = RewriteConfig::from_yaml_with_env("default_transform: f\n").unwrap();
    let filter = RequestFilter::new(config);
    assert_eq!(
        rewrite(&filter, "/a/b.png", "w=640&h=640&t=c"),
        "/a/f/640x640/m/png/b.png"
    );
}

#[test]
fn test_decision_exposes_structure() {
    let filter = RequestFilter::default();
    let FilterDecision::Rewrite(path) = filter.decide("/a/b/c.webp", "w=1300&h=900&t=f", None)
    else {
        panic!("expected a rewrite");
    };
    assert_eq!(path.prefix, "/a/b");
    assert_eq!(path.mode, ProcessingMode::Fit);
    assert_eq!(
        path.size,
        SizeSpec::Box {
            width: 1280,
            height: 960
        }
    );
    assert_eq!(path.format, "webp");
    assert_eq!(path.file_name, "c.webp");
}

#[test]
fn test_shared_filter_across_threads() {
    let filter = std::sync::Arc::new(RequestFilter::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let filter = filter.clone();
            std::thread::spawn(move || {
                let width = [16, 64, 240, 360][i];
                rewrite(&filter, "/t/x.png", &format!("w={width}"))
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            "/t/w/16/m/png/x.png",
            "/t/w/64/m/png/x.png",
            "/t/w/240/m/png/x.png",
            "/t/w/360/m/png/x.png",
        ]
    );
}
