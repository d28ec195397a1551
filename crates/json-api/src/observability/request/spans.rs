//! Route names for request spans.

use uuid::Uuid;

/// `METHOD /path` with identifier segments collapsed, so spans group by route.
pub(super) fn route_name(method: &str, path: &str) -> String {
    format!("{method} {}", normalise_path(path))
}

fn normalise_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
