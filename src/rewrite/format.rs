//! Output format negotiation
//!
//! The only capability probed is WebP support: when the first `Accept`
//! value mentions the configured token the image service is asked for
//! WebP, otherwise the source extension is forwarded in lower case with
//! `jpg` spelled `jpeg`.

use crate::config::RewriteConfig;

/// Lower-case an extension, normalizing `jpg` to `jpeg`
pub fn normalize_extension(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower == "jpg" {
        "jpeg".to_string()
    } else {
        lower
    }
}

/// Whether the client advertises the configured WebP token.
///
/// Plain substring match, case-sensitive, no q-value parsing.
pub fn accepts_webp(accept: Option<&str>, config: &RewriteConfig) -> bool {
    accept.is_some_and(|value| value.contains(config.webp_token.as_str()))
}

/// Pick the format segment for the rewritten path
pub fn negotiate_format(accept: Option<&str>, extension: &str, config: &RewriteConfig) -> String {
    if accepts_webp(accept, config) {
        config.webp_token.clone()
    } else {
        normalize_extension(extension)
    }
}
