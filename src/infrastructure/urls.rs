// URL helpers for the headless rendering subsystem
use crate::infrastructure::config::WebdriverConfig;
use crate::infrastructure::routes::RouteRegistry;
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("invalid base url {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("cannot join {path} onto the configured base url: {source}")]
    Join {
        path: String,
        source: url::ParseError,
    },

    #[error("no view registered as {0}")]
    UnknownView(String),

    #[error("view {view} requires parameter {param}")]
    MissingParam { view: String, param: String },

    #[error("malformed route template {0}")]
    BadTemplate(String),
}

/// Base URL the rendering subsystem should target. The user-friendly
/// variant is for links that end up in front of people (report emails),
/// and falls back to the headless base when not configured.
pub fn get_url_host(cfg: &WebdriverConfig, user_friendly: bool) -> &str {
    if user_friendly {
        cfg.webdriver
            .baseurl_user_friendly
            .as_deref()
            .unwrap_or(&cfg.webdriver.baseurl)
    } else {
        &cfg.webdriver.baseurl
    }
}

/// Join an application path onto the configured base URL
pub fn headless_url(cfg: &WebdriverConfig, path: &str, user_friendly: bool) -> Result<String, UrlError> {
    let host = get_url_host(cfg, user_friendly);
    let base = Url::parse(host).map_err(|source| UrlError::InvalidBaseUrl {
        url: host.to_string(),
        source,
    })?;
    let joined = base.join(path).map_err(|source| UrlError::Join {
        path: path.to_string(),
        source,
    })?;
    Ok(joined.into())
}

/// Resolve a named view and join it onto the configured base URL
pub fn get_url_path(
    cfg: &WebdriverConfig,
    registry: &RouteRegistry,
    view: &str,
    params: &[(&str, &str)],
    user_friendly: bool,
) -> Result<String, UrlError> {
    let path = registry.url_for(view, params)?;
    tracing::debug!("Resolved view {} to {}", view, path);
    headless_url(cfg, &path, user_friendly)
}

/// Replace or add query parameters on a URL.
///
/// Existing keys keep their position and new keys append at the end. A key
/// that repeats in the incoming query keeps only its first value, and blank
/// values are dropped on the way in. Values are percent-encoded on the way
/// out, so repeated identical calls settle on the same string.
pub fn modify_url_query(url: &str, params: &[(&str, &str)]) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };
    let (base, query) = match without_fragment.split_once('?') {
        Some((head, query)) => (head, query),
        None => (without_fragment, ""),
    };

    let mut order: Vec<String> = Vec::new();
    let mut values: HashMap<String, String> = HashMap::new();

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.is_empty() || value.is_empty() {
            continue;
        }
        let key = decode_component(key);
        if !values.contains_key(&key) {
            order.push(key.clone());
            values.insert(key, decode_component(value));
        }
    }

    for (key, value) in params {
        if !values.contains_key(*key) {
            order.push(key.to_string());
        }
        values.insert(key.to_string(), value.to_string());
    }

    let rewritten = order
        .iter()
        .map(|key| format!("{}={}", key, urlencoding::encode(&values[key])))
        .collect::<Vec<_>>()
        .join("&");

    let mut out = String::from(base);
    if !rewritten.is_empty() {
        out.push('?');
        out.push_str(&rewritten);
    }
    if let Some(frag) = fragment {
        out.push('#');
        out.push_str(frag);
    }
    out
}

// Query components use application/x-www-form-urlencoded, where '+' is a space
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// True only when the URL parses and its scheme is https
pub fn is_secure_url(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| parsed.scheme() == "https")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WebdriverConfig {
        WebdriverConfig::new("http://0.0.0.0:8080/")
            .with_user_friendly_baseurl("https://deck.example.com/")
    }

    #[test]
    fn test_get_url_host_picks_the_configured_base() {
        let cfg = test_config();
        assert_eq!(get_url_host(&cfg, false), "http://0.0.0.0:8080/");
        assert_eq!(get_url_host(&cfg, true), "https://deck.example.com/");
    }

    #[test]
    fn test_get_url_host_falls_back_without_user_friendly_base() {
        let cfg = WebdriverConfig::new("http://0.0.0.0:8080/");
        assert_eq!(get_url_host(&cfg, true), "http://0.0.0.0:8080/");
    }

    #[test]
    fn test_headless_url_preserves_scheme_and_host() {
        let cfg = test_config();
        let url = headless_url(&cfg, "/chartdeck/dashboard/1/", false).unwrap();
        assert_eq!(url, "http://0.0.0.0:8080/chartdeck/dashboard/1/");

        let url = headless_url(&cfg, "/chartdeck/dashboard/1/", true).unwrap();
        assert_eq!(url, "https://deck.example.com/chartdeck/dashboard/1/");
    }

    #[test]
    fn test_headless_url_resolves_relative_paths() {
        let cfg = WebdriverConfig::new("http://0.0.0.0:8080/app/");
        let url = headless_url(&cfg, "welcome", false).unwrap();
        assert_eq!(url, "http://0.0.0.0:8080/app/welcome");
    }

    #[test]
    fn test_headless_url_rejects_a_bad_base() {
        let cfg = WebdriverConfig::new("not a url");
        assert!(matches!(
            headless_url(&cfg, "/x/", false),
            Err(UrlError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_get_url_path_joins_the_resolved_view() {
        let cfg = test_config();
        let registry = RouteRegistry::with_default_views();
        let url = get_url_path(
            &cfg,
            &registry,
            "Chartdeck.dashboard",
            &[("dashboard_id_or_slug", "births")],
            false,
        )
        .unwrap();
        assert_eq!(url, "http://0.0.0.0:8080/chartdeck/dashboard/births/");
    }

    #[test]
    fn test_modify_url_query_adds_parameters() {
        let url = modify_url_query("http://example.com/p", &[("standalone", "true")]);
        assert_eq!(url, "http://example.com/p?standalone=true");
    }

    #[test]
    fn test_modify_url_query_replaces_in_place() {
        let url = modify_url_query(
            "http://example.com/p?foo=bar&baz=1",
            &[("foo", "new")],
        );
        assert_eq!(url, "http://example.com/p?foo=new&baz=1");
    }

    #[test]
    fn test_modify_url_query_is_idempotent() {
        let once = modify_url_query(
            "http://example.com/p?a=1&b=x y",
            &[("standalone", "true")],
        );
        let twice = modify_url_query(&once, &[("standalone", "true")]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_modify_url_query_encodes_values() {
        let url = modify_url_query("http://example.com/p", &[("q", "a b/c")]);
        assert_eq!(url, "http://example.com/p?q=a%20b%2Fc");
    }

    #[test]
    fn test_modify_url_query_drops_blank_values_and_repeats() {
        let url = modify_url_query(
            "http://example.com/p?a=&b=1&b=2",
            &[("c", "3")],
        );
        assert_eq!(url, "http://example.com/p?b=1&c=3");
    }

    #[test]
    fn test_modify_url_query_keeps_the_fragment() {
        let url = modify_url_query("http://example.com/p?x=1#frag", &[("x", "2")]);
        assert_eq!(url, "http://example.com/p?x=2#frag");
    }

    #[test]
    fn test_is_secure_url() {
        assert!(is_secure_url("https://deck.example.com/"));
        assert!(!is_secure_url("http://deck.example.com/"));
        assert!(!is_secure_url("deck.example.com"));
        assert!(!is_secure_url(""));
    }
}
