// Screenshot URL composition - Use case for the headless rendering subsystem
use crate::infrastructure::config::WebdriverConfig;
use crate::infrastructure::routes::RouteRegistry;
use crate::infrastructure::urls::{UrlError, get_url_path, modify_url_query};

/// Dashboard URL for a headless capture: the dashboard view in standalone
/// mode, so navigation chrome stays out of the screenshot.
pub fn dashboard_standalone_url(
    cfg: &WebdriverConfig,
    registry: &RouteRegistry,
    dashboard_id_or_slug: &str,
) -> Result<String, UrlError> {
    let url = get_url_path(
        cfg,
        registry,
        "Chartdeck.dashboard",
        &[("dashboard_id_or_slug", dashboard_id_or_slug)],
        false,
    )?;
    Ok(modify_url_query(&url, &[("standalone", "true")]))
}

/// Single-chart URL for a headless capture
pub fn slice_standalone_url(
    cfg: &WebdriverConfig,
    registry: &RouteRegistry,
    slice_id: u64,
) -> Result<String, UrlError> {
    let slice_id = slice_id.to_string();
    let url = get_url_path(
        cfg,
        registry,
        "Chartdeck.slice",
        &[("slice_id", &slice_id)],
        false,
    )?;
    Ok(modify_url_query(&url, &[("standalone", "true")]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (WebdriverConfig, RouteRegistry) {
        (
            WebdriverConfig::new("http://0.0.0.0:8080/"),
            RouteRegistry::with_default_views(),
        )
    }

    #[test]
    fn test_dashboard_standalone_url() {
        let (cfg, registry) = setup();
        let url = dashboard_standalone_url(&cfg, &registry, "multi_tabs_test").unwrap();
        assert_eq!(
            url,
            "http://0.0.0.0:8080/chartdeck/dashboard/multi_tabs_test/?standalone=true"
        );
    }

    #[test]
    fn test_slice_standalone_url() {
        let (cfg, registry) = setup();
        let url = slice_standalone_url(&cfg, &registry, 83).unwrap();
        assert_eq!(url, "http://0.0.0.0:8080/chartdeck/slice/83/?standalone=true");
    }

    #[test]
    fn test_standalone_flag_is_not_duplicated() {
        let (cfg, registry) = setup();
        let url = dashboard_standalone_url(&cfg, &registry, "11").unwrap();
        let again = modify_url_query(&url, &[("standalone", "true")]);
        assert_eq!(url, again);
    }
}
