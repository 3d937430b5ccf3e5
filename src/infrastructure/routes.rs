// View-name routing - resolves registered views to application paths
use crate::infrastructure::urls::UrlError;
use std::collections::HashMap;

/// Maps view names ("Chartdeck.dashboard") to path templates with
/// `{placeholder}` segments. This is the view-resolution facility the URL
/// helpers lean on; the web application owns the real routing table, so
/// only the views the headless subsystem links to are registered here.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: HashMap<String, String>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registry pre-populated with the application views screenshots use
    pub fn with_default_views() -> Self {
        let mut registry = Self::new();
        registry.register("Chartdeck.dashboard", "/chartdeck/dashboard/{dashboard_id_or_slug}/");
        registry.register("Chartdeck.slice", "/chartdeck/slice/{slice_id}/");
        registry.register("Chartdeck.explore", "/explore/");
        registry.register("Chartdeck.welcome", "/chartdeck/welcome/");
        registry
    }

    pub fn register(&mut self, view: &str, template: &str) {
        self.routes.insert(view.to_string(), template.to_string());
    }

    /// Build the path for a view. Placeholder params are substituted
    /// percent-encoded; params the template does not mention become query
    /// string arguments, the way Flask's url_for treats unknown kwargs.
    pub fn url_for(&self, view: &str, params: &[(&str, &str)]) -> Result<String, UrlError> {
        let template = self
            .routes
            .get(view)
            .ok_or_else(|| UrlError::UnknownView(view.to_string()))?;

        let mut used = vec![false; params.len()];
        let mut path = String::with_capacity(template.len());
        let mut rest = template.as_str();

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let end = rest[start..]
                .find('}')
                .ok_or_else(|| UrlError::BadTemplate(template.clone()))?;
            let name = &rest[start + 1..start + end];

            let idx = params
                .iter()
                .position(|(k, _)| *k == name)
                .ok_or_else(|| UrlError::MissingParam {
                    view: view.to_string(),
                    param: name.to_string(),
                })?;
            used[idx] = true;
            path.push_str(&urlencoding::encode(params[idx].1));
            rest = &rest[start + end + 1..];
        }
        path.push_str(rest);

        let mut query = String::new();
        for (idx, (key, value)) in params.iter().enumerate() {
            if used[idx] {
                continue;
            }
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&urlencoding::encode(key));
            query.push('=');
            query.push_str(&urlencoding::encode(value));
        }
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }

        Ok(path)
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::with_default_views()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_substitutes_placeholders() {
        let registry = RouteRegistry::with_default_views();
        let path = registry
            .url_for("Chartdeck.dashboard", &[("dashboard_id_or_slug", "births")])
            .unwrap();
        assert_eq!(path, "/chartdeck/dashboard/births/");
    }

    #[test]
    fn test_url_for_encodes_placeholder_values() {
        let registry = RouteRegistry::with_default_views();
        let path = registry
            .url_for("Chartdeck.slice", &[("slice_id", "a b")])
            .unwrap();
        assert_eq!(path, "/chartdeck/slice/a%20b/");
    }

    #[test]
    fn test_extra_params_become_query_arguments() {
        let registry = RouteRegistry::with_default_views();
        let path = registry
            .url_for(
                "Chartdeck.dashboard",
                &[("dashboard_id_or_slug", "11"), ("edit", "true")],
            )
            .unwrap();
        assert_eq!(path, "/chartdeck/dashboard/11/?edit=true");
    }

    #[test]
    fn test_missing_placeholder_param_is_an_error() {
        let registry = RouteRegistry::with_default_views();
        let result = registry.url_for("Chartdeck.dashboard", &[]);
        assert!(matches!(result, Err(UrlError::MissingParam { .. })));
    }

    #[test]
    fn test_unknown_view_is_an_error() {
        let registry = RouteRegistry::with_default_views();
        let result = registry.url_for("Chartdeck.nope", &[]);
        assert!(matches!(result, Err(UrlError::UnknownView(_))));
    }
}
