use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WebdriverConfig {
    pub webdriver: WebdriverSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebdriverSettings {
    /// Base URL the headless browser reaches the application on
    pub baseurl: String,
    /// Base URL as end users see it, for links embedded in reports.
    /// Falls back to `baseurl` when not configured.
    #[serde(default)]
    pub baseurl_user_friendly: Option<String>,
}

impl WebdriverConfig {
    pub fn new(baseurl: impl Into<String>) -> Self {
        Self {
            webdriver: WebdriverSettings {
                baseurl: baseurl.into(),
                baseurl_user_friendly: None,
            },
        }
    }

    pub fn with_user_friendly_baseurl(mut self, baseurl: impl Into<String>) -> Self {
        self.webdriver.baseurl_user_friendly = Some(baseurl.into());
        self
    }
}

pub fn load_webdriver_config() -> anyhow::Result<WebdriverConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/webdriver"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_baseurl_is_optional() {
        let cfg = WebdriverConfig::new("http://0.0.0.0:8080/");
        assert_eq!(cfg.webdriver.baseurl, "http://0.0.0.0:8080/");
        assert!(cfg.webdriver.baseurl_user_friendly.is_none());

        let cfg = cfg.with_user_friendly_baseurl("https://deck.example.com/");
        assert_eq!(
            cfg.webdriver.baseurl_user_friendly.as_deref(),
            Some("https://deck.example.com/")
        );
    }
}
