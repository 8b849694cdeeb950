use leptos::logging::warn;
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Site configuration baked into the bundle at compile time.
const EMBEDDED_CONFIG: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("contact email `{0}` is not an email address")]
    InvalidEmail(String),

    #[error("demo video id must not be empty")]
    MissingVideoId,

    #[error("social link `{name}` has a non-http url `{url}`")]
    InvalidSocialUrl { name: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
}

/// Brand copy and outbound links shared by the layout and several pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub description: String,
    pub contact_email: String,
    pub location: String,
    pub response_time: String,
    pub demo_video_id: String,
    pub demo_video_title: String,
    pub youtube_url: String,
    pub github_url: String,
    pub socials: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Chronomind".to_string(),
            tagline: "Train family caregivers and students through authentic, interactive scenarios"
                .to_string(),
            description: "A dementia care simulation app that trains family caregivers and \
                          students through authentic, interactive scenarios."
                .to_string(),
            contact_email: "chronomind.contact.dev@gmail.com".to_string(),
            location: "Austin, Texas".to_string(),
            response_time: "2-3 business days".to_string(),
            demo_video_id: "Yd24wNS71aI".to_string(),
            demo_video_title: "Chronomind Demo Preview".to_string(),
            youtube_url: "https://www.youtube.com/@chronomind-dev".to_string(),
            github_url: "https://github.com/lcai000".to_string(),
            socials: vec![
                SocialLink {
                    name: "GitHub".to_string(),
                    icon: "\u{1F4E6}".to_string(),
                    url: "https://github.com/lcai000".to_string(),
                },
                SocialLink {
                    name: "YouTube".to_string(),
                    icon: "\u{25B6}\u{FE0F}".to_string(),
                    url: "https://www.youtube.com/@chronomind-dev".to_string(),
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contact_email.contains('@') {
            return Err(ConfigError::InvalidEmail(self.contact_email.clone()));
        }
        if self.demo_video_id.trim().is_empty() {
            return Err(ConfigError::MissingVideoId);
        }
        for social in &self.socials {
            if !is_http_url(&social.url) {
                return Err(ConfigError::InvalidSocialUrl {
                    name: social.name.clone(),
                    url: social.url.clone(),
                });
            }
        }
        Ok(())
    }

    /// Load the embedded config.
    ///
    /// A broken config never takes the site down: the error is logged and
    /// the built-in defaults are used instead.
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            warn!("Chronomind: invalid site config (using defaults): {}", e);
            Self::default()
        })
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    /// Muted YouTube embed URL for the demo page.
    pub fn demo_embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?mute=1", self.demo_video_id)
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Site config from context, falling back to defaults outside the app tree.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.brand, "Chronomind");
        assert!(!config.socials.is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "location": "Remote" }"#).unwrap();
        assert_eq!(config.location, "Remote");
        assert_eq!(config.brand, "Chronomind");
        assert_eq!(config.contact_email, SiteConfig::default().contact_email);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_email() {
        let err = SiteConfig::from_json(r#"{ "contact_email": "nobody" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEmail(ref e) if e == "nobody"));
    }

    #[test]
    fn test_rejects_empty_video_id() {
        let err = SiteConfig::from_json(r#"{ "demo_video_id": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVideoId));
    }

    #[test]
    fn test_rejects_non_http_social_url() {
        let json = r#"{ "socials": [{ "name": "X", "icon": "x", "url": "javascript:alert(1)" }] }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "social link `X` has a non-http url `javascript:alert(1)`"
        );
    }

    #[test]
    fn test_derived_urls() {
        let config = SiteConfig::default();
        assert_eq!(config.mailto(), "mailto:chronomind.contact.dev@gmail.com");
        assert_eq!(
            config.demo_embed_url(),
            "https://www.youtube.com/embed/Yd24wNS71aI?mute=1"
        );
    }
}
