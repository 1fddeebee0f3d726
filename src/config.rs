use std::path::PathBuf;

use crate::pages::{PageRenderer, TemplateSource};

/// Runtime settings for `cloudscape serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database: String,
    pub cors_origin: Option<String>,
    pub templates: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database: "cloudscape.db".to_string(),
            cors_origin: None,
            templates: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn template_source(&self) -> TemplateSource {
        match &self.templates {
            Some(dir) => TemplateSource::Directory(dir.clone()),
            None => TemplateSource::Embedded,
        }
    }

    pub fn page_renderer(&self) -> PageRenderer {
        PageRenderer::new(self.template_source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(matches!(config.template_source(), TemplateSource::Embedded));
    }

    #[test]
    fn test_template_directory_override() {
        let config = ServerConfig {
            templates: Some(PathBuf::from("/srv/templates")),
            ..Default::default()
        };
        match config.template_source() {
            TemplateSource::Directory(dir) => assert_eq!(dir, PathBuf::from("/srv/templates")),
            other => panic!("unexpected source: {:?}", other),
        }
    }
}
