//! Page templates served by the HTTP layer.
//!
//! Templates ship inside the binary by default. Pointing the renderer at a
//! directory instead reads them from disk on every request, so a missing file
//! surfaces as [`CloudError::TemplateMissing`] rather than a startup failure.

use std::io::ErrorKind;
use std::path::PathBuf;

use handlebars::Handlebars;
use include_dir::{include_dir, Dir};
use serde::Serialize;
use tracing::debug;

use crate::errors::{CloudError, CloudResult};

static TEMPLATE_DIR: Dir = include_dir!("templates");

pub const INDEX_TEMPLATE: &str = "index.html";

/// Constants substituted into the index page. Nothing here depends on the request.
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    pub title: &'static str,
    pub data_url: &'static str,
}

impl Default for IndexPage {
    fn default() -> Self {
        Self {
            title: "Cloud Animation",
            data_url: "/api/cloud-data",
        }
    }
}

#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded,
    Directory(PathBuf),
}

fn decode_template(name: &str, bytes: &[u8]) -> CloudResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| CloudError::TemplateRender {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

pub struct PageRenderer {
    source: TemplateSource,
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new(source: TemplateSource) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        Self { source, handlebars }
    }

    pub fn embedded() -> Self {
        Self::new(TemplateSource::Embedded)
    }

    pub fn from_dir(path: impl Into<PathBuf>) -> Self {
        Self::new(TemplateSource::Directory(path.into()))
    }

    async fn load(&self, name: &str) -> CloudResult<String> {
        match &self.source {
            TemplateSource::Embedded => {
                let file = TEMPLATE_DIR
                    .get_file(name)
                    .ok_or_else(|| CloudError::TemplateMissing(name.to_string()))?;
                decode_template(name, file.contents())
            }
            TemplateSource::Directory(dir) => {
                let path = dir.join(name);
                debug!("Loading template from {}", path.display());
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| match e.kind() {
                        ErrorKind::NotFound => CloudError::TemplateMissing(name.to_string()),
                        _ => CloudError::TemplateRender {
                            name: name.to_string(),
                            reason: e.to_string(),
                        },
                    })
            }
        }
    }

    pub async fn render<T: Serialize>(&self, name: &str, context: &T) -> CloudResult<String> {
        let template = self.load(name).await?;
        self.handlebars
            .render_template(&template, context)
            .map_err(|e| CloudError::TemplateRender {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    pub async fn render_index(&self) -> CloudResult<String> {
        self.render(INDEX_TEMPLATE, &IndexPage::default()).await
    }
}
