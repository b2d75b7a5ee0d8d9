pub mod check;
pub mod hint;
pub mod init;
pub mod list;
pub mod question;
pub mod quiz;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use mathwiz_content::config::load_config_from;
use mathwiz_content::{load_content, ContentPack, InMemoryRepository, MathwizConfig};

/// Where content and config come from, as given on the command line.
pub struct Source {
    pub content: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Source {
    pub fn config(&self) -> Result<MathwizConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(content) = &self.content {
            config.content_path = content.clone();
        }
        Ok(config)
    }

    /// Resolve the config and load every content pack it points at.
    pub fn packs(&self) -> Result<(MathwizConfig, Vec<ContentPack>)> {
        let config = self.config()?;
        let packs = load_content(&config.content_path)?;
        tracing::debug!(
            content = %config.content_path.display(),
            packs = packs.len(),
            "loaded content packs"
        );
        Ok((config, packs))
    }

    pub fn repository(&self) -> Result<(MathwizConfig, Arc<InMemoryRepository>)> {
        let (config, packs) = self.packs()?;
        Ok((config, Arc::new(InMemoryRepository::from_packs(&packs))))
    }
}
