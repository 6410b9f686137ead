use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    access::{AccessCodeStore, InMemoryAccessCodeStore, tenant_directory},
    config::AppConfig,
    library::{FsDirectoryReader, PdfLibrary},
    utils::LopdfMerger,
};

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    codes: Arc<dyn AccessCodeStore>,
    library: PdfLibrary,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.storage_root)
            .await
            .with_context(|| {
                format!(
                    "failed to ensure storage root at {}",
                    config.storage_root.display()
                )
            })?;

        let codes = InMemoryAccessCodeStore::with_codes(config.seed_access_codes.iter().cloned());
        if !config.seed_access_codes.is_empty() {
            info!(count = codes.len(), "seeded access codes");
        }

        let library = PdfLibrary::new(Arc::new(FsDirectoryReader), Arc::new(LopdfMerger));

        Ok(Self::from_parts(config, Arc::new(codes), library))
    }

    pub fn from_parts(
        config: AppConfig,
        codes: Arc<dyn AccessCodeStore>,
        library: PdfLibrary,
    ) -> Self {
        Self {
            config: Arc::new(config),
            codes,
            library,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn codes(&self) -> &dyn AccessCodeStore {
        self.codes.as_ref()
    }

    pub fn library(&self) -> PdfLibrary {
        self.library.clone()
    }

    /// Root directory holding every folder owned by `code`.
    pub fn tenant_root(&self, code: &str) -> PathBuf {
        self.config.storage_root.join(tenant_directory(code))
    }
}
