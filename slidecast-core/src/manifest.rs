use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::ContentCatalog;
use crate::error::Result;

/// Every distinct file the resolved content refers to, for preloading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    pub base_path: String,
    pub images: BTreeSet<String>,
    pub audios: BTreeSet<String>,
}

impl AssetManifest {
    pub fn collect(catalog: &ContentCatalog) -> Result<Self> {
        let mut manifest = AssetManifest {
            base_path: catalog.get_defaults().base_path.clone(),
            ..Default::default()
        };

        for slide in catalog.resolve_all()? {
            manifest.images.insert(slide.background);
            for pair in slide.avatars.into_values() {
                manifest.images.insert(pair.static_image);
                manifest.images.insert(pair.animated);
            }
            manifest.audios.extend(slide.audio.into_values());
        }

        log::debug!(
            "Asset manifest: {} images, {} audios",
            manifest.images.len(),
            manifest.audios.len()
        );
        Ok(manifest)
    }

    pub fn full_path(&self, name: &str) -> PathBuf {
        Path::new(&self.base_path).join(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.images.iter().chain(self.audios.iter())
    }

    /// Entries that do not exist under `root`.
    pub fn missing(&self, root: &Path) -> Vec<PathBuf> {
        self.all()
            .map(|name| root.join(self.full_path(name)))
            .filter(|p| !p.is_file())
            .collect()
    }
}
