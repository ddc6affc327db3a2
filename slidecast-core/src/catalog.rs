use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::{DefaultConfig, ResolvedSlide, Slide};
use crate::resolver;

static BUILTIN: Lazy<ContentCatalog> = Lazy::new(|| {
    ContentCatalog::from_json_str(include_str!("../data/builtin.json"))
        .expect("bundled content must parse")
});

/// On-disk shape of a content file.
#[derive(Serialize, Deserialize)]
struct ContentDocument {
    #[serde(flatten)]
    defaults: DefaultConfig,
    #[serde(default, deserialize_with = "unique_slides")]
    slides: BTreeMap<u32, Slide>,
}

/// Immutable slide table plus its defaults.
///
/// There is no way to change a catalog once built, so it can be shared
/// between threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    defaults: DefaultConfig,
    slides: BTreeMap<u32, Slide>,
}

impl ContentCatalog {
    /// Builds a catalog from already-numbered slides.
    pub fn new(defaults: DefaultConfig, slides: impl IntoIterator<Item = Slide>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for slide in slides {
            if slide.number == 0 {
                return Err(CatalogError::Invalid("slide numbers start at 1".into()));
            }
            let number = slide.number;
            if table.insert(number, slide).is_some() {
                return Err(CatalogError::Invalid(format!("slide {} defined twice", number)));
            }
        }
        Ok(Self { defaults, slides: table })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: ContentDocument = serde_json::from_str(content)?;
        let catalog = Self { defaults: doc.defaults, slides: doc.slides };
        debug!("Parsed content: {} slides", catalog.slides.len());
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content: {:?}", path))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse content: {:?}", path))?;
        info!("Content loaded from {:?}. Slides: {}", path, catalog.len());
        Ok(catalog)
    }

    /// The content shipped with the crate.
    pub fn builtin() -> &'static ContentCatalog {
        &BUILTIN
    }

    pub fn to_json_string(&self) -> Result<String> {
        let doc = ContentDocument { defaults: self.defaults.clone(), slides: self.slides.clone() };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    pub fn get_slide(&self, number: u32) -> Result<&Slide> {
        self.slides.get(&number).ok_or(CatalogError::NotFound(number))
    }

    pub fn list_slide_numbers(&self) -> Vec<u32> {
        self.slides.keys().copied().collect()
    }

    pub fn get_defaults(&self) -> &DefaultConfig {
        &self.defaults
    }

    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.values()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn resolve(&self, number: u32) -> Result<ResolvedSlide> {
        let slide = self.get_slide(number)?;
        Ok(resolver::resolve_slide(slide, &self.defaults)?)
    }

    /// Resolves every slide in ascending order, stopping at the first failure.
    pub fn resolve_all(&self) -> Result<Vec<ResolvedSlide>> {
        self.slides
            .values()
            .map(|s| resolver::resolve_slide(s, &self.defaults).map_err(CatalogError::from))
            .collect()
    }
}

fn unique_slides<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<u32, Slide>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SlideTable;

    impl<'de> Visitor<'de> for SlideTable {
        type Value = BTreeMap<u32, Slide>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from positive slide numbers to slides")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
            let mut slides = BTreeMap::new();
            while let Some((number, mut slide)) = map.next_entry::<u32, Slide>()? {
                if number == 0 {
                    return Err(de::Error::custom("slide numbers start at 1"));
                }
                if slides.contains_key(&number) {
                    return Err(de::Error::custom(format!("slide {} defined twice", number)));
                }
                slide.number = number;
                slides.insert(number, slide);
            }
            Ok(slides)
        }
    }

    deserializer.deserialize_map(SlideTable)
}
