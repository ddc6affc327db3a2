pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod model;
pub mod resolver;
pub mod timeline;
pub mod validate;

pub use catalog::ContentCatalog;
pub use error::{CatalogError, ConfigError};
pub use manifest::AssetManifest;
pub use model::{DefaultConfig, ResolvedSlide, Role, Slide, SubtitleLine};
pub use timeline::SlideTimeline;
