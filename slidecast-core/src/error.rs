use thiserror::Error;

/// A resolution step found neither a slide-level value nor a usable default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("slide {slide}: no background given and defaultBackgrounds is empty")]
    EmptyBackgrounds { slide: u32 },

    #[error("slide {slide}: role '{role}' has no default avatar and the slide does not override both images")]
    UnknownRole { slide: u32, role: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("slide {0} not found")]
    NotFound(u32),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid content: {0}")]
    Invalid(String),

    #[error("content JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
