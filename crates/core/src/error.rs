use folio_protocol::ProjectCategoryTheme;
use thiserror::Error;

/// A scenario bank that cannot drive the trace animator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("bank `{0}` has no scenarios")]
    Empty(ProjectCategoryTheme),
    #[error("scenario `{route}` in bank `{theme}` has no steps")]
    NoSteps {
        theme: ProjectCategoryTheme,
        route: String,
    },
    #[error("scenario `{route}` in bank `{theme}` does not end with the completion marker `{marker}`")]
    MissingMarker {
        theme: ProjectCategoryTheme,
        route: String,
        marker: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{field}` must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },
    #[error("card margins leave no visible band (top {top} + bottom {bottom} >= 1)")]
    EmptyCardBand { top: f64, bottom: f64 },
    #[error("completion marker must not be empty")]
    EmptyMarker,
    #[error("scenario bank: {0}")]
    Bank(#[from] BankError),
}

/// Host-supplied layout that cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("layout has no box for section `{0}`")]
    MissingSection(&'static str),
    #[error("layout JSON: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("bank: {0}")]
    Bank(#[from] BankError),
}
