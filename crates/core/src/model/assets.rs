use std::collections::HashSet;

use serde::Serialize;

use crate::model::project::{Mockup, MockupView};

/// Source of mockup images the host can actually show.
pub trait AssetCatalog {
    fn contains(&self, path: &str) -> bool;
}

/// Catalog backed by a fixed list of known paths.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    paths: HashSet<String>,
}

impl StaticAssets {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetCatalog for StaticAssets {
    fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

/// Catalog with no images at all; every mockup renders as a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetCatalog for NoAssets {
    fn contains(&self, _path: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MockupImage {
    Asset { path: &'static str },
    Placeholder { view: MockupView },
}

pub fn resolve_mockup_image(mockup: &Mockup, assets: &dyn AssetCatalog) -> MockupImage {
    if assets.contains(mockup.image) {
        MockupImage::Asset { path: mockup.image }
    } else {
        log::debug!("no asset for mockup `{}`, using placeholder", mockup.image);
        MockupImage::Placeholder { view: mockup.view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::project_by_id;

    #[test]
    fn known_asset_resolves_to_path() {
        let mockups = project_by_id("rotaz").expect("rotaz exists").detail.mockups;
        let assets = StaticAssets::new(["rotaz/mapa-agrupamento.webp"]);
        assert_eq!(
            resolve_mockup_image(&mockups[0], &assets),
            MockupImage::Asset {
                path: "rotaz/mapa-agrupamento.webp"
            }
        );
        assert_eq!(
            resolve_mockup_image(&mockups[2], &assets),
            MockupImage::Placeholder {
                view: MockupView::Mobile
            }
        );
    }

    #[test]
    fn placeholder_serializes_its_view() {
        let json = serde_json::to_string(&MockupImage::Placeholder {
            view: MockupView::Dashboard,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"placeholder","view":"dashboard"}"#);
    }
}
