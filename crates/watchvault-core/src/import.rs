//! Import bundle validation
//!
//! A vault can be exported to JSON and imported into another vault. This
//! module only checks that a bundle is well formed before anything is
//! written; creating the rows is the caller's job.
//!
//! Positions are optional in the file. A missing position takes the item's
//! index within its array, which matches how items are positioned on
//! creation.

use serde::{Deserialize, Serialize};

/// Bundle format versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Import validation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    /// Not JSON, or JSON with the wrong shape
    #[error("Malformed import file: {message}")]
    Malformed {
        /// Parser message
        message: String,
    },

    /// Version field names a format this build cannot read
    #[error("Unsupported import version {version}")]
    UnsupportedVersion {
        /// Version found in the file
        version: u32,
    },

    /// A required text field is blank
    #[error("Empty value at {path}")]
    EmptyField {
        /// JSON-path-like location, e.g. `lists[0].assets[2].ticker`
        path: String,
    },

    /// A position is NaN or infinite
    #[error("Invalid position at {path}")]
    InvalidPosition {
        /// JSON-path-like location
        path: String,
    },
}

/// Kind of resource attached to an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// External link
    Link,
    /// Image URL
    Image,
}

/// Link or image attached to an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResource {
    /// Link or image
    pub kind: ResourceKind,
    /// Target URL
    pub url: String,
    /// Optional display label
    #[serde(default)]
    pub label: Option<String>,
    /// Sort key within the asset
    #[serde(default)]
    pub position: Option<f64>,
}

/// A ticker inside a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportAsset {
    /// Ticker symbol
    pub ticker: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sort key within the list
    #[serde(default)]
    pub position: Option<f64>,
    /// Attached links and images
    #[serde(default)]
    pub resources: Vec<ImportResource>,
}

/// A named list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportList {
    /// Display name
    pub name: String,
    /// Sort key within the vault
    #[serde(default)]
    pub position: Option<f64>,
    /// Assets in the list
    #[serde(default)]
    pub assets: Vec<ImportAsset>,
}

/// Validated import bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBundle {
    /// Format version
    pub version: u32,
    /// Lists in the bundle
    pub lists: Vec<ImportList>,
}

/// Totals of each record kind in a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImportCounts {
    /// Number of lists
    pub lists: usize,
    /// Number of assets across all lists
    pub assets: usize,
    /// Number of resources across all assets
    pub resources: usize,
}

impl ImportBundle {
    /// Count lists, assets, and resources.
    pub fn counts(&self) -> ImportCounts {
        let mut counts = ImportCounts {
            lists: self.lists.len(),
            ..ImportCounts::default()
        };
        for list in &self.lists {
            counts.assets += list.assets.len();
            counts.resources += list.assets.iter().map(|a| a.resources.len()).sum::<usize>();
        }
        counts
    }
}

fn check_text(value: &str, path: impl FnOnce() -> String) -> Result<(), ImportError> {
    if value.trim().is_empty() {
        return Err(ImportError::EmptyField { path: path() });
    }
    Ok(())
}

// Fills a missing position with the array index, rejects non-finite ones.
fn settle_position(
    position: &mut Option<f64>,
    index: usize,
    path: impl FnOnce() -> String,
) -> Result<(), ImportError> {
    match position {
        Some(p) if !p.is_finite() => Err(ImportError::InvalidPosition { path: path() }),
        Some(_) => Ok(()),
        None => {
            *position = Some(index as f64);
            Ok(())
        }
    }
}

/// Parse and validate an import file.
pub fn validate_import(json: &str) -> Result<ImportBundle, ImportError> {
    let mut bundle: ImportBundle =
        serde_json::from_str(json).map_err(|e| ImportError::Malformed {
            message: e.to_string(),
        })?;

    if !SUPPORTED_VERSIONS.contains(&bundle.version) {
        return Err(ImportError::UnsupportedVersion {
            version: bundle.version,
        });
    }

    for (li, list) in bundle.lists.iter_mut().enumerate() {
        check_text(&list.name, || format!("lists[{li}].name"))?;
        settle_position(&mut list.position, li, || format!("lists[{li}].position"))?;

        for (ai, asset) in list.assets.iter_mut().enumerate() {
            let asset_path = || format!("lists[{li}].assets[{ai}]");
            check_text(&asset.ticker, || format!("{}.ticker", asset_path()))?;
            settle_position(&mut asset.position, ai, || {
                format!("{}.position", asset_path())
            })?;

            for (ri, resource) in asset.resources.iter_mut().enumerate() {
                check_text(&resource.url, || {
                    format!("{}.resources[{ri}].url", asset_path())
                })?;
                settle_position(&mut resource.position, ri, || {
                    format!("{}.resources[{ri}].position", asset_path())
                })?;
            }
        }
    }

    tracing::debug!(lists = bundle.lists.len(), "Validated import bundle");
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "version": 1,
        "lists": [
            { "name": "Tech", "position": 0,
              "assets": [
                { "ticker": "AAPL", "notes": "core", "tags": ["mega"], "position": 1.5,
                  "resources": [
                    { "kind": "link", "url": "https://example.com/aapl" },
                    { "kind": "image", "url": "https://example.com/chart.png", "position": 4 }
                  ] },
                { "ticker": "MSFT" }
              ] },
            { "name": "Energy" }
        ]
    }"#;

    #[test]
    fn test_valid_bundle() {
        let bundle = validate_import(SAMPLE).unwrap();
        assert_eq!(
            bundle.counts(),
            ImportCounts {
                lists: 2,
                assets: 2,
                resources: 2
            }
        );
    }

    #[test]
    fn test_missing_positions_take_index() {
        let bundle = validate_import(SAMPLE).unwrap();
        assert_eq!(bundle.lists[1].position, Some(1.0));
        assert_eq!(bundle.lists[0].assets[0].position, Some(1.5));
        assert_eq!(bundle.lists[0].assets[1].position, Some(1.0));
        assert_eq!(bundle.lists[0].assets[0].resources[0].position, Some(0.0));
        assert_eq!(bundle.lists[0].assets[0].resources[1].position, Some(4.0));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            validate_import("not json"),
            Err(ImportError::Malformed { .. })
        ));
    }

    #[test]
    fn test_unknown_resource_kind() {
        let json = r#"{"version":1,"lists":[{"name":"a","assets":[{"ticker":"X",
            "resources":[{"kind":"video","url":"u"}]}]}]}"#;
        assert!(matches!(
            validate_import(json),
            Err(ImportError::Malformed { .. })
        ));
    }

    #[test]
    fn test_unsupported_version() {
        assert_eq!(
            validate_import(r#"{"version":9,"lists":[]}"#),
            Err(ImportError::UnsupportedVersion { version: 9 })
        );
    }

    #[test]
    fn test_blank_ticker_path() {
        let json = r#"{"version":1,"lists":[{"name":"a","assets":[{"ticker":"X"},{"ticker":"  "}]}]}"#;
        assert_eq!(
            validate_import(json),
            Err(ImportError::EmptyField {
                path: "lists[0].assets[1].ticker".to_string()
            })
        );
    }

    #[test]
    fn test_blank_list_name() {
        let json = r#"{"version":1,"lists":[{"name":""}]}"#;
        assert!(matches!(
            validate_import(json),
            Err(ImportError::EmptyField { .. })
        ));
    }
}
