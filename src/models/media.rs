//! Media descriptors supplied by the slide, stock and upload catalogs
//!
//! The engine never fetches or decodes media. It only carries the
//! descriptor a catalog hands it and passes the metadata through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which catalog a piece of media came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Slide,
    Stock,
    Upload,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Slide => "slide",
            MediaKind::Stock => "stock",
            MediaKind::Upload => "upload",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slide" => Ok(MediaKind::Slide),
            "stock" => Ok(MediaKind::Stock),
            "upload" => Ok(MediaKind::Upload),
            other => Err(format!("Unknown media kind: '{}'", other)),
        }
    }
}

/// Metadata for a slide picked from a slide deck
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Metadata for a clip from a stock video search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Search keyword that surfaced the clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Metadata for a file the author uploaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Kept as the catalog's string so metadata passes through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// A bindable piece of media, tagged by its catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaDescriptor {
    Slide {
        content: String,
        metadata: SlideMetadata,
    },
    Stock {
        content: String,
        metadata: StockMetadata,
    },
    Upload {
        content: String,
        metadata: UploadMetadata,
    },
}

impl MediaDescriptor {
    pub fn slide(content: impl Into<String>, metadata: SlideMetadata) -> Self {
        MediaDescriptor::Slide {
            content: content.into(),
            metadata,
        }
    }

    pub fn stock(content: impl Into<String>, metadata: StockMetadata) -> Self {
        MediaDescriptor::Stock {
            content: content.into(),
            metadata,
        }
    }

    pub fn upload(content: impl Into<String>, metadata: UploadMetadata) -> Self {
        MediaDescriptor::Upload {
            content: content.into(),
            metadata,
        }
    }

    /// Build a descriptor from the flat `{kind, content, metadata}` shape
    /// catalogs hand over. Known keys land in the typed fields, the rest in `extra`.
    pub fn from_parts(
        kind: MediaKind,
        content: impl Into<String>,
        mut metadata: BTreeMap<String, String>,
    ) -> Self {
        let content = content.into();
        match kind {
            MediaKind::Slide => MediaDescriptor::Slide {
                content,
                metadata: SlideMetadata {
                    slide_id: metadata.remove("slideId"),
                    thumbnail: metadata.remove("thumbnail"),
                    extra: metadata,
                },
            },
            MediaKind::Stock => MediaDescriptor::Stock {
                content,
                metadata: StockMetadata {
                    external_id: metadata.remove("externalId"),
                    thumbnail: metadata.remove("thumbnail"),
                    keyword: metadata.remove("keyword"),
                    extra: metadata,
                },
            },
            MediaKind::Upload => MediaDescriptor::Upload {
                content,
                metadata: UploadMetadata {
                    file_name: metadata.remove("fileName"),
                    file_size: metadata.remove("fileSize"),
                    file_type: metadata.remove("fileType"),
                    extra: metadata,
                },
            },
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaDescriptor::Slide { .. } => MediaKind::Slide,
            MediaDescriptor::Stock { .. } => MediaKind::Stock,
            MediaDescriptor::Upload { .. } => MediaKind::Upload,
        }
    }

    /// Short display label (slide title, clip name, file name)
    pub fn content(&self) -> &str {
        match self {
            MediaDescriptor::Slide { content, .. }
            | MediaDescriptor::Stock { content, .. }
            | MediaDescriptor::Upload { content, .. } => content,
        }
    }

    /// Metadata flattened back to the catalog's string map
    pub fn metadata(&self) -> BTreeMap<String, String> {
        fn put(map: &mut BTreeMap<String, String>, key: &str, value: &Option<String>) {
            if let Some(value) = value {
                map.insert(key.to_string(), value.clone());
            }
        }

        match self {
            MediaDescriptor::Slide { metadata, .. } => {
                let mut map = metadata.extra.clone();
                put(&mut map, "slideId", &metadata.slide_id);
                put(&mut map, "thumbnail", &metadata.thumbnail);
                map
            }
            MediaDescriptor::Stock { metadata, .. } => {
                let mut map = metadata.extra.clone();
                put(&mut map, "externalId", &metadata.external_id);
                put(&mut map, "thumbnail", &metadata.thumbnail);
                put(&mut map, "keyword", &metadata.keyword);
                map
            }
            MediaDescriptor::Upload { metadata, .. } => {
                let mut map = metadata.extra.clone();
                put(&mut map, "fileName", &metadata.file_name);
                put(&mut map, "fileSize", &metadata.file_size);
                put(&mut map, "fileType", &metadata.file_type);
                map
            }
        }
    }
}
