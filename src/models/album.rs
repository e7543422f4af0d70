//! Normalized catalog response shape
//!
//! The upstream returns a JSON object with a `results` array; each element
//! carries many fields, of which three are kept and renamed. Everything else
//! is ignored.

use serde::{Deserialize, Serialize};

/// One album entry from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Name of the recording artist
    #[serde(rename = "artistName")]
    pub artist_name: String,
    /// Album title
    #[serde(rename = "collectionName")]
    pub album_title: String,
    /// Link to the album page in the catalog
    #[serde(rename = "collectionViewUrl")]
    pub url: String,
}

/// Ordered album list decoded from one upstream response.
///
/// Order matches the upstream response; the list may be empty. A valid JSON
/// body without a `results` field decodes to the empty value rather than
/// failing, so only malformed JSON or a non-object body is a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Albums in upstream response order
    #[serde(rename = "results", default)]
    pub albums: Vec<Album>,
}

impl SearchResults {
    /// Returns true if the response contained no albums.
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Returns the number of albums in the response.
    pub fn len(&self) -> usize {
        self.albums.len()
    }
}
