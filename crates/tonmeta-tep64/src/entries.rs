//! Typed entity records for TEP-64 metadata.
//!
//! The same records decode from either layout: on-chain dictionaries or
//! off-chain JSON. JSON field names are lower snake case, unknown fields are
//! ignored, numbers may arrive as numeric strings, and `None` fields are
//! omitted when serializing.

use serde::{Deserialize, Deserializer, Serialize};

use crate::categories::{
    CategoryKey, CATEGORY_DECIMALS, CATEGORY_DESCRIPTION, CATEGORY_IMAGE, CATEGORY_IMAGE_DATA,
    CATEGORY_NAME, CATEGORY_SYMBOL,
};

/// The standard default for jetton decimals. Never written to the wire;
/// consumers assume it when the category is absent.
pub const DEFAULT_DECIMALS: u32 = 9;

/// Jetton (fungible token) metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonEntries {
    /// Token name (e.g. "Toncoin").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Token description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token symbol (e.g. "TON"). UTF-8 string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Number of decimal places. Defaults to 9.
    #[serde(deserialize_with = "number_from_string")]
    pub decimals: u32,
    /// Inline image: binary for on-chain layout, base64 for off-chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// URI pointing to the token icon. ASCII string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Default for JettonEntries {
    fn default() -> Self {
        JettonEntries {
            name: None,
            description: None,
            symbol: None,
            decimals: DEFAULT_DECIMALS,
            image_data: None,
            image: None,
        }
    }
}

impl JettonEntries {
    /// Collect the populated categories for on-chain encoding.
    ///
    /// Fields at their defaults are omitted entirely: `decimals` only when
    /// it differs from 9 (as its decimal-string form), strings only when
    /// non-empty.
    pub fn to_entries(&self) -> Vec<(CategoryKey, String)> {
        let mut result = Vec::new();

        if self.decimals != DEFAULT_DECIMALS {
            result.push((CATEGORY_DECIMALS, self.decimals.to_string()));
        }
        if let Some(name) = non_empty(&self.name) {
            result.push((CATEGORY_NAME, name.to_string()));
        }
        if let Some(description) = non_empty(&self.description) {
            result.push((CATEGORY_DESCRIPTION, description.to_string()));
        }
        if let Some(symbol) = non_empty(&self.symbol) {
            result.push((CATEGORY_SYMBOL, symbol.to_string()));
        }
        if let Some(image_data) = non_empty(&self.image_data) {
            result.push((CATEGORY_IMAGE_DATA, image_data.to_string()));
        }
        if let Some(image) = non_empty(&self.image) {
            result.push((CATEGORY_IMAGE, image.to_string()));
        }

        result
    }
}

/// NFT item metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftItemEntries {
    /// Name of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Describes the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image content: a URI off-chain, reassembled inline data on-chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Link to the item's own content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Item traits. The on-chain decode rule for this category is not yet
    /// specified; on-chain decode leaves this empty.
    pub attributes: Vec<AttributeItem>,
}

/// A single NFT trait.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeItem {
    /// Trait type (e.g. "Background").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trait_type: Option<String>,
    /// Trait value (e.g. "Blue").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// NFT collection metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCollectionEntries {
    /// Collection image URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Collection name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Collection description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Social links. The on-chain list decode for this category is not yet
    /// specified; on-chain decode leaves this empty.
    pub social_links: Vec<String>,
    /// Marketplace for this collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Accepts a JSON number or a numeric string.
fn number_from_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
