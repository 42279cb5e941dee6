//! TEP-64 content layout: dispatch, entity assembly, on-chain encoding.
//!
//! A content cell starts with a one-byte layout discriminator:
//!
//! - `0x01`: off-chain — the rest of the root cell is a (possibly chained)
//!   string holding a URI to a metadata JSON document
//! - anything else: on-chain — the rest is a 256-bit-keyed dictionary from
//!   category keys to value cells
//!
//! Observed on-chain content from non-conforming contracts uses stray
//! discriminator values for on-chain layout, so only `0x01` selects the
//! off-chain path.

use std::collections::BTreeMap;
use std::sync::Arc;

use tonmeta_cell::{try_load_dict, Cell, CellBuilder, CellSlice};
use tracing::trace;

use crate::categories::{
    CATEGORY_CONTENT_URL, CATEGORY_DECIMALS, CATEGORY_DESCRIPTION, CATEGORY_IMAGE,
    CATEGORY_IMAGE_DATA, CATEGORY_MARKETPLACE, CATEGORY_NAME, CATEGORY_SYMBOL,
};
use crate::entries::{JettonEntries, NftCollectionEntries, NftItemEntries};
use crate::error::{MetaError, MetaResult};
use crate::offchain::{combine_item_uri, fetch_entries, resolve_uri};

/// Layout discriminator for off-chain content.
pub const OFFCHAIN_LAYOUT: u8 = 0x01;

/// Layout discriminator for on-chain content.
pub const ONCHAIN_LAYOUT: u8 = 0x00;

/// Key width of on-chain content dictionaries.
pub const CONTENT_KEY_BITS: usize = 256;

/// Loads token metadata from content cells, fetching off-chain documents
/// over a shared HTTP client.
///
/// The loader is cheap to clone and safe to use from concurrent tasks; the
/// underlying client pools connections across calls.
#[derive(Debug, Clone, Default)]
pub struct TokenMetadataLoader {
    http: reqwest::Client,
}

impl TokenMetadataLoader {
    /// Create a loader with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader over an existing HTTP client.
    pub fn with_client(http: reqwest::Client) -> Self {
        TokenMetadataLoader { http }
    }

    /// Load jetton metadata from its content cell.
    ///
    /// Returns `Ok(None)` when the content carries nothing to decode: an
    /// empty off-chain URI, or an on-chain layout without a readable
    /// dictionary.
    pub async fn load_jetton_content(&self, content: &Cell) -> MetaResult<Option<JettonEntries>> {
        let mut slice = content.begin_read();

        if slice.load_u8()? == OFFCHAIN_LAYOUT {
            let Some(url) = offchain_url(&mut slice)? else {
                return Ok(None);
            };
            return Ok(Some(fetch_entries(&self.http, &url).await?));
        }

        let Some(dict) = try_load_dict(&mut slice, CONTENT_KEY_BITS) else {
            return Ok(None);
        };

        let mut result = JettonEntries::default();
        for (key, mut value) in dict {
            if key == CATEGORY_NAME {
                result.name = Some(value.load_string_snake()?);
            } else if key == CATEGORY_DESCRIPTION {
                result.description = Some(value.load_string_snake()?);
            } else if key == CATEGORY_SYMBOL {
                result.symbol = Some(value.load_string_snake()?);
            } else if key == CATEGORY_DECIMALS {
                let text = value.load_string_snake()?;
                result.decimals = text
                    .trim()
                    .parse()
                    .map_err(|_| MetaError::InvalidDecimals(text))?;
            } else if key == CATEGORY_IMAGE_DATA {
                result.image_data = Some(value.load_string_snake()?);
            } else if key == CATEGORY_IMAGE {
                result.image = Some(value.load_string_snake()?);
            } else {
                trace!(key = ?key, "ignoring unknown metadata category");
            }
        }

        Ok(Some(result))
    }

    /// Load NFT item metadata from the item content cell and the item's
    /// individual content cell.
    ///
    /// For off-chain layout the final URL is the collection base combined
    /// with the individual suffix; see
    /// [`combine_item_uri`](crate::offchain::combine_item_uri).
    pub async fn load_nft_item_content(
        &self,
        item_content: &Cell,
        individual_content: &Cell,
    ) -> MetaResult<Option<NftItemEntries>> {
        let mut slice = item_content.begin_read();

        if slice.load_u8()? == OFFCHAIN_LAYOUT {
            let Some(base) = offchain_url(&mut slice)? else {
                return Ok(None);
            };
            let suffix = individual_content.begin_read().load_string()?;
            let url = combine_item_uri(&base, &suffix);
            return Ok(Some(fetch_entries(&self.http, &url).await?));
        }

        let Some(dict) = try_load_dict(&mut slice, CONTENT_KEY_BITS) else {
            return Ok(None);
        };

        let mut result = NftItemEntries::default();
        for (key, mut value) in dict {
            if key == CATEGORY_NAME {
                result.name = Some(value.load_string_snake()?);
            } else if key == CATEGORY_DESCRIPTION {
                result.description = Some(value.load_string_snake()?);
            } else if key == CATEGORY_IMAGE_DATA {
                result.image = Some(value.load_string_chunked()?);
            } else if key == CATEGORY_CONTENT_URL {
                result.content_url = Some(value.load_string_snake()?);
            }
            // attributes: decode rule not yet specified, field stays empty.
        }

        Ok(Some(result))
    }

    /// Load NFT collection metadata from its content cell.
    pub async fn load_nft_collection_content(
        &self,
        collection_content: &Cell,
    ) -> MetaResult<Option<NftCollectionEntries>> {
        let mut slice = collection_content.begin_read();

        if slice.load_u8()? == OFFCHAIN_LAYOUT {
            let Some(url) = offchain_url(&mut slice)? else {
                return Ok(None);
            };
            return Ok(Some(fetch_entries(&self.http, &url).await?));
        }

        let Some(dict) = try_load_dict(&mut slice, CONTENT_KEY_BITS) else {
            return Ok(None);
        };

        let mut result = NftCollectionEntries::default();
        for (key, mut value) in dict {
            if key == CATEGORY_IMAGE {
                result.image = Some(value.load_string()?);
            } else if key == CATEGORY_NAME {
                result.name = Some(value.load_string()?);
            } else if key == CATEGORY_DESCRIPTION {
                result.description = Some(value.load_string()?);
            } else if key == CATEGORY_MARKETPLACE {
                result.marketplace = Some(value.load_string()?);
            }
            // SocialLinks: list decode not yet specified, field stays empty.
        }

        Ok(Some(result))
    }
}

/// Read and resolve the off-chain URI from the remainder of a root cell.
///
/// An empty URI means there is no off-chain data to load; IPFS URIs are
/// rewritten to the public gateway.
fn offchain_url(slice: &mut CellSlice<'_>) -> MetaResult<Option<String>> {
    let uri = slice.load_string()?;
    if uri.is_empty() {
        return Ok(None);
    }
    Ok(Some(resolve_uri(&uri)))
}

/// Encode jetton metadata as an on-chain content cell.
///
/// Produces the on-chain discriminator followed by a dictionary holding one
/// snake-encoded value per populated category; default-valued fields are
/// omitted entirely.
pub fn build_onchain_jetton_content(entries: &JettonEntries) -> MetaResult<Cell> {
    let mut builder = CellBuilder::new();
    builder.store_u8(ONCHAIN_LAYOUT)?;

    let mut dict = BTreeMap::new();
    for (key, value) in entries.to_entries() {
        let mut value_builder = CellBuilder::new();
        value_builder.store_u8(0x00)?;
        value_builder.store_string_snake(&value)?;
        dict.insert(key.to_vec(), Arc::new(value_builder.build()?));
    }

    builder.store_dict(CONTENT_KEY_BITS, &dict)?;
    Ok(builder.build()?)
}
