//! TEP-64 token metadata: decoding, assembly, and on-chain encoding.
//!
//! Token contracts on TON publish their metadata as a content cell in one of
//! two layouts. Off-chain content is a URI pointing at a JSON document;
//! on-chain content is a dictionary keyed by the SHA-256 digest of each
//! category name. This crate decodes both into typed entity records for
//! jettons, NFT items, and NFT collections, and encodes jetton records back
//! into on-chain cells.
//!
//! # Example
//!
//! ```
//! use tonmeta_tep64::{build_onchain_jetton_content, JettonEntries, TokenMetadataLoader};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), tonmeta_tep64::MetaError> {
//! let entries = JettonEntries {
//!     name: Some("Test Token".to_string()),
//!     symbol: Some("TST".to_string()),
//!     decimals: 6,
//!     ..Default::default()
//! };
//! let cell = build_onchain_jetton_content(&entries)?;
//!
//! let loader = TokenMetadataLoader::new();
//! let decoded = loader.load_jetton_content(&cell).await?;
//! assert_eq!(decoded, Some(entries));
//! # Ok(())
//! # }
//! ```

mod categories;
mod content;
mod entries;
mod error;
mod offchain;

pub use categories::{
    category_key, CategoryKey, CATEGORY_ATTRIBUTES, CATEGORY_CONTENT_URL, CATEGORY_DECIMALS,
    CATEGORY_DESCRIPTION, CATEGORY_IMAGE, CATEGORY_IMAGE_DATA, CATEGORY_MARKETPLACE, CATEGORY_NAME,
    CATEGORY_SOCIAL_LINKS, CATEGORY_SYMBOL, CATEGORY_URI,
};
pub use content::{
    build_onchain_jetton_content, TokenMetadataLoader, CONTENT_KEY_BITS, OFFCHAIN_LAYOUT,
    ONCHAIN_LAYOUT,
};
pub use entries::{
    AttributeItem, JettonEntries, NftCollectionEntries, NftItemEntries, DEFAULT_DECIMALS,
};
pub use error::{MetaError, MetaResult};
pub use offchain::{combine_item_uri, resolve_uri, IPFS_GATEWAY, IPFS_SCHEME};
