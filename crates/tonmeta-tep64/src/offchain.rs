//! Off-chain metadata: URI resolution and JSON fetching.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::MetaResult;

/// URI scheme prefix for IPFS-hosted metadata.
pub const IPFS_SCHEME: &str = "ipfs://";

/// Public gateway used to fetch IPFS-hosted metadata over HTTPS.
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Rewrite an `ipfs://` URI to the public gateway.
///
/// This is a substring substitution, not an anchored rewrite: every
/// occurrence of the literal scheme text is removed and the gateway base is
/// prepended. URIs without the scheme pass through unchanged.
pub fn resolve_uri(uri: &str) -> String {
    if uri.contains(IPFS_SCHEME) {
        format!("{IPFS_GATEWAY}{}", uri.replace(IPFS_SCHEME, ""))
    } else {
        uri.to_string()
    }
}

/// Compose the final URL for an NFT item from the collection base and the
/// item's individual suffix.
///
/// A base that already contains `.json` names a complete resource and is
/// used as-is; otherwise the suffix is appended verbatim, with no separator
/// inserted.
pub fn combine_item_uri(base: &str, suffix: &str) -> String {
    if base.contains(".json") {
        base.to_string()
    } else {
        format!("{base}{suffix}")
    }
}

/// Fetch a metadata JSON document and decode it into an entity record.
///
/// A non-success HTTP status is a hard transport failure; a body that is not
/// valid JSON for the target shape is a hard decode failure. Cancellation is
/// cooperative: dropping the returned future aborts the in-flight request.
pub(crate) async fn fetch_entries<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> MetaResult<T> {
    debug!(url, "fetching off-chain token metadata");

    let response = http.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
