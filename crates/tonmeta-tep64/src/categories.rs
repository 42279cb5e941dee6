//! Metadata categories and their content-addressed keys.
//!
//! On-chain dictionaries identify each metadata field by the SHA-256 digest
//! of the category's ASCII name rather than by the name itself. The digests
//! for the standard categories are fixed constants; [`category_key`] derives
//! the key for any other name.

use sha2::{Digest, Sha256};

/// A 32-byte content-addressed dictionary key: SHA256 of the category name.
pub type CategoryKey = [u8; 32];

/// SHA256("name")
pub const CATEGORY_NAME: CategoryKey = [
    0x82, 0xa3, 0x53, 0x7f, 0xf0, 0xdb, 0xce, 0x7e, 0xec, 0x35, 0xd6, 0x9e, 0xdc, 0x3a, 0x18,
    0x9e, 0xe6, 0xf1, 0x7d, 0x82, 0xf3, 0x53, 0xa5, 0x53, 0xf9, 0xaa, 0x96, 0xcb, 0x0b, 0xe3,
    0xce, 0x89,
];

/// SHA256("description")
pub const CATEGORY_DESCRIPTION: CategoryKey = [
    0xc9, 0x04, 0x6f, 0x7a, 0x37, 0xad, 0x0e, 0xa7, 0xce, 0xe7, 0x33, 0x55, 0x98, 0x4f, 0xa5,
    0x42, 0x89, 0x82, 0xf8, 0xb3, 0x7c, 0x8f, 0x7b, 0xce, 0xc9, 0x1f, 0x7a, 0xc7, 0x1a, 0x7c,
    0xd1, 0x04,
];

/// SHA256("symbol")
pub const CATEGORY_SYMBOL: CategoryKey = [
    0xb7, 0x6a, 0x7c, 0xa1, 0x53, 0xc2, 0x46, 0x71, 0x65, 0x83, 0x35, 0xbb, 0xd0, 0x89, 0x46,
    0x35, 0x0f, 0xfc, 0x62, 0x1f, 0xa1, 0xc5, 0x16, 0xe7, 0x12, 0x30, 0x95, 0xd4, 0xff, 0xd5,
    0xc5, 0x81,
];

/// SHA256("decimals")
pub const CATEGORY_DECIMALS: CategoryKey = [
    0xee, 0x80, 0xfd, 0x2f, 0x1e, 0x03, 0x48, 0x0e, 0x22, 0x82, 0x36, 0x35, 0x96, 0xee, 0x75,
    0x2d, 0x7b, 0xb2, 0x7f, 0x50, 0x77, 0x6b, 0x95, 0x08, 0x6a, 0x02, 0x79, 0x18, 0x96, 0x75,
    0x92, 0x3e,
];

/// SHA256("image")
pub const CATEGORY_IMAGE: CategoryKey = [
    0x61, 0x05, 0xd6, 0xcc, 0x76, 0xaf, 0x40, 0x03, 0x25, 0xe9, 0x4d, 0x58, 0x8c, 0xe5, 0x11,
    0xbe, 0x5b, 0xfd, 0xbb, 0x73, 0xb4, 0x37, 0xdc, 0x51, 0xec, 0xa4, 0x39, 0x17, 0xd7, 0xa4,
    0x3e, 0x3d,
];

/// SHA256("image_data")
pub const CATEGORY_IMAGE_DATA: CategoryKey = [
    0xd9, 0xa8, 0x8c, 0xce, 0xc7, 0x9e, 0xef, 0x59, 0xc8, 0x4b, 0x67, 0x11, 0x36, 0xa2, 0x0e,
    0xce, 0x4c, 0xd0, 0x0c, 0xaa, 0xad, 0x5b, 0xc4, 0x7e, 0x2c, 0x20, 0x88, 0x29, 0x15, 0x4e,
    0xe9, 0xe4,
];

/// SHA256("uri")
pub const CATEGORY_URI: CategoryKey = [
    0x70, 0xe5, 0xd7, 0xb6, 0xa2, 0x9b, 0x39, 0x2f, 0x85, 0x07, 0x6f, 0xe1, 0x5c, 0xa2, 0xf2,
    0x05, 0x3c, 0x56, 0xc2, 0x33, 0x87, 0x28, 0xc4, 0xe3, 0x3c, 0x9e, 0x8d, 0xdb, 0x1e, 0xe8,
    0x27, 0xcc,
];

/// SHA256("content_url")
pub const CATEGORY_CONTENT_URL: CategoryKey = [
    0x57, 0xa6, 0xa8, 0x8c, 0x2f, 0x73, 0x57, 0xfe, 0x24, 0x6b, 0xe4, 0x67, 0x3a, 0x43, 0x55,
    0x66, 0x0c, 0x93, 0xd8, 0x0f, 0x44, 0x27, 0x3f, 0xff, 0x4d, 0x7b, 0x83, 0xf4, 0x81, 0x06,
    0x34, 0x23,
];

/// SHA256("attributes")
pub const CATEGORY_ATTRIBUTES: CategoryKey = [
    0xf1, 0xb4, 0xdb, 0x36, 0xf9, 0x08, 0xe5, 0x57, 0xe2, 0x32, 0x11, 0x76, 0xb6, 0xd3, 0x45,
    0xf5, 0xa7, 0x00, 0xd4, 0xfb, 0xa9, 0x79, 0x38, 0x16, 0x05, 0x32, 0x7f, 0xdc, 0x1c, 0x8a,
    0xdb, 0xf7,
];

/// SHA256("SocialLinks")
pub const CATEGORY_SOCIAL_LINKS: CategoryKey = [
    0x06, 0x88, 0xb7, 0x5b, 0xa7, 0xca, 0xe4, 0xfa, 0x70, 0x33, 0xba, 0x33, 0x9a, 0xa1, 0x5f,
    0xac, 0x8a, 0x19, 0xe1, 0x97, 0xc9, 0x81, 0x88, 0xc0, 0xb0, 0x3c, 0x0e, 0x12, 0x75, 0x6f,
    0x85, 0xe4,
];

/// SHA256("Marketplace")
pub const CATEGORY_MARKETPLACE: CategoryKey = [
    0xc6, 0x08, 0x98, 0x1d, 0x8d, 0x68, 0xfa, 0x4f, 0x7c, 0xc1, 0x30, 0xea, 0x31, 0xb7, 0x77,
    0x34, 0x9c, 0xd2, 0x35, 0xbc, 0xce, 0x1d, 0x9d, 0xfd, 0x35, 0x78, 0x96, 0x30, 0xbd, 0xd6,
    0x7f, 0x18,
];

/// Derive the dictionary key for a category name.
///
/// Deterministic; the fixed constants above are `category_key` applied to
/// the standard names.
///
/// # Examples
///
/// ```
/// use tonmeta_tep64::{category_key, CATEGORY_NAME};
///
/// assert_eq!(category_key("name"), CATEGORY_NAME);
/// ```
pub fn category_key(name: &str) -> CategoryKey {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.finalize().into()
}
