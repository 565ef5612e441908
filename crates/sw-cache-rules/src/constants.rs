//! Fixed host lists and path-class patterns
//!
//! These literals are part of the deployed worker's contract and must be
//! reproduced exactly.

use regex::Regex;
use std::sync::LazyLock;

// --- Partition names ---

/// Self-hosted script/style/data assets.
pub const PARTITION_SIMPLE: &str = "simple";

/// Third-party CDN assets.
pub const PARTITION_CDN: &str = "cdn";

/// Self-hosted images.
pub const PARTITION_IMG: &str = "img";

// --- Host lists ---

/// Third-party CDN hosts whose assets are cached under the `cdn` partition.
pub const CDN_ALLOWED_HOSTS: [&str; 10] = [
    "cdn.cbd.int",
    "lf26-cdn-tos.bytecdntp.com",
    "lf6-cdn-tos.bytecdntp.com",
    "lf3-cdn-tos.bytecdntp.com",
    "lf9-cdn-tos.bytecdntp.com",
    "cdn.staticfile.org",
    "npm.elemecdn.com",
    "npm.onmicrosoft.cn",
    "fonts.gstatic.com",
    "font.onmicrosoft.cn",
];

/// Origins never intercepted by the worker, regardless of other rules.
pub const SKIP_URL_PREFIXES: [&str; 2] = ["https://i0.hdslb.com", "https://api.i-meto.com"];

// --- Path classes ---

/// Script/style/data paths on the site's own host, plus bare directories.
pub static SITE_ASSET_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.(js|css|json)|/)$").unwrap());

/// Script/style/font/cursor paths on allow-listed CDN hosts.
pub static CDN_ASSET_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(js|css|woff2|woff|ttf|cur)$").unwrap());

/// Image paths. Deliberately unanchored: an image extension anywhere in the
/// path counts, matching the deployed worker's behavior.
pub static IMAGE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(png|jpe?g|svg|webp|gif|bmp|psd|tiff|tga|ico|eps)").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_asset_path_matches_directories() {
        assert!(SITE_ASSET_PATH_RE.is_match("/posts/"));
        assert!(SITE_ASSET_PATH_RE.is_match("/app.js"));
        assert!(SITE_ASSET_PATH_RE.is_match("/data.json"));
        assert!(!SITE_ASSET_PATH_RE.is_match("/photo.png"));
    }

    #[test]
    fn test_cdn_asset_path_is_anchored() {
        assert!(CDN_ASSET_PATH_RE.is_match("/lib/font.woff2"));
        assert!(!CDN_ASSET_PATH_RE.is_match("/lib/font.woff2.map"));
    }

    #[test]
    fn test_image_path_is_unanchored() {
        assert!(IMAGE_PATH_RE.is_match("/img/photo.png"));
        assert!(IMAGE_PATH_RE.is_match("/img/photo.png?w=300"));
        assert!(IMAGE_PATH_RE.is_match("/img/photo.jpeg.thumb"));
        assert!(!IMAGE_PATH_RE.is_match("/img/photo.txt"));
    }
}
