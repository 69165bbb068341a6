//! Rewrites product image URLs onto the optimized asset CDN.

/// Host serving resized, optimized product images.
pub const CANONICAL_ASSET_HOST: &str = "digitalassets.sallinggroup.com";
/// Legacy asset service still referenced by some products.
pub const LEGACY_ASSET_HOST: &str = "dam.dsg.dk";

const OPTIMIZED_IMAGE_PREFIX: &str = "https://digitalassets.sallinggroup.com/image/upload/e_trim/c_limit,e_sharpen:80,f_auto,q_auto,w_400,h_400/";

/// Returns the optimized URL for a product image.
///
/// URLs on the canonical host are returned unchanged. Legacy asset URLs of
/// the form `.../id/<assetId>/...` are rebuilt from the asset id. Anything
/// else, including legacy URLs without an id, is returned as given.
pub fn normalize_image_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.contains(CANONICAL_ASSET_HOST) {
        return url.to_string();
    }

    if url.contains(LEGACY_ASSET_HOST) {
        match legacy_asset_id(url) {
            Some(asset_id) => return format!("{OPTIMIZED_IMAGE_PREFIX}{asset_id}"),
            None => log::warn!("Legacy image URL without asset id: {url}"),
        }
    }

    url.to_string()
}

fn legacy_asset_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("/id/")?;
    rest.split(['/', '?', '#'])
        .next()
        .filter(|asset_id| !asset_id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_stays_empty() {
        assert_eq!(normalize_image_url(""), "");
    }

    #[test]
    fn rewrites_legacy_asset_urls() {
        let url = normalize_image_url("https://dam.dsg.dk/services/assets.img/id/ABC123/foo");
        assert_eq!(
            url,
            "https://digitalassets.sallinggroup.com/image/upload/e_trim/c_limit,e_sharpen:80,f_auto,q_auto,w_400,h_400/ABC123"
        );
    }

    #[test]
    fn rewrites_legacy_url_ending_with_asset_id() {
        let url = normalize_image_url(
            "https://dam.dsg.dk/services/assets.img/id/f8f240ff-5e83-435a-a55a-477a6540b89b",
        );
        assert!(url.ends_with("/f8f240ff-5e83-435a-a55a-477a6540b89b"));
        assert!(url.contains(CANONICAL_ASSET_HOST));
    }

    #[test]
    fn canonical_urls_are_untouched() {
        let url = "https://digitalassets.sallinggroup.com/image/upload/w_200/XYZ";
        assert_eq!(normalize_image_url(url), url);
    }

    #[test]
    fn legacy_url_without_id_is_untouched() {
        let url = "https://dam.dsg.dk/services/assets.img/other/ABC123";
        assert_eq!(normalize_image_url(url), url);
        let url = "https://dam.dsg.dk/services/assets.img/id/";
        assert_eq!(normalize_image_url(url), url);
    }

    #[test]
    fn unrelated_urls_are_untouched() {
        let url = "https://example.com/id/ABC123/foo.png";
        assert_eq!(normalize_image_url(url), url);
    }

    #[test]
    fn normalization_is_idempotent() {
        for url in [
            "",
            "https://dam.dsg.dk/services/assets.img/id/ABC123/foo",
            "https://digitalassets.sallinggroup.com/image/upload/w_200/XYZ",
            "https://example.com/picture.jpg",
        ] {
            let once = normalize_image_url(url);
            assert_eq!(normalize_image_url(&once), once);
        }
    }
}
