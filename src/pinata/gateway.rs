/// Gateway URL construction
///
/// The gateway applies resize/transcode transforms described by query
/// parameters on the pinned file's URL. Building that URL is a pure
/// function of the content identifier and the transform parameters.

use crate::state::params::TransformParams;

/// Build the optimized-image URL for a pinned file.
///
/// Parameter names and order are the gateway's contract: `img-width`,
/// `img-height`, `img-quality`, `img-format`. Values are embedded
/// verbatim, including zeros and out-of-range quality settings.
pub fn optimized_url(gateway_base: &str, ipfs_hash: &str, params: &TransformParams) -> String {
    format!(
        "{}/ipfs/{}?img-width={}&img-height={}&img-quality={}&img-format={}",
        gateway_base.trim_end_matches('/'),
        ipfs_hash,
        params.width,
        params.height,
        params.quality,
        params.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::params::OutputFormat;

    #[test]
    fn test_documented_example() {
        let params = TransformParams {
            width: 300,
            height: 200,
            quality: 80,
            format: OutputFormat::WebP,
        };

        let url = optimized_url(Config::DEFAULT_GATEWAY_BASE, "abc123", &params);

        assert_eq!(
            url,
            "https://gateway.pinata.cloud/ipfs/abc123?img-width=300&img-height=200&img-quality=80&img-format=webp"
        );
    }

    #[test]
    fn test_construction_is_idempotent() {
        let params = TransformParams::default();
        let first = optimized_url(Config::DEFAULT_GATEWAY_BASE, "QmHash", &params);
        let second = optimized_url(Config::DEFAULT_GATEWAY_BASE, "QmHash", &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_values_pass_through_verbatim() {
        // The gateway decides what a quality of 0 or 9999 means
        let params = TransformParams {
            width: 0,
            height: 0,
            quality: 9999,
            format: OutputFormat::Png,
        };

        let url = optimized_url(Config::DEFAULT_GATEWAY_BASE, "H", &params);

        assert_eq!(
            url,
            "https://gateway.pinata.cloud/ipfs/H?img-width=0&img-height=0&img-quality=9999&img-format=png"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_is_tolerated() {
        let params = TransformParams::default();
        let url = optimized_url("https://gateway.pinata.cloud/", "H", &params);
        assert!(url.starts_with("https://gateway.pinata.cloud/ipfs/H?"));
    }
}
