//! Frontend configuration.
//!
//! UI-only settings. Deployment constants (contract, network, price) live
//! in [`kakedashi::config`].

/// Page title.
pub const APP_TITLE: &str = "Kakedashi Mint";

/// Banner shown above the mint button.
pub const BANNER_IMAGE: &str = "assets/kakedashi-mint.svg";

/// Alt text of the banner.
pub const BANNER_ALT: &str = "Polygon Squirrels";

/// Delay between two `eth_getTransactionReceipt` polls (milliseconds).
///
/// Matches the default polling interval of the common JS providers.
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 4_000;

/// Maximum activity log entries to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_banner_image_is_shipped() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(BANNER_IMAGE);
        assert!(path.is_file(), "missing {}", path.display());
    }
}
