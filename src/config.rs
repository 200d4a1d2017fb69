//! Configuration for syncmap
//!
//! Centralized configuration with sensible defaults.

/// Per-map configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Codec Configuration
    // -------------------------------------------------------------------------
    /// Largest payload (in bytes) accepted by `merge`
    pub max_payload_size: u32,

    /// Reject frames whose CRC32 does not match the payload
    pub verify_checksum: bool,

    /// Reject frames encoded for a different key/value type pair
    pub strict_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_payload_size: 64 * 1024 * 1024, // 64 MB
            verify_checksum: true,
            strict_types: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum payload size (in bytes)
    pub fn max_payload_size(mut self, size: u32) -> Self {
        self.config.max_payload_size = size;
        self
    }

    /// Enable or disable checksum verification on merge
    pub fn verify_checksum(mut self, enabled: bool) -> Self {
        self.config.verify_checksum = enabled;
        self
    }

    /// Enable or disable the key/value type tag check on merge
    pub fn strict_types(mut self, enabled: bool) -> Self {
        self.config.strict_types = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
