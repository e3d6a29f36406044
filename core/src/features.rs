use serde::{Deserialize, Serialize};

/// Capability names shown in the features banner, in banner order.
pub const CAPABILITY_NAMES: [&str; 8] = [
    "EXPERIMENTAL",
    "INJECT",
    "STATIC",
    "LZO",
    "ZSTD",
    "UDEV",
    "FSVERITY",
    "ZONED",
];

/// One optional build capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    pub enabled: bool,
}

/// Resolved build configuration, assembled once at startup.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::BuildFeatures;
///
/// let features = BuildFeatures::new("btrfs-progs v6.8", "builtin")
///     .with_capability("ZSTD", true)
///     .with_capability("LZO", false);
/// assert_eq!(features.tokens(), vec!["+ZSTD", "-LZO", "CRYPTO=builtin"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFeatures {
    /// Package name and version, printed on the banner's first line.
    pub package: String,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    pub crypto_provider: String,
}

impl BuildFeatures {
    pub fn new(package: impl Into<String>, crypto_provider: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            capabilities: Vec::new(),
            crypto_provider: crypto_provider.into(),
        }
    }

    /// Builds the record from the standard capability names, looking up
    /// each one's state with `enabled`.
    pub fn from_standard(
        package: impl Into<String>,
        crypto_provider: impl Into<String>,
        enabled: impl Fn(&str) -> bool,
    ) -> Self {
        CAPABILITY_NAMES
            .iter()
            .fold(Self::new(package, crypto_provider), |features, name| {
                let state = enabled(name);
                features.with_capability(*name, state)
            })
    }

    pub fn with_capability(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.capabilities.push(Capability {
            name: name.into(),
            enabled,
        });
        self
    }

    /// Banner tokens: `+NAME` / `-NAME` per capability, then `CRYPTO=<provider>`.
    pub fn tokens(&self) -> Vec<String> {
        self.capabilities
            .iter()
            .map(|c| format!("{}{}", if c.enabled { '+' } else { '-' }, c.name))
            .chain(std::iter::once(format!("CRYPTO={}", self.crypto_provider)))
            .collect()
    }
}
