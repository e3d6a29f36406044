use std::io::{self, Write};

use cmdhelp_core::BuildFeatures;

/// Writes the features banner: `{prefix}{package}` on the first line, the
/// capability tokens on the second.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::BuildFeatures;
/// use cmdhelp_render::write_features;
///
/// let features = BuildFeatures::new("btrfs-progs v6.8", "builtin").with_capability("ZONED", true);
/// let mut out = Vec::new();
/// write_features(&features, "", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "btrfs-progs v6.8\n+ZONED CRYPTO=builtin\n");
/// ```
pub fn write_features(features: &BuildFeatures, prefix: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{prefix}{}", features.package)?;
    writeln!(out, "{}", features.tokens().join(" "))
}

/// Prints the features banner to standard output.
pub fn print_features(features: &BuildFeatures, prefix: &str) -> io::Result<()> {
    write_features(features, prefix, &mut io::stdout().lock())
}
