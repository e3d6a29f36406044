//! Fixed column layout of rendered help text.

/// Indent of syntax lines in listings and of option specs.
pub const PREFIX_WIDTH: usize = 4;

/// Indent of descriptions in listings and of continuation syntax lines in
/// standalone usage.
pub const LISTING_WIDTH: usize = 8;

/// Width reserved for an option spec.
pub const OPTION_WIDTH: usize = 24;

/// Gap between the option spec column and its description.
pub const OPTION_MARGIN: usize = 2;

/// Column where option descriptions start.
pub const DESC_PREFIX: usize = PREFIX_WIDTH + OPTION_WIDTH + OPTION_MARGIN;

/// Printed characters after which an option description wraps.
pub const DESC_WIDTH: usize = 80 - DESC_PREFIX;

/// Token column width in group overviews.
pub const OVERVIEW_TOKEN_WIDTH: usize = 16;
