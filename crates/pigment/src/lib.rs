#![forbid(unsafe_code)]
// Allow these clippy lints for color math readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]

//! # Pigment
//!
//! Hex color handling for CSS theme previews.
//!
//! Pigment provides:
//! - **[`Color`]**: a color value exactly as the user typed it, with strict
//!   parsing on demand
//! - **[`Rgb`]**: a parsed 24-bit color
//! - **[`darken`]**: the shading routine used to derive hover/pressed shades
//!
//! ## Example
//!
//! ```rust
//! use pigment::{darken, Color};
//!
//! let primary = Color::from("#4361ee");
//! assert!(primary.is_valid());
//! assert_eq!(darken(primary.as_str(), 20.0), "#102ebb");
//! ```
//!
//! ## Lenient shading
//!
//! [`darken`] never fails. Text that is not a well-formed color is read the
//! way a browser's `parseInt(text, 16)` reads it: leading hex digits are
//! used and anything unreadable counts as zero.
//!
//! ```rust
//! use pigment::darken;
//!
//! assert_eq!(darken("not a color", 20.0), "#000000");
//! assert_eq!(darken("#ffffff", 0.0), "#ffffff");
//! ```

mod color;
mod shade;

pub use color::{Color, ColorError, Result, Rgb, parse_hex};
pub use shade::{darken, shade_amount};
