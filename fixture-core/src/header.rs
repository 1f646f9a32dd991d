//! The ASCII header placed at the start of every fixture.

use crate::config::HEADER_LEN;

/// Magic token identifying a binary pixel map.
pub const PPM_MAGIC: [u8; 2] = *b"P6";

/// Header written verbatim at offset zero: magic, dimensions, max value.
pub const PPM_HEADER: [u8; HEADER_LEN] = *b"P6\n100 100\n255\n";

/// Renders a P6 header for the given geometry.
///
/// The fixture never writes anything other than [`PPM_HEADER`]; this exists so
/// the literal can be checked against the constants in [`crate::config`].
pub fn render_header(width: usize, height: usize, max_color: u16) -> Vec<u8> {
    format!("P6\n{width} {height}\n{max_color}\n").into_bytes()
}
