//! Fixed geometry and output constants for the generated fixture.

/// Image width in pixels, as written in the header.
pub const WIDTH: usize = 100;

/// Image height in pixels, as written in the header.
pub const HEIGHT: usize = 100;

/// Bytes reserved per pixel in the output file.
///
/// The P6 header implies 3 bytes per pixel; the body keeps a 4-byte stride.
pub const PIXEL_SIZE: usize = 4;

/// Maximum channel value, as written in the header.
pub const MAX_COLOR_VALUE: u16 = 255;

/// Length of the ASCII header in bytes.
pub const HEADER_LEN: usize = 15;

/// Total length of the generated file in bytes.
pub const IMAGE_LEN: usize = WIDTH * HEIGHT * PIXEL_SIZE;

/// Length of the random body that follows the header.
pub const BODY_LEN: usize = IMAGE_LEN - HEADER_LEN;

/// Modulus applied to raw generator output; body bytes never reach 255.
pub const BODY_MODULUS: u32 = 255;

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "../test/file.ppm";

/// Permission bits applied when the output file is created on Unix.
pub const FILE_MODE: u32 = 0o644;

const _: () = assert!(HEADER_LEN < IMAGE_LEN);
