//! # fixture-core
//!
//! Generation of a fixed-size PPM test fixture filled with pseudo-random pixel
//! data.
//!
//! The fixture is always [`IMAGE_LEN`] bytes: the 15-byte header
//! `P6\n100 100\n255\n` followed by body bytes drawn as `next_u32() % 255`
//! from a caller-supplied generator.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fixture_core::{generate_fixture, Seed};
//!
//! let mut rng = Seed::Fixed(7).into_rng();
//! let summary = generate_fixture(Path::new("file.ppm"), &mut rng)?;
//! assert_eq!(summary.bytes_written, 40_000);
//! # Ok::<(), fixture_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod header;
pub mod image;
pub mod random;
pub mod writer;


pub use config::{DEFAULT_OUTPUT_PATH, HEADER_LEN, IMAGE_LEN};
pub use error::{Error, ErrorKind, Result};
pub use header::PPM_HEADER;
pub use image::ImageBuffer;
pub use random::{seeded_rng, Seed};
pub use writer::{create_output, generate_fixture, write_image, FixtureSummary};
