//! The in-memory image written to disk.

use rand::RngCore;

use crate::config::{HEADER_LEN, IMAGE_LEN};
use crate::header::PPM_HEADER;
use crate::random::modulo_byte;

/// Fixed-size fixture image: the PPM header followed by random body bytes.
///
/// The length is always [`IMAGE_LEN`] and the first [`HEADER_LEN`] bytes are
/// always [`PPM_HEADER`].
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    bytes: Box<[u8]>,
}

impl ImageBuffer {
    /// Builds a new image, drawing every body byte from `rng`.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = vec![0_u8; IMAGE_LEN].into_boxed_slice();
        bytes[..HEADER_LEN].copy_from_slice(&PPM_HEADER);
        for byte in &mut bytes[HEADER_LEN..] {
            *byte = modulo_byte(rng);
        }
        Self { bytes }
    }

    /// The complete file contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The header portion.
    pub fn header(&self) -> &[u8] {
        &self.bytes[..HEADER_LEN]
    }

    /// The random body portion.
    pub fn body(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Total length in bytes, always [`IMAGE_LEN`].
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the image, returning the owned bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

impl AsRef<[u8]> for ImageBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("len", &self.bytes.len())
            .field("header", &String::from_utf8_lossy(self.header()))
            .finish_non_exhaustive()
    }
}
