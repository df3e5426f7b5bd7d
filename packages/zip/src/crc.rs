//! CRC-32 checksums for entry bodies.

/// Computes the CRC-32 stored in zip entry headers.
pub trait CrcCalculator {
    fn crc32(&self, data: &[u8]) -> u32;
}

/// The IEEE CRC-32 used by zip, backed by `crc32fast`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32;

impl CrcCalculator for Crc32 {
    fn crc32(&self, data: &[u8]) -> u32 {
        crc32fast::hash(data)
    }
}
