//! Whole-archive assembly.

use bytes::Bytes;
use doggybag_sys::{DosDateTime, SystemClock};
use doggybag_tree::FlatMapping;

use crate::entry::{put_u16, put_u32};
use crate::{Crc32, CrcCalculator, Error, ZipFileEntry};

pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];
pub const END_OF_CENTRAL_DIRECTORY_SIZE: usize = 22;

/// Builds stored zip archives from flat mappings.
///
/// Every entry gets the same modification time, read once when the builder
/// is created.
#[derive(Clone, Copy, Debug)]
pub struct ZipArchiveBuilder<C = Crc32> {
    crc: C,
    modified: DosDateTime,
}

impl ZipArchiveBuilder<Crc32> {
    pub fn new(modified: DosDateTime) -> Self {
        Self {
            crc: Crc32,
            modified,
        }
    }

    /// Stamp entries with the current reading of `clock`.
    pub fn from_clock(clock: &dyn SystemClock) -> Result<Self, Error> {
        Ok(Self::new(DosDateTime::now(clock)?))
    }
}

impl<C: CrcCalculator> ZipArchiveBuilder<C> {
    /// Swap the checksum implementation.
    pub fn with_crc_calculator<D: CrcCalculator>(self, crc: D) -> ZipArchiveBuilder<D> {
        ZipArchiveBuilder {
            crc,
            modified: self.modified,
        }
    }

    pub fn modified(&self) -> DosDateTime {
        self.modified
    }

    /// Lay out one entry per file, in mapping order, with offsets assigned.
    pub fn entries(&self, mapping: &FlatMapping) -> Result<Vec<ZipFileEntry>, Error> {
        let mut entries = Vec::with_capacity(mapping.len());
        let mut offset: u64 = 0;

        for (path, contents) in mapping.iter() {
            let entry = ZipFileEntry::new(
                path,
                contents.clone(),
                self.crc.crc32(contents),
                self.modified,
                to_u32(offset)?,
            )?;
            offset += entry.record_size() as u64;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Build the complete archive.
    pub fn build(&self, mapping: &FlatMapping) -> Result<Bytes, Error> {
        let entries = self.entries(mapping)?;

        let entry_count = u16::try_from(entries.len())
            .ok()
            .filter(|&count| count < u16::MAX)
            .ok_or(Error::TooManyEntries {
                count: entries.len(),
            })?;

        let records_size: usize = entries.iter().map(ZipFileEntry::record_size).sum();
        let directory_size: usize = entries
            .iter()
            .map(ZipFileEntry::central_directory_header_size)
            .sum();
        let total_size = records_size + directory_size + END_OF_CENTRAL_DIRECTORY_SIZE;

        let directory_offset = to_u32(records_size as u64)?;
        let directory_length = to_u32(directory_size as u64)?;

        let mut archive = Vec::with_capacity(total_size);
        for entry in &entries {
            archive.extend_from_slice(&entry.local_file_header());
            archive.extend_from_slice(entry.body());
        }
        for entry in &entries {
            archive.extend_from_slice(&entry.central_directory_header());
        }
        archive.extend_from_slice(&end_of_central_directory_record(
            entry_count,
            directory_length,
            directory_offset,
        ));

        tracing::debug!(
            files = entries.len(),
            size = archive.len(),
            "built zip archive"
        );
        Ok(Bytes::from(archive))
    }
}

/// The record closing an archive: where the central directory starts and
/// how many entries it lists. Single disk, no comment.
pub fn end_of_central_directory_record(
    entry_count: u16,
    directory_size: u32,
    directory_offset: u32,
) -> Vec<u8> {
    let mut record = Vec::with_capacity(END_OF_CENTRAL_DIRECTORY_SIZE);

    record.extend_from_slice(&END_OF_CENTRAL_DIRECTORY_SIGNATURE);
    put_u16(&mut record, 0); // number of this disk
    put_u16(&mut record, 0); // disk where the central directory starts
    put_u16(&mut record, entry_count); // entries on this disk
    put_u16(&mut record, entry_count); // entries in total
    put_u32(&mut record, directory_size);
    put_u32(&mut record, directory_offset);
    put_u16(&mut record, 0); // comment length

    record
}

// 0xFFFFFFFF marks a zip64 field, so it is out of range too.
fn to_u32(value: u64) -> Result<u32, Error> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v < u32::MAX)
        .ok_or(Error::ArchiveTooLarge { size: value })
}
