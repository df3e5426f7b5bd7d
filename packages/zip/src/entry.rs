//! Per-file zip headers.

use bytes::Bytes;
use doggybag_sys::DosDateTime;

use crate::Error;

pub const LOCAL_FILE_HEADER_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
pub const CENTRAL_DIRECTORY_HEADER_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x01, 0x02];

/// Local file header size before the file name.
pub const LOCAL_FILE_HEADER_BASE_SIZE: usize = 30;

/// Central directory header size before the file name.
pub const CENTRAL_DIRECTORY_HEADER_BASE_SIZE: usize = 46;

/// 1.0: stored entries, no zip64.
const VERSION_NEEDED: u16 = 0x000A;
/// 6.3, MS-DOS attribute compatibility.
const VERSION_MADE_BY: u16 = 0x003F;
/// General purpose bit 11: the file name is UTF-8.
const FLAG_UTF8_NAME: u16 = 1 << 11;
const METHOD_STORED: u16 = 0;

/// One file of an archive: its name, body and the fields both of its
/// headers share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZipFileEntry {
    file_name: String,
    body: Bytes,
    crc: u32,
    modified: DosDateTime,
    entry_offset: u32,
}

impl ZipFileEntry {
    /// Create an entry. `entry_offset` is where its local header starts in
    /// the archive.
    pub fn new(
        file_name: impl Into<String>,
        body: impl Into<Bytes>,
        crc: u32,
        modified: DosDateTime,
        entry_offset: u32,
    ) -> Result<Self, Error> {
        let file_name = file_name.into();
        let body = body.into();

        if file_name.len() > u16::MAX as usize {
            return Err(Error::FileNameTooLong {
                len: file_name.len(),
                name: file_name,
            });
        }
        if body.len() >= u32::MAX as usize {
            return Err(Error::FileTooLarge {
                name: file_name,
                size: body.len(),
            });
        }

        Ok(Self {
            file_name,
            body,
            crc,
            modified,
            entry_offset,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }

    pub fn modified(&self) -> DosDateTime {
        self.modified
    }

    pub fn entry_offset(&self) -> u32 {
        self.entry_offset
    }

    pub fn local_file_header_size(&self) -> usize {
        LOCAL_FILE_HEADER_BASE_SIZE + self.file_name.len()
    }

    /// Bytes this entry takes up before the central directory: local header
    /// plus body.
    pub fn record_size(&self) -> usize {
        self.local_file_header_size() + self.body.len()
    }

    pub fn local_file_header(&self) -> Vec<u8> {
        let mut header = Vec::with_capacity(self.local_file_header_size());

        header.extend_from_slice(&LOCAL_FILE_HEADER_SIGNATURE);
        put_u16(&mut header, VERSION_NEEDED);
        self.put_shared_fields(&mut header);
        put_u16(&mut header, 0); // extra field length
        header.extend_from_slice(self.file_name.as_bytes());

        header
    }

    pub fn central_directory_header_size(&self) -> usize {
        CENTRAL_DIRECTORY_HEADER_BASE_SIZE + self.file_name.len()
    }

    pub fn central_directory_header(&self) -> Vec<u8> {
        let mut header = Vec::with_capacity(self.central_directory_header_size());

        header.extend_from_slice(&CENTRAL_DIRECTORY_HEADER_SIGNATURE);
        put_u16(&mut header, VERSION_MADE_BY);
        put_u16(&mut header, VERSION_NEEDED);
        self.put_shared_fields(&mut header);
        put_u16(&mut header, 0); // extra field length
        put_u16(&mut header, 0); // file comment length
        put_u16(&mut header, 0); // disk number start
        put_u16(&mut header, 0); // internal file attributes
        put_u32(&mut header, 0); // external file attributes
        put_u32(&mut header, self.entry_offset);
        header.extend_from_slice(self.file_name.as_bytes());

        header
    }

    // Flags through file name length; identical in both headers.
    fn put_shared_fields(&self, header: &mut Vec<u8>) {
        let flags = if self.file_name.is_ascii() {
            0
        } else {
            FLAG_UTF8_NAME
        };
        // Both checked in `new`.
        let size = self.body.len() as u32;
        let name_length = self.file_name.len() as u16;

        put_u16(header, flags);
        put_u16(header, METHOD_STORED);
        put_u16(header, self.modified.time);
        put_u16(header, self.modified.date);
        put_u32(header, self.crc);
        put_u32(header, size); // compressed
        put_u32(header, size); // uncompressed
        put_u16(header, name_length);
    }
}

pub(crate) fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub(crate) fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}
