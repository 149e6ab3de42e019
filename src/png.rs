//! Minimal PNG encoder: 8-bit truecolor, filter byte 0 on every row, one
//! IDAT chunk holding a valid zlib stream of stored (uncompressed) deflate
//! blocks. Rows are written top-down, matching the film's scan order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
// stored blocks hold at most 65535 bytes of payload
const MAX_STORED_BLOCK: usize = 65535;

fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

fn adler32(data: &[u8]) -> u32 {
    const MOD_ADLER: u32 = 65521;
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    // chunked so the sums never overflow before the modulo
    for chunk in data.chunks(5552) {
        for &byte in chunk {
            a += u32::from(byte);
            b += a;
        }
        a %= MOD_ADLER;
        b %= MOD_ADLER;
    }
    (b << 16) | a
}

fn write_chunk<W: Write>(out: &mut W, chunk_type: &[u8; 4], data: &[u8]) -> std::io::Result<()> {
    out.write_all(&(data.len() as u32).to_be_bytes())?;
    out.write_all(chunk_type)?;
    out.write_all(data)?;

    let mut crc_input = Vec::with_capacity(4 + data.len());
    crc_input.extend_from_slice(chunk_type);
    crc_input.extend_from_slice(data);
    out.write_all(&crc32(&crc_input).to_be_bytes())
}

/// Wrap raw bytes in a zlib stream (RFC 1950) of stored deflate blocks
/// (RFC 1951): valid everywhere, compressed nowhere.
fn make_zlib_stream(raw: &[u8]) -> Vec<u8> {
    let block_count = raw.len() / MAX_STORED_BLOCK + 1;
    let mut zlib = Vec::with_capacity(raw.len() + 6 + block_count * 5);

    // CMF/FLG pair: deflate, 32k window, no preset dictionary
    zlib.push(0x78);
    zlib.push(0x01);

    let mut blocks = raw.chunks(MAX_STORED_BLOCK).peekable();
    loop {
        let block = blocks.next().unwrap_or(&[]);
        let is_final = blocks.peek().is_none();
        zlib.push(u8::from(is_final));
        let len = block.len() as u16;
        zlib.extend_from_slice(&len.to_le_bytes());
        zlib.extend_from_slice(&(!len).to_le_bytes());
        zlib.extend_from_slice(block);
        if is_final {
            break;
        }
    }

    zlib.extend_from_slice(&adler32(raw).to_be_bytes());
    zlib
}

fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = 8; // bit depth
    data[9] = 2; // truecolor
    data
}

/// Write a packed row-major RGB buffer (top row first) as a PNG file.
pub fn write_rgb(
    path: impl AsRef<Path>,
    width: usize,
    height: usize,
    rgb: &[u8],
) -> anyhow::Result<()> {
    if width == 0 || height == 0 || rgb.len() != width * height * 3 {
        bail!(
            "rgb buffer of {} bytes does not match {}x{} pixels",
            rgb.len(),
            width,
            height
        );
    }

    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("could not create image file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    out.write_all(&PNG_SIGNATURE)?;
    write_chunk(&mut out, b"IHDR", &ihdr(width as u32, height as u32))?;

    // each scanline is prefixed with filter byte 0 (no filtering)
    let row_stride = width * 3;
    let mut raw = Vec::with_capacity(height * (row_stride + 1));
    for row in rgb.chunks(row_stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    write_chunk(&mut out, b"IDAT", &make_zlib_stream(&raw))?;
    write_chunk(&mut out, b"IEND", &[])?;
    out.flush()?;
    Ok(())
}
