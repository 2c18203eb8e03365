//! Fixed-width hex field layout of the legacy ObjectId string.
//!
//! ```text
//! 0        8      14   18     24
//! |tttttttt|hhhhhh|pppp|cccccc|
//!  time     host   pid  counter
//! ```

/// A fixed-width hex segment within the 24-character string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    pub offset: usize,
    pub len: usize,
}

impl Field {
    /// Largest value representable in this field.
    pub const fn max_value(self) -> u64 {
        (1u64 << (4 * self.len)) - 1
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

pub(crate) const TIMESTAMP: Field = Field { offset: 0, len: 8 };
pub(crate) const HOST: Field = Field { offset: 8, len: 6 };
pub(crate) const PROCESS: Field = Field { offset: 14, len: 4 };
pub(crate) const COUNTER: Field = Field { offset: 18, len: 6 };

/// Appends `value` to `out` as exactly `field.len` lowercase hex digits.
///
/// Shorter renderings are left-padded with `'0'`. Wider renderings keep only
/// their leading `field.len` digits, so a field never spills into the next.
pub(crate) fn encode_field(out: &mut String, value: u64, field: Field) {
    let digits = format!("{value:x}");
    match digits.get(..field.len) {
        Some(leading) if digits.len() > field.len => out.push_str(leading),
        _ => out.push_str(&format!("{digits:0>width$}", width = field.len)),
    }
}

/// Reads `field` out of an already validated hex string.
pub(crate) fn decode_field(s: &str, field: Field) -> u32 {
    s[field.range()]
        .chars()
        .fold(0u32, |acc, c| (acc << 4) | c.to_digit(16).unwrap_or(0))
}

/// Returns true if `s` is exactly `len` ASCII hex digits (either case).
pub(crate) fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Derives the 24-bit host field from a host name.
///
/// CRC-32 over the UTF-8 bytes of the name; only the low 24 bits end up in
/// the encoded ID.
pub fn host_fingerprint(hostname: &str) -> u32 {
    crc32fast::hash(hostname.as_bytes()) & HOST.max_value() as u32
}
