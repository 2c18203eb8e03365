//! The ObjectId value type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::encoding::{self, decode_field, is_hex_of_len};
use crate::{Engine, ObjectIdError};

/// A 12-byte legacy ObjectId held in its 24-character hex form.
///
/// Every value is either freshly generated or has passed [`ObjectId::parse`],
/// so the field accessors never see a malformed string. The original character
/// case of parsed input is preserved; generated IDs are lowercase.
///
/// Equality and ordering are those of the string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(String);

/// All four fields of an ObjectId, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectIdFields {
    pub timestamp: u32,
    pub host_fingerprint: u32,
    pub process_id: u16,
    pub increment: u32,
}

impl ObjectId {
    /// Length of the hex string form.
    pub const HEX_LEN: usize = 24;

    /// Length of the raw binary form.
    pub const BYTE_LEN: usize = 12;

    /// Generates a new ObjectId from the process-wide engine.
    #[must_use]
    pub fn new() -> Self {
        Engine::global().generate()
    }

    /// Generates a new ObjectId from the process-wide engine, stamped with
    /// `at` instead of the current time.
    #[must_use]
    pub fn with_timestamp(at: DateTime<Utc>) -> Self {
        Engine::global().generate_at(at)
    }

    /// Parses an ObjectId from its 24-character hex form.
    pub fn parse(s: &str) -> Result<Self, ObjectIdError> {
        if !Self::is_valid(s) {
            return Err(ObjectIdError::invalid_format(s));
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns true if `s` is exactly 24 hex characters, in either case.
    pub fn is_valid(s: &str) -> bool {
        is_hex_of_len(s, Self::HEX_LEN)
    }

    /// Returns an independent copy of `other`.
    #[must_use]
    pub fn from_copy(other: &ObjectId) -> Self {
        other.clone()
    }

    /// Wraps a string the engine has just encoded.
    pub(crate) fn from_generated(id: String) -> Self {
        debug_assert!(Self::is_valid(&id));
        Self(id)
    }

    /// Builds an ObjectId from its raw 12 bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Returns the raw 12 bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 12] {
        let mut bytes = [0u8; 12];
        let decoded = hex::decode_to_slice(&self.0, &mut bytes);
        debug_assert!(decoded.is_ok(), "ObjectId held invalid hex: {}", self.0);
        bytes
    }

    /// Returns the hex string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Seconds since the Unix epoch at generation.
    pub fn timestamp(&self) -> u32 {
        decode_field(&self.0, encoding::TIMESTAMP)
    }

    /// The 24-bit host fingerprint.
    pub fn host_fingerprint(&self) -> u32 {
        decode_field(&self.0, encoding::HOST)
    }

    /// The process-id field: the generating process's id, cut to its leading
    /// four hex digits when wider.
    pub fn process_id(&self) -> u16 {
        decode_field(&self.0, encoding::PROCESS) as u16
    }

    /// The 24-bit counter value.
    pub fn increment(&self) -> u32 {
        decode_field(&self.0, encoding::COUNTER)
    }

    /// The timestamp field as a date.
    pub fn generation_time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(i64::from(self.timestamp()), 0).unwrap_or_default()
    }

    /// The four hex segments in field order: timestamp, host, process,
    /// counter.
    pub fn segments(&self) -> [&str; 4] {
        [
            encoding::TIMESTAMP,
            encoding::HOST,
            encoding::PROCESS,
            encoding::COUNTER,
        ]
        .map(|field| &self.0[field.range()])
    }

    /// Decodes all four fields at once.
    pub fn fields(&self) -> ObjectIdFields {
        ObjectIdFields {
            timestamp: self.timestamp(),
            host_fingerprint: self.host_fingerprint(),
            process_id: self.process_id(),
            increment: self.increment(),
        }
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if !Self::is_valid(&s) {
            return Err(ObjectIdError::InvalidFormat { input: s });
        }
        Ok(Self(s))
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE_ID: &str = "507f1f77bcf86cd799439011";

    #[test]
    fn test_parse_sample() {
        let id = ObjectId::parse(SAMPLE_ID).unwrap();
        assert_eq!(id.to_string(), SAMPLE_ID);
        assert_eq!(id.timestamp(), 0x507f_1f77);
        assert_eq!(id.process_id(), 0xd799);
        assert_eq!(id.increment(), 0x43_9011);
        assert_eq!(id.host_fingerprint(), 0xbc_f86c);
    }

    #[test]
    fn test_segments_follow_layout() {
        let id = ObjectId::parse(SAMPLE_ID).unwrap();
        assert_eq!(id.segments(), ["507f1f77", "bcf86c", "d799", "439011"]);
        assert_eq!(id.segments().concat(), SAMPLE_ID);
    }

    #[test]
    fn test_parse_all_zero() {
        let id = ObjectId::parse("000000000000000000000000").unwrap();
        assert_eq!(
            id.fields(),
            ObjectIdFields {
                timestamp: 0,
                host_fingerprint: 0,
                process_id: 0,
                increment: 0,
            }
        );
        assert_eq!(id.generation_time().timestamp(), 0);
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = ObjectId::parse("000").unwrap_err();
        assert_eq!(
            err,
            ObjectIdError::InvalidFormat {
                input: "000".to_string()
            }
        );
    }

    #[test]
    fn test_parse_non_hex() {
        let result: Result<ObjectId, _> = "zzzzzzzzzzzzzzzzzzzzzzzz".parse();
        assert!(matches!(
            result.unwrap_err(),
            ObjectIdError::InvalidFormat { .. }
        ));
    }

    #[test]
    fn test_parse_preserves_case() {
        let id = ObjectId::parse("507F1F77BCF86CD799439011").unwrap();
        assert_eq!(id.as_str(), "507F1F77BCF86CD799439011");
        assert_eq!(id.timestamp(), 0x507f_1f77);
        // String equality, so differently cased forms are distinct values.
        assert_ne!(id, ObjectId::parse(SAMPLE_ID).unwrap());
    }

    #[test]
    fn test_from_copy_is_equal() {
        let id = ObjectId::parse(SAMPLE_ID).unwrap();
        let copy = ObjectId::from_copy(&id);
        assert_eq!(id, copy);
        drop(id);
        assert_eq!(copy.as_str(), SAMPLE_ID);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let id = ObjectId::parse(SAMPLE_ID).unwrap();
        let bytes = id.to_bytes();
        assert_eq!(bytes[0], 0x50);
        assert_eq!(bytes[11], 0x11);
        assert_eq!(ObjectId::from_bytes(bytes), id);
    }

    #[test]
    fn test_new_ids_differ() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_timestamp() {
        let at = DateTime::from_timestamp(1_262_304_000, 0).unwrap();
        let id = ObjectId::with_timestamp(at);
        assert_eq!(id.timestamp(), 1_262_304_000);
        assert_eq!(id.generation_time(), at);
    }

    #[test]
    fn test_json_roundtrip() {
        let id = ObjectId::parse(SAMPLE_ID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{SAMPLE_ID}\""));
        let parsed: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let result: Result<ObjectId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_string_conversions() {
        let id = ObjectId::try_from(SAMPLE_ID.to_string()).unwrap();
        let s: String = id.into();
        assert_eq!(s, SAMPLE_ID);
        assert!(ObjectId::try_from("nope").is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_hex_roundtrips(s in "[0-9a-fA-F]{24}") {
            prop_assert!(ObjectId::is_valid(&s));
            let id = ObjectId::parse(&s).unwrap();
            prop_assert_eq!(id.to_string(), s);
        }

        #[test]
        fn prop_wrong_length_rejected(s in "[0-9a-f]{0,48}") {
            prop_assume!(s.len() != ObjectId::HEX_LEN);
            prop_assert!(!ObjectId::is_valid(&s));
            prop_assert!(ObjectId::parse(&s).is_err());
        }

        #[test]
        fn prop_non_hex_char_rejected(
            prefix in "[0-9a-f]{0,23}",
            bad in "[g-zG-Z_]",
        ) {
            let mut s = prefix;
            s.push_str(&bad);
            while s.len() < ObjectId::HEX_LEN {
                s.push('0');
            }
            prop_assert!(!ObjectId::is_valid(&s));
            let err = ObjectId::parse(&s).unwrap_err();
            prop_assert_eq!(err.input(), s.as_str());
        }

        #[test]
        fn prop_fields_match_substrings(s in "[0-9a-f]{24}") {
            let id = ObjectId::parse(&s).unwrap();
            prop_assert_eq!(id.timestamp(), u32::from_str_radix(&s[0..8], 16).unwrap());
            prop_assert_eq!(id.process_id(), u16::from_str_radix(&s[14..18], 16).unwrap());
            prop_assert_eq!(id.increment(), u32::from_str_radix(&s[18..24], 16).unwrap());
        }
    }
}
