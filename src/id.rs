use std::{fmt, str};

use chrono::{DateTime, Utc};
use fstr::FStr;

use crate::ParseError;

/// Represents a Universally Unique IDentifier.
///
/// The value is a plain 16-byte array; it is `Copy`, compares byte-wise, and sorts in the same
/// order as its big-endian binary and lowercase text representations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Length of the 8-4-4-4-12 text representation.
const TEXT_LEN: usize = 36;

/// Positions of the hyphens in the text representation.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// `(text offset, byte offset, byte count)` of each hyphen-delimited group.
const GROUPS: [(usize, usize, usize); 5] = [
    (0, 0, 4),
    (9, 4, 2),
    (14, 6, 2),
    (19, 8, 2),
    (24, 10, 6),
];

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID by copying the bytes of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLength`] unless `src` is exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::{ParseError, Uuid};
    ///
    /// assert_eq!(Uuid::from_slice(&[0u8; 16]), Ok(Uuid::NIL));
    /// assert_eq!(
    ///     Uuid::from_slice(&[0u8; 15]),
    ///     Err(ParseError::InvalidLength { expected: 16, actual: 15 })
    /// );
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, ParseError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| ParseError::InvalidLength {
                expected: 16,
                actual: src.len(),
            })
    }

    /// Overwrites `self` with the bytes of a slice.
    ///
    /// `self` is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLength`] unless `src` is exactly 16 bytes long.
    pub fn overwrite_from_slice(&mut self, src: &[u8]) -> Result<(), ParseError> {
        *self = Self::from_slice(src)?;
        Ok(())
    }

    /// Creates a UUID from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hexadecimal digits are accepted in either case. The version and variant fields are not
    /// validated, so any well-formed string is accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found: the length, then the four
    /// hyphens, then the digits of each group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Uuid;
    ///
    /// let x = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000")?;
    /// assert_eq!(x.version(), 1);
    /// assert!(Uuid::parse_str("123e4567e89b12d3a456426614174000").is_err());
    /// # Ok::<(), uuid47::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        Self::try_parse_ascii(src.as_bytes())
    }

    /// Creates a UUID from the 8-4-4-4-12 hexadecimal representation given as bytes.
    ///
    /// This is the byte slice counterpart of [`Uuid::parse_str`] and follows the same rules.
    pub fn try_parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        if src.len() != TEXT_LEN {
            return Err(ParseError::InvalidLength {
                expected: TEXT_LEN,
                actual: src.len(),
            });
        }

        if let Some(&position) = HYPHENS.iter().find(|&&i| src[i] != b'-') {
            return Err(ParseError::InvalidSeparator { position });
        }

        let mut dst = [0u8; 16];
        for (text_start, byte_start, byte_count) in GROUPS {
            let digits = &src[text_start..text_start + byte_count * 2];
            hex::decode_to_slice(digits, &mut dst[byte_start..byte_start + byte_count]).map_err(
                |err| match err {
                    hex::FromHexError::InvalidHexCharacter { index, .. } => {
                        ParseError::InvalidHex {
                            position: text_start + index,
                        }
                    }
                    _ => ParseError::InvalidHex {
                        position: text_start,
                    },
                },
            )?;
        }
        Ok(Self(dst))
    }

    /// Overwrites `self` with the UUID parsed from the 8-4-4-4-12 hexadecimal string
    /// representation.
    ///
    /// `self` is left untouched when an error is returned.
    pub fn overwrite_from_str(&mut self, src: &str) -> Result<(), ParseError> {
        *self = Self::parse_str(src)?;
        Ok(())
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the 16 bytes in a newly allocated vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12 canonical hexadecimal string
    /// representation as a `String`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Uuid;
    ///
    /// let x = "01809424-3E59-7C05-9219-566F82FFF672".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(format!("{}", y), "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), uuid47::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<TEXT_LEN> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; TEXT_LEN];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in self.0.iter().enumerate() {
            if let (Some(hi), Some(lo)) = (buf_iter.next(), buf_iter.next()) {
                *hi = DIGITS[(e >> 4) as usize];
                *lo = DIGITS[(e & 15) as usize];
            }
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if let Some(sep) = buf_iter.next() {
                    *sep = b'-';
                }
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hexadecimal digits and hyphens only.
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the version field (the high nibble of byte 6).
    ///
    /// This is defined for every UUID, including the Nil and Max UUIDs and values of versions this
    /// crate never generates.
    pub const fn version(&self) -> Version {
        Version(self.0[6] >> 4)
    }

    /// Returns the variant field (the leading bits of byte 8).
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if *self == Self::NIL => Variant::VarNil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc | 0xd => Variant::Var110,
            _ if *self == Self::MAX => Variant::VarMax,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the number of milliseconds since the Unix epoch embedded in a version 7 UUID, or
    /// `None` for any other version.
    pub fn unix_ts_ms(&self) -> Option<u64> {
        if self.version() != Version::TIME_ORDERED {
            return None;
        }

        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        Some(u64::from_be_bytes(head) >> 16)
    }

    /// Returns the creation time embedded in a version 7 UUID, or `None` for any other version.
    ///
    /// A version 7 UUID whose timestamp field is zero yields the Unix epoch, which stays
    /// distinguishable from the `None` returned for other versions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Uuid;
    ///
    /// let x = Uuid::parse_str("017f22e2-79b0-7cc3-98c4-dc0c0c07398f")?;
    /// assert_eq!(x.timestamp().unwrap().to_rfc3339(), "2022-02-22T19:22:22+00:00");
    ///
    /// let y = Uuid::parse_str("2ca4b2ce-6c13-40d4-bccf-37d222820f6f")?;
    /// assert_eq!(y.timestamp(), None);
    /// # Ok::<(), uuid47::ParseError>(())
    /// ```
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.unix_ts_ms()
            .and_then(|ms| DateTime::from_timestamp_millis(ms as i64))
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = ParseError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse_str(&src)
    }
}

/// The 4-bit version field of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Version(u8);

impl Version {
    /// Version 4, generated from random bits.
    pub const RANDOM: Self = Self(4);

    /// Version 7, led by a Unix timestamp in milliseconds.
    pub const TIME_ORDERED: Self = Self(7);

    /// Returns the version number, between 0 and 15.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src.0
    }
}

impl PartialEq<u8> for Version {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

/// The reserved variants of UUIDs.
///
/// See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562.html#name-variant-field).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    VarNil,

    /// The variant field value of `0b0xxx` other than the Nil UUID.
    Var0,

    /// The variant field value of `0b10xx`, used by the UUIDs this crate generates.
    Var10,

    /// The variant field value of `0b110x`.
    Var110,

    /// The variant field value of `0b111x` other than the Max UUID.
    VarReserved,

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    VarMax,
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant, Version};
    use crate::ParseError;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(&'static str, [u8; 16], u8)] {
        &[
            ("00000000-0000-0000-0000-000000000000", [0x00; 16], 0),
            ("ffffffff-ffff-ffff-ffff-ffffffffffff", [0xff; 16], 15),
            (
                "123e4567-e89b-12d3-a456-426614174000",
                [
                    0x12, 0x3e, 0x45, 0x67, 0xe8, 0x9b, 0x12, 0xd3, 0xa4, 0x56, 0x42, 0x66, 0x14,
                    0x17, 0x40, 0x00,
                ],
                1,
            ),
            (
                "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
                [
                    0x2c, 0xa4, 0xb2, 0xce, 0x6c, 0x13, 0x40, 0xd4, 0xbc, 0xcf, 0x37, 0xd2, 0x22,
                    0x82, 0x0f, 0x6f,
                ],
                4,
            ),
            (
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
                [
                    0x01, 0x7f, 0x22, 0xe2, 0x79, 0xb0, 0x7c, 0xc3, 0x98, 0xc4, 0xdc, 0x0c, 0x0c,
                    0x07, 0x39, 0x8f,
                ],
                7,
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (text, bytes, version) in prepare_cases() {
            let from_bytes = Uuid::from(*bytes);
            assert_eq!(Ok(from_bytes), text.parse());
            assert_eq!(Ok(from_bytes), text.to_uppercase().parse());
            assert_eq!(Ok(from_bytes), Uuid::try_parse_ascii(text.as_bytes()));
            assert_eq!(&from_bytes.encode() as &str, *text);
            assert_eq!(&from_bytes.to_string(), text);
            assert_eq!(from_bytes.version(), *version);
            assert_eq!(from_bytes.as_bytes(), bytes);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let length = |actual| ParseError::InvalidLength {
            expected: 36,
            actual,
        };
        let separator = |position| ParseError::InvalidSeparator { position };
        let hex = |position| ParseError::InvalidHex { position };

        let cases = [
            ("", length(0)),
            (" 0180a8f0-5b82-75b4-9fef-ecad657c30bb", length(37)),
            ("0180a8f0-5b84-7438-ab50-f0626f78002b ", length(37)),
            (" 0180a8f0-5b84-7438-ab50-f063bd5331af ", length(38)),
            ("0180a8f05b847438ab50f068decfbfd7", length(32)),
            ("{0180a8f0-5b84-7438-ab50-f06ac2e5e082}", length(38)),
            ("urn:uuid:0180a8f0-5b84-7438-ab50-f06ac2e5e082", length(45)),
            ("+180a8f0-5b84-7438-ab50-f066aa10a367", hex(0)),
            ("-180a8f0-5b84-7438-ab50-f067cdce1d69", hex(0)),
            ("0180a8f0-5b847438-ab50-f069918388022", separator(13)),
            ("0180a8f0-5b84-74 8-ab50-f06bed27bdc7", hex(16)),
            ("0180a8g0-5b84-7438-ab50-f06c91175b8a", hex(6)),
            ("0180a8f0-5b84-7438-ab50_f06d3ea24429", separator(23)),
            ("0180a8f0_5b84_7438_ab50_f06d3ea24429", separator(8)),
            ("0180a8f0-5b84-7438-ab50-f06d3ea2442z", hex(35)),
            ("0180a8f0-5b84-7438-ab50-f06d3ea244é", hex(34)),
        ];

        for (e, err) in cases {
            assert_eq!(e.parse::<Uuid>(), Err(err), "{:?}", e);
        }
    }

    /// Reports absolute position of a bad digit in every group
    #[test]
    fn reports_absolute_position_of_a_bad_digit_in_every_group() {
        let text = "0180a8f0-5b84-7438-ab50-f06d3ea24429";
        for position in (0..36).filter(|i| ![8, 13, 18, 23].contains(i)) {
            let mut bytes = text.as_bytes().to_vec();
            bytes[position] = b'g';
            assert_eq!(
                Uuid::try_parse_ascii(&bytes),
                Err(ParseError::InvalidHex { position })
            );
        }
    }

    /// Rejects every altered hyphen position
    #[test]
    fn rejects_every_altered_hyphen_position() {
        let text = "0180a8f0-5b84-7438-ab50-f06d3ea24429";
        for position in [8, 13, 18, 23] {
            for replacement in [b'0', b'_', b' ', b'+'] {
                let mut bytes = text.as_bytes().to_vec();
                bytes[position] = replacement;
                assert_eq!(
                    Uuid::try_parse_ascii(&bytes),
                    Err(ParseError::InvalidSeparator { position })
                );
            }
        }
    }

    /// Accepts any version and variant
    #[test]
    fn accepts_any_version_and_variant() {
        for version in 0..16u8 {
            let text = format!("0180a8f0-5b84-{:x}438-1b50-f06d3ea24429", version);
            let e = Uuid::parse_str(&text).unwrap();
            assert_eq!(e.version(), version);
            assert_eq!(e.variant(), Variant::Var0);
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert_eq!(Uuid::default(), Uuid::NIL);
        assert_eq!(Uuid::NIL.variant(), Variant::VarNil);
        assert_eq!(Uuid::MAX.variant(), Variant::VarMax);
    }

    /// Reads variant field
    #[test]
    fn reads_variant_field() {
        let cases = [
            ("00000000-0000-0000-0000-000000000001", Variant::Var0),
            ("0180a8f0-5b84-7438-7b50-f06d3ea24429", Variant::Var0),
            ("0180a8f0-5b84-7438-8b50-f06d3ea24429", Variant::Var10),
            ("0180a8f0-5b84-7438-bb50-f06d3ea24429", Variant::Var10),
            ("0180a8f0-5b84-7438-cb50-f06d3ea24429", Variant::Var110),
            ("0180a8f0-5b84-7438-db50-f06d3ea24429", Variant::Var110),
            ("0180a8f0-5b84-7438-eb50-f06d3ea24429", Variant::VarReserved),
            ("ffffffff-ffff-ffff-ffff-fffffffffffe", Variant::VarReserved),
        ];
        for (text, variant) in cases {
            assert_eq!(Uuid::parse_str(text).unwrap().variant(), variant, "{}", text);
        }
    }

    /// Creates from slices of exactly 16 bytes only
    #[test]
    fn creates_from_slices_of_exactly_16_bytes_only() {
        assert_eq!(Uuid::from_slice(&[0u8; 16]), Ok(Uuid::NIL));
        for len in [0, 1, 15, 17, 36] {
            let src = vec![0xabu8; len];
            assert_eq!(
                Uuid::from_slice(&src),
                Err(ParseError::InvalidLength {
                    expected: 16,
                    actual: len
                })
            );
            assert_eq!(Uuid::try_from(&src[..]), Uuid::from_slice(&src));
        }

        let mut src = [7u8; 16];
        let e = Uuid::from_slice(&src).unwrap();
        src[0] = 8;
        assert_eq!(e.as_bytes(), &[7u8; 16]);
    }

    /// Overwrites on success and keeps value on failure
    #[test]
    fn overwrites_on_success_and_keeps_value_on_failure() {
        let original = Uuid::parse_str("017f22e2-79b0-7cc3-98c4-dc0c0c07398f").unwrap();

        let mut e = original;
        assert!(e.overwrite_from_slice(&[1u8; 17]).is_err());
        assert_eq!(e, original);
        assert_eq!(e.overwrite_from_slice(&[1u8; 16]), Ok(()));
        assert_eq!(e.as_bytes(), &[1u8; 16]);

        let mut e = original;
        assert!(e
            .overwrite_from_str("017f22e2-79b0-7cc3-98c4-dc0c0c07398g")
            .is_err());
        assert_eq!(e, original);
        assert_eq!(
            e.overwrite_from_str("2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"),
            Ok(())
        );
        assert_eq!(e.to_string(), "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    }

    /// Extracts timestamp from version 7 only
    #[test]
    fn extracts_timestamp_from_version_7_only() {
        use chrono::Datelike;

        let e = Uuid::parse_str("017f22e2-79b0-7cc3-98c4-dc0c0c07398f").unwrap();
        assert_eq!(e.unix_ts_ms(), Some(0x017f_22e2_79b0));
        assert_eq!(
            e.timestamp().map(|t| t.timestamp_millis()),
            Some(1_645_557_742_000)
        );

        let epoch = Uuid::parse_str("00000000-0000-7000-8000-000000000000").unwrap();
        assert_eq!(epoch.unix_ts_ms(), Some(0));
        assert_eq!(epoch.timestamp().map(|t| t.timestamp_millis()), Some(0));

        let max = Uuid::parse_str("ffffffff-ffff-7fff-bfff-ffffffffffff").unwrap();
        assert_eq!(max.unix_ts_ms(), Some((1 << 48) - 1));
        assert_eq!(max.timestamp().map(|t| t.year()), Some(10889));

        for text in [
            "00000000-0000-0000-0000-000000000000",
            "123e4567-e89b-12d3-a456-426614174000",
            "017f22e2-79b0-4cc3-98c4-dc0c0c07398f",
            "017f22e2-79b0-6cc3-98c4-dc0c0c07398f",
            "017f22e2-79b0-8cc3-98c4-dc0c0c07398f",
        ] {
            let e = Uuid::parse_str(text).unwrap();
            assert_eq!(e.unix_ts_ms(), None);
            assert_eq!(e.timestamp(), None);
        }
    }

    /// Displays and converts version numbers
    #[test]
    fn displays_and_converts_version_numbers() {
        assert_eq!(Version::RANDOM.to_string(), "4");
        assert_eq!(Version::TIME_ORDERED.to_string(), "7");
        assert_eq!(u8::from(Version::TIME_ORDERED), 7);
        assert_eq!(Uuid::MAX.version().get(), 15);
        assert_eq!(Uuid::MAX.version().to_string(), "15");
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (text, bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes(e.to_bytes()), e);
            assert_eq!(Uuid::from_slice(&e.to_vec()), Ok(e));
            assert_eq!(Uuid::from_slice(e.as_ref()), Ok(e));
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            assert_eq!(Uuid::try_from(*text), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(e).to_string(), text);
        }
    }

    /// Sorts in the same order as binary and text representations
    #[test]
    fn sorts_in_the_same_order_as_binary_and_text_representations() {
        let mut by_value: Vec<Uuid> = prepare_cases().iter().map(|c| Uuid::from(c.1)).collect();
        let mut by_text: Vec<String> = prepare_cases().iter().map(|c| c.0.to_owned()).collect();
        by_value.sort();
        by_text.sort();
        let encoded: Vec<String> = by_value.iter().map(Uuid::to_string).collect();
        assert_eq!(encoded, by_text);
    }

    mod properties {
        use super::Uuid;
        use proptest::prelude::*;

        proptest! {
            /// Round-trips any 16 bytes through the binary representation
            #[test]
            fn round_trips_any_16_bytes_through_binary(bytes in any::<[u8; 16]>()) {
                let e = Uuid::from_slice(&bytes).unwrap();
                prop_assert_eq!(e.to_bytes(), bytes);
                prop_assert_eq!(e.to_vec(), bytes.to_vec());
            }

            /// Round-trips canonical lowercase text
            #[test]
            fn round_trips_canonical_lowercase_text(
                text in "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
            ) {
                let e = Uuid::parse_str(&text).unwrap();
                prop_assert_eq!(e.to_string(), text.clone());
                prop_assert_eq!(Uuid::parse_str(&text.to_uppercase()), Ok(e));
            }

            /// Rejects text of any other length
            #[test]
            fn rejects_text_of_any_other_length(text in "[0-9a-f-]{0,80}") {
                prop_assume!(text.len() != 36);
                prop_assert!(Uuid::parse_str(&text).unwrap_err().is_length_error());
            }
        }
    }
}
