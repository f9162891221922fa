//! Ordered tag/value storage for message sections.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::tag::Tag;
use super::timestamp::{format_utc_timestamp, parse_utc_timestamp};

/// Errors reading a field out of a [`FieldMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Tag is not present.
    NotFound {
        /// The missing tag.
        tag: Tag,
    },
    /// Tag is present but its value does not decode as the requested type.
    IncorrectDataFormat {
        /// The offending tag.
        tag: Tag,
        /// Requested type name.
        expected: &'static str,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { tag } => write!(f, "Conditionally required field missing ({tag})"),
            Self::IncorrectDataFormat { tag, expected } => {
                write!(f, "Incorrect data format for value ({tag}): expected {expected}")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// A repeating group: the count tag plus one field map per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Group {
    count_tag: Tag,
    entries: Vec<FieldMap>,
}

/// Ordered collection of fields.
///
/// `set_*` replaces an existing tag in place, otherwise appends. Values are
/// kept as raw bytes and decoded on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: Vec<(Tag, Vec<u8>)>,
    groups: Vec<Group>,
}

impl FieldMap {
    /// Create an empty field map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Set a raw value.
    pub fn set_bytes(&mut self, tag: Tag, value: impl Into<Vec<u8>>) -> &mut Self {
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(t, _)| *t == tag) {
            slot.1 = value;
        } else {
            self.fields.push((tag, value));
        }
        self
    }

    /// Set a string value.
    pub fn set_string(&mut self, tag: Tag, value: impl AsRef<str>) -> &mut Self {
        self.set_bytes(tag, value.as_ref().as_bytes())
    }

    /// Set an integer value.
    pub fn set_int(&mut self, tag: Tag, value: i64) -> &mut Self {
        self.set_bytes(tag, value.to_string())
    }

    /// Set a decimal value rendered with exactly `scale` fractional digits.
    ///
    /// Halves round away from zero.
    pub fn set_decimal(&mut self, tag: Tag, value: Decimal, scale: u32) -> &mut Self {
        let mut scaled = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        scaled.rescale(scale);
        self.set_bytes(tag, scaled.to_string())
    }

    /// Set a UTCTimestamp value.
    pub fn set_time(&mut self, tag: Tag, value: &DateTime<Utc>) -> &mut Self {
        self.set_bytes(tag, format_utc_timestamp(value))
    }

    /// Set a repeating group. The count field is written under `count_tag`.
    pub fn set_group(&mut self, count_tag: Tag, entries: Vec<Self>) -> &mut Self {
        self.set_bytes(count_tag, entries.len().to_string());
        if let Some(group) = self.groups.iter_mut().find(|g| g.count_tag == count_tag) {
            group.entries = entries;
        } else {
            self.groups.push(Group { count_tag, entries });
        }
        self
    }

    /// Whether the tag is present.
    #[must_use]
    pub fn has(&self, tag: Tag) -> bool {
        self.fields.iter().any(|(t, _)| *t == tag)
    }

    /// Raw value of a tag.
    #[must_use]
    pub fn get_bytes(&self, tag: Tag) -> Option<&[u8]> {
        self.fields
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, value)| value.as_slice())
    }

    /// Read a tag as text.
    pub fn get_string(&self, tag: Tag) -> Result<&str, FieldError> {
        let raw = self.get_bytes(tag).ok_or(FieldError::NotFound { tag })?;
        std::str::from_utf8(raw).map_err(|_| FieldError::IncorrectDataFormat {
            tag,
            expected: "string",
        })
    }

    /// Read a tag as an integer.
    pub fn get_int(&self, tag: Tag) -> Result<i64, FieldError> {
        let text = self.get_string(tag)?;
        text.parse().map_err(|_| FieldError::IncorrectDataFormat {
            tag,
            expected: "int",
        })
    }

    /// Read a tag as a decimal.
    pub fn get_decimal(&self, tag: Tag) -> Result<Decimal, FieldError> {
        let text = self.get_string(tag)?;
        Decimal::from_str(text).map_err(|_| FieldError::IncorrectDataFormat {
            tag,
            expected: "decimal",
        })
    }

    /// Read a tag as a UTCTimestamp.
    pub fn get_time(&self, tag: Tag) -> Result<DateTime<Utc>, FieldError> {
        let text = self.get_string(tag)?;
        parse_utc_timestamp(text).ok_or(FieldError::IncorrectDataFormat {
            tag,
            expected: "UTCTimestamp",
        })
    }

    /// Entries of a repeating group.
    #[must_use]
    pub fn group(&self, count_tag: Tag) -> Option<&[Self]> {
        self.groups
            .iter()
            .find(|g| g.count_tag == count_tag)
            .map(|g| g.entries.as_slice())
    }

    /// Tags in insertion order. Group count tags are included, group entry
    /// fields are not.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.fields.iter().map(|(tag, _)| *tag)
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render `tag=value` pairs, each group's entries directly after its
    /// count field.
    pub(crate) fn write_pairs(
        &self,
        f: &mut fmt::Formatter<'_>,
        delimiter: char,
        first: &mut bool,
    ) -> fmt::Result {
        for (tag, value) in &self.fields {
            if !*first {
                write!(f, "{delimiter}")?;
            }
            *first = false;
            write!(f, "{tag}={}", String::from_utf8_lossy(value))?;

            if let Some(entries) = self.group(*tag) {
                for entry in entries {
                    entry.write_pairs(f, delimiter, first)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn set_replaces_in_place() {
        let mut map = FieldMap::new();
        map.set_string(Tag::CL_ORD_ID, "A")
            .set_string(Tag::SYMBOL, "AAPL")
            .set_string(Tag::CL_ORD_ID, "B");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_string(Tag::CL_ORD_ID), Ok("B"));
        assert_eq!(
            map.tags().collect::<Vec<_>>(),
            vec![Tag::CL_ORD_ID, Tag::SYMBOL]
        );
    }

    #[test]
    fn decimal_uses_fixed_scale() {
        let mut map = FieldMap::new();
        map.set_decimal(Tag::ORDER_QTY, Decimal::new(100, 0), 2)
            .set_decimal(Tag::PRICE, Decimal::new(50_257, 3), 2)
            .set_decimal(Tag::STOP_PX, Decimal::ZERO, 2);

        assert_eq!(map.get_string(Tag::ORDER_QTY), Ok("100.00"));
        assert_eq!(map.get_string(Tag::PRICE), Ok("50.26"));
        assert_eq!(map.get_string(Tag::STOP_PX), Ok("0.00"));
        assert_eq!(map.get_decimal(Tag::ORDER_QTY), Ok(Decimal::new(100, 0)));

        map.set_decimal(Tag::PRICE, Decimal::new(50_125, 3), 2)
            .set_decimal(Tag::ORDER_QTY, Decimal::new(1_005, 3), 2)
            .set_decimal(Tag::STOP_PX, Decimal::new(-2_345, 3), 2);

        assert_eq!(map.get_string(Tag::PRICE), Ok("50.13"));
        assert_eq!(map.get_string(Tag::ORDER_QTY), Ok("1.01"));
        assert_eq!(map.get_string(Tag::STOP_PX), Ok("-2.35"));
    }

    #[test]
    fn typed_getters_report_errors() {
        let mut map = FieldMap::new();
        map.set_string(Tag::SYMBOL, "AAPL")
            .set_bytes(Tag::CL_ORD_ID, vec![0xff, 0xfe]);

        assert_eq!(
            map.get_int(Tag::SYMBOL),
            Err(FieldError::IncorrectDataFormat {
                tag: Tag::SYMBOL,
                expected: "int",
            })
        );
        assert_eq!(
            map.get_string(Tag::PRICE),
            Err(FieldError::NotFound { tag: Tag::PRICE })
        );
        assert!(map.get_string(Tag::CL_ORD_ID).is_err());
    }

    #[test]
    fn time_roundtrips_at_millisecond_precision() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let mut map = FieldMap::new();
        map.set_time(Tag::TRANSACT_TIME, &ts);

        assert_eq!(map.get_string(Tag::TRANSACT_TIME), Ok("20250102-03:04:05.000"));
        assert_eq!(map.get_time(Tag::TRANSACT_TIME), Ok(ts));
    }

    #[test]
    fn group_sets_count_field() {
        let mut entry = FieldMap::new();
        entry.set_string(Tag::MD_ENTRY_TYPE, "0");

        let mut map = FieldMap::new();
        map.set_group(Tag::NO_MD_ENTRY_TYPES, vec![entry.clone()]);

        assert_eq!(map.get_int(Tag::NO_MD_ENTRY_TYPES), Ok(1));
        assert_eq!(map.group(Tag::NO_MD_ENTRY_TYPES), Some(&[entry][..]));
        assert!(map.group(Tag::NO_RELATED_SYM).is_none());
    }
}
