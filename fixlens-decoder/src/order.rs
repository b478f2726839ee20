/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Display ordering for decoded fields.
//!
//! A total ordering key: the version pseudo-field first, the standard
//! header tags in their conventional positions, CheckSum last, everything
//! else in ascending tag order after the header block. The sort must be
//! stable so duplicate tags keep their extraction order.

use fixlens_core::DecodedField;

/// Offset applied to ordinary tags so they sort after the header block.
const HEADER_BLOCK_OFFSET: u64 = 1000;

/// Key for non-numeric tags; after every numeric tag, before CheckSum.
const NON_NUMERIC_KEY: u64 = u64::MAX - 1;

/// Key for CheckSum (tag 10); always last.
const CHECKSUM_KEY: u64 = u64::MAX;

/// Returns the total ordering key for a decoded field.
///
/// Pure function of the tag; the sole ordering criterion for output.
#[must_use]
pub fn sort_key(field: &DecodedField) -> u64 {
    if field.is_version_pseudo_field() {
        return 0;
    }
    match field.numeric_tag() {
        Some(8) => 1,
        Some(9) => 2,
        Some(35) => 3,
        Some(49) => 4,
        Some(56) => 5,
        Some(34) => 6,
        Some(52) => 7,
        Some(10) => CHECKSUM_KEY,
        Some(tag) => HEADER_BLOCK_OFFSET + u64::from(tag),
        None => NON_NUMERIC_KEY,
    }
}

/// Sorts fields into display order. Stable: duplicate tags preserve their
/// relative extraction order.
pub fn sort_fields(fields: &mut [DecodedField]) {
    fields.sort_by_key(sort_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_core::VERSION_PSEUDO_TAG;

    fn field(tag: &str) -> DecodedField {
        DecodedField::new(tag, format!("Tag{tag}"), "x")
    }

    #[test]
    fn test_header_block_order() {
        let mut fields = vec![
            field("52"),
            field("10"),
            field("34"),
            field("56"),
            field("49"),
            field("35"),
            field("9"),
            field("8"),
            DecodedField::new(VERSION_PSEUDO_TAG, "Version", "FIX 4.4"),
        ];
        sort_fields(&mut fields);

        let tags: Vec<&str> = fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, ["VERSION", "8", "9", "35", "49", "56", "34", "52", "10"]);
    }

    #[test]
    fn test_body_tags_ascend_and_checksum_last() {
        let mut fields = vec![field("10"), field("55"), field("11"), field("44")];
        sort_fields(&mut fields);

        let tags: Vec<&str> = fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, ["11", "44", "55", "10"]);
    }

    #[test]
    fn test_order_is_permutation_invariant() {
        let mut a = vec![field("54"), field("8"), field("10"), field("38")];
        let mut b = vec![field("10"), field("38"), field("8"), field("54")];
        sort_fields(&mut a);
        sort_fields(&mut b);
        let tags = |fs: &[DecodedField]| fs.iter().map(|f| f.tag.clone()).collect::<Vec<_>>();
        assert_eq!(tags(&a), tags(&b));
    }

    #[test]
    fn test_duplicates_preserve_extraction_order() {
        let mut fields = vec![
            DecodedField::new("55", "Symbol", "MSFT"),
            DecodedField::new("55", "Symbol", "AAPL"),
        ];
        sort_fields(&mut fields);
        assert_eq!(fields[0].raw_value, "MSFT");
        assert_eq!(fields[1].raw_value, "AAPL");
    }

    #[test]
    fn test_non_numeric_after_numeric_before_checksum() {
        let mut fields = vec![field("10"), field("weird"), field("9999")];
        sort_fields(&mut fields);
        let tags: Vec<&str> = fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, ["9999", "weird", "10"]);
    }
}
