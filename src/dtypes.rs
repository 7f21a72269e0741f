//! KEA data type code translation tables
//!
//! The KEA format tags each raster band with a small integer type code
//! (0 = undefined, 1-10 = concrete numeric types). This module
//! translates between those codes, numeric-array dtype names, and
//! GDAL's data type codes. The tables are fixed at compile time and
//! the derived lookup maps are built once on first use; there is no
//! mutation API.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::gdal;

/// KEA type code reserved for an undefined band type
pub const KEA_UNDEFINED: u8 = 0;

// The unsigned 16-bit entry is keyed "uin16"; callers key on this
// exact spelling, so "uint16" must not resolve.
const NUMPY_TO_KEA: &[(&str, u8)] = &[
    ("int8", 1),
    ("int16", 2),
    ("int32", 3),
    ("int64", 4),
    ("uint8", 5),
    ("uin16", 6),
    ("uint32", 7),
    ("uint64", 8),
    ("float32", 9),
    ("float64", 10),
];

// int8, int64 and uint64 have no GDAL counterpart.
const GDAL_TO_KEA: &[(u32, u8)] = &[
    (gdal::GDT_UNKNOWN, KEA_UNDEFINED),
    (gdal::GDT_INT16, 2),
    (gdal::GDT_INT32, 3),
    (gdal::GDT_BYTE, 5),
    (gdal::GDT_UINT16, 6),
    (gdal::GDT_UINT32, 7),
    (gdal::GDT_FLOAT32, 9),
    (gdal::GDT_FLOAT64, 10),
];

static NUMPY_TO_KEA_MAP: LazyLock<HashMap<&'static str, u8>> =
    LazyLock::new(|| NUMPY_TO_KEA.iter().copied().collect());

static KEA_TO_NUMPY_MAP: LazyLock<HashMap<u8, &'static str>> =
    LazyLock::new(|| invert(NUMPY_TO_KEA));

static GDAL_TO_KEA_MAP: LazyLock<HashMap<u32, u8>> =
    LazyLock::new(|| GDAL_TO_KEA.iter().copied().collect());

static KEA_TO_GDAL_MAP: LazyLock<HashMap<u8, u32>> =
    LazyLock::new(|| invert(GDAL_TO_KEA));

/// Builds the reverse of a forward table by swapping each pair.
///
/// Panics if the forward table maps two keys to the same value; a
/// collision would silently drop an entry from the reverse map.
fn invert<K, V>(table: &[(K, V)]) -> HashMap<V, K>
where
    K: Copy,
    V: Copy + Eq + Hash,
{
    let mut reverse = HashMap::with_capacity(table.len());
    for &(key, value) in table {
        assert!(
            reverse.insert(value, key).is_none(),
            "duplicate value in forward table"
        );
    }
    reverse
}

/// Translates a dtype name to its KEA type code
pub fn numpy_to_kea(name: &str) -> Result<u8> {
    NUMPY_TO_KEA_MAP
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownKey(format!("dtype name {:?}", name)))
}

/// Translates a KEA type code to its dtype name
///
/// [`KEA_UNDEFINED`] has no dtype name and fails like any other
/// unlisted code.
pub fn kea_to_numpy(code: u8) -> Result<&'static str> {
    KEA_TO_NUMPY_MAP
        .get(&code)
        .copied()
        .ok_or_else(|| Error::UnknownKey(format!("KEA type code {}", code)))
}

/// Translates a GDAL data type code to its KEA type code
///
/// [`gdal::GDT_UNKNOWN`] translates to [`KEA_UNDEFINED`].
pub fn gdal_to_kea(code: u32) -> Result<u8> {
    GDAL_TO_KEA_MAP
        .get(&code)
        .copied()
        .ok_or_else(|| Error::UnknownKey(format!("GDAL data type {}", code)))
}

/// Translates a KEA type code to its GDAL data type code
pub fn kea_to_gdal(code: u8) -> Result<u32> {
    KEA_TO_GDAL_MAP
        .get(&code)
        .copied()
        .ok_or_else(|| Error::UnknownKey(format!("KEA type code {}", code)))
}

/// Returns the defined KEA type codes in ascending order
///
/// [`KEA_UNDEFINED`] is not included.
pub fn kea_codes() -> impl Iterator<Item = u8> {
    NUMPY_TO_KEA.iter().map(|&(_, code)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numpy_kea_round_trip() {
        for &(name, _) in NUMPY_TO_KEA {
            let code = numpy_to_kea(name).unwrap();
            assert_eq!(kea_to_numpy(code).unwrap(), name);
        }
    }

    #[test]
    fn test_gdal_kea_round_trip() {
        for &(gdal_code, _) in GDAL_TO_KEA {
            let code = gdal_to_kea(gdal_code).unwrap();
            assert_eq!(kea_to_gdal(code).unwrap(), gdal_code);
        }
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(numpy_to_kea("int8").unwrap(), 1);
        assert_eq!(numpy_to_kea("uint8").unwrap(), 5);
        assert_eq!(numpy_to_kea("float64").unwrap(), 10);
        assert_eq!(gdal_to_kea(gdal::GDT_BYTE).unwrap(), 5);
        assert_eq!(kea_to_gdal(9).unwrap(), gdal::GDT_FLOAT32);
    }

    #[test]
    fn test_gdal_unknown_is_undefined() {
        assert_eq!(gdal_to_kea(gdal::GDT_UNKNOWN).unwrap(), KEA_UNDEFINED);
        assert_eq!(kea_to_gdal(KEA_UNDEFINED).unwrap(), gdal::GDT_UNKNOWN);
    }

    #[test]
    fn test_undefined_has_no_dtype_name() {
        assert!(kea_to_numpy(KEA_UNDEFINED).is_err());
    }

    #[test]
    fn test_out_of_range_codes() {
        assert!(kea_to_numpy(11).is_err());
        assert!(kea_to_gdal(11).is_err());
        assert!(kea_to_numpy(255).is_err());
        assert!(gdal_to_kea(9999).is_err());
    }

    #[test]
    fn test_codes_without_gdal_counterpart() {
        // int8, int64, uint64
        assert!(kea_to_gdal(1).is_err());
        assert!(kea_to_gdal(4).is_err());
        assert!(kea_to_gdal(8).is_err());
    }

    #[test]
    fn test_uin16_spelling() {
        assert_eq!(numpy_to_kea("uin16").unwrap(), 6);
        assert!(numpy_to_kea("uint16").is_err());
        assert_eq!(kea_to_numpy(6).unwrap(), "uin16");
    }

    #[test]
    fn test_reverse_maps_lossless() {
        assert_eq!(KEA_TO_NUMPY_MAP.len(), NUMPY_TO_KEA.len());
        assert_eq!(KEA_TO_GDAL_MAP.len(), GDAL_TO_KEA.len());
    }

    #[test]
    fn test_kea_codes() {
        let codes: Vec<u8> = kea_codes().collect();
        assert_eq!(codes, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_unknown_key_message() {
        let err = numpy_to_kea("complex64").unwrap_err();
        assert!(err.to_string().contains("complex64"));

        let err = kea_to_gdal(11).unwrap_err();
        assert!(err.to_string().contains("11"));
    }
}
