//! keakit - KEA data type code translation for Rust
//!
//! keakit provides the static lookup tables that translate a raster
//! band's numeric type between three identifier schemes: the KEA
//! format's own type codes, numeric-array dtype names, and GDAL's
//! data type codes.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use keakit::{gdal, kea_to_gdal, numpy_to_kea};
//!
//! let code = numpy_to_kea("float32")?;
//! assert_eq!(code, 9);
//! assert_eq!(kea_to_gdal(code)?, gdal::GDT_FLOAT32);
//! # Ok::<(), keakit::Error>(())
//! ```
//!
//! ## Undefined Types
//!
//! KEA reserves type code 0 for an undefined band type. It pairs with
//! GDAL's unknown type but has no dtype name:
//!
//! ```
//! use keakit::{gdal, gdal_to_kea, kea_to_numpy, KEA_UNDEFINED};
//!
//! assert_eq!(gdal_to_kea(gdal::GDT_UNKNOWN)?, KEA_UNDEFINED);
//! assert!(kea_to_numpy(KEA_UNDEFINED).is_err());
//! # Ok::<(), keakit::Error>(())
//! ```

pub mod dtypes;
pub mod error;
pub mod gdal;

pub use dtypes::{
    gdal_to_kea, kea_codes, kea_to_gdal, kea_to_numpy, numpy_to_kea, KEA_UNDEFINED,
};
pub use error::{Error, Result};
