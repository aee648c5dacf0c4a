//! Generated lookup tables.

pub(crate) mod compat_decomposition;
pub(crate) mod iso_15924;
pub(crate) mod iso_3166;
