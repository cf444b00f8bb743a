// SPDX-License-Identifier: MPL-2.0

//! Support for `#[derive(Debug)]` on registered enums.

use core::fmt;

use crate::Primitive;

/// Formats a registered enum as the first entry of `names` equal to `repr`, or as `name(repr)` if
/// there is none.
pub fn fmt_flags<R: Primitive>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    repr: R,
    names: &[(&str, R)],
) -> fmt::Result {
    match names.iter().find(|(_, value)| *value == repr) {
        Some((variant, _)) => f.write_str(variant),
        None => f.debug_tuple(name).field(&repr).finish(),
    }
}
