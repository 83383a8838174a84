//! Missing mandatory field detection

use fnol_domain::{Field, FieldMap};

/// Mandatory fields absent from the mapping, in declared order.
///
/// A field counts as missing when it is absent, blank/whitespace-only
/// text, or an empty contact sub-record.
pub fn find_missing(fields: &FieldMap) -> Vec<Field> {
    Field::MANDATORY
        .iter()
        .copied()
        .filter(|field| fields.get(field).map_or(true, |value| value.is_empty()))
        .collect()
}
