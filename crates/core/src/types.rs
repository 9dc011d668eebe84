/// Stable identifier of an idol record. Always positive.
pub type IdolId = i64;
