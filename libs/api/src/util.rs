use anyhow::Context;

/// A non-numeric id segment surfaces as a persistence failure (500),
/// not a 400.
pub(crate) fn parse_id(raw: &str) -> anyhow::Result<i32> {
    raw.parse()
        .with_context(|| format!("invalid record id: {raw}"))
}
