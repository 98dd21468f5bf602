use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::output;

/// Print entities as-is for JSON/raw, or mapped to table rows.
pub fn emit_list<T, R>(
    items: &[T],
    format: OutputFormat,
    to_row: impl Fn(&T) -> R,
) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize,
{
    match format {
        OutputFormat::Table => output(&items.iter().map(to_row).collect::<Vec<_>>(), format),
        OutputFormat::Json | OutputFormat::Raw => output(&items, format),
    }
}

/// Single-entity counterpart of [`emit_list`].
pub fn emit_one<T, R>(
    item: &T,
    format: OutputFormat,
    to_row: impl Fn(&T) -> R,
) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize,
{
    match format {
        OutputFormat::Table => output(&to_row(item), format),
        OutputFormat::Json | OutputFormat::Raw => output(item, format),
    }
}
