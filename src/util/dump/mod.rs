//! Rendering of intermediate pipeline values
//!
//! Text output uses each value's `Display`; JSON and RON go through serde.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;

/// Output format for dumped stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
    Ron,
}

/// Render `value` in the requested format
pub fn render<T>(
    value: &T,
    format: DumpFormat,
) -> Result<String>
where
    T: Serialize + fmt::Display + ?Sized,
{
    match format {
        DumpFormat::Text => Ok(value.to_string()),
        DumpFormat::Json => serde_json::to_string_pretty(value).context("Failed to render JSON"),
        DumpFormat::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
            .context("Failed to render RON"),
    }
}

/// Display adapter for a slice, one item per line
pub struct Listing<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Listing<'_, T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for item in self.0 {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl<T: Serialize> Serialize for Listing<'_, T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
