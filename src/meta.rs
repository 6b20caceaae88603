//! Merge timestamp persistence
//!
//! The meta file holds a single RFC 3339 timestamp recording when the
//! outputs were last generated; `status` compares it against the
//! staleness threshold.

use anyhow::{Context, Result};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::Error;
use crate::manager::EnvManager;
use crate::utils::path::{read_file, write_file};

/// Write the manager's merge time to a meta file
pub fn write_meta(manager: &EnvManager, path: &Path) -> Result<()> {
    let ts = manager.merge_time()?;
    let text = ts.format(&Rfc3339)?;
    write_file(path, &text)
        .with_context(|| format!("failed to write meta file {}", path.display()))
}

/// Read the merge time back from a meta file
pub fn read_meta(path: &Path) -> Result<OffsetDateTime> {
    let content = read_file(path)
        .with_context(|| format!("failed to read meta file {}", path.display()))?;
    let ts = OffsetDateTime::parse(content.trim(), &Rfc3339)
        .map_err(Error::InvalidTimestamp)
        .with_context(|| format!("in meta file {}", path.display()))?;
    Ok(ts)
}
