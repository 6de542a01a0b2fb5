//! Startup entry point: defaults, overlay, validation

use crate::error::Result;
use crate::parameters::{Parameters, ParametersDraft};
use crate::{overlay, validation};
use std::path::Path;

impl ParametersDraft {
    /// Defaults merged with the file at `path`, not yet validated
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut draft = ParametersDraft::defaults();
        overlay::apply_file(path, &mut draft)?;
        Ok(draft)
    }
}

/// Load, merge and validate the config file at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Parameters> {
    validation::validate(ParametersDraft::from_file(path)?)
}

/// Same as [`load`] for a document already in memory
pub fn load_str(yaml_content: &str) -> Result<Parameters> {
    let mut draft = ParametersDraft::defaults();
    overlay::apply_str(yaml_content, &mut draft)?;
    validation::validate(draft)
}
