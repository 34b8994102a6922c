// src/config/validation.rs

use crate::errors::{Error, Result};
use std::path::Path;

/// Checks settings that cannot be expressed through clap alone.
pub(super) fn validate(
    first_input: Option<&Path>,
    second_input: Option<&Path>,
    output_dir: Option<&Path>,
) -> Result<()> {
    if let Some(dir) = output_dir {
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "Output directory '{}' does not exist or is not a directory.",
                dir.display()
            )));
        }
    }

    if let (Some(first), Some(second)) = (first_input, second_input) {
        if first == second {
            log::warn!(
                "Both inputs are '{}'; each merge will pair the file with itself.",
                first.display()
            );
        }
    }

    Ok(())
}
