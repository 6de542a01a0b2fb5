//! Pre-flight checks for live trading
//!
//! Demo configurations are never checked: nothing they describe reaches a
//! venue. In live mode the checks run in order and the first failure aborts.

use crate::error::{ConfigError, Result};
use crate::parameters::{ExposureLimits, Parameters, ParametersDraft};

/// Smallest per-trade amount most venues accept, in USD
pub const MIN_TESTED_EXPOSURE: f64 = 10.0;

/// Check `draft` and freeze it into read-only [`Parameters`]
pub fn validate(draft: ParametersDraft) -> Result<Parameters> {
    if !draft.exposure.demo {
        check_exposure(&draft.exposure)?;
    }
    Ok(draft.freeze())
}

fn check_exposure(exposure: &ExposureLimits) -> Result<()> {
    // With full exposure the tested amount is never used.
    if exposure.use_full_exposure {
        return Ok(());
    }

    if exposure.tested_exposure < MIN_TESTED_EXPOSURE {
        return Err(ConfigError::Invalid(format!(
            "Minimum USD needed: ${:.2}! Otherwise some exchanges will reject the orders",
            MIN_TESTED_EXPOSURE
        )));
    }

    if exposure.tested_exposure > exposure.max_exposure {
        return Err(ConfigError::Invalid(format!(
            "Test exposure ({:.2}) is above max exposure ({:.2})",
            exposure.tested_exposure, exposure.max_exposure
        )));
    }

    Ok(())
}
