//! Round command implementation.

use anyhow::Context;
use nagutils::round_to_places;

/// Prints `value` rounded half up to `places` decimal places.
pub fn command_round(value: f64, places: i32) -> anyhow::Result<()> {
    let rounded = round_to_places(value, places)
        .with_context(|| format!("Cannot round {} to {} places", value, places))?;
    println!("{}", rounded);
    Ok(())
}
