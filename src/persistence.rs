//! Save and restore trained parameters
//!
//! Parameters are stored as a single JSON array of floats in the order
//! produced by `Network::parameters`. Architecture and optimizer state are
//! not stored; the loading side rebuilds the network from its config first.

use crate::error::Result;
use crate::network::Network;
use log::info;
use std::fs;
use std::path::Path;

/// Write the network's flat parameter sequence to `path`.
pub fn save_parameters<P: AsRef<Path>>(network: &Network, path: P) -> Result<()> {
    let parameters = network.parameters();
    let json = serde_json::to_string(&parameters)?;
    fs::write(path.as_ref(), json)?;
    info!(
        "Saved {} parameters to {}",
        parameters.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read a flat parameter sequence from `path` into `network`.
///
/// # Errors
///
/// I/O and JSON errors, or `ParameterCount` when the stored sequence does not
/// match the network's architecture.
pub fn load_parameters<P: AsRef<Path>>(network: &mut Network, path: P) -> Result<()> {
    let contents = fs::read_to_string(path.as_ref())?;
    let parameters: Vec<f64> = serde_json::from_str(&contents)?;
    network.set_parameters(&parameters)?;
    info!(
        "Loaded {} parameters from {}",
        parameters.len(),
        path.as_ref().display()
    );
    Ok(())
}
