use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use matcalc_core::EngineConfig;

use crate::service::Response;

/// Read a request body from `path`, or from stdin when `path` is `-`.
pub fn read_request(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    }
    if !path.exists() {
        anyhow::bail!("Request file does not exist: {}", path.display());
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request: {}", path.display()))
}

/// Load engine thresholds from a JSON file. Missing fields keep their defaults.
pub fn load_engine_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: EngineConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Write the response payload followed by a newline to `output`, or stdout.
pub fn write_response(response: &Response, output: Option<&Path>) -> Result<()> {
    let payload = response.to_json();
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            writeln!(file, "{}", payload)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", payload)?;
        }
    }
    Ok(())
}
