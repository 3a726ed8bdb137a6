//! Fetch command implementation
//!
//! Reads every parameter under the configured paths and renders them.

use crate::config::Config;
use crate::error::Result;
use crate::services::Fetcher;
use crate::store::ParameterStore;

use std::io::Write;

/// Execute the bulk fetch and write the rendered output
///
/// The renderer is prepared before any remote call so a bad template fails
/// fast, and output is fully rendered before anything is written.
pub fn run_fetch<S: ParameterStore, W: Write>(store: &S, config: &Config, out: &mut W) -> Result<()> {
    let renderer = config.output.renderer()?;

    let params = Fetcher::new(store, config.aws.page_size).fetch_all(&config.paths)?;
    let rendered = renderer.render(&params)?;

    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    Ok(())
}
