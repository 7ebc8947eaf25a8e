//! Render a mesh memberlist export into a DNS zonefile.
//!
//! Reads the export as JSON, flattens it into A, CNAME and TXT records and
//! feeds those through a handlebars template.

pub mod config;
pub mod error;
pub mod input;
pub mod zone;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use crate::config::Config;
use crate::error::ZonefileError;
use crate::zone::builder::ZonefileBuilder;
use crate::zone::render::HandlebarsRenderer;

/// Run one conversion. `args` excludes the program name.
pub fn run(args: Vec<OsString>) -> Result<(), ZonefileError> {
    let template_path = match <[OsString; 1]>::try_from(args) {
        Ok([path]) => PathBuf::from(path),
        Err(_) => return Err(ZonefileError::Usage),
    };

    let config = Config::from_env().map_err(ZonefileError::Config)?;
    tracing::debug!(?config, "Loaded config");

    let builder = ZonefileBuilder::new(HandlebarsRenderer::new(&config.render))
        .with_aggregate_name(config.records.aggregate_name.as_str());

    let mut rendered = builder.build(&template_path, std::io::stdin().lock())?;
    if config.render.trailing_newline {
        rendered.push('\n');
    }

    // Render fully before writing so a failure leaves stdout empty
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(ZonefileError::Output)?;

    tracing::info!(template = %template_path.display(), bytes = rendered.len(), "Wrote zonefile");
    Ok(())
}
