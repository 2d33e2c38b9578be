//! Project serialization and file conversion.

use crate::postprocess::postprocess;
use pm2soap_collection::CollectionParser;
use pm2soap_core::{ConvertConfig, Error, OutputConfig, Result};
use pm2soap_soapui::{CollectionTranslator, TranslationSummary};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use xmltree::{Element, EmitterConfig};

/// Serialize a project tree to XML text, declaration included, with the
/// post-pass applied.
pub fn render(project: &Element, output: &OutputConfig) -> Result<String> {
    let config = EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(output.indent);

    let mut buffer = Vec::new();
    project
        .write_with_config(&mut buffer, config)
        .map_err(Error::xml)?;
    let serialized = String::from_utf8(buffer).map_err(Error::xml)?;

    Ok(postprocess(&serialized))
}

/// Render a project tree and write it to `path`.
pub fn write_project(path: impl AsRef<Path>, project: &Element, output: &OutputConfig) -> Result<()> {
    let path = path.as_ref();
    let xml = render(project, output)?;
    debug!("Writing {} bytes to {:?}", xml.len(), path);
    fs::write(path, xml)?;
    Ok(())
}

/// Read a Postman collection, translate it, and write the SoapUI project.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConvertConfig,
) -> Result<TranslationSummary> {
    let input = input.as_ref();
    let output = output.as_ref();
    info!("Converting {:?} -> {:?}", input, output);

    let collection = CollectionParser::from_file(input)?.into_collection();
    let translation = CollectionTranslator::new(config.clone()).translate(&collection)?;
    write_project(output, &translation.project, &config.output)?;

    info!(
        "Wrote project '{}' with {} requests to {:?}",
        translation.summary.project_name, translation.summary.requests, output
    );
    Ok(translation.summary)
}
