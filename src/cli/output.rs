//! Output formatting utilities
//!
//! Renders a parameter set in the built-in formats or through a template.
//! Everything is rendered to a string first; callers write it out only
//! once rendering has succeeded.

use crate::cli::args::OutputFormat;
use crate::domain::ParameterSet;
use crate::error::RenderError;
use crate::template::Template;
use serde::Serialize;

/// One entry of an ECS container definition's `environment` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EcsEntry<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Wrapper consumed by Terraform's external data source
#[derive(Debug, Clone, Serialize)]
pub struct TerraformEcs {
    #[serde(rename = "JSONString")]
    pub json_string: String,
}

/// How the fetched parameters should be rendered
#[derive(Debug, Clone)]
pub enum Renderer {
    /// One of the built-in formats
    Format(OutputFormat),
    /// A user-supplied template
    Template(Template),
}

impl Renderer {
    /// Render the parameter set
    pub fn render(&self, params: &ParameterSet) -> Result<String, RenderError> {
        match self {
            Renderer::Format(format) => render(params, *format),
            Renderer::Template(template) => Ok(template.render(params)),
        }
    }
}

/// Render a parameter set in a built-in format
pub fn render(params: &ParameterSet, format: OutputFormat) -> Result<String, RenderError> {
    let output = match format {
        OutputFormat::Json => to_json(params)?,
        OutputFormat::Shell => to_shell(params),
        OutputFormat::Text => to_text(params),
        OutputFormat::Ecs => to_ecs(params)?,
        OutputFormat::TerraformEcs => to_terraform_ecs(params)?,
    };
    Ok(output)
}

fn to_json(params: &ParameterSet) -> Result<String, RenderError> {
    Ok(format!("{}\n", serde_json::to_string_pretty(params)?))
}

fn to_shell(params: &ParameterSet) -> String {
    params
        .iter()
        .map(|(key, value)| format!("export {}=\"{}\"\n", key, value))
        .collect()
}

fn to_text(params: &ParameterSet) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

/// ECS entries sorted by name
pub fn ecs_entries(params: &ParameterSet) -> Vec<EcsEntry<'_>> {
    let mut entries: Vec<EcsEntry<'_>> = params
        .iter()
        .map(|(name, value)| EcsEntry { name, value })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(b.name));
    entries
}

fn to_ecs(params: &ParameterSet) -> Result<String, RenderError> {
    Ok(format!(
        "{}\n",
        serde_json::to_string_pretty(&ecs_entries(params))?
    ))
}

fn to_terraform_ecs(params: &ParameterSet) -> Result<String, RenderError> {
    let wrapper = TerraformEcs {
        json_string: serde_json::to_string(&ecs_entries(params))?,
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&wrapper)?))
}
