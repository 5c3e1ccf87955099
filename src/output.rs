//! Output formatting for definitions, entities and validation reports

use crate::error::{Error, Result};
use crate::template::{Definition, ValidationReport};
use crate::types::Entity;
use console::style;
use serde::{Deserialize, Serialize};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

/// Output formatter trait
pub trait OutputFormatter: Send + Sync {
    /// Get format name
    fn name(&self) -> &str;

    /// Format a list of definitions
    fn definitions(&self, defs: &[&Definition]) -> Result<String>;

    /// Format a single definition
    fn definition(&self, def: &Definition) -> Result<String>;

    /// Format a validation report
    fn report(&self, report: &ValidationReport) -> Result<String>;

    /// Format a list of entities
    fn entities(&self, entities: &[Entity]) -> Result<String>;
}

/// Build the formatter for a format
pub fn formatter_for(format: OutputFormat, color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Plain text formatter
#[derive(Debug)]
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(
        &self,
        text: &str,
        f: fn(console::StyledObject<&str>) -> console::StyledObject<&str>,
    ) -> String {
        if self.color {
            f(style(text)).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn definitions(&self, defs: &[&Definition]) -> Result<String> {
        let width = defs.iter().map(|d| d.key().len()).max().unwrap_or(0);
        let lines: Vec<String> = defs
            .iter()
            .map(|d| {
                let key = format!("{:width$}", d.key(), width = width);
                format!(
                    "{}  {:12} {}",
                    self.paint(&key, |s| s.bold()),
                    d.api.as_str(),
                    d.usage()
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn definition(&self, def: &Definition) -> Result<String> {
        let list = |params: &[String]| {
            if params.is_empty() {
                "-".to_string()
            } else {
                params.join(", ")
            }
        };
        let lines = [
            self.paint(&def.key(), |s| s.bold()),
            format!("  action:   {}", def.action),
            format!("  entity:   {}", def.entity),
            format!("  api:      {}", def.api),
            format!("  required: {}", list(&def.required_params)),
            format!("  extra:    {}", list(&def.extra_params)),
            format!("  usage:    {}", def.usage()),
        ];
        Ok(lines.join("\n"))
    }

    fn report(&self, report: &ValidationReport) -> Result<String> {
        if report.is_valid() {
            let mark = self.paint("✓", |s| s.green().bold());
            return Ok(format!("{} {}", mark, report.key));
        }

        let mark = self.paint("✗", |s| s.red().bold());
        let mut lines = vec![format!("{} {}", mark, report.key)];
        for name in &report.missing {
            lines.push(format!(
                "  {} missing required parameter '{}'",
                self.paint("error:", |s| s.red()),
                name
            ));
        }
        for name in &report.unrecognized {
            lines.push(format!(
                "  {} unrecognized parameter '{}'",
                self.paint("error:", |s| s.red()),
                name
            ));
        }
        Ok(lines.join("\n"))
    }

    fn entities(&self, entities: &[Entity]) -> Result<String> {
        Ok(entities
            .iter()
            .map(Entity::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// JSON output formatter
#[derive(Debug)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value).map_err(|e| Error::Serialization(e.to_string()))
        } else {
            serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn definitions(&self, defs: &[&Definition]) -> Result<String> {
        self.render(defs)
    }

    fn definition(&self, def: &Definition) -> Result<String> {
        self.render(def)
    }

    fn report(&self, report: &ValidationReport) -> Result<String> {
        self.render(report)
    }

    fn entities(&self, entities: &[Entity]) -> Result<String> {
        self.render(entities)
    }
}

/// YAML output formatter
#[derive(Debug)]
pub struct YamlFormatter;

impl YamlFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_yaml::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl OutputFormatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn definitions(&self, defs: &[&Definition]) -> Result<String> {
        Self::render(defs)
    }

    fn definition(&self, def: &Definition) -> Result<String> {
        Self::render(def)
    }

    fn report(&self, report: &ValidationReport) -> Result<String> {
        Self::render(report)
    }

    fn entities(&self, entities: &[Entity]) -> Result<String> {
        Self::render(entities)
    }
}
