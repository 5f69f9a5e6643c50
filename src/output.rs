//! Output rendering for CLI commands

use anyhow::Result;
use ax_snapshot::{AxSnapshot, NodeId, NodeSummary};
use clap::ValueEnum;
use locator_engine::SemanticLocator;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
}

/// Result of a `find` or `first` command
#[derive(Clone, Debug, Serialize)]
pub struct FindReport {
    pub locator: String,
    pub include_hidden: bool,
    pub count: usize,
    pub elements: Vec<NodeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl FindReport {
    pub fn new(
        snapshot: &AxSnapshot,
        locator: &SemanticLocator,
        include_hidden: bool,
        nodes: &[NodeId],
    ) -> Self {
        Self {
            locator: locator.to_string(),
            include_hidden,
            count: nodes.len(),
            elements: nodes.iter().map(|node| snapshot.summary(*node)).collect(),
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(mut self, diagnostic: Option<String>) -> Self {
        self.diagnostic = diagnostic;
        self
    }
}

pub fn render_report(report: &FindReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Human => {
            let mut lines = vec![format!(
                "{} element(s) matching {}",
                report.count, report.locator
            )];
            lines.extend(report.elements.iter().map(describe_element));
            if let Some(diagnostic) = &report.diagnostic {
                lines.push(diagnostic.clone());
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn describe_element(element: &NodeSummary) -> String {
    let mut line = format!("#{}", element.index);
    if let Some(id) = &element.id {
        line.push_str(&format!(" id={id}"));
    }
    line.push_str(&format!(
        " role={} name='{}'",
        element.role.as_deref().unwrap_or("-"),
        element.name
    ));
    if element.hidden {
        line.push_str(" (hidden)");
    }
    line
}

pub fn render_locator(locator: &SemanticLocator, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(locator)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(locator)?),
        OutputFormat::Human => {
            let mut lines = vec![locator.to_string()];
            lines.extend(locator.pre_outer.iter().map(|node| format!("  {node}")));
            for (index, node) in locator.post_outer.iter().enumerate() {
                let prefix = if index == 0 { "outer " } else { "" };
                lines.push(format!("  {prefix}{node}"));
            }
            Ok(lines.join("\n"))
        }
    }
}
