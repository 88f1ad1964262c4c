//! Workflows de ejemplo con los que arranca el almacén por defecto.
use serde_json::json;

use crate::model::{Step, Workflow};

pub fn sample_workflows() -> Vec<Workflow> {
    vec![Workflow { id: "1".into(),
                    name: "Research Assistant".into(),
                    description: "Helps with in-depth research on various topics".into(),
                    steps: vec![Step::new("1-1", "ai-step", "Research Query", "Process the research query").with_param("model", "default"),
                                Step::new("1-2", "web-search", "Web Search", "Search the web for information").with_param("sources", json!(["academic", "news"])),
                                Step::new("1-3", "formatting", "Format Results", "Format the research results").with_param("format", "detailed"),] },
         Workflow { id: "2".into(),
                    name: "Content Generator".into(),
                    description: "Generates various types of content".into(),
                    steps: vec![Step::new("2-1", "input-field", "Content Brief", "Get content requirements").with_param("required", true),
                                Step::new("2-2", "ai-step", "Generate Content", "Create content based on brief").with_param("creativity", 0.7),] },
         Workflow { id: "3".into(),
                    name: "Data Analyzer".into(),
                    description: "Analyzes data and provides insights".into(),
                    steps: vec![Step::new("3-1", "upload-resource", "Upload Data", "Upload data for analysis").with_param("fileTypes", json!(["csv", "json", "xlsx"])),
                                Step::new("3-2", "data-executive", "Analyze Data", "Process and analyze the data").with_param("depth", "comprehensive"),
                                Step::new("3-3", "formatting", "Format Insights", "Format the analysis results").with_param("format", "visual"),] },]
}
