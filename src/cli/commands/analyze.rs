//! Analyze command: extract text, run the selected analysis, render results.

use std::path::Path;

use console::style;

use crate::analysis::{AnalysisCategory, AnalysisResult, Analyzer};
use crate::document::UploadedDocument;
use crate::extract::extract;
use crate::llm::{GroqClient, GroqConfig};

use super::spinner;

pub async fn cmd_analyze(file: &Path, category: &str, config: GroqConfig) -> anyhow::Result<()> {
    let category = AnalysisCategory::from_str(category).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown category '{}' (expected one of: {})",
            category,
            AnalysisCategory::all()
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let pb = spinner("Reading document...".to_string());
    let loaded = UploadedDocument::from_path(file).and_then(|doc| {
        let text = extract(&doc)?;
        Ok((doc, text))
    });
    pb.finish_and_clear();

    // Extraction failures halt here; the backend is never called.
    let (document, text) = loaded?;
    println!(
        "{} {} ({}, {} chars)",
        style("✓").green(),
        document.filename,
        document.media_type,
        text.chars().count()
    );

    let client = GroqClient::new(config);
    let analyzer = Analyzer::new(Box::new(client));

    let pb = spinner(format!("Performing {} analysis...", category));
    let results = analyzer.analyze(&text, category).await;
    pb.finish_and_clear();

    render_results(&results);
    Ok(())
}

fn render_results(results: &[AnalysisResult]) {
    for result in results {
        println!("\n{}", style(result.label).cyan().bold());
        println!("{}", "-".repeat(50));
        println!("{}", result.body);
    }
}
