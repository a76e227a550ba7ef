//! Check command: report completion backend status.

use console::style;

use crate::llm::{GroqClient, GroqConfig};

pub fn cmd_check(config: GroqConfig) -> anyhow::Result<()> {
    let client = GroqClient::new(config);

    println!("\n{}", style("Completion Backend Status").bold());
    println!("{}", "-".repeat(50));

    let status = if client.is_available() {
        style("✓ credential set").green()
    } else {
        style("✗ credential not set").red()
    };
    println!("  {:<13} {}", "GROQ_API_KEY", status);
    if !client.is_available() {
        println!("                {}", style(client.availability_hint()).dim());
    }

    println!("  {:<13} {}", "model", client.config().model);
    println!("  {:<13} {}", "endpoint", client.config().endpoint);
    println!("  {:<13} {}", "temperature", client.config().temperature);

    Ok(())
}
