use anyhow::Result;
use console::style;
use kbkit_core::{agents, scaffold};
use std::path::Path;

pub fn list_agents(root: &Path) -> Result<()> {
    let agents = agents::list_agents(root)?;

    if agents.is_empty() {
        println!("{} No agents found", style("!").yellow());
        println!();
        println!("Scaffold one:");
        println!("  scaffold-agent <agent-name> [description]");
        println!(
            "  (writes {})",
            scaffold::agent_path(Path::new(""), "<agent-name>").display()
        );
        return Ok(());
    }

    println!(
        "{} Agents ({})",
        style("✓").green().bold(),
        agents.len()
    );
    println!();

    for agent in agents {
        println!(
            "  {} — {}",
            style(&agent.name).white().bold(),
            agent.description
        );

        if let Some(model) = &agent.model {
            println!("    Model: {}", style(model).dim());
        }
    }

    Ok(())
}
