use anyhow::Result;
use clap::Parser;
use console::style;
use kbkit_core::scaffold::{Scaffolder, USAGE};

#[derive(Parser)]
#[command(name = "scaffold-agent")]
#[command(about = "Scaffold an opencode agent definition in .opencode/agents", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Agent name; the file is written to .opencode/agents/<name>.md
    #[arg(allow_hyphen_values = true)]
    name: Option<String>,

    /// Role description (defaults to "Custom agent")
    #[arg(allow_hyphen_values = true)]
    description: Option<String>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    kbkit_cli::init_tracing(0);

    let Some(name) = args.name.filter(|name| !name.is_empty()) else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    if !args.extra.is_empty() {
        tracing::debug!(ignored = ?args.extra, "Ignoring extra arguments");
    }

    let cwd = std::env::current_dir()?;
    let path = Scaffolder::in_dir(&cwd).scaffold(&name, args.description.as_deref())?;
    let shown = path.strip_prefix(&cwd).unwrap_or(&path);

    println!(
        "{} Agent scaffolded at {}",
        style("✅").green(),
        shown.display()
    );

    Ok(())
}
