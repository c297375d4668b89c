use admin_routes::{codegen::render_registry, RouteConfig};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub fn execute(config: &RouteConfig, out: &Path) -> Result<()> {
    let source = config.module_source()?;
    let rendered = render_registry(&source)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    fs::write(out, rendered).with_context(|| format!("Failed to write registry: {:?}", out))?;

    println!(
        "{} {}",
        "✓ Generated module registry:".green(),
        out.display()
    );
    Ok(())
}
