use admin_routes::{duplicate_names, RouteConfig, RouteDescriptor};
use anyhow::Result;
use colored::Colorize;

pub fn execute(config: &RouteConfig) -> Result<()> {
    println!("{}", "Checking route tables...".green().bold());
    println!();

    let tables = config.build_tables()?;

    let dynamic = report("dynamic", tables.dynamic());
    let basic = report("basic", tables.basic());

    println!();
    if dynamic + basic == 0 {
        println!("{}", "✓ No duplicate route names".green());
    } else {
        // Duplicates are the router's call; report only
        println!(
            "{}",
            format!("⚠ {} duplicate route name(s) found", dynamic + basic).yellow()
        );
    }

    Ok(())
}

fn report(table: &str, routes: &[RouteDescriptor]) -> usize {
    println!("{} table: {} routes", table.cyan(), routes.len());

    let duplicates = duplicate_names(routes);
    for (name, count) in &duplicates {
        println!("  {} `{}` appears {} times", "warning:".yellow(), name, count);
    }

    duplicates.len()
}
