use crate::TableKind;
use admin_routes::RouteConfig;
use anyhow::Result;
use serde_json::Value;

pub fn execute(config: &RouteConfig, table: TableKind, pretty: bool) -> Result<()> {
    let tables = config.build_tables()?;

    let value = match table {
        TableKind::Dynamic => serde_json::to_value(tables.dynamic())?,
        TableKind::Basic => serde_json::to_value(tables.basic())?,
        TableKind::All => serde_json::to_value(&tables)?,
    };

    println!("{}", render(&value, pretty)?);
    Ok(())
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
