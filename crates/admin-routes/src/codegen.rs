// File: src/codegen.rs
// Purpose: Emits a static module registry as Rust source

use crate::fs_source::FsModuleSource;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;

/// Renders a Rust file defining `module_registry()`
///
/// Every module file found by `source` becomes one `with_module` entry, in
/// discovery order, embedding the file with `include_str!`. The result can be
/// written to `OUT_DIR` from a build script and `include!`d.
pub fn render_registry(source: &FsModuleSource) -> Result<String> {
    let entries = source.scan()?;

    let mut out = String::new();
    out.push_str("// @generated by admin-routes codegen. Do not edit.\n\n");
    out.push_str("pub fn module_registry() -> admin_routes::ModuleRegistry {\n");
    out.push_str("    admin_routes::ModuleRegistry::new()");

    for entry in &entries {
        let absolute = fs::canonicalize(&entry.path)
            .with_context(|| format!("Failed to resolve route module: {:?}", entry.path))?;
        let absolute = absolute.to_string_lossy();

        write!(
            out,
            "\n        .with_module({:?}, || admin_routes::parse_module(include_str!({:?})))",
            entry.key, absolute
        )?;
    }

    out.push_str("\n}\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_registry_lists_modules_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let modules = temp_dir.path().join("modules");
        fs::create_dir_all(modules.join("demo")).unwrap();
        fs::write(modules.join("demo/feat.toml"), "").unwrap();
        fs::write(modules.join("about.toml"), "").unwrap();

        let rendered = render_registry(&FsModuleSource::new(&modules)).unwrap();

        let about = rendered.find("\"./modules/about.toml\"").unwrap();
        let feat = rendered.find("\"./modules/demo/feat.toml\"").unwrap();
        assert!(about < feat);
        assert_eq!(rendered.matches(".with_module(").count(), 2);
        assert!(rendered.contains("pub fn module_registry() -> admin_routes::ModuleRegistry {"));
    }

    #[test]
    fn test_rendered_registry_is_valid_rust() {
        let temp_dir = TempDir::new().unwrap();
        // Quotes and backslashes in the path must survive as a string literal
        let modules = temp_dir.path().join("mod\"ules");
        let odd = modules.join("we\\ird");
        fs::create_dir_all(&odd).unwrap();
        fs::write(odd.join("feat.toml"), "").unwrap();

        let rendered = render_registry(&FsModuleSource::new(&modules)).unwrap();
        syn::parse_file(&rendered).unwrap();

        let absolute = fs::canonicalize(odd.join("feat.toml")).unwrap();
        let absolute = absolute.to_string_lossy();
        let literal = format!("{:?}", absolute);
        assert!(rendered.contains(&format!("include_str!({})", literal)));

        let parsed: syn::LitStr = syn::parse_str(&literal).unwrap();
        assert_eq!(parsed.value(), absolute);
    }

    #[test]
    fn test_empty_directory_renders_empty_registry() {
        let temp_dir = TempDir::new().unwrap();
        let rendered = render_registry(&FsModuleSource::new(temp_dir.path())).unwrap();
        assert!(rendered.contains("admin_routes::ModuleRegistry::new()\n}"));
        syn::parse_file(&rendered).unwrap();
    }
}
