//! Method Page Demonstration
//!
//! This example loads the bundled method definitions, flattens their
//! parameter trees, and prints one generated markdown page.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use rpcdoc_schemas::{
    documentation::{DocGenerator, ParamRenderer},
    loader::MethodLoader,
    SchemaWalker, Section,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    println!("📚 Method Page Demonstration");
    println!("============================\n");

    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let catalog = MethodLoader::new().load_catalog(&[fixtures])?;
    println!("Loaded {} methods:", catalog.len());
    for doc in catalog.iter() {
        println!("  • {} ({}, {} CU)", doc.method, doc.network_display(), doc.cu);
    }

    // Flattened rows for one request schema
    let doc = catalog
        .get("debug_traceBlockByNumber")
        .ok_or_else(|| anyhow::anyhow!("fixture missing"))?;
    let rows = ParamRenderer::new().render_schema(&SchemaWalker::new(), doc.schema(Section::Request))?;
    println!("\nRequest params of {}:", doc.method);
    for row in &rows {
        println!("  {}{} <{}>", row.indent, row.name, row.type_label);
    }

    println!("\n--- generated page ---\n");
    println!("{}", DocGenerator::new().generate(doc)?);

    println!("✅ Demonstration completed successfully!");
    Ok(())
}
