// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("NOTION_API_SECRET", "NOTION_API_SECRET"),
        ("NF_API_URL", "NF_API_URL"),
        ("NF_CONFIG", "NF_CONFIG"),
        ("NF_LOG", "NF_LOG"),
        ("RUST_LOG", "RUST_LOG"),
        ("NO_COLOR", "NO_COLOR"),
        ("COLOR", "COLOR"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    Ok(())
}
