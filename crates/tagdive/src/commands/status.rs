use std::path::Path;
use tagdive_core::PipelineConfig;

pub fn run(dir: Option<&str>, config: Option<&str>, json_mode: bool) -> anyhow::Result<()> {
    let root = super::resolve_root(dir)?;
    let config = super::load_config(config)?;
    let status = build_status(&root, &config, json_mode)?;
    println!("{}", status);
    Ok(())
}

fn build_status(root: &Path, config: &PipelineConfig, json_mode: bool) -> anyhow::Result<String> {
    let export = tagdive_summary::find_export(root, &config.export_file_name).ok();

    let mut sources = Vec::new();
    for source in &config.tag_sources {
        let resolved = tagdive_chat::resolve_source(root, &source.folder, config)?;
        sources.push((source, resolved));
    }

    if json_mode {
        let report = serde_json::json!({
            "dir": root.display().to_string(),
            "export": export.as_ref().map(|p| p.display().to_string()),
            "tags": sources
                .iter()
                .map(|(source, resolved)| {
                    serde_json::json!({
                        "tag": source.tag,
                        "folder": source.folder,
                        "source": resolved.as_ref().map(|r| r.label()),
                        "files": resolved.as_ref().map(|r| r.len()).unwrap_or(0),
                    })
                })
                .collect::<Vec<_>>(),
        });
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut lines = Vec::new();
    lines.push(format!("Working directory: {}", root.display()));

    match &export {
        Some(path) => lines.push(format!("  OK   export: {}", path.display())),
        None => lines.push(format!("  MISS export: {}", config.export_file_name)),
    }

    for (source, resolved) in &sources {
        match resolved {
            Some(found) => lines.push(format!(
                "  OK   {}: {} ({} files)",
                source.tag,
                found.label(),
                found.len()
            )),
            None => lines.push(format!("  MISS {}: {}", source.tag, source.folder)),
        }
    }

    Ok(lines.join("\n"))
}
