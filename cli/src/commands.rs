use std::io::Write;
use std::path::{Path, PathBuf};

use pullroute_core::combat_log::{read_actors, read_events};
use pullroute_core::context::{AppConfigExt, WclCredentials};
use pullroute_core::pipeline::{convert_events, convert_report};
use pullroute_core::storage::{write_export, write_payload};

use crate::CliContext;

/// Overrides accepted by `convert`
#[derive(Debug, Default)]
pub struct ConvertOptions {
    pub url: String,
    pub fight: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub gap_ms: Option<i64>,
    pub output_dir: Option<PathBuf>,
}

pub async fn convert(options: &ConvertOptions, ctx: &CliContext) -> Result<(), String> {
    let credentials = ctx.credentials(
        options.client_id.as_deref(),
        options.client_secret.as_deref(),
    );
    let selector = ctx.fight(options.fight.as_deref())?;
    let gap_ms = ctx.pull_gap_ms(options.gap_ms)?;

    let result = convert_report(&credentials, &options.url, selector, gap_ms)
        .await
        .map_err(|e| e.to_string())?;

    let dir = ctx.output_dir(options.output_dir.as_ref());
    let path = write_export(
        &dir,
        result.report.as_str(),
        result.fight.id,
        &result.conversion.payload,
    )
    .map_err(|e| e.to_string())?;

    print_payload(&result.conversion.payload, Some(&path))
}

pub fn convert_file(
    events_path: &Path,
    actors_path: &Path,
    dungeon: Option<i64>,
    gap_ms: Option<i64>,
    output: Option<&Path>,
    ctx: &CliContext,
) -> Result<(), String> {
    let gap_ms = ctx.pull_gap_ms(gap_ms)?;
    let events = read_events(events_path).map_err(|e| e.to_string())?;
    let actors = read_actors(actors_path).map_err(|e| e.to_string())?;

    let conversion = convert_events(&events, actors, dungeon, gap_ms)
        .map_err(|e| format!("could not identify any pulls: {e}"))?;

    if let Some(path) = output {
        write_payload(path, &conversion.payload).map_err(|e| e.to_string())?;
    }
    print_payload(&conversion.payload, output)
}

fn print_payload(payload: &str, saved_to: Option<&Path>) -> Result<(), String> {
    let mut out = std::io::stdout().lock();
    write_banner(&mut out, payload, saved_to).map_err(|e| e.to_string())
}

fn write_banner(
    out: &mut impl Write,
    payload: &str,
    saved_to: Option<&Path>,
) -> std::io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "MDT IMPORT STRING GENERATED SUCCESSFULLY")?;
    writeln!(out, "{rule}")?;
    if let Some(path) = saved_to {
        writeln!(out, "\nThe import string has been saved to: {}", path.display())?;
    }
    writeln!(out, "\nCOPY THE ENTIRE STRING BELOW AND IMPORT IT INTO MYTHIC DUNGEON TOOL:\n")?;
    writeln!(out, "{payload}")?;
    writeln!(out, "\n{rule}")?;
    out.flush()
}

pub fn show_config(ctx: &CliContext) -> Result<(), String> {
    let config = &ctx.config;
    let path = <pullroute_core::AppConfig as AppConfigExt>::path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let client_id = if config.credentials.client_id.is_empty() {
        "(not set)"
    } else {
        config.credentials.client_id.as_str()
    };
    let output = if config.output_directory.is_empty() {
        "(working directory)"
    } else {
        config.output_directory.as_str()
    };

    println!("{:<16} {}", "Config file", path);
    println!("{:<16} {}", "Client ID", client_id);
    println!("{:<16} {}", "Client secret", config.credentials.masked_secret());
    println!("{:<16} {}ms", "Pull gap", config.pull_gap_ms);
    println!("{:<16} {}", "Default fight", config.default_fight);
    println!("{:<16} {}", "Output", output);
    Ok(())
}

pub fn set_credentials(
    client_id: &str,
    client_secret: &str,
    ctx: &mut CliContext,
) -> Result<(), String> {
    ctx.config.set_credentials(WclCredentials::new(client_id, client_secret));
    ctx.config.save().map_err(|e| e.to_string())?;
    println!("Credentials saved");
    Ok(())
}

pub fn set_gap(ms: i64, ctx: &mut CliContext) -> Result<(), String> {
    ctx.config.set_pull_gap(ms).map_err(|e| e.to_string())?;
    ctx.config.save().map_err(|e| e.to_string())?;
    println!("Pull gap set to {ms}ms");
    Ok(())
}

pub fn set_output(dir: &str, ctx: &mut CliContext) -> Result<(), String> {
    ctx.config.output_directory = dir.to_string();
    ctx.config.save().map_err(|e| e.to_string())?;
    println!("Output directory set to {dir}");
    Ok(())
}
