//! Validate command

use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_count, Status};
use muralmap_core::error::exit_codes;
use muralmap_core::validation::validate_catalog;

pub fn run(ctx: &Context) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.validate");

    let result = validate_catalog(&ctx.catalog);
    let code = if result.is_valid() {
        SUCCESS
    } else {
        exit_codes::VALIDATION_ERROR as u8
    };

    if ctx.json {
        print_json(&serde_json::json!({
            "valid": result.is_valid(),
            "murals": ctx.catalog.len(),
            "errors": result.errors(),
            "warnings": result.warnings(),
        }))?;
        return Ok(code);
    }

    Status::header("Catalog validation");
    for error in result.errors() {
        Status::error(&describe(error, &ctx.catalog));
    }
    for warning in result.warnings() {
        Status::warning(&describe(warning, &ctx.catalog));
    }

    println!();
    if result.is_valid() {
        Status::success(&format!(
            "{} checked, {}",
            format_count(ctx.catalog.len(), "mural", "murals"),
            format_count(result.warnings().len(), "warning", "warnings")
        ));
    } else {
        Status::error(&format!(
            "{} checked, {}",
            format_count(ctx.catalog.len(), "mural", "murals"),
            format_count(result.errors().len(), "error", "errors")
        ));
    }

    Ok(code)
}

fn describe(issue: &muralmap_core::validation::ValidationError, catalog: &muralmap_core::Catalog) -> String {
    let name = issue
        .record
        .and_then(|index| catalog.get(index))
        .map(|record| record.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("(unnamed)");

    match &issue.actual {
        Some(actual) => format!("{} [{}]: {} (got \"{}\")", name, issue.field, issue.message, actual),
        None => format!("{} [{}]: {}", name, issue.field, issue.message),
    }
}
