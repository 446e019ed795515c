use serde::Serialize;
use std::fmt::Write as _;

use madrasa_core::config::I18nConfig;
use madrasa_i18n::{Direction, LocaleRegistry};

/// One row of `madrasa locales`.
#[derive(Debug, Serialize)]
struct LocaleSummary<'a> {
    locale: &'a str,
    direction: Direction,
    keys: usize,
    default: bool,
    pseudo: bool,
}

/// Registered locales with direction and key count.
pub fn locales(
    registry: &LocaleRegistry,
    config: &I18nConfig,
    json: bool,
) -> anyhow::Result<String> {
    let rows: Vec<LocaleSummary> = registry
        .locales()
        .into_iter()
        .map(|locale| LocaleSummary {
            locale,
            direction: Direction::of(locale, config),
            keys: registry.get(locale).map_or(0, |t| t.leaf_count()),
            default: locale == config.default_locale,
            pseudo: config.is_pseudo(locale),
        })
        .collect();

    if json {
        let mut out = serde_json::to_string_pretty(&rows)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for row in &rows {
        let mut tags = Vec::new();
        if row.default {
            tags.push("default");
        }
        if row.pseudo {
            tags.push("pseudo");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        writeln!(
            out,
            "{:<8} {}  {:>5} keys{tags}",
            row.locale, row.direction, row.keys
        )?;
    }
    Ok(out)
}

/// Keys `locale` has not translated relative to `reference`.
pub fn coverage(
    registry: &LocaleRegistry,
    reference: &str,
    locale: &str,
) -> anyhow::Result<String> {
    let report = madrasa_i18n::coverage(registry.load(reference)?, registry.load(locale)?);

    let mut out = String::new();
    writeln!(
        out,
        "{locale}: {}/{} keys of {reference} translated ({:.1}%)",
        report.total - report.missing.len(),
        report.total,
        report.ratio() * 100.0
    )?;
    if !report.missing.is_empty() {
        writeln!(out, "missing:")?;
        for key in &report.missing {
            writeln!(out, "  {key}")?;
        }
    }
    if !report.extra.is_empty() {
        writeln!(out, "not in {reference}:")?;
        for key in &report.extra {
            writeln!(out, "  {key}")?;
        }
    }
    Ok(out)
}
