use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use madrasa_i18n::resource::{validate_dir, write_resource};

/// Printable report plus whether the run should fail.
pub struct ValidateOutcome {
    pub report: String,
    pub failed: bool,
}

/// Check every resource in `dir`. Duplicate keys fail the run unless `fix`
/// rewrites the file with the first occurrence of each key.
pub fn validate(dir: &Path, fix: bool) -> anyhow::Result<ValidateOutcome> {
    let reports = validate_dir(dir)?;
    let mut out = String::new();
    let mut failed = false;

    if reports.is_empty() {
        writeln!(out, "no locale resources in {}", dir.display())?;
        return Ok(ValidateOutcome {
            report: out,
            failed: true,
        });
    }

    for report in &reports {
        let name = report.path.display();
        match &report.result {
            Err(e) => {
                failed = true;
                writeln!(out, "FAIL {name}: {e}")?;
            }
            Ok(parsed) if parsed.duplicates.is_empty() => {
                writeln!(out, "ok   {name} ({} keys)", parsed.table.leaf_count())?;
            }
            Ok(parsed) => {
                let paths: Vec<&str> = parsed.duplicates.iter().map(|d| d.path.as_str()).collect();
                if fix {
                    write_resource(&report.path, &parsed.table)?;
                    info!("rewrote {name} without {} duplicate keys", paths.len());
                    writeln!(out, "FIX  {name}: dropped {}", paths.join(", "))?;
                } else {
                    failed = true;
                    writeln!(out, "DUP  {name}: {}", paths.join(", "))?;
                }
            }
        }
    }

    Ok(ValidateOutcome {
        report: out,
        failed,
    })
}
