pub mod catalog;
pub mod prompt;
pub mod roll;

use br_mechanics::RollReport;

/// Print a finished roll, as JSON or as a rendered message.
fn print_report(report: &RollReport, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        print!("{}", crate::render::render_report(report));
    }
    Ok(())
}
