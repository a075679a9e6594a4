//! JSON output for the route command

use marshrut_core::error::Result;

use super::RouteReport;

/// Output in JSON format
pub fn output_route_json(report: &RouteReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
