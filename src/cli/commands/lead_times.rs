use crate::subscription::LeadTime;
use anyhow::Result;
use serde_json::json;

/// Print every selectable lead time
pub fn run_lead_times(as_json: bool) -> Result<()> {
    if as_json {
        let options: Vec<_> = LeadTime::options()
            .map(|t| json!({ "value": t.wire_value(), "label": t.label() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        println!("Available notification lead times:");
        for option in LeadTime::options() {
            println!("  {:>2}  {}", option.minutes(), option.label());
        }
    }
    Ok(())
}
