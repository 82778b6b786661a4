use crate::commands::{print_json, Context};
use anyhow::Result;
use rollcall_core::time::format_timestamp_datetime;

pub fn list(ctx: &Context<'_>) -> Result<()> {
    let entries = ctx.roster.entries()?;
    if ctx.json {
        return print_json(&entries);
    }
    for entry in &entries {
        println!(
            "{}  {}",
            format_timestamp_datetime(entry.registered_at),
            entry.email
        );
    }
    Ok(())
}
