use anyhow::Result;
use rollcall_config::AppConfig;
use rollcall_store::Roster;
use serde::Serialize;
use std::io::{self, Write};

pub mod register;
pub mod roster;
pub mod syllabus;

use crate::render::Printer;

pub struct Context<'a> {
    pub roster: &'a Roster,
    pub config: &'a AppConfig,
    pub json: bool,
    pub printer: &'a Printer,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
