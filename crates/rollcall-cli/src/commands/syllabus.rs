use crate::commands::{print_json, Context};
use crate::render::Printer;
use anyhow::Result;
use crossterm::style::Color;
use rollcall_config::AppConfig;

pub fn show(ctx: &Context<'_>) -> Result<()> {
    if ctx.json {
        return print_json(ctx.config);
    }
    print_syllabus(ctx.printer, ctx.config);
    Ok(())
}

/// The framed course banner, welcome paragraph, lab schedule, and
/// assessment breakdown.
pub fn print_syllabus(p: &Printer, config: &AppConfig) {
    p.divider('═', Color::Cyan);
    p.blank();
    p.centered(
        &format!("{}  ·  {}", config.course.code, config.course.title),
        Color::Cyan,
    );
    p.centered(&config.course.subtitle, Color::White);
    p.blank();
    p.divider('═', Color::Cyan);
    p.blank();

    p.line(&format!("  Welcome to {}!", config.course.code), Color::Yellow);
    p.blank();
    for line in &config.course.welcome {
        p.line(&format!("  {line}"), Color::Grey);
    }
    p.blank();
    p.divider('─', Color::DarkGrey);
    p.blank();

    p.line("  Lab Schedule Overview", Color::Yellow);
    p.blank();
    for lab in &config.labs {
        p.field(&format!("    Lab {:2}  ", lab.no), &lab.topic);
    }
    p.blank();
    p.divider('─', Color::DarkGrey);
    p.blank();

    p.line("  Assessment Breakdown", Color::Yellow);
    p.blank();
    for item in &config.assessment {
        p.field(
            &format!("    {:<14} ", item.name),
            &format!("{} %", item.weight_pct),
        );
    }
    p.blank();
    p.divider('─', Color::DarkGrey);
}
