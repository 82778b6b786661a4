use crate::commands::syllabus::print_syllabus;
use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::render::Printer;
use anyhow::Result;
use clap::Args;
use crossterm::style::Color;
use rollcall_core::domain::Registration;
use rollcall_core::rules::validate_email;
use rollcall_core::time::now_utc;
use rollcall_core::CoreError;
use rollcall_store::RegisterOutcome;
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal, StdinLock};

#[derive(Debug, Default, Args)]
pub struct RegisterArgs {
    /// Register this address and exit instead of prompting
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
struct RegisterReport<'a> {
    email: &'a str,
    already_registered: bool,
    registered_at: Option<i64>,
    roster_path: String,
}

pub fn register(ctx: &Context<'_>, args: RegisterArgs) -> Result<()> {
    match args.email {
        Some(raw) => register_once(ctx, &raw),
        None => register_interactive(ctx),
    }
}

/// Single non-interactive pass for scripted use: an invalid address is an
/// error here, not a re-prompt.
fn register_once(ctx: &Context<'_>, raw: &str) -> Result<()> {
    let email = validate_email(raw)?;
    let outcome = ctx.roster.register(now_utc(), &email)?;
    let roster_path = ctx.roster.path().display().to_string();
    match outcome {
        RegisterOutcome::Registered(registration) => {
            if ctx.json {
                print_json(&RegisterReport {
                    email: &registration.email,
                    already_registered: false,
                    registered_at: Some(registration.registered_at),
                    roster_path,
                })?;
            } else {
                println!("registered {} ({})", registration.email, roster_path);
            }
        }
        RegisterOutcome::AlreadyRegistered => {
            if ctx.json {
                print_json(&RegisterReport {
                    email: &email,
                    already_registered: true,
                    registered_at: None,
                    roster_path,
                })?;
            } else {
                println!("{email} is already registered");
            }
        }
    }
    Ok(())
}

fn register_interactive(ctx: &Context<'_>) -> Result<()> {
    let p = ctx.printer;
    print_syllabus(p, ctx.config);
    p.blank();

    p.line("  Student Registration", Color::Yellow);
    p.blank();
    p.line(
        "  Please enter your university e-mail address to register",
        Color::Grey,
    );
    p.line("  your attendance and receive course updates.", Color::Grey);
    p.blank();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        p.prompt("  Email > ")?;
        let mut raw = String::new();
        if input.read_line(&mut raw)? == 0 {
            return Err(invalid_input("no email address before end of input"));
        }
        match validate_email(&raw) {
            Err(CoreError::EmptyEmail) => {
                p.line("  Please enter your email address.", Color::Red);
            }
            Err(CoreError::InvalidEmail(value)) => {
                p.line(
                    &format!("  '{value}' does not look like a valid email. Try again."),
                    Color::Red,
                );
            }
            Ok(email) => {
                match ctx.roster.register(now_utc(), &email)? {
                    RegisterOutcome::AlreadyRegistered => {
                        p.blank();
                        p.line(
                            "  This email is already registered — you're all set!",
                            Color::Yellow,
                        );
                    }
                    RegisterOutcome::Registered(registration) => {
                        print_success(p, ctx, &registration);
                    }
                }
                break;
            }
        }
    }

    p.blank();
    p.divider('═', Color::Cyan);
    p.blank();
    wait_for_enter(p, &mut input)?;
    Ok(())
}

fn print_success(p: &Printer, ctx: &Context<'_>, registration: &Registration) {
    p.blank();
    p.divider('─', Color::DarkGreen);
    p.centered("Registration Successful", Color::Green);
    p.divider('─', Color::DarkGreen);
    p.blank();
    p.line(&format!("  Registered: {}", registration.email), Color::White);
    p.line(
        &format!("  Saved to:   {}", ctx.roster.path().display()),
        Color::DarkGrey,
    );
    p.blank();
    p.line("  See you in class!  Good luck this semester.", Color::Yellow);
}

/// Holds the window open when launched from a double-click or bare
/// terminal; skipped entirely for piped input.
fn wait_for_enter(p: &Printer, input: &mut StdinLock<'_>) -> Result<()> {
    if !input.is_terminal() {
        return Ok(());
    }
    p.prompt("  Press Enter to exit...")?;
    let mut scratch = String::new();
    input.read_line(&mut scratch)?;
    Ok(())
}
