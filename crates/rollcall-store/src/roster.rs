use crate::error::Result;
use rollcall_core::domain::{normalize_email, Registration};
use rollcall_core::time::{format_timestamp_datetime, parse_local_timestamp};
use rollcall_core::CoreError;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const ROSTER_HEADER: &str = "Timestamp,Email";

/// Outcome of a registration attempt against the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered(Registration),
    AlreadyRegistered,
}

/// The roster is a line-oriented CSV file: a `Timestamp,Email` header
/// followed by one row per registration. The file is created lazily on the
/// first successful append.
#[derive(Debug, Clone)]
pub struct Roster {
    path: PathBuf,
}

impl Roster {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Linear scan for a row whose email field matches case-insensitively.
    /// A missing file means nothing is registered yet; rows with fewer than
    /// two fields never match.
    pub fn is_registered(&self, email: &str) -> Result<bool> {
        let Some(email) = normalize_email(email) else {
            return Ok(false);
        };
        if !self.path.exists() {
            return Ok(false);
        }

        let file = File::open(&self.path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some(field) = line.split(',').nth(1) {
                if field.trim().eq_ignore_ascii_case(&email) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Appends a row for an already-validated address, writing the header
    /// first when the file is new. The file handle is scoped to this call
    /// and released on every exit path.
    pub fn append(&self, now_utc: i64, email: &str) -> Result<Registration> {
        let Some(email) = normalize_email(email) else {
            return Err(CoreError::EmptyEmail.into());
        };

        let existed = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        if !existed {
            writeln!(writer, "{ROSTER_HEADER}")?;
        }
        writeln!(writer, "{},{}", format_timestamp_datetime(now_utc), email)?;
        writer.flush()?;

        Ok(Registration {
            email,
            registered_at: now_utc,
        })
    }

    /// Duplicate check followed by an append. At most one row per distinct
    /// case-insensitive address ends up in the file.
    pub fn register(&self, now_utc: i64, email: &str) -> Result<RegisterOutcome> {
        if self.is_registered(email)? {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }
        let registration = self.append(now_utc, email)?;
        Ok(RegisterOutcome::Registered(registration))
    }

    /// Reads the stored registrations in file order. The header row and any
    /// row that is malformed or carries an unparseable timestamp are skipped.
    pub fn entries(&self) -> Result<Vec<Registration>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let mut entries = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if idx == 0 && line.trim() == ROSTER_HEADER {
                continue;
            }
            let mut fields = line.split(',');
            let (Some(timestamp), Some(email)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Ok(registered_at) = parse_local_timestamp(timestamp) else {
                continue;
            };
            entries.push(Registration {
                email: email.trim().to_string(),
                registered_at,
            });
        }
        Ok(entries)
    }
}
