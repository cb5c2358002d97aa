//! Human-readable status dump.
//!
//! Captures everything an operator needs to answer "why did (or didn't)
//! the amplifier switch?": how fresh each collaborator's data is, the
//! canonical snapshot, what the transition function wants right now, and
//! the full history ring with the write cursor marked.
//!
//! Only read locks are taken; rendering has no side effects.

use core::fmt::{self, Write};

use crate::history::HistoryRing;
use crate::policy;
use crate::snapshot::{Snapshot, Timestamp};
use crate::store::{LastContact, StateStore};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Point-in-time copy of the store, ready to render.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub now: Timestamp,
    pub last_contact: LastContact,
    pub current: Snapshot,
    pub next: Snapshot,
    pub history: HistoryRing,
}

impl StatusReport {
    /// Copy the store's state and recompute the desired snapshot at `now`.
    pub fn capture(store: &StateStore, now: Timestamp) -> Self {
        let (current, last_contact) = store.observed();
        Self {
            now,
            last_contact,
            current,
            next: policy::desired(&current, &now),
            history: store.history(),
        }
    }

    /// Render as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, w: &mut impl Write) -> fmt::Result {
        for (source, last) in &self.last_contact {
            let age = (self.now - *last).num_seconds();
            writeln!(
                w,
                "last contact with {:?}: {} ({}s ago)",
                source,
                last.format(TIME_FORMAT),
                age
            )?;
        }
        writeln!(w, "current: {:?}", self.current)?;
        writeln!(w, "next: {:?}", self.next)?;
        writeln!(w)?;

        let cursor = self.history.cursor();
        for (i, slot) in self.history.slots() {
            let arrow = if i == cursor { "--> " } else { "" };
            match slot {
                Some(s) => {
                    let ts = s
                        .timestamp
                        .map_or_else(|| "-".to_owned(), |t| t.format(TIME_FORMAT).to_string());
                    writeln!(
                        w,
                        "{}{:02}: {} amp: {}, source: {:?}",
                        arrow,
                        i,
                        ts,
                        s.amp_powered,
                        s.amp_source.wire_code()
                    )?;
                }
                None => writeln!(w, "{}{:02}: (empty)", arrow, i)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
