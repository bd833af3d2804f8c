use crate::config::RosterEntry;
use crate::error::RosterError;
use tracing::{debug, warn};

/// One list entry: an immutable display name plus two independent per-row
/// flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    pub is_favorite: bool,
    pub is_muted: bool,
}

impl User {
    /// Build a record. Returns `None` for an empty name; no further
    /// validation is applied, so whitespace-only names pass.
    pub fn new(name: impl Into<String>, is_favorite: bool, is_muted: bool) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            is_favorite,
            is_muted,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The list store: an owned, ordered sequence of user records.
///
/// Order is display order; duplicates are permitted and no sorting ever
/// occurs. All mutation goes through the index-checked methods below, which
/// fail with [`RosterError::IndexOutOfRange`] on a stale index instead of
/// panicking.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Seed from display names with both flags off, skipping invalid entries.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let users: Vec<User> = names
            .into_iter()
            .filter_map(|name| {
                let user = User::new(name, false, false);
                if user.is_none() {
                    warn!("skipping seed entry with empty name");
                }
                user
            })
            .collect();
        debug!(rows = users.len(), "roster seeded");
        Self { users }
    }

    /// Seed from config entries, carrying the configured flags over and
    /// skipping invalid entries.
    pub fn from_entries(entries: &[RosterEntry]) -> Self {
        let users: Vec<User> = entries
            .iter()
            .filter_map(|entry| {
                let user = User::new(entry.name.clone(), entry.favorite, entry.muted);
                if user.is_none() {
                    warn!("skipping config roster entry with empty name");
                }
                user
            })
            .collect();
        debug!(rows = users.len(), "roster seeded from config");
        Self { users }
    }

    /// Current number of rows.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Display-order iteration, for the widget's full render pass.
    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), RosterError> {
        let len = self.users.len();
        if index < len {
            Ok(())
        } else {
            warn!(index, len, "row index out of range");
            Err(RosterError::IndexOutOfRange { index, len })
        }
    }

    pub fn get(&self, index: usize) -> Result<&User, RosterError> {
        self.check_index(index)?;
        Ok(&self.users[index])
    }

    /// Remove and return the record at `index`. Later records shift left by
    /// one, so indices derived before this call are stale afterwards.
    pub fn remove(&mut self, index: usize) -> Result<User, RosterError> {
        self.check_index(index)?;
        let user = self.users.remove(index);
        debug!(index, name = user.name(), "removed row");
        Ok(user)
    }

    /// Flip the favorite flag at `index` and return the new value.
    pub fn toggle_favorite(&mut self, index: usize) -> Result<bool, RosterError> {
        self.check_index(index)?;
        let user = &mut self.users[index];
        user.is_favorite = !user.is_favorite;
        debug!(index, is_favorite = user.is_favorite, "toggled favorite");
        Ok(user.is_favorite)
    }

    /// Flip the muted flag at `index` and return the new value.
    pub fn toggle_mute(&mut self, index: usize) -> Result<bool, RosterError> {
        self.check_index(index)?;
        let user = &mut self.users[index];
        user.is_muted = !user.is_muted;
        debug!(index, is_muted = user.is_muted, "toggled mute");
        Ok(user.is_muted)
    }
}
