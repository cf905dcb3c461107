use crate::domain::CanonicalContact;
use std::collections::HashMap;

/// Official roster keyed by canonical name.
///
/// Entries live in a vector so candidate iteration follows first-insertion
/// order. A later record with an existing name replaces the stored contact in
/// place and the name is recorded in `duplicate_names`.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    entries: Vec<CanonicalContact>,
    positions: HashMap<String, usize>,
    duplicate_names: Vec<String>,
    skipped_empty_names: usize,
}

impl RosterIndex {
    pub fn build<I>(official: I) -> Self
    where
        I: IntoIterator<Item = CanonicalContact>,
    {
        let mut index = Self::default();
        for contact in official {
            index.insert(contact);
        }
        index
    }

    fn insert(&mut self, contact: CanonicalContact) {
        if !contact.is_indexable() {
            self.skipped_empty_names += 1;
            return;
        }

        match self.positions.get(contact.name()) {
            Some(&pos) => {
                if !self.duplicate_names.iter().any(|name| name == contact.name()) {
                    self.duplicate_names.push(contact.name().to_string());
                }
                self.entries[pos] = contact;
            }
            None => {
                self.positions
                    .insert(contact.name().to_string(), self.entries.len());
                self.entries.push(contact);
            }
        }
    }

    pub fn lookup_exact(&self, name: &str) -> Option<&CanonicalContact> {
        self.positions.get(name).map(|&pos| &self.entries[pos])
    }

    /// Known names in first-insertion order.
    pub fn candidate_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(CanonicalContact::name)
    }

    pub fn contacts(&self) -> &[CanonicalContact] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duplicate_names(&self) -> &[String] {
        &self.duplicate_names
    }

    pub fn skipped_empty_names(&self) -> usize {
        self.skipped_empty_names
    }
}
