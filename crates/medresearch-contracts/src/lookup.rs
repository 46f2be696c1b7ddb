//! By-id lookup results.
//!
//! Records reference each other by bare string ids with no integrity checks,
//! so every lookup can miss. A miss is a `Lookup::Missing` value the caller
//! matches on.

/// Outcome of looking up a record by id.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    Missing { id: &'a str },
}

impl<'a, T> Lookup<'a, T> {
    /// Search `records` for the first one whose key equals `id`.
    pub fn find_by<F>(records: &'a [T], id: &'a str, key: F) -> Self
    where
        F: Fn(&T) -> &str,
    {
        match records.iter().find(|r| key(r) == id) {
            Some(record) => Lookup::Found(record),
            None => Lookup::Missing { id },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<&'a T> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::Missing { .. } => None,
        }
    }
}
