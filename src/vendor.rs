use crate::{OuiRecord, VendorDbError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Name reported for MAC addresses with no known assignment
pub const UNKNOWN_VENDOR: &str = "Unknown";

const ASSIGNMENT_LEN: usize = 6;

/// Vendor names keyed by their 6 hex digit assignment
///
/// Loaded from the `assignment,organization` lines produced by
/// [convert](crate::convert).
#[derive(Debug, Default)]
pub struct VendorDb {
    vendors: HashMap<String, String>,
}

impl VendorDb {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VendorDbError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses converted lines. The assignment is taken by position rather
    /// than by splitting, since organization names are not quoted.
    pub fn from_reader<R: BufRead>(rdr: R) -> Result<Self, VendorDbError> {
        let mut db = VendorDb::default();

        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let (assignment, name) = match (
                line.get(..ASSIGNMENT_LEN),
                line.get(ASSIGNMENT_LEN + 1..),
            ) {
                (Some(a), Some(n)) => (a, n),
                _ => return Err(VendorDbError::MalformedLine(i + 1)),
            };

            db.vendors.insert(assignment.to_uppercase(), name.to_string());
        }

        Ok(db)
    }

    pub fn lookup(&self, mac: &str) -> Option<&str> {
        let prefix = mac_prefix(mac)?;
        self.vendors.get(&prefix).map(String::as_str)
    }

    pub fn vendor_or_unknown(&self, mac: &str) -> &str {
        self.lookup(mac).unwrap_or(UNKNOWN_VENDOR)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

impl<'a> FromIterator<OuiRecord<'a>> for VendorDb {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = OuiRecord<'a>>,
    {
        let vendors = iter
            .into_iter()
            .map(|r| (r.assignment().to_uppercase(), r.organization().to_string()))
            .collect();
        VendorDb { vendors }
    }
}

/// Assignment part of a MAC address, e.g. `5c:51:4f:..` gives `5C514F`
pub fn mac_prefix(mac: &str) -> Option<String> {
    // Three octets with their two separators
    let head = mac.get(..8)?;
    Some(head.replace(':', "").to_uppercase())
}
