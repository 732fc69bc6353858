use crate::ConvertError;
use csv::StringRecord;
use std::fmt;

const ASSIGNMENT: usize = 1;
const ORGANIZATION: usize = 2;

/// Borrowed projection of one row of an OUI registry export
///
/// Registry exports carry `Registry,Assignment,Organization Name,...`. Only
/// the assignment and organization columns are kept, addressed by position,
/// so a reordered export is projected without complaint.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OuiRecord<'a> {
    assignment: &'a str,
    organization: &'a str,
}

impl<'a> OuiRecord<'a> {
    pub fn new(assignment: &'a str, organization: &'a str) -> Self {
        Self {
            assignment,
            organization,
        }
    }

    pub fn assignment(&self) -> &'a str {
        self.assignment
    }

    pub fn organization(&self) -> &'a str {
        self.organization
    }
}

impl<'a> TryFrom<&'a StringRecord> for OuiRecord<'a> {
    type Error = ConvertError;

    fn try_from(record: &'a StringRecord) -> Result<Self, Self::Error> {
        match (record.get(ASSIGNMENT), record.get(ORGANIZATION)) {
            (Some(assignment), Some(organization)) => Ok(Self::new(assignment, organization)),
            _ => Err(ConvertError::ShortRecord {
                line: record.position().map_or(0, |p| p.line()),
                len: record.len(),
            }),
        }
    }
}

/// Fields are written as parsed, without re-quoting
impl fmt::Display for OuiRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.assignment, self.organization)
    }
}
