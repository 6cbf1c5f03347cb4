use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::error::Error;

/// A named backing file that entries are grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageLocation {
    Data1,
    Data3,
    Data4,
    Rc2,
}

impl StorageLocation {
    /// All storage locations in their fixed enumeration order
    pub const ALL: [StorageLocation; 4] = [
        StorageLocation::Data1,
        StorageLocation::Data3,
        StorageLocation::Data4,
        StorageLocation::Rc2,
    ];

    /// The logical name used on the command line and as sheet name
    pub fn name(self) -> &'static str {
        match self {
            StorageLocation::Data1 => "data1",
            StorageLocation::Data3 => "data3",
            StorageLocation::Data4 => "data4",
            StorageLocation::Rc2 => "rc2",
        }
    }

    /// The name of the CSV file backing this location
    pub fn file_name(self) -> &'static str {
        match self {
            StorageLocation::Data1 => "lts_data1.csv",
            StorageLocation::Data3 => "lts_data3.csv",
            StorageLocation::Data4 => "lts_data4.csv",
            StorageLocation::Rc2 => "lts_rc2.csv",
        }
    }

    /// The logical names of all locations, in enumeration order
    pub fn names() -> [&'static str; 4] {
        Self::ALL.map(Self::name)
    }

    /// A comma-separated list of all logical names, for messages
    pub fn choices() -> String {
        Self::names().iter().join(", ")
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StorageLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| Error::UnknownStorage { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, EqualityAssertion, ResultAssertion};

    use super::StorageLocation;

    #[test]
    fn parse_known_names() {
        for l in StorageLocation::ALL {
            assert_that!(l.name().parse::<StorageLocation>()).has_ok(l);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_that!("DATA1".parse::<StorageLocation>()).is_err();
        assert_that!("data2".parse::<StorageLocation>()).is_err();
    }

    #[test]
    fn file_names() {
        assert_that!(StorageLocation::Data1.file_name()).is_equal_to("lts_data1.csv");
        assert_that!(StorageLocation::Rc2.file_name()).is_equal_to("lts_rc2.csv");
    }

    #[test]
    fn unknown_storage_message_lists_choices() {
        let err = "nope".parse::<StorageLocation>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown storage 'nope'. Choose from: data1, data3, data4, rc2"
        );
    }
}
