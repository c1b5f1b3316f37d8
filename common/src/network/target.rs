//! # Host Targets
//!
//! A sweep is driven by a list of user supplied hosts. Each entry is either a
//! literal address (`192.168.1.5`, `::1`) or a name that still needs a lookup
//! (`example.com`). Nothing is resolved here; this module only trims and
//! splits the raw input. Malformed names are left for the resolver to reject.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::TargetError;

/// A single host as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostTarget(String);

impl HostTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the address directly when the target is already a literal.
    pub fn as_literal(&self) -> Option<IpAddr> {
        self.0.parse::<IpAddr>().ok()
    }
}

impl FromStr for HostTarget {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TargetError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for HostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of hosts, in the order they were given.
///
/// Duplicates are preserved: `a,a` scans `a` twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostList(Vec<HostTarget>);

impl HostList {
    pub fn iter(&self) -> std::slice::Iter<'_, HostTarget> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a HostList {
    type Item = &'a HostTarget;
    type IntoIter = std::slice::Iter<'a, HostTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for HostList {
    type Err = TargetError;

    /// Parses a comma-separated list (e.g. `"10.0.0.1, example.com,::1"`).
    ///
    /// Blank entries between commas are skipped; an input with no host at all
    /// is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hosts = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(HostTarget::from_str)
            .collect::<Result<Vec<HostTarget>, TargetError>>()?;

        if hosts.is_empty() {
            return Err(TargetError::NoHosts);
        }

        Ok(Self(hosts))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn names(list: &HostList) -> Vec<&str> {
        list.iter().map(HostTarget::as_str).collect()
    }

    #[test]
    fn host_list_keeps_order_and_trims() {
        let list: HostList = " 10.0.0.1 ,example.com,  ::1".parse().unwrap();
        assert_eq!(names(&list), vec!["10.0.0.1", "example.com", "::1"]);
    }

    #[test]
    fn host_list_skips_blank_entries_and_keeps_duplicates() {
        let list: HostList = "a.test,, ,a.test,".parse().unwrap();
        assert_eq!(names(&list), vec!["a.test", "a.test"]);
    }

    #[test]
    fn host_list_rejects_empty_input() {
        assert_eq!("".parse::<HostList>(), Err(TargetError::NoHosts));
        assert_eq!(" , ,".parse::<HostList>(), Err(TargetError::NoHosts));
    }

    #[test]
    fn malformed_entry_does_not_reject_the_rest_of_the_list() {
        let list: HostList = "127.0.0.1,bad host,localhost".parse().unwrap();
        assert_eq!(names(&list), vec!["127.0.0.1", "bad host", "localhost"]);
        assert_eq!("   ".parse::<HostTarget>(), Err(TargetError::Empty));
    }

    #[test]
    fn as_literal_only_matches_ip_addresses() {
        let literal: HostTarget = "127.0.0.1".parse().unwrap();
        let name: HostTarget = "localhost".parse().unwrap();

        assert_eq!(
            literal.as_literal(),
            Some(IpAddr::V4(Ipv4Addr::LOCALHOST))
        );
        assert_eq!(name.as_literal(), None);
    }
}
