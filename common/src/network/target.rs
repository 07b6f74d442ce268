//! # Sweep Target Model
//!
//! Defines the address inputs a sweep accepts.
//!
//! This module handles parsing and representing targets, which can be:
//! * A single IPv4 host (e.g., `192.168.1.5`).
//! * An IPv4 range (e.g., `192.168.1.1-100`).
//! * A bare subnet prefix (e.g., `192.168.1`), swept as hosts `.1`-`.254`.
//! * A comma-separated list of the above.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::network::range::{IpCollection, Ipv4Range};
use crate::{success, warn};

/// Host suffixes covered when only a three-octet prefix is given.
const PREFIX_FIRST_HOST: u8 = 1;
const PREFIX_LAST_HOST: u8 = 254;

/// Represents a distinct target to be swept.
#[derive(Clone, Debug)]
pub enum Target {
    /// Probe a single specific host.
    Host { target_addr: IpAddr },
    /// Probe a contiguous range of IPv4 addresses.
    Range { ipv4_range: Ipv4Range },
    /// Holds a list of different targets
    Multi { targets: Vec<Target> },
}

impl FromStr for Target {
    type Err = String;

    /// Parses a string into a `Target`.
    ///
    /// Supported formats:
    /// * **Host**: single IPv4 address (e.g., "192.168.1.5").
    /// * **Range**: "Start-End" (e.g., "192.168.1.1-50", "192.168.1.1-192.168.1.50").
    /// * **Prefix**: first three octets (e.g., "192.168.1"), expanded to .1-.254.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            return parse_commas(s);
        }

        if let Some(target) = parse_host(s) {
            return Ok(target);
        }

        if let Some(target) = parse_ip_range(s)? {
            return Ok(target);
        }

        if let Some(target) = parse_subnet_prefix(s) {
            return Ok(target);
        }

        if s.parse::<Ipv6Addr>().is_ok() {
            return Err(format!("IPv6 target not supported: {s}"));
        }

        Err(format!("invalid target: {s}"))
    }
}

/// This prevents code duplication between single-target and multi-target
/// resolution.
fn resolve_target(target: Target, collection: &mut IpCollection) {
    match target {
        Target::Host { target_addr } => {
            collection.add_single(target_addr);
        }
        Target::Range { ipv4_range } => {
            collection.add_range(ipv4_range);
        }
        Target::Multi { targets } => {
            for target in targets {
                resolve_target(target, collection);
            }
        }
    }
}

/// Converts a parsed target into the collection of addresses to sweep.
pub fn to_collection(target: Target) -> IpCollection {
    let mut collection = IpCollection::new();

    resolve_target(target, &mut collection);

    let len: usize = collection.len();
    if len == 0 {
        warn!("target resolved to zero addresses");
        return collection;
    }

    let unit: &str = if len == 1 { "address" } else { "addresses" };
    success!("{len} {unit} queued for the sweep");

    collection
}

/// Parses a comma-separated list of targets (e.g., "192.168.1.5, 10.0.0.1-50").
fn parse_commas(s: &str) -> Result<Target, String> {
    let mut targets = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let target = Target::from_str(part)
            .map_err(|e| format!("failed to parse target '{part}': {e}"))?;

        targets.push(target);
    }

    if targets.is_empty() {
        return Err(format!("no targets in list: {s}"));
    }

    Ok(Target::Multi { targets })
}

/// Parses a single IPv4 address.
fn parse_host(s: &str) -> Option<Target> {
    s.parse::<Ipv4Addr>()
        .ok()
        .map(|addr| Target::Host {
            target_addr: IpAddr::V4(addr),
        })
}

/// Parses a range string like "1.1.1.1-2.2.2.2" or "1.1.1.1-50".
fn parse_ip_range(s: &str) -> Result<Option<Target>, String> {
    let Some((start_str, end_str)) = s.split_once('-') else {
        return Ok(None);
    };

    let start_addr = start_str
        .parse::<Ipv4Addr>()
        .map_err(|e| format!("invalid start IP in range '{start_str}': {e}"))?;

    let end_addr = parse_range_end(end_str, start_addr)?;

    if u32::from(end_addr) < u32::from(start_addr) {
        return Err(format!("range end {end_addr} precedes start {start_addr}"));
    }

    let ipv4_range = Ipv4Range::new(start_addr, end_addr);
    Ok(Some(Target::Range { ipv4_range }))
}

/// Parses the end of a range.
///
/// The end may be a full address or just trailing octets, which are overlaid
/// on the start address ("192.168.1.1-50" ends at 192.168.1.50).
fn parse_range_end(end_str: &str, start_addr: Ipv4Addr) -> Result<Ipv4Addr, String> {
    if let Ok(full_addr) = end_str.parse::<Ipv4Addr>() {
        return Ok(full_addr);
    }

    let tail: Vec<u8> = end_str
        .split('.')
        .map(|octet_str| {
            octet_str
                .parse::<u8>()
                .map_err(|e| format!("invalid range end '{end_str}': {e}"))
        })
        .collect::<Result<Vec<u8>, String>>()?;

    if tail.len() >= 4 {
        return Err(format!("range end '{end_str}' has too many octets"));
    }

    let mut end_octets = start_addr.octets();
    end_octets[4 - tail.len()..].copy_from_slice(&tail);

    Ok(Ipv4Addr::from(end_octets))
}

/// Parses a bare three-octet prefix like "10.11.1" into the conventional
/// host range .1 through .254.
fn parse_subnet_prefix(s: &str) -> Option<Target> {
    let octets: Vec<u8> = s
        .split('.')
        .map(|octet_str| octet_str.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .ok()?;

    if octets.len() != 3 {
        return None;
    }

    let start_addr = Ipv4Addr::new(octets[0], octets[1], octets[2], PREFIX_FIRST_HOST);
    let end_addr = Ipv4Addr::new(octets[0], octets[1], octets[2], PREFIX_LAST_HOST);

    Some(Target::Range {
        ipv4_range: Ipv4Range::new(start_addr, end_addr),
    })
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

    #[test]
    fn test_parse_range_end_helper() {
        let start = Ipv4Addr::new(192, 168, 1, 10);

        // Full IP end
        assert_eq!(
            parse_range_end("192.168.1.50", start),
            Ok(Ipv4Addr::new(192, 168, 1, 50))
        );

        // Partial 1-octet end
        assert_eq!(parse_range_end("50", start), Ok(Ipv4Addr::new(192, 168, 1, 50)));

        // Partial 2-octet end
        assert_eq!(parse_range_end("2.66", start), Ok(Ipv4Addr::new(192, 168, 2, 66)));

        // Partial 3-octet end
        assert_eq!(
            parse_range_end("10.2.1", start),
            Ok(Ipv4Addr::new(192, 10, 2, 1))
        );

        // --- Error Cases ---

        // Invalid octet
        assert!(parse_range_end("2.256", start).is_err());

        // Too many octets
        assert!(parse_range_end("1.2.3.4.5", start).is_err());

        // Empty end
        assert!(parse_range_end("", start).is_err());
    }

    #[test]
    fn test_from_str_full_parsing() {
        // Host
        assert!(matches!(
            Target::from_str("1.1.1.1"),
            Ok(Target::Host { .. })
        ));

        // Full range
        assert!(matches!(
            Target::from_str("10.0.0.1-10.0.0.255"),
            Ok(Target::Range { .. })
        ));

        // Partial range
        assert!(matches!(
            Target::from_str("192.168.1.1-255"),
            Ok(Target::Range { .. })
        ));
        assert!(matches!(
            Target::from_str("192.168.1.1-2.255"),
            Ok(Target::Range { .. })
        ));

        // Subnet prefix
        assert!(matches!(
            Target::from_str("192.168.1"),
            Ok(Target::Range { .. })
        ));

        // Comma list
        assert!(matches!(
            Target::from_str("192.168.1.5, 10.0.0.1-50"),
            Ok(Target::Multi { .. })
        ));

        // Invalid
        assert!(Target::from_str("not-an-ip").is_err());
        assert!(Target::from_str("10.0.0.256-1.1.1.1").is_err());
        assert!(Target::from_str("10.0.0.9-10.0.0.1").is_err());
        assert!(Target::from_str("::1").is_err());
    }

    #[test]
    fn test_prefix_expands_to_conventional_hosts() {
        let Ok(Target::Range { ipv4_range }) = Target::from_str("10.11.1") else {
            panic!("prefix did not parse as a range");
        };

        assert_eq!(ipv4_range.start_addr, Ipv4Addr::new(10, 11, 1, 1));
        assert_eq!(ipv4_range.end_addr, Ipv4Addr::new(10, 11, 1, 254));
        assert_eq!(ipv4_range.len(), 254);
    }

    #[test]
    fn test_to_collection_flattens_multi() {
        let target = Target::from_str("192.168.1.5, 192.168.1.10-12").expect("valid list");
        let collection = to_collection(target);

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.singles.len(), 1);
        assert_eq!(collection.ranges.len(), 1);
    }
}
