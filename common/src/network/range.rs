use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Number of addresses the range covers, inclusive on both ends.
    pub fn len(&self) -> usize {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        if end < start {
            return 0;
        }
        (end - start) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_iter(&self) -> impl Iterator<Item = IpAddr> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(|ip| IpAddr::V4(Ipv4Addr::from(ip)))
    }
}

/// Every address a sweep should visit, kept as the user supplied it:
/// individual hosts next to contiguous ranges.
#[derive(Debug, Clone, Default)]
pub struct IpCollection {
    pub singles: Vec<IpAddr>,
    pub ranges: Vec<Ipv4Range>,
}

impl IpCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_single(&mut self, addr: IpAddr) {
        self.singles.push(addr);
    }

    pub fn add_range(&mut self, range: Ipv4Range) {
        self.ranges.push(range);
    }

    /// Total address count, counting ranges at full width.
    pub fn len(&self) -> usize {
        let ranged: usize = self.ranges.iter().map(Ipv4Range::len).sum();
        self.singles.len() + ranged
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens singles and ranges into one address stream.
    pub fn iter_addrs(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.singles
            .iter()
            .copied()
            .chain(self.ranges.iter().flat_map(Ipv4Range::to_iter))
    }
}
