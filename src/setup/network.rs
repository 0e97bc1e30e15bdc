use std::net::IpAddr;

use log::warn;

/// One address bound to one host interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub addr: IpAddr,
    /// Set from `if_addrs::Interface::is_loopback`, which judges the address
    /// rather than the interface: a non-127/8 IPv4 address on `lo` is external.
    pub internal: bool,
}

pub trait InterfaceProvider {
    fn interfaces(&self) -> Vec<Interface>;
}

/// Reads the host's real interfaces.
#[derive(Debug, Default)]
pub struct SystemInterfaces;

impl InterfaceProvider for SystemInterfaces {
    fn interfaces(&self) -> Vec<Interface> {
        match if_addrs::get_if_addrs() {
            Ok(ifaces) => ifaces
                .into_iter()
                .map(|iface| Interface {
                    internal: iface.is_loopback(),
                    addr: iface.addr.ip(),
                    name: iface.name,
                })
                .collect(),
            Err(err) => {
                warn!("Could not enumerate network interfaces: {}", err);
                Vec::new()
            }
        }
    }
}

/// Every external IPv4 address, in the order the provider lists them.
pub fn discover_addresses(provider: &dyn InterfaceProvider) -> Vec<String> {
    provider
        .interfaces()
        .into_iter()
        .filter(|iface| !iface.internal)
        .filter_map(|iface| match iface.addr {
            IpAddr::V4(ip) => Some(ip.to_string()),
            IpAddr::V6(_) => None,
        })
        .collect()
}

#[cfg(test)]
pub(crate) struct FakeInterfaces(pub Vec<Interface>);

#[cfg(test)]
impl InterfaceProvider for FakeInterfaces {
    fn interfaces(&self) -> Vec<Interface> {
        self.0.clone()
    }
}

#[cfg(test)]
pub(crate) fn iface(name: &str, addr: &str, internal: bool) -> Interface {
    Interface {
        name: name.to_owned(),
        addr: addr.parse().unwrap(),
        internal,
    }
}

#[test]
fn test_discover_skips_loopback_and_ipv6() {
    let provider = FakeInterfaces(vec![
        iface("lo", "127.0.0.1", true),
        iface("eth0", "192.168.1.5", false),
        iface("eth1", "fe80::1", false),
    ]);

    assert_eq!(discover_addresses(&provider), vec!["192.168.1.5"]);
}

#[test]
fn test_discover_keeps_enumeration_order() {
    let provider = FakeInterfaces(vec![
        iface("wlan0", "10.0.0.7", false),
        iface("lo", "127.0.0.1", true),
        iface("eth0", "192.168.1.5", false),
        iface("docker0", "172.17.0.1", false),
    ]);

    assert_eq!(
        discover_addresses(&provider),
        vec!["10.0.0.7", "192.168.1.5", "172.17.0.1"]
    );
}

#[test]
fn test_discover_nothing_external() {
    let provider = FakeInterfaces(vec![
        iface("lo", "127.0.0.1", true),
        iface("lo", "::1", true),
    ]);

    assert!(discover_addresses(&provider).is_empty());
}

#[test]
fn test_external_address_on_loopback_interface_is_listed() {
    let provider = FakeInterfaces(vec![
        iface("lo", "127.0.0.1", true),
        iface("lo", "10.99.0.1", false),
    ]);

    assert_eq!(discover_addresses(&provider), vec!["10.99.0.1"]);
}

#[test]
fn test_system_interfaces_exclude_loopback() {
    let addresses = discover_addresses(&SystemInterfaces);

    assert!(addresses.iter().all(|a| a != "127.0.0.1"));
}
