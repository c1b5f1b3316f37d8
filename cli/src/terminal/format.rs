use std::net::IpAddr;
use std::time::Duration;

use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn address_to_detail(address: &IpAddr) -> Detail {
    match address {
        IpAddr::V4(ipv4_addr) => (
            String::from("IPv4"),
            ipv4_addr.to_string().color(colors::IPV4_ADDR),
        ),
        IpAddr::V6(ipv6_addr) => (
            String::from("IPv6"),
            ipv6_addr.to_string().color(colors::IPV6_ADDR),
        ),
    }
}

pub fn open_ports_to_detail(open_ports: &[u16]) -> Detail {
    let value: ColoredString = if open_ports.is_empty() {
        "none".dimmed()
    } else {
        join_ports(open_ports).color(colors::OPEN_PORT).bold()
    };
    (String::from("Open"), value)
}

pub fn probed_to_detail(probed: usize, errors: usize, elapsed: Duration) -> Detail {
    let mut value: String = format!("{probed} ports in {:.2}s", elapsed.as_secs_f64());
    if errors > 0 {
        value.push_str(&format!(", {errors} errors"));
    }
    (String::from("Probed"), value.color(colors::TEXT_DEFAULT))
}

pub fn join_ports(ports: &[u16]) -> String {
    ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
