//! Wireless interface and LAN address lookup.
//!
//! Shells out to `iw` and `ip` the same way an operator would, and keeps the
//! output parsing in pure functions so it can be tested without a network.

use std::net::Ipv4Addr;
use std::process::Command;
use std::time::Duration;
use log::{debug, info, warn};

use crate::errors::ShareError;

pub const DEFAULT_ATTEMPTS: u32 = 15;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// First interface name reported by `iw dev`
pub fn parse_iw_interface(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("Interface"))
        .find_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
}

/// First IPv4 address in `ip -4 addr show` output
pub fn parse_inet_addr(output: &str) -> Option<Ipv4Addr> {
    output.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("inet ")?;
        let addr = rest.split(['/', ' ']).next()?;
        addr.parse().ok()
    })
}

fn run(program: &str, args: &[&str]) -> Result<String, ShareError> {
    debug!("Running {} {:?}", program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ShareError::Discovery(format!("failed to run {}: {}", program, e)))?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Name of the active wireless interface
pub fn wifi_interface() -> Result<String, ShareError> {
    let output = run("iw", &["dev"])?;
    parse_iw_interface(&output)
        .ok_or_else(|| ShareError::Discovery("Wi-Fi interface not found".to_string()))
}

/// IPv4 address currently assigned to `iface`, if any
pub fn ipv4_of(iface: &str) -> Result<Option<Ipv4Addr>, ShareError> {
    let output = run("ip", &["-4", "addr", "show", iface])?;
    Ok(parse_inet_addr(&output))
}

/// Poll `lookup` until it yields an address or `attempts` run out
pub async fn retry_ipv4<F>(
    mut lookup: F,
    attempts: u32,
    delay: Duration,
) -> Result<Ipv4Addr, ShareError>
where
    F: FnMut() -> Result<Option<Ipv4Addr>, ShareError>,
{
    for attempt in 1..=attempts {
        if let Some(ip) = lookup()? {
            info!("Resolved IPv4 {} on attempt {}", ip, attempt);
            return Ok(ip);
        }
        if attempt < attempts {
            debug!("No IPv4 yet (attempt {}/{}), retrying", attempt, attempts);
            tokio::time::sleep(delay).await;
        }
    }
    warn!("No IPv4 address after {} attempts", attempts);
    Err(ShareError::Discovery("IP address not available yet".to_string()))
}

/// Wait for `iface` to receive an IPv4 address
pub async fn wait_for_ipv4(iface: &str, attempts: u32, delay: Duration) -> Result<Ipv4Addr, ShareError> {
    retry_ipv4(|| ipv4_of(iface), attempts, delay).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const IW_DEV: &str = "phy#0\n\tUnnamed/non-netdev interface\n\t\twdev 0x2\n\tInterface wlp2s0\n\t\tifindex 3\n\t\ttype managed\n";

    const IP_ADDR: &str = "3: wlp2s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc noqueue state UP group default qlen 1000\n    inet 192.168.43.17/24 brd 192.168.43.255 scope global dynamic noprefixroute wlp2s0\n       valid_lft 3599sec preferred_lft 3599sec\n";

    #[test]
    fn finds_interface_name() {
        assert_eq!(parse_iw_interface(IW_DEV).as_deref(), Some("wlp2s0"));
        assert_eq!(parse_iw_interface("phy#0\n"), None);
    }

    #[test]
    fn finds_ipv4_address() {
        assert_eq!(parse_inet_addr(IP_ADDR), Some(Ipv4Addr::new(192, 168, 43, 17)));
        assert_eq!(parse_inet_addr("3: wlp2s0: <NO-CARRIER> mtu 1500\n"), None);
    }

    #[tokio::test]
    async fn retries_until_address_appears() {
        let mut calls = 0;
        let ip = retry_ipv4(
            || {
                calls += 1;
                Ok((calls == 3).then(|| Ipv4Addr::new(10, 0, 0, 2)))
            },
            5,
            Duration::from_millis(1),
        )
        .await
        .unwrap();
        assert_eq!(ip, Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn gives_up_after_attempts() {
        let mut calls = 0;
        let result = retry_ipv4(
            || {
                calls += 1;
                Ok(None)
            },
            4,
            Duration::from_millis(1),
        )
        .await;
        assert!(matches!(result, Err(ShareError::Discovery(_))));
        assert_eq!(calls, 4);
    }
}
