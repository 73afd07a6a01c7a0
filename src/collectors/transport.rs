//! Transport signal: locally routed addresses.
//!
//! Discovers which source addresses the host routing table would pick for
//! outbound traffic, by connecting unsent UDP sockets toward well-known
//! anycast resolvers and reading back the chosen local address. No packet is
//! transmitted. Discovery runs under a bounded wait; on timeout the signal
//! degrades to whatever addresses were found so far.

use async_trait::async_trait;
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::debug;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::types::Probe;

/// Signal key for the transport collector.
pub const NAME: &str = "transport";

/// Upper bound on address discovery before partial findings are kept.
const NEGOTIATION_TIMEOUT: Duration = Duration::from_secs(3);

/// `(bind address, probe target)` pairs; one per address family.
const PROBE_TARGETS: &[(&str, &str)] = &[
    ("0.0.0.0:0", "8.8.8.8:53"),
    ("[::]:0", "[2001:4860:4860::8888]:53"),
];

/// Discovers routed local addresses with a bounded wait.
pub struct TransportCollector;

#[async_trait]
impl Collector for TransportCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
        let mut ips: Vec<IpAddr> = Vec::new();

        if timeout(NEGOTIATION_TIMEOUT, gather_routed(&mut ips))
            .await
            .is_err()
        {
            debug!(found = ips.len(), "address discovery timed out, keeping partial findings");
        }

        ips.sort();
        ips.dedup();
        let classified = classify(&ips);

        Ok(Probe::Available(json!({
            "is_supported": true,
            "ip_count": ips.len(),
            "ips": ips.iter().map(IpAddr::to_string).collect::<Vec<_>>(),
            "ip_v4": classified.public_v4.map(|ip| ip.to_string()),
            "ip_v6": classified.v6.map(|ip| ip.to_string()),
            "ip_local": classified.local_v4.map(|ip| ip.to_string()),
        })))
    }
}

async fn gather_routed(ips: &mut Vec<IpAddr>) {
    for &(bind, target) in PROBE_TARGETS {
        let Ok(socket) = UdpSocket::bind(bind).await else {
            continue;
        };
        if socket.connect(target).await.is_err() {
            continue;
        }
        if let Ok(addr) = socket.local_addr() {
            ips.push(addr.ip());
        }
    }
}

struct Classified {
    public_v4: Option<IpAddr>,
    local_v4: Option<IpAddr>,
    v6: Option<IpAddr>,
}

fn classify(ips: &[IpAddr]) -> Classified {
    Classified {
        public_v4: ips
            .iter()
            .copied()
            .find(|ip| matches!(ip, IpAddr::V4(v4) if !is_local_v4(v4) && !v4.is_unspecified())),
        local_v4: ips
            .iter()
            .copied()
            .find(|ip| matches!(ip, IpAddr::V4(v4) if is_local_v4(v4))),
        v6: ips.iter().copied().find(IpAddr::is_ipv6),
    }
}

fn is_local_v4(ip: &Ipv4Addr) -> bool {
    ip.is_private() || ip.is_link_local() || ip.is_loopback()
}
