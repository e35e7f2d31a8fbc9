//! Host memory inspection
//!
//! The headroom estimate compares total index size against the physical
//! memory of the machine the tool runs on, so it is only meaningful when
//! that machine is the database host. `is_local_host` makes that call.

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Snapshot of the local host's physical memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostMemory {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f64,
}

/// Read the current physical memory state of the local host.
pub fn inspect() -> HostMemory {
    let mut system = System::new();
    system.refresh_memory();

    let total_bytes = system.total_memory();
    let used_bytes = system.used_memory();
    let used_percent = if total_bytes > 0 {
        (used_bytes as f64 / total_bytes as f64) * 100.0
    } else {
        0.0
    };

    HostMemory {
        total_bytes,
        used_bytes,
        used_percent,
    }
}

/// Whether `host` refers to the machine this process runs on, by name
/// match against `localhost`, loopback, or the local hostname.
pub fn is_local_host(host: &str) -> bool {
    if host == "localhost" || host == "127.0.0.1" || host == "::1" {
        return true;
    }
    match System::host_name() {
        Some(name) => host == name,
        None => false,
    }
}
