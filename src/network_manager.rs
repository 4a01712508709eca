// SPDX-License-Identifier: GPL-3.0-only

//! NetworkManager D-Bus integration for the status bar
//!
//! Reads NetworkManager's global state over the system bus, which works in
//! both native and flatpak environments (with appropriate D-Bus permissions).

use tracing::debug;

/// `NM_STATE_CONNECTED_LOCAL`: the lowest state with a usable link
pub const NM_STATE_CONNECTED_LOCAL: u32 = 50;

/// Whether a raw `NMState` value means the station is on the LAN
pub fn is_lan_state(state: u32) -> bool {
    state >= NM_STATE_CONNECTED_LOCAL
}

/// Reusable handle on NetworkManager's root object
///
/// Holds one system bus connection for the life of the monitor. Drop it
/// after an error and [`NetworkMonitor::connect`] again.
#[derive(Debug, Clone)]
pub struct NetworkMonitor {
    proxy: zbus::Proxy<'static>,
}

impl NetworkMonitor {
    /// Connect to the system bus and bind the NetworkManager proxy
    pub async fn connect() -> Result<Self, String> {
        let connection = zbus::Connection::system()
            .await
            .map_err(|e| format!("Failed to connect to system D-Bus: {}", e))?;

        let proxy = zbus::Proxy::new(
            &connection,
            "org.freedesktop.NetworkManager",
            "/org/freedesktop/NetworkManager",
            "org.freedesktop.NetworkManager",
        )
        .await
        .map_err(|e| format!("Failed to create NetworkManager proxy: {}", e))?;

        Ok(Self { proxy })
    }

    /// Whether the host has local, site or global connectivity
    pub async fn is_lan(&self) -> Result<bool, String> {
        let state = self.state().await?;
        debug!(state, "NetworkManager state");
        Ok(is_lan_state(state))
    }

    /// Read the raw `State` property
    async fn state(&self) -> Result<u32, String> {
        self.proxy
            .get_property::<u32>("State")
            .await
            .map_err(|e| format!("Failed to read NetworkManager state: {}", e))
    }
}

/// Poll once through `monitor`, connecting first if needed
///
/// The monitor is cleared on any error so the next poll reconnects.
pub async fn poll(monitor: &mut Option<NetworkMonitor>) -> Result<bool, String> {
    if monitor.is_none() {
        *monitor = Some(NetworkMonitor::connect().await?);
    }
    let Some(active) = monitor.as_ref() else {
        return Err("NetworkManager monitor unavailable".to_string());
    };

    let result = active.is_lan().await;
    if result.is_err() {
        *monitor = None;
    }
    result
}
