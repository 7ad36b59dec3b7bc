//! Router client device.

use serde::{Deserialize, Serialize};

/// A device known to the router's network manager (`SYNO.Core.Network.NSM.Device`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub band: Option<String>,
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default)]
    pub current_rate: Option<i64>,
    #[serde(default, rename = "dev_type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default, rename = "ip_addr")]
    pub ip4: Option<String>,
    #[serde(default, rename = "ip6_addr")]
    pub ip6: Option<String>,
    /// Wire name is misspelled by the service.
    #[serde(default, rename = "is_baned")]
    pub is_banned: Option<bool>,
    #[serde(default)]
    pub is_beamforming_on: Option<bool>,
    #[serde(default)]
    pub is_guest: Option<bool>,
    #[serde(default)]
    pub is_high_qos: Option<bool>,
    #[serde(default)]
    pub is_low_qos: Option<bool>,
    #[serde(default, rename = "is_manual_dev_type")]
    pub is_manual_device_type: Option<bool>,
    #[serde(default)]
    pub is_manual_hostname: Option<bool>,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default)]
    pub is_qos: Option<bool>,
    #[serde(default)]
    pub is_wireless: Option<bool>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub max_rate: Option<i64>,
    #[serde(default)]
    pub mesh_node_id: Option<i64>,
    #[serde(default)]
    pub rate_quality: Option<String>,
    #[serde(default, rename = "signalstrength")]
    pub signal_strength: Option<i64>,
    #[serde(default, rename = "transferRXRate")]
    pub transfer_rx_rate: Option<i64>,
    #[serde(default, rename = "transferTXRate")]
    pub transfer_tx_rate: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_map_to_fields() {
        let device: Device = serde_json::from_value(json!({
            "dev_type": "computer",
            "hostname": "laptop",
            "ip_addr": "192.168.1.20",
            "ip6_addr": "fe80::1",
            "is_baned": false,
            "mac": "aa:bb:cc:dd:ee:ff",
            "signalstrength": 71,
            "transferRXRate": 1200,
            "transferTXRate": 300
        }))
        .unwrap();

        assert_eq!(device.device_type.as_deref(), Some("computer"));
        assert_eq!(device.ip4.as_deref(), Some("192.168.1.20"));
        assert_eq!(device.ip6.as_deref(), Some("fe80::1"));
        assert_eq!(device.is_banned, Some(false));
        assert_eq!(device.signal_strength, Some(71));
        assert_eq!(device.transfer_rx_rate, Some(1200));
        assert_eq!(device.transfer_tx_rate, Some(300));
    }

    #[test]
    fn absent_flags_stay_unknown() {
        let device: Device = serde_json::from_value(json!({"mac": "aa:bb"})).unwrap();
        assert_eq!(device.is_online, None);
        assert_eq!(device.is_wireless, None);
        assert_eq!(device.signal_strength, None);
    }

    #[test]
    fn explicit_null_is_unknown() {
        let device: Device = serde_json::from_value(json!({"is_guest": null})).unwrap();
        assert_eq!(device.is_guest, None);
    }
}
