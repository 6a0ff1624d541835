//! Output formatting.

use ark_net::{ActiveNetwork, BroadcastOutcome, FeeSchedule};
use serde::Serialize;
use std::fmt::Write as _;

/// What a successful bootstrap produced.
#[derive(Debug, Serialize)]
pub struct SettingsReport {
    pub network: String,
    pub active_peer: String,
    pub port: u16,
    pub version_byte_prefix: u8,
    pub protocol_version: String,
    pub network_hash: String,
    pub max_broadcast_peers: usize,
    pub known_peers: usize,
    pub fees: FeeSchedule,
}

impl SettingsReport {
    pub fn from_network(network: &ActiveNetwork) -> Self {
        let settings = network.settings();
        Self {
            network: network
                .variant()
                .map(|variant| variant.name().to_string())
                .unwrap_or_else(|| "explicit peer".to_string()),
            active_peer: network.active_peer().address().to_string(),
            port: settings.port,
            version_byte_prefix: settings.version_byte_prefix,
            protocol_version: settings.protocol_version.clone(),
            network_hash: settings.network_hash.clone(),
            max_broadcast_peers: settings.max_broadcast_peers,
            known_peers: network.known_peers().len(),
            fees: settings.fee_schedule.clone(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "network           {}", self.network);
        let _ = writeln!(out, "active peer       {}", self.active_peer);
        let _ = writeln!(out, "nethash           {}", self.network_hash);
        let _ = writeln!(out, "protocol version  {}", self.protocol_version);
        let _ = writeln!(out, "version byte      {}", self.version_byte_prefix);
        let _ = writeln!(out, "broadcast peers   {}", self.max_broadcast_peers);
        let _ = writeln!(out, "known peers       {}", self.known_peers);
        let _ = writeln!(
            out,
            "fees              send={} vote={} secondsignature={} delegate={} multisignature={}",
            self.fees.send,
            self.fees.vote,
            self.fees.second_signature,
            self.fees.delegate,
            self.fees.multi_signature
        );
        out
    }
}

/// One line per broadcast attempt.
#[derive(Debug, Serialize)]
pub struct OutcomeLine {
    pub attempt: usize,
    pub peer: String,
    pub accepted: bool,
    pub detail: String,
}

impl From<&BroadcastOutcome> for OutcomeLine {
    fn from(outcome: &BroadcastOutcome) -> Self {
        let detail = match &outcome.result {
            Ok(response) => response.transaction_ids.join(","),
            Err(err) => err.to_string(),
        };
        Self {
            attempt: outcome.attempt,
            peer: outcome.peer.to_string(),
            accepted: outcome.is_success(),
            detail,
        }
    }
}

pub fn render_outcomes(lines: &[OutcomeLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let _ = writeln!(
            out,
            "#{:<3} {:<22} {:<8} {}",
            line.attempt,
            line.peer,
            if line.accepted { "accepted" } else { "failed" },
            line.detail
        );
    }
    let accepted = lines.iter().filter(|l| l.accepted).count();
    let _ = writeln!(out, "{}/{} submissions accepted", accepted, lines.len());
    out
}
