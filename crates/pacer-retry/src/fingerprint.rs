use std::fmt;

/// Host properties that identify the machine a process runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineInfo {
    pub node: String,
    pub os: String,
    pub arch: String,
    pub family: String,
}

impl MachineInfo {
    pub fn current() -> Self {
        Self {
            node: host_name(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            family: std::env::consts::FAMILY.to_string(),
        }
    }
}

fn host_name() -> String {
    ["HOSTNAME", "COMPUTERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// blake3 digest of [`MachineInfo`], hex encoded.
///
/// Tuned parameters are keyed by it, so a portable install keeps
/// separate values for every host it runs on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MachineFingerprint(String);

impl MachineFingerprint {
    pub fn current() -> Self {
        Self::from_info(&MachineInfo::current())
    }

    pub fn from_info(info: &MachineInfo) -> Self {
        let mut hasher = blake3::Hasher::new();
        for part in [&info.node, &info.os, &info.arch, &info.family] {
            hasher.update(part.as_bytes());
            hasher.update(&[0]);
        }
        Self(hasher.finalize().to_hex().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MachineFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
