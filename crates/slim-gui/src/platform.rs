//! Platform facts shown in the Controls panel, gathered with `sysinfo`.

use sysinfo::System;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Host platform summary
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformInfo {
    /// Platform family, e.g. "Linux" or "Mac OS X"
    pub platform: String,
    /// Logical CPU count
    pub cpu_count: usize,
    /// Total RAM in GiB
    pub ram_gb: f64,
}

impl PlatformInfo {
    /// Query the host once
    pub fn detect() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        system.refresh_cpu_all();

        let cpu_count = match system.cpus().len() {
            0 => std::thread::available_parallelism().map_or(1, |n| n.get()),
            n => n,
        };

        let info = Self {
            platform: platform_label(std::env::consts::OS),
            cpu_count,
            ram_gb: bytes_to_gib(system.total_memory()),
        };
        log::info!(
            "Platform: {} ({}), {} CPU cores, {:.2} GB RAM",
            info.platform,
            System::long_os_version().unwrap_or_default(),
            info.cpu_count,
            info.ram_gb
        );
        info
    }

    /// Label lines for the Controls panel, in display order
    pub fn lines(&self) -> [String; 3] {
        [
            self.platform.clone(),
            format!("CPU cores: {}", self.cpu_count),
            format!("RAM: {:.2} GB", self.ram_gb),
        ]
    }
}

/// Platform family label for an OS identifier from `std::env::consts::OS`
fn platform_label(os: &str) -> String {
    let label = match os {
        "linux" => "Linux",
        "macos" => "Mac OS X",
        "windows" => "Windows",
        "ios" => "iOS",
        "android" => "Android",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        other => other,
    };
    label.to_string()
}

fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_gib() {
        assert_eq!(bytes_to_gib(0), 0.0);
        assert_eq!(bytes_to_gib(16 * 1024 * 1024 * 1024), 16.0);
        assert!((bytes_to_gib(1_500_000_000) - 1.397).abs() < 0.001);
    }

    #[test]
    fn test_platform_label_is_family_name() {
        assert_eq!(platform_label("linux"), "Linux");
        assert_eq!(platform_label("macos"), "Mac OS X");
        assert_eq!(platform_label("windows"), "Windows");
        assert_eq!(platform_label("haiku"), "haiku");
    }

    #[test]
    fn test_lines() {
        let info = PlatformInfo {
            platform: "Linux".to_string(),
            cpu_count: 8,
            ram_gb: 15.5,
        };
        assert_eq!(
            info.lines(),
            [
                "Linux".to_string(),
                "CPU cores: 8".to_string(),
                "RAM: 15.50 GB".to_string()
            ]
        );
    }

    #[test]
    fn test_detect_reports_cpus() {
        let info = PlatformInfo::detect();
        assert!(info.cpu_count >= 1);
        assert_eq!(info.platform, platform_label(std::env::consts::OS));
    }
}
