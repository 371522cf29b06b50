// `show version` output (legacy facts).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

use super::pattern;

const CONTEXT: &str = "show version";

static SOFTWARE: LazyLock<Regex> = LazyLock::new(|| pattern(r"Software Version (\S+)"));
static HARDWARE: LazyLock<Regex> = LazyLock::new(|| pattern(r"Hardware:\s+([^,\s]+)"));
static SERIAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"Serial Number: (\S+)"));
static UPTIME: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?m)^\S+ up (.+?)\s*$"));
static UPTIME_PART: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(\d+) (year|week|day|hour|min|sec)s?"));

/// Identity fields carried by `show version`.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionInfo {
    pub os_version: String,
    pub model: String,
    pub serial_number: String,
    pub uptime: f64,
}

pub fn parse_version(output: &str) -> Result<VersionInfo, CoreError> {
    let required = |re: &Regex, what: &str| {
        re.captures(output)
            .map(|c| c[1].to_owned())
            .ok_or_else(|| CoreError::parse(CONTEXT, format!("no {what} found")))
    };

    let uptime_text = required(&UPTIME, "uptime")?;

    Ok(VersionInfo {
        os_version: required(&SOFTWARE, "software version")?,
        model: required(&HARDWARE, "hardware model")?,
        serial_number: required(&SERIAL, "serial number")?,
        uptime: parse_uptime(&uptime_text),
    })
}

/// `1 year 12 days 3 hours 4 mins` in seconds.
pub fn parse_uptime(text: &str) -> f64 {
    let secs: u64 = UPTIME_PART
        .captures_iter(text)
        .filter_map(|c| {
            let n: u64 = c[1].parse().ok()?;
            let unit = match &c[2] {
                "year" => 365 * 86_400,
                "week" => 7 * 86_400,
                "day" => 86_400,
                "hour" => 3_600,
                "min" => 60,
                _ => 1,
            };
            Some(n * unit)
        })
        .sum();
    f64::from(u32::try_from(secs).unwrap_or(u32::MAX))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Cisco Adaptive Security Appliance Software Version 9.8(2)
Firepower Extensible Operating System Version 2.2(2.52)
Device Manager Version 7.8(2)

Compiled on Sun 20-Aug-17 04:46 PDT by builders
System image file is \"disk0:/asa982-smp-k8.bin\"
Config file at boot was \"startup-config\"

fw01 up 1 year 2 days 3 hours

Hardware:   ASA5525, 8192 MB RAM, CPU Lynnfield 2394 MHz, 1 CPU (4 cores)
Serial Number: FCH1234X0AB
Configuration last modified by enable_15 at 10:01:02.345 UTC Mon Jan 8 2024
";

    #[test]
    fn version_fields() {
        let info = parse_version(SAMPLE).unwrap();
        assert_eq!(info.os_version, "9.8(2)");
        assert_eq!(info.model, "ASA5525");
        assert_eq!(info.serial_number, "FCH1234X0AB");
        let expected = f64::from((365 + 2) * 86_400 + 3 * 3_600);
        assert!((info.uptime - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn uptime_units() {
        assert!((parse_uptime("4 mins 22 secs") - 262.0).abs() < f64::EPSILON);
        assert!((parse_uptime("2 weeks 1 day") - 1_296_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_serial_is_parse_error() {
        let out = SAMPLE.replace("Serial Number: FCH1234X0AB", "");
        assert!(matches!(parse_version(&out), Err(CoreError::Parse { .. })));
    }
}
