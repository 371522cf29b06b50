// ── Configuration sanitizing ──
//
// Masks secrets in ASA configuration text before it leaves the driver.
// Each rule keeps the keyword prefix (group 1) and any trailing options
// (group 2) and replaces only the secret token between them.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::pattern;

const REPLACEMENT: &str = "${1} <removed>${2}";

static RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?m)^(enable password)[ \t]+\S+(.*)$",
        r"(?m)^(passwd)[ \t]+\S+(.*)$",
        r"(?m)^(username[ \t]+\S+[ \t]+password)[ \t]+\S+(.*)$",
        r"(?m)^(snmp-server community)[ \t]+\S+(.*)$",
        r"(?m)^(snmp-server host[ \t]+\S+[ \t]+\S+[ \t]+community)[ \t]+\S+(.*)$",
        r"(?m)^([ \t]+key)[ \t]+\S+(.*)$",
        r"(?m)^([ \t]+ikev[12][ \t]+(?:(?:local|remote)-authentication[ \t]+)?pre-shared-key)[ \t]+\S+(.*)$",
        r"(?m)^([ \t]+ospf message-digest-key[ \t]+\d+[ \t]+md5)[ \t]+\S+(.*)$",
        r"(?m)^(ntp authentication-key[ \t]+\d+[ \t]+md5)[ \t]+\S+(.*)$",
    ]
    .into_iter()
    .map(pattern)
    .collect()
});

/// Replace every known secret in `config` with `<removed>`.
pub fn sanitize_config(config: &str) -> String {
    RULES.iter().fold(config.to_owned(), |text, rule| {
        rule.replace_all(&text, REPLACEMENT).into_owned()
    })
}
