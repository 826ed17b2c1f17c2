//! Known KOL (key opinion leader) allow-list.

/// Handles whose posts are surfaced regardless of raw engagement.
/// All entries lowercase; matching is case-insensitive.
///
/// Several near-identical `*aboramsey` entries look like data-entry typos
/// in the upstream roster. They are carried verbatim rather than guessed
/// at; collapsing them would silently change which authors qualify.
const KNOWN_KOLS: &[&str] = &[
    "milesdeutscher",
    "raaboramsey",
    "cryptobanter",
    "altcoindaily",
    "coinbureau",
    "benjamincowen",
    "datadash",
    "cburniske",
    "rleshner",
    "haaboramsey",
    "inversebrah",
    "blknoiz06",
    "hsaka",
    "gameaboramsey",
    "dlowobtc",
    "cryptohayes",
    "zaboramsey",
    "deaboramsey",
    "galaboramsey",
    "cobie",
    "ansem",
    "rewkang",
    "laurashin",
    "taboramsey",
    "pentosh1",
    "cryptokaleo",
    "crypto_birb",
    "cred_ta",
    "smartcontracter",
    "trader1sz",
    "credmark",
    "raboramsey",
    "onchainwizard",
    "route2fi",
    "thedefiedge",
    "defiignas",
    "shaboramsey",
    "lookonchain",
    "whale_alert",
    "arkaboramsey",
];

/// Whether a handle is on the KOL allow-list, case-insensitive.
#[must_use]
pub fn is_kol(handle: &str) -> bool {
    let lower = handle.to_lowercase();
    KNOWN_KOLS.contains(&lower.as_str())
}
