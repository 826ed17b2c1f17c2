//! Fixed lexicon tables.
//!
//! All tables are lowercase; matching is done against lowercased post
//! text. These are constants by design: nothing in the pipeline may write
//! to them after process start.

/// Phrases contributing +1 to the sentiment sum.
pub(crate) const BULLISH_WORDS: &[&str] = &[
    "bullish", "moon", "mooning", "pump", "pumping", "breakout", "ath", "all-time high",
    "buy", "buying", "long", "longing", "accumulate", "accumulating", "undervalued",
    "gem", "alpha", "send it", "sending", "rip", "ripping", "green", "recovery",
    "reversal", "bottom", "bottomed", "support", "bounce", "bouncing", "uptrend",
    "parabolic", "explosive", "massive", "insane", "huge", "flywheel", "supercycle",
    "adoption", "institutional", "inflows", "etf", "approval", "partnership",
    "launch", "mainnet", "upgrade", "catalyst", "outperform", "rally", "rallying",
    "strong", "strength", "conviction", "dip", "buy the dip", "btd", "wagmi",
    "generational", "opportunity", "rotation", "bid", "bidding",
];

/// Phrases contributing −1.
pub(crate) const BEARISH_WORDS: &[&str] = &[
    "bearish", "dump", "dumping", "crash", "crashing", "sell", "selling", "short",
    "shorting", "overvalued", "bubble", "rug", "rugged", "scam", "ponzi", "fraud",
    "red", "bleeding", "capitulation", "liquidation", "liquidated", "rekt",
    "resistance", "rejection", "breakdown", "downtrend", "death cross", "bear market",
    "outflows", "decline", "declining", "weak", "weakness", "fear", "panic",
    "contagion", "insolvency", "bankrupt", "collapse", "hack", "hacked", "exploit",
    "vulnerability", "ngmi", "bag", "bagholder", "top signal", "euphoria",
    "overleveraged", "derisking", "de-risk", "caution", "warning",
];

/// Fear/uncertainty/doubt phrases contributing −0.5.
pub(crate) const FUD_INDICATORS: &[&str] = &[
    "fud", "regulation", "ban", "sec", "lawsuit", "investigation", "subpoena",
    "enforcement", "crackdown", "shutdown", "delisting", "sanctions", "tether",
    "unbacked", "insolvent", "withdrawal halt", "frozen", "freeze",
];

/// Hype phrases contributing +0.3.
pub(crate) const HYPE_INDICATORS: &[&str] = &[
    "airdrop", "100x", "1000x", "guaranteed", "free money", "cant lose", "can't lose",
    "easy money", "no brainer", "lfg", "lets go", "let's go", "gm", "ser",
    "narrative", "meta", "rotation", "szn", "season",
];

/// Asset symbols recognized as whole words without a cashtag prefix.
pub(crate) const KNOWN_SYMBOLS: &[&str] = &[
    "BTC", "ETH", "SOL", "AVAX", "ARB", "OP", "SUI", "APT", "MATIC", "LINK", "DOT",
    "ADA", "XRP", "DOGE", "SHIB", "PEPE", "WIF", "JUP", "JTO", "TIA", "PYTH", "SEI",
    "INJ", "FET", "RNDR", "TAO", "NEAR", "ATOM", "FTM", "AAVE", "UNI", "MKR", "LDO",
    "RPL", "SSV", "EIGEN", "ETHFI", "PENDLE", "GMX", "DYDX", "SNX", "CRV", "BAL",
    "COMP", "SUSHI", "CAKE", "RAY", "ORCA", "MEME", "BONK", "FLOKI", "RENDER", "GRT",
    "FIL", "AR", "STRK", "ZKSYNC", "BASE", "BLAST", "MODE", "SCROLL", "LINEA",
    "MANTA", "BERACHAIN", "MONAD", "MOVEMENT", "HYPE",
];

/// Narrative bucket → keyword phrases. A post belongs to every bucket with
/// at least one substring hit (multi-label, non-exclusive).
pub(crate) const NARRATIVE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "AI/ML",
        &["ai", "artificial intelligence", "machine learning", "gpt", "llm", "agent", "agents", "ai agent", "depin ai"],
    ),
    (
        "DePIN",
        &["depin", "decentralized physical", "iot", "wireless", "helium", "hivemapper"],
    ),
    (
        "RWA",
        &["rwa", "real world asset", "tokenized", "tokenization", "treasury", "treasuries", "blackrock"],
    ),
    (
        "L2/Scaling",
        &["l2", "layer 2", "rollup", "zk", "zkevm", "optimistic", "base", "arbitrum", "blast", "scroll", "linea"],
    ),
    (
        "DeFi",
        &["defi", "dex", "amm", "lending", "borrowing", "yield", "tvl", "liquidity", "farming", "staking", "restaking"],
    ),
    (
        "Memecoins",
        &["memecoin", "meme coin", "degen", "pump.fun", "bonk", "pepe", "wif", "floki", "shib", "doge"],
    ),
    (
        "NFT/Gaming",
        &["nft", "nfts", "gaming", "gamefi", "metaverse", "ordinals", "inscriptions", "brc-20"],
    ),
    (
        "Bitcoin",
        &["bitcoin", "btc", "halving", "mining", "ordinals", "brc20", "runes", "lightning"],
    ),
    (
        "Ethereum",
        &["ethereum", "eth", "eip", "blob", "dencun", "pectra", "staking", "restaking", "eigenlayer"],
    ),
    (
        "Solana",
        &["solana", "sol", "jupiter", "jup", "raydium", "marinade", "firedancer"],
    ),
    (
        "Regulation",
        &["regulation", "sec", "cftc", "congress", "bill", "stablecoin", "compliance", "etf"],
    ),
    (
        "Macro",
        &["macro", "fed", "fomc", "rate cut", "rate hike", "cpi", "inflation", "recession", "treasury", "dxy", "dollar"],
    ),
    (
        "Airdrop",
        &["airdrop", "claim", "eligibility", "snapshot", "points", "season", "farming points"],
    ),
];

/// Words excluded from the global keyword frequency count.
pub(crate) const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "from", "have", "will", "been", "were", "they",
    "their", "what", "when", "which", "there", "about", "would", "could",
    "should", "just", "like", "more", "some", "than", "them", "then", "these",
    "into", "also", "very", "much", "most", "only", "over", "such", "here",
    "after", "before", "being", "does", "doing", "done", "each", "even",
    "every", "going", "good", "great", "know", "make", "many", "need",
    "next", "people", "really", "right", "same", "still", "take", "think",
    "time", "want", "well", "work", "your", "https", "http", "tweet",
];
