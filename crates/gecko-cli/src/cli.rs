//! CLI argument definitions for `gecko`.
//!
//! Every subcommand maps onto one client method and prints the decoded
//! response as JSON.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ping` | Server health |
//! | `price` / `token-price` | Simple spot prices |
//! | `currencies` | Supported quote currencies |
//! | `coins` | Coin listings, detail, tickers, history and charts |
//! | `contract` | Token lookups by contract address |
//! | `platforms` / `categories` | Asset platforms and coin categories |
//! | `exchanges` | Spot exchanges, tickers and volume |
//! | `derivatives` | Derivative tickers and exchanges |
//! | `nfts` | NFT collections |
//! | `rates` / `search` / `trending` / `global` / `treasury` | Everything else |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--tier` | `demo` | Access tier (`GECKO_API_TIER`) |
//! | `--api-key` | none | API key (`GECKO_API_KEY`) |
//! | `--timeout-ms` | `30000` | Request timeout (`GECKO_TIMEOUT_MS`) |
//! | `--pretty` | `false` | Indent JSON output |
//! | `-v` | off | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! gecko ping
//! gecko price bitcoin ethereum --vs usd,eur --include-market-cap
//! gecko coins history bitcoin --date 2021-01-01 --pretty
//! gecko --tier pro --api-key "$KEY" coins markets --vs usd --per-page 10
//! ```

use clap::{Args, Parser, Subcommand};
use gecko_core::{
    ApiTier, AssetPlatformFilter, CategoryOrder, ChartInterval, CompanyCoin, Days,
    DerivativeExchangeOrder, IncludeTickers, Locale, MarketOrder, NftOrder, OhlcDays, Precision,
    TickerOrder, VolumeChartDays,
};

/// Command-line client for the CoinGecko market data API.
#[derive(Debug, Parser)]
#[command(
    name = "gecko",
    author,
    version,
    about = "Command-line client for the CoinGecko market data API",
    long_about = "gecko calls the CoinGecko REST API and prints each response as JSON.\n\
\n\
The Demo tier targets api.coingecko.com and the Pro tier targets \
pro-api.coingecko.com. Keys are read from --api-key or GECKO_API_KEY.\n\
\n\
Use 'gecko <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Access tier: demo or pro.
    #[arg(long, global = true, env = "GECKO_API_TIER", default_value_t = ApiTier::Demo)]
    pub tier: ApiTier,

    /// API key for the selected tier.
    #[arg(long, global = true, env = "GECKO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, env = "GECKO_TIMEOUT_MS", default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log requests and failures to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check server health; prints {"status":"active"} or {"status":"inactive"}.
    Ping,

    /// Spot prices for coins by id.
    ///
    /// # Examples
    ///
    ///   gecko price bitcoin ethereum --vs usd
    ///   gecko price bitcoin --vs usd,eur --include-24hr-change --precision full
    Price(PriceArgs),

    /// Spot prices for tokens by contract address on one platform.
    TokenPrice(TokenPriceArgs),

    /// List supported quote currencies.
    Currencies,

    /// Coin listings, detail, tickers, history and charts.
    Coins(CoinsArgs),

    /// Token lookups by contract address.
    Contract(ContractArgs),

    /// List asset platforms.
    Platforms(PlatformsArgs),

    /// Coin categories.
    Categories(CategoriesArgs),

    /// Spot exchanges.
    Exchanges(ExchangesArgs),

    /// Derivative tickers and exchanges.
    Derivatives(DerivativesArgs),

    /// NFT collections.
    Nfts(NftsArgs),

    /// BTC-denominated exchange rates.
    Rates,

    /// Search coins, exchanges, categories and NFTs.
    Search(SearchArgs),

    /// Trending coins and NFTs over the last 24 hours.
    Trending,

    /// Global market metrics.
    Global(GlobalArgs),

    /// Public company treasury holdings.
    Treasury(TreasuryArgs),
}

// =============================================================================
// Simple prices
// =============================================================================

/// Optional price columns shared by `price` and `token-price`.
#[derive(Debug, Args)]
pub struct PriceFlags {
    #[arg(long, default_value_t = false)]
    pub include_market_cap: bool,

    #[arg(long, default_value_t = false)]
    pub include_24hr_vol: bool,

    #[arg(long, default_value_t = false)]
    pub include_24hr_change: bool,

    #[arg(long, default_value_t = false)]
    pub include_last_updated_at: bool,

    /// `full` or a number of decimal places.
    #[arg(long)]
    pub precision: Option<Precision>,
}

#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Coin ids (e.g. bitcoin ethereum).
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Quote currencies, comma separated.
    #[arg(long = "vs", value_delimiter = ',', default_value = "usd")]
    pub vs_currencies: Vec<String>,

    #[command(flatten)]
    pub flags: PriceFlags,
}

#[derive(Debug, Args)]
pub struct TokenPriceArgs {
    /// Asset platform id (e.g. ethereum).
    pub platform: String,

    /// Token contract addresses.
    #[arg(required = true, num_args = 1..)]
    pub contract_addresses: Vec<String>,

    #[arg(long = "vs", value_delimiter = ',', default_value = "usd")]
    pub vs_currencies: Vec<String>,

    #[command(flatten)]
    pub flags: PriceFlags,
}

// =============================================================================
// Coins
// =============================================================================

#[derive(Debug, Args)]
pub struct CoinsArgs {
    #[command(subcommand)]
    pub command: CoinsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CoinsCommand {
    /// Every supported coin id, symbol and name.
    List {
        /// Include platform contract addresses.
        #[arg(long, default_value_t = false)]
        include_platform: bool,
    },

    /// Market rows ordered by market cap or volume.
    Markets(MarketsArgs),

    /// Full detail for one coin.
    Get(CoinGetArgs),

    /// Trading pairs for one coin.
    Tickers(CoinTickersArgs),

    /// Snapshot of one coin on a past date.
    History(HistoryArgs),

    /// Price, market cap and volume series over a look-back window.
    Chart(ChartArgs),

    /// Price, market cap and volume series between two Unix timestamps.
    ChartRange(ChartRangeArgs),

    /// Candles over a fixed look-back window.
    Ohlc(OhlcArgs),
}

#[derive(Debug, Args)]
pub struct MarketsArgs {
    #[arg(long = "vs", default_value = "usd")]
    pub vs_currency: String,

    /// Restrict to these coin ids, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub ids: Option<Vec<String>>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub order: Option<MarketOrder>,

    #[arg(long)]
    pub per_page: Option<u32>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub sparkline: Option<bool>,

    /// Change windows such as 1h,24h,7d.
    #[arg(long, value_delimiter = ',')]
    pub price_change_percentage: Option<Vec<String>>,

    #[arg(long)]
    pub locale: Option<Locale>,

    #[arg(long)]
    pub precision: Option<Precision>,
}

#[derive(Debug, Args)]
pub struct CoinGetArgs {
    pub id: String,

    #[arg(long)]
    pub localization: Option<bool>,

    #[arg(long)]
    pub tickers: Option<bool>,

    #[arg(long)]
    pub market_data: Option<bool>,

    #[arg(long)]
    pub community_data: Option<bool>,

    #[arg(long)]
    pub developer_data: Option<bool>,

    #[arg(long)]
    pub sparkline: Option<bool>,
}

#[derive(Debug, Args)]
pub struct CoinTickersArgs {
    pub id: String,

    /// Restrict to these exchange ids, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub exchange_ids: Option<Vec<String>>,

    #[arg(long)]
    pub include_exchange_logo: Option<bool>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub order: Option<TickerOrder>,

    /// Include 2% order book depth.
    #[arg(long)]
    pub depth: Option<bool>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    pub id: String,

    /// Calendar date as YYYY-MM-DD (UTC).
    #[arg(long, conflicts_with = "unix", required_unless_present = "unix")]
    pub date: Option<String>,

    /// Unix timestamp in seconds.
    #[arg(long)]
    pub unix: Option<i64>,

    #[arg(long)]
    pub localization: Option<bool>,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    pub id: String,

    #[arg(long = "vs", default_value = "usd")]
    pub vs_currency: String,

    /// Number of days or `max`.
    #[arg(long, default_value = "1")]
    pub days: Days,

    #[arg(long)]
    pub interval: Option<ChartInterval>,

    #[arg(long)]
    pub precision: Option<Precision>,
}

#[derive(Debug, Args)]
pub struct ChartRangeArgs {
    pub id: String,

    #[arg(long = "vs", default_value = "usd")]
    pub vs_currency: String,

    /// Range start, Unix seconds.
    #[arg(long)]
    pub from: i64,

    /// Range end, Unix seconds.
    #[arg(long)]
    pub to: i64,

    #[arg(long)]
    pub precision: Option<Precision>,
}

#[derive(Debug, Args)]
pub struct OhlcArgs {
    pub id: String,

    #[arg(long = "vs", default_value = "usd")]
    pub vs_currency: String,

    /// One of 1, 7, 14, 30, 90, 180, 365, max.
    #[arg(long, default_value = "1")]
    pub days: OhlcDays,

    #[arg(long)]
    pub precision: Option<Precision>,
}

// =============================================================================
// Contract
// =============================================================================

#[derive(Debug, Args)]
pub struct ContractArgs {
    #[command(subcommand)]
    pub command: ContractCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContractCommand {
    /// Coin detail for a token contract.
    Info(ContractTarget),

    /// Market chart for a token contract over a look-back window.
    Chart {
        #[command(flatten)]
        target: ContractTarget,

        #[arg(long = "vs", default_value = "usd")]
        vs_currency: String,

        #[arg(long, default_value = "1")]
        days: Days,

        #[arg(long)]
        precision: Option<Precision>,
    },

    /// Market chart for a token contract between two Unix timestamps.
    ChartRange {
        #[command(flatten)]
        target: ContractTarget,

        #[arg(long = "vs", default_value = "usd")]
        vs_currency: String,

        #[arg(long)]
        from: i64,

        #[arg(long)]
        to: i64,

        #[arg(long)]
        precision: Option<Precision>,
    },
}

#[derive(Debug, Args)]
pub struct ContractTarget {
    /// Asset platform id (e.g. ethereum).
    pub platform: String,

    pub contract_address: String,
}

// =============================================================================
// Platforms and categories
// =============================================================================

#[derive(Debug, Args)]
pub struct PlatformsArgs {
    /// Only platforms that host NFTs.
    #[arg(long)]
    pub filter: Option<AssetPlatformFilter>,
}

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// Category ids and names.
    List,

    /// Categories with market data.
    Markets {
        #[arg(long)]
        order: Option<CategoryOrder>,
    },
}

// =============================================================================
// Exchanges
// =============================================================================

#[derive(Debug, Args)]
pub struct ExchangesArgs {
    #[command(subcommand)]
    pub command: ExchangesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ExchangesCommand {
    /// Active exchanges with trading volume.
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Every exchange id and name.
    Ids,

    /// Detail for one exchange.
    Get { id: String },

    /// Trading pairs on one exchange.
    Tickers {
        id: String,

        /// Restrict to these coin ids, comma separated.
        #[arg(long, value_delimiter = ',')]
        coin_ids: Option<Vec<String>>,

        #[arg(long)]
        include_exchange_logo: Option<bool>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        order: Option<TickerOrder>,

        #[arg(long)]
        depth: Option<bool>,
    },

    /// BTC volume series for one exchange.
    VolumeChart {
        id: String,

        /// One of 1, 7, 14, 30, 90, 180, 365.
        #[arg(long, default_value = "1")]
        days: VolumeChartDays,
    },
}

#[derive(Debug, Args)]
pub struct PaginationArgs {
    #[arg(long)]
    pub per_page: Option<u32>,

    #[arg(long)]
    pub page: Option<u32>,
}

// =============================================================================
// Derivatives
// =============================================================================

#[derive(Debug, Args)]
pub struct DerivativesArgs {
    #[command(subcommand)]
    pub command: DerivativesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DerivativesCommand {
    /// Derivative tickers across exchanges.
    Tickers {
        #[arg(long)]
        include_tickers: Option<IncludeTickers>,
    },

    /// Derivative exchanges with open interest and volume.
    Exchanges {
        #[arg(long)]
        order: Option<DerivativeExchangeOrder>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Detail for one derivative exchange.
    Exchange {
        id: String,

        #[arg(long)]
        include_tickers: Option<IncludeTickers>,
    },

    /// Every derivative exchange id and name.
    Ids,
}

// =============================================================================
// NFTs
// =============================================================================

#[derive(Debug, Args)]
pub struct NftsArgs {
    #[command(subcommand)]
    pub command: NftsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NftsCommand {
    /// Supported NFT collections.
    List {
        #[arg(long)]
        asset_platform_id: Option<String>,

        #[arg(long)]
        order: Option<NftOrder>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Collection detail by id.
    Get { id: String },

    /// Collection detail by contract address.
    Contract(ContractTarget),
}

// =============================================================================
// Everything else
// =============================================================================

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search text.
    pub query: String,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Print DeFi metrics instead of the overall market.
    #[arg(long, default_value_t = false)]
    pub defi: bool,
}

#[derive(Debug, Args)]
pub struct TreasuryArgs {
    /// bitcoin or ethereum.
    pub coin: CompanyCoin,
}
