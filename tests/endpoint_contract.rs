//! Contract tests: every endpoint method hits the documented path with the
//! documented query set and decodes a representative response body.

mod support;

use gecko_core::{
    AssetPlatformFilter, AssetPlatformParams, CategoryOrder, ChartInterval, CoinByIdParams,
    CoinCategoryParams, CoinListParams, CoinOhlcParams, CompanyCoin, CompanyDataParams,
    ContractInfoParams, ContractMarketChartParams, ContractMarketChartRangeParams, Days,
    DerivativeExchangeByIdParams, DerivativeExchangeOrder, DerivativeExchangeParams,
    DerivativeParams, ExchangeByIdParams, ExchangeTickerParams, ExchangeVolumeChartParams,
    IncludeTickers, Locale, MarketChartParams, MarketChartRangeParams, MarketOrder, MarketParams,
    NftByContractParams, NftByIdParams, NftListParams, NftOrder, OhlcDays, PaginationParams,
    PriceByContractParams, TickerOrder, TickerParams, VolumeChartDays,
};
use support::{demo_client, RecordingHttpClient, DEMO_BASE};

const BAYC: &str = "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d";
const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

fn assert_path(transport: &RecordingHttpClient, path: &str) {
    assert_eq!(transport.last_request().url, format!("{DEMO_BASE}/{path}"));
}

fn query_names(transport: &RecordingHttpClient) -> Vec<String> {
    transport
        .last_request()
        .query
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| name != "x-cg-demo-api-key")
        .collect()
}

// =============================================================================
// Simple
// =============================================================================

#[tokio::test]
async fn token_price_embeds_platform_and_joins_addresses() {
    let transport = RecordingHttpClient::replying(&format!(r#"{{"{USDC}":{{"usd":0.9998}}}}"#));
    let client = demo_client(&transport);

    let prices = client
        .price_by_contract(&PriceByContractParams::new(
            "ethereum",
            [USDC, BAYC],
            ["usd", "btc"],
        ))
        .await
        .expect("token price should succeed");

    assert_path(&transport, "simple/token_price/ethereum");
    let request = transport.last_request();
    assert_eq!(
        request.query_value("contract_addresses"),
        Some(format!("{USDC},{BAYC}").as_str())
    );
    assert_eq!(request.query_value("vs_currencies"), Some("usd,btc"));
    assert_eq!(prices[USDC]["usd"], Some(0.9998));
}

#[tokio::test]
async fn supported_currencies_decode_as_strings() {
    let transport = RecordingHttpClient::replying(r#"["btc","eth","usd"]"#);
    let client = demo_client(&transport);

    let currencies = client.supported_vs_currencies().await.expect("must succeed");
    assert_eq!(currencies, vec!["btc", "eth", "usd"]);
}

// =============================================================================
// Coins
// =============================================================================

#[tokio::test]
async fn coin_list_defaults_to_no_parameters() {
    let transport = RecordingHttpClient::replying(
        r#"[{"id":"bitcoin","symbol":"btc","name":"Bitcoin"},
            {"id":"usd-coin","symbol":"usdc","name":"USDC","platforms":{"ethereum":"0xa0b8"}}]"#,
    );
    let client = demo_client(&transport);

    let coins = client
        .coin_list(&CoinListParams::default())
        .await
        .expect("must succeed");

    assert_path(&transport, "coins/list");
    assert!(query_names(&transport).is_empty());
    assert_eq!(coins.len(), 2);
    assert!(coins[0].platforms.is_none());
    assert_eq!(
        coins[1]
            .platforms
            .as_ref()
            .and_then(|p| p.get("ethereum"))
            .cloned()
            .flatten()
            .as_deref(),
        Some("0xa0b8")
    );
}

#[tokio::test]
async fn coin_markets_joins_ids_and_windows() {
    let transport = RecordingHttpClient::replying(
        r#"[{"id":"bitcoin","symbol":"btc","name":"Bitcoin","current_price":65000,
             "market_cap_rank":1,"roi":null,"price_change_percentage_24h_in_currency":1.5}]"#,
    );
    let client = demo_client(&transport);

    let params = MarketParams {
        ids: Some(vec![String::from("bitcoin"), String::from("ethereum")]),
        order: Some(MarketOrder::MarketCapDesc),
        per_page: Some(50),
        page: Some(2),
        sparkline: Some(false),
        price_change_percentage: Some(vec![String::from("1h"), String::from("24h")]),
        locale: Some(Locale::En),
        ..MarketParams::new("usd")
    };
    let markets = client.coin_markets(&params).await.expect("must succeed");

    assert_path(&transport, "coins/markets");
    let request = transport.last_request();
    assert_eq!(request.query_value("ids"), Some("bitcoin,ethereum"));
    assert_eq!(request.query_value("price_change_percentage"), Some("1h,24h"));
    assert_eq!(request.query_value("order"), Some("market_cap_desc"));
    assert_eq!(request.query_value("locale"), Some("en"));
    assert_eq!(markets[0].market_cap_rank, Some(1));
    assert!(markets[0]
        .extra
        .contains_key("price_change_percentage_24h_in_currency"));
}

#[tokio::test]
async fn coin_detail_forwards_flags_but_not_id() {
    let transport = RecordingHttpClient::replying(
        r#"{"id":"bitcoin","symbol":"btc","name":"Bitcoin",
            "public_notice":null,"categories":["Cryptocurrency",null],
            "links":{"homepage":["http://www.bitcoin.org"],"repos_url":{"github":["https://github.com/bitcoin/bitcoin"]}},
            "market_data":{"current_price":{"usd":65000.0},"market_cap_rank":1},
            "tickers":[]}"#,
    );
    let client = demo_client(&transport);

    let params = CoinByIdParams {
        localization: Some(false),
        tickers: Some(false),
        ..CoinByIdParams::new("bitcoin")
    };
    let coin = client.coin(&params).await.expect("must succeed");

    assert_path(&transport, "coins/bitcoin");
    assert_eq!(query_names(&transport), vec!["localization", "tickers"]);
    let market = coin.market_data.expect("market data present");
    assert_eq!(market.current_price.get("usd"), Some(&65_000.0));
    assert_eq!(
        coin.links.expect("links present").repos_url.github,
        vec!["https://github.com/bitcoin/bitcoin"]
    );
}

#[tokio::test]
async fn coin_tickers_forward_order_and_depth() {
    let transport = RecordingHttpClient::replying(
        r#"{"name":"Bitcoin","tickers":[{"base":"BTC","target":"USDT",
            "market":{"name":"Binance","identifier":"binance","has_trading_incentive":false},
            "last":65000.1,"volume":1234.5,"trust_score":"green","is_anomaly":false,"is_stale":false,
            "coin_id":"bitcoin","target_coin_id":"tether"}]}"#,
    );
    let client = demo_client(&transport);

    let params = TickerParams {
        order: Some(TickerOrder::VolumeDesc),
        depth: Some(true),
        page: Some(1),
        ..TickerParams::new("bitcoin")
    };
    let tickers = client.coin_tickers(&params).await.expect("must succeed");

    assert_eq!(query_names(&transport), vec!["page", "order", "depth"]);
    assert_eq!(tickers.tickers[0].market.identifier, "binance");
    assert_eq!(tickers.tickers[0].target_coin_id.as_deref(), Some("tether"));
}

#[tokio::test]
async fn market_chart_sends_days_and_interval() {
    let transport = RecordingHttpClient::replying(
        r#"{"prices":[[1711929600000,69000.5]],"market_caps":[[1711929600000,1.3e12]],"total_volumes":[[1711929600000,2.1e10]]}"#,
    );
    let client = demo_client(&transport);

    let params = MarketChartParams {
        interval: Some(ChartInterval::Daily),
        ..MarketChartParams::new("bitcoin", "usd", Days::Max)
    };
    let chart = client.coin_market_chart(&params).await.expect("must succeed");

    assert_path(&transport, "coins/bitcoin/market_chart");
    let request = transport.last_request();
    assert_eq!(request.query_value("days"), Some("max"));
    assert_eq!(request.query_value("interval"), Some("daily"));
    assert_eq!(chart.prices, vec![[1_711_929_600_000.0, 69_000.5]]);
}

#[tokio::test]
async fn market_chart_range_sends_unix_bounds() {
    let transport = RecordingHttpClient::replying(r#"{"prices":[],"market_caps":[],"total_volumes":[]}"#);
    let client = demo_client(&transport);

    client
        .coin_market_chart_range(&MarketChartRangeParams::new(
            "ethereum",
            "eur",
            1_704_067_200,
            1_706_745_600,
        ))
        .await
        .expect("must succeed");

    assert_path(&transport, "coins/ethereum/market_chart/range");
    assert_eq!(query_names(&transport), vec!["vs_currency", "from", "to"]);
    assert_eq!(transport.last_request().query_value("from"), Some("1704067200"));
}

#[tokio::test]
async fn ohlc_decodes_five_column_rows() {
    let transport = RecordingHttpClient::replying(
        r#"[[1711929600000,69000.0,69500.5,68800.0,69210.2],[1711944000000,69210.2,69300.0,69000.0,69100.0]]"#,
    );
    let client = demo_client(&transport);

    let ohlc = client
        .coin_ohlc(&CoinOhlcParams::new("bitcoin", "usd", OhlcDays::Seven))
        .await
        .expect("must succeed");

    assert_path(&transport, "coins/bitcoin/ohlc");
    assert_eq!(transport.last_request().query_value("days"), Some("7"));
    assert_eq!(ohlc.len(), 2);
    assert_eq!(ohlc[0][2], 69_500.5);
}

// =============================================================================
// Contract
// =============================================================================

#[tokio::test]
async fn contract_info_keeps_address_in_path_and_query() {
    let transport =
        RecordingHttpClient::replying(r#"{"id":"usd-coin","symbol":"usdc","name":"USDC"}"#);
    let client = demo_client(&transport);

    let coin = client
        .contract_info(&ContractInfoParams::new("ethereum", USDC))
        .await
        .expect("must succeed");

    assert_path(&transport, &format!("coins/ethereum/contract/{USDC}"));
    assert_eq!(
        transport.last_request().query_value("contract_address"),
        Some(USDC)
    );
    assert_eq!(coin.id, "usd-coin");
}

#[tokio::test]
async fn contract_market_chart_variants_share_the_contract_path() {
    let transport = RecordingHttpClient::with_responses(vec![
        Ok(gecko_core::HttpResponse::ok_json(r#"{"prices":[[1,1.0]]}"#)),
        Ok(gecko_core::HttpResponse::ok_json(r#"{"prices":[[2,1.0]]}"#)),
    ]);
    let client = demo_client(&transport);

    client
        .contract_market_chart(&ContractMarketChartParams::new("ethereum", USDC, "usd", Days::Count(30)))
        .await
        .expect("chart should succeed");
    client
        .contract_market_chart_range(&ContractMarketChartRangeParams::new(
            "ethereum", USDC, "usd", 1, 2,
        ))
        .await
        .expect("range should succeed");

    let requests = transport.recorded_requests();
    assert_eq!(
        requests[0].url,
        format!("{DEMO_BASE}/coins/ethereum/contract/{USDC}/market_chart")
    );
    assert_eq!(requests[0].query_value("days"), Some("30"));
    assert_eq!(requests[0].query_value("contract_address"), Some(USDC));
    assert_eq!(
        requests[1].url,
        format!("{DEMO_BASE}/coins/ethereum/contract/{USDC}/market_chart/range")
    );
    assert_eq!(requests[1].query_value("to"), Some("2"));
}

// =============================================================================
// Platforms and categories
// =============================================================================

#[tokio::test]
async fn asset_platforms_accept_nft_filter() {
    let transport = RecordingHttpClient::replying(
        r#"[{"id":"ethereum","chain_identifier":1,"name":"Ethereum","shortname":"Ethereum"},
            {"id":"tron","chain_identifier":null,"name":"TRON","shortname":""}]"#,
    );
    let client = demo_client(&transport);

    let platforms = client
        .asset_platforms(&AssetPlatformParams {
            filter: Some(AssetPlatformFilter::Nft),
        })
        .await
        .expect("must succeed");

    assert_path(&transport, "asset_platforms");
    assert_eq!(transport.last_request().query_value("filter"), Some("nft"));
    assert_eq!(platforms[0].chain_identifier, Some(1));
    assert_eq!(platforms[1].chain_identifier, None);
}

#[tokio::test]
async fn categories_list_and_market_data() {
    let transport = RecordingHttpClient::with_responses(vec![
        Ok(gecko_core::HttpResponse::ok_json(
            r#"[{"category_id":"layer-1","name":"Layer 1 (L1)"}]"#,
        )),
        Ok(gecko_core::HttpResponse::ok_json(
            r#"[{"id":"layer-1","name":"Layer 1 (L1)","market_cap":2.0e12,"top_3_coins":["a","b","c"]}]"#,
        )),
    ]);
    let client = demo_client(&transport);

    let list = client.coin_categories_list().await.expect("list");
    let categories = client
        .coin_categories(&CoinCategoryParams {
            order: Some(CategoryOrder::MarketCapChange24hDesc),
        })
        .await
        .expect("categories");

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].url, format!("{DEMO_BASE}/coins/categories/list"));
    assert_eq!(requests[1].url, format!("{DEMO_BASE}/coins/categories"));
    assert_eq!(
        requests[1].query_value("order"),
        Some("market_cap_change_24h_desc")
    );
    assert_eq!(list[0].category_id, "layer-1");
    assert_eq!(categories[0].top_3_coins.len(), 3);
}

// =============================================================================
// Exchanges
// =============================================================================

#[tokio::test]
async fn exchanges_paginate() {
    let transport = RecordingHttpClient::replying(
        r#"[{"id":"binance","name":"Binance","year_established":2017,"trust_score":10,
             "trust_score_rank":1,"trade_volume_24h_btc":250000.5}]"#,
    );
    let client = demo_client(&transport);

    let exchanges = client
        .exchanges(&PaginationParams::new(100, 1))
        .await
        .expect("must succeed");

    assert_path(&transport, "exchanges");
    assert_eq!(query_names(&transport), vec!["per_page", "page"]);
    assert_eq!(exchanges[0].trust_score_rank, Some(1));
}

#[tokio::test]
async fn exchange_detail_sends_no_query() {
    let transport = RecordingHttpClient::replying(
        r#"{"name":"Binance","centralized":true,"tickers":[],"alert_notice":""}"#,
    );
    let client = demo_client(&transport);

    let exchange = client
        .exchange(&ExchangeByIdParams::new("binance"))
        .await
        .expect("must succeed");

    assert_path(&transport, "exchanges/binance");
    assert!(query_names(&transport).is_empty());
    assert_eq!(exchange.centralized, Some(true));
}

#[tokio::test]
async fn exchange_tickers_join_coin_ids() {
    let transport = RecordingHttpClient::replying(r#"{"name":"Binance","tickers":[]}"#);
    let client = demo_client(&transport);

    let params = ExchangeTickerParams {
        coin_ids: Some(vec![String::from("bitcoin"), String::from("ethereum")]),
        include_exchange_logo: Some(true),
        order: Some(TickerOrder::TrustScoreDesc),
        ..ExchangeTickerParams::new("binance")
    };
    let tickers = client.exchange_tickers(&params).await.expect("must succeed");

    assert_path(&transport, "exchanges/binance/tickers");
    let request = transport.last_request();
    assert_eq!(request.query_value("coin_ids"), Some("bitcoin,ethereum"));
    assert_eq!(request.query_value("order"), Some("trust_score_desc"));
    assert_eq!(tickers.name, "Binance");
}

#[tokio::test]
async fn volume_chart_decodes_string_volumes() {
    let transport = RecordingHttpClient::replying(
        r#"[[1711929600000.0,"281475.2013"],[1711930200000.0,"281500.8"]]"#,
    );
    let client = demo_client(&transport);

    let chart = client
        .exchange_volume_chart(&ExchangeVolumeChartParams::new(
            "binance",
            VolumeChartDays::One,
        ))
        .await
        .expect("must succeed");

    assert_path(&transport, "exchanges/binance/volume_chart");
    assert_eq!(transport.last_request().query_value("days"), Some("1"));
    assert_eq!(chart[0].1, 281_475.2013);
}

#[tokio::test]
async fn exchanges_list_has_fixed_path() {
    let transport = RecordingHttpClient::replying(r#"[{"id":"binance","name":"Binance"}]"#);
    let client = demo_client(&transport);

    let list = client.exchanges_list().await.expect("must succeed");
    assert_path(&transport, "exchanges/list");
    assert_eq!(list[0].id, "binance");
}

// =============================================================================
// Derivatives
// =============================================================================

#[tokio::test]
async fn derivatives_listing_and_exchanges() {
    let transport = RecordingHttpClient::with_responses(vec![
        Ok(gecko_core::HttpResponse::ok_json(
            r#"[{"market":"Binance (Futures)","symbol":"BTCUSDT","index_id":"BTC","price":"65000.1",
                 "contract_type":"perpetual","funding_rate":0.01,"expired_at":null,"last_traded_at":1711929600}]"#,
        )),
        Ok(gecko_core::HttpResponse::ok_json(
            r#"[{"name":"Binance (Futures)","id":"binance_futures","open_interest_btc":280000.5,
                 "trade_volume_24h_btc":"650000.12"}]"#,
        )),
        Ok(gecko_core::HttpResponse::ok_json(
            r#"{"name":"Binance (Futures)","number_of_perpetual_pairs":300,"tickers":[]}"#,
        )),
        Ok(gecko_core::HttpResponse::ok_json(
            r#"[{"id":"binance_futures","name":"Binance (Futures)"}]"#,
        )),
    ]);
    let client = demo_client(&transport);

    let derivatives = client
        .derivatives(&DerivativeParams {
            include_tickers: Some(IncludeTickers::Unexpired),
        })
        .await
        .expect("derivatives");
    let exchanges = client
        .derivatives_exchanges(&DerivativeExchangeParams {
            order: Some(DerivativeExchangeOrder::OpenInterestBtcDesc),
            pagination: PaginationParams {
                per_page: Some(10),
                page: None,
            },
        })
        .await
        .expect("derivative exchanges");
    let detail = client
        .derivatives_exchange(&DerivativeExchangeByIdParams {
            include_tickers: Some(IncludeTickers::All),
            ..DerivativeExchangeByIdParams::new("binance_futures")
        })
        .await
        .expect("derivative exchange");
    let list = client
        .derivatives_exchanges_list()
        .await
        .expect("derivative exchange list");

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].url, format!("{DEMO_BASE}/derivatives"));
    assert_eq!(requests[0].query_value("include_tickers"), Some("unexpired"));
    assert_eq!(requests[1].url, format!("{DEMO_BASE}/derivatives/exchanges"));
    assert_eq!(requests[1].query_value("order"), Some("open_interest_btc_desc"));
    assert_eq!(requests[1].query_value("per_page"), Some("10"));
    assert!(!requests[1].has_query("page"));
    assert_eq!(
        requests[2].url,
        format!("{DEMO_BASE}/derivatives/exchanges/binance_futures")
    );
    assert_eq!(requests[2].query_value("include_tickers"), Some("all"));
    assert_eq!(
        requests[3].url,
        format!("{DEMO_BASE}/derivatives/exchanges/list")
    );

    assert_eq!(derivatives[0].price.as_deref(), Some("65000.1"));
    assert_eq!(derivatives[0].expired_at, None);
    assert_eq!(exchanges[0].trade_volume_24h_btc.as_deref(), Some("650000.12"));
    assert_eq!(detail.number_of_perpetual_pairs, Some(300));
    assert_eq!(list[0].id, "binance_futures");
}

#[tokio::test]
async fn list_style_endpoints_accept_defaults() {
    let transport = RecordingHttpClient::with_responses(vec![
        Ok(gecko_core::HttpResponse::ok_json("[]")),
        Ok(gecko_core::HttpResponse::ok_json("[]")),
        Ok(gecko_core::HttpResponse::ok_json("[]")),
        Ok(gecko_core::HttpResponse::ok_json("[]")),
        Ok(gecko_core::HttpResponse::ok_json("[]")),
        Ok(gecko_core::HttpResponse::ok_json("[]")),
    ]);
    let client = demo_client(&transport);

    client.coin_list(&CoinListParams::default()).await.expect("coin list");
    client
        .coin_categories(&CoinCategoryParams::default())
        .await
        .expect("categories");
    client
        .asset_platforms(&AssetPlatformParams::default())
        .await
        .expect("platforms");
    client
        .derivatives(&DerivativeParams::default())
        .await
        .expect("derivatives");
    client
        .derivatives_exchanges(&DerivativeExchangeParams::default())
        .await
        .expect("derivative exchanges");
    client.nfts_list(&NftListParams::default()).await.expect("nfts");

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 6);
    for request in requests {
        let names: Vec<&str> = request.query.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["x-cg-demo-api-key"], "unexpected query on {}", request.url);
    }
}

// =============================================================================
// NFTs
// =============================================================================

#[tokio::test]
async fn nft_list_forwards_platform_and_order() {
    let transport = RecordingHttpClient::replying(
        r#"[{"id":"bored-ape-yacht-club","contract_address":"0xbc4c","name":"Bored Ape Yacht Club",
             "asset_platform_id":"ethereum","symbol":"BAYC"}]"#,
    );
    let client = demo_client(&transport);

    let params = NftListParams {
        asset_platform_id: Some(String::from("ethereum")),
        order: Some(NftOrder::MarketCapUsdDesc),
        pagination: PaginationParams::new(25, 1),
    };
    let nfts = client.nfts_list(&params).await.expect("must succeed");

    assert_path(&transport, "nfts/list");
    assert_eq!(
        query_names(&transport),
        vec!["asset_platform_id", "order", "per_page", "page"]
    );
    assert_eq!(nfts[0].symbol.as_deref(), Some("BAYC"));
}

#[tokio::test]
async fn nft_lookups_by_id_and_contract() {
    let body = r#"{"id":"bored-ape-yacht-club","name":"Bored Ape Yacht Club",
        "floor_price":{"native_currency":12.5,"usd":40000.0},
        "image":{"small":"https://example.test/bayc.png"},
        "number_of_unique_addresses":5500,
        "links":{"homepage":"https://boredapeyachtclub.com/"},
        "explorers":[{"name":"Etherscan","link":"https://etherscan.io/token/0xbc4c"}]}"#;
    let transport = RecordingHttpClient::with_responses(vec![
        Ok(gecko_core::HttpResponse::ok_json(body)),
        Ok(gecko_core::HttpResponse::ok_json(body)),
    ]);
    let client = demo_client(&transport);

    let by_id = client
        .nft(&NftByIdParams::new("bored-ape-yacht-club"))
        .await
        .expect("by id");
    let by_contract = client
        .nft_by_contract(&NftByContractParams::new("ethereum", BAYC))
        .await
        .expect("by contract");

    let requests = transport.recorded_requests();
    assert_eq!(
        requests[0].url,
        format!("{DEMO_BASE}/nfts/bored-ape-yacht-club")
    );
    assert_eq!(
        requests[1].url,
        format!("{DEMO_BASE}/nfts/ethereum/contract/{BAYC}")
    );
    assert!(!requests[1].has_query("contract_address"));
    assert_eq!(by_id.floor_price.usd, Some(40_000.0));
    assert_eq!(by_contract.explorers[0].name, "Etherscan");
    assert_eq!(by_contract.image.thumb, None);
}

// =============================================================================
// General
// =============================================================================

#[tokio::test]
async fn exchange_rates_decode_type_field() {
    let transport = RecordingHttpClient::replying(
        r#"{"rates":{"btc":{"name":"Bitcoin","unit":"BTC","value":1.0,"type":"crypto"},
                     "usd":{"name":"US Dollar","unit":"$","value":65000.0,"type":"fiat"}}}"#,
    );
    let client = demo_client(&transport);

    let rates = client.exchange_rates().await.expect("must succeed");
    assert_path(&transport, "exchange_rates");
    assert_eq!(rates.rates["usd"].kind, "fiat");
}

#[tokio::test]
async fn search_sends_query_text() {
    let transport = RecordingHttpClient::replying(
        r#"{"coins":[{"id":"bitcoin","name":"Bitcoin","api_symbol":"bitcoin","symbol":"BTC","market_cap_rank":1}],
            "exchanges":[],"categories":[{"id":1,"name":"Bitcoin Ecosystem"}],"nfts":[]}"#,
    );
    let client = demo_client(&transport);

    let result = client.search("btc").await.expect("must succeed");
    assert_path(&transport, "search");
    assert_eq!(transport.last_request().query_value("query"), Some("btc"));
    assert_eq!(result.coins[0].id, "bitcoin");
    assert_eq!(result.categories.len(), 1);
}

#[tokio::test]
async fn trending_global_and_defi() {
    let transport = RecordingHttpClient::with_responses(vec![
        Ok(gecko_core::HttpResponse::ok_json(
            r#"{"coins":[{"item":{"id":"pepe","coin_id":29850,"name":"Pepe","symbol":"PEPE","score":0}}],
                "nfts":[{"id":"pudgy-penguins","name":"Pudgy Penguins","nft_contract_id":38}],
                "categories":[]}"#,
        )),
        Ok(gecko_core::HttpResponse::ok_json(
            r#"{"data":{"active_cryptocurrencies":14000,"markets":1100,
                "total_market_cap":{"usd":2.5e12},"market_cap_percentage":{"btc":52.1},
                "market_cap_change_percentage_24h_usd":-1.2,"updated_at":1711929600}}"#,
        )),
        Ok(gecko_core::HttpResponse::ok_json(
            r#"{"data":{"defi_market_cap":"95000000000.5","defi_dominance":"3.8","top_coin_name":"Lido Staked Ether",
                "top_coin_defi_dominance":28.3}}"#,
        )),
    ]);
    let client = demo_client(&transport);

    let trending = client.trending().await.expect("trending");
    let global = client.global().await.expect("global");
    let defi = client.global_defi().await.expect("defi");

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].url, format!("{DEMO_BASE}/search/trending"));
    assert_eq!(requests[1].url, format!("{DEMO_BASE}/global"));
    assert_eq!(
        requests[2].url,
        format!("{DEMO_BASE}/global/decentralized_finance_defi")
    );
    assert_eq!(trending.coins[0].item.id, "pepe");
    assert_eq!(trending.nfts[0].nft_contract_id, Some(38));
    assert_eq!(global.data.market_cap_percentage.get("btc"), Some(&52.1));
    assert_eq!(defi.data.defi_dominance.as_deref(), Some("3.8"));
}

#[tokio::test]
async fn company_treasury_embeds_coin_in_path() {
    let transport = RecordingHttpClient::replying(
        r#"{"total_holdings":264000,"total_value_usd":1.7e10,"market_cap_dominance":1.26,
            "companies":[{"name":"MicroStrategy Inc.","symbol":"NASDAQ:MSTR","country":"US","total_holdings":214246}]}"#,
    );
    let client = demo_client(&transport);

    let data = client
        .companies_public_treasury(&CompanyDataParams::new(CompanyCoin::Bitcoin))
        .await
        .expect("must succeed");

    assert_path(&transport, "companies/public_treasury/bitcoin");
    assert!(query_names(&transport).is_empty());
    assert_eq!(data.companies[0].symbol, "NASDAQ:MSTR");
}
