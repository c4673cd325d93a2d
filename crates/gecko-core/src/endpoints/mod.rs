//! One method per CoinGecko endpoint, grouped by API section.
//!
//! Each method turns its parameter bag into a path and a [`QueryParams`] and
//! hands both to the dispatcher. Numeric bounds documented by CoinGecko (for
//! example `per_page` in 1..=250) are not checked here; the service rejects
//! out-of-range values itself.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::query::QueryParams;
use crate::ValidationError;

/// Declares a closed set of query values with `as_str`, `Display` and
/// `FromStr`.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| $crate::ValidationError::InvalidOption {
                        field: $field,
                        value: trimmed.to_owned(),
                    })
            }
        }
    };
}

mod categories;
mod coins;
mod contract;
mod derivatives;
mod exchanges;
mod general;
mod nfts;
mod simple;

pub use categories::{AssetPlatformFilter, AssetPlatformParams, CategoryOrder, CoinCategoryParams};
pub use coins::{
    ChartInterval, CoinByIdParams, CoinHistoryParams, CoinListParams, CoinOhlcParams,
    MarketChartParams, MarketChartRangeParams, MarketOrder, MarketParams, OhlcDays, TickerOrder,
    TickerParams,
};
pub use contract::{ContractInfoParams, ContractMarketChartParams, ContractMarketChartRangeParams};
pub use derivatives::{
    DerivativeExchangeByIdParams, DerivativeExchangeOrder, DerivativeExchangeParams,
    DerivativeParams, IncludeTickers,
};
pub use exchanges::{
    ExchangeByIdParams, ExchangeTickerParams, ExchangeVolumeChartParams, VolumeChartDays,
};
pub use general::{CompanyCoin, CompanyDataParams};
pub use nfts::{NftByContractParams, NftByIdParams, NftListParams, NftOrder};
pub use simple::{PriceByContractParams, PriceByIdParams, PriceOptions};

option_enum! {
    /// Response language for localized fields.
    Locale, "locale" {
        Ar => "ar",
        Bg => "bg",
        Cs => "cs",
        Da => "da",
        De => "de",
        El => "el",
        En => "en",
        Es => "es",
        Fi => "fi",
        Fr => "fr",
        He => "he",
        Hi => "hi",
        Hr => "hr",
        Hu => "hu",
        Id => "id",
        It => "it",
        Ja => "ja",
        Ko => "ko",
        Lt => "lt",
        Nl => "nl",
        No => "no",
        Pl => "pl",
        Pt => "pt",
        Ro => "ro",
        Ru => "ru",
        Sk => "sk",
        Sl => "sl",
        Sv => "sv",
        Th => "th",
        Tr => "tr",
        Uk => "uk",
        Vi => "vi",
        Zh => "zh",
        ZhTw => "zh-tw",
    }
}

/// Decimal places for price values: `full` or a digit count (0..=18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Full,
    Decimals(u8),
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Decimals(digits) => write!(f, "{digits}"),
        }
    }
}

impl FromStr for Precision {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("full") {
            return Ok(Self::Full);
        }
        trimmed
            .parse()
            .map(Self::Decimals)
            .map_err(|_| ValidationError::InvalidOption {
                field: "precision",
                value: trimmed.to_owned(),
            })
    }
}

/// Look-back window in days, or `max` for the full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Days {
    Count(u32),
    Max,
}

impl Display for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(days) => write!(f, "{days}"),
            Self::Max => f.write_str("max"),
        }
    }
}

impl FromStr for Days {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("max") {
            return Ok(Self::Max);
        }
        trimmed
            .parse()
            .map(Self::Count)
            .map_err(|_| ValidationError::InvalidOption {
                field: "days",
                value: trimmed.to_owned(),
            })
    }
}

impl From<u32> for Days {
    fn from(days: u32) -> Self {
        Self::Count(days)
    }
}

/// Paging shared by list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl PaginationParams {
    pub fn new(per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
        }
    }

    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query
            .push_opt("per_page", self.per_page)
            .push_opt("page", self.page);
    }
}

pub(crate) fn owned_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_parse_case_insensitively() {
        assert_eq!(Locale::from_str("ZH-TW").expect("must parse"), Locale::ZhTw);
        assert_eq!(Locale::Ja.to_string(), "ja");
    }

    #[test]
    fn unknown_option_names_the_field() {
        let err = Locale::from_str("xx").expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::InvalidOption {
                field: "locale",
                value: String::from("xx"),
            }
        );
    }

    #[test]
    fn precision_and_days_render_as_the_api_expects() {
        assert_eq!(Precision::Full.to_string(), "full");
        assert_eq!(Precision::from_str("4").expect("must parse"), Precision::Decimals(4));
        assert_eq!(Days::from_str("MAX").expect("must parse"), Days::Max);
        assert_eq!(Days::from(30_u32).to_string(), "30");
        assert!(Days::from_str("forever").is_err());
    }

    #[test]
    fn pagination_emits_only_supplied_fields() {
        let mut query = QueryParams::new();
        PaginationParams {
            per_page: Some(500),
            page: None,
        }
        .apply(&mut query);

        assert_eq!(query.get("per_page"), Some("500"));
        assert_eq!(query.get("page"), None);
    }
}
