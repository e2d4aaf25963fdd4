//! Client-side coin search.

use super::CoinSummary;

/// A coin field the filter can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Symbol,
    Slug,
    ProductId,
}

impl SearchField {
    fn value(&self, coin: &CoinSummary) -> String {
        match self {
            SearchField::Name => coin.name.clone(),
            SearchField::Symbol => coin.symbol.clone(),
            SearchField::Slug => coin.slug.clone(),
            SearchField::ProductId => coin.product_id.to_string(),
        }
    }
}

/// Trimmed, case-insensitive substring match over a fixed set of fields.
///
/// An empty query matches every coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinFilter {
    needle: String,
    fields: Vec<SearchField>,
}

impl CoinFilter {
    pub const DEFAULT_FIELDS: [SearchField; 2] = [SearchField::Symbol, SearchField::Name];

    pub fn new(query: &str) -> Self {
        Self::with_fields(query, &Self::DEFAULT_FIELDS)
    }

    pub fn with_fields(query: &str, fields: &[SearchField]) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
            fields: fields.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, coin: &CoinSummary) -> bool {
        self.is_empty()
            || self
                .fields
                .iter()
                .any(|f| f.value(coin).to_lowercase().contains(&self.needle))
    }

    /// Matching coins, input order preserved.
    pub fn apply<'c>(&self, coins: &'c [CoinSummary]) -> Vec<&'c CoinSummary> {
        coins.iter().filter(|c| self.matches(c)).collect()
    }
}

impl Default for CoinFilter {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::tests::coin;
    use crate::shared::ProductId;

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let mut btc = coin("bitcoin", 1);
        btc.symbol = "BTC".to_string();
        btc.name = "Bitcoin".to_string();
        assert!(CoinFilter::new(" btc ").matches(&btc));
        assert!(CoinFilter::new("COIN").matches(&btc));
        assert!(!CoinFilter::new("eth").matches(&btc));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let coins = vec![coin("bitcoin", 1), coin("ethereum", 2)];
        assert_eq!(CoinFilter::new("   ").apply(&coins).len(), 2);
        assert!(CoinFilter::default().is_empty());
    }

    #[test]
    fn test_default_fields_skip_slug_and_id() {
        let mut c = coin("wrapped-bitcoin", 1);
        c.name = "WBTC".to_string();
        c.symbol = "wbtc".to_string();
        c.product_id = ProductId::new(4242);
        assert!(!CoinFilter::new("wrapped").matches(&c));
        assert!(!CoinFilter::new("4242").matches(&c));

        let all = [SearchField::Slug, SearchField::ProductId];
        assert!(CoinFilter::with_fields("wrapped", &all).matches(&c));
        assert!(CoinFilter::with_fields("424", &all).matches(&c));
    }

    #[test]
    fn test_apply_preserves_order() {
        let coins = vec![coin("bitcoin", 1), coin("ethereum", 2), coin("bitcoin-cash", 3)];
        let hits: Vec<&str> = CoinFilter::new("bitcoin")
            .apply(&coins)
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(hits, ["bitcoin", "bitcoin-cash"]);
    }
}
