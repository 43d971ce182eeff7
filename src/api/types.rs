//! Wire types for the exchange HTTP API
//!
//! Every numeric order field crosses the wire as a base-10 decimal
//! string; hashes, signatures, and addresses as 0x-prefixed lowercase
//! hex. The server parses strings, so nothing here serializes as a
//! JSON number.

use chrono::{DateTime, Utc};
use ethers::core::types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::orders::LimitOrder;
use crate::signing::signer::TypedSignature;

/// A signed legacy order as the API expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrder {
    pub maker_market: String,
    pub taker_market: String,
    pub maker_amount: String,
    pub taker_amount: String,
    pub maker_account_owner: String,
    pub maker_account_number: String,
    pub taker_account_owner: String,
    pub taker_account_number: String,
    pub expiration: String,
    pub salt: String,
    pub typed_signature: String,
}

impl ApiOrder {
    pub fn from_signed(order: &LimitOrder, signature: &TypedSignature) -> Self {
        Self {
            maker_market: order.maker_market.to_string(),
            taker_market: order.taker_market.to_string(),
            maker_amount: order.maker_amount.to_string(),
            taker_amount: order.taker_amount.to_string(),
            maker_account_owner: format_address(order.maker_account_owner),
            maker_account_number: order.maker_account_number.to_string(),
            taker_account_owner: format_address(order.taker_account_owner),
            taker_account_number: order.taker_account_number.to_string(),
            expiration: order.expiration.to_string(),
            salt: order.salt.to_string(),
            typed_signature: signature.to_hex(),
        }
    }
}

/// Body of `POST dex/orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub fill_or_kill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub order: ApiOrder,
}

/// Caller-facing parameters for placing a legacy limit order. Identity,
/// expiration, and salt defaults are filled by the client.
#[derive(Debug, Clone)]
pub struct OrderParams {
    pub maker_market: u64,
    pub taker_market: u64,
    pub maker_amount: U256,
    pub taker_amount: U256,
    /// Unix seconds; defaults to four weeks from now.
    pub expiration: Option<u64>,
    pub fill_or_kill: bool,
    pub client_id: Option<String>,
}

/// Common filters for order, fill, and trade queries.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    pub pairs: Vec<String>,
    pub maker_account_owner: Option<Address>,
    pub maker_account_number: Option<U256>,
    pub limit: Option<u32>,
    pub starting_before: Option<DateTime<Utc>>,
}

impl QueryFilter {
    pub fn for_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = S>) -> Self {
        Self {
            pairs: pairs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Query-string pairs, omitting unset filters.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("pairs", self.pairs.join(","))];
        if let Some(owner) = self.maker_account_owner {
            query.push(("makerAccountOwner", format_address(owner)));
        }
        if let Some(number) = self.maker_account_number {
            query.push(("makerAccountNumber", number.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(starting_before) = self.starting_before {
            query.push(("startingBefore", starting_before.to_rfc3339()));
        }
        query
    }
}

/// 0x-prefixed lowercase hex rendering of an address.
pub fn format_address(address: Address) -> String {
    format!("{:?}", address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::hashing::parse_address;

    #[test]
    fn test_format_address_is_lowercase_hex() {
        let address = parse_address("0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1").unwrap();
        assert_eq!(
            format_address(address),
            "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1"
        );
    }

    #[test]
    fn test_api_order_serializes_strings() {
        let order = LimitOrder {
            maker_market: 0,
            taker_market: 1,
            maker_amount: U256::from(100u64),
            taker_amount: U256::from(200u64),
            maker_account_owner: parse_address("0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1")
                .unwrap(),
            maker_account_number: U256::from(111u64),
            taker_account_owner: parse_address("0xFFcf8FDEE72ac11b5c542428B35EEF5769C409f0")
                .unwrap(),
            taker_account_number: U256::from(222u64),
            expiration: 1234,
            salt: U256::from(4321u64),
        };
        let key = crate::signing::signer::PrivateKey::from_hex(
            "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d",
        )
        .unwrap();
        let signature = order.sign(&key).unwrap();
        let api_order = ApiOrder::from_signed(&order, &signature);

        let value = serde_json::to_value(&api_order).unwrap();
        assert_eq!(value["makerMarket"], "0");
        assert_eq!(value["makerAmount"], "100");
        assert_eq!(value["makerAccountNumber"], "111");
        assert_eq!(value["expiration"], "1234");
        assert_eq!(value["salt"], "4321");
        assert!(value["typedSignature"]
            .as_str()
            .unwrap()
            .starts_with("0x"));
        // All order fields are strings, never JSON numbers.
        for (_, field) in value.as_object().unwrap() {
            assert!(field.is_string());
        }
    }

    #[test]
    fn test_client_id_omitted_when_unset() {
        let request = CreateOrderRequest {
            fill_or_kill: false,
            client_id: None,
            order: ApiOrder {
                maker_market: "0".into(),
                taker_market: "1".into(),
                maker_amount: "1".into(),
                taker_amount: "1".into(),
                maker_account_owner: "0x".into(),
                maker_account_number: "0".into(),
                taker_account_owner: "0x".into(),
                taker_account_number: "0".into(),
                expiration: "0".into(),
                salt: "0".into(),
                typed_signature: "0x".into(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("clientId").is_none());
        assert_eq!(value["fillOrKill"], false);
    }

    #[test]
    fn test_query_filter_omits_unset() {
        let filter = QueryFilter::for_pairs(["WETH-DAI", "DAI-USDC"]);
        let query = filter.to_query();
        assert_eq!(query, vec![("pairs", "WETH-DAI,DAI-USDC".to_string())]);
    }

    #[test]
    fn test_query_filter_full() {
        let filter = QueryFilter {
            pairs: vec!["WETH-DAI".to_string()],
            maker_account_owner: Some(
                parse_address("0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1").unwrap(),
            ),
            maker_account_number: Some(U256::from(5u64)),
            limit: Some(20),
            starting_before: None,
        };
        let query = filter.to_query();
        assert_eq!(query.len(), 4);
        assert_eq!(query[1].0, "makerAccountOwner");
        assert_eq!(query[2], ("makerAccountNumber", "5".to_string()));
        assert_eq!(query[3], ("limit", "20".to_string()));
    }
}
