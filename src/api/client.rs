//! REST client for the exchange HTTP API
//!
//! Owns the HTTP session and the signing key. The hashing and signing
//! core is pure and synchronous; this layer is the only async code in
//! the crate. Responses are returned as raw JSON values; non-2xx
//! statuses surface as `ClientError::Api` with the body attached.

use std::time::Duration;

use ethers::core::types::{Address, H256, U256};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::config::constants::{TAKER_ACCOUNT_NUMBER, TAKER_ACCOUNT_OWNER};
use crate::config::loader::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::orders::{
    epoch_in_four_weeks, random_salt, sign_cancel, LimitOrder, OrderSchema,
};
use crate::signing::hashing::parse_address;
use crate::signing::signer::PrivateKey;

use super::types::{ApiOrder, CreateOrderRequest, OrderParams, QueryFilter};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Exchange API client bound to one account.
pub struct DydxClient {
    http_client: reqwest::Client,
    base_url: String,
    private_key: PrivateKey,
    account_owner: Address,
    account_number: U256,
}

impl DydxClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let private_key = PrivateKey::from_hex(&config.private_key)?;
        let account_owner = private_key.address();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("dydx-client/rust"));

        let http_client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            private_key,
            account_owner,
            account_number: U256::from(config.account_number),
        })
    }

    /// Load configuration from the environment and build a client.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Address orders are placed from.
    pub fn account_owner(&self) -> Address {
        self.account_owner
    }

    // =========================================================================
    // Markets and accounts
    // =========================================================================

    /// All tradable pairs.
    pub async fn get_pairs(&self) -> ClientResult<Value> {
        self.get_json("v1/dex/pairs", &[]).await
    }

    /// Balances for an arbitrary account.
    pub async fn get_balances(&self, owner: Address, number: U256) -> ClientResult<Value> {
        let path = format!("v1/accounts/{:?}", owner);
        self.get_json(&path, &[("number", number.to_string())])
            .await
    }

    /// Balances for the loaded account.
    pub async fn get_my_balances(&self) -> ClientResult<Value> {
        self.get_balances(self.account_owner, self.account_number)
            .await
    }

    // =========================================================================
    // Orders, fills, trades
    // =========================================================================

    /// Open orders matching the filter.
    pub async fn get_orders(&self, filter: &QueryFilter) -> ClientResult<Value> {
        self.get_json("v1/dex/orders", &filter.to_query()).await
    }

    /// Open orders for the loaded account.
    pub async fn get_my_orders(&self, filter: &QueryFilter) -> ClientResult<Value> {
        self.get_orders(&self.scoped(filter)).await
    }

    /// One order by id.
    pub async fn get_order(&self, order_id: &str) -> ClientResult<Value> {
        let path = format!("v1/dex/orders/{}", order_id);
        self.get_json(&path, &[]).await
    }

    /// Historical fills matching the filter.
    pub async fn get_fills(&self, filter: &QueryFilter) -> ClientResult<Value> {
        self.get_json("v1/dex/fills", &filter.to_query()).await
    }

    /// Historical fills for the loaded account.
    pub async fn get_my_fills(&self, filter: &QueryFilter) -> ClientResult<Value> {
        self.get_fills(&self.scoped(filter)).await
    }

    /// Historical trades matching the filter.
    pub async fn get_trades(&self, filter: &QueryFilter) -> ClientResult<Value> {
        self.get_json("v1/dex/trades", &filter.to_query()).await
    }

    /// Historical trades for the loaded account.
    pub async fn get_my_trades(&self, filter: &QueryFilter) -> ClientResult<Value> {
        self.get_trades(&self.scoped(filter)).await
    }

    /// Build, sign, and submit a legacy limit order. Fills in the
    /// loaded maker identity, the sentinel taker, a random salt, and
    /// the default expiration where the caller left them unset.
    pub async fn create_order(&self, params: OrderParams) -> ClientResult<Value> {
        let order = LimitOrder {
            maker_market: params.maker_market,
            taker_market: params.taker_market,
            maker_amount: params.maker_amount,
            taker_amount: params.taker_amount,
            maker_account_owner: self.account_owner,
            maker_account_number: self.account_number,
            taker_account_owner: parse_address(TAKER_ACCOUNT_OWNER)?,
            taker_account_number: U256::from(TAKER_ACCOUNT_NUMBER),
            expiration: params.expiration.unwrap_or_else(epoch_in_four_weeks),
            salt: random_salt(),
        };
        let order_hash = order.hash()?;
        let signature = self.private_key.sign_typed(order_hash)?;
        debug!(order_hash = ?order_hash, "submitting order");

        let body = CreateOrderRequest {
            fill_or_kill: params.fill_or_kill,
            client_id: params.client_id,
            order: ApiOrder::from_signed(&order, &signature),
        };
        let url = format!("{}/v1/dex/orders", self.base_url);
        let response = self.http_client.post(&url).json(&body).send().await?;
        Self::parse_response(response).await
    }

    /// Cancel an order by hash. The cancel signature travels as a
    /// bearer credential.
    pub async fn cancel_order(&self, order_hash: H256) -> ClientResult<Value> {
        let signature = sign_cancel(OrderSchema::Limit, order_hash, &self.private_key)?;
        debug!(order_hash = ?order_hash, "cancelling order");

        let url = format!("{}/v1/dex/orders/{:?}", self.base_url, order_hash);
        let response = self
            .http_client
            .delete(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", signature.to_hex()),
            )
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn scoped(&self, filter: &QueryFilter) -> QueryFilter {
        let mut scoped = filter.clone();
        scoped.maker_account_owner = Some(self.account_owner);
        scoped.maker_account_number = Some(self.account_number);
        scoped
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http_client.get(&url).query(query).send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}
