//! End-to-end signing tests across the three order schemas
//!
//! Each schema is hashed, signed, and cancelled through the public
//! API, checked against fixed vectors, and round-tripped through
//! signature recovery.

use std::str::FromStr;

use ethers::core::types::{H256, U256};
use rust_decimal::Decimal;

use dydx_client::signing::{recover_address, PrivateKey};
use dydx_client::{
    cancel_order_hash, sign_cancel, CanonicalOrder, LimitOrder, Order, OrderSchema,
    PerpetualMarket, PerpetualOrder,
};

const KEY_1: &str = "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";
const ADDRESS_1: &str = "0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1";
const ADDRESS_2: &str = "0xFFcf8FDEE72ac11b5c542428B35EEF5769C409f0";

const LIMIT_CANCEL_HASH: &str =
    "0x45170c4ba6a19e3c9e25a4f3b3d65b9f2d988ad80f7a270528c03a7c484e1774";
const LIMIT_CANCEL_SIGNATURE: &str = "0x3d29b75f6aad6db4cc02259bcaa98f465a164392b1c4743d7d0f53b73f64f29f00b495dc132b9a63b4aa613c15909878be1274b575549a959d9586eb7b5e520a1b01";
const CANONICAL_CANCEL_HASH: &str =
    "0x5963e3cac0bb6f57767a3f646234960e8ecad0c20c3bce60413036270480cd72";
const CANONICAL_CANCEL_SIGNATURE: &str = "0xe1506c8153e2ff5fe7fd4d94ed95d7a560e560d715bbe22c8cc9969663e244f45a6a19671b88b7db679736e60d2e01e8a55199919ae0ee6dd8730d97b15d24851b01";
const PERPETUAL_CANCEL_HASH: &str =
    "0x4ae4ea46f1ede568682d3c69650d1411a6addaff8a13057901741bf9fae2fcc8";
const PERPETUAL_CANCEL_SIGNATURE: &str = "0x12ac3ffc41c59b5bfcb9fe440db74a533eacefcb09a7a5c4f41735ed9e8d1b4f4368984ef254bbe1c672d0b89226d21126d58dcc38e83ae3a2fdf22e4d7f89021b01";

fn addr(s: &str) -> ethers::core::types::Address {
    s.parse().unwrap()
}

fn limit_order() -> LimitOrder {
    LimitOrder {
        maker_market: 0,
        taker_market: 1,
        maker_amount: U256::from(100u64),
        taker_amount: U256::from(200u64),
        maker_account_owner: addr(ADDRESS_1),
        maker_account_number: U256::from(111u64),
        taker_account_owner: addr(ADDRESS_2),
        taker_account_number: U256::from(222u64),
        expiration: 1234,
        salt: U256::from(4321u64),
    }
}

fn canonical_order() -> CanonicalOrder {
    CanonicalOrder {
        is_buy: true,
        base_market: 0,
        quote_market: 3,
        amount: U256::from(10_000u64),
        limit_price: Decimal::from_str("250.01").unwrap(),
        trigger_price: Decimal::ZERO,
        limit_fee: Decimal::from_str("0.0050").unwrap(),
        maker_account_owner: addr(ADDRESS_1),
        maker_account_number: U256::from(111u64),
        expiration: 1234,
        salt: U256::zero(),
    }
}

fn perpetual_order(market: PerpetualMarket) -> PerpetualOrder {
    PerpetualOrder {
        market,
        is_buy: true,
        amount: U256::from(10_000u64),
        limit_price: Decimal::from_str("72.01").unwrap(),
        trigger_price: Decimal::ZERO,
        limit_fee: Decimal::from_str("-0.00025").unwrap(),
        maker: addr(ADDRESS_1),
        taker: addr(ADDRESS_2),
        expiration: 1234,
        salt: U256::zero(),
    }
}

#[test]
fn test_cancel_hash_goldens_per_schema() {
    let limit = cancel_order_hash(OrderSchema::Limit, limit_order().hash().unwrap()).unwrap();
    assert_eq!(format!("{:?}", limit), LIMIT_CANCEL_HASH);

    let canonical =
        cancel_order_hash(OrderSchema::Canonical, canonical_order().hash().unwrap()).unwrap();
    assert_eq!(format!("{:?}", canonical), CANONICAL_CANCEL_HASH);

    let perp_hash = perpetual_order(PerpetualMarket::PbtcUsdc).hash().unwrap();
    let perpetual = cancel_order_hash(OrderSchema::Perpetual, perp_hash).unwrap();
    assert_eq!(format!("{:?}", perpetual), PERPETUAL_CANCEL_HASH);
}

#[test]
fn test_cancel_signature_goldens_per_schema() {
    let key = PrivateKey::from_hex(KEY_1).unwrap();

    let limit = sign_cancel(OrderSchema::Limit, limit_order().hash().unwrap(), &key).unwrap();
    assert_eq!(limit.to_hex(), LIMIT_CANCEL_SIGNATURE);

    let canonical = sign_cancel(
        OrderSchema::Canonical,
        canonical_order().hash().unwrap(),
        &key,
    )
    .unwrap();
    assert_eq!(canonical.to_hex(), CANONICAL_CANCEL_SIGNATURE);

    let perp_hash = perpetual_order(PerpetualMarket::PbtcUsdc).hash().unwrap();
    let perpetual = sign_cancel(OrderSchema::Perpetual, perp_hash, &key).unwrap();
    assert_eq!(perpetual.to_hex(), PERPETUAL_CANCEL_SIGNATURE);
}

#[test]
fn test_sign_and_recover_across_schemas() {
    let key = PrivateKey::from_hex(KEY_1).unwrap();
    let orders = [
        Order::Limit(limit_order()),
        Order::Canonical(canonical_order()),
        Order::Perpetual(perpetual_order(PerpetualMarket::PbtcUsdc)),
        Order::Perpetual(perpetual_order(PerpetualMarket::WethPusd)),
    ];
    for order in &orders {
        let hash = order.hash().unwrap();
        let signature = order.sign(&key).unwrap();
        assert_eq!(recover_address(hash, &signature).unwrap(), key.address());
    }
}

#[test]
fn test_enum_dispatch_matches_direct_hashing() {
    assert_eq!(
        Order::Limit(limit_order()).hash().unwrap(),
        limit_order().hash().unwrap()
    );
    assert_eq!(
        Order::Canonical(canonical_order()).hash().unwrap(),
        canonical_order().hash().unwrap()
    );
    let perp = perpetual_order(PerpetualMarket::PlinkUsdc);
    assert_eq!(
        Order::Perpetual(perp.clone()).hash().unwrap(),
        perp.hash().unwrap()
    );
    assert_eq!(
        Order::Perpetual(perp).schema(),
        OrderSchema::Perpetual
    );
}

#[test]
fn test_cancel_hashes_differ_per_schema() {
    // The same order hash cancelled under each schema's domain yields
    // three distinct digests.
    let order_hash: H256 = limit_order().hash().unwrap();
    let limit = cancel_order_hash(OrderSchema::Limit, order_hash).unwrap();
    let canonical = cancel_order_hash(OrderSchema::Canonical, order_hash).unwrap();
    let perpetual = cancel_order_hash(OrderSchema::Perpetual, order_hash).unwrap();
    assert_ne!(limit, canonical);
    assert_ne!(limit, perpetual);
    assert_ne!(canonical, perpetual);
}

#[test]
fn test_signature_wire_layout() {
    let key = PrivateKey::from_hex(KEY_1).unwrap();
    let signature = Order::Limit(limit_order()).sign(&key).unwrap();
    let hex = signature.to_hex();
    // 0x + 65 r/s/v bytes + 1 type byte.
    assert_eq!(hex.len(), 2 + 66 * 2);
    assert!(hex.starts_with("0x"));
    assert!(hex.ends_with("01"));
}
