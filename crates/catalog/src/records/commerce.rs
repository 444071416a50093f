//! Commerce collections: coupons, orders, order lines, customer data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::{IsoDate, RecordId};

use crate::collection::{Collection, CollectionRecord};
use crate::options::{CouponType, OrderStatus, UserListType};
use crate::response::{AuthSystemFields, Response};
use crate::serde_helpers::{empty_as_none, lenient_bool, lenient_int_opt, lenient_quantity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponsRecord {
    #[serde(default)]
    pub code: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub expire_date: Option<IsoDate>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: CouponType,
    #[serde(
        default,
        deserialize_with = "lenient_int_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub usage_count: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_int_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub usage_limit: Option<i64>,
    #[serde(default)]
    pub value: f64,
}

/// Order line with snapshots of the product taken at checkout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItemsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_snap: Option<String>,
    pub order_id: RecordId,
    pub price_snap: f64,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<RecordId>,
    pub product_title_snap: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_snap: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_snap_json: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_shipping: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_subtotal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub placed_at: IsoDate,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub placed_at_override: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Value>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_payment_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAddressesRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListsRecord {
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(rename = "type")]
    pub kind: UserListType,
    #[serde(default)]
    pub user: RecordId,
}

/// Customer fields beyond the auth system fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersRecord {
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub default_shipping_address: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    #[serde(rename = "tokenKey", skip_serializing_if = "Option::is_none")]
    pub token_key: Option<String>,
}

impl CollectionRecord for CouponsRecord {
    const COLLECTION: Collection = Collection::Coupons;
}

impl CollectionRecord for OrderItemsRecord {
    const COLLECTION: Collection = Collection::OrderItems;
}

impl CollectionRecord for OrdersRecord {
    const COLLECTION: Collection = Collection::Orders;
}

impl CollectionRecord for UserAddressesRecord {
    const COLLECTION: Collection = Collection::UserAddresses;
}

impl CollectionRecord for UserListsRecord {
    const COLLECTION: Collection = Collection::UserLists;
}

impl CollectionRecord for UsersRecord {
    const COLLECTION: Collection = Collection::Users;
}

pub type CouponsResponse<X = Value> = Response<CouponsRecord, X>;
pub type OrderItemsResponse<X = Value> = Response<OrderItemsRecord, X>;
pub type OrdersResponse<X = Value> = Response<OrdersRecord, X>;
pub type UserAddressesResponse<X = Value> = Response<UserAddressesRecord, X>;
pub type UserListsResponse<X = Value> = Response<UserListsRecord, X>;
pub type UsersResponse<X = Value> = Response<UsersRecord, X, AuthSystemFields>;
