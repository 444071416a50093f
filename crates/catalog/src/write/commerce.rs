//! Commerce payloads: coupons, orders, order lines, customer data and the
//! `users` auth collection.

use serde::Serialize;
use serde_json::Value;

use storefront_core::{IsoDate, RecordId};

use super::Writable;
use crate::options::{CouponType, OrderStatus, UserListType};
use crate::records::{
    CouponsRecord, OrderItemsRecord, OrdersRecord, UserAddressesRecord, UserListsRecord,
    UsersRecord,
};

// -------------------------
// coupons
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<IsoDate>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: CouponType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i64>,
    pub value: f64,
}

impl CouponsCreate {
    /// An inactive coupon with no limits.
    pub fn new(code: impl Into<String>, kind: CouponType, value: f64) -> Self {
        Self {
            id: None,
            code: code.into(),
            expire_date: None,
            is_active: false,
            min_order_amount: None,
            kind,
            usage_count: None,
            usage_limit: None,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CouponsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CouponType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Writable for CouponsRecord {
    type Create = CouponsCreate;
    type Update = CouponsUpdate;
}

// -------------------------
// order_items
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrderItemsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_snap: Option<String>,
    pub order_id: RecordId,
    pub price_snap: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<RecordId>,
    pub product_title_snap: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_snap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_snap_json: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrderItemsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_snap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_snap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_title_snap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_snap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_snap_json: Option<Value>,
}

impl Writable for OrderItemsRecord {
    type Create = OrderItemsCreate;
    type Update = OrderItemsUpdate;
}

// -------------------------
// orders
// -------------------------

/// `placed_at` is stamped by the store and cannot be written; backdating
/// goes through `placed_at_override`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrdersCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_at_override: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_payment_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrdersUpdate {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_at_override: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_payment_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

impl Writable for OrdersRecord {
    type Create = OrdersCreate;
    type Update = OrdersUpdate;
}

// -------------------------
// user_addresses
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserAddressesCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserAddressesUpdate {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

impl Writable for UserAddressesRecord {
    type Create = UserAddressesCreate;
    type Update = UserAddressesUpdate;
}

// -------------------------
// user_lists
// -------------------------

/// `items` is required but nullable, so an empty list is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserListsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub items: Option<Value>,
    #[serde(rename = "type")]
    pub kind: UserListType,
    pub user: RecordId,
}

impl UserListsCreate {
    pub fn new(user: RecordId, kind: UserListType) -> Self {
        Self {
            id: None,
            items: None,
            kind,
            user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserListsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<UserListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

impl Writable for UserListsRecord {
    type Create = UserListsCreate;
    type Update = UserListsUpdate;
}

// -------------------------
// users (auth collection)
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_visibility: Option<bool>,
    pub password: String,
    pub password_confirm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_key: Option<String>,
    #[serde(rename = "default_shipping_address", skip_serializing_if = "Option::is_none")]
    pub default_shipping_address: Option<RecordId>,
    #[serde(rename = "stripe_customer_id", skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_visibility: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_key: Option<String>,
    #[serde(rename = "default_shipping_address", skip_serializing_if = "Option::is_none")]
    pub default_shipping_address: Option<RecordId>,
    #[serde(rename = "stripe_customer_id", skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
}

impl Writable for UsersRecord {
    type Create = UsersCreate;
    type Update = UsersUpdate;
}

without_files!(
    CouponsCreate,
    CouponsUpdate,
    OrderItemsCreate,
    OrderItemsUpdate,
    OrdersCreate,
    OrdersUpdate,
    UserAddressesCreate,
    UserAddressesUpdate,
    UserListsCreate,
    UserListsUpdate,
    UsersCreate,
    UsersUpdate,
);
