//! Closed option sets of the store's select fields.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::SchemaError;

macro_rules! select_options {
    (
        $(#[$meta:meta])* $name:ident, $field:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(SchemaError::unknown_option($field, other)),
                }
            }
        }
    };
}

select_options!(
    /// Side a collection banner image is placed on.
    CollectionImagesPosition, "collection_images.position" {
        Left => "left",
        Right => "right",
    }
);

select_options!(
    /// Coupon discount kind.
    CouponType, "coupons.type" {
        Percentage => "percentage",
        FixedAmount => "fixed_amount",
    }
);

select_options!(
    /// Where a navigation link is rendered.
    NavigationLocation, "navigation.location" {
        Header => "header",
        Footer => "footer",
        Mobile => "mobile",
    }
);

select_options!(
    /// Order lifecycle.
    OrderStatus, "orders.status" {
        Pending => "pending",
        Paid => "paid",
        Processing => "processing",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
);

select_options!(
    UiAssetsGroup, "ui_assets.group" {
        Home => "home",
        About => "about",
        Cart => "cart",
        Wishlist => "wishlist",
        Common => "common",
    }
);

select_options!(
    /// Layout block kind of a page section.
    UiSectionType, "ui_sections.type" {
        Hero => "hero",
        FeatureSplit => "feature_split",
        ProductGrid => "product_grid",
        RichText => "rich_text",
        CtaBanner => "cta_banner",
        CategoryGrid => "category_grid",
    }
);

select_options!(
    /// Kind of a per-user saved list.
    UserListType, "user_lists.type" {
        Cart => "cart",
        Wishlist => "wishlist",
        SaveForLater => "save_for_later",
    }
);
