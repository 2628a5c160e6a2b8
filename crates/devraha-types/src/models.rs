use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::ValidationError;

/// Declares a closed string enum with its exact wire names.
///
/// `FromStr` is strict (case-sensitive, wire names only); lenient mapping of
/// legacy values belongs to the normalizers.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name of the variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ValidationError::UnknownVariant {
                        field: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Authenticated user.
///
/// Used by the donor-facing frontend and the home site. `id` is mapped from
/// the backend's `_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend document identifier.
    pub id: String,
    /// 7-digit human-facing ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Login email.
    pub email: String,
    /// Display name; `null` when the user never set one.
    pub name: Option<String>,
    /// Whether 2FA is enabled on the account.
    pub two_factor_enabled: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// ISO date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Contact used for account recovery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_recovery_contact: Option<String>,
}

/// Administrator account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Backend document identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Whether 2FA is enabled on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_enabled: Option<bool>,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// ISO date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

wire_enum!(
    /// Canonical cow gender.
    ///
    /// Legacy records may carry `"Bull"`, `"Cow"`, or nothing at all; those are
    /// reconciled by the gender normalizer, never by `FromStr`.
    CowGender {
        /// Male animal (also the fallback for unknown legacy values).
        Male => "Male",
        /// Female animal.
        Female => "Female",
    }
);

impl Default for CowGender {
    fn default() -> Self {
        CowGender::Male
    }
}

/// Canonical cow record, as consumed by UI and business logic.
///
/// Every non-optional field is always populated. The nullable string fields
/// serialize as `null`; `cowId`, `createdAt`, and `updatedAt` are omitted when
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cow {
    /// Backend document identifier (`_id`).
    #[serde(rename = "_id")]
    pub id: String,
    /// Numeric human-facing ID; absent until backfill completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cow_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Photo URLs.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Free-form description.
    pub description: String,
    /// Whether the animal is a calf.
    pub calf: bool,
    /// Canonical gender.
    pub gender: CowGender,
    /// Whether the cow has been adopted.
    pub adoption_status: bool,
    /// Name of the sponsor, if any.
    #[serde(default)]
    pub sponsor_name: Option<String>,
    /// Identifier of the sponsor, if any.
    #[serde(default)]
    pub sponsor_id: Option<String>,
    /// Total amount donated towards this cow.
    #[serde(default)]
    pub total_donated: f64,
    /// Donator entries, passed through without interpretation.
    #[serde(default)]
    pub donators: Vec<Value>,
    /// Ear tag, if any.
    #[serde(default)]
    pub eartag: Option<String>,
    /// Whether the cow needs special care.
    pub special_care: bool,
    /// Whether testimonials exist for this cow.
    #[serde(default)]
    pub testimonials: bool,
    /// Video URL, if any.
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// Creation timestamp as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Cow shape as documented for the backend API.
///
/// Real payloads deviate from this (legacy gender strings, missing arrays), so
/// callers should prefer normalizing the raw JSON over deserializing this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CowBackend {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Numeric human-facing ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cow_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Photo URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    /// Free-form description.
    pub description: String,
    /// Whether the animal is a calf.
    pub calf: bool,
    /// Raw gender string in any legacy spelling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Whether the cow has been adopted.
    pub adoption_status: bool,
    /// Ear tag, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eartag: Option<String>,
    /// Whether the cow needs special care.
    pub special_care: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

wire_enum!(
    /// Lifecycle of a donation payment.
    DonationStatus {
        /// Awaiting gateway confirmation.
        Pending => "Pending",
        /// Payment captured.
        Successful => "Successful",
        /// Payment failed.
        Failed => "Failed",
    }
);

wire_enum!(
    /// What a donation is for.
    DonationType {
        /// Donation towards a specific cow.
        Cow => "cow",
        /// General donation to the ashram.
        Ashram => "ashram",
    }
);

/// Donation transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Donating user's identifier.
    pub user: String,
    /// Populated cow the donation went to.
    #[serde(rename = "cowId", default, skip_serializing_if = "Option::is_none")]
    pub cow: Option<Cow>,
    /// Donated amount.
    pub amount: f64,
    /// Payment status.
    pub status: DonationStatus,
    /// Gateway payment identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Opaque gateway details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_details: Option<Map<String, Value>>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Cow or ashram donation.
    pub donation_type: DonationType,
}

wire_enum!(
    /// Tier of a legacy donation.
    DonationTier {
        /// Bronze tier.
        Bronze => "Bronze",
        /// Silver tier.
        Silver => "Silver",
        /// Gold tier.
        Gold => "Gold",
    }
);

wire_enum!(
    /// Legacy donation cadence.
    LegacyDonationType {
        /// Single payment.
        OneTime => "one-time",
        /// Repeating payment.
        Recurring => "recurring",
    }
);

wire_enum!(
    /// Repeat interval of a recurring legacy donation.
    RecurringFrequency {
        /// Every month.
        Monthly => "monthly",
        /// Every three months.
        Quarterly => "quarterly",
        /// Every year.
        Yearly => "yearly",
    }
);

/// Donation in the older tiered format still held by some client stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDonation {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Donating user's identifier.
    pub user: String,
    /// Donated amount.
    pub amount: f64,
    /// Donation tier.
    pub tier: DonationTier,
    /// One-time or recurring.
    pub donation_type: LegacyDonationType,
    /// Interval for recurring donations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
    /// Opaque gateway details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_details: Option<Map<String, Value>>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

wire_enum!(
    /// Status of a puja order.
    PujaOrderStatus {
        /// Order created, payment not captured yet.
        AwaitingPayment => "AwaitingPayment",
        /// Payment captured.
        SuccessfulPayment => "SuccessfulPayment",
        /// Puja date confirmed with the customer.
        DateConfirmed => "DateConfirmed",
        /// Puja performed.
        Completed => "Completed",
        /// Payment or fulfilment failed.
        Failed => "Failed",
        /// Cancelled by customer or admin.
        Cancelled => "Cancelled",
        /// Legacy pipeline state still referenced by the frontend.
        PendingApproval => "PendingApproval",
        /// Legacy pipeline state still referenced by the frontend.
        Processed => "Processed",
    }
);

wire_enum!(
    /// Currency of puja orders.
    Currency {
        /// Indian rupee.
        Inr => "INR",
    }
);

/// Customer contact details on a puja order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PujaCustomer {
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Phone number, `+91XXXXXXXXXX`.
    pub phone: String,
}

/// Ritual details requested on a puja order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PujaDetails {
    /// Family lineage.
    pub gotra: String,
    /// Stated intention.
    pub sankalpam: String,
    /// Preferred ISO date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    /// Names to include in the ritual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names_to_include: Option<String>,
    /// Anything else the customer asked for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// Puja booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PujaOrder {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-facing order number.
    pub order_id: String,
    /// Gateway payment identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Ordering user's identifier.
    pub user_id: String,
    /// Order amount.
    pub amount: f64,
    /// Order currency.
    pub currency: Currency,
    /// Order status.
    pub status: PujaOrderStatus,
    /// Customer contact.
    pub customer: PujaCustomer,
    /// Ritual details.
    pub puja_details: PujaDetails,
    /// Confirmed ISO date; `null` until scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}
