//! Gateway enumerations: result codes, payment states and wire-level codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result code returned with every gateway response.
///
/// The wire value is numeric but arrives as either a JSON number or a string;
/// codes not listed here are preserved in [`ResultCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// `0`: the operation succeeded
    Ok,
    /// `100`: a required parameter is missing
    MissingParameter,
    /// `110`: a parameter has an invalid value
    InvalidParameter,
    /// `120`: the merchant account is blocked
    MerchantBlocked,
    /// `130`: the payment session expired
    SessionExpired,
    /// `140`: no payment with this id
    PaymentNotFound,
    /// `150`: the payment's state does not allow the operation
    PaymentNotInValidState,
    /// `160`: the merchant may not perform the operation
    OperationNotAllowed,
    /// `800`: unknown customer (customer-bound operations)
    CustomerNotFound,
    /// `810`: the customer has no stored cards
    CustomerHasNoSavedCards,
    /// `820`: the customer has stored cards
    CustomerHasSavedCards,
    /// `900`: gateway-side failure
    InternalError,
    /// Any other code, kept verbatim
    Other(String),
}

impl ResultCode {
    /// Get the wire code
    pub fn code(&self) -> &str {
        match self {
            Self::Ok => "0",
            Self::MissingParameter => "100",
            Self::InvalidParameter => "110",
            Self::MerchantBlocked => "120",
            Self::SessionExpired => "130",
            Self::PaymentNotFound => "140",
            Self::PaymentNotInValidState => "150",
            Self::OperationNotAllowed => "160",
            Self::CustomerNotFound => "800",
            Self::CustomerHasNoSavedCards => "810",
            Self::CustomerHasSavedCards => "820",
            Self::InternalError => "900",
            Self::Other(code) => code,
        }
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "0" => Self::Ok,
            "100" => Self::MissingParameter,
            "110" => Self::InvalidParameter,
            "120" => Self::MerchantBlocked,
            "130" => Self::SessionExpired,
            "140" => Self::PaymentNotFound,
            "150" => Self::PaymentNotInValidState,
            "160" => Self::OperationNotAllowed,
            "800" => Self::CustomerNotFound,
            "810" => Self::CustomerHasNoSavedCards,
            "820" => Self::CustomerHasSavedCards,
            "900" => Self::InternalError,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this is the success code `0`
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Payment lifecycle state reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// 1: created by init, customer not yet redirected
    Created,
    /// 2: customer is on the payment page
    InProgress,
    /// 3: canceled by the customer
    Canceled,
    /// 4: authorized
    Approved,
    /// 5: authorization reversed
    Reversed,
    /// 6: declined by the issuer
    Declined,
    /// 7: closed, waiting for settlement
    WaitingForSettlement,
    /// 8: settled
    Settled,
}

impl PaymentStatus {
    /// Numeric `paymentStatus` value
    pub fn code(&self) -> i64 {
        match self {
            Self::Created => 1,
            Self::InProgress => 2,
            Self::Canceled => 3,
            Self::Approved => 4,
            Self::Reversed => 5,
            Self::Declined => 6,
            Self::WaitingForSettlement => 7,
            Self::Settled => 8,
        }
    }

    /// Parse a numeric `paymentStatus`; `None` for codes outside 1-8
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Created),
            2 => Some(Self::InProgress),
            3 => Some(Self::Canceled),
            4 => Some(Self::Approved),
            5 => Some(Self::Reversed),
            6 => Some(Self::Declined),
            7 => Some(Self::WaitingForSettlement),
            8 => Some(Self::Settled),
            _ => None,
        }
    }

    /// Whether the gateway attaches an `authCode` in this state
    pub fn carries_auth_code(&self) -> bool {
        matches!(
            self,
            Self::Approved | Self::WaitingForSettlement | Self::Settled
        )
    }
}

/// Currencies accepted by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    CZK,
    USD,
    EUR,
    GBP,
    HUF,
    PLN,
    RON,
    NOK,
    SEK,
}

impl Currency {
    /// Get currency code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::CZK => "CZK",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::HUF => "HUF",
            Self::PLN => "PLN",
            Self::RON => "RON",
            Self::NOK => "NOK",
            Self::SEK => "SEK",
        }
    }

    /// Parse from string
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "CZK" => Some(Self::CZK),
            "USD" => Some(Self::USD),
            "EUR" => Some(Self::EUR),
            "GBP" => Some(Self::GBP),
            "HUF" => Some(Self::HUF),
            "PLN" => Some(Self::PLN),
            "RON" => Some(Self::RON),
            "NOK" => Some(Self::NOK),
            "SEK" => Some(Self::SEK),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language of the gateway's payment page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[serde(alias = "CZ")]
    Cs,
    En,
    De,
    Fr,
    Hu,
    It,
    Ja,
    Pl,
    Pt,
    Ro,
    Ru,
    Sk,
    Es,
    Tr,
    Vi,
    Hr,
    Sl,
    Sv,
}

impl Language {
    /// Upper-case wire code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cs => "CS",
            Self::En => "EN",
            Self::De => "DE",
            Self::Fr => "FR",
            Self::Hu => "HU",
            Self::It => "IT",
            Self::Ja => "JA",
            Self::Pl => "PL",
            Self::Pt => "PT",
            Self::Ro => "RO",
            Self::Ru => "RU",
            Self::Sk => "SK",
            Self::Es => "ES",
            Self::Tr => "TR",
            Self::Vi => "VI",
            Self::Hr => "HR",
            Self::Sl => "SL",
            Self::Sv => "SV",
        }
    }

    /// Parse from string; `CZ` is accepted for Czech
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "CS" | "CZ" => Some(Self::Cs),
            "EN" => Some(Self::En),
            "DE" => Some(Self::De),
            "FR" => Some(Self::Fr),
            "HU" => Some(Self::Hu),
            "IT" => Some(Self::It),
            "JA" => Some(Self::Ja),
            "PL" => Some(Self::Pl),
            "PT" => Some(Self::Pt),
            "RO" => Some(Self::Ro),
            "RU" => Some(Self::Ru),
            "SK" => Some(Self::Sk),
            "ES" => Some(Self::Es),
            "TR" => Some(Self::Tr),
            "VI" => Some(Self::Vi),
            "HR" => Some(Self::Hr),
            "SL" => Some(Self::Sl),
            "SV" => Some(Self::Sv),
            _ => None,
        }
    }
}

/// Payment operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PayOperation {
    /// Standard payment
    #[default]
    #[serde(rename = "payment")]
    Payment,
    /// Payment that can later serve as a one-click template
    #[serde(rename = "oneclickPayment")]
    OneClickPayment,
    /// Payment whose page link is handed to the customer out of band
    #[serde(rename = "customPayment")]
    CustomPayment,
}

/// Payment method offered on the payment page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PayMethod {
    /// Card payment
    #[default]
    #[serde(rename = "card")]
    Card,
    /// Card payment with low-value-payment exemption
    #[serde(rename = "card#LVP")]
    CardLvp,
}

/// HTTP method the gateway uses to send the customer back to the merchant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReturnMethod {
    #[default]
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "GET")]
    Get,
}
