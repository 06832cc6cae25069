//! Payment instruments.
//!
//! Requests carry [`PaymentMethodData`], a sum type with one variant per instrument so a
//! request can never mix, say, card data with a wallet login. Responses describe the
//! instrument that was actually used as a flat [`PaymentMethod`] record.

use serde::{Deserialize, Serialize};

use crate::Amount;

/// Payment instrument data sent with a new payment.
///
/// Serialized with a `type` discriminator followed by the fields of the active variant
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethodData {
    /// Bank card with full card data.
    BankCard {
        /// Card data.
        card: Card,
    },
    /// Charge to a mobile phone balance.
    MobileBalance {
        /// Phone number in ITU-T E.164 format.
        phone: String,
    },
    /// Alfa-Click.
    Alfabank {
        /// Alfa-Click login.
        login: String,
    },
    /// Cash through a payment terminal.
    Cash {
        /// Phone number that receives the payment code.
        phone: String,
    },
    /// Sberbank Online.
    Sberbank {
        /// Phone number linked to the Sberbank account.
        phone: String,
    },
    /// Sberbank Business Online.
    B2bSberbank {
        /// Purpose of the payment.
        payment_purpose: String,
        /// VAT information.
        vat_data: VatData,
    },
    /// Tinkoff internet banking.
    TinkoffBank,
    /// Yandex.Money wallet.
    YandexMoney,
    /// Apple Pay.
    ApplePay {
        /// Payment token contents from Apple Pay.
        payment_data: String,
    },
    /// Google Pay.
    GooglePay {
        /// Encrypted payment token from Google Pay.
        payment_method_token: String,
    },
    /// QIWI Wallet.
    Qiwi {
        /// Phone number linked to the wallet.
        phone: String,
    },
    /// WeChat Pay.
    Wechat,
    /// Webmoney.
    Webmoney,
    /// Installments.
    Installments,
}

impl PaymentMethodData {
    /// The discriminator of the active variant.
    #[must_use]
    pub fn kind(&self) -> PaymentMethodType {
        match self {
            Self::BankCard { .. } => PaymentMethodType::BankCard,
            Self::MobileBalance { .. } => PaymentMethodType::MobileBalance,
            Self::Alfabank { .. } => PaymentMethodType::Alfabank,
            Self::Cash { .. } => PaymentMethodType::Cash,
            Self::Sberbank { .. } => PaymentMethodType::Sberbank,
            Self::B2bSberbank { .. } => PaymentMethodType::B2bSberbank,
            Self::TinkoffBank => PaymentMethodType::TinkoffBank,
            Self::YandexMoney => PaymentMethodType::YandexMoney,
            Self::ApplePay { .. } => PaymentMethodType::ApplePay,
            Self::GooglePay { .. } => PaymentMethodType::GooglePay,
            Self::Qiwi { .. } => PaymentMethodType::Qiwi,
            Self::Wechat => PaymentMethodType::Wechat,
            Self::Webmoney => PaymentMethodType::Webmoney,
            Self::Installments => PaymentMethodType::Installments,
        }
    }
}

/// Payment method discriminator as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    /// Bank card.
    BankCard,
    /// Mobile phone balance.
    MobileBalance,
    /// Alfa-Click.
    Alfabank,
    /// Cash.
    Cash,
    /// Sberbank Online.
    Sberbank,
    /// Sberbank Business Online.
    B2bSberbank,
    /// Tinkoff.
    TinkoffBank,
    /// Yandex.Money.
    YandexMoney,
    /// Apple Pay.
    ApplePay,
    /// Google Pay.
    GooglePay,
    /// QIWI Wallet.
    Qiwi,
    /// WeChat Pay.
    Wechat,
    /// Webmoney.
    Webmoney,
    /// Installments.
    Installments,
    /// A method this client does not know about yet.
    #[serde(other)]
    Other,
}

impl PaymentMethodType {
    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BankCard => "bank_card",
            Self::MobileBalance => "mobile_balance",
            Self::Alfabank => "alfabank",
            Self::Cash => "cash",
            Self::Sberbank => "sberbank",
            Self::B2bSberbank => "b2b_sberbank",
            Self::TinkoffBank => "tinkoff_bank",
            Self::YandexMoney => "yandex_money",
            Self::ApplePay => "apple_pay",
            Self::GooglePay => "google_pay",
            Self::Qiwi => "qiwi",
            Self::Wechat => "wechat",
            Self::Webmoney => "webmoney",
            Self::Installments => "installments",
            Self::Other => "other",
        }
    }
}

/// Card data supplied by the payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card number.
    pub number: String,
    /// Expiry year, `YYYY`.
    pub expiry_year: String,
    /// Expiry month, `MM`.
    pub expiry_month: String,
    /// CVC2 or CVV2 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csc: Option<String>,
    /// Cardholder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<String>,
}

/// Masked card data returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// First six digits (BIN).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first6: Option<String>,
    /// Last four digits.
    pub last4: String,
    /// Expiry year.
    pub expiry_year: String,
    /// Expiry month.
    pub expiry_month: String,
    /// Card network, e.g. `"MasterCard"`.
    pub card_type: String,
    /// Issuer country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_country: Option<String>,
    /// Issuer bank name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    /// Card data source, e.g. `"apple_pay"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// VAT data for Sberbank Business Online payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VatData {
    /// VAT calculated at a single rate.
    Calculated {
        /// VAT rate in percent, e.g. `"20"`.
        rate: String,
        /// VAT amount.
        amount: Amount,
    },
    /// VAT at mixed rates.
    Mixed {
        /// Total VAT amount.
        amount: Amount,
    },
    /// Goods are not subject to VAT.
    Untaxed,
}

/// Legal entity details of a Sberbank Business Online payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerBankDetails {
    /// Full name of the organization.
    pub full_name: String,
    /// Short name of the organization.
    pub short_name: String,
    /// Address.
    pub address: String,
    /// Taxpayer identification number.
    pub inn: String,
    /// Tax registration reason code.
    #[serde(default)]
    pub kpp: String,
    /// Bank name.
    pub bank_name: String,
    /// Bank branch.
    pub bank_branch: String,
    /// Bank identification code.
    pub bank_bik: String,
    /// Account number.
    pub account: String,
}

/// The payment instrument used by a payment, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Method discriminator.
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,
    /// Payment method ID, usable for recurring payments when saved.
    pub id: String,
    /// Whether the method was saved for recurring payments.
    #[serde(default)]
    pub saved: bool,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Wallet or Alfa-Click login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Masked card data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    /// Payment purpose (b2b Sberbank).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    /// VAT data (b2b Sberbank).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_data: Option<VatData>,
    /// Payer details (b2b Sberbank).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_bank_details: Option<PayerBankDetails>,
    /// Wallet account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}
