//! Payments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payment_method::{Card, PaymentMethod, PaymentMethodData, VatData};
use crate::{Amount, Receipt};

/// Free-form key/value data attached to a payment and echoed back by the API.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Payment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Created, waiting for the payer.
    Pending,
    /// Authorized, waiting to be captured or canceled.
    WaitingForCapture,
    /// Captured.
    Succeeded,
    /// Canceled or failed.
    Canceled,
}

impl PaymentStatus {
    /// Whether the payment can no longer change state.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Canceled)
    }
}

/// How the payer confirms a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationType {
    /// Redirect the payer to `confirmation_url`.
    Redirect,
    /// Payer confirms outside the store (SMS, bank app).
    External,
    /// Embedded checkout widget.
    Embedded,
    /// QR code.
    Qr,
    /// Deep link to a mobile application.
    MobileApplication,
}

/// Payment confirmation scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Scenario type.
    #[serde(rename = "type")]
    pub kind: ConfirmationType,
    /// Force 3-D Secure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<bool>,
    /// Interface language, e.g. `"ru_RU"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Where the payer returns after confirming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// URL the payer must open (response only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_url: Option<String>,
    /// Token for the embedded widget (response only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_token: Option<String>,
    /// QR code payload (response only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_data: Option<String>,
}

impl Confirmation {
    /// A confirmation of the given type with no optional fields set.
    #[must_use]
    pub const fn new(kind: ConfirmationType) -> Self {
        Self {
            kind,
            enforce: None,
            locale: None,
            return_url: None,
            confirmation_url: None,
            confirmation_token: None,
            confirmation_data: None,
        }
    }

    /// Redirect scenario returning the payer to `return_url`.
    #[must_use]
    pub fn redirect(return_url: impl Into<String>) -> Self {
        Self {
            return_url: Some(return_url.into()),
            ..Self::new(ConfirmationType::Redirect)
        }
    }
}

/// Recipient of the funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Store ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Subaccount (gateway) ID.
    pub gateway_id: String,
}

/// Airline ticket passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

/// Flight leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Departure airport IATA code.
    pub departure_airport: String,
    /// Destination airport IATA code.
    pub destination_airport: String,
    /// Departure date, `YYYY-MM-DD`.
    pub departure_date: String,
    /// Carrier code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,
}

/// Airline ticket data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    /// Ticket number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    /// Booking reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
    /// Passengers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passengers: Vec<Passenger>,
    /// Flight legs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<Leg>,
}

/// Share of the payment transferred to another store (marketplaces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Receiving store ID.
    pub account_id: String,
    /// Transferred amount.
    pub amount: Amount,
    /// Transfer status (response only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Why a payment was canceled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationDetails {
    /// Who canceled, e.g. `"merchant"`.
    pub party: String,
    /// Reason, e.g. `"expired_on_confirmation"`.
    pub reason: String,
}

/// Bank authorization data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationDetails {
    /// Retrieval reference number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrn: Option<String>,
    /// Authorization code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
}

/// Request to create a payment.
///
/// Built with [`PaymentRequest::new`] and the `with_*` helpers; at most one payment
/// method is active, the last helper call wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    /// Amount to charge.
    pub amount: Amount,
    /// Description shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Receipt data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    /// Recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,
    /// One-time token from the checkout widget or mobile SDK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    /// Saved payment method ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    /// Payment instrument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodData>,
    /// Confirmation scenario.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    /// Save the payment method for recurring payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_payment_method: Option<bool>,
    /// Capture automatically after authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    /// Payer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Store metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Airline ticket data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<Airline>,
    /// Marketplace transfers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transfers: Vec<Transfer>,
}

impl PaymentRequest {
    /// Create a request for `amount` with everything else unset.
    #[must_use]
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            description: None,
            receipt: None,
            recipient: None,
            payment_token: None,
            payment_method_id: None,
            payment_method_data: None,
            confirmation: None,
            save_payment_method: None,
            capture: None,
            client_ip: None,
            metadata: None,
            airline: None,
            transfers: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the confirmation scenario.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = Some(confirmation);
        self
    }

    /// Attach receipt data.
    #[must_use]
    pub fn with_receipt(mut self, receipt: Receipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    /// Request automatic capture.
    #[must_use]
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Add one metadata entry.
    #[must_use]
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the payment method, replacing any previously set one.
    #[must_use]
    pub fn with_payment_method(mut self, method: PaymentMethodData) -> Self {
        self.payment_method_data = Some(method);
        self
    }

    /// Pay with a bank card.
    #[must_use]
    pub fn with_bank_card(self, card: Card) -> Self {
        self.with_payment_method(PaymentMethodData::BankCard { card })
    }

    /// Pay from a mobile phone balance.
    #[must_use]
    pub fn with_mobile_balance(self, phone: impl Into<String>) -> Self {
        self.with_payment_method(PaymentMethodData::MobileBalance {
            phone: phone.into(),
        })
    }

    /// Pay with Alfa-Click.
    #[must_use]
    pub fn with_alfabank(self, login: impl Into<String>) -> Self {
        self.with_payment_method(PaymentMethodData::Alfabank {
            login: login.into(),
        })
    }

    /// Pay in cash through a terminal.
    #[must_use]
    pub fn with_cash(self, phone: impl Into<String>) -> Self {
        self.with_payment_method(PaymentMethodData::Cash {
            phone: phone.into(),
        })
    }

    /// Pay with Sberbank Online.
    #[must_use]
    pub fn with_sberbank(self, phone: impl Into<String>) -> Self {
        self.with_payment_method(PaymentMethodData::Sberbank {
            phone: phone.into(),
        })
    }

    /// Pay with Sberbank Business Online.
    #[must_use]
    pub fn with_b2b_sberbank(self, payment_purpose: impl Into<String>, vat_data: VatData) -> Self {
        self.with_payment_method(PaymentMethodData::B2bSberbank {
            payment_purpose: payment_purpose.into(),
            vat_data,
        })
    }

    /// Pay with Tinkoff.
    #[must_use]
    pub fn with_tinkoff_bank(self) -> Self {
        self.with_payment_method(PaymentMethodData::TinkoffBank)
    }

    /// Pay from a Yandex.Money wallet.
    #[must_use]
    pub fn with_yandex_money(self) -> Self {
        self.with_payment_method(PaymentMethodData::YandexMoney)
    }

    /// Pay with Apple Pay.
    #[must_use]
    pub fn with_apple_pay(self, payment_data: impl Into<String>) -> Self {
        self.with_payment_method(PaymentMethodData::ApplePay {
            payment_data: payment_data.into(),
        })
    }

    /// Pay with Google Pay.
    #[must_use]
    pub fn with_google_pay(self, payment_method_token: impl Into<String>) -> Self {
        self.with_payment_method(PaymentMethodData::GooglePay {
            payment_method_token: payment_method_token.into(),
        })
    }

    /// Pay from a QIWI wallet.
    #[must_use]
    pub fn with_qiwi(self, phone: impl Into<String>) -> Self {
        self.with_payment_method(PaymentMethodData::Qiwi {
            phone: phone.into(),
        })
    }

    /// Pay with WeChat Pay.
    #[must_use]
    pub fn with_wechat(self) -> Self {
        self.with_payment_method(PaymentMethodData::Wechat)
    }

    /// Pay with Webmoney.
    #[must_use]
    pub fn with_webmoney(self) -> Self {
        self.with_payment_method(PaymentMethodData::Webmoney)
    }

    /// Pay in installments.
    #[must_use]
    pub fn with_installments(self) -> Self {
        self.with_payment_method(PaymentMethodData::Installments)
    }
}

/// Request to capture an authorized payment.
///
/// Leave `amount` unset to capture the full authorized amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptureRequest {
    /// Amount to capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Receipt for the captured amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    /// Updated airline data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<Airline>,
    /// Marketplace transfers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transfers: Vec<Transfer>,
}

/// A payment object as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: String,
    /// Current status.
    pub status: PaymentStatus,
    /// Payment amount.
    pub amount: Amount,
    /// Amount credited to the store after fees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_amount: Option<Amount>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,
    /// Payment instrument used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// When the payment was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
    /// When the payment was created.
    pub created_at: DateTime<Utc>,
    /// Deadline for capture or cancel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Confirmation scenario details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    /// Test-mode payment.
    #[serde(default)]
    pub test: bool,
    /// Amount refunded so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<Amount>,
    /// Whether the payment has been paid.
    #[serde(default)]
    pub paid: bool,
    /// Whether the payment can be refunded.
    #[serde(default)]
    pub refundable: bool,
    /// Receipt registration status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_registration: Option<String>,
    /// Store metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Cancellation details, for canceled payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_details: Option<CancellationDetails>,
    /// Bank authorization details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthorizationDetails>,
    /// Marketplace transfers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transfers: Vec<Transfer>,
}
