use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RecordError, RecordKind};

/// A ledger transaction as supplied by the caller. Every field is optional;
/// an absent field simply contributes no matching signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub reference: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub contact: Option<String>,
}

impl Transaction {
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        serde_json::from_value(value)
            .map_err(|source| RecordError::new(RecordKind::Transaction, source))
    }
}

/// Document kinds the engine understands. Receipts carry their own date and
/// counterparty semantics; both invoice kinds share the non-receipt rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Receipt,
    PurchaseInvoice,
    SalesInvoice,
}

impl AttachmentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Receipt => "receipt",
            Self::PurchaseInvoice => "purchase_invoice",
            Self::SalesInvoice => "sales_invoice",
        }
    }

    pub const fn is_receipt(self) -> bool {
        matches!(self, Self::Receipt)
    }
}

/// Structured payload extracted from a document. Field coverage varies by
/// document kind and by how much the upstream extractor recognized, so
/// every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentData {
    pub reference: Option<String>,
    pub total_amount: Option<f64>,
    pub supplier: Option<String>,
    pub issuer: Option<String>,
    pub recipient: Option<String>,
    pub receiving_date: Option<String>,
    pub due_date: Option<String>,
    pub invoicing_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    #[serde(default)]
    pub data: AttachmentData,
}

impl Attachment {
    /// The calendar date that best represents when money moved for this
    /// document: receipts record when goods arrived, invoices fall back
    /// from the payment deadline to the issue date.
    pub fn representative_date(&self) -> Option<&str> {
        if self.kind.is_receipt() {
            return self.data.receiving_date.as_deref();
        }
        self.data
            .due_date
            .as_deref()
            .or(self.data.invoicing_date.as_deref())
    }

    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        serde_json::from_value(value)
            .map_err(|source| RecordError::new(RecordKind::Attachment, source))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Attachment, AttachmentData, AttachmentKind, Transaction};

    fn attachment(kind: AttachmentKind, data: AttachmentData) -> Attachment {
        Attachment { kind, data }
    }

    #[test]
    fn receipt_date_comes_from_receiving_date() {
        let receipt = attachment(
            AttachmentKind::Receipt,
            AttachmentData {
                receiving_date: Some("2024-03-01".to_string()),
                due_date: Some("2024-03-20".to_string()),
                invoicing_date: Some("2024-02-15".to_string()),
                ..AttachmentData::default()
            },
        );
        assert_eq!(receipt.representative_date(), Some("2024-03-01"));
    }

    #[test]
    fn invoice_date_prefers_due_date_over_invoicing_date() {
        let invoice = attachment(
            AttachmentKind::PurchaseInvoice,
            AttachmentData {
                due_date: Some("2024-03-20".to_string()),
                invoicing_date: Some("2024-02-15".to_string()),
                ..AttachmentData::default()
            },
        );
        assert_eq!(invoice.representative_date(), Some("2024-03-20"));

        let without_due_date = attachment(
            AttachmentKind::SalesInvoice,
            AttachmentData {
                invoicing_date: Some("2024-02-15".to_string()),
                ..AttachmentData::default()
            },
        );
        assert_eq!(without_due_date.representative_date(), Some("2024-02-15"));
    }

    #[test]
    fn representative_date_is_absent_when_no_date_field_is_set() {
        let bare = attachment(AttachmentKind::Receipt, AttachmentData::default());
        assert_eq!(bare.representative_date(), None);
    }

    #[test]
    fn attachment_from_value_reads_the_type_tag_and_partial_data() {
        let value = json!({
            "type": "purchase_invoice",
            "data": {
                "reference": "00123",
                "total_amount": 250.0,
                "issuer": "Supplies Oy"
            }
        });
        let parsed = Attachment::from_value(value);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.kind, AttachmentKind::PurchaseInvoice);
            assert_eq!(parsed.data.issuer.as_deref(), Some("Supplies Oy"));
            assert_eq!(parsed.data.supplier, None);
        }
    }

    #[test]
    fn attachment_from_value_rejects_unknown_kind_tags() {
        let value = json!({ "type": "parking_ticket", "data": {} });
        assert!(Attachment::from_value(value).is_err());
    }

    #[test]
    fn transaction_from_value_accepts_missing_fields() {
        let parsed = Transaction::from_value(json!({ "amount": -19.9 }));
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.amount, Some(-19.9));
            assert_eq!(parsed.reference, None);
            assert_eq!(parsed.contact, None);
        }
    }
}
