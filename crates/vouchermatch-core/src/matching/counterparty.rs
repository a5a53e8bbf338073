use crate::matching::types::{Attachment, AttachmentData, AttachmentKind};

struct CounterpartyRule {
    applies_to: fn(AttachmentKind) -> bool,
    field: fn(&AttachmentData) -> Option<&str>,
}

/// Precedence order for the "other party" name. Document kinds place the
/// counterparty in different fields: receipts name their supplier directly,
/// invoices carry issuer/recipient depending on direction (a sales invoice
/// lists the party that owes us as recipient), and supplier is rechecked
/// last for the invoice kinds.
const COUNTERPARTY_RULES: &[CounterpartyRule] = &[
    CounterpartyRule {
        applies_to: AttachmentKind::is_receipt,
        field: |data| data.supplier.as_deref(),
    },
    CounterpartyRule {
        applies_to: |_| true,
        field: |data| data.issuer.as_deref(),
    },
    CounterpartyRule {
        applies_to: |_| true,
        field: |data| data.recipient.as_deref(),
    },
    CounterpartyRule {
        applies_to: |_| true,
        field: |data| data.supplier.as_deref(),
    },
];

/// First rule whose field holds a non-empty name that is not the home
/// company itself wins; the home company's own registered name never
/// denotes a counterparty, whichever field it appears in.
pub fn counterparty_from_attachment<'a>(
    attachment: &'a Attachment,
    home_company: &str,
) -> Option<&'a str> {
    for rule in COUNTERPARTY_RULES {
        if !(rule.applies_to)(attachment.kind) {
            continue;
        }
        let Some(candidate) = (rule.field)(&attachment.data) else {
            continue;
        };
        if candidate.is_empty() || candidate == home_company {
            continue;
        }
        return Some(candidate);
    }
    None
}
