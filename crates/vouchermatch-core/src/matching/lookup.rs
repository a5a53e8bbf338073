use crate::matching::counterparty::counterparty_from_attachment;
use crate::matching::date::dates_within_window;
use crate::matching::normalize::{company_names_match, normalize_reference};
use crate::matching::policy::{MATCH_POLICY_V1, MatchPolicy};
use crate::matching::types::{Attachment, Transaction};

/// The comparable facets of one record, extracted once per record so the
/// scorer is identical in both lookup directions.
#[derive(Debug, Clone)]
struct RecordSignals<'a> {
    reference: Option<String>,
    amount: Option<f64>,
    date: Option<&'a str>,
    counterparty: Option<&'a str>,
}

impl<'a> RecordSignals<'a> {
    fn from_transaction(transaction: &'a Transaction) -> Self {
        Self {
            reference: normalize_reference(transaction.reference.as_deref()),
            amount: transaction.amount,
            date: transaction.date.as_deref(),
            counterparty: transaction.contact.as_deref(),
        }
    }

    fn from_attachment(attachment: &'a Attachment, policy: MatchPolicy) -> Self {
        Self {
            reference: normalize_reference(attachment.data.reference.as_deref()),
            amount: attachment.data.total_amount,
            date: attachment.representative_date(),
            counterparty: counterparty_from_attachment(attachment, policy.home_company),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SignalScore {
    amount: bool,
    date: bool,
    counterparty: bool,
}

impl SignalScore {
    fn compute(
        query: &RecordSignals<'_>,
        candidate: &RecordSignals<'_>,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            amount: policy.amounts_match(query.amount, candidate.amount),
            date: dates_within_window(query.date, candidate.date, policy.date_window_days),
            counterparty: company_names_match(query.counterparty, candidate.counterparty),
        }
    }

    fn matches(self) -> u8 {
        u8::from(self.amount) + u8::from(self.date) + u8::from(self.counterparty)
    }
}

/// Best candidate for one query. A normalized-reference hit is definitive
/// and returns before any scoring. Otherwise every candidate is scored on
/// amount, date, and counterparty; a mismatch between two known
/// counterparty names vetoes the candidate outright, and the first
/// strictly-best candidate at or above the evidence threshold wins, so list
/// order breaks ties.
fn select_best<'a, T>(
    query: &RecordSignals<'_>,
    candidates: &'a [T],
    signals: impl Fn(&'a T) -> RecordSignals<'a>,
    policy: MatchPolicy,
) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }

    if let Some(query_reference) = query.reference.as_deref() {
        for candidate in candidates {
            if signals(candidate).reference.as_deref() == Some(query_reference) {
                return Some(candidate);
            }
        }
    }

    let mut best_match: Option<&T> = None;
    let mut best_score = 0u8;

    for candidate in candidates {
        let candidate_signals = signals(candidate);
        let score = SignalScore::compute(query, &candidate_signals, policy);

        let both_counterparties_known =
            query.counterparty.is_some() && candidate_signals.counterparty.is_some();
        if both_counterparties_known && !score.counterparty {
            continue;
        }

        let matches = score.matches();
        if policy.meets_threshold(matches) && matches > best_score {
            best_score = matches;
            best_match = Some(candidate);
        }
    }

    best_match
}

/// Find the best matching attachment for a transaction, if any candidate
/// carries enough agreeing evidence.
pub fn find_attachment<'a>(
    transaction: &Transaction,
    attachments: &'a [Attachment],
) -> Option<&'a Attachment> {
    let policy = MATCH_POLICY_V1;
    let query = RecordSignals::from_transaction(transaction);
    select_best(
        &query,
        attachments,
        |attachment| RecordSignals::from_attachment(attachment, policy),
        policy,
    )
}

/// Find the best matching transaction for an attachment, if any candidate
/// carries enough agreeing evidence.
pub fn find_transaction<'a>(
    attachment: &Attachment,
    transactions: &'a [Transaction],
) -> Option<&'a Transaction> {
    let policy = MATCH_POLICY_V1;
    let query = RecordSignals::from_attachment(attachment, policy);
    select_best(&query, transactions, RecordSignals::from_transaction, policy)
}
