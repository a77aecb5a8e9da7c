use crate::dates::format_date;
use crate::domain::{PaymentRequest, PaymentRequestWithProject};
use crate::routes::payment_request_href;
use crate::view::{Detail, Icon, ListDatum, ListItem};
use tracing::warn;

/// Build one list entry per payment request
///
/// The right-hand identifier is the project id, and the link is relative:
/// `projects/{project_id}/payment-request/{id}`.
pub fn map_payment_requests_to_list_items(requests: &[PaymentRequestWithProject]) -> Vec<ListItem> {
    requests
        .iter()
        .map(|entry| {
            let request = &entry.request;
            let start = display_date(&request.payment_period_start_date);
            let end = display_date(&request.payment_period_end_date);
            ListItem {
                title: format!("Payment Request for {}", entry.project.title),
                data: vec![
                    ListDatum::with_icon(Icon::Sunrise, start),
                    ListDatum::with_icon(Icon::Sunset, end),
                    ListDatum::with_icon(Icon::Dollar, format_usd(request.usd_amount)),
                    ListDatum::with_icon(Icon::Status, request.status.as_str()),
                ],
                right: Some(entry.project.id),
                href: Some(payment_request_href(request.project_id, request.id)),
            }
        })
        .collect()
}

/// Detail panel for the payment request page
pub fn map_payment_request_to_details(request: &PaymentRequest) -> Vec<Detail> {
    vec![
        Detail::new("Start date", display_date(&request.payment_period_start_date)),
        Detail::new("End date", display_date(&request.payment_period_end_date)),
        Detail::new("Status", request.status.as_str()),
        Detail::new("Amount", format_usd(request.usd_amount)),
        Detail::new("Created at", display_date(&request.created_at)),
    ]
}

/// `$` followed by the shortest decimal form of the amount
fn format_usd(amount: f64) -> String {
    format!("${}", amount)
}

// Backend payment dates are free-form strings; show them raw rather than fail.
fn display_date(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|err| {
        warn!(%err, "showing unparseable payment date verbatim");
        raw.to_string()
    })
}
