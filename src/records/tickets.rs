//! Customer support portal records

use crate::impl_record;

impl_record!(
    SupportTicket,
    "ticket",
    search: ["title"],
    filter: ["status", "priority"],
    sort: [],
    {
        title: String,
        priority: String,
        assigned_to: String,
    }
);

/// The static ticket collection a support portal loads with
pub fn sample_tickets() -> Vec<SupportTicket> {
    vec![
        SupportTicket::new(
            "open".to_string(),
            "Payment Issue".to_string(),
            "high".to_string(),
            "John Doe".to_string(),
        ),
        SupportTicket::new(
            "closed".to_string(),
            "Order Status".to_string(),
            "medium".to_string(),
            "Jane Smith".to_string(),
        ),
        SupportTicket::new(
            "pending".to_string(),
            "Shipping Inquiry".to_string(),
            "low".to_string(),
            "Alice Johnson".to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::Criteria;
    use crate::core::pipeline::{Collection, apply};
    use crate::core::record::Record;

    #[test]
    fn test_sidebar_search_narrows_by_title() {
        let tickets = sample_tickets();
        let results = apply(&tickets, &Criteria::new().with_query("pay"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Payment Issue");
    }

    #[test]
    fn test_assigned_to_is_not_searchable() {
        let tickets = sample_tickets();
        let results = apply(&tickets, &Criteria::new().with_query("jane"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_priority_selector() {
        let collection: Collection<SupportTicket> = sample_tickets().into_iter().collect();
        let results = collection.apply(&Criteria::new().with_selector("priority", "high"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status(), "open");
    }

    #[test]
    fn test_no_sortable_fields_declared() {
        assert!(SupportTicket::sortable_fields().is_empty());
    }
}
