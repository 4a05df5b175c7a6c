use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{CreditScore, CustomerId, DecisionReason, LoanId};

/// all events that can be emitted by the origination service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    EligibilityChecked {
        customer_id: CustomerId,
        score: CreditScore,
        approved: bool,
        corrected_rate: Rate,
        timestamp: DateTime<Utc>,
    },
    LoanOriginated {
        loan_id: LoanId,
        customer_id: CustomerId,
        principal: Money,
        annual_rate: Rate,
        monthly_installment: Money,
        timestamp: DateTime<Utc>,
    },
    LoanRejected {
        customer_id: CustomerId,
        score: CreditScore,
        reason: DecisionReason,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_take_events_drains_store() {
        let mut store = EventStore::new();
        store.emit(Event::LoanRejected {
            customer_id: Uuid::new_v4(),
            score: CreditScore::new(0),
            reason: DecisionReason::ScoreTooLow,
            timestamp: Utc::now(),
        });

        assert_eq!(store.events().len(), 1);
        let taken = store.take_events();
        assert_eq!(taken.len(), 1);
        assert!(store.events().is_empty());
    }
}
