use serde::{Deserialize, Serialize};

use imperium_types::{common::ResourceGroup, errors::GameError};

/// Resources a new session starts with.
pub const STARTING_RESOURCES: ResourceGroup = ResourceGroup::new(200, 150, 100);

/// Current stock of gold, wood and stone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    stocks: ResourceGroup,
}

impl ResourceLedger {
    pub fn new(initial: ResourceGroup) -> Self {
        Self { stocks: initial }
    }

    /// Returns a snapshot of the currently stored resources.
    pub fn stored(&self) -> ResourceGroup {
        self.stocks
    }

    pub fn gold(&self) -> u32 {
        self.stocks.gold()
    }

    pub fn wood(&self) -> u32 {
        self.stocks.wood()
    }

    pub fn stone(&self) -> u32 {
        self.stocks.stone()
    }

    /// Checks if the ledger can pay for the given cost.
    pub fn has_enough(&self, cost: &ResourceGroup) -> bool {
        self.stocks.covers(cost)
    }

    /// Adds resources unconditionally.
    pub fn credit(&mut self, amounts: &ResourceGroup) {
        self.stocks = self.stocks + *amounts;
    }

    /// Withdraws all three amounts at once, or nothing at all.
    pub fn debit(&mut self, cost: &ResourceGroup) -> Result<(), GameError> {
        if !self.has_enough(cost) {
            return Err(GameError::NotEnoughResources);
        }
        self.stocks = ResourceGroup::new(
            self.stocks.gold() - cost.gold(),
            self.stocks.wood() - cost.wood(),
            self.stocks.stone() - cost.stone(),
        );
        Ok(())
    }
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self::new(STARTING_RESOURCES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ledger() {
        let ledger = ResourceLedger::default();
        assert_eq!(ledger.gold(), 200);
        assert_eq!(ledger.wood(), 150);
        assert_eq!(ledger.stone(), 100);
    }

    #[test]
    fn test_debit_withdraws_all_components() {
        let mut ledger = ResourceLedger::default();
        ledger.debit(&ResourceGroup::new(80, 40, 20)).unwrap();
        assert_eq!(ledger.stored(), ResourceGroup::new(120, 110, 80));
    }

    #[test]
    fn test_debit_is_atomic() {
        let mut ledger = ResourceLedger::new(ResourceGroup::new(500, 500, 10));
        let result = ledger.debit(&ResourceGroup::new(100, 100, 11));

        assert_eq!(result, Err(GameError::NotEnoughResources));
        assert_eq!(
            ledger.stored(),
            ResourceGroup::new(500, 500, 10),
            "No resource should be withdrawn on a failed debit"
        );
    }

    #[test]
    fn test_debit_exact_amount_leaves_zero() {
        let mut ledger = ResourceLedger::new(ResourceGroup::new(100, 50, 30));
        assert!(ledger.debit(&ResourceGroup::new(100, 50, 30)).is_ok());
        assert!(ledger.stored().is_zero());
        assert!(ledger.debit(&ResourceGroup::new(1, 0, 0)).is_err());
    }

    #[test]
    fn test_credit_adds_unconditionally() {
        let mut ledger = ResourceLedger::new(ResourceGroup::default());
        ledger.credit(&ResourceGroup::new(5, 10, 15));
        ledger.credit(&ResourceGroup::new(5, 0, 0));
        assert_eq!(ledger.stored(), ResourceGroup::new(10, 10, 15));
    }
}
