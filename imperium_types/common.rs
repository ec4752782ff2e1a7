use serde::{Deserialize, Serialize};

/// Gold, wood and stone, in this order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup(pub u32, pub u32, pub u32);

impl ResourceGroup {
    pub const fn new(gold: u32, wood: u32, stone: u32) -> Self {
        Self(gold, wood, stone)
    }

    pub fn gold(&self) -> u32 {
        self.0
    }
    pub fn wood(&self) -> u32 {
        self.1
    }
    pub fn stone(&self) -> u32 {
        self.2
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0 && self.1 == 0 && self.2 == 0
    }

    /// Whether every component is at least the one in `other`.
    pub fn covers(&self, other: &ResourceGroup) -> bool {
        self.0 >= other.0 && self.1 >= other.1 && self.2 >= other.2
    }
}

impl core::ops::Add for ResourceGroup {
    type Output = ResourceGroup;

    fn add(self, rhs: ResourceGroup) -> Self::Output {
        ResourceGroup(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

impl core::ops::Mul<u32> for ResourceGroup {
    type Output = ResourceGroup;

    fn mul(self, rhs: u32) -> Self::Output {
        ResourceGroup(
            self.0.saturating_mul(rhs),
            self.1.saturating_mul(rhs),
            self.2.saturating_mul(rhs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_group_is_zero() {
        assert!(ResourceGroup::new(0, 0, 0).is_zero());
        assert!(ResourceGroup::default().is_zero());
        assert!(!ResourceGroup::new(0, 0, 1).is_zero());
    }

    #[test]
    fn test_add_saturates() {
        let full = ResourceGroup::new(u32::MAX, 10, 0);
        assert_eq!(
            full + ResourceGroup::new(1, 5, 5),
            ResourceGroup::new(u32::MAX, 15, 5)
        );
    }

    #[test]
    fn test_resource_group_scales_linearly() {
        let unit = ResourceGroup::new(50, 30, 20);
        assert_eq!(unit * 1, unit);
        assert_eq!(unit * 3, ResourceGroup::new(150, 90, 60));
    }

    #[test]
    fn test_covers_requires_every_component() {
        let stock = ResourceGroup::new(100, 50, 30);
        assert!(stock.covers(&ResourceGroup::new(100, 50, 30)));
        assert!(!stock.covers(&ResourceGroup::new(100, 50, 31)));
        assert!(!stock.covers(&ResourceGroup::new(101, 0, 0)));
    }
}
