use bevy::prelude::*;

/// A stack of one item kind. An empty id or zero quantity counts as "no item".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStack {
    pub item_id: String,
    pub quantity: u32,
}

impl ItemStack {
    pub fn of(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_id.is_empty() || self.quantity == 0
    }
}

/// What an entity is carrying. The active hotbar slot is the held item that
/// combat systems (lifesteal included) care about.
#[derive(Component, Debug, Clone, Default)]
pub struct Equipment {
    pub hotbar: Vec<ItemStack>,
    pub active_slot: usize,
}

impl Equipment {
    /// Equipment with a single held item in the active slot.
    pub fn holding(item_id: &str) -> Self {
        Self {
            hotbar: vec![ItemStack::of(item_id)],
            active_slot: 0,
        }
    }

    /// The currently held item, or `None` for an empty or out-of-range slot.
    pub fn active_item(&self) -> Option<&ItemStack> {
        self.hotbar
            .get(self.active_slot)
            .filter(|stack| !stack.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hotbar_holds_nothing() {
        assert!(Equipment::default().active_item().is_none());
    }

    #[test]
    fn zero_quantity_stack_counts_as_empty() {
        let equipment = Equipment {
            hotbar: vec![ItemStack {
                item_id: "items/dagger_basic".into(),
                quantity: 0,
            }],
            active_slot: 0,
        };
        assert!(equipment.active_item().is_none());
    }

    #[test]
    fn holding_exposes_the_active_item() {
        let equipment = Equipment::holding("items/dagger_basic");
        assert_eq!(
            equipment.active_item().map(|stack| stack.item_id.as_str()),
            Some("items/dagger_basic")
        );
    }

    #[test]
    fn out_of_range_slot_holds_nothing() {
        let equipment = Equipment {
            hotbar: vec![ItemStack::of("items/sword_basic")],
            active_slot: 3,
        };
        assert!(equipment.active_item().is_none());
    }
}
