//! Position of every decision variable in the flat variable vector.
//!
//! ```text
//! [ action × N | run × 16 | off × 16 | sleep × 16 | shop × 6 ]
//! ```

use std::ops::Range;

use sk_catalog::{NUM_EXPEDS, NUM_SHOP_ITEMS};
use sk_core::{ActionId, ExpedId, ExpedMode, ShopItemId};

use crate::VarId;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarLayout {
    actions: usize,
}

impl VarLayout {
    pub fn new(actions: usize) -> Self {
        Self { actions }
    }

    #[inline]
    pub fn num_actions(&self) -> usize {
        self.actions
    }

    /// Total number of decision variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions + 3 * NUM_EXPEDS + NUM_SHOP_ITEMS
    }

    /// Never true: the expedition and shop blocks are always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn action_range(&self) -> Range<usize> {
        0..self.actions
    }

    pub fn exped_range(&self, mode: ExpedMode) -> Range<usize> {
        let block = match mode {
            ExpedMode::Run   => 0,
            ExpedMode::Off   => 1,
            ExpedMode::Sleep => 2,
        };
        let start = self.actions + block * NUM_EXPEDS;
        start..start + NUM_EXPEDS
    }

    pub fn shop_range(&self) -> Range<usize> {
        let start = self.actions + 3 * NUM_EXPEDS;
        start..start + NUM_SHOP_ITEMS
    }

    #[inline]
    pub fn action(&self, id: ActionId) -> VarId {
        debug_assert!(id.index() < self.actions);
        VarId(id.0)
    }

    #[inline]
    pub fn exped(&self, mode: ExpedMode, id: ExpedId) -> VarId {
        VarId((self.exped_range(mode).start + id.index()) as u32)
    }

    #[inline]
    pub fn shop(&self, id: ShopItemId) -> VarId {
        VarId((self.shop_range().start + id.index()) as u32)
    }
}
