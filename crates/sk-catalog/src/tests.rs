//! Unit tests for the constant catalog.

use sk_core::{ExpedId, ExpedMode, GroupId, Resource, ShopItemId};

use crate::{Catalog, NUM_EXPEDS, NUM_GROUPS, SHORT_EXPEDS};

#[cfg(test)]
mod tables {
    use super::*;

    #[test]
    fn off_shares_first_five_rows_with_run() {
        let c = Catalog::standard();
        for r in 0..5 {
            assert_eq!(c.off_yield[r], c.run_yield[r]);
        }
        assert!(c.off_yield[Resource::Time.index()].iter().all(|&v| v == 0.0));
        assert!(c.run_yield[Resource::Time.index()].iter().all(|&v| v < 0.0));
    }

    #[test]
    fn sleep_time_row_is_zero() {
        let c = Catalog::standard();
        assert!(c.sleep_yield[Resource::Time.index()].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn spot_values() {
        let c = Catalog::standard();
        assert_eq!(c.run_yield[1][1], 360.0);
        assert_eq!(c.sleep_yield[0][15], 684.0);
        assert_eq!(c.shop_yield[2][5], 1500.0);
        assert_eq!(c.shop_cost, [300.0, 100.0, 300.0, 300.0, 300.0, 700.0]);
        assert!((c.duration(ExpedId(2)) - 55.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn standard_is_shared() {
        assert!(std::ptr::eq(Catalog::standard(), Catalog::standard()));
    }
}

#[cfg(test)]
mod accessors {
    use super::*;

    #[test]
    fn exped_yield_reads_a_column() {
        let c = Catalog::standard();
        let v = c.exped_yield(ExpedMode::Run, ExpedId(0));
        assert_eq!(v[Resource::Fuel], -50.0);
        assert_eq!(v[Resource::Ammo], 240.0);
        assert_eq!(v[Resource::Time], -20.0);
        assert_eq!(c.exped_yield(ExpedMode::Off, ExpedId(0))[Resource::Time], 0.0);
    }

    #[test]
    fn groups_are_disjoint_pairs() {
        let c = Catalog::standard();
        let mut seen = [0u8; NUM_EXPEDS];
        for g in GroupId::range(NUM_GROUPS) {
            let members: Vec<ExpedId> = c.group_members(g).collect();
            assert_eq!(members.len(), 2, "{g} should be a pair");
            for m in members {
                seen[m.index()] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n <= 1));
        assert_eq!(seen[2], 0);
        assert_eq!(seen[3], 0);
    }

    #[test]
    fn sleep_eligibility_uses_strict_bound() {
        let c = Catalog::standard();
        // 4-hour expedition with a 4-hour rest: ineligible.
        assert!(!c.sleep_eligible(ExpedId(6), 4.0));
        assert!(c.sleep_eligible(ExpedId(6), 4.5));
        assert!(c.sleep_eligible(ExpedId(0), 1.0));
    }

    #[test]
    fn shop_accessors() {
        let c = Catalog::standard();
        assert_eq!(c.shop_yield(ShopItemId(3))[Resource::Bucket], 3.0);
        assert_eq!(c.shop_cost(ShopItemId(5)), 700.0);
        assert_eq!(Catalog::shop_label(ShopItemId(0)), "tanker requisition");
    }

    #[test]
    fn without_yields_keeps_structure() {
        let z = Catalog::standard().without_yields();
        assert!(z.run_yield.iter().flatten().all(|&v| v == 0.0));
        assert!(z.shop_yield.iter().flatten().all(|&v| v == 0.0));
        assert_eq!(z.duration_hours, Catalog::standard().duration_hours);
        assert_eq!(z.shop_cost, Catalog::standard().shop_cost);
    }

    #[test]
    fn short_expeditions_are_the_four_shortest_indices() {
        let c = Catalog::standard();
        assert_eq!(SHORT_EXPEDS, 4);
        assert!((0..SHORT_EXPEDS).all(|i| c.duration_hours[i] <= 1.0));
        assert_eq!(Catalog::exped_label(ExpedId(3)), "E01b");
    }
}
