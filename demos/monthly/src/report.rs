//! Plain-text tables for a solved plan.

use sk_catalog::{Catalog, NUM_EXPEDS, NUM_SHOP_ITEMS};
use sk_core::{ExpedId, PlanParams, Resource, ShopItemId};
use sk_opt::Plan;

pub fn print_plan(plan: &Plan, params: &PlanParams) {
    println!("=== senka plan: {} days ===", params.days);
    println!(
        "Active {} h | inactive {} h | rest {} h | budget {}",
        params.active_hours, params.inactive_hours, params.rest_hours, params.max_money
    );
    println!("Reward: {:.2} (special {:.2})", plan.reward, params.special);
    println!();

    print_actions(plan);
    print_expeditions(plan);
    print_shop(plan);
    print_ledger(plan);
}

fn print_actions(plan: &Plan) {
    println!("{:<16} {:>10}", "Action", "Runs");
    println!("{}", "-".repeat(27));
    for (name, runs) in plan.actions() {
        println!("{name:<16} {runs:>10.2}");
    }
    println!();
}

fn print_expeditions(plan: &Plan) {
    let catalog = Catalog::standard();
    let alloc = &plan.allocation;

    println!(
        "{:<6} {:>6} {:>10} {:>10} {:>10} {:>6}",
        "Exped", "Hours", "Active", "Inactive", "Total", "Sleep"
    );
    println!("{}", "-".repeat(53));
    for e in ExpedId::range(NUM_EXPEDS) {
        let i = e.index();
        if alloc.run[i] == 0.0 && alloc.off[i] == 0.0 && alloc.sleep[i] == 0.0 {
            continue;
        }
        println!(
            "{:<6} {:>6.2} {:>10.2} {:>10.2} {:>10.2} {:>6.2}",
            Catalog::exped_label(e),
            catalog.duration(e),
            alloc.run[i],
            alloc.off[i],
            plan.expedition_total(e),
            alloc.sleep[i],
        );
    }
    println!();
}

fn print_shop(plan: &Plan) {
    let bought: Vec<_> = ShopItemId::range(NUM_SHOP_ITEMS)
        .filter(|s| plan.allocation.shop[s.index()] > 0.0)
        .collect();
    if bought.is_empty() {
        return;
    }
    println!("{:<20} {:>8}", "Shop item", "Units");
    println!("{}", "-".repeat(29));
    for s in bought {
        println!("{:<20} {:>8.2}", Catalog::shop_label(s), plan.allocation.shop[s.index()]);
    }
    println!();
}

fn print_ledger(plan: &Plan) {
    print!("{:<10}", "");
    for r in Resource::DISPLAYED {
        print!(" {:>12}", r.as_str());
    }
    println!();
    println!("{}", "-".repeat(10 + 13 * Resource::DISPLAYED.len()));

    let rows = std::iter::once(("offset", &plan.ledger.offset)).chain(plan.ledger.rows());
    for (label, values) in rows {
        print!("{label:<10}");
        for v in values {
            print!(" {v:>12.2}");
        }
        println!();
    }
}
