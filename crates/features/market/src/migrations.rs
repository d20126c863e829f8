use tln_database::Migration;
use tln_domain::constants::MARKET;

/// Schema owned by the markets slice, in application order.
///
/// `market_name_unique` closes the gap between the name check and the write
/// of the create workflow: a concurrent duplicate is rejected by the store.
pub const MIGRATIONS: &[Migration] = &[
    Migration::new(MARKET, "0001", include_str!("../migrations/0001_provider.surql")),
    Migration::new(MARKET, "0002", include_str!("../migrations/0002_market.surql")),
];
