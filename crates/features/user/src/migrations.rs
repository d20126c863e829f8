use tln_database::Migration;
use tln_domain::constants::USER;

pub const MIGRATIONS: &[Migration] =
    &[Migration::new(USER, "0001", include_str!("../migrations/0001_vendor.surql"))];
