//! Process-wide route tables are built exactly once.
//!
//! Kept in its own test binary: the slot is shared by every test in a process.

use admin_routes::{Discovery, RouteError, RouteTableBuilder, RouteTables};

#[test]
fn test_install_once_then_read_only() {
    assert!(RouteTables::global().is_none());

    let builder = RouteTableBuilder::new();
    let tables = builder.build(&Discovery::new()).unwrap();
    let installed = tables.clone().install().unwrap();
    assert_eq!(installed, &tables);

    let second = builder.with_home("/elsewhere").build(&Discovery::new()).unwrap();
    assert!(matches!(second.install(), Err(RouteError::AlreadyInitialized)));

    // The first tables stay in place
    let global = RouteTables::global().unwrap();
    assert_eq!(global.basic()[2].redirect_target(), Some("/dashboard"));
}
