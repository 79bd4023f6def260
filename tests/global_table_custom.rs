//! Custom global table installed before first use. Runs in its own process
//! because the global table can only be set once.

use arpa_respell::{convert, SymbolTable, TableError};

#[test]
fn custom_table_is_adopted_then_locked() {
    let custom = "[mappings]\nK = \"q\"\nAE1 = \"ă1\"\nT = \"t\"\n".to_string();
    SymbolTable::init_custom(custom).unwrap();

    assert_eq!(SymbolTable::global().get("K"), Some("q"));
    assert_eq!(SymbolTable::global().len(), 3);
    assert_eq!(convert("K AE1 T").unwrap(), "ˈQĂT");

    let err = SymbolTable::init_custom("[mappings]\nK = \"c\"\n".to_string()).unwrap_err();
    assert_eq!(err, TableError::AlreadyInitialized);
    assert_eq!(SymbolTable::global().get("K"), Some("q"));
}
