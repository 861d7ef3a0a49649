use parcelwire::constants::{
    FIRST_CALL_TRANSACTION, GET_INTERFACE_HASH_TRANSACTION, GET_INTERFACE_VERSION_TRANSACTION,
    INTERFACE_TRANSACTION, LAST_CALL_TRANSACTION, MAX_TRANSACTION_ID, PING_TRANSACTION,
};
use parcelwire_rpc_service::{
    InterfaceIdentity, MAX_METHOD_OFFSET, RpcInterface, call_transaction,
    carries_interface_token, is_method_transaction, meta_transaction_name, rpc_transaction_code,
};

struct Thermostat;

impl RpcInterface for Thermostat {
    const DESCRIPTOR: &'static str = "test.IThermostat";
    const VERSION: i32 = 7;
    const HASH: &'static str = "notfrozen";
}

#[test]
fn test_reserved_codes_sit_at_the_top_of_the_range() {
    assert_eq!(GET_INTERFACE_VERSION_TRANSACTION, 0x00FF_FFFF);
    assert_eq!(GET_INTERFACE_HASH_TRANSACTION, 0x00FF_FFFE);
    assert_eq!(GET_INTERFACE_VERSION_TRANSACTION, LAST_CALL_TRANSACTION);
    assert_eq!(
        GET_INTERFACE_VERSION_TRANSACTION,
        FIRST_CALL_TRANSACTION + MAX_TRANSACTION_ID
    );
}

#[test]
fn test_method_codes() {
    assert_eq!(rpc_transaction_code!(0), FIRST_CALL_TRANSACTION);
    assert_eq!(call_transaction(41), FIRST_CALL_TRANSACTION + 41);

    let last = call_transaction(MAX_METHOD_OFFSET);
    assert_eq!(last + 1, GET_INTERFACE_HASH_TRANSACTION);
    assert!(is_method_transaction(last));
}

#[test]
#[should_panic(expected = "collides with the reserved meta-transactions")]
fn test_method_offset_cannot_reach_meta_codes() {
    call_transaction(MAX_METHOD_OFFSET + 1);
}

#[test]
fn test_code_classification() {
    assert!(!is_method_transaction(0));
    assert!(!is_method_transaction(GET_INTERFACE_HASH_TRANSACTION));
    assert!(!is_method_transaction(GET_INTERFACE_VERSION_TRANSACTION));
    assert!(!is_method_transaction(INTERFACE_TRANSACTION));

    assert!(carries_interface_token(FIRST_CALL_TRANSACTION));
    assert!(carries_interface_token(GET_INTERFACE_VERSION_TRANSACTION));
    assert!(carries_interface_token(GET_INTERFACE_HASH_TRANSACTION));
    assert!(!carries_interface_token(INTERFACE_TRANSACTION));
    assert!(!carries_interface_token(PING_TRANSACTION));
}

#[test]
fn test_meta_names() {
    assert_eq!(
        meta_transaction_name(GET_INTERFACE_HASH_TRANSACTION),
        Some("getInterfaceHash")
    );
    assert_eq!(
        meta_transaction_name(INTERFACE_TRANSACTION),
        Some("getInterfaceDescriptor")
    );
    assert_eq!(meta_transaction_name(FIRST_CALL_TRANSACTION), None);
}

#[test]
fn test_identity() {
    assert_eq!(
        Thermostat::identity(),
        InterfaceIdentity {
            descriptor: "test.IThermostat",
            version: 7,
            hash: "notfrozen",
        }
    );
}
