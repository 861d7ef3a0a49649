use parcelwire::{
    ExceptionCode, Parcel, ParcelError, Status, TransactionCode, TransactionFlags, Transport,
    TransportError,
    constants::{
        FLAG_ONEWAY, GET_INTERFACE_HASH_TRANSACTION, GET_INTERFACE_VERSION_TRANSACTION,
        INTERFACE_TRANSACTION, PING_TRANSACTION,
    },
};
use parcelwire_rpc_service::{RpcInterface, RpcMethod, rpc_transaction_code};
use parcelwire_rpc_service_caller::{BoundInterface, InterfaceCache, RpcCallerError, RpcProxy};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

struct EchoInterface;

impl RpcInterface for EchoInterface {
    const DESCRIPTOR: &'static str = "test.IEcho";
    const VERSION: i32 = 3;
    const HASH: &'static str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4";
}

struct Echo;

impl RpcMethod for Echo {
    type Interface = EchoInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(0);
    const NAME: &'static str = "echo";

    type Input = String;
    type Output = String;

    fn encode_request(input: &String, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_str(input)
    }

    fn decode_request(parcel: &mut Parcel) -> Result<String, ParcelError> {
        parcel.read_non_null_string()
    }

    fn encode_response(output: &String, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_str(output)
    }

    fn decode_response(parcel: &mut Parcel) -> Result<String, ParcelError> {
        parcel.read_non_null_string()
    }
}

struct Notify;

impl RpcMethod for Notify {
    type Interface = EchoInterface;

    const TRANSACTION_CODE: u32 = rpc_transaction_code!(1);
    const NAME: &'static str = "notify";
    const FLAGS: u32 = FLAG_ONEWAY;

    type Input = i32;
    type Output = ();

    fn encode_request(input: &i32, parcel: &mut Parcel) -> Result<(), ParcelError> {
        parcel.write_i32(*input)
    }

    fn decode_request(parcel: &mut Parcel) -> Result<i32, ParcelError> {
        parcel.read_i32()
    }

    fn encode_response(_: &(), _: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }

    fn decode_response(_: &mut Parcel) -> Result<(), ParcelError> {
        Ok(())
    }
}

type Responder =
    Box<dyn Fn(&mut Parcel, &mut Parcel) -> Result<bool, TransportError> + Send + Sync>;

/// A hand-driven remote: each code is answered by a scripted responder,
/// and every transaction is recorded.
#[derive(Default)]
struct FakeRemote {
    responders: HashMap<TransactionCode, Responder>,
    calls: Mutex<Vec<(TransactionCode, TransactionFlags)>>,
}

impl FakeRemote {
    fn on<F>(mut self, code: TransactionCode, responder: F) -> Self
    where
        F: Fn(&mut Parcel, &mut Parcel) -> Result<bool, TransportError> + Send + Sync + 'static,
    {
        self.responders.insert(code, Box::new(responder));
        self
    }

    fn count(&self, code: TransactionCode) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == code)
            .count()
    }
}

impl Transport for FakeRemote {
    fn transact(
        &self,
        code: TransactionCode,
        data: &Parcel,
        reply: &mut Parcel,
        flags: TransactionFlags,
    ) -> Result<bool, TransportError> {
        self.calls.lock().unwrap().push((code, flags));

        let mut data = Parcel::from_bytes(data.data().to_vec());
        reply.clear();

        let handled = match self.responders.get(&code) {
            Some(responder) => responder(&mut data, reply)?,
            None => false,
        };

        reply.set_data_position(0)?;
        Ok(handled)
    }
}

fn echo_remote() -> FakeRemote {
    FakeRemote::default()
        .on(INTERFACE_TRANSACTION, |_, reply| {
            reply.write_str(EchoInterface::DESCRIPTOR)?;
            Ok(true)
        })
        .on(Echo::TRANSACTION_CODE, |data, reply| {
            data.enforce_interface(EchoInterface::DESCRIPTOR)?;
            let text = data.read_non_null_string()?;
            reply.write_no_exception()?;
            reply.write_str(&text.to_uppercase())?;
            Ok(true)
        })
        .on(GET_INTERFACE_VERSION_TRANSACTION, |data, reply| {
            data.enforce_interface(EchoInterface::DESCRIPTOR)?;
            reply.write_no_exception()?;
            reply.write_i32(EchoInterface::VERSION)?;
            Ok(true)
        })
        .on(GET_INTERFACE_HASH_TRANSACTION, |data, reply| {
            data.enforce_interface(EchoInterface::DESCRIPTOR)?;
            reply.write_no_exception()?;
            reply.write_str(EchoInterface::HASH)?;
            Ok(true)
        })
}

#[test]
fn test_call_writes_token_and_decodes_result() {
    let proxy = RpcProxy::<EchoInterface>::new(Arc::new(echo_remote()));

    assert_eq!(proxy.call::<Echo>(&"hello".to_string()).unwrap(), "HELLO");
}

#[test]
fn test_unknown_transaction_is_unimplemented() {
    let proxy = RpcProxy::<EchoInterface>::new(Arc::new(FakeRemote::default()));

    assert_eq!(
        proxy.call::<Echo>(&"hello".to_string()),
        Err(RpcCallerError::Unimplemented { method: "echo" })
    );
    assert_eq!(
        proxy.ping(),
        Err(RpcCallerError::Unimplemented { method: "ping" })
    );
}

#[test]
fn test_remote_exception_is_returned_as_status() {
    let remote = FakeRemote::default().on(Echo::TRANSACTION_CODE, |_, reply| {
        reply.write_exception(&Status::new_exception(
            ExceptionCode::IllegalArgument,
            "too loud",
        ))?;
        Ok(true)
    });
    let proxy = RpcProxy::<EchoInterface>::new(Arc::new(remote));

    match proxy.call::<Echo>(&"hey".to_string()) {
        Err(RpcCallerError::Remote(status)) => {
            assert_eq!(status.exception_code(), ExceptionCode::IllegalArgument);
            assert_eq!(status.message(), Some("too loud"));
        }
        other => panic!("expected a remote exception, got {:?}", other),
    }
}

#[test]
fn test_transport_failures_are_surfaced() {
    let remote = FakeRemote::default()
        .on(Echo::TRANSACTION_CODE, |_, _| Err(TransportError::DeadObject))
        .on(PING_TRANSACTION, |_, _| {
            Err(TransportError::Parcel(ParcelError::UnexpectedTrailingData {
                remaining: 8,
            }))
        });
    let proxy = RpcProxy::<EchoInterface>::new(Arc::new(remote));

    assert_eq!(
        proxy.call::<Echo>(&"x".to_string()),
        Err(RpcCallerError::Transport(TransportError::DeadObject))
    );
    // A protocol violation keeps its name on the caller side.
    assert_eq!(
        proxy.ping(),
        Err(RpcCallerError::Parcel(
            ParcelError::UnexpectedTrailingData { remaining: 8 }
        ))
    );
}

#[test]
fn test_truncated_reply_is_a_parcel_error() {
    let remote = FakeRemote::default().on(Echo::TRANSACTION_CODE, |_, reply| {
        reply.write_no_exception()?;
        Ok(true)
    });
    let proxy = RpcProxy::<EchoInterface>::new(Arc::new(remote));

    assert!(matches!(
        proxy.call::<Echo>(&"x".to_string()),
        Err(RpcCallerError::Parcel(ParcelError::NotEnoughData { .. }))
    ));
}

#[test]
fn test_oneway_call_sets_flag_and_skips_reply() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let remote = Arc::new(FakeRemote::default().on(Notify::TRANSACTION_CODE, {
        let seen = Arc::clone(&seen);
        move |data, _| {
            data.enforce_interface(EchoInterface::DESCRIPTOR)?;
            seen.lock().unwrap().push(data.read_i32()?);
            Ok(true)
        }
    }));
    let proxy = RpcProxy::<EchoInterface>::new(remote.clone());

    proxy.call_oneway::<Notify>(&7).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![7]);
    assert_eq!(
        *remote.calls.lock().unwrap(),
        vec![(Notify::TRANSACTION_CODE, FLAG_ONEWAY)]
    );
}

#[test]
fn test_version_and_hash_take_one_round_trip_each() {
    let remote = Arc::new(echo_remote());
    let proxy = RpcProxy::<EchoInterface>::new(remote.clone());

    for _ in 0..3 {
        assert_eq!(proxy.get_interface_version().unwrap(), 3);
        assert_eq!(proxy.get_interface_hash().unwrap(), EchoInterface::HASH);
    }

    assert_eq!(remote.count(GET_INTERFACE_VERSION_TRANSACTION), 1);
    assert_eq!(remote.count(GET_INTERFACE_HASH_TRANSACTION), 1);
}

#[test]
fn test_failed_version_fetch_is_not_cached() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let remote = Arc::new(FakeRemote::default().on(GET_INTERFACE_VERSION_TRANSACTION, {
        let attempts = Arc::clone(&attempts);
        move |_, reply| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(TransportError::FailedTransaction("busy".to_string()));
            }
            reply.write_no_exception()?;
            reply.write_i32(5)?;
            Ok(true)
        }
    }));
    let proxy = RpcProxy::<EchoInterface>::new(remote.clone());

    assert!(proxy.get_interface_version().is_err());
    assert_eq!(proxy.get_interface_version().unwrap(), 5);
    assert_eq!(proxy.get_interface_version().unwrap(), 5);
    assert_eq!(remote.count(GET_INTERFACE_VERSION_TRANSACTION), 2);
}

#[test]
fn test_concurrent_first_calls_share_one_fetch() {
    let remote = Arc::new(FakeRemote::default().on(
        GET_INTERFACE_VERSION_TRANSACTION,
        |_, reply| {
            thread::sleep(Duration::from_millis(20));
            reply.write_no_exception()?;
            reply.write_i32(11)?;
            Ok(true)
        },
    ));
    let proxy = Arc::new(RpcProxy::<EchoInterface>::new(remote.clone()));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let proxy = Arc::clone(&proxy);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                proxy.get_interface_version().unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 11);
    }
    assert_eq!(remote.count(GET_INTERFACE_VERSION_TRANSACTION), 1);
}

#[test]
fn test_panicking_fetch_does_not_wedge_the_proxy() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let remote = Arc::new(echo_remote().on(GET_INTERFACE_VERSION_TRANSACTION, {
        let attempts = Arc::clone(&attempts);
        move |_, reply| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("transport thread died");
            }
            reply.write_no_exception()?;
            reply.write_i32(EchoInterface::VERSION)?;
            Ok(true)
        }
    }));
    let proxy = RpcProxy::<EchoInterface>::new(remote.clone());

    let first = panic::catch_unwind(AssertUnwindSafe(|| proxy.get_interface_version()));
    assert!(first.is_err());

    assert_eq!(proxy.get_interface_version().unwrap(), EchoInterface::VERSION);
    assert_eq!(proxy.get_interface_hash().unwrap(), EchoInterface::HASH);
    assert_eq!(proxy.call::<Echo>(&"again".to_string()).unwrap(), "AGAIN");
    assert_eq!(remote.count(GET_INTERFACE_VERSION_TRANSACTION), 2);
}

#[test]
fn test_cached_hash_is_readable_during_version_fetch() {
    let entered = Arc::new(Barrier::new(2));
    let release = Arc::new(Barrier::new(2));
    let remote = Arc::new(echo_remote().on(GET_INTERFACE_VERSION_TRANSACTION, {
        let entered = Arc::clone(&entered);
        let release = Arc::clone(&release);
        move |_, reply| {
            entered.wait();
            release.wait();
            reply.write_no_exception()?;
            reply.write_i32(EchoInterface::VERSION)?;
            Ok(true)
        }
    }));
    let proxy = Arc::new(RpcProxy::<EchoInterface>::new(remote.clone()));
    assert_eq!(proxy.get_interface_hash().unwrap(), EchoInterface::HASH);

    let fetching = {
        let proxy = Arc::clone(&proxy);
        thread::spawn(move || proxy.get_interface_version())
    };

    // The version round trip is now parked inside the transport
    entered.wait();
    assert_eq!(proxy.get_interface_hash().unwrap(), EchoInterface::HASH);
    assert_eq!(remote.count(GET_INTERFACE_HASH_TRANSACTION), 1);
    release.wait();

    assert_eq!(fetching.join().unwrap().unwrap(), EchoInterface::VERSION);
    assert_eq!(remote.count(GET_INTERFACE_VERSION_TRANSACTION), 1);
}

#[test]
fn test_bind_checks_remote_descriptor() {
    assert!(RpcProxy::<EchoInterface>::bind(Arc::new(echo_remote())).is_ok());

    let impostor = FakeRemote::default().on(INTERFACE_TRANSACTION, |_, reply| {
        reply.write_str("test.IOther")?;
        Ok(true)
    });
    assert_eq!(
        RpcProxy::<EchoInterface>::bind(Arc::new(impostor)).unwrap_err(),
        RpcCallerError::InterfaceMismatch {
            expected: EchoInterface::DESCRIPTOR,
            actual: Some("test.IOther".to_string()),
        }
    );
}

#[test]
fn test_ping() {
    let remote = FakeRemote::default().on(PING_TRANSACTION, |_, _| Ok(true));
    let proxy = RpcProxy::<EchoInterface>::new(Arc::new(remote));

    assert_eq!(proxy.ping(), Ok(()));
}

trait Shout: Send + Sync {
    fn shout(&self, text: &str) -> Result<String, RpcCallerError>;
}

struct LocalShout;

impl Shout for LocalShout {
    fn shout(&self, text: &str) -> Result<String, RpcCallerError> {
        Ok(format!("{}!", text))
    }
}

struct RemoteShout(RpcProxy<EchoInterface>);

impl Shout for RemoteShout {
    fn shout(&self, text: &str) -> Result<String, RpcCallerError> {
        self.0.call::<Echo>(&text.to_string())
    }
}

fn resolve_shout(binding: BoundInterface<dyn Shout, EchoInterface>) -> Arc<dyn Shout> {
    binding.resolve(|proxy| -> Arc<dyn Shout> { Arc::new(RemoteShout(proxy)) })
}

#[test]
fn test_bound_interface_prefers_local() {
    let remote = Arc::new(echo_remote());

    let local: Arc<dyn Shout> = Arc::new(LocalShout);
    let binding = BoundInterface::<dyn Shout, EchoInterface>::attach(Some(local), remote.clone());
    assert!(binding.is_local());
    assert_eq!(resolve_shout(binding).shout("hi").unwrap(), "hi!");

    let binding = BoundInterface::<dyn Shout, EchoInterface>::attach(None, remote.clone());
    assert!(!binding.is_local());
    assert_eq!(resolve_shout(binding).shout("hi").unwrap(), "HI");
    assert_eq!(remote.count(Echo::TRANSACTION_CODE), 1);
}

#[test]
fn test_into_status() {
    let status = Status::new_service_specific_error(4, "nope");
    assert_eq!(RpcCallerError::Remote(status.clone()).into_status(), status);

    assert_eq!(
        RpcCallerError::Unimplemented { method: "echo" }
            .into_status()
            .exception_code(),
        ExceptionCode::UnsupportedOperation
    );
    assert_eq!(
        RpcCallerError::Transport(TransportError::DeadObject)
            .into_status()
            .exception_code(),
        ExceptionCode::TransactionFailed
    );
    assert_eq!(
        RpcCallerError::Parcel(ParcelError::UnexpectedNull)
            .into_status()
            .exception_code(),
        ExceptionCode::NullPointer
    );
}

#[test]
fn test_interface_cache_fetches_once() {
    let cache = InterfaceCache::default();
    let mut fetches = 0;

    for _ in 0..3 {
        let version = cache.version_or_fetch(|| {
            fetches += 1;
            Ok::<_, ()>(9)
        });
        assert_eq!(version, Ok(9));
    }

    assert_eq!(fetches, 1);
    assert_eq!(cache.version(), Some(9));
    assert_eq!(cache.hash(), None);
}
