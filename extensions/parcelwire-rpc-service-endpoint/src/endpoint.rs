use crate::error::RpcServiceEndpointError;
use parcelwire::{
    ExceptionCode, Parcel, ParcelError, Status, TransactionCode, TransactionFlags, Transport,
    TransportError,
    constants::{
        FLAG_ONEWAY, GET_INTERFACE_HASH_TRANSACTION, GET_INTERFACE_VERSION_TRANSACTION,
        INTERFACE_TRANSACTION, PING_TRANSACTION,
    },
};
use parcelwire_rpc_service::{
    RpcInterface, RpcMethod, carries_interface_token, is_method_transaction,
    meta_transaction_name,
};
use std::any::Any;
use std::collections::{HashMap, hash_map::Entry};
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

/// A type-erased method handler: decodes the arguments from `data`, runs
/// the implementation against the context and writes the reply.
///
/// Returns `Err` only for protocol violations, which abort the transaction.
pub type RpcTransactionHandler<C> =
    Arc<dyn Fn(&C, &mut Parcel, &mut Parcel) -> Result<(), ParcelError> + Send + Sync>;

struct RegisteredHandler<C> {
    name: &'static str,
    handler: RpcTransactionHandler<C>,
}

impl<C> Clone for RegisteredHandler<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            handler: Arc::clone(&self.handler),
        }
    }
}

/// Server-side dispatcher for interface `I`, routing transactions to
/// handlers registered per method and running them against a shared
/// context `C` (usually the service implementation).
pub struct RpcServiceEndpoint<I, C>
where
    I: RpcInterface,
    C: Send + Sync + 'static,
{
    context: C,
    handlers: Mutex<HashMap<TransactionCode, RegisteredHandler<C>>>,
    _interface: PhantomData<fn() -> I>,
}

impl<I, C> RpcServiceEndpoint<I, C>
where
    I: RpcInterface,
    C: Send + Sync + 'static,
{
    pub fn new(context: C) -> Self {
        Self {
            context,
            handlers: Mutex::new(HashMap::new()),
            _interface: PhantomData,
        }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Registers the implementation of method `M`.
    ///
    /// The handler receives the decoded arguments and answers either with
    /// the method's output or with a [`Status`] that is sent back as an
    /// exception envelope.
    pub fn register<M, F>(&self, handler: F) -> Result<(), RpcServiceEndpointError>
    where
        M: RpcMethod<Interface = I> + 'static,
        F: Fn(&C, M::Input) -> Result<M::Output, Status> + Send + Sync + 'static,
    {
        let code = M::TRANSACTION_CODE;

        if !is_method_transaction(code) {
            return Err(RpcServiceEndpointError::TransactionCodeOutOfRange {
                code,
                name: M::NAME,
            });
        }

        let mut handlers = self
            .handlers
            .lock()
            .map_err(|_| RpcServiceEndpointError::LockPoisoned)?;

        match handlers.entry(code) {
            Entry::Occupied(_) => Err(RpcServiceEndpointError::DuplicateTransaction {
                code,
                name: M::NAME,
            }),
            Entry::Vacant(entry) => {
                let wrapped = move |ctx: &C, data: &mut Parcel, reply: &mut Parcel| {
                    dispatch_method::<M, C, F>(&handler, ctx, data, reply)
                };
                entry.insert(RegisteredHandler {
                    name: M::NAME,
                    handler: Arc::new(wrapped),
                });
                tracing::debug!(
                    descriptor = I::DESCRIPTOR,
                    code,
                    method = M::NAME,
                    "registered handler"
                );
                Ok(())
            }
        }
    }

    /// Names a transaction code for diagnostics.
    pub fn transaction_name(&self, code: TransactionCode) -> Option<&'static str> {
        meta_transaction_name(code).or_else(|| {
            self.handlers
                .lock()
                .ok()
                .and_then(|handlers| handlers.get(&code).map(|h| h.name))
        })
    }

    /// Dispatches one incoming transaction.
    ///
    /// `data` is read from its current position. Returns `Ok(false)` for
    /// codes this endpoint does not know, leaving `reply` untouched.
    pub fn on_transact(
        &self,
        code: TransactionCode,
        data: &mut Parcel,
        reply: &mut Parcel,
        flags: TransactionFlags,
    ) -> Result<bool, RpcServiceEndpointError> {
        let oneway = flags & FLAG_ONEWAY != 0;

        if carries_interface_token(code) {
            if let Err(e) = data.enforce_interface(I::DESCRIPTOR) {
                tracing::warn!(code, error = %e, "rejecting transaction for another interface");
                if !oneway {
                    reply.write_exception(&Status::from(e))?;
                }
                return Ok(true);
            }
        }

        match code {
            INTERFACE_TRANSACTION => {
                reply.write_str(I::DESCRIPTOR)?;
                return Ok(true);
            }
            PING_TRANSACTION => return Ok(true),
            GET_INTERFACE_VERSION_TRANSACTION => {
                reply.write_no_exception()?;
                reply.write_i32(I::VERSION)?;
                return Ok(true);
            }
            GET_INTERFACE_HASH_TRANSACTION => {
                reply.write_no_exception()?;
                reply.write_str(I::HASH)?;
                return Ok(true);
            }
            _ => {}
        }

        let registered = self
            .handlers
            .lock()
            .map_err(|_| RpcServiceEndpointError::LockPoisoned)?
            .get(&code)
            .cloned();

        let Some(registered) = registered else {
            tracing::debug!(descriptor = I::DESCRIPTOR, code, "unknown transaction");
            return Ok(false);
        };

        tracing::trace!(code, method = registered.name, oneway, "dispatching");

        if !oneway {
            (registered.handler)(&self.context, data, reply)?;
            return Ok(true);
        }

        // One-way callers never see a reply, so handler failures are only logged.
        let mut scratch = Parcel::new();
        (registered.handler)(&self.context, data, &mut scratch)?;
        scratch.set_data_position(0)?;
        if let Ok(Err(status)) = scratch.read_exception() {
            tracing::warn!(method = registered.name, %status, "one-way handler failed");
        }

        Ok(true)
    }
}

impl<I, C> Transport for RpcServiceEndpoint<I, C>
where
    I: RpcInterface,
    C: Send + Sync + 'static,
{
    /// In-process delivery: the request is read from a private copy
    /// starting at position 0, and the reply is rewound for the caller.
    fn transact(
        &self,
        code: TransactionCode,
        data: &Parcel,
        reply: &mut Parcel,
        flags: TransactionFlags,
    ) -> Result<bool, TransportError> {
        let mut data = Parcel::from_bytes(data.data().to_vec());
        reply.clear();

        let handled = self.on_transact(code, &mut data, reply, flags)?;
        reply.set_data_position(0)?;
        Ok(handled)
    }
}

fn dispatch_method<M, C, F>(
    handler: &F,
    ctx: &C,
    data: &mut Parcel,
    reply: &mut Parcel,
) -> Result<(), ParcelError>
where
    M: RpcMethod,
    F: Fn(&C, M::Input) -> Result<M::Output, Status>,
{
    let decoded = M::decode_request(data)
        .and_then(|input| data.enforce_no_data_avail().map(|()| input));

    let input = match decoded {
        Ok(input) => input,
        Err(e) if e.is_protocol_violation() => {
            tracing::warn!(method = M::NAME, error = %e, "aborting transaction");
            return Err(e);
        }
        Err(e) => {
            tracing::warn!(method = M::NAME, error = %e, "bad arguments");
            return reply.write_exception(&Status::from(e));
        }
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(ctx, input)))
        .unwrap_or_else(|payload| {
            Err(Status::new_exception(
                ExceptionCode::IllegalState,
                format!("handler panicked: {}", panic_message(payload.as_ref())),
            ))
        });

    match outcome {
        Ok(output) => {
            reply.write_no_exception()?;
            M::encode_response(&output, reply)
        }
        Err(status) => {
            tracing::warn!(method = M::NAME, %status, "handler raised");
            reply.write_exception(&status)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}
