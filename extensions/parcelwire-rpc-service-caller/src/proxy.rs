use crate::{InterfaceCache, RpcCallerError};
use parcelwire::{
    Parcel, ParcelError, ParcelPool, TransactionCode, TransactionFlags, Transport,
    constants::{
        FLAG_NONE, FLAG_ONEWAY, GET_INTERFACE_HASH_TRANSACTION, GET_INTERFACE_VERSION_TRANSACTION,
        INTERFACE_TRANSACTION, PING_TRANSACTION,
    },
    utils::now,
};
use parcelwire_rpc_service::{
    GET_INTERFACE_HASH_NAME, GET_INTERFACE_VERSION_NAME, INTERFACE_DESCRIPTOR_NAME, PING_NAME,
    RpcInterface, RpcMethod,
};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Correlates the trace lines of one call.
static NEXT_CALL_ID: AtomicU32 = AtomicU32::new(0);

/// Client-side stand-in for a remote object implementing interface `I`.
///
/// Every call writes the interface token and the method's arguments into a
/// pooled request parcel, hands it to the [`Transport`], and decodes the
/// exception envelope and return value from the reply. Both parcels go back
/// to the pool however the call ends.
pub struct RpcProxy<I: RpcInterface> {
    remote: Arc<dyn Transport>,
    pool: ParcelPool,
    cache: InterfaceCache,
    _interface: PhantomData<fn() -> I>,
}

impl<I: RpcInterface> fmt::Debug for RpcProxy<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcProxy")
            .field("descriptor", &I::DESCRIPTOR)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<I: RpcInterface> RpcProxy<I> {
    /// Wraps `remote` without checking what it implements.
    pub fn new(remote: Arc<dyn Transport>) -> Self {
        Self {
            remote,
            pool: ParcelPool::default(),
            cache: InterfaceCache::default(),
            _interface: PhantomData,
        }
    }

    /// Wraps `remote` after confirming it answers to `I`'s descriptor.
    pub fn bind(remote: Arc<dyn Transport>) -> Result<Self, RpcCallerError> {
        let proxy = Self::new(remote);
        let actual = proxy.remote_descriptor()?;

        if actual.as_deref() != Some(I::DESCRIPTOR) {
            tracing::warn!(
                expected = I::DESCRIPTOR,
                ?actual,
                "refusing to bind proxy to a foreign interface"
            );
            return Err(RpcCallerError::InterfaceMismatch {
                expected: I::DESCRIPTOR,
                actual,
            });
        }

        Ok(proxy)
    }

    pub fn remote(&self) -> &Arc<dyn Transport> {
        &self.remote
    }

    /// Invokes a two-way method and returns its decoded result.
    ///
    /// Fails with [`RpcCallerError::Unimplemented`] if the remote does not
    /// know the method, and with [`RpcCallerError::Remote`] if its handler
    /// answered with an exception.
    pub fn call<M>(&self, input: &M::Input) -> Result<M::Output, RpcCallerError>
    where
        M: RpcMethod<Interface = I>,
    {
        let call_id = NEXT_CALL_ID.fetch_add(1, Ordering::Relaxed);
        let started = now();

        let mut reply = self.pool.obtain();
        self.transact(
            M::TRANSACTION_CODE,
            M::NAME,
            M::FLAGS & !FLAG_ONEWAY,
            |data| M::encode_request(input, data),
            &mut reply,
        )?;

        reply.read_exception()?.map_err(|status| {
            tracing::debug!(call_id, method = M::NAME, %status, "remote raised");
            RpcCallerError::Remote(status)
        })?;
        let output = M::decode_response(&mut reply)?;

        tracing::trace!(
            call_id,
            method = M::NAME,
            elapsed_us = now().saturating_sub(started),
            "call completed"
        );

        Ok(output)
    }

    /// Sends a one-way method. Returns once the transport has accepted the
    /// request; no reply is read.
    pub fn call_oneway<M>(&self, input: &M::Input) -> Result<(), RpcCallerError>
    where
        M: RpcMethod<Interface = I, Output = ()>,
    {
        let mut reply = self.pool.obtain();
        self.transact(
            M::TRANSACTION_CODE,
            M::NAME,
            M::FLAGS | FLAG_ONEWAY,
            |data| M::encode_request(input, data),
            &mut reply,
        )
    }

    /// The interface version the remote was built against.
    ///
    /// Only the first successful call reaches the remote; later calls, from
    /// any thread, return the cached value. Concurrent first calls share one
    /// round trip, and a failed or panicking fetch is retried by the next
    /// call.
    pub fn get_interface_version(&self) -> Result<i32, RpcCallerError> {
        self.cache.version_or_fetch(|| -> Result<i32, RpcCallerError> {
            let version = self.query_meta(
                GET_INTERFACE_VERSION_TRANSACTION,
                GET_INTERFACE_VERSION_NAME,
                Parcel::read_i32,
            )?;
            tracing::debug!(descriptor = I::DESCRIPTOR, version, "cached remote version");
            Ok(version)
        })
    }

    /// The interface hash the remote was built against. Cached like
    /// [`get_interface_version`](Self::get_interface_version).
    pub fn get_interface_hash(&self) -> Result<String, RpcCallerError> {
        self.cache.hash_or_fetch(|| -> Result<String, RpcCallerError> {
            let hash = self.query_meta(
                GET_INTERFACE_HASH_TRANSACTION,
                GET_INTERFACE_HASH_NAME,
                Parcel::read_non_null_string,
            )?;
            tracing::debug!(descriptor = I::DESCRIPTOR, %hash, "cached remote hash");
            Ok(hash)
        })
    }

    /// Asks the remote which interface it implements.
    pub fn remote_descriptor(&self) -> Result<Option<String>, RpcCallerError> {
        let mut reply = self.pool.obtain();
        self.transact(
            INTERFACE_TRANSACTION,
            INTERFACE_DESCRIPTOR_NAME,
            FLAG_NONE,
            |_| Ok(()),
            &mut reply,
        )?;

        Ok(reply.read_string()?)
    }

    /// Checks that the remote is alive and answering.
    pub fn ping(&self) -> Result<(), RpcCallerError> {
        let mut reply = self.pool.obtain();
        self.transact(PING_TRANSACTION, PING_NAME, FLAG_NONE, |_| Ok(()), &mut reply)
    }

    fn query_meta<T, F>(
        &self,
        code: TransactionCode,
        name: &'static str,
        read: F,
    ) -> Result<T, RpcCallerError>
    where
        F: FnOnce(&mut Parcel) -> Result<T, ParcelError>,
    {
        let mut reply = self.pool.obtain();
        self.transact(code, name, FLAG_NONE, |_| Ok(()), &mut reply)?;

        reply.read_exception()?.map_err(RpcCallerError::Remote)?;
        Ok(read(&mut *reply)?)
    }

    /// Builds the request (token included for method-range codes), sends it
    /// and leaves `reply` ready to read.
    fn transact<F>(
        &self,
        code: TransactionCode,
        name: &'static str,
        flags: TransactionFlags,
        write_args: F,
        reply: &mut Parcel,
    ) -> Result<(), RpcCallerError>
    where
        F: FnOnce(&mut Parcel) -> Result<(), ParcelError>,
    {
        let mut data = self.pool.obtain();
        if parcelwire_rpc_service::carries_interface_token(code) {
            data.write_interface_token(I::DESCRIPTOR)?;
        }
        write_args(&mut *data)?;

        tracing::trace!(code, method = name, flags, bytes = data.data_size(), "transact");

        if !self.remote.transact(code, &data, reply, flags)? {
            tracing::debug!(method = name, "remote does not implement transaction");
            return Err(RpcCallerError::Unimplemented { method: name });
        }

        Ok(())
    }
}
