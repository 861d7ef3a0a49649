use parcelwire::{Parcel, TransactionCode, TransactionFlags, Transport, TransportError};
use parcelwire_rpc_service::RpcInterface;
use parcelwire_rpc_service_endpoint::RpcServiceEndpoint;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Byte and call counters collected by a [`WireTap`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WireStats {
    pub transactions: u64,
    pub request_bytes: u64,
    pub reply_bytes: u64,
}

/// In-process transport that forwards to an endpoint and logs every
/// transaction by name.
pub struct WireTap<I, C>
where
    I: RpcInterface,
    C: Send + Sync + 'static,
{
    endpoint: Arc<RpcServiceEndpoint<I, C>>,
    transactions: AtomicU64,
    request_bytes: AtomicU64,
    reply_bytes: AtomicU64,
}

impl<I, C> WireTap<I, C>
where
    I: RpcInterface,
    C: Send + Sync + 'static,
{
    pub fn new(endpoint: Arc<RpcServiceEndpoint<I, C>>) -> Self {
        Self {
            endpoint,
            transactions: AtomicU64::new(0),
            request_bytes: AtomicU64::new(0),
            reply_bytes: AtomicU64::new(0),
        }
    }

    pub fn endpoint(&self) -> &Arc<RpcServiceEndpoint<I, C>> {
        &self.endpoint
    }

    pub fn stats(&self) -> WireStats {
        WireStats {
            transactions: self.transactions.load(Ordering::Relaxed),
            request_bytes: self.request_bytes.load(Ordering::Relaxed),
            reply_bytes: self.reply_bytes.load(Ordering::Relaxed),
        }
    }
}

impl<I, C> Transport for WireTap<I, C>
where
    I: RpcInterface,
    C: Send + Sync + 'static,
{
    fn transact(
        &self,
        code: TransactionCode,
        data: &Parcel,
        reply: &mut Parcel,
        flags: TransactionFlags,
    ) -> Result<bool, TransportError> {
        let method = self.endpoint.transaction_name(code).unwrap_or("?");
        let result = self.endpoint.transact(code, data, reply, flags);

        self.transactions.fetch_add(1, Ordering::Relaxed);
        self.request_bytes
            .fetch_add(data.data_size() as u64, Ordering::Relaxed);
        self.reply_bytes
            .fetch_add(reply.data_size() as u64, Ordering::Relaxed);

        match &result {
            Ok(handled) => tracing::debug!(
                code,
                method,
                flags,
                request = data.data_size(),
                reply = reply.data_size(),
                handled,
                "transaction"
            ),
            Err(e) => tracing::warn!(code, method, error = %e, "transaction failed"),
        }

        result
    }
}
