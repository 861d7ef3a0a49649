use crate::RpcProxy;
use parcelwire::Transport;
use parcelwire_rpc_service::RpcInterface;
use std::fmt;
use std::sync::Arc;

/// A handle to an implementation of interface `I`, decided once at bind
/// time: either an in-process object (`L`, typically a trait object) called
/// directly, or a remote one reached through an [`RpcProxy`].
pub enum BoundInterface<L: ?Sized, I: RpcInterface> {
    Local(Arc<L>),
    Remote(RpcProxy<I>),
}

impl<L: ?Sized, I: RpcInterface> BoundInterface<L, I> {
    /// Prefers `local` when the object lives in this process, falling back
    /// to a proxy over `remote`.
    pub fn attach(local: Option<Arc<L>>, remote: Arc<dyn Transport>) -> Self {
        match local {
            Some(local) => BoundInterface::Local(local),
            None => BoundInterface::Remote(RpcProxy::new(remote)),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, BoundInterface::Local(_))
    }

    /// Collapses the binding into a single callable handle, wrapping the
    /// proxy with `wrap_remote` when the object is remote.
    pub fn resolve<F>(self, wrap_remote: F) -> Arc<L>
    where
        F: FnOnce(RpcProxy<I>) -> Arc<L>,
    {
        match self {
            BoundInterface::Local(local) => local,
            BoundInterface::Remote(proxy) => wrap_remote(proxy),
        }
    }
}

impl<L: ?Sized, I: RpcInterface> fmt::Debug for BoundInterface<L, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundInterface::Local(_) => write!(f, "BoundInterface::Local({})", I::DESCRIPTOR),
            BoundInterface::Remote(proxy) => f.debug_tuple("BoundInterface::Remote").field(proxy).finish(),
        }
    }
}
