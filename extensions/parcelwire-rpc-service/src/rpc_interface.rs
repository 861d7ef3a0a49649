/// The compile-time identity of a versioned interface.
///
/// `VERSION` and `HASH` are what a server answers to the reserved version
/// and hash queries, letting a client find out which revision of the
/// interface the remote was built against.
pub trait RpcInterface: 'static {
    /// Interface token written at the head of every request.
    const DESCRIPTOR: &'static str;

    const VERSION: i32;

    /// Digest of the frozen interface definition.
    const HASH: &'static str;

    fn identity() -> InterfaceIdentity {
        InterfaceIdentity {
            descriptor: Self::DESCRIPTOR,
            version: Self::VERSION,
            hash: Self::HASH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceIdentity {
    pub descriptor: &'static str,
    pub version: i32,
    pub hash: &'static str,
}
