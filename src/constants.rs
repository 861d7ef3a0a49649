// Transaction code space

/// First code available to interface methods.
pub const FIRST_CALL_TRANSACTION: u32 = 0x0000_0001;

/// Last code available to interface methods (top of the 24-bit range).
pub const LAST_CALL_TRANSACTION: u32 = 0x00FF_FFFF;

/// Reserved meta-method answering the interface version.
///
/// Occupies the highest code of the method range.
pub const GET_INTERFACE_VERSION_TRANSACTION: u32 = FIRST_CALL_TRANSACTION + 16_777_214;

/// Reserved meta-method answering the interface hash.
pub const GET_INTERFACE_HASH_TRANSACTION: u32 = FIRST_CALL_TRANSACTION + 16_777_213;

/// Highest transaction id a generated interface may use.
pub const MAX_TRANSACTION_ID: u32 = 16_777_214;

/// Descriptor handshake (`'_NTF'`). Lives outside the method range and is
/// answered without an interface token.
pub const INTERFACE_TRANSACTION: u32 = u32::from_be_bytes(*b"_NTF");

/// Liveness probe (`'_PNG'`), answered with an empty successful reply.
pub const PING_TRANSACTION: u32 = u32::from_be_bytes(*b"_PNG");

// Transaction flags

/// Normal, two-way call.
pub const FLAG_NONE: u32 = 0x00;

/// Fire-and-forget call; the receiver writes no reply.
pub const FLAG_ONEWAY: u32 = 0x01;

// Parcel layout

/// Every write is padded to this boundary.
pub const PARCEL_ALIGNMENT: usize = 4;

/// Size in bytes of the length prefix at the start of every envelope.
///
/// A declared envelope length below this value is malformed, since the
/// length field alone already occupies these bytes.
pub const ENVELOPE_LENGTH_FIELD_SIZE: usize = 4;

/// Length (or count) written in place of a null string or array.
pub const NULL_LENGTH_SENTINEL: i32 = -1;

/// Presence marker written before a nullable structured value.
pub const TYPED_OBJECT_ABSENT: i32 = 0;
pub const TYPED_OBJECT_PRESENT: i32 = 1;

/// Smallest encoded size of any array element, used to reject impossible
/// counts before allocating.
pub const MIN_ELEMENT_WIRE_SIZE: usize = 4;

/// Number of recycled parcels a pool keeps around.
pub const DEFAULT_PARCEL_POOL_SIZE: usize = 6;
