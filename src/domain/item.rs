/// A single cache entry as stored by the backing client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub value: Vec<u8>,
    /// Opaque server-side flags, chosen by the caller.
    pub flags: u32,
    /// Cache expiration in seconds: either a relative offset from now or an
    /// absolute unix timestamp. Zero means no expiration.
    pub expiration: i32,
    /// Compare-and-swap token, set by the client on reads.
    pub cas: Option<u64>,
}

impl Item {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_expiration(mut self, expiration: i32) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_cas(mut self, cas: u64) -> Self {
        self.cas = Some(cas);
        self
    }
}
