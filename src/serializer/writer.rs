use primitive_types::U256;

/// Writer appending the wire encoding to a borrowed buffer
///
/// Integers are written big-endian. Strings are u8-length-prefixed UTF-8;
/// lengths above 255 are rejected by the callers that validate them.
pub struct Writer<'a> {
    bytes: &'a mut Vec<u8>,
}

impl<'a> Writer<'a> {
    pub fn new(bytes: &'a mut Vec<u8>) -> Self {
        Writer { bytes }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u32(&mut self, value: &u32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u64(&mut self, value: &u64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u128(&mut self, value: &u128) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a U256 as 32 big-endian bytes
    pub fn write_u256(&mut self, value: &U256) {
        // U256 consists of 4 x u64 limbs in little-endian order
        for limb in value.0.iter().rev() {
            self.write_u64(limb);
        }
    }

    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(u8::from(value));
    }

    /// Write raw bytes with no length prefix
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Write a u8-length-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) {
        debug_assert!(value.len() <= u8::MAX as usize);
        self.write_u8(value.len() as u8);
        self.write_bytes(value.as_bytes());
    }

    /// Bytes written so far
    pub fn total_write(&self) -> usize {
        self.bytes.len()
    }
}
