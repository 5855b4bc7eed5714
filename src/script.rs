/// An opaque serialized on-chain script.
///
/// The wrapped bytes are compiled into the crate and never parsed or
/// validated here. Consumers hand the value to a transaction builder or
/// ledger runtime, which is responsible for deserializing and evaluating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyScript(&'static [u8]);

impl PolicyScript {
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the script as lowercase hexadecimal, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for PolicyScript {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: PolicyScript = PolicyScript::new(&[0x48, 0x3a, 0x01, 0xc1]);

    #[test]
    fn exposes_bytes() {
        assert_eq!(SCRIPT.as_bytes(), &[0x48, 0x3a, 0x01, 0xc1]);
        assert_eq!(SCRIPT.as_ref(), SCRIPT.as_bytes());
        assert_eq!(SCRIPT.len(), 4);
        assert!(!SCRIPT.is_empty());
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(SCRIPT.to_hex(), "483a01c1");
        assert_eq!(PolicyScript::new(&[]).to_hex(), "");
    }
}
