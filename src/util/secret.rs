use std::sync::Arc;
use zeroize::*;

/// Shared secret bytes as produced by a key agreement.
///
/// The memory is wiped when the last clone is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Arc<Vec<u8>>);

impl Secret {
    pub fn new(x: &[u8]) -> Self {
        Self(Arc::new(x.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Secret {
    fn from(x: Vec<u8>) -> Self {
        Self(Arc::new(x))
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(")?;
        for i in self.0.as_ref() {
            write!(f, "{:02x}", i)?;
        }
        write!(f, ")")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        if let Some(x) = Arc::get_mut(&mut self.0) {
            x.zeroize()
        }
    }
}
