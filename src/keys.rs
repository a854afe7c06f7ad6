use num_traits::{ToBytes, Unsigned};

/// Anything that can be walked through the tree one byte at a time.
///
/// Text keys are stored as their raw UTF-8 bytes with no terminator, so `"app"` is a strict
/// prefix of `"apple"` and the two share a path.
pub trait Key {
    fn as_slice(&self) -> &[u8];
}

impl Key for [u8] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Key for [u8; N] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl Key for Vec<u8> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl Key for str {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Key for String {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<K: Key + ?Sized> Key for &K {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        (**self).as_slice()
    }
}

/// Owns variable sized key data. Integers are encoded big-endian so that byte order matches
/// numeric order; signed integers have their sign bit flipped for the same reason.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedKey {
    data: Vec<u8>,
}

impl OwnedKey {
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: Vec::from(data),
        }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn from_unsigned<T: Unsigned + ToBytes>(un: T) -> Self {
        Self::from_slice(un.to_be_bytes().as_ref())
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Key for OwnedKey {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for OwnedKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

macro_rules! owned_key_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OwnedKey {
                fn from(data: $t) -> Self {
                    Self::from_unsigned(data)
                }
            }
        )*
    };
}

// -128 => 0x00, -1 => 0x7f, 0 => 0x80, 127 => 0xff
macro_rules! owned_key_from_signed {
    ($($t:ty => $u:ty),*) => {
        $(
            impl From<$t> for OwnedKey {
                fn from(val: $t) -> Self {
                    let flipped = (val as $u) ^ (1 << (<$u>::BITS - 1));
                    Self::from_unsigned(flipped)
                }
            }
        )*
    };
}

owned_key_from_unsigned!(u8, u16, u32, u64, u128, usize);
owned_key_from_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl From<&str> for OwnedKey {
    fn from(data: &str) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

impl From<String> for OwnedKey {
    fn from(data: String) -> Self {
        Self::from_vec(data.into_bytes())
    }
}

impl From<&String> for OwnedKey {
    fn from(data: &String) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

impl From<&[u8]> for OwnedKey {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<Vec<u8>> for OwnedKey {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}
