use crate::{
    Error, Result,
    codec::{Codec, DecodeFor, EncodeFor},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A value that may be absent, kept apart from a present zero value.
///
/// `value` only carries meaning while `valid` is true. An absent instance holds
/// `T::default()` unless its fields were assigned directly.
///
/// Serialized, the wrapper is transparent: a present value is written as a bare
/// `T` and an absent one as the format's null.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Nullable<T> {
    pub fn new(value: T, valid: bool) -> Self {
        Nullable { value, valid }
    }

    pub fn null() -> Self
    where
        T: Default,
    {
        Nullable {
            value: T::default(),
            valid: false,
        }
    }

    /// Copies the referenced value, if any. The result never borrows from `value`.
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone + Default,
    {
        match value {
            Some(v) => Nullable::new(v.clone(), true),
            None => Nullable::null(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }

    /// Overwrites `self` from `data`.
    ///
    /// The exact null literal of the codec makes `self` absent. Anything else
    /// must decode as a `T`. On error `self` is left as it was.
    pub fn decode<C>(&mut self, codec: &C, data: &C::Data) -> Result<()>
    where
        C: Codec + DecodeFor<C, T>,
        T: Default,
    {
        if codec.is_null(data) {
            *self = Nullable::null();
            return Ok(());
        }

        let value: T = codec.decode(data).map_err(Error::decode)?;
        *self = Nullable::new(value, true);
        Ok(())
    }

    /// Encodes the value, or the codec's null literal when absent. Codec errors
    /// are returned as is.
    pub fn encode<C>(&self, codec: &C) -> std::result::Result<C::Data, C::Error>
    where
        C: Codec + EncodeFor<C, T>,
    {
        if !self.valid {
            return Ok(codec.null());
        }
        codec.encode(&self.value)
    }
}

impl<T: Default> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::null()
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::new(v, true),
            None => Nullable::null(),
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (false, false) => true,
            (true, true) => self.value == other.value,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if !self.valid {
            return serializer.serialize_none();
        }
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer).map_err(|e| {
            <D::Error as de::Error>::custom(format_args!("nullable: couldn't decode value: {e}"))
        })?;
        Ok(value.into())
    }
}
