/// A structured-data format that values can be encoded to and decoded from.
///
/// Per-type support is expressed through [`EncodeFor`] and [`DecodeFor`], so a
/// codec only has to say what its buffers look like and how it spells null.
pub trait Codec {
    type Data;
    type Error: std::error::Error + Send + Sync + 'static;

    fn encode<E: ?Sized>(&self, obj: &E) -> Result<Self::Data, Self::Error>
    where
        Self: EncodeFor<Self, E>,
    {
        <Self as EncodeFor<Self, E>>::encode(self, obj)
    }

    fn decode<D>(&self, data: &Self::Data) -> Result<D, Self::Error>
    where
        Self: DecodeFor<Self, D>,
    {
        <Self as DecodeFor<Self, D>>::decode(self, data)
    }

    /// Decodes `data` into `target`. `target` is untouched on failure.
    fn decode_into<D>(&self, data: &Self::Data, target: &mut D) -> Result<(), Self::Error>
    where
        Self: DecodeFor<Self, D>,
    {
        *target = self.decode(data)?;
        Ok(())
    }

    /// The null literal of the format.
    fn null(&self) -> Self::Data;

    /// True iff `data` is exactly the null literal.
    fn is_null(&self, data: &Self::Data) -> bool;
}

pub trait EncodeFor<C: Codec + ?Sized, E: ?Sized> {
    fn encode(codec: &C, obj: &E) -> Result<C::Data, C::Error>;
}

pub trait DecodeFor<C: Codec + ?Sized, D> {
    fn decode(codec: &C, data: &C::Data) -> Result<D, C::Error>;
}
