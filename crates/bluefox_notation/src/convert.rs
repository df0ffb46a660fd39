//! Conversions between user record types and [`Data`].

use crate::array::Array;
use crate::data::Data;
use crate::error::{Error, ErrorKind, Result};
use crate::value::Value;

/// A type that can be written out as a data map.
pub trait IntoData {
    /// Converts `self` into a data map.
    fn into_data(self) -> Data;
}

/// A type that can be read back from a data map.
pub trait FromData: Sized {
    /// Builds `Self` from the entries of `data`.
    fn from_data(data: &Data) -> Result<Self>;
}

impl IntoData for Data {
    fn into_data(self) -> Data {
        self
    }
}

impl FromData for Data {
    fn from_data(data: &Data) -> Result<Self> {
        Ok(data.clone())
    }
}

impl Data {
    /// Borrows a required record field.
    ///
    /// Like [`Data::get`], but absence is reported as a missing field.
    pub fn field(&self, name: &str) -> Result<&Value> {
        self.get(name).map_err(|err| match err.kind {
            ErrorKind::KeyNotFound(key) => Error::missing_field(key),
            _ => err,
        })
    }

    /// Reads `Self` back into a record type.
    pub fn decode<T: FromData>(&self) -> Result<T> {
        T::from_data(self)
    }
}

impl Array {
    /// Builds an array holding one data value per record, in iteration order.
    pub fn from_records<T, I>(records: I) -> Self
    where
        T: IntoData,
        I: IntoIterator<Item = T>,
    {
        records
            .into_iter()
            .map(|record| Value::Data(record.into_data()))
            .collect()
    }

    /// Reads every element back as a record.
    ///
    /// Fails on the first element that is not data or does not decode.
    pub fn decode_records<T: FromData>(&self) -> Result<Vec<T>> {
        self.iter()
            .map(|value| value.get_data().and_then(T::from_data))
            .collect()
    }
}
