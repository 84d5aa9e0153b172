//! The [`Seekable`] trait: typed field access for records.

use crate::value::Value;

/// A record the engine can search, filter and sort.
///
/// Each record type names its queryable fields explicitly; anything not
/// listed answers [`Value::None`].
///
/// ```
/// use roster_seeker::{Number, Seekable, Value};
///
/// struct Client {
///     name: String,
///     rating: f64,
/// }
///
/// impl Seekable for Client {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "rating" => Value::Number(Number::F64(self.rating)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of `field`, or [`Value::None`] if the record has no
    /// such field.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Function-pointer form of [`Seekable::field_value`].
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}
