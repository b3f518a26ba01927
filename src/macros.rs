/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// Keys must be string literals. Scalars go through `Value::from`, so any
/// expression with a `From` conversion works. Negative numbers and other
/// multi-token expressions must be parenthesized when nested.
///
/// # Examples
///
/// ```rust
/// use objson::{value, Value};
///
/// let v = value!({
///     "name": "Alice",
///     "scores": [1, (-2.5), null],
///     "admin": false
/// });
/// assert_eq!(v.get("name"), Some(&Value::from("Alice")));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
