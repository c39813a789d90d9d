/// Builds a [`RecordMap`](crate::RecordMap) with fields in the order written.
///
/// ```rust
/// use docrecord::{record, RecordValue};
///
/// let rec = record! {
///     "number" => RecordValue::quoted("1.0.0"),
///     "modules" => RecordValue::List(vec![]),
/// };
/// let keys: Vec<_> = rec.keys().map(String::as_str).collect();
/// assert_eq!(keys, vec!["number", "modules"]);
/// ```
#[macro_export]
macro_rules! record {
    // Handle empty record
    () => {
        $crate::RecordMap::new()
    };

    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut record = $crate::RecordMap::new();
        $(
            record.insert($key, $crate::RecordValue::from($value));
        )+
        record
    }};
}
