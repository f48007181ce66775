/// Trait for reading a record field from one or more sentence fields.
///
/// Each decoder reads its named fields from fixed positions of the sentence.
/// A `FieldValue` receives the raw fields found at those positions and decides
/// whether it can hold them. Implementations are provided for:
///
/// - `String`: exactly one field
/// - `[String; N]`: exactly `N` fields, e.g. a value and its unit
/// - `heapless::Vec<String, N>`: up to `N` fields
/// - `Vec<String>`: any number of fields
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::FieldValue;
///
/// let fields = ["545.4".to_string(), "M".to_string()];
///
/// let altitude = <[String; 2]>::from_fields(&fields);
/// assert_eq!(altitude, Some(["545.4".to_string(), "M".to_string()]));
///
/// // A single value can't hold two fields
/// assert_eq!(String::from_fields(&fields), None);
/// ```
pub trait FieldValue: Sized {
    /// Builds the value from the raw fields at its positions.
    ///
    /// Returns [`None`] if `fields` does not hold the number of fields `Self` expects.
    fn from_fields(fields: &[String]) -> Option<Self>;
}

impl FieldValue for String {
    fn from_fields(fields: &[String]) -> Option<Self> {
        match fields {
            [field] => Some(field.clone()),
            _ => None,
        }
    }
}

impl<const N: usize> FieldValue for [String; N] {
    fn from_fields(fields: &[String]) -> Option<Self> {
        fields.to_vec().try_into().ok()
    }
}

impl<const N: usize> FieldValue for heapless::Vec<String, N> {
    fn from_fields(fields: &[String]) -> Option<Self> {
        heapless::Vec::from_slice(fields).ok()
    }
}

impl FieldValue for Vec<String> {
    fn from_fields(fields: &[String]) -> Option<Self> {
        Some(fields.to_vec())
    }
}
