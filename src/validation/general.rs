use log::debug;
use url::Url;

/// True when the input is absent, empty, or only whitespace
pub fn is_empty(value: Option<&str>) -> bool {
    match value {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

/// True when `min <= value <= max`; both bounds are inclusive.
///
/// Values that do not compare (e.g. `f64::NAN`) are out of range.
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value <= max
}

/// True when a sequence is present and holds at least one element
pub fn has_items<T>(items: Option<&[T]>) -> bool {
    items.map_or(false, |items| !items.is_empty())
}

/// True when a value is present
pub fn exists<T>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Check whether a string parses as an absolute URL.
///
/// Parse failures are reported as `false`, never as an error.
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(_) => true,
        Err(e) => {
            debug!("URL rejected: {}", e);
            false
        }
    }
}
