use core::fmt::Debug;

use serde::de::DeserializeOwned;

/// Asserts that the given string deserializes to the expected value.
#[track_caller]
pub fn test_deserialization<T>(str: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    let got = serde_json::from_str::<T>(str).unwrap();
    pretty_assertions::assert_eq!(got, expected);
}
