use oiio_ffi::{
    extension_map, format_list, int_attribute, runtime_version, string_attribute, version,
};

#[test]
fn version_string_is_non_empty() {
    let version = version().expect("version string should be available");
    assert!(!version.is_empty(), "version string should not be empty");
    assert!(
        version.chars().next().is_some_and(|c| c.is_ascii_digit()),
        "version should start with a digit, got {version:?}"
    );
}

#[test]
fn runtime_version_has_nonzero_major() {
    let v = runtime_version();
    assert!(v.major > 0, "runtime major version should be > 0, got {v}");
}

#[test]
fn format_list_is_non_empty() {
    let formats = format_list().expect("format_list query should succeed");
    assert!(!formats.is_empty(), "library reports no supported formats");
    for name in &formats {
        assert!(!name.is_empty(), "format_list contains a blank entry");
    }
}

#[test]
fn extension_map_formats_are_known() {
    let formats = format_list().expect("format_list query should succeed");
    let map = extension_map().expect("extension_list query should succeed");
    assert!(!map.is_empty(), "library reports no format extensions");
    for entry in &map {
        assert!(
            formats.contains(&entry.format),
            "extension_list names {:?} which format_list does not",
            entry.format
        );
    }
}

#[test]
fn unknown_string_attribute_is_none() {
    let value = string_attribute("no_such_attribute").expect("query should succeed");
    assert_eq!(value, None, "unknown attribute should answer with None");
}

#[test]
fn threads_attribute_is_non_negative() {
    let threads = int_attribute("threads", -1).expect("query should succeed");
    assert!(threads >= 0, "threads attribute should be >= 0, got {threads}");
}
