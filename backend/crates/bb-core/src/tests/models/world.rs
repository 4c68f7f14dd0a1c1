use crate::World;

#[test]
fn test_world_name_accepts_directory_safe_names() {
    assert!(World::is_valid_name("hyperion"));
    assert!(World::is_valid_name("my-new_world2"));
    assert!(World::is_valid_name(&"a".repeat(64)));
}

#[test]
fn test_world_name_rejects_unsafe_names() {
    assert!(!World::is_valid_name(""));
    assert!(!World::is_valid_name(".."));
    assert!(!World::is_valid_name("a/b"));
    assert!(!World::is_valid_name("with space"));
    assert!(!World::is_valid_name(&"a".repeat(65)));
}
