use crate::{Args, UNNAMED_ARG};

#[test]
fn test_args_unnamed_reads_reserved_key() {
    let args: Args = [(UNNAMED_ARG, "hyperion")].into_iter().collect();

    assert_eq!(args.unnamed(), Some("hyperion"));
    assert_eq!(args.get("name"), None);
}

#[test]
fn test_args_positive_usize() {
    let args: Args = [("l", "10"), ("o", "0"), ("x", "-3"), ("y", "abc")]
        .into_iter()
        .collect();

    assert_eq!(args.positive_usize("l"), Some(10));
    assert_eq!(args.positive_usize("o"), None);
    assert_eq!(args.positive_usize("x"), None);
    assert_eq!(args.positive_usize("y"), None);
    assert_eq!(args.positive_usize("missing"), None);
}

#[test]
fn test_args_insert_overwrites() {
    let mut args = Args::new();
    args.insert("l", "1");
    args.insert("l", "2");

    assert_eq!(args.get("l"), Some("2"));
    assert_eq!(args.len(), 1);
}
