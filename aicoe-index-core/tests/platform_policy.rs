use aicoe_index_core::policy::{PlatformPolicy, DEFAULT_PLATFORM_TAG};
use aicoe_index_core::wheel::parse_wheel_name;

#[test]
fn test_default_policy_accepts_only_manylinux1() {
    let policy = PlatformPolicy::default();
    assert_eq!(policy.allowed_tags().collect::<Vec<_>>(), vec![DEFAULT_PLATFORM_TAG]);

    let ok = parse_wheel_name("mypkg-1.0.0-cp36-cp36m-manylinux1_x86_64.whl").unwrap();
    assert!(policy.check(&ok).is_ok());

    let native = parse_wheel_name("mypkg-1.0.0-cp36-cp36m-linux_x86_64.whl").unwrap();
    let violation = policy.check(&native).unwrap_err();
    assert_eq!(violation.found, "linux_x86_64");
    assert_eq!(violation.allowed, vec![DEFAULT_PLATFORM_TAG.to_string()]);
}

#[test]
fn test_configured_policy_accepts_every_listed_tag() {
    let mut policy = PlatformPolicy::new(["manylinux2010_x86_64"]);
    policy.allow("manylinux2014_x86_64");

    let gen2010 = parse_wheel_name("mypkg-1.0-cp37-cp37m-manylinux2010_x86_64.whl").unwrap();
    let gen2014 = parse_wheel_name("mypkg-1.0-cp37-cp37m-manylinux2014_x86_64.whl").unwrap();
    let gen1 = parse_wheel_name("mypkg-1.0-cp37-cp37m-manylinux1_x86_64.whl").unwrap();

    assert!(policy.check(&gen2010).is_ok());
    assert!(policy.check(&gen2014).is_ok());
    assert!(policy.check(&gen1).is_err());
}

#[test]
fn test_empty_policy_rejects_everything() {
    let policy = PlatformPolicy::new(Vec::<String>::new());
    let artifact = parse_wheel_name("mypkg-1.0.0-cp36-cp36m-manylinux1_x86_64.whl").unwrap();
    assert!(policy.check(&artifact).is_err());
}
