use aicoe_index_core::wheel::{parse_wheel_name, ArtifactName, WheelNameError};

struct TestCase {
    name: &'static str,
    filename: &'static str,
    expected: Result<ArtifactName, WheelNameError>,
}

fn artifact(
    distribution: &str,
    version: &str,
    build_tag: Option<&str>,
    python_tag: &str,
    abi_tag: &str,
    platform_tag: &str,
) -> ArtifactName {
    ArtifactName {
        distribution: distribution.into(),
        version: version.into(),
        build_tag: build_tag.map(Into::into),
        python_tag: python_tag.into(),
        abi_tag: abi_tag.into(),
        platform_tag: platform_tag.into(),
    }
}

#[test]
fn test_parse_wheel_name_table_driven() {
    let test_cases = vec![
        TestCase {
            name: "five fields, manylinux1",
            filename: "mypkg-1.0.0-cp36-cp36m-manylinux1_x86_64.whl",
            expected: Ok(artifact(
                "mypkg",
                "1.0.0",
                None,
                "cp36",
                "cp36m",
                "manylinux1_x86_64",
            )),
        },
        TestCase {
            name: "five fields, native linux tag still parses",
            filename: "mypkg-1.0.0-cp36-cp36m-linux_x86_64.whl",
            expected: Ok(artifact(
                "mypkg",
                "1.0.0",
                None,
                "cp36",
                "cp36m",
                "linux_x86_64",
            )),
        },
        TestCase {
            name: "six fields carry a build tag",
            filename: "tensorflow-1.13.1-1-cp36-cp36m-manylinux1_x86_64.whl",
            expected: Ok(artifact(
                "tensorflow",
                "1.13.1",
                Some("1"),
                "cp36",
                "cp36m",
                "manylinux1_x86_64",
            )),
        },
        TestCase {
            name: "underscored distribution name",
            filename: "tensorflow_gpu-2.0.0-cp37-cp37m-manylinux2010_x86_64.whl",
            expected: Ok(artifact(
                "tensorflow_gpu",
                "2.0.0",
                None,
                "cp37",
                "cp37m",
                "manylinux2010_x86_64",
            )),
        },
        TestCase {
            name: "not a wheel",
            filename: "notawheel.tar.gz",
            expected: Err(WheelNameError::NotAWheel),
        },
        TestCase {
            name: "wheel extension is case sensitive",
            filename: "mypkg-1.0.0-cp36-cp36m-manylinux1_x86_64.WHL",
            expected: Err(WheelNameError::NotAWheel),
        },
        TestCase {
            name: "missing tag fields",
            filename: "pkg_1.0.whl",
            expected: Err(WheelNameError::InvalidName),
        },
        TestCase {
            name: "four fields",
            filename: "mypkg-1.0.0-cp36-manylinux1_x86_64.whl",
            expected: Err(WheelNameError::InvalidName),
        },
        TestCase {
            name: "seven fields",
            filename: "my-pkg-1.0.0-1-cp36-cp36m-manylinux1_x86_64.whl",
            expected: Err(WheelNameError::InvalidName),
        },
        TestCase {
            name: "empty field",
            filename: "mypkg--cp36-cp36m-manylinux1_x86_64.whl",
            expected: Err(WheelNameError::InvalidName),
        },
        TestCase {
            name: "bare extension",
            filename: ".whl",
            expected: Err(WheelNameError::InvalidName),
        },
    ];

    for case in test_cases {
        let actual = parse_wheel_name(case.filename);
        assert_eq!(actual, case.expected, "case '{}' failed", case.name);
    }
}

#[test]
fn test_wheel_name_errors_render_operator_messages() {
    assert_eq!(WheelNameError::NotAWheel.to_string(), "not a wheel file");
    assert!(WheelNameError::InvalidName
        .to_string()
        .contains("does not correspond to Python naming standard"));
}
