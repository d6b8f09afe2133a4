//! service_macros 的 trybuild 编译测试

#[test]
fn trybuild_service_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_service.rs");
    t.pass("tests/trybuild/ok_provides.rs");
}
