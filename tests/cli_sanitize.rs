use std::process::Command;

#[test]
fn test_cli_sanitize_cases() {
    let bin = env!("CARGO_BIN_EXE_runner-docker-hook");
    for (input, want) in [
        ("", ""),
        ("123abc", "abc"),
        ("abc-def_42", "abcdef_42"),
        ("--weird--name", "weirdname"),
    ] {
        let out = Command::new(bin)
            .args(["sanitize", "--", input])
            .output()
            .expect("failed to run runner-docker-hook sanitize");
        assert!(
            out.status.success(),
            "sanitize {:?} exited non-zero: {:?}",
            input,
            out.status.code()
        );
        let got = String::from_utf8_lossy(&out.stdout);
        assert_eq!(got.trim_end_matches('\n'), want, "input {:?}", input);
    }
}
