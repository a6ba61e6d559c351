use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};

// Test --verbose reports each created file on stderr only
add_test!(verbose_reports_files, async {
    const FILE_NAME: &str = "data.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("split", &["--verbose", "-l", "2", FILE_NAME])
        .await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, "creating file 'x00'\ncreating file 'x01'\n");
});

// Test --debug prints the resolved settings
add_test!(debug_prints_settings, async {
    const FILE_NAME: &str = "data.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("split", &["--debug", "-b", "2k", FILE_NAME, "out"])
        .await;
    assert!(output.status.success());
    assert!(output.stderr.contains("mode=bytes chunk_size=2048 suffix_length=2 input=data.txt prefix=out"));
    assert!(fixture.file_exists("out00"));
});

// Test --help and --version succeed without splitting
add_test!(help_and_version, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("split", &["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("Usage"));
    assert!(output.stdout.contains("-b N[k|m]"));

    let output = fixture.run_cargo("split", &["--version"]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("split "));

    assert!(fixture.output_names("x").is_empty());
});

// Test -l combined with -b is rejected
add_test!(conflicting_modes, async {
    const FILE_NAME: &str = "data.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("split", &["-l", "10", "-b", "10", FILE_NAME])
        .await;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        output.stderr,
        "split: cannot split in more than one way\nTry 'split --help' for more information.\n"
    );
    assert!(fixture.output_names("x").is_empty());
});

// Test repeating -l is rejected
add_test!(repeated_line_option, async {
    let mut fixture = Fixture::with_file("data.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("split", &["-l", "1", "-l", "2", "data.txt"])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.starts_with("split: cannot split in more than one way"));
});

// Test an option without its value
add_test!(missing_option_argument, async {
    let mut fixture = Fixture::with_file("data.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run_cargo("split", &["data.txt", "-l"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.starts_with("split: option requires an argument -- 'l'"));
});

// Test malformed option values
add_test!(invalid_values, async {
    let mut fixture = Fixture::with_file("data.txt", SAMPLE_TEXT.as_bytes());

    let cases: [(&[&str], &str); 5] = [
        (&["-b", "5kk", "data.txt"], "split: invalid number of bytes: '5kk'"),
        (&["-b", "k5", "data.txt"], "split: invalid number of bytes: 'k5'"),
        (&["-l", "ten", "data.txt"], "split: invalid number of lines: 'ten'"),
        (&["-a", "0", "data.txt"], "split: invalid suffix length: '0'"),
        (
            &["-a", "10000000000", "data.txt"],
            "split: invalid suffix length: '10000000000'",
        ),
    ];

    for (args, message) in cases {
        let output = fixture.run_cargo("split", args).await;
        assert!(!output.status.success(), "args: {args:?}");
        assert!(output.stderr.starts_with(message), "stderr: {}", output.stderr);
    }
    assert!(fixture.output_names("x").is_empty());
});

// Test a third operand is rejected before any file is written
add_test!(extra_operand, async {
    let mut fixture = Fixture::with_file("data.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("split", &["data.txt", "out", "three"])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.starts_with("split: extra operand 'three'"));
    assert!(fixture.output_names("out").is_empty());
});

// Test operands outside the accepted name shape
add_test!(invalid_operand, async {
    let mut fixture = Fixture::with_file("data.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run_cargo("split", &["data.txt", "out-put"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.starts_with("split: invalid operand 'out-put'"));
});
