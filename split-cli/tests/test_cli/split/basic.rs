use crate::add_test;
use crate::common::{generate_random_data, numbered_lines, Fixture, SAMPLE_TEXT};
use crate::KB;

// Test default mode: 1000 lines per file with prefix x
add_test!(default_thousand_lines, async {
    const FILE_NAME: &str = "data.txt";

    let data = numbered_lines(2500);
    let mut fixture = Fixture::with_file(FILE_NAME, &data);

    let output = fixture.run_cargo("split", &[FILE_NAME]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);
    assert!(output.stdout.is_empty());

    assert_eq!(fixture.output_names("x"), ["x00", "x01", "x02"]);
    assert_eq!(fixture.read_file("x00"), numbered_lines(1000));
    assert_eq!(fixture.joined_outputs("x"), data);
});

// Test line mode with a short last file
add_test!(line_mode, async {
    const FILE_NAME: &str = "data.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());

    let output = fixture.run_cargo("split", &["-l", "2", FILE_NAME]).await;
    assert!(output.status.success());

    assert_eq!(
        fixture.outputs("x"),
        [
            ("x00".to_string(), b"The quick brown fox\njumps over\n".to_vec()),
            ("x01".to_string(), b"the lazy dog\n".to_vec()),
        ]
    );
});

// Test byte mode with plain byte counts
add_test!(byte_mode, async {
    const FILE_NAME: &str = "data.bin";

    let data = generate_random_data(25);
    let mut fixture = Fixture::with_file(FILE_NAME, &data);

    let output = fixture.run_cargo("split", &["-b", "10", FILE_NAME]).await;
    assert!(output.status.success());

    let sizes: Vec<usize> = fixture.outputs("x").iter().map(|(_, c)| c.len()).collect();
    assert_eq!(sizes, [10, 10, 5]);
    assert_eq!(fixture.joined_outputs("x"), data);
});

// Test byte mode with the k suffix
add_test!(byte_mode_kilobytes, async {
    const FILE_NAME: &str = "data.bin";

    let data = generate_random_data(3 * KB - 100);
    let mut fixture = Fixture::with_file(FILE_NAME, &data);

    let output = fixture.run_cargo("split", &["-b", "1k", FILE_NAME]).await;
    assert!(output.status.success());

    let sizes: Vec<usize> = fixture.outputs("x").iter().map(|(_, c)| c.len()).collect();
    assert_eq!(sizes, [KB, KB, KB - 100]);
});

// Test custom output prefix and suffix length
add_test!(prefix_and_suffix_length, async {
    const FILE_NAME: &str = "data.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo("split", &["-a", "4", "-l", "1", FILE_NAME, "part_"])
        .await;
    assert!(output.status.success());

    assert_eq!(
        fixture.output_names("part_"),
        ["part_0000", "part_0001", "part_0002"]
    );
});

// Test splitting standard input in line mode
add_test!(stdin_lines, async {
    let data = numbered_lines(7);
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo_with_stdin("split", &["-l", "3"], &data)
        .await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    assert_eq!(fixture.output_names("x"), ["x00", "x01", "x02"]);
    assert_eq!(fixture.joined_outputs("x"), data);
});

// Test splitting standard input in byte mode
add_test!(stdin_bytes, async {
    let data = generate_random_data(4 * KB);
    let mut fixture = Fixture::new();

    let output = fixture
        .run_cargo_with_stdin("split", &["-b", "1000"], &data)
        .await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    let sizes: Vec<usize> = fixture.outputs("x").iter().map(|(_, c)| c.len()).collect();
    assert_eq!(sizes, [1000, 1000, 1000, 1000, 96]);
    assert_eq!(fixture.joined_outputs("x"), data);
});

// Test that outputs reassemble binary input exactly
add_test!(binary_round_trip, async {
    const FILE_NAME: &str = "random.bin";

    let data = generate_random_data(64 * KB);
    let mut fixture = Fixture::with_file(FILE_NAME, &data);

    // Random bytes contain newlines at random offsets
    let output = fixture
        .run_cargo("split", &["-l", "17", "-a", "3", FILE_NAME])
        .await;
    assert!(output.status.success());

    assert_eq!(fixture.joined_outputs("x"), data);
});
