use crate::add_test;
use crate::common::{assert_fixture, Fixture};

// Test --no-color prints a plain line
add_test!(no_color, async {
    let fixture = Fixture::new();
    let target = fixture.path("plain.ppm");

    let output = fixture.run_gen_ppm(&["-o", &target, "--no-color"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Written random Data to plain.ppm!\n");
});

// Test -q hides the success line but keeps errors
add_test!(quiet_levels, async {
    let fixture = Fixture::new();
    let target = fixture.path("quiet.ppm");

    let output = fixture.run_gen_ppm(&["-q", "-o", &target]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_fixture(&fixture.read("quiet.ppm"));

    let missing = fixture.path("absent/quiet.ppm");
    let output = fixture.run_gen_ppm(&["-q", "-o", &missing]).await;
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());

    let output = fixture.run_gen_ppm(&["-qq", "-o", &missing]).await;
    assert!(!output.status.success());
    assert!(output.stderr.is_empty());
});

// Test -vv emits diagnostic logs on stderr only
add_test!(verbose_logs_to_stderr, async {
    let fixture = Fixture::new();
    let target = fixture.path("verbose.ppm");

    let output = fixture
        .run_gen_ppm(&["-vv", "--seed", "3", "-o", &target])
        .await;
    assert!(output.status.success());
    assert!(output.stderr.contains("seed 3"));
    assert!(output.stderr.contains("closed"));
    assert_eq!(output.stdout.lines().count(), 1);
});

// Test usage errors exit with clap's status
add_test!(invalid_seed, async {
    let fixture = Fixture::new();

    let output = fixture.run_gen_ppm(&["--seed", "not-a-number"]).await;
    assert_eq!(output.status.code(), Some(2));
    assert!(!fixture.file_exists("file.ppm"));
});

// Test --version
add_test!(version, async {
    let fixture = Fixture::new();

    let output = fixture.run_gen_ppm(&["--version"]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("gen-ppm "));
});
