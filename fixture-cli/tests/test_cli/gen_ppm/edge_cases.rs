use crate::add_test;
use crate::common::{assert_fixture, Fixture, FIXTURE_LEN};

// Test missing target directory fails without creating anything
add_test!(missing_directory, async {
    let fixture = Fixture::new();
    let target = fixture.path("absent/file.ppm");

    let output = fixture.run_gen_ppm(&["-o", &target]).await;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.starts_with("gen-ppm: "));
    assert!(output.stderr.contains("cannot create output file"));
    assert_eq!(output.stderr.lines().count(), 1);
    assert!(!fixture.file_exists("absent"));
});

// Test default path fails cleanly when ../test is missing
add_test!(default_path_without_test_dir, async {
    let fixture = Fixture::new();
    fixture.create_dir("work");

    let output = fixture
        .run_in(&fixture.root_dir_path().join("work"), &[])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("file.ppm"));
    assert!(!fixture.file_exists("test"));
});

// Test an existing larger file is fully overwritten
add_test!(overwrites_larger_file, async {
    let fixture = Fixture::with_file("file.ppm", &vec![0xFF; 3 * FIXTURE_LEN]);
    let target = fixture.path("file.ppm");

    let output = fixture.run_gen_ppm(&["-o", &target]).await;
    assert!(output.status.success());
    assert_fixture(&fixture.read("file.ppm"));

    let output = fixture.run_gen_ppm(&["-o", &target]).await;
    assert!(output.status.success());
    assert_eq!(fixture.read("file.ppm").len(), FIXTURE_LEN);
});

// Test a directory as target is rejected
add_test!(directory_target, async {
    let fixture = Fixture::new();
    fixture.create_dir("dir.ppm");
    let target = fixture.path("dir.ppm");

    let output = fixture.run_gen_ppm(&["-o", &target]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
});
