use crate::add_test;
use crate::common::{assert_fixture, body_difference, colored_success, Fixture, FIXTURE_LEN};

// Test default invocation writes ../test/file.ppm relative to the working directory
add_test!(default_path, async {
    let fixture = Fixture::new();
    fixture.create_dir("work");
    fixture.create_dir("test");

    let output = fixture
        .run_in(&fixture.root_dir_path().join("work"), &[])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, colored_success("file.ppm"));
    assert!(output.stderr.is_empty());

    assert_fixture(&fixture.read("test/file.ppm"));
});

// Test explicit output path
add_test!(explicit_output, async {
    let fixture = Fixture::new();
    let target = fixture.path("custom.ppm");

    let output = fixture.run_gen_ppm(&["-o", &target]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, colored_success("custom.ppm"));

    assert_fixture(&fixture.read("custom.ppm"));
});

// Test two unseeded runs produce different bodies
add_test!(unseeded_runs_differ, async {
    let fixture = Fixture::new();
    let first = fixture.path("a.ppm");
    let second = fixture.path("b.ppm");

    assert!(fixture.run_gen_ppm(&["-o", &first]).await.status.success());
    assert!(fixture.run_gen_ppm(&["-o", &second]).await.status.success());

    let a = fixture.read("a.ppm");
    let b = fixture.read("b.ppm");
    assert_fixture(&a);
    assert_fixture(&b);
    assert!(body_difference(&a, &b) > FIXTURE_LEN / 2);
});

// Test seeded runs are byte-identical
add_test!(seeded_runs_match, async {
    let fixture = Fixture::new();
    let first = fixture.path("a.ppm");
    let second = fixture.path("b.ppm");

    let output = fixture.run_gen_ppm(&["-o", &first, "--seed", "7"]).await;
    assert!(output.status.success());
    let output = fixture.run_gen_ppm(&["-o", &second, "--seed", "7"]).await;
    assert!(output.status.success());

    assert!(fixture.read("a.ppm") == fixture.read("b.ppm"));
});
