use mock_rewriter::core::rules::{BOUND_MOCKS_RULE, INLINE_MOCKS_RULE, SETUP_CALL};
use mock_rewriter::{rewrite, LocalStorage, ReplacementRule, RewriteEngine, RewriteError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const INLINE_BLOCK: &str = "\
\t\t\tmockPlanFeatureRepository.planHasFeature = mock(() => Promise.resolve(true))
\t\t\tmockCustomFieldRepository.hasUserPendingRequiredFields = mock(() => Promise.resolve(true))
";

const BOUND_BLOCK: &str = "\
\t\t\tconst planHasFeature = mock(() => Promise.resolve(true))
\t\t\tconst hasUserPendingRequiredFields = mock(() => Promise.resolve(true))
\t\t\tmockPlanFeatureRepository.planHasFeature = planHasFeature
\t\t\tmockCustomFieldRepository.hasUserPendingRequiredFields = hasUserPendingRequiredFields
";

const EXPECTED_CALL: &str = "\t\t\tsetupPendingCustomFieldsMocks()\n";

fn write_fixture(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("login.use-case.test.ts");
    fs::write(&path, content).unwrap();
    path
}

fn test_case(name: &str, body: &str) -> String {
    format!(
        "\t\ttest('{}', async () => {{\n{}\t\t\tconst result = await useCase.execute(validInput)\n\t\t}})\n",
        name, body
    )
}

#[test]
fn test_inline_block_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let input = test_case("pending fields", INLINE_BLOCK);
    let path = write_fixture(&temp_dir, &input);

    let report = rewrite(&path).unwrap();

    let output = fs::read_to_string(&path).unwrap();
    assert_eq!(output, test_case("pending fields", EXPECTED_CALL));
    assert_eq!(report.replacements_for(INLINE_MOCKS_RULE), Some(1));
    assert_eq!(report.replacements_for(BOUND_MOCKS_RULE), Some(0));
    assert!(report.changed);
}

#[test]
fn test_bound_block_is_replaced_and_bindings_removed() {
    let temp_dir = TempDir::new().unwrap();
    let input = test_case("pending fields", BOUND_BLOCK);
    let path = write_fixture(&temp_dir, &input);

    let report = rewrite(&path).unwrap();

    let output = fs::read_to_string(&path).unwrap();
    assert_eq!(output, test_case("pending fields", EXPECTED_CALL));
    assert!(!output.contains("const planHasFeature"));
    assert!(!output.contains("const hasUserPendingRequiredFields"));
    assert_eq!(report.replacements_for(BOUND_MOCKS_RULE), Some(1));
}

#[test]
fn test_every_occurrence_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let unrelated = "\t\t\tmockUserRepository.findByEmail = mock(() => Promise.resolve(createdUser))\n";

    let mut input = String::from("describe('LoginUseCase', () => {\n");
    let mut expected = input.clone();
    for i in 0..3 {
        let body = format!("{}{}", unrelated, INLINE_BLOCK);
        input.push_str(&test_case(&format!("case {}", i), &body));
        let body = format!("{}{}", unrelated, EXPECTED_CALL);
        expected.push_str(&test_case(&format!("case {}", i), &body));
    }
    input.push_str("})\n");
    expected.push_str("})\n");

    let path = write_fixture(&temp_dir, &input);
    let report = rewrite(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    assert_eq!(report.replacements_for(INLINE_MOCKS_RULE), Some(3));
    assert_eq!(report.total_replacements(), 3);
}

#[test]
fn test_file_without_blocks_is_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let input = test_case(
        "no mocks",
        "\t\t\tmockPlanFeatureRepository.planHasFeature = mock(() => Promise.resolve(false))\n",
    );
    let path = write_fixture(&temp_dir, &input);

    let report = rewrite(&path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), input.as_bytes());
    assert!(!report.changed);
    assert_eq!(report.total_replacements(), 0);
}

#[test]
fn test_second_run_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input = format!(
        "{}\n{}",
        test_case("inline", INLINE_BLOCK),
        test_case("bound", BOUND_BLOCK)
    );
    let path = write_fixture(&temp_dir, &input);

    rewrite(&path).unwrap();
    let once = fs::read(&path).unwrap();

    let report = rewrite(&path).unwrap();
    let twice = fs::read(&path).unwrap();

    assert_eq!(once, twice);
    assert!(!report.changed);
}

#[test]
fn test_missing_file_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.test.ts");

    let err = rewrite(&path).unwrap_err();

    assert!(err.is_not_found());
    assert!(!path.exists());
}

#[test]
fn test_non_utf8_file_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("binary.test.ts");
    let bytes = vec![0x74, 0x65, 0xff, 0xfe, 0x0a];
    fs::write(&path, &bytes).unwrap();

    let err = rewrite(&path).unwrap_err();

    assert!(matches!(err, RewriteError::DecodeError(_)));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_crlf_file_keeps_line_endings() {
    let temp_dir = TempDir::new().unwrap();
    let input = test_case("crlf", INLINE_BLOCK).replace('\n', "\r\n");
    let path = write_fixture(&temp_dir, &input);

    rewrite(&path).unwrap();

    let expected = test_case("crlf", EXPECTED_CALL).replace('\n', "\r\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_engine_with_custom_rules_relative_to_base() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("spy.test.ts"),
        "beforeEach(() => {\n  const verify = spyOn(PasswordUtils, 'verify')\n  verify.mockResolvedValue(true)\n})\n",
    )
    .unwrap();

    let rule = ReplacementRule::from_lines(
        "password-spy",
        &[
            "const verify = spyOn(PasswordUtils, 'verify')",
            "verify.mockResolvedValue(true)",
        ],
        SETUP_CALL,
    )
    .unwrap();
    let engine = RewriteEngine::new(LocalStorage::new(temp_dir.path()), vec![rule]);

    let report = engine.run("spy.test.ts".as_ref()).unwrap();

    assert_eq!(report.total_replacements(), 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("spy.test.ts")).unwrap(),
        "beforeEach(() => {\n  setupPendingCustomFieldsMocks()\n})\n"
    );
}
