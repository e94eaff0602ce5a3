//! End-to-end integration tests
//!
//! These tests run the complete export pipeline against recorded service
//! responses. Each fixture directory under tests/fixtures/ contains:
//! - `groups.json` - body of a `get_groups` response
//! - `expenses_<group id>.json` - body of a `get_expenses` response for that group
//! - `expected.csv` / `expected_standard.csv` - expected export per quoting mode
//!
//! The fixture service decodes the bodies with the same functions the HTTP
//! client uses, so the payload shapes are exercised as well.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use splitwise_export::cli::QuoteMode;
    use splitwise_export::client::{parse_expenses, parse_groups};
    use splitwise_export::core::EXPENSE_FETCH_LIMIT;
    use splitwise_export::{
        Expense, ExpenseExporter, ExpenseService, ExportError, ExportOutcome, Group, GroupId,
    };
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Service backed by a fixture directory
    struct FixtureService {
        dir: PathBuf,
        requests: RefCell<Vec<(GroupId, usize)>>,
    }

    impl FixtureService {
        fn new(fixture_name: &str) -> Self {
            let dir = PathBuf::from(format!("tests/fixtures/{}", fixture_name));
            assert!(dir.is_dir(), "Fixture directory not found: {}", dir.display());
            FixtureService {
                dir,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn read(&self, file_name: &str) -> String {
            let path = self.dir.join(file_name);
            fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
        }
    }

    impl ExpenseService for FixtureService {
        fn list_groups(&self) -> Result<Vec<Group>, ExportError> {
            parse_groups(&self.read("groups.json"))
        }

        fn list_expenses(
            &self,
            group_id: GroupId,
            limit: usize,
        ) -> Result<Vec<Expense>, ExportError> {
            self.requests.borrow_mut().push((group_id, limit));
            let mut expenses = parse_expenses(&self.read(&format!("expenses_{}.json", group_id)))?;
            expenses.truncate(limit);
            Ok(expenses)
        }
    }

    /// Run a fixture and compare the written file with the expected output
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read, the export fails, or the
    /// output differs from the expected file.
    fn run_test_fixture(
        fixture_name: &str,
        group_name: &str,
        mode: QuoteMode,
        expected_file: &str,
    ) -> FixtureService {
        let service = FixtureService::new(fixture_name);
        let expected_output = service.read(expected_file);

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = temp_dir.path().join("expenses.csv");

        let outcome = ExpenseExporter::new(&output_path, mode)
            .export(&service, group_name)
            .unwrap_or_else(|e| panic!("Failed to export {}: {}", fixture_name, e));

        let actual_output = fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("Failed to read exported file: {}", e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (quoting: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, mode, actual_output, expected_output
        );

        let data_lines = expected_output.lines().count() - 1;
        assert_eq!(outcome, ExportOutcome::Saved { count: data_lines });

        service
    }

    #[rstest]
    #[case::single_dinner("single_dinner", "Rent", QuoteMode::Raw, "expected.csv")]
    #[case::multiple_expenses("multiple_expenses", "Lisbon 2024", QuoteMode::Raw, "expected.csv")]
    #[case::multiple_expenses_standard(
        "multiple_expenses",
        "Lisbon 2024",
        QuoteMode::Standard,
        "expected_standard.csv"
    )]
    #[case::duplicate_group_names("duplicate_group_names", "Rent", QuoteMode::Raw, "expected.csv")]
    #[case::embedded_quote_raw("embedded_quote", "Friday dinners", QuoteMode::Raw, "expected.csv")]
    #[case::embedded_quote_standard(
        "embedded_quote",
        "Friday dinners",
        QuoteMode::Standard,
        "expected_standard.csv"
    )]
    #[case::empty_group("empty_group", "Gym", QuoteMode::Raw, "expected.csv")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] group_name: &str,
        #[case] mode: QuoteMode,
        #[case] expected_file: &str,
    ) {
        let service = run_test_fixture(fixture, group_name, mode, expected_file);

        let requests = service.requests.borrow();
        assert_eq!(requests.len(), 1, "expected exactly one expenses request");
        assert_eq!(requests[0].1, EXPENSE_FETCH_LIMIT);
    }

    #[test]
    fn test_duplicate_group_names_uses_first_match() {
        let service = run_test_fixture("duplicate_group_names", "Rent", QuoteMode::Raw, "expected.csv");
        assert_eq!(service.requests.borrow()[0].0, 5);
    }

    #[rstest]
    #[case::unknown_name("single_dinner", "Gym")]
    #[case::wrong_case("single_dinner", "rent")]
    #[case::partial_name("multiple_expenses", "Lisbon")]
    fn test_group_not_found(#[case] fixture: &str, #[case] group_name: &str) {
        let service = FixtureService::new(fixture);
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("expenses.csv");

        let outcome = ExpenseExporter::new(&output_path, QuoteMode::Raw)
            .export(&service, group_name)
            .unwrap();

        assert_eq!(outcome, ExportOutcome::GroupNotFound);
        assert!(service.requests.borrow().is_empty());
        assert!(!output_path.exists());
    }

    #[test]
    fn test_missing_category_aborts_before_writing() {
        let service = FixtureService::new("missing_category");
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("expenses.csv");

        let result = ExpenseExporter::new(&output_path, QuoteMode::Raw).export(&service, "Office");

        match result {
            Err(ExportError::Decode { endpoint, message }) => {
                assert_eq!(endpoint, "get_expenses");
                assert!(message.contains("category"), "unexpected message: {}", message);
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
        assert!(!output_path.exists());
    }

    // Known defect of the raw format: the embedded quotes in expense 81 are
    // written unescaped and a standard CSV reader does not recover them.
    #[test]
    fn test_embedded_quote_raw_export_does_not_round_trip() {
        let service = FixtureService::new("embedded_quote");
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("expenses.csv");

        ExpenseExporter::new(&output_path, QuoteMode::Raw)
            .export(&service, "Friday dinners")
            .unwrap();

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let first = reader.records().next().and_then(Result::ok);
        let description = first.as_ref().and_then(|record| record.get(1));
        assert_ne!(description, Some("Pizza at \"Da Michele\""));
    }
}
