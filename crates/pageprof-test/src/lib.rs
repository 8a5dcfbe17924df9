//! pageprof-test - Regression test support
//!
//! A small framework for the `tests/*_reg.rs` scenarios: each test
//! builds a [`RegParams`], records indexed comparisons against expected
//! values or rendered text, and gates on [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```
//! use pageprof_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(3.0, 3.0, 0.0);
//! assert!(rp.cleanup());
//! ```

/// Regression test state
///
/// Tracks the test name, the index of the current comparison, and
/// every failure recorded so far.
pub struct RegParams {
    test_name: String,
    index: usize,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a named regression test.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////   {}_reg   ////////////////", test_name);
        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Index of the most recent comparison.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two values, allowing a difference of up to `delta`.
    ///
    /// Returns `true` when the values match.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 expected = {}, actual = {}, allowed delta = {}",
                self.test_name, self.index, expected, actual, delta
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two text renderings byte for byte.
    ///
    /// Returns `true` when they are identical.
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected:\n{}\nactual:\n{}",
                self.test_name, self.index, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Check if all comparisons so far have passed.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Recorded failures.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Report the outcome and return overall success.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();
        self.success
    }
}
